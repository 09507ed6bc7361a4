//! The todo list controller.
//!
//! [`TodoList`] owns the items, the pending input text and the active filter.
//! Every operation is total: submitting empty text or naming an id that does
//! not exist leaves the list untouched.
//!
//! Operations can also be expressed as [`Action`] values, which is how the
//! component accepts programmatic updates through its message loop.

use super::types::{Filter, TodoId, TodoItem};
use tracing::{debug, trace};

/// Per-status item totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Items that are not removed.
    pub active: usize,
    /// Items that are done and not removed.
    pub completed: usize,
    /// Items that are open and not removed.
    pub incomplete: usize,
    /// Items in the trash.
    pub removed: usize,
}

impl Counts {
    /// The number of items a filter would show.
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.active,
            Filter::Completed => self.completed,
            Filter::Incomplete => self.incomplete,
            Filter::RemovedOnly => self.removed,
        }
    }
}

/// Authoritative state of a todo list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_todo::todo::{Filter, TodoList};
///
/// let mut list = TodoList::new();
/// list.set_pending_text("buy milk");
/// let id = list.submit().unwrap();
///
/// list.toggle_done(id);
/// assert_eq!(list.visible_items_for(Filter::Incomplete).count(), 0);
/// assert_eq!(list.visible_items_for(Filter::Completed).count(), 1);
///
/// list.toggle_removed(id);
/// list.set_filter(Filter::RemovedOnly);
/// assert_eq!(list.visible_items().count(), 1);
///
/// list.purge_removed();
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    pending_text: String,
    active_filter: Filter,
    next_id: u64,
}

impl TodoList {
    /// Creates an empty list with no pending text and the `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from item texts, in display order (first text on top).
    ///
    /// Ids are assigned as if the texts had been submitted bottom to top, so
    /// the first text is also the newest. Empty texts are skipped, as
    /// [`submit`](Self::submit) would skip them.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts
            .into_iter()
            .map(Into::into)
            .filter(|text: &String| !text.is_empty())
            .collect();
        let mut list = Self::new();
        for text in texts.into_iter().rev() {
            list.insert(text);
        }
        list
    }

    /// Submits the pending text as a new item.
    ///
    /// Does nothing and returns `None` when the pending text is empty.
    /// Otherwise the new item is placed first, the pending text is cleared and
    /// the new id is returned.
    pub fn submit(&mut self) -> Option<TodoId> {
        if self.pending_text.is_empty() {
            trace!("submit ignored: pending text is empty");
            return None;
        }
        let text = std::mem::take(&mut self.pending_text);
        Some(self.insert(text))
    }

    fn insert(&mut self, text: String) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        debug!(id = id.get(), text = %text, "todo added");
        self.items.insert(0, TodoItem::new(id, text));
        id
    }

    /// Replaces the pending input text.
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Replaces the text of an item.
    ///
    /// The list does not check `done` or `removed` here; callers that present
    /// the list to a user are expected to refuse edits on such items (see
    /// [`TodoItem::is_editable`]).
    pub fn edit(&mut self, id: TodoId, text: impl Into<String>) {
        match self.get_mut(id) {
            Some(item) => {
                item.text = text.into();
                debug!(id = id.get(), "todo edited");
            }
            None => trace!(id = id.get(), "edit ignored: no such item"),
        }
    }

    /// Flips the done flag of an item.
    pub fn toggle_done(&mut self, id: TodoId) {
        match self.get_mut(id) {
            Some(item) => {
                item.done = !item.done;
                debug!(id = id.get(), done = item.done, "todo toggled");
            }
            None => trace!(id = id.get(), "toggle_done ignored: no such item"),
        }
    }

    /// Flips the removed flag of an item: moves it to the trash or restores it.
    pub fn toggle_removed(&mut self, id: TodoId) {
        match self.get_mut(id) {
            Some(item) => {
                item.removed = !item.removed;
                debug!(id = id.get(), removed = item.removed, "todo trashed or restored");
            }
            None => trace!(id = id.get(), "toggle_removed ignored: no such item"),
        }
    }

    /// Permanently drops every removed item and returns how many went.
    pub fn purge_removed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.removed);
        let purged = before - self.items.len();
        debug!(purged, "trash emptied");
        purged
    }

    /// Sets the active filter.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.active_filter {
            debug!(from = %self.active_filter, to = %filter, "filter changed");
        }
        self.active_filter = filter;
    }

    /// Items admitted by the active filter, in list order.
    ///
    /// The iterator is lazy and can be cloned to walk the view again.
    pub fn visible_items(&self) -> impl Iterator<Item = &TodoItem> + Clone + '_ {
        self.visible_items_for(self.active_filter)
    }

    /// Items admitted by `filter`, without changing the active filter.
    pub fn visible_items_for(
        &self,
        filter: Filter,
    ) -> impl Iterator<Item = &TodoItem> + Clone + '_ {
        self.items.iter().filter(move |item| filter.admits(item))
    }

    /// Applies an action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetPendingText(text) => self.set_pending_text(text),
            Action::Submit => {
                self.submit();
            }
            Action::Edit(id, text) => self.edit(id, text),
            Action::ToggleDone(id) => self.toggle_done(id),
            Action::ToggleRemoved(id) => self.toggle_removed(id),
            Action::PurgeRemoved => {
                self.purge_removed();
            }
            Action::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// All items in list order, including removed ones.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// The text waiting to be submitted.
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// The active filter.
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Total number of items, including removed ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether there is anything in the trash.
    pub fn has_removed(&self) -> bool {
        self.items.iter().any(|item| item.removed)
    }

    /// Per-status totals.
    pub fn counts(&self) -> Counts {
        self.items.iter().fold(Counts::default(), |mut c, item| {
            if item.removed {
                c.removed += 1;
            } else {
                c.active += 1;
                if item.done {
                    c.completed += 1;
                } else {
                    c.incomplete += 1;
                }
            }
            c
        })
    }
}

/// A state transition of a [`TodoList`].
///
/// Actions can be sent to the todo component as messages:
///
/// ```rust
/// use bubbletea_todo::todo::{reduce, Action, Filter, TodoList};
///
/// let list = reduce(TodoList::new(), Action::SetPendingText("call mom".into()));
/// let list = reduce(list, Action::Submit);
/// let list = reduce(list, Action::SetFilter(Filter::Completed));
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.visible_items().count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the pending input text.
    SetPendingText(String),
    /// Submit the pending text as a new item.
    Submit,
    /// Replace an item's text.
    Edit(TodoId, String),
    /// Flip an item's done flag.
    ToggleDone(TodoId),
    /// Move an item to the trash or restore it.
    ToggleRemoved(TodoId),
    /// Permanently drop removed items.
    PurgeRemoved,
    /// Change the active filter.
    SetFilter(Filter),
}

/// Applies `action` to `state` and returns the new state.
pub fn reduce(mut state: TodoList, action: Action) -> TodoList {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TodoList {
        TodoList::with_texts(texts.iter().copied())
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|i| i.text.as_str()).collect()
    }

    fn ids(list: &TodoList) -> Vec<TodoId> {
        list.items().iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.pending_text(), "");
        assert_eq!(list.active_filter(), Filter::All);
        assert!(!list.has_removed());
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut list = list_of(&["a"]);
        let before = list.clone();
        assert_eq!(list.submit(), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_submit_prepends_fresh_item() {
        let mut list = list_of(&["b", "a"]);
        list.set_pending_text("c");
        let id = list.submit().unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(texts(&list), ["c", "b", "a"]);
        let first = &list.items()[0];
        assert_eq!(first.id(), id);
        assert!(!first.done);
        assert!(!first.removed);
        assert_eq!(list.pending_text(), "");
    }

    #[test]
    fn test_ids_are_unique_and_creation_ordered() {
        let mut list = TodoList::new();
        let mut seen = Vec::new();
        for text in ["one", "two", "three"] {
            list.set_pending_text(text);
            seen.push(list.submit().unwrap());
        }
        assert!(seen.windows(2).all(|w| w[0] < w[1]));

        // ids keep growing after purging
        list.toggle_removed(seen[2]);
        list.purge_removed();
        list.set_pending_text("four");
        let later = list.submit().unwrap();
        assert!(later > seen[2]);
    }

    #[test]
    fn test_with_texts_keeps_display_order() {
        let list = list_of(&["newest", "middle", "oldest"]);
        assert_eq!(texts(&list), ["newest", "middle", "oldest"]);
        let ids = ids(&list);
        assert!(ids[0] > ids[1] && ids[1] > ids[2]);
    }

    #[test]
    fn test_with_texts_skips_empty_texts() {
        let list = list_of(&["a", "", "b", ""]);
        assert_eq!(texts(&list), ["a", "b"]);
        assert!(list.items().iter().all(|i| !i.text.is_empty()));
        assert!(TodoList::with_texts([""]).is_empty());
    }

    #[test]
    fn test_edit_keeps_length_and_position() {
        let mut list = list_of(&["a", "b", "c"]);
        let order = ids(&list);
        let target = order[1];

        list.edit(target, "B");

        assert_eq!(list.len(), 3);
        assert_eq!(ids(&list), order);
        assert_eq!(texts(&list), ["a", "B", "c"]);
        assert!(!list.get(target).unwrap().done);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut list = list_of(&["a"]);
        let before = list.clone();
        let ghost = TodoId(99);
        list.edit(ghost, "zzz");
        list.toggle_done(ghost);
        list.toggle_removed(ghost);
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut list = list_of(&["a", "b"]);
        let id = ids(&list)[0];
        let before = list.clone();

        list.toggle_done(id);
        assert!(list.get(id).unwrap().done);
        list.toggle_done(id);
        assert_eq!(list, before);

        list.toggle_removed(id);
        assert!(list.get(id).unwrap().removed);
        list.toggle_removed(id);
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggles_leave_other_items_and_order_alone() {
        let mut list = list_of(&["a", "b", "c"]);
        let order = ids(&list);
        list.toggle_done(order[2]);
        list.toggle_removed(order[0]);
        assert_eq!(ids(&list), order);
        assert!(!list.get(order[1]).unwrap().done);
        assert!(!list.get(order[1]).unwrap().removed);
    }

    #[test]
    fn test_restore_keeps_done_state() {
        let mut list = list_of(&["a"]);
        let id = ids(&list)[0];
        list.toggle_done(id);
        list.toggle_removed(id);
        list.toggle_removed(id);
        assert!(list.get(id).unwrap().done);
        assert_eq!(list.visible_items_for(Filter::Completed).count(), 1);
    }

    #[test]
    fn test_purge_removed() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let order = ids(&list);
        list.toggle_removed(order[0]);
        list.toggle_removed(order[2]);
        list.toggle_done(order[3]);
        let kept_before = list.visible_items_for(Filter::All).count();

        assert_eq!(list.purge_removed(), 2);

        assert!(!list.has_removed());
        assert_eq!(list.visible_items_for(Filter::RemovedOnly).count(), 0);
        assert!(list.visible_items_for(Filter::All).count() >= kept_before);
        assert_eq!(texts(&list), ["b", "d"]);
        assert_eq!(list.purge_removed(), 0);
    }

    #[test]
    fn test_visible_items_partition() {
        let mut list = list_of(&["a", "b", "c", "d", "e"]);
        let order = ids(&list);
        list.toggle_done(order[0]);
        list.toggle_done(order[1]);
        list.toggle_removed(order[1]);
        list.toggle_removed(order[3]);

        let removed: Vec<TodoId> = list
            .visible_items_for(Filter::RemovedOnly)
            .map(|i| i.id())
            .collect();
        let expected_removed: Vec<TodoId> =
            list.items().iter().filter(|i| i.removed).map(|i| i.id()).collect();
        assert_eq!(removed, expected_removed);

        let all: Vec<TodoId> = list.visible_items_for(Filter::All).map(|i| i.id()).collect();
        let expected_all: Vec<TodoId> =
            list.items().iter().filter(|i| !i.removed).map(|i| i.id()).collect();
        assert_eq!(all, expected_all);

        let completed: Vec<TodoId> = list
            .visible_items_for(Filter::Completed)
            .map(|i| i.id())
            .collect();
        let incomplete: Vec<TodoId> = list
            .visible_items_for(Filter::Incomplete)
            .map(|i| i.id())
            .collect();
        assert_eq!(completed.len() + incomplete.len(), all.len());
        assert!(completed.iter().all(|id| !incomplete.contains(id)));
        assert!(all.iter().all(|id| completed.contains(id) || incomplete.contains(id)));
    }

    #[test]
    fn test_visible_items_is_restartable() {
        let mut list = list_of(&["a", "b"]);
        list.toggle_done(ids(&list)[0]);
        list.set_filter(Filter::Incomplete);

        let view = list.visible_items();
        let first: Vec<_> = view.clone().map(|i| i.text.clone()).collect();
        let second: Vec<_> = view.map(|i| i.text.clone()).collect();
        assert_eq!(first, ["b"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts() {
        let mut list = list_of(&["a", "b", "c"]);
        let order = ids(&list);
        list.toggle_done(order[0]);
        list.toggle_removed(order[2]);
        let c = list.counts();
        assert_eq!(
            c,
            Counts {
                active: 2,
                completed: 1,
                incomplete: 1,
                removed: 1
            }
        );
        for f in Filter::ALL {
            assert_eq!(c.for_filter(f), list.visible_items_for(f).count());
        }
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut list = TodoList::new();
        list.set_pending_text("buy milk");
        let id = list.submit().unwrap();
        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!((item.text.as_str(), item.done, item.removed), ("buy milk", false, false));

        list.toggle_done(id);
        assert_eq!(list.visible_items_for(Filter::Incomplete).count(), 0);
        let completed: Vec<_> = list.visible_items_for(Filter::Completed).collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id(), id);

        list.toggle_removed(id);
        assert_eq!(list.visible_items_for(Filter::All).count(), 0);
        let trash: Vec<_> = list.visible_items_for(Filter::RemovedOnly).collect();
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].id(), id);

        list.set_filter(Filter::RemovedOnly);
        list.purge_removed();
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_actions_match_methods() {
        let mut by_method = TodoList::new();
        by_method.set_pending_text("x");
        let id = by_method.submit().unwrap();
        by_method.edit(id, "y");
        by_method.toggle_done(id);
        by_method.set_filter(Filter::Completed);

        let by_action = [
            Action::SetPendingText("x".into()),
            Action::Submit,
            Action::Edit(id, "y".into()),
            Action::ToggleDone(id),
            Action::SetFilter(Filter::Completed),
        ]
        .into_iter()
        .fold(TodoList::new(), reduce);

        assert_eq!(by_action, by_method);

        let purged = reduce(
            reduce(by_action, Action::ToggleRemoved(id)),
            Action::PurgeRemoved,
        );
        assert!(purged.is_empty());
    }
}

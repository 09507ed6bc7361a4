use super::input;
use super::keys::TodoKeyMap;
use super::state::{Action, TodoList};
use super::style::{Labels, TodoStyles};
use super::types::{Filter, TodoId, TodoItem};
use crate::{help, key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use tracing::{debug, trace};

/// Which part of the component receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the add form.
    #[default]
    Form,
    /// Moving between rows.
    List,
    /// Editing the selected row's text in place.
    Editing,
}

/// The todo component.
///
/// Wraps a [`TodoList`] and binds keys to its operations. The list is the
/// single source of truth: the add form mirrors `pending_text` on every
/// keystroke, and in-place edits are written through as they are typed.
///
/// # Examples
///
/// ```rust
/// use bubbletea_todo::prelude::*;
/// use bubbletea_todo::todo::{Focus, Model};
///
/// let mut todo = Model::new()
///     .with_items(["walk the dog", "buy milk"])
///     .with_width(60);
/// todo.focus();
///
/// assert_eq!(todo.focus_area(), Focus::Form);
/// assert_eq!(todo.list().len(), 2);
/// assert!(todo.plain_view().contains("[ ] walk the dog"));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    list: TodoList,
    pub(super) input: input::Model,
    pub(super) editor: input::Model,
    editing: Option<TodoId>,
    edit_original: String,
    focus: Focus,
    cursor: usize,
    focused: bool,
    pub(super) width: usize,
    /// Key bindings. Call [`Model::with_keymap`] to replace them so that
    /// their enabled state is refreshed.
    pub keymap: TodoKeyMap,
    /// Styles used by the view.
    pub styles: TodoStyles,
    /// User-facing strings.
    pub labels: Labels,
    /// Help view at the bottom of the component.
    pub help: help::Model,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty, unfocused component with English labels.
    pub fn new() -> Self {
        let labels = Labels::default();
        let mut input = input::new();
        input.placeholder = labels.placeholder.clone();
        let mut editor = input::new();
        editor.prompt = String::new();

        let mut model = Self {
            list: TodoList::new(),
            input,
            editor,
            editing: None,
            edit_original: String::new(),
            focus: Focus::Form,
            cursor: 0,
            focused: false,
            width: 0,
            keymap: TodoKeyMap::default(),
            styles: TodoStyles::default(),
            labels,
            help: help::Model::new(),
        };
        model.update_keybindings();
        model
    }

    /// Starts from the given item texts, first text on top. Empty texts are
    /// skipped.
    pub fn with_items<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list = TodoList::with_texts(texts);
        self.reconcile();
        self
    }

    /// Starts from an existing list, including its filter and pending text.
    pub fn with_list(mut self, list: TodoList) -> Self {
        self.list = list;
        self.reconcile();
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: TodoKeyMap) -> Self {
        self.keymap = keymap;
        self.update_keybindings();
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: TodoStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the labels. The form placeholder follows the new labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.input.placeholder = labels.placeholder.clone();
        self.labels = labels;
        self
    }

    /// Sets the placeholder of the add form.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    /// Sets the render width. 0 leaves lines unbounded.
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the render width and resizes the text fields and help to match.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
        if width == 0 {
            self.input.width = 0;
            self.editor.width = 0;
            return;
        }
        let prompt = lipgloss_extras::lipgloss::width_visible(&self.input.prompt);
        let add = lipgloss_extras::lipgloss::width_visible(&self.labels.add) + 4;
        self.input.width = width.saturating_sub(prompt + add).max(1);
        // marker, checkbox and row action around the editor
        let action = lipgloss_extras::lipgloss::width_visible(&self.labels.restore)
            .max(lipgloss_extras::lipgloss::width_visible(&self.labels.remove));
        self.editor.width = width.saturating_sub(8 + action).max(1);
    }

    /// The underlying list.
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Which part of the component receives keys.
    pub fn focus_area(&self) -> Focus {
        self.focus
    }

    /// Moves key focus.
    ///
    /// The form cannot be focused while the trash is shown, and `Editing` can
    /// only be entered through the edit key; both fall back to `List`.
    /// Leaving `Editing` keeps whatever was typed.
    pub fn set_focus_area(&mut self, focus: Focus) {
        let target = match focus {
            Focus::Form if self.list.active_filter() == Filter::RemovedOnly => Focus::List,
            Focus::Editing if self.editing.is_none() => Focus::List,
            other => other,
        };
        if target != Focus::Editing && self.editing.take().is_some() {
            self.edit_original.clear();
            self.editor.reset();
        }
        if target != self.focus {
            debug!(from = ?self.focus, to = ?target, "focus moved");
        }
        self.focus = target;
        self.sync_input_focus();
        self.update_keybindings();
    }

    /// Index of the selected row among the visible items.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor, if the view has any rows.
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.list.visible_items().nth(self.cursor)
    }

    /// Id of the item being edited in place.
    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    /// Number of rows in the current view.
    pub fn visible_len(&self) -> usize {
        self.list.visible_items().count()
    }

    /// The last clipboard error, if any.
    pub fn error(&self) -> Option<&str> {
        self.input.err.as_deref().or(self.editor.err.as_deref())
    }

    /// Applies an action to the list and brings the view back in line.
    pub fn apply(&mut self, action: Action) {
        if let Action::SetFilter(_) = action {
            self.cursor = 0;
        }
        self.list.apply(action);
        self.reconcile();
    }

    /// The rendered view with styling removed.
    pub fn plain_view(&self) -> String {
        strip_ansi_escapes::strip_str(BubbleTeaModel::view(self))
    }

    fn set_filter(&mut self, filter: Filter) {
        self.list.set_filter(filter);
        self.cursor = 0;
    }

    fn update_form(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        if self.keymap.submit.matches(key_msg) {
            if self.list.submit().is_some() {
                self.input.reset();
                self.cursor = 0;
            }
            return None;
        }
        if self.keymap.switch_focus.matches(key_msg) || self.keymap.leave_form.matches(key_msg) {
            self.set_focus_area(Focus::List);
            return None;
        }

        if !self.input.handles(key_msg) {
            // the list bindings are disabled here, so compare their keys directly
            let nav = self
                .keymap
                .cursor_up
                .keys()
                .iter()
                .chain(self.keymap.cursor_down.keys())
                .any(|k| k.matches(key_msg));
            if nav {
                self.set_focus_area(Focus::List);
            } else {
                trace!(key = ?key_msg.key, "key ignored by the add form");
            }
            return None;
        }

        let cmd = self.input.update(msg);
        self.list.set_pending_text(self.input.value());
        cmd
    }

    fn update_list(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            if self.cursor + 1 < self.visible_len() {
                self.cursor += 1;
            }
        } else if self.keymap.toggle_done.matches(key_msg) {
            match self.selected_item().map(|i| (i.id(), i.is_checkable())) {
                Some((id, true)) => self.list.toggle_done(id),
                Some((id, false)) => trace!(id = id.get(), "toggle refused: item is removed"),
                None => {}
            }
        } else if self.keymap.edit.matches(key_msg) {
            self.start_edit();
        } else if self.keymap.toggle_removed.matches(key_msg) {
            if let Some(id) = self.selected_item().map(TodoItem::id) {
                self.list.toggle_removed(id);
            }
        } else if self.keymap.next_filter.matches(key_msg) {
            self.set_filter(self.list.active_filter().next());
        } else if self.keymap.prev_filter.matches(key_msg) {
            self.set_filter(self.list.active_filter().prev());
        } else if self.keymap.filter_all.matches(key_msg) {
            self.set_filter(Filter::All);
        } else if self.keymap.filter_completed.matches(key_msg) {
            self.set_filter(Filter::Completed);
        } else if self.keymap.filter_incomplete.matches(key_msg) {
            self.set_filter(Filter::Incomplete);
        } else if self.keymap.filter_removed.matches(key_msg) {
            self.set_filter(Filter::RemovedOnly);
        } else if self.keymap.empty_trash.matches(key_msg) {
            if self.list.active_filter() == Filter::RemovedOnly && self.list.has_removed() {
                self.list.purge_removed();
            }
        } else if self.keymap.switch_focus.matches(key_msg) {
            self.set_focus_area(Focus::Form);
        } else if self.keymap.show_full_help.matches(key_msg)
            || self.keymap.close_full_help.matches(key_msg)
        {
            self.help.show_all = !self.help.show_all;
        }
        None
    }

    fn update_editing(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        let Some(id) = self.editing else {
            self.set_focus_area(Focus::List);
            return None;
        };

        if self.keymap.commit_edit.matches(key_msg) {
            debug!(id = id.get(), "edit committed");
            self.set_focus_area(Focus::List);
            return None;
        }
        if self.keymap.cancel_edit.matches(key_msg) {
            let original = std::mem::take(&mut self.edit_original);
            self.list.edit(id, original);
            self.set_focus_area(Focus::List);
            return None;
        }

        let cmd = self.editor.update(msg);
        self.write_through(id);
        cmd
    }

    fn start_edit(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        if !item.is_editable() {
            trace!(id = item.id().get(), "edit refused: item is done or removed");
            return;
        }
        let (id, text) = (item.id(), item.text.clone());
        self.editor.set_value(&text);
        self.edit_original = text;
        self.editing = Some(id);
        self.set_focus_area(Focus::Editing);
    }

    fn write_through(&mut self, id: TodoId) {
        let changed = self
            .list
            .get(id)
            .map_or(false, |item| item.text != self.editor.value());
        if changed {
            self.list.edit(id, self.editor.value());
        }
    }

    fn update_paste(&mut self, msg: &Msg) -> Option<Cmd> {
        match self.focus {
            Focus::Form => {
                let cmd = self.input.update(msg);
                self.list.set_pending_text(self.input.value());
                cmd
            }
            Focus::Editing => {
                let cmd = self.editor.update(msg);
                if let Some(id) = self.editing {
                    self.write_through(id);
                }
                cmd
            }
            Focus::List => None,
        }
    }

    /// Brings focus, the form, the editor, the cursor and the key bindings
    /// back in line with the list.
    fn reconcile(&mut self) {
        if let Some(id) = self.editing {
            let editable = self.list.get(id).map_or(false, TodoItem::is_editable);
            if !editable {
                debug!(id = id.get(), "edit closed: item is no longer editable");
                self.set_focus_area(Focus::List);
            } else if let Some(item) = self.list.get(id) {
                if item.text != self.editor.value() {
                    let text = item.text.clone();
                    self.editor.set_value(&text);
                }
            }
        }

        if self.input.value() != self.list.pending_text() {
            let text = self.list.pending_text().to_string();
            self.input.set_value(&text);
        }

        let len = self.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));

        // re-validates the focus area against the active filter
        self.set_focus_area(self.focus);
    }

    fn sync_input_focus(&mut self) {
        if self.focused && self.focus == Focus::Form {
            let _ = self.input.focus();
        } else {
            self.input.blur();
        }
        if self.focused && self.focus == Focus::Editing {
            let _ = self.editor.focus();
        } else {
            self.editor.blur();
        }
    }

    /// Enables exactly the bindings that do something in the current state,
    /// so that matching and the help view agree.
    fn update_keybindings(&mut self) {
        let selected = self
            .selected_item()
            .map(|item| (item.is_checkable(), item.is_editable(), item.removed));
        let trash = self.list.active_filter() == Filter::RemovedOnly;
        let has_removed = self.list.has_removed();
        let form = self.focus == Focus::Form;
        let list = self.focus == Focus::List;
        let editing = self.focus == Focus::Editing;
        let show_all = self.help.show_all;
        let restore = selected.map_or(false, |(_, _, removed)| removed);
        let row_action = self.labels.row_action(restore).to_string();

        let km = &mut self.keymap;
        km.submit.set_enabled(form);
        km.leave_form.set_enabled(form);
        km.switch_focus.set_enabled(form || (list && !trash));

        km.cursor_up.set_enabled(list);
        km.cursor_down.set_enabled(list);
        km.toggle_done
            .set_enabled(list && selected.map_or(false, |(checkable, _, _)| checkable));
        km.edit
            .set_enabled(list && selected.map_or(false, |(_, editable, _)| editable));
        km.toggle_removed.set_enabled(list && selected.is_some());
        let key_label = km.toggle_removed.help().key.clone();
        km.toggle_removed.set_help(key_label, row_action);

        for binding in [
            &mut km.next_filter,
            &mut km.prev_filter,
            &mut km.filter_all,
            &mut km.filter_completed,
            &mut km.filter_incomplete,
            &mut km.filter_removed,
        ] {
            binding.set_enabled(list);
        }
        km.empty_trash.set_enabled(list && trash && has_removed);

        km.commit_edit.set_enabled(editing);
        km.cancel_edit.set_enabled(editing);

        km.show_full_help.set_enabled(list && !show_all);
        km.close_full_help.set_enabled(list && show_all);
        km.quit.set_enabled(list);
        km.force_quit.set_enabled(true);
    }
}

impl key::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        let km = &self.keymap;
        match self.focus {
            Focus::Form => vec![&km.submit, &km.switch_focus, &km.force_quit],
            Focus::Editing => vec![&km.commit_edit, &km.cancel_edit],
            Focus::List => vec![
                &km.cursor_up,
                &km.cursor_down,
                &km.toggle_done,
                &km.edit,
                &km.toggle_removed,
                &km.next_filter,
                &km.empty_trash,
                &km.show_full_help,
                &km.quit,
            ],
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        match self.focus {
            Focus::List => key::KeyMap::full_help(&self.keymap),
            _ => vec![self.short_help()],
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        let cmd = model.focus();
        (model, cmd)
    }

    /// Handles keys, clipboard results, window resizes and [`Action`]s.
    ///
    /// Actions and resizes are applied even while blurred; keys are only
    /// handled while focused. `ctrl+c` quits from any focus area.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(action) = msg.downcast_ref::<Action>() {
            self.apply(action.clone());
            return None;
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }
        if msg.is::<input::PasteMsg>() || msg.is::<input::PasteErrMsg>() {
            let cmd = self.update_paste(&msg);
            self.reconcile();
            return cmd;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if !self.focused {
            return None;
        }
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        let cmd = match self.focus {
            Focus::Form => self.update_form(key_msg, &msg),
            Focus::List => self.update_list(key_msg),
            Focus::Editing => self.update_editing(key_msg, &msg),
        };
        self.reconcile();
        cmd
    }

    fn view(&self) -> String {
        let sections = [
            self.view_header(),
            self.view_controls(),
            self.view_items(),
            self.view_footer(),
        ];
        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        self.sync_input_focus();
        None
    }

    fn blur(&mut self) {
        self.focused = false;
        self.sync_input_focus();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

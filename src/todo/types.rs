//! Core data types for the todo component.
//!
//! - [`TodoItem`]: a single entry with independent `done` and `removed` flags
//! - [`TodoId`]: creation-ordered identifier, unique for the life of a list
//! - [`Filter`]: the closed set of list views
//! - [`ParseFilterError`]: returned when a filter name is not recognised

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a todo item.
///
/// Ids are handed out by [`TodoList`](super::TodoList) from a counter, so a
/// larger id always means a later creation. Ids are never reused, not even
/// after the trash is emptied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub(super) u64);

impl TodoId {
    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry.
///
/// `done` and `removed` are independent: a removed item keeps its done state
/// and gets it back when restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub(super) id: TodoId,
    /// The item text.
    pub text: String,
    /// Whether the item is checked off.
    pub done: bool,
    /// Soft-delete marker. Removed items only show under [`Filter::RemovedOnly`].
    pub removed: bool,
}

impl TodoItem {
    pub(super) fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
            removed: false,
        }
    }

    /// The item's id. Fixed at creation.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Whether the text may be edited: neither done nor removed.
    pub fn is_editable(&self) -> bool {
        !self.done && !self.removed
    }

    /// Whether the done flag may be toggled: not removed.
    pub fn is_checkable(&self) -> bool {
        !self.removed
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Which items the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Everything that is not removed.
    #[default]
    All,
    /// Done items that are not removed.
    Completed,
    /// Open items that are not removed.
    Incomplete,
    /// Only removed items (the trash).
    RemovedOnly,
}

impl Filter {
    /// All filters in selector order.
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Completed,
        Filter::Incomplete,
        Filter::RemovedOnly,
    ];

    /// Reports whether `item` belongs to this view.
    ///
    /// ```rust
    /// use bubbletea_todo::todo::{Filter, TodoList};
    ///
    /// let mut list = TodoList::new();
    /// list.set_pending_text("water plants");
    /// let id = list.submit().unwrap();
    /// let item = list.get(id).unwrap();
    ///
    /// assert!(Filter::All.admits(item));
    /// assert!(Filter::Incomplete.admits(item));
    /// assert!(!Filter::Completed.admits(item));
    /// assert!(!Filter::RemovedOnly.admits(item));
    /// ```
    pub fn admits(self, item: &TodoItem) -> bool {
        match self {
            Filter::All => !item.removed,
            Filter::Completed => item.done && !item.removed,
            Filter::Incomplete => !item.done && !item.removed,
            Filter::RemovedOnly => item.removed,
        }
    }

    /// The filter after this one in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The filter before this one in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in [`Filter::ALL`].
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Completed => 1,
            Filter::Incomplete => 2,
            Filter::RemovedOnly => 3,
        }
    }

    /// The canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
            Filter::RemovedOnly => "removed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter {0:?}: expected all, completed (checked), incomplete (unchecked) or removed")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Accepts the canonical names plus `checked` / `unchecked` as aliases
    /// for completed / incomplete. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" | "checked" => Ok(Filter::Completed),
            "incomplete" | "unchecked" => Ok(Filter::Incomplete),
            "removed" => Ok(Filter::RemovedOnly),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(done: bool, removed: bool) -> TodoItem {
        TodoItem {
            id: TodoId(1),
            text: "x".into(),
            done,
            removed,
        }
    }

    #[test]
    fn test_filter_predicate_table() {
        // (done, removed) -> [All, Completed, Incomplete, RemovedOnly]
        let cases = [
            ((false, false), [true, false, true, false]),
            ((true, false), [true, true, false, false]),
            ((false, true), [false, false, false, true]),
            ((true, true), [false, false, false, true]),
        ];
        for ((done, removed), expected) in cases {
            let it = item(done, removed);
            for (filter, want) in Filter::ALL.iter().zip(expected) {
                assert_eq!(filter.admits(&it), want, "{filter} on {done}/{removed}");
            }
        }
    }

    #[test]
    fn test_filter_cycle_wraps() {
        assert_eq!(Filter::All.next(), Filter::Completed);
        assert_eq!(Filter::RemovedOnly.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::RemovedOnly);
        for f in Filter::ALL {
            assert_eq!(f.next().prev(), f);
            assert_eq!(Filter::ALL[f.index()], f);
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("Checked".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(" unchecked ".parse::<Filter>(), Ok(Filter::Incomplete));
        assert_eq!("removed".parse::<Filter>(), Ok(Filter::RemovedOnly));
        for f in Filter::ALL {
            assert_eq!(f.to_string().parse::<Filter>(), Ok(f));
        }

        for alias in ["done", "open", "trash", ""] {
            assert!(alias.parse::<Filter>().is_err(), "{alias:?} should not parse");
        }

        let err = "archived".parse::<Filter>().unwrap_err();
        assert_eq!(err, ParseFilterError("archived".into()));
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_item_flags_gate_editing() {
        assert!(item(false, false).is_editable());
        assert!(!item(true, false).is_editable());
        assert!(!item(false, true).is_editable());
        assert!(item(true, false).is_checkable());
        assert!(!item(true, true).is_checkable());
    }
}

//! Todo list component.
//!
//! The module is split in two layers:
//!
//! - [`TodoList`]: the authoritative state. Plain data with total operations
//!   (add, edit, toggle done, move to and from the trash, empty the trash,
//!   change the filter) and a lazily filtered view. It has no UI dependency
//!   and can be driven directly or through [`Action`] values.
//! - [`Model`]: a bubbletea component that renders a [`TodoList`] and binds
//!   keys to its operations, with an add form, in-place editing, a filter
//!   selector and context-sensitive help.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bubbletea_todo::todo::{Action, Filter, Model};
//! use bubbletea_rs::Model as BubbleTeaModel;
//!
//! let mut todo = Model::new().with_items(["buy milk"]);
//! todo.update(Box::new(Action::SetPendingText("call mom".into())));
//! todo.update(Box::new(Action::Submit));
//! todo.update(Box::new(Action::SetFilter(Filter::Incomplete)));
//!
//! assert_eq!(todo.list().visible_items().count(), 2);
//! assert!(todo.plain_view().contains("[ ] call mom"));
//! ```
//!
//! ## Items and filters
//!
//! Every item carries two independent flags, `done` and `removed`. Removed
//! items are in the trash: only [`Filter::RemovedOnly`] shows them, and
//! they can be restored with their done state intact or purged for good.
//!
//! | Filter | Shows |
//! |--------|-------|
//! | `All` | every item not in the trash |
//! | `Completed` | done items not in the trash |
//! | `Incomplete` | open items not in the trash |
//! | `RemovedOnly` | the trash |
//!
//! The component also implements [`crate::key::KeyMap`], so its help view
//! only lists the keys that do something for the selected row.

pub mod input;
pub mod keys;
mod model;
mod rendering;
mod state;
pub mod style;
mod types;

pub use keys::TodoKeyMap;
pub use model::{Focus, Model};
pub use state::{reduce, Action, Counts, TodoList};
pub use style::{Labels, TodoStyles};
pub use types::{Filter, ParseFilterError, TodoId, TodoItem};

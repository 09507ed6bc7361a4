#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-todo/")]

//! # bubbletea-todo
//!
//! A todo-list component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Items can be added, edited in place, checked off, moved to a trash and
//! restored, and the trash can be emptied. A filter selector switches between
//! all, completed, incomplete and removed items. The component follows the
//! Elm Architecture with `init()`, `update()` and `view()`, and the list
//! state underneath it is a plain struct that can be used without any UI.
//!
//! ## Features
//!
//! - **Independent flags**: `done` and `removed` never affect each other
//! - **Soft delete** with restore and an explicit empty-trash action
//! - **Live editing**: the form and in-place edits write through on every key
//! - **Type-safe key bindings**, all configurable, with contextual help
//! - **Relabelling** through [`todo::Labels`], with an English and a Japanese set
//! - **Clipboard paste** behind the `clipboard-support` feature
//!
//! ## Modules
//!
//! - [`todo`]: the list state and the component
//! - [`key`]: key bindings and the [`key::KeyMap`] trait
//! - [`help`]: help view generated from a [`key::KeyMap`]
//!
//! ## Focus Management
//!
//! The component and its text fields implement the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_todo::prelude::*;
//!
//! let mut todo = Todo::new();
//! assert!(!todo.focused());
//! todo.focus();
//! assert!(todo.focused());
//! todo.blur();
//! assert!(!todo.focused());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_todo::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     todo: Todo,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (todo, cmd) = Todo::init();
//!         (Self { todo }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.todo.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.todo.view()
//!     }
//! }
//! ```
//!
//! ## Driving the list without a UI
//!
//! ```rust
//! use bubbletea_todo::todo::{Filter, TodoList};
//!
//! let mut list = TodoList::new();
//! list.set_pending_text("buy milk");
//! let id = list.submit().unwrap();
//! list.toggle_done(id);
//!
//! let done: Vec<_> = list.visible_items_for(Filter::Completed).collect();
//! assert_eq!(done[0].text, "buy milk");
//! ```

pub mod help;
pub mod key;
pub mod todo;

use bubbletea_rs::Cmd;

/// Focus management shared by the component and its text fields.
///
/// A focused component receives key messages; a blurred one ignores them
/// but still accepts programmatic updates.
///
/// ```rust
/// use bubbletea_todo::prelude::*;
/// use bubbletea_todo::todo::input;
///
/// let mut field = input::new();
/// assert!(!field.focused());
/// field.focus();
/// assert!(field.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Whether the component is focused.
    fn focused(&self) -> bool;
}

pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use todo::input::{paste, PasteErrMsg, PasteMsg};
pub use todo::{
    reduce, Action, Counts, Filter, Focus as TodoFocus, Labels, Model as Todo, ParseFilterError,
    TodoId, TodoItem, TodoKeyMap, TodoList, TodoStyles,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_todo::prelude::*;
///
/// let todo = Todo::new().with_labels(Labels::japanese());
/// assert_eq!(todo.list().active_filter(), Filter::All);
/// ```
pub mod prelude {
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::todo::{
        Action, Filter, Focus as TodoFocus, Labels, Model as Todo, TodoId, TodoItem, TodoKeyMap,
        TodoList, TodoStyles,
    };
    pub use crate::Component;
}

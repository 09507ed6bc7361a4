//! Key bindings for the todo component.
//!
//! ## Add form
//!
//! - **Submit**: `enter`
//! - **Go to list**: `tab` / `esc` / `↑` / `↓`
//!
//! ## List
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Toggle done**: `space` / `x`
//! - **Edit text**: `e` (`enter` saves, `esc` cancels)
//! - **Remove / restore**: `d` / `delete`
//! - **Filter**: `]` next, `[` previous, `1`–`4` direct
//! - **Empty trash**: `p` (trash view only)
//! - **Go to form**: `tab`
//!
//! ## Everywhere
//!
//! - **Help**: `?` (list only, since the form takes text)
//! - **Quit**: `q` in the list, `ctrl+c` anywhere

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Key bindings for the todo component.
#[derive(Debug, Clone)]
pub struct TodoKeyMap {
    /// Submit the add form.
    pub submit: Binding,
    /// Move focus between the add form and the list.
    pub switch_focus: Binding,
    /// Leave the add form for the list.
    pub leave_form: Binding,
    /// Move the cursor up.
    pub cursor_up: Binding,
    /// Move the cursor down.
    pub cursor_down: Binding,
    /// Check or uncheck the selected item.
    pub toggle_done: Binding,
    /// Start editing the selected item's text.
    pub edit: Binding,
    /// Save the text being edited.
    pub commit_edit: Binding,
    /// Drop the edit and restore the previous text.
    pub cancel_edit: Binding,
    /// Move the selected item to the trash, or restore it.
    pub toggle_removed: Binding,
    /// Select the next filter.
    pub next_filter: Binding,
    /// Select the previous filter.
    pub prev_filter: Binding,
    /// Show all items.
    pub filter_all: Binding,
    /// Show completed items.
    pub filter_completed: Binding,
    /// Show incomplete items.
    pub filter_incomplete: Binding,
    /// Show the trash.
    pub filter_removed: Binding,
    /// Permanently delete everything in the trash.
    pub empty_trash: Binding,
    /// Expand the help view.
    pub show_full_help: Binding,
    /// Collapse the help view.
    pub close_full_help: Binding,
    /// Quit.
    pub quit: Binding,
    /// Quit from any focus.
    pub force_quit: Binding,
}

impl Default for TodoKeyMap {
    fn default() -> Self {
        Self {
            submit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "add"),
            switch_focus: Binding::new(vec![KeyCode::Tab]).with_help("tab", "switch focus"),
            leave_form: Binding::new(vec![KeyCode::Esc]).with_help("esc", "to list"),
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle_done: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
                .with_help("space", "toggle done"),
            edit: Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            commit_edit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "save"),
            cancel_edit: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            toggle_removed: Binding::new(vec![KeyCode::Char('d'), KeyCode::Delete])
                .with_help("d", "remove"),
            next_filter: Binding::new(vec![KeyCode::Char(']')]).with_help("]", "next filter"),
            prev_filter: Binding::new(vec![KeyCode::Char('[')]).with_help("[", "prev filter"),
            filter_all: Binding::new(vec![KeyCode::Char('1')]).with_help("1", "all"),
            filter_completed: Binding::new(vec![KeyCode::Char('2')]).with_help("2", "completed"),
            filter_incomplete: Binding::new(vec![KeyCode::Char('3')]).with_help("3", "incomplete"),
            filter_removed: Binding::new(vec![KeyCode::Char('4')]).with_help("4", "removed"),
            empty_trash: Binding::new(vec![KeyCode::Char('p')]).with_help("p", "empty trash"),
            show_full_help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            close_full_help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "close help"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: Binding::from_strs(&["ctrl+c"]).with_help("ctrl+c", "quit"),
        }
    }
}

impl key::KeyMap for TodoKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle_done,
            &self.toggle_removed,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down, &self.switch_focus],
            vec![
                &self.toggle_done,
                &self.edit,
                &self.toggle_removed,
                &self.empty_trash,
            ],
            vec![
                &self.next_filter,
                &self.prev_filter,
                &self.filter_all,
                &self.filter_completed,
                &self.filter_incomplete,
                &self.filter_removed,
            ],
            vec![&self.close_full_help, &self.quit],
        ]
    }
}

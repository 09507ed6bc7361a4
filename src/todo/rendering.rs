//! View helpers for the todo component.

use super::model::{Focus, Model};
use super::style::{CHECKED, UNCHECKED};
use super::types::{Filter, TodoItem};
use crate::Component;

impl Model {
    /// Title and the filter selector.
    pub(super) fn view_header(&self) -> String {
        let counts = self.list().counts();
        let active = self.list().active_filter();
        let tabs: Vec<String> = Filter::ALL
            .iter()
            .map(|&filter| {
                let label = format!("{} ({})", self.labels.filter(filter), counts.for_filter(filter));
                if filter == active {
                    self.styles.active_filter.render(&label)
                } else {
                    self.styles.inactive_filter.render(&label)
                }
            })
            .collect();
        let tabs = tabs.join("  ");

        if self.labels.title.is_empty() {
            return tabs;
        }
        format!("{}\n\n{}", self.styles.title.render(&self.labels.title), tabs)
    }

    /// The add form, or the empty trash button while the trash is shown.
    pub(super) fn view_controls(&self) -> String {
        if self.list().active_filter() == Filter::RemovedOnly {
            return if self.list().has_removed() {
                self.styles.button.render(&self.labels.empty_trash)
            } else {
                self.styles.button_disabled.render(&self.labels.empty_trash)
            };
        }

        let add = if self.list().pending_text().is_empty() {
            self.styles.button_disabled.render(&self.labels.add)
        } else {
            self.styles.button.render(&self.labels.add)
        };
        format!("{}  {}", self.input.view(), add)
    }

    /// One line per visible item.
    pub(super) fn view_items(&self) -> String {
        let show_cursor = self.focused() && self.focus_area() != Focus::Form;
        let rows: Vec<String> = self
            .list()
            .visible_items()
            .enumerate()
            .map(|(i, item)| self.view_row(item, show_cursor && i == self.cursor()))
            .collect();

        if rows.is_empty() {
            return self.styles.no_items.render(&self.labels.no_items);
        }
        rows.join("\n")
    }

    fn view_row(&self, item: &TodoItem, selected: bool) -> String {
        let marker = if selected {
            self.styles.selected.render(">")
        } else {
            " ".to_string()
        };

        let glyph = if item.done { CHECKED } else { UNCHECKED };
        let checkbox = if item.is_checkable() {
            self.styles.item.render(glyph)
        } else {
            self.styles.disabled.render(glyph)
        };

        let text = if self.editing() == Some(item.id()) {
            self.editor.view()
        } else {
            let style = if item.removed {
                &self.styles.item_removed
            } else if item.done {
                &self.styles.item_done
            } else if selected {
                &self.styles.selected
            } else {
                &self.styles.item
            };
            style.render(&item.text)
        };

        let action = self
            .styles
            .row_action
            .render(self.labels.row_action(item.removed));

        format!("{} {} {}  {}", marker, checkbox, text, action)
    }

    /// Status line, clipboard errors and help.
    pub(super) fn view_footer(&self) -> String {
        let visible = self.visible_len();
        let noun = if visible == 1 {
            &self.labels.item_singular
        } else {
            &self.labels.item_plural
        };
        let mut lines = vec![self
            .styles
            .status_bar
            .render(&format!("{} {}", visible, noun))];

        if let Some(err) = self.error() {
            lines.push(self.styles.error.render(err));
        }

        let help = self.help.view(self);
        if !help.is_empty() {
            lines.push(String::new());
            lines.push(self.styles.help.render(&help));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::todo::{Focus, Labels, Model};
    use crate::Component;
    use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(m: &mut Model, c: char) {
        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        });
        m.update(msg);
    }

    #[test]
    fn test_header_lists_filters_with_counts() {
        let m = Model::new().with_items(["a", "b"]);
        let view = m.plain_view();
        assert_eq!(view.lines().next().map(str::trim), Some("Todos"));
        assert!(view.contains("All (2)  Completed (0)  Incomplete (2)  Removed (0)"));
    }

    #[test]
    fn test_rows_show_checkbox_and_action() {
        let mut m = Model::new().with_items(["a", "b"]);
        let _ = m.focus();
        m.set_focus_area(Focus::List);
        press(&mut m, ' ');

        let view = m.plain_view();
        assert!(view.contains("> [x] a  remove"));
        assert!(view.contains("  [ ] b  remove"));
        assert!(view.contains("2 items"));
    }

    #[test]
    fn test_cursor_hidden_while_form_focused() {
        let mut m = Model::new().with_items(["a"]);
        let _ = m.focus();
        assert!(!m.plain_view().contains("> [ ] a"));
        m.set_focus_area(Focus::List);
        assert!(m.plain_view().contains("> [ ] a"));
    }

    #[test]
    fn test_editor_replaces_row_text() {
        let mut m = Model::new().with_items(["tea"]);
        let _ = m.focus();
        m.set_focus_area(Focus::List);
        press(&mut m, 'e');
        assert_eq!(m.focus_area(), Focus::Editing);
        // block cursor after the text
        assert!(m.plain_view().contains("> [ ] tea   remove"));
    }

    #[test]
    fn test_empty_view_message() {
        let m = Model::new().with_labels(Labels::japanese());
        let view = m.plain_view();
        assert!(view.contains("タスクはありません"));
        assert!(view.contains("0 件"));
    }

    #[test]
    fn test_trash_view_has_button_instead_of_form() {
        let mut m = Model::new().with_items(["a"]);
        let _ = m.focus();
        let before = m.plain_view();
        assert!(before.contains("> What needs to be done?"));
        assert!(before.contains("Add"));

        m.set_focus_area(Focus::List);
        press(&mut m, '4');
        let view = m.plain_view();
        assert!(view.contains("Empty trash"));
        assert!(!view.contains("What needs to be done?"));
        assert!(view.contains("No items."));
    }

    #[test]
    fn test_view_is_stable_without_input() {
        let m = Model::new().with_items(["a"]);
        assert_eq!(BubbleTeaModel::view(&m), BubbleTeaModel::view(&m));
    }
}

//! Styles and display strings for the todo component.
//!
//! [`TodoStyles`] holds every lipgloss style the view uses; [`Labels`] holds
//! every piece of user-facing text, so the component can be relabelled
//! without touching rendering code.
//!
//! ```rust
//! use bubbletea_todo::todo::{Filter, Labels};
//!
//! let en = Labels::default();
//! assert_eq!(en.filter(Filter::RemovedOnly), "Removed");
//!
//! let ja = Labels::japanese();
//! assert_eq!(ja.filter(Filter::RemovedOnly), "削除済みのタスク");
//! assert_eq!(ja.empty_trash, "ゴミ箱を空にする");
//! ```

use super::types::Filter;
use lipgloss_extras::prelude::*;

/// Checkbox glyph for done rows.
pub const CHECKED: &str = "[x]";
/// Checkbox glyph for open rows.
pub const UNCHECKED: &str = "[ ]";

/// Styling for every element of the todo view.
#[derive(Debug, Clone)]
pub struct TodoStyles {
    /// Title above the filter selector.
    pub title: Style,
    /// The selected filter tab.
    pub active_filter: Style,
    /// Unselected filter tabs.
    pub inactive_filter: Style,
    /// Form and trash buttons while they can be pressed.
    pub button: Style,
    /// Form and trash buttons while there is nothing to act on.
    pub button_disabled: Style,
    /// Open rows.
    pub item: Style,
    /// Done rows.
    pub item_done: Style,
    /// Rows in the trash.
    pub item_removed: Style,
    /// The cursor marker and the selected row's text.
    pub selected: Style,
    /// The per-row remove/restore label.
    pub row_action: Style,
    /// Rows' disabled controls (checkbox in the trash).
    pub disabled: Style,
    /// Shown when the view has no rows.
    pub no_items: Style,
    /// Counts line.
    pub status_bar: Style,
    /// Errors such as a failed paste.
    pub error: Style,
    /// Container for the help view.
    pub help: Style,
}

impl Default for TodoStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            active_filter: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .underline(true)
                .bold(true),
            inactive_filter: Style::new().foreground(subdued.clone()),
            button: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("#F25D94"))
                .padding(0, 1, 0, 1),
            button_disabled: Style::new()
                .foreground(very_subdued.clone())
                .padding(0, 1, 0, 1),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            item_done: Style::new().foreground(subdued.clone()),
            item_removed: Style::new()
                .foreground(very_subdued.clone())
                .faint(true)
                .italic(true),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            row_action: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            disabled: Style::new().foreground(very_subdued),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
            help: Style::new().padding_left(0),
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Title line.
    pub title: String,
    /// Tab text for [`Filter::All`].
    pub filter_all: String,
    /// Tab text for [`Filter::Completed`].
    pub filter_completed: String,
    /// Tab text for [`Filter::Incomplete`].
    pub filter_incomplete: String,
    /// Tab text for [`Filter::RemovedOnly`].
    pub filter_removed: String,
    /// Placeholder of the add input.
    pub placeholder: String,
    /// Label of the add button.
    pub add: String,
    /// Label of the empty trash button.
    pub empty_trash: String,
    /// Row action for live items.
    pub remove: String,
    /// Row action for removed items.
    pub restore: String,
    /// Shown when the view is empty.
    pub no_items: String,
    /// Status line noun for one item.
    pub item_singular: String,
    /// Status line noun for several items.
    pub item_plural: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
            filter_all: "All".to_string(),
            filter_completed: "Completed".to_string(),
            filter_incomplete: "Incomplete".to_string(),
            filter_removed: "Removed".to_string(),
            placeholder: "What needs to be done?".to_string(),
            add: "Add".to_string(),
            empty_trash: "Empty trash".to_string(),
            remove: "remove".to_string(),
            restore: "restore".to_string(),
            no_items: "No items.".to_string(),
            item_singular: "item".to_string(),
            item_plural: "items".to_string(),
        }
    }
}

impl Labels {
    /// The Japanese label set.
    pub fn japanese() -> Self {
        Self {
            title: "タスク".to_string(),
            filter_all: "すべてのタスク".to_string(),
            filter_completed: "完了したタスク".to_string(),
            filter_incomplete: "未完了のタスク".to_string(),
            filter_removed: "削除済みのタスク".to_string(),
            placeholder: String::new(),
            add: "追加".to_string(),
            empty_trash: "ゴミ箱を空にする".to_string(),
            remove: "削除".to_string(),
            restore: "復元".to_string(),
            no_items: "タスクはありません".to_string(),
            item_singular: "件".to_string(),
            item_plural: "件".to_string(),
        }
    }

    /// Tab text for a filter.
    pub fn filter(&self, filter: Filter) -> &str {
        match filter {
            Filter::All => &self.filter_all,
            Filter::Completed => &self.filter_completed,
            Filter::Incomplete => &self.filter_incomplete,
            Filter::RemovedOnly => &self.filter_removed,
        }
    }

    /// Row action text for an item with the given removed flag.
    pub fn row_action(&self, removed: bool) -> &str {
        if removed {
            &self.restore
        } else {
            &self.remove
        }
    }
}

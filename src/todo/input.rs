//! Single-line text field used by the add form and for in-place editing.
//!
//! The cursor moves by grapheme cluster, so combined characters and emoji
//! are edited as one unit. Rendering is width-aware and scrolls horizontally
//! to keep the cursor in view.

use crate::key::Binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Clipboard contents delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings for editing inside the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one grapheme right.
    pub character_forward: Binding,
    /// Move one grapheme left.
    pub character_backward: Binding,
    /// Delete the grapheme before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the grapheme under the cursor.
    pub delete_character_forward: Binding,
    /// Delete from the cursor to the end.
    pub delete_after_cursor: Binding,
    /// Delete from the start to the cursor.
    pub delete_before_cursor: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
    /// Paste from the system clipboard.
    pub paste: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::from_strs(&["right", "ctrl+f"]),
            character_backward: Binding::from_strs(&["left", "ctrl+b"]),
            delete_character_backward: Binding::from_strs(&["backspace", "ctrl+h"]),
            delete_character_forward: Binding::from_strs(&["delete", "ctrl+d"]),
            delete_after_cursor: Binding::from_strs(&["ctrl+k"]),
            delete_before_cursor: Binding::from_strs(&["ctrl+u"]),
            line_start: Binding::from_strs(&["home", "ctrl+a"]),
            line_end: Binding::from_strs(&["end", "ctrl+e"]),
            paste: Binding::from_strs(&["ctrl+v"]).with_help("ctrl+v", "paste"),
        }
    }
}

/// Text field state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Shown dimmed while the value is empty.
    pub placeholder: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the value.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the cell under the cursor.
    pub cursor_style: Style,
    /// Visible width of the value in cells; 0 means unlimited.
    pub width: usize,
    /// Maximum number of graphemes accepted; 0 means unlimited.
    pub char_limit: usize,
    /// Last paste error, cleared by the next edit.
    pub err: Option<String>,
    /// Editing keys.
    pub key_map: KeyMap,
    value: String,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            cursor_style: Style::new().reverse(true),
            width: 0,
            char_limit: 0,
            err: None,
            key_map: KeyMap::default(),
            value: String::new(),
            pos: 0,
            focus: false,
        }
    }
}

/// Creates an unfocused, empty field.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to the end. The value is cut
    /// to `char_limit` graphemes when a limit is set.
    pub fn set_value(&mut self, value: &str) {
        self.value = self.clamp_to_limit(value).to_string();
        self.pos = self.grapheme_count();
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.err = None;
    }

    /// Cursor position in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.grapheme_count());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.grapheme_count();
    }

    /// Inserts text at the cursor, honouring `char_limit`. Line breaks are
    /// folded to spaces since the field is single-line.
    pub fn insert_str(&mut self, s: &str) {
        let cleaned: String = s
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        if cleaned.is_empty() {
            return;
        }

        let mut incoming: Vec<&str> = cleaned.graphemes(true).collect();
        if self.char_limit > 0 {
            let room = self.char_limit.saturating_sub(self.grapheme_count());
            incoming.truncate(room);
        }
        if incoming.is_empty() {
            return;
        }

        let at = self.byte_offset(self.pos);
        self.value.insert_str(at, &incoming.concat());
        self.pos += incoming.len();
        self.err = None;
    }

    /// Deletes the grapheme before the cursor.
    pub fn delete_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let start = self.byte_offset(self.pos - 1);
        let end = self.byte_offset(self.pos);
        self.value.replace_range(start..end, "");
        self.pos -= 1;
    }

    /// Deletes the grapheme under the cursor.
    pub fn delete_forward(&mut self) {
        if self.pos >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.pos);
        let end = self.byte_offset(self.pos + 1);
        self.value.replace_range(start..end, "");
    }

    /// Deletes everything before the cursor.
    pub fn delete_before_cursor(&mut self) {
        let at = self.byte_offset(self.pos);
        self.value.replace_range(..at, "");
        self.pos = 0;
    }

    /// Deletes everything from the cursor on.
    pub fn delete_after_cursor(&mut self) {
        let at = self.byte_offset(self.pos);
        self.value.truncate(at);
    }

    /// Handles key and paste messages while focused.
    ///
    /// Returns the clipboard command when the paste key is pressed.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        if let Some(PasteMsg(text)) = msg.downcast_ref::<PasteMsg>() {
            self.insert_str(text);
        }
        if let Some(PasteErrMsg(err)) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(err.clone());
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let km = &self.key_map;
        if km.paste.matches(key_msg) {
            return Some(paste());
        }

        if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if km.delete_character_backward.matches(key_msg) {
            self.delete_backward();
        } else if km.delete_character_forward.matches(key_msg) {
            self.delete_forward();
        } else if km.delete_after_cursor.matches(key_msg) {
            self.delete_after_cursor();
        } else if km.delete_before_cursor.matches(key_msg) {
            self.delete_before_cursor();
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else if let KeyCode::Char(c) = key_msg.key {
            let plain = key_msg
                .modifiers
                .difference(KeyModifiers::SHIFT)
                .is_empty();
            if plain {
                self.insert_str(c.encode_utf8(&mut [0; 4]));
            }
        }
        None
    }

    /// Whether a key would be consumed by the field's own bindings.
    pub fn handles(&self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        let own = [
            &km.character_forward,
            &km.character_backward,
            &km.delete_character_backward,
            &km.delete_character_forward,
            &km.delete_after_cursor,
            &km.delete_before_cursor,
            &km.line_start,
            &km.line_end,
            &km.paste,
        ];
        if crate::key::matches(key_msg, &own) {
            return true;
        }
        matches!(key_msg.key, KeyCode::Char(_))
            && key_msg.modifiers.difference(KeyModifiers::SHIFT).is_empty()
    }

    /// Renders the prompt and the visible part of the value.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let (start, end) = self.visible_window(&graphemes);
        let mut out = String::new();

        let before: String = graphemes[start..self.pos.min(end)].concat();
        if !before.is_empty() {
            out.push_str(&self.text_style.render(&before));
        }

        if self.focus {
            let under = graphemes.get(self.pos).copied().unwrap_or(" ");
            out.push_str(&self.cursor_style.render(under));
            let after_start = (self.pos + 1).min(end);
            let after: String = graphemes[after_start..end].concat();
            if !after.is_empty() {
                out.push_str(&self.text_style.render(&after));
            }
        } else {
            let after: String = graphemes[self.pos.min(end)..end].concat();
            if !after.is_empty() {
                out.push_str(&self.text_style.render(&after));
            }
        }

        format!("{}{}", prompt, out)
    }

    fn placeholder_view(&self) -> String {
        if !self.focus {
            return self.placeholder_style.render(&self.placeholder);
        }
        let mut graphemes = self.placeholder.graphemes(true);
        let first = graphemes.next().unwrap_or(" ");
        let rest: String = graphemes.collect();
        format!(
            "{}{}",
            self.cursor_style.render(first),
            self.placeholder_style.render(&rest)
        )
    }

    /// Range of graphemes to show so that the cursor cell fits in `width`.
    fn visible_window(&self, graphemes: &[&str]) -> (usize, usize) {
        if self.width == 0 {
            return (0, graphemes.len());
        }
        let cell = |g: &str| g.width().max(1);
        let cursor_w = graphemes.get(self.pos).copied().map(cell).unwrap_or(1);

        // walk left from the cursor until the width is used up
        let mut start = self.pos.min(graphemes.len());
        let mut used = cursor_w;
        while start > 0 {
            let w = cell(graphemes[start - 1]);
            if used + w > self.width {
                break;
            }
            used += w;
            start -= 1;
        }

        // then fill what is left to the right of the cursor
        let mut end = (self.pos + 1).min(graphemes.len());
        while end < graphemes.len() {
            let w = cell(graphemes[end]);
            if used + w > self.width {
                break;
            }
            used += w;
            end += 1;
        }
        (start, end)
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_pos: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn clamp_to_limit<'a>(&self, value: &'a str) -> &'a str {
        if self.char_limit == 0 {
            return value;
        }
        match value.grapheme_indices(true).nth(self.char_limit) {
            Some((cut, _)) => &value[..cut],
            None => value,
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Command that reads the system clipboard and answers with a [`PasteMsg`]
/// or a [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to open clipboard: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::strip_ansi;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn focused() -> Model {
        let mut input = new();
        let _ = input.focus();
        input
    }

    fn type_str(input: &mut Model, s: &str) {
        for c in s.chars() {
            input.update(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        input.update(&key(KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = focused();
        type_str(&mut input, "milk");
        assert_eq!(input.value(), "milk");
        assert_eq!(input.position(), 4);

        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "mil");

        input.update(&key(KeyCode::Home));
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "mil");
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "il");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = focused();
        type_str(&mut input, "bk");
        input.update(&key(KeyCode::Left));
        type_str(&mut input, "oo");
        assert_eq!(input.value(), "book");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_ctrl_keys_do_not_insert() {
        let mut input = focused();
        type_str(&mut input, "abc");
        input.update(&ctrl('x'));
        assert_eq!(input.value(), "abc");

        input.update(&key(KeyCode::Left));
        input.update(&ctrl('k'));
        assert_eq!(input.value(), "ab");
        input.update(&ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_graphemes_edit_as_one_unit() {
        let mut input = focused();
        input.set_value("cafe\u{301}!");
        assert_eq!(input.position(), 5);
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "caf!");
    }

    #[test]
    fn test_char_limit() {
        let mut input = focused();
        input.char_limit = 3;
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
        input.set_value("xyzw");
        assert_eq!(input.value(), "xyz");
    }

    #[test]
    fn test_paste_messages() {
        let mut input = focused();
        input.update(&(Box::new(PasteMsg("two\nlines".into())) as Msg));
        assert_eq!(input.value(), "two lines");

        input.update(&(Box::new(PasteErrMsg("no clipboard".into())) as Msg));
        assert_eq!(input.err.as_deref(), Some("no clipboard"));

        input.update(&key(KeyCode::Char('!')));
        assert!(input.err.is_none());
    }

    #[test]
    fn test_paste_key_returns_command() {
        let mut input = focused();
        assert!(input.update(&ctrl('v')).is_some());
        assert!(input.handles(&KeyMsg {
            key: KeyCode::Char('v'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_view_shows_prompt_placeholder_and_value() {
        let mut input = new();
        input.placeholder = "What needs doing?".into();
        assert_eq!(strip_ansi(&input.view()), "> What needs doing?");

        input.set_value("tea");
        assert_eq!(strip_ansi(&input.view()), "> tea");

        let _ = input.focus();
        // cursor cell after the text
        assert_eq!(strip_ansi(&input.view()), "> tea ");
    }

    #[test]
    fn test_view_scrolls_to_cursor() {
        let mut input = focused();
        input.prompt = String::new();
        input.width = 4;
        input.set_value("abcdefgh");
        assert_eq!(strip_ansi(&input.view()), "fgh ");

        input.cursor_start();
        assert_eq!(strip_ansi(&input.view()), "abcd");
    }
}

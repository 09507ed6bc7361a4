//! Typed key bindings shared by every component in the crate.
//!
//! A [`Binding`] couples one or more [`KeyPress`]es with the help text shown
//! for them and an enabled flag. Components keep their bindings in a struct
//! that implements [`KeyMap`], which is what the [`help`](crate::help) view
//! renders.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_todo::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
//!     .with_help("space/x", "toggle done");
//!
//! let msg = KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held at the time of the press.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press with explicit modifiers.
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Parses the textual form used in key maps, e.g. `"enter"`, `"ctrl+c"`,
    /// `"alt+left"` or a single character such as `"x"`.
    ///
    /// Returns `None` for names it does not know.
    ///
    /// ```rust
    /// use bubbletea_todo::key::KeyPress;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let kp = KeyPress::parse("ctrl+v").unwrap();
    /// assert_eq!(kp.code, KeyCode::Char('v'));
    /// assert_eq!(kp.mods, KeyModifiers::CONTROL);
    /// assert!(KeyPress::parse("hyper+q").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" on its own, or a trailing "ctrl++", names the plus key
        let name = if s.ends_with("++") || s == "+" {
            parts.retain(|p| !p.is_empty());
            "+"
        } else {
            parts.pop()?
        };

        for m in parts {
            match m {
                "ctrl" => mods |= KeyModifiers::CONTROL,
                "alt" => mods |= KeyModifiers::ALT,
                "shift" => mods |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys since terminals fold it into the
    /// character itself (`G` arrives as `Char('G')` with or without SHIFT).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if msg.key != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                msg.modifiers.difference(KeyModifiers::SHIFT)
                    == self.mods.difference(KeyModifiers::SHIFT)
            }
            _ => msg.modifiers == self.mods,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, mods)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.mods.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("shift+tab"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Delete => f.write_str("delete"),
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Help text attached to a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s), e.g. `"↑/k"`.
    pub key: String,
    /// Description of the action, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Creates a binding from textual key names. Unknown names are skipped.
    ///
    /// ```rust
    /// use bubbletea_todo::key::Binding;
    ///
    /// let quit = Binding::from_strs(&["ctrl+c", "q"]);
    /// assert_eq!(quit.keys().len(), 2);
    /// ```
    pub fn from_strs(keys: &[&str]) -> Self {
        Self::new(keys.iter().filter_map(|k| KeyPress::parse(k)).collect())
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the help label and description in place.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// Returns the binding in disabled state.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Replaces the keys of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The keys bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help entry for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Implemented by anything that exposes key bindings to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help view, one inner vector per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(KeyPress::parse("enter"), Some(KeyCode::Enter.into()));
        assert_eq!(KeyPress::parse("space"), Some(KeyCode::Char(' ').into()));
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some((KeyCode::Char('c'), KeyModifiers::CONTROL).into())
        );
        assert_eq!(
            KeyPress::parse("ctrl++"),
            Some((KeyCode::Char('+'), KeyModifiers::CONTROL).into())
        );
        assert_eq!(KeyPress::parse("+"), Some(KeyCode::Char('+').into()));
        assert_eq!(KeyPress::parse("meta+x"), None);
        assert_eq!(KeyPress::parse("enterr"), None);
    }

    #[test]
    fn test_char_binding_ignores_shift_but_not_ctrl() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_ctrl_binding_requires_ctrl() {
        let b = Binding::from_strs(&["ctrl+c"]);
        assert!(b.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
        assert!(b.enabled());
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!Binding::new(Vec::<KeyCode>::new()).enabled());
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Up]);
        let b = Binding::new(vec![KeyCode::Char('k')]);
        assert!(matches(&key(KeyCode::Char('k'), KeyModifiers::NONE), &[&a, &b]));
        assert!(!matches(&key(KeyCode::Char('j'), KeyModifiers::NONE), &[&a, &b]));
    }

    #[test]
    fn test_display() {
        let kp: KeyPress = (KeyCode::Char('v'), KeyModifiers::CONTROL).into();
        assert_eq!(kp.to_string(), "ctrl+v");
        assert_eq!(KeyPress::from(KeyCode::Char(' ')).to_string(), "space");
    }
}

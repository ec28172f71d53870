use std::time::Duration;

use scrollmenu_core::{Color, Key, Style};

/// Pacing of the marquee and item scroll when nothing else is configured.
pub const DEFAULT_SCROLL_SPEED_MS: u64 = 150;

/// Run-time options for a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Milliseconds between animation steps.
    pub scroll_speed_ms: u64,
    /// Key bindings.
    pub keys: MenuKeys,
    /// Visual style.
    pub style: MenuStyle,
}

impl MenuConfig {
    #[inline]
    pub fn scroll_speed(&self) -> Duration {
        Duration::from_millis(self.scroll_speed_ms)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            scroll_speed_ms: DEFAULT_SCROLL_SPEED_MS,
            keys: MenuKeys::default(),
            style: MenuStyle::default(),
        }
    }
}

/// What a key means to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Up,
    Down,
    Select,
    Back,
    /// Not bound; the key is dropped.
    Ignore,
}

/// Key bindings for menu navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuKeys {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub select: Vec<Key>,
    pub back: Vec<Key>,
}

impl Default for MenuKeys {
    fn default() -> Self {
        Self {
            up: vec![Key::ArrowUp],
            down: vec![Key::ArrowDown],
            select: vec![Key::Enter, Key::LINE_FEED, Key::CARRIAGE_RETURN],
            back: vec![Key::Escape],
        }
    }
}

impl MenuKeys {
    /// Classify `key`. Bindings are checked in the order up, down,
    /// select, back.
    pub fn action(&self, key: &Key) -> KeyAction {
        if self.up.contains(key) {
            KeyAction::Up
        } else if self.down.contains(key) {
            KeyAction::Down
        } else if self.select.contains(key) {
            KeyAction::Select
        } else if self.back.contains(key) {
            KeyAction::Back
        } else {
            KeyAction::Ignore
        }
    }

    #[inline]
    pub fn is_select(&self, key: &Key) -> bool {
        self.action(key) == KeyAction::Select
    }
}

/// Styles for the five roles a menu cell can play, and the glyphs drawn
/// in the boundary columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuStyle {
    pub title: Style,
    pub item: Style,
    pub selected: Style,
    pub disabled: Style,
    /// Footer text and every padding row.
    pub footer: Style,
    /// Left and right of the selected item.
    pub select_open: char,
    pub select_close: char,
    /// Right of the top row while items are hidden above it.
    pub more_above: char,
    /// Right of the bottom row while items are hidden below it.
    pub more_below: char,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            title: Style::pair(Color::Green, Color::Blue),
            item: Style::pair(Color::White, Color::Blue),
            selected: Style::pair(Color::White, Color::Green),
            disabled: Style::pair(Color::Yellow, Color::Blue),
            footer: Style::pair(Color::Cyan, Color::Blue),
            select_open: '>',
            select_close: '<',
            more_above: '^',
            more_below: 'v',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = MenuKeys::default();
        assert_eq!(keys.action(&Key::ArrowUp), KeyAction::Up);
        assert_eq!(keys.action(&Key::ArrowDown), KeyAction::Down);
        for k in [Key::Enter, Key::Char('\n'), Key::Char('\r')] {
            assert_eq!(keys.action(&k), KeyAction::Select);
            assert!(keys.is_select(&k));
        }
        assert_eq!(keys.action(&Key::Escape), KeyAction::Back);
        assert_eq!(keys.action(&Key::Char('q')), KeyAction::Ignore);
        assert_eq!(keys.action(&Key::Char(' ')), KeyAction::Ignore);
    }

    #[test]
    fn extra_bindings() {
        let mut keys = MenuKeys::default();
        keys.down.push(Key::Char('j'));
        keys.back.push(Key::Char('q'));
        assert_eq!(keys.action(&Key::Char('j')), KeyAction::Down);
        assert_eq!(keys.action(&Key::Char('q')), KeyAction::Back);
    }

    #[test]
    fn scroll_speed_default() {
        assert_eq!(MenuConfig::default().scroll_speed(), Duration::from_millis(150));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: MenuConfig = serde_json::from_str(
            r#"{"scroll_speed_ms": 80, "style": {"more_below": "+"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.scroll_speed_ms, 80);
        assert_eq!(cfg.style.more_below, '+');
        assert_eq!(cfg.style.more_above, '^');
        assert_eq!(cfg.keys, MenuKeys::default());
    }
}

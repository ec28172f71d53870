//! Keyboard input: [`Key`].

/// A keyboard key as delivered by a backend.
///
/// Line-feed and carriage-return arrive as `Char('\n')` and `Char('\r')`;
/// menus treat them as equivalent to [`Key::Enter`] by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Escape,
    Enter,
    /// A printable or control character.
    Char(char),
}

impl Key {
    /// Line-feed (`^J`).
    pub const LINE_FEED: Self = Self::Char('\n');
    /// Carriage-return (`^M`).
    pub const CARRIAGE_RETURN: Self = Self::Char('\r');
}

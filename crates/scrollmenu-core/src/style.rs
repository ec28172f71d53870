//! Visual styling: [`Color`], [`AttrMask`], and [`Style`].

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal colour: one of the eight classic palette entries, a 24-bit
/// RGB value, or the terminal's own default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// Whatever the terminal uses when nothing is set.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb(u8, u8, u8),
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMask(pub u32);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const UNDERLINE: Self = Self(1 << 1);
    pub const REVERSE: Self = Self(1 << 2);
    pub const DIM: Self = Self(1 << 3);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and attributes of a run of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    /// Shorthand for a colour pair with no attributes.
    #[inline]
    pub const fn pair(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attrs: AttrMask::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_mask_ops() {
        let m = AttrMask::BOLD | AttrMask::REVERSE;
        assert!(m.contains(AttrMask::BOLD));
        assert!(m.contains(AttrMask::REVERSE));
        assert!(!m.contains(AttrMask::UNDERLINE));
        assert!(AttrMask::NONE.is_empty());
    }

    #[test]
    fn pair_sets_colours() {
        let s = Style {
            attrs: AttrMask::BOLD,
            ..Style::pair(Color::White, Color::Blue)
        };
        assert_eq!(s.fg, Color::White);
        assert_eq!(s.bg, Color::Blue);
        assert!(s.attrs.contains(AttrMask::BOLD));
        assert_eq!(Style::default().fg, Color::Reset);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn style_reads_partial_json() {
        let s: Style = serde_json::from_str(r#"{"fg":"yellow","bg":{"rgb":[0,0,128]}}"#).unwrap();
        assert_eq!(s, Style::pair(Color::Yellow, Color::Rgb(0, 0, 128)));
    }
}

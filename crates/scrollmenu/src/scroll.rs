//! Horizontal text animation: the bouncing selected item and the
//! wrapping footer marquee.

/// Where a bouncing text is heading on its next tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bounce {
    /// Scrolling towards the end of the text.
    #[default]
    Forward,
    /// Pausing at an end for one tick.
    Holding,
    /// Scrolling back towards the start.
    Backward,
}

/// Scroll cursor for a text longer than the space it is shown in.
///
/// The offset walks from `0` to `len - width`, holds one tick, walks back
/// to `0`, holds one tick, and starts over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BounceScroll {
    offset: usize,
    state: Bounce,
}

impl BounceScroll {
    /// Index of the first visible char.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn state(&self) -> Bounce {
        self.state
    }

    /// Back to the start, heading forward.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick for a text of `len` chars shown `width` at a time.
    /// A text that fits does not move.
    pub fn advance(&mut self, len: usize, width: usize) {
        if len <= width {
            self.reset();
            return;
        }
        let last = len - width;
        match self.state {
            Bounce::Forward => {
                self.offset = (self.offset + 1).min(last);
                if self.offset == last {
                    self.state = Bounce::Holding;
                }
            }
            Bounce::Holding => {
                self.state = if self.offset == 0 {
                    Bounce::Forward
                } else {
                    Bounce::Backward
                };
            }
            Bounce::Backward => {
                self.offset = self.offset.saturating_sub(1).min(last);
                if self.offset == 0 {
                    self.state = Bounce::Holding;
                }
            }
        }
    }
}

/// Scroll cursor for text that cycles through its window without end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Marquee {
    offset: usize,
}

impl Marquee {
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move one char along a text of `len` chars, wrapping to the start.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            self.offset = 0;
            return;
        }
        self.offset = (self.offset + 1) % len;
    }
}

/// `width` chars of `text` starting at char `offset`, space-padded.
pub fn window(text: &str, offset: usize, width: usize) -> String {
    let mut out: String = text.chars().skip(offset).take(width).collect();
    let shown = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - shown));
    out
}

/// `width` chars of `text` starting at char `offset`, continuing from the
/// start of `text` whenever its end is reached.
pub fn wrapped_window(text: &str, offset: usize, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return " ".repeat(width);
    }
    (0..width)
        .map(|i| chars[(offset + i) % chars.len()])
        .collect()
}

//! The [`Backend`] trait: what a menu needs from a terminal.

use std::io;

use crate::geom::Point;
use crate::key::Key;
use crate::style::Style;

/// Terminal capability consumed by menus.
///
/// Writes go to an off-screen buffer and become visible on [`flush`].
/// Input is polled, never awaited: [`key_available`] must return
/// immediately so that animation keeps running while no key is pressed.
///
/// [`flush`]: Backend::flush
/// [`key_available`]: Backend::key_available
pub trait Backend {
    /// Prepare the terminal (raw mode, alternate screen, ...).
    fn init(&mut self) -> io::Result<()>;

    /// Current screen size: `x` = columns, `y` = rows.
    fn screen_size(&mut self) -> io::Result<Point>;

    /// Draw `text` starting at `pos`, one cell per `char`, clipped to the
    /// screen.
    fn write_str(&mut self, pos: Point, text: &str, style: Style);

    /// Make everything written since the last flush visible.
    fn flush(&mut self) -> io::Result<()>;

    /// Whether a key can be read right now without blocking.
    fn key_available(&mut self) -> io::Result<bool>;

    /// Read the pending input event. `None` when the event was not a key
    /// the backend can express (resize, release, unknown code).
    fn read_key(&mut self) -> io::Result<Option<Key>>;

    /// Restore the terminal. Must be safe to call more than once.
    fn close(&mut self);
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn init(&mut self) -> io::Result<()> {
        (**self).init()
    }

    fn screen_size(&mut self) -> io::Result<Point> {
        (**self).screen_size()
    }

    fn write_str(&mut self, pos: Point, text: &str, style: Style) {
        (**self).write_str(pos, text, style)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn key_available(&mut self) -> io::Result<bool> {
        (**self).key_available()
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        (**self).read_key()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

//! An in-memory [`Backend`] driven by a key script, for tests and
//! off-terminal rendering.

use std::collections::VecDeque;
use std::io;

use crate::backend::Backend;
use crate::cell::Cell;
use crate::geom::Point;
use crate::grid::{Frame, Grid, compute_frame};
use crate::key::Key;
use crate::style::Style;

/// A backend with a fixed screen, a queue of scripted input events and a
/// record of what was flushed.
///
/// An idle entry makes one [`key_available`](Backend::key_available) call
/// report no input. Once the script is empty `key_available` fails with
/// [`io::ErrorKind::UnexpectedEof`], so a loop that never terminates on
/// its own surfaces as an error instead of spinning.
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    pending: Grid,
    shown: Grid,
    script: VecDeque<Scripted>,
    flushes: usize,
    last_frame: Frame,
    initialized: bool,
    closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scripted {
    Key(Key),
    NonKey,
    Idle,
}

fn exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
}

impl HeadlessBackend {
    /// A blank screen of `cols` × `rows` with an empty script.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            pending: Grid::new(cols, rows),
            shown: Grid::new(cols, rows),
            script: VecDeque::new(),
            flushes: 0,
            last_frame: Frame::default(),
            initialized: false,
            closed: false,
        }
    }

    /// Builder: append keys to the script.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.script.extend(keys.into_iter().map(Scripted::Key));
        self
    }

    /// Append one key to the script.
    pub fn push_key(&mut self, key: Key) {
        self.script.push_back(Scripted::Key(key));
    }

    /// Append an input event that is not a key (a resize, say).
    pub fn push_non_key(&mut self) {
        self.script.push_back(Scripted::NonKey);
    }

    /// Append `polls` polls that find no input waiting.
    pub fn push_idle(&mut self, polls: usize) {
        self.script.extend(std::iter::repeat_n(Scripted::Idle, polls));
    }

    /// Scripted events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Row `y` of the last flushed frame.
    pub fn row_text(&self, y: i32) -> String {
        self.shown.row_text(y)
    }

    /// The cell at `p` as of the last flush.
    pub fn cell(&self, p: Point) -> Cell {
        self.shown.at(p)
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Cells that changed in the most recent flush.
    pub fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Backend for HeadlessBackend {
    fn init(&mut self) -> io::Result<()> {
        self.initialized = true;
        self.closed = false;
        Ok(())
    }

    fn screen_size(&mut self) -> io::Result<Point> {
        Ok(self.pending.size())
    }

    fn write_str(&mut self, pos: Point, text: &str, style: Style) {
        self.pending.write_str(pos, text, style);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.last_frame = compute_frame(&self.shown, &self.pending);
        self.shown.clone_from(&self.pending);
        self.flushes += 1;
        Ok(())
    }

    fn key_available(&mut self) -> io::Result<bool> {
        match self.script.front() {
            None => Err(exhausted()),
            Some(Scripted::Idle) => {
                self.script.pop_front();
                Ok(false)
            }
            Some(_) => Ok(true),
        }
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        loop {
            match self.script.pop_front().ok_or_else(exhausted)? {
                Scripted::Key(key) => return Ok(Some(key)),
                Scripted::NonKey => return Ok(None),
                Scripted::Idle => {}
            }
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

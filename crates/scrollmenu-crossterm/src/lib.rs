//! Crossterm terminal backend for scrollmenu.
//!
//! Provides a [`CrosstermBackend`] that implements
//! [`scrollmenu_core::Backend`]: writes land in an off-screen grid and
//! [`flush`](Backend::flush) sends only the cells that changed.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use scrollmenu_core::{AttrMask, Backend, Color, Grid, Key, Point, Style, compute_frame};

/// Maps a [`scrollmenu_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Reset => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}

/// Maps a crossterm key event to a menu [`Key`].
///
/// Only presses count. In raw mode the terminal sends `Ctrl+J` and
/// `Ctrl+M` for a bare line feed and carriage return, which are mapped back
/// to the characters.
fn to_key(ev: KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('j') => Some(Key::LINE_FEED),
            KeyCode::Char('m') => Some(Key::CARRIAGE_RETURN),
            _ => None,
        };
    }
    match ev.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Char('\t')),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        _ => None,
    }
}

/// Leave raw mode and the alternate screen, ignoring failures.
pub fn restore_terminal() {
    let _ = execute!(
        io::stdout(),
        style::ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

/// Restore the terminal before the default panic message is printed, so a
/// panicking menu does not leave the shell in raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));
}

/// A terminal backend for scrollmenu using crossterm.
pub struct CrosstermBackend {
    pending: Grid,
    shown: Grid,
    poll_timeout: Duration,
    needs_clear: bool,
    active: bool,
}

impl CrosstermBackend {
    /// Create a new backend. Nothing touches the terminal until
    /// [`Backend::init`].
    pub fn new() -> Self {
        Self {
            pending: Grid::new(0, 0),
            shown: Grid::new(0, 0),
            poll_timeout: Duration::ZERO,
            needs_clear: false,
            active: false,
        }
    }

    /// Wait up to `timeout` for input on each poll instead of returning at
    /// once. Animation only advances between polls, so keep this well below
    /// the menu's scroll speed.
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    fn write_cell(out: &mut impl Write, p: Point, ch: char, st: Style) -> io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(to_ct_color(st.fg)),
            SetBackgroundColor(to_ct_color(st.bg))
        )?;

        let attrs = st.attrs;
        if attrs.contains(AttrMask::BOLD) {
            queue!(out, style::SetAttribute(Attribute::Bold))?;
        }
        if attrs.contains(AttrMask::UNDERLINE) {
            queue!(out, style::SetAttribute(Attribute::Underlined))?;
        }
        if attrs.contains(AttrMask::REVERSE) {
            queue!(out, style::SetAttribute(Attribute::Reverse))?;
        }
        if attrs.contains(AttrMask::DIM) {
            queue!(out, style::SetAttribute(Attribute::Dim))?;
        }

        write!(out, "{ch}")?;

        if !attrs.is_empty() {
            queue!(out, style::SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        let size = self.screen_size()?;
        log::debug!("terminal ready, {}x{}", size.x, size.y);
        Ok(())
    }

    fn screen_size(&mut self) -> io::Result<Point> {
        let (cols, rows) = terminal::size()?;
        let size = Point::new(cols as i32, rows as i32);
        if size != self.pending.size() {
            log::debug!("terminal size {} -> {size}", self.pending.size());
            self.pending.resize(size);
            self.needs_clear = true;
        }
        Ok(size)
    }

    fn write_str(&mut self, pos: Point, text: &str, style: Style) {
        self.pending.write_str(pos, text, style);
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.needs_clear {
            queue!(stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
            self.needs_clear = false;
        }

        // A size change makes this a full frame.
        let frame = compute_frame(&self.shown, &self.pending);
        for fc in &frame.cells {
            Self::write_cell(&mut stdout, fc.pos, fc.cell.ch, fc.cell.style)?;
        }
        stdout.flush()?;

        self.shown.clone_from(&self.pending);
        Ok(())
    }

    fn key_available(&mut self) -> io::Result<bool> {
        event::poll(self.poll_timeout)
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        match event::read()? {
            Event::Key(ev) => Ok(to_key(ev)),
            Event::Resize(cols, rows) => {
                log::debug!("resize event {cols}x{rows}");
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        restore_terminal();
        self.active = false;
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> Option<Key> {
        to_key(KeyEvent::new(code, mods))
    }

    #[test]
    fn arrows_enter_and_escape() {
        assert_eq!(press(KeyCode::Up, KeyModifiers::NONE), Some(Key::ArrowUp));
        assert_eq!(press(KeyCode::Down, KeyModifiers::NONE), Some(Key::ArrowDown));
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(Key::Escape));
    }

    #[test]
    fn plain_and_shifted_chars() {
        assert_eq!(press(KeyCode::Char('j'), KeyModifiers::NONE), Some(Key::Char('j')));
        assert_eq!(press(KeyCode::Char('J'), KeyModifiers::SHIFT), Some(Key::Char('J')));
    }

    #[test]
    fn control_j_and_m_are_line_endings() {
        assert_eq!(press(KeyCode::Char('j'), KeyModifiers::CONTROL), Some(Key::LINE_FEED));
        assert_eq!(
            press(KeyCode::Char('m'), KeyModifiers::CONTROL),
            Some(Key::CARRIAGE_RETURN)
        );
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), None);
    }

    #[test]
    fn releases_and_unknown_codes_are_dropped() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(to_key(release), None);
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE), None);
        assert_eq!(press(KeyCode::Insert, KeyModifiers::NONE), None);
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::PageDown, KeyCode::Home] {
            assert_eq!(press(code, KeyModifiers::NONE), None, "{code:?}");
        }
    }

    #[test]
    fn tab_is_a_control_character() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Some(Key::Char('\t')));
    }

    #[test]
    fn colour_mapping() {
        assert_eq!(to_ct_color(Color::Reset), CtColor::Reset);
        assert_eq!(to_ct_color(Color::Blue), CtColor::DarkBlue);
        assert_eq!(to_ct_color(Color::White), CtColor::Grey);
        assert_eq!(
            to_ct_color(Color::Rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn attributes_are_set_and_reset() {
        let mut out = Vec::new();
        let st = Style {
            attrs: AttrMask::BOLD,
            ..Style::pair(Color::White, Color::Blue)
        };
        CrosstermBackend::write_cell(&mut out, Point::new(2, 1), 'x', st).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('x'));
        // Bold (1) before the char, reset (0) after it.
        let x = text.find('x').unwrap();
        assert!(text[..x].contains("\u{1b}[1m"));
        assert!(text[x..].contains("\u{1b}[0m"));
    }

    #[test]
    fn poll_timeout_defaults_to_zero() {
        assert_eq!(CrosstermBackend::new().poll_timeout, Duration::ZERO);
        let b = CrosstermBackend::new().with_poll_timeout(Duration::from_millis(10));
        assert_eq!(b.poll_timeout, Duration::from_millis(10));
    }
}

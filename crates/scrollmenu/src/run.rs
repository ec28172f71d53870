//! The menu loop: animate, draw, flush, poll, dispatch.

use std::time::Instant;

use scrollmenu_core::Backend;

use crate::config::MenuConfig;
use crate::descriptor::MenuDescriptor;
use crate::error::MenuError;
use crate::nav::Navigator;

/// How a menu run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOutcome {
    /// The item at this index was confirmed.
    Selected(usize),
    /// The user backed out.
    Aborted,
}

impl MenuOutcome {
    /// The selected index, or `-1` when aborted.
    pub fn index(self) -> i32 {
        match self {
            MenuOutcome::Selected(i) => i as i32,
            MenuOutcome::Aborted => -1,
        }
    }

    pub fn selected(self) -> Option<usize> {
        match self {
            MenuOutcome::Selected(i) => Some(i),
            MenuOutcome::Aborted => None,
        }
    }
}

/// Show a plain list of items with default settings.
pub fn run_items<B, I, S>(backend: &mut B, items: I) -> Result<MenuOutcome, MenuError>
where
    B: Backend + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut desc = MenuDescriptor::<()>::new(items);
    run_menu(backend, &mut desc)
}

/// Run `desc` with the default [`MenuConfig`].
pub fn run_menu<B, T>(
    backend: &mut B,
    desc: &mut MenuDescriptor<T>,
) -> Result<MenuOutcome, MenuError>
where
    B: Backend + ?Sized,
{
    run_menu_with(backend, desc, &MenuConfig::default())
}

/// Run `desc` until an item is confirmed or the user backs out.
///
/// The backend must already be initialized; the loop never calls
/// [`Backend::init`] or [`Backend::close`]. Key polling does not block, so
/// animation keeps going while the user is idle.
pub fn run_menu_with<B, T>(
    backend: &mut B,
    desc: &mut MenuDescriptor<T>,
    config: &MenuConfig,
) -> Result<MenuOutcome, MenuError>
where
    B: Backend + ?Sized,
{
    let screen = backend.screen_size()?;
    let mut nav = Navigator::start(desc, screen, Instant::now())?;
    let speed = config.scroll_speed();

    loop {
        nav.tick(desc, Instant::now(), speed);
        nav.draw(desc, backend, &config.style);
        backend.flush()?;

        if !backend.key_available()? {
            continue;
        }
        let Some(key) = backend.read_key()? else {
            continue;
        };
        log::trace!("key {key:?}");
        if let Some(outcome) = nav.handle_key(desc, key, &config.keys)? {
            log::debug!("menu finished: {outcome:?}");
            return Ok(outcome);
        }
    }
}

//! Scrolling terminal menus.
//!
//! A [`MenuDescriptor`] lists the items, optional title and footer, and
//! size/position hints. [`run_menu`] lays it out on the backend's screen,
//! draws it, and lets the user move with the arrow keys until an item is
//! confirmed or the menu is dismissed. Items too long for the menu bounce
//! back and forth while selected; the footer runs as a marquee.
//!
//! Select handlers ([`MenuDescriptor::on_select`]) may edit the
//! descriptor and answer with a key that is fed back into the menu, which
//! is how toggles, counters and growing lists are built.
//!
//! ```no_run
//! # fn demo<B: scrollmenu_core::Backend>(backend: &mut B) -> Result<(), scrollmenu::MenuError> {
//! use scrollmenu::{MenuDescriptor, run_menu};
//!
//! let mut desc = MenuDescriptor::<()>::new(["New game", "Load", "Quit"])
//!     .title("Main menu")
//!     .footer("Arrows move, Enter picks, Esc leaves. ");
//! let outcome = run_menu(backend, &mut desc)?;
//! println!("picked {}", outcome.index());
//! # Ok(())
//! # }
//! ```

mod config;
mod descriptor;
mod error;
mod geometry;
mod nav;
mod render;
mod run;
mod scroll;

pub use config::{DEFAULT_SCROLL_SPEED_MS, KeyAction, MenuConfig, MenuKeys, MenuStyle};
pub use descriptor::{Callback, DEFAULT_FOOTER_HEIGHT, DEFAULT_HEADER_HEIGHT, MenuDescriptor};
pub use error::MenuError;
pub use geometry::{BOUNDARY_COLS, Layout, resolve};
pub use nav::Navigator;
pub use run::{MenuOutcome, run_items, run_menu, run_menu_with};
pub use scroll::{Bounce, BounceScroll, Marquee, window, wrapped_window};

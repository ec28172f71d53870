//! **scrollmenu-core**: the types shared by the scrollmenu crates.
//!
//! Geometry primitives, styled cells, a screen-sized cell grid with frame
//! diffing, the key vocabulary, and the [`Backend`] capability a menu
//! renders through. [`HeadlessBackend`] implements it in memory.

pub mod backend;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod headless;
pub mod key;
pub mod style;

pub use backend::Backend;
pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Frame, FrameCell, Grid, compute_frame};
pub use headless::HeadlessBackend;
pub use key::Key;
pub use style::{AttrMask, Color, Style};

use std::fmt;
use std::io;

/// Why a menu could not be shown or navigated.
///
/// None of these is recovered from inside the menu: the caller fixes the
/// configuration (or the terminal) and calls again. A user pressing the
/// back key is not an error, see [`MenuOutcome::Aborted`].
///
/// [`MenuOutcome::Aborted`]: crate::MenuOutcome::Aborted
#[derive(Debug)]
pub enum MenuError {
    /// The screen cannot fit one row of one character between the
    /// selection brackets.
    ScreenTooSmall { rows: i32, cols: i32 },
    /// An explicit top-left corner lies off-screen, or too close to the
    /// right edge for a single column of text.
    OffScreenOrigin { row: i32, col: i32 },
    /// Header and footer leave no room for any item row.
    MenuTooShort { visible_rows: i32 },
    /// No item can be selected.
    NoEnabledItems,
    /// The backend failed.
    Io(io::Error),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScreenTooSmall { rows, cols } => {
                write!(f, "screen too small for a menu ({cols}x{rows})")
            }
            Self::OffScreenOrigin { row, col } => {
                write!(f, "menu top/left ({row}, {col}) is off-screen")
            }
            Self::MenuTooShort { visible_rows } => {
                write!(f, "menu too short to show any items ({visible_rows} rows left)")
            }
            Self::NoEnabledItems => f.write_str("no enabled menu items"),
            Self::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

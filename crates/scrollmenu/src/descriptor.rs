use std::fmt;
use std::rc::Rc;

use scrollmenu_core::Key;

/// Rows reserved for the title block when none is requested.
pub const DEFAULT_HEADER_HEIGHT: i32 = 2;
/// Padding rows above the footer line when none is requested.
pub const DEFAULT_FOOTER_HEIGHT: i32 = 2;

/// Handler run when its item is selected.
///
/// Receives the descriptor (it may edit items, flags, callbacks and
/// `data`) and the selected index. Returning a select key lets the
/// selection finish and returning a down key moves on. Any other key, like
/// `None`, keeps the menu open where it is.
pub type Callback<T> = Rc<dyn Fn(&mut MenuDescriptor<T>, usize) -> Option<Key>>;

/// Everything a menu shows, plus caller data for callbacks.
///
/// Size and position are hints: `None` means "derive from content" or
/// "center". The menu never writes its computed layout back here, so
/// resolving twice gives the same answer.
pub struct MenuDescriptor<T = ()> {
    /// Top row. Default: centered vertically.
    pub row: Option<i32>,
    /// Left column. Default: centered horizontally.
    pub col: Option<i32>,
    /// Text width between the two boundary columns. Default: the longest
    /// of items and title.
    pub width: Option<i32>,
    /// Total height, header and footer included. Default: everything fits.
    pub height: Option<i32>,
    /// Title line. Default: none.
    pub title: Option<String>,
    /// Rows taken by the title block when a title is set. Default: 2.
    pub header_height: i32,
    /// The entries, top to bottom.
    pub items: Vec<String>,
    /// Per-item enabled flags; a missing flag (or no list) means enabled.
    pub enabled: Option<Vec<bool>>,
    /// Marquee text below the items. Default: none.
    pub footer: Option<String>,
    /// Padding rows above the footer line when a footer is set. Default: 2.
    pub footer_height: i32,
    /// Optional select handler per item.
    pub callbacks: Vec<Option<Callback<T>>>,
    /// Caller state shared with callbacks.
    pub data: T,
}

impl<T: Default> MenuDescriptor<T> {
    /// A descriptor over `items` with every other field at its default.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_data(items, T::default())
    }
}

impl<T> MenuDescriptor<T> {
    /// A descriptor over `items` carrying `data` for the callbacks.
    pub fn with_data<I, S>(items: I, data: T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            row: None,
            col: None,
            width: None,
            height: None,
            title: None,
            header_height: DEFAULT_HEADER_HEIGHT,
            items: items.into_iter().map(Into::into).collect(),
            enabled: None,
            footer: None,
            footer_height: DEFAULT_FOOTER_HEIGHT,
            callbacks: Vec::new(),
            data,
        }
    }

    /// Builder: pin the top-left corner.
    pub fn at(mut self, row: i32, col: i32) -> Self {
        self.row = Some(row);
        self.col = Some(col);
        self
    }

    /// Builder: pin the top row only.
    pub fn row(mut self, row: i32) -> Self {
        self.row = Some(row);
        self
    }

    /// Builder: pin the left column only.
    pub fn col(mut self, col: i32) -> Self {
        self.col = Some(col);
        self
    }

    /// Builder: fix the text width.
    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder: fix the total height.
    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn header_height(mut self, rows: i32) -> Self {
        self.header_height = rows;
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn footer_height(mut self, rows: i32) -> Self {
        self.footer_height = rows;
        self
    }

    /// Builder: set the enabled flags.
    pub fn enabled(mut self, flags: impl IntoIterator<Item = bool>) -> Self {
        self.enabled = Some(flags.into_iter().collect());
        self
    }

    /// Builder: install a select handler for item `index`.
    pub fn on_select<F>(mut self, index: usize, f: F) -> Self
    where
        F: Fn(&mut MenuDescriptor<T>, usize) -> Option<Key> + 'static,
    {
        self.set_callback(index, f);
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether item `index` may be selected.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled
            .as_ref()
            .and_then(|flags| flags.get(index).copied())
            .unwrap_or(true)
    }

    /// Enable or disable item `index`, creating the flag list on demand.
    pub fn set_enabled(&mut self, index: usize, on: bool) {
        let count = self.items.len().max(index + 1);
        let flags = self.enabled.get_or_insert_with(Vec::new);
        if flags.len() < count {
            flags.resize(count, true);
        }
        flags[index] = on;
    }

    /// The nearest enabled item strictly after `from` in direction `step`
    /// (`1` or `-1`).
    ///
    /// Returns an index outside `0..item_count()` when the walk runs off
    /// either end, so the caller decides whether to wrap. Without any
    /// flags this is `from + step`.
    pub fn find_next_enabled(&self, from: i32, step: i32) -> i32 {
        if step == 0 {
            return from;
        }
        let mut i = from + step;
        let Some(flags) = &self.enabled else {
            return i;
        };
        let count = self.items.len() as i32;
        while i >= 0 && i < count && !flags.get(i as usize).copied().unwrap_or(true) {
            i += step;
        }
        i
    }

    /// The handler for item `index`, if one is installed.
    pub fn callback(&self, index: usize) -> Option<Callback<T>> {
        self.callbacks.get(index).and_then(Clone::clone)
    }

    /// Install a select handler for item `index`.
    pub fn set_callback<F>(&mut self, index: usize, f: F)
    where
        F: Fn(&mut MenuDescriptor<T>, usize) -> Option<Key> + 'static,
    {
        if self.callbacks.len() <= index {
            self.callbacks.resize_with(index + 1, || None);
        }
        self.callbacks[index] = Some(Rc::new(f));
    }

    /// Length in chars of the longest item.
    pub fn longest_item(&self) -> i32 {
        self.items
            .iter()
            .map(|s| s.chars().count() as i32)
            .max()
            .unwrap_or(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for MenuDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuDescriptor")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .field("header_height", &self.header_height)
            .field("items", &self.items)
            .field("enabled", &self.enabled)
            .field("footer", &self.footer)
            .field("footer_height", &self.footer_height)
            .field(
                "callbacks",
                &self.callbacks.iter().filter(|c| c.is_some()).count(),
            )
            .field("data", &self.data)
            .finish()
    }
}

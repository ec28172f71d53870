//! Where a menu goes on screen and how many items it shows at once.

use scrollmenu_core::{Point, Range};

use crate::descriptor::MenuDescriptor;
use crate::error::MenuError;

/// Columns taken by the selection brackets around the item text.
pub const BOUNDARY_COLS: i32 = 2;

/// The resolved placement of a menu.
///
/// ```text
/// origin ->  Title           <- header_rows (title line + padding)
///           >selected item<  <- items_top()
///            other item      <- visible_rows in total
///                            <- footer_rows of padding
///            footer marquee  <- footer_line()
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner (column, row).
    pub origin: Point,
    /// Text columns between the boundary glyphs.
    pub width: i32,
    /// Rows of header, items and footer padding.
    pub height: i32,
    pub header_rows: i32,
    pub footer_rows: i32,
    /// Item rows shown at once.
    pub visible_rows: i32,
}

impl Layout {
    /// Row of the first item.
    #[inline]
    pub fn items_top(&self) -> i32 {
        self.origin.y + self.header_rows
    }

    /// Row of the footer text, right below the footer padding.
    #[inline]
    pub fn footer_line(&self) -> i32 {
        self.items_top() + self.visible_rows + self.footer_rows
    }

    /// Columns of a full row, boundary glyphs included.
    #[inline]
    pub fn row_width(&self) -> i32 {
        self.width + BOUNDARY_COLS
    }

    /// Every cell the menu paints.
    pub fn area(&self, has_footer: bool) -> Range {
        let rows = if has_footer { self.height + 1 } else { self.height };
        Range::at(self.origin, Point::new(self.row_width(), rows))
    }
}

/// Compute the layout of `desc` on a screen of `screen.x` columns by
/// `screen.y` rows.
///
/// Explicit hints win, then get shrunk to fit: the height so that one row
/// stays free below the menu for the footer line, the width so that both
/// boundary glyphs stay on screen. Missing coordinates center the menu.
pub fn resolve<T>(desc: &MenuDescriptor<T>, screen: Point) -> Result<Layout, MenuError> {
    let (rows, cols) = (screen.y, screen.x);
    if rows < 1 || cols < 1 + BOUNDARY_COLS {
        return Err(MenuError::ScreenTooSmall { rows, cols });
    }

    let y0 = desc.row.unwrap_or(0);
    let x0 = desc.col.unwrap_or(0);
    if y0 < 0 || y0 >= rows || x0 < 0 || x0 > cols - (1 + BOUNDARY_COLS) {
        return Err(MenuError::OffScreenOrigin { row: y0, col: x0 });
    }

    let header_rows = if desc.title.is_some() { desc.header_height.max(0) } else { 0 };
    let footer_rows = if desc.footer.is_some() { desc.footer_height.max(0) } else { 0 };

    let mut height = desc
        .height
        .unwrap_or(desc.item_count() as i32 + header_rows + footer_rows)
        .max(0);
    if y0 + height > rows - 1 {
        height = rows - y0 - 1;
    }

    let title_len = desc.title.as_deref().map_or(0, |t| t.chars().count() as i32);
    let mut width = desc
        .width
        .unwrap_or_else(|| desc.longest_item().max(title_len))
        .max(0);
    if x0 + width > cols - BOUNDARY_COLS {
        width = cols - x0 - BOUNDARY_COLS;
    }

    let y = desc.row.unwrap_or_else(|| ((rows - height) / 2).max(0));
    let x = desc
        .col
        .unwrap_or_else(|| ((cols - (width + BOUNDARY_COLS)) / 2).max(0));

    let visible_rows = height - header_rows - footer_rows;
    if visible_rows < 1 {
        return Err(MenuError::MenuTooShort { visible_rows });
    }

    let layout = Layout {
        origin: Point::new(x, y),
        width,
        height,
        header_rows,
        footer_rows,
        visible_rows,
    };
    log::trace!("resolved menu layout {layout:?} on {cols}x{rows}");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> MenuDescriptor {
        MenuDescriptor::new((0..n).map(|i| format!("entry {i}")))
    }

    #[test]
    fn tiny_screens_are_rejected() {
        let d = items(3);
        assert!(matches!(
            resolve(&d, Point::new(2, 1)),
            Err(MenuError::ScreenTooSmall { rows: 1, cols: 2 })
        ));
        assert!(matches!(
            resolve(&d, Point::new(80, 0)),
            Err(MenuError::ScreenTooSmall { .. })
        ));
    }

    #[test]
    fn off_screen_origin_is_rejected() {
        let screen = Point::new(20, 10);
        for (row, col) in [(-1, 0), (10, 0), (0, -1), (0, 18)] {
            let d = items(1).at(row, col);
            assert!(
                matches!(resolve(&d, screen), Err(MenuError::OffScreenOrigin { .. })),
                "({row}, {col}) accepted"
            );
        }
        assert!(resolve(&items(1).at(0, 17), screen).is_ok());
    }

    #[test]
    fn content_sized_and_centered() {
        let d = MenuDescriptor::<()>::new(["one", "three", "seven!!"]).title("Pick");
        let l = resolve(&d, Point::new(40, 20)).unwrap();
        assert_eq!(l.width, 7);
        assert_eq!(l.height, 5);
        assert_eq!(l.header_rows, 2);
        assert_eq!(l.footer_rows, 0);
        assert_eq!(l.visible_rows, 3);
        assert_eq!(l.origin, Point::new((40 - 9) / 2, (20 - 5) / 2));
        assert_eq!(l.items_top(), l.origin.y + 2);
    }

    #[test]
    fn title_can_set_the_width() {
        let d = MenuDescriptor::<()>::new(["a"]).title("A longer title");
        assert_eq!(resolve(&d, Point::new(80, 24)).unwrap().width, 14);
    }

    #[test]
    fn height_is_clamped_to_leave_footer_row() {
        let d = items(50).row(4);
        let l = resolve(&d, Point::new(80, 24)).unwrap();
        assert_eq!(l.height, 24 - 4 - 1);
        assert_eq!(l.visible_rows, l.height);
    }

    #[test]
    fn width_is_clamped_to_screen() {
        let d = MenuDescriptor::<()>::new(["x".repeat(100)]).col(5);
        let l = resolve(&d, Point::new(30, 10)).unwrap();
        assert_eq!(l.width, 30 - 5 - 2);
        assert_eq!(l.origin.x + l.row_width(), 30);
    }

    #[test]
    fn explicit_height_beyond_items() {
        let d = MenuDescriptor::<()>::new(["A", "B", "C"]).height(5);
        let l = resolve(&d, Point::new(20, 20)).unwrap();
        assert_eq!(l.visible_rows, 5);
    }

    #[test]
    fn header_and_footer_eat_all_rows() {
        let d = items(4).title("t").footer("f").height(4);
        assert!(matches!(
            resolve(&d, Point::new(20, 20)),
            Err(MenuError::MenuTooShort { visible_rows: 0 })
        ));
    }

    #[test]
    fn single_row_screen_cannot_show_items() {
        assert!(matches!(
            resolve(&items(1), Point::new(10, 1)),
            Err(MenuError::MenuTooShort { .. })
        ));
    }

    #[test]
    fn footer_line_sits_below_padding() {
        let d = items(3).footer("news").footer_height(1).at(0, 0);
        let l = resolve(&d, Point::new(20, 10)).unwrap();
        assert_eq!(l.height, 4);
        assert_eq!(l.footer_line(), 4);
        assert_eq!(l.area(true), Range::new(0, 0, l.row_width(), 5));
    }

    #[test]
    fn resolution_is_idempotent() {
        let d = items(12).title("Menu").footer("bye").width(10);
        let screen = Point::new(33, 17);
        assert_eq!(resolve(&d, screen).unwrap(), resolve(&d, screen).unwrap());
    }

    #[test]
    fn layout_always_fits_the_screen() {
        for cols in 3..40 {
            for rows in 2..30 {
                for n in [1usize, 5, 40] {
                    let d = items(n).footer("f").footer_height(0);
                    let screen = Point::new(cols, rows);
                    let Ok(l) = resolve(&d, screen) else { continue };
                    assert!(l.origin.x >= 0 && l.origin.y >= 0);
                    assert!(l.origin.x + l.row_width() <= cols, "{l:?} on {screen}");
                    assert!(l.origin.y + l.height <= rows, "{l:?} on {screen}");
                    assert!(l.area(true).in_range(Range::new(0, 0, cols, rows)));
                }
            }
        }
    }
}

//! Painting a menu through a [`Backend`]. Every row is written whole,
//! boundary columns included, so a frame fully overwrites the last one.

use scrollmenu_core::{Backend, Point, Range, Style};

use crate::config::MenuStyle;
use crate::descriptor::MenuDescriptor;
use crate::geometry::Layout;
use crate::nav::Navigator;
use crate::scroll::{window, wrapped_window};

/// Title line, centered and cut to the menu width, then blank padding
/// rows down to the first item.
pub(crate) fn draw_header<B: Backend + ?Sized>(
    backend: &mut B,
    layout: &Layout,
    title: Option<&str>,
    style: &MenuStyle,
) {
    let Some(title) = title else { return };
    if layout.header_rows < 1 {
        return;
    }
    let width = layout.width as usize;
    let title: String = title.chars().take(width).collect();
    backend.write_str(layout.origin, &format!(" {title:^width$} "), style.title);

    let blank = " ".repeat(layout.row_width() as usize);
    for row in 1..layout.header_rows {
        backend.write_str(layout.origin.shift(0, row), &blank, style.footer);
    }
}

/// The scroll window of items, then filler down to the footer line.
pub(crate) fn draw_items<B, T>(
    backend: &mut B,
    desc: &MenuDescriptor<T>,
    nav: &Navigator,
    style: &MenuStyle,
) where
    B: Backend + ?Sized,
{
    let layout = nav.layout();
    let width = layout.width as usize;
    let visible = layout.visible_rows as usize;
    let count = desc.item_count();
    let top = nav.top();
    let bottom = count.min(top + visible);
    let x = layout.origin.x;
    let mut y = layout.items_top();

    for (i, text) in desc.items.iter().enumerate().take(bottom).skip(top) {
        let selected = i == nav.selected();
        let (open, text, close, role) = if selected {
            (
                style.select_open,
                window(text, nav.item_scroll().offset(), width),
                style.select_close,
                style.selected,
            )
        } else {
            let close = if i == top && top != 0 {
                style.more_above
            } else if i == top + visible - 1 && i != count - 1 {
                style.more_below
            } else {
                ' '
            };
            let role = if desc.is_enabled(i) { style.item } else { style.disabled };
            (' ', window(text, 0, width), close, role)
        };
        backend.write_str(Point::new(x, y), &format!("{open}{text}{close}"), role);
        y += 1;
    }

    let blank = " ".repeat(layout.row_width() as usize);
    while y < layout.footer_line() {
        backend.write_str(Point::new(x, y), &blank, style.footer);
        y += 1;
    }
}

/// The footer marquee on its own line, one blank column either side.
pub(crate) fn draw_footer<B: Backend + ?Sized>(
    backend: &mut B,
    layout: &Layout,
    footer: Option<&str>,
    offset: usize,
    style: &MenuStyle,
) {
    let Some(footer) = footer else { return };
    let text = wrapped_window(footer, offset, layout.width as usize);
    backend.write_str(
        Point::new(layout.origin.x, layout.footer_line()),
        &format!(" {text} "),
        style.footer,
    );
}

/// Clear cells the menu no longer covers.
pub(crate) fn blank_area<B: Backend + ?Sized>(backend: &mut B, area: Range) {
    let blank = " ".repeat(area.width().max(0) as usize);
    for y in area.min.y..area.max.y {
        backend.write_str(Point::new(area.min.x, y), &blank, Style::default());
    }
}

//! Cursor state of a running menu and the key protocol that moves it.

use std::time::{Duration, Instant};

use scrollmenu_core::{Backend, Key, Point, Range};

use crate::config::{KeyAction, MenuKeys, MenuStyle};
use crate::descriptor::MenuDescriptor;
use crate::error::MenuError;
use crate::geometry::{Layout, resolve};
use crate::render;
use crate::run::MenuOutcome;
use crate::scroll::{BounceScroll, Marquee};

/// Selection, scroll window and animation state of one menu run.
///
/// Invariants while the menu is open: `selected < item_count`, and
/// `top <= selected < top + visible_rows`.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Point,
    layout: Layout,
    item_count: usize,
    selected: usize,
    top: usize,
    item_scroll: BounceScroll,
    footer: Marquee,
    last_tick: Instant,
    header_dirty: bool,
    stale_area: Option<Range>,
}

impl Navigator {
    /// Lay out `desc` on `screen` and select its first enabled item.
    pub fn start<T>(
        desc: &MenuDescriptor<T>,
        screen: Point,
        now: Instant,
    ) -> Result<Self, MenuError> {
        let item_count = desc.item_count();
        if item_count == 0 {
            return Err(MenuError::NoEnabledItems);
        }
        let layout = resolve(desc, screen)?;
        let first = desc.find_next_enabled(-1, 1);
        if first < 0 || first >= item_count as i32 {
            return Err(MenuError::NoEnabledItems);
        }

        let selected = first as usize;
        let visible = layout.visible_rows as usize;
        let top = if selected >= visible { selected + 1 - visible } else { 0 };
        log::debug!(
            "menu started: {item_count} items, {visible} visible, first enabled {selected}"
        );

        Ok(Self {
            screen,
            layout,
            item_count,
            selected,
            top,
            item_scroll: BounceScroll::default(),
            footer: Marquee::default(),
            last_tick: now,
            header_dirty: true,
            stale_area: None,
        })
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First item in the scroll window.
    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn item_scroll(&self) -> &BounceScroll {
        &self.item_scroll
    }

    #[inline]
    pub fn footer_offset(&self) -> usize {
        self.footer.offset()
    }

    /// Advance the animations if `speed` has elapsed since the last step.
    /// Returns whether anything stepped.
    pub fn tick<T>(&mut self, desc: &MenuDescriptor<T>, now: Instant, speed: Duration) -> bool {
        if now.saturating_duration_since(self.last_tick) < speed {
            return false;
        }
        if let Some(text) = desc.items.get(self.selected) {
            self.item_scroll
                .advance(text.chars().count(), self.layout.width as usize);
        }
        if let Some(footer) = &desc.footer {
            self.footer.advance(footer.chars().count());
        }
        self.last_tick = now;
        true
    }

    /// Paint the menu into `backend` (without flushing).
    pub fn draw<B, T>(&mut self, desc: &MenuDescriptor<T>, backend: &mut B, style: &MenuStyle)
    where
        B: Backend + ?Sized,
    {
        if let Some(area) = self.stale_area.take() {
            render::blank_area(backend, area);
        }
        if self.header_dirty {
            render::draw_header(backend, &self.layout, desc.title.as_deref(), style);
            self.header_dirty = false;
        }
        render::draw_items(backend, desc, self, style);
        render::draw_footer(
            backend,
            &self.layout,
            desc.footer.as_deref(),
            self.footer.offset(),
            style,
        );
    }

    /// Dispatch a key. Select handlers may answer with a select key, which
    /// confirms the item, or a down key, which is dispatched in turn. Any
    /// other answer is dropped.
    pub fn handle_key<T>(
        &mut self,
        desc: &mut MenuDescriptor<T>,
        key: Key,
        keys: &MenuKeys,
    ) -> Result<Option<MenuOutcome>, MenuError> {
        let mut pending = Some(key);
        while let Some(key) = pending.take() {
            match keys.action(&key) {
                KeyAction::Down => self.move_down(desc)?,
                KeyAction::Up => self.move_up(desc)?,
                KeyAction::Select => {
                    let mut current = Some(key);
                    if let Some(callback) = desc.callback(self.selected) {
                        log::debug!("running select handler of item {}", self.selected);
                        // Only a select key or Down may be injected.
                        current = callback(desc, self.selected).filter(|k| {
                            keys.is_select(k) || keys.action(k) == KeyAction::Down
                        });
                        if desc.item_count() != self.item_count {
                            self.relayout(desc)?;
                        }
                    }
                    match current {
                        Some(k) if keys.is_select(&k) => {
                            return Ok(Some(MenuOutcome::Selected(self.selected)));
                        }
                        other => pending = other,
                    }
                }
                KeyAction::Back => return Ok(Some(MenuOutcome::Aborted)),
                KeyAction::Ignore => break,
            }
        }
        Ok(None)
    }

    fn move_down<T>(&mut self, desc: &MenuDescriptor<T>) -> Result<(), MenuError> {
        self.item_scroll.reset();
        let count = self.item_count as i32;
        let visible = self.layout.visible_rows;
        let mut top = self.top as i32;

        let mut i = desc.find_next_enabled(self.selected as i32, 1);
        if i >= count {
            i = desc.find_next_enabled(-1, 1);
            if i >= count {
                return Err(MenuError::NoEnabledItems);
            }
            top = 0;
        }
        if i - top >= visible {
            top = i - visible + 1;
        }

        self.select(i as usize, top as usize);
        Ok(())
    }

    fn move_up<T>(&mut self, desc: &MenuDescriptor<T>) -> Result<(), MenuError> {
        self.item_scroll.reset();
        let count = self.item_count as i32;
        let visible = self.layout.visible_rows;
        let mut top = self.top as i32;

        let mut i = desc.find_next_enabled(self.selected as i32, -1);
        if i < 0 {
            i = desc.find_next_enabled(count, -1);
            if i < 0 {
                return Err(MenuError::NoEnabledItems);
            }
            top = (count - visible).max(0);
        }
        if top > i {
            top = i;
        }

        self.select(i as usize, top as usize);
        Ok(())
    }

    fn select(&mut self, index: usize, top: usize) {
        log::trace!("selection {} -> {index}, window top {top}", self.selected);
        self.selected = index;
        self.top = top;
    }

    /// Re-fit after a handler changed the number of items.
    fn relayout<T>(&mut self, desc: &MenuDescriptor<T>) -> Result<(), MenuError> {
        let count = desc.item_count();
        log::debug!("item count changed {} -> {count}", self.item_count);
        self.item_count = count;
        if count == 0 {
            return Err(MenuError::NoEnabledItems);
        }

        let layout = resolve(desc, self.screen)?;
        if self.selected >= count {
            let last = desc.find_next_enabled(count as i32, -1);
            if last < 0 {
                return Err(MenuError::NoEnabledItems);
            }
            self.selected = last as usize;
            self.item_scroll.reset();
        }

        let visible = layout.visible_rows as usize;
        self.top = self.top.min(count.saturating_sub(visible));
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + visible {
            self.top = self.selected + 1 - visible;
        }

        if layout != self.layout {
            log::debug!("menu moved from {:?} to {layout:?}", self.layout);
            self.stale_area = Some(self.layout.area(desc.footer.is_some()));
            self.header_dirty = true;
            self.layout = layout;
        }
        Ok(())
    }
}

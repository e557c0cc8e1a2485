use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, ScrollbarColors, ScrollbarGlyphs, TextStyle};

use super::{Buffer, Cell};

/// Drawing surface a widget paints onto.
///
/// Coordinates are absolute canvas positions. Anything that falls outside the
/// surface is clipped silently, so callers never need to pre-clip.
pub trait Canvas {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Fill `rect` with copies of `cell`.
    fn fill_rect(&mut self, rect: Rect, cell: Cell);

    /// Write `text` left to right starting at `(x, y)`.
    /// Returns the number of columns written.
    fn put_text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16;

    /// Apply `style` to every cell in `rect`, keeping chars and colors.
    fn set_style(&mut self, rect: Rect, style: TextStyle);

    /// Draw a one-column vertical scrollbar of `height` rows at `(x, y)`.
    ///
    /// Row 0 holds the up arrow and row `height - 1` the down arrow. The rows
    /// between them are track, except `thumb` (relative to `y`) which gets the
    /// thumb glyph when it lands on a track row.
    fn draw_scrollbar(
        &mut self,
        x: u16,
        y: u16,
        height: u16,
        thumb: Option<u16>,
        colors: ScrollbarColors,
        glyphs: ScrollbarGlyphs,
    );
}

impl Canvas for Buffer {
    fn width(&self) -> u16 {
        Buffer::width(self)
    }

    fn height(&self) -> u16 {
        Buffer::height(self)
    }

    fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom().min(Buffer::height(self)) {
            for x in rect.x..rect.right().min(Buffer::width(self)) {
                self.set(x, y, cell);
            }
        }
    }

    fn put_text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16 {
        let right = Buffer::width(self);
        if y >= Buffer::height(self) {
            return 0;
        }

        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            // A wide char that would straddle the edge is dropped entirely.
            if col.saturating_add(w) > right {
                break;
            }
            self.set(col, y, Cell::new(ch).with_fg(fg).with_bg(bg));
            if w == 2 {
                self.set(col + 1, y, Cell::continuation(fg, bg));
            }
            col += w;
        }
        col - x
    }

    fn set_style(&mut self, rect: Rect, style: TextStyle) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = cell.with_style(style);
                }
            }
        }
    }

    fn draw_scrollbar(
        &mut self,
        x: u16,
        y: u16,
        height: u16,
        thumb: Option<u16>,
        colors: ScrollbarColors,
        glyphs: ScrollbarGlyphs,
    ) {
        if height == 0 {
            return;
        }
        let last = height - 1;

        for row in 0..height {
            let cell = if row == 0 {
                Cell::new(glyphs.up)
                    .with_fg(colors.track_fg)
                    .with_bg(colors.track_bg)
            } else if row == last {
                Cell::new(glyphs.down)
                    .with_fg(colors.track_fg)
                    .with_bg(colors.track_bg)
            } else if thumb == Some(row) {
                Cell::new(glyphs.thumb)
                    .with_fg(colors.thumb_fg)
                    .with_bg(colors.thumb_bg)
            } else {
                Cell::new(glyphs.track)
                    .with_fg(colors.track_fg)
                    .with_bg(colors.track_bg)
            };
            self.set(x, y.saturating_add(row), cell);
        }
    }
}

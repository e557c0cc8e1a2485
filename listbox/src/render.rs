//! Painting the list box onto a canvas.

use termgrid::text::align_text;
use termgrid::{
    Canvas, Cell, ColorRole, Rgb, ScrollbarColors, TextAlign, TextStyle, Theme, real_color,
};

use crate::scrollbar;
use crate::state::ListBox;

impl ListBox {
    /// Draw the control at its position. Reads state only.
    ///
    /// A disabled list box is drawn dimmed.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, theme: &dyn Theme) {
        let (fg, bg) = self.base_colors(theme);
        canvas.fill_rect(self.rect, Cell::blank(fg, bg));

        self.paint_items(canvas, theme, fg, bg);
        self.paint_scrollbar(canvas, theme);

        if !self.enabled {
            canvas.set_style(self.rect, TextStyle::new().dim());
        }
    }

    fn base_colors(&self, theme: &dyn Theme) -> (Rgb, Rgb) {
        let (text_role, back_role) = if self.active {
            (ColorRole::EditActiveText, ColorRole::EditActiveBack)
        } else {
            (ColorRole::EditText, ColorRole::EditBack)
        };
        (
            real_color(theme, self.colors.text, text_role),
            real_color(theme, self.colors.back, back_role),
        )
    }

    fn paint_items<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        theme: &dyn Theme,
        fg: Rgb,
        bg: Rgb,
    ) {
        let item_area = self.rect.shrink(0, 1, 0, 0);
        if item_area.is_empty() {
            return;
        }

        let sel_fg = real_color(theme, self.colors.active_text, ColorRole::SelectionText);
        let sel_bg = real_color(theme, self.colors.active_back, ColorRole::SelectionBack);

        let last = (self.top_line + self.viewport_height()).min(self.items.len());
        for (dy, index) in (self.top_line..last).enumerate() {
            let (f, b) = if self.selection == Some(index) {
                (sel_fg, sel_bg)
            } else {
                (fg, bg)
            };

            let row = item_area.row(dy as u16);
            canvas.fill_rect(row, Cell::blank(f, b));
            let (_, text) = align_text(&self.items[index], row.width as usize, TextAlign::Left);
            canvas.put_text(row.x, row.y, &text, f, b);
        }
    }

    fn paint_scrollbar<C: Canvas + ?Sized>(&self, canvas: &mut C, theme: &dyn Theme) {
        let colors = ScrollbarColors {
            track_fg: real_color(theme, self.colors.text, ColorRole::ScrollText),
            track_bg: real_color(theme, self.colors.back, ColorRole::ScrollBack),
            thumb_fg: real_color(theme, self.colors.text, ColorRole::ThumbText),
            thumb_bg: real_color(theme, self.colors.back, ColorRole::ThumbBack),
        };
        let height = self.rect.height;
        let thumb = scrollbar::thumb_row(self.selection, self.items.len(), height);

        canvas.draw_scrollbar(
            self.rect.right() - 1,
            self.rect.y,
            height,
            thumb,
            colors,
            theme.scrollbar_glyphs(),
        );
    }
}

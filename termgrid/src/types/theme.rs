use crate::types::{Color, Rgb};

/// Semantic color slots a widget asks the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    EditText,
    EditBack,
    EditActiveText,
    EditActiveBack,
    SelectionText,
    SelectionBack,
    ScrollText,
    ScrollBack,
    ThumbText,
    ThumbBack,
}

/// Characters used to draw a vertical scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarGlyphs {
    pub up: char,
    pub down: char,
    pub track: char,
    pub thumb: char,
}

impl Default for ScrollbarGlyphs {
    fn default() -> Self {
        Self {
            up: '▲',
            down: '▼',
            track: '░',
            thumb: '█',
        }
    }
}

/// Resolved colors for the scrollbar column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarColors {
    pub track_fg: Rgb,
    pub track_bg: Rgb,
    pub thumb_fg: Rgb,
    pub thumb_bg: Rgb,
}

/// A theme maps semantic roles to colors.
pub trait Theme: Send + Sync {
    /// Color for `role`. Returning `Color::Default` makes the resolver fall
    /// back to white text on black.
    fn color(&self, role: ColorRole) -> Color;

    fn scrollbar_glyphs(&self) -> ScrollbarGlyphs {
        ScrollbarGlyphs::default()
    }
}

/// Pick the first concrete color among a widget override and the theme role.
///
/// Text roles fall back to white and background roles to black when neither
/// candidate is set.
pub fn real_color(theme: &dyn Theme, override_color: Color, role: ColorRole) -> Rgb {
    if let Some(rgb) = override_color.to_rgb() {
        return rgb;
    }
    if let Some(rgb) = theme.color(role).to_rgb() {
        return rgb;
    }
    match role {
        ColorRole::EditText
        | ColorRole::EditActiveText
        | ColorRole::SelectionText
        | ColorRole::ScrollText
        | ColorRole::ThumbText => Rgb::WHITE,
        ColorRole::EditBack
        | ColorRole::EditActiveBack
        | ColorRole::SelectionBack
        | ColorRole::ScrollBack
        | ColorRole::ThumbBack => Rgb::BLACK,
    }
}

/// Minimal readable theme in gray tones with a blue selection bar.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub edit_text: Color,
    pub edit_back: Color,
    pub edit_active_text: Color,
    pub edit_active_back: Color,
    pub selection_text: Color,
    pub selection_back: Color,
    pub scroll_text: Color,
    pub scroll_back: Color,
    pub thumb_text: Color,
    pub thumb_back: Color,
    pub glyphs: ScrollbarGlyphs,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            edit_text: Color::oklch(0.85, 0.0, 0.0),
            edit_back: Color::oklch(0.2, 0.0, 0.0),
            edit_active_text: Color::oklch(1.0, 0.0, 0.0),
            edit_active_back: Color::oklch(0.25, 0.02, 250.0),
            selection_text: Color::oklch(0.95, 0.0, 0.0),
            selection_back: Color::oklch(0.4, 0.1, 220.0),
            scroll_text: Color::rgb(60, 60, 60),
            scroll_back: Color::oklch(0.15, 0.0, 0.0),
            thumb_text: Color::rgb(150, 150, 150),
            thumb_back: Color::oklch(0.15, 0.0, 0.0),
            glyphs: ScrollbarGlyphs {
                up: '▲',
                down: '▼',
                track: '░',
                thumb: '█',
            },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::EditText => self.edit_text,
            ColorRole::EditBack => self.edit_back,
            ColorRole::EditActiveText => self.edit_active_text,
            ColorRole::EditActiveBack => self.edit_active_back,
            ColorRole::SelectionText => self.selection_text,
            ColorRole::SelectionBack => self.selection_back,
            ColorRole::ScrollText => self.scroll_text,
            ColorRole::ScrollBack => self.scroll_back,
            ColorRole::ThumbText => self.thumb_text,
            ColorRole::ThumbBack => self.thumb_back,
        }
    }

    fn scrollbar_glyphs(&self) -> ScrollbarGlyphs {
        self.glyphs
    }
}

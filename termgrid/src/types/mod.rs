mod color;
mod enums;
mod theme;

pub use color::{Color, Rgb};
pub use enums::{TextAlign, TextStyle};
pub use theme::{
    real_color, ColorRole, DefaultTheme, ScrollbarColors, ScrollbarGlyphs, Theme,
};

use termgrid::{real_color, Color, ColorRole, DefaultTheme, Rgb, Theme};

struct BlankTheme;

impl Theme for BlankTheme {
    fn color(&self, _role: ColorRole) -> Color {
        Color::Default
    }
}

#[test]
fn test_override_wins_over_theme() {
    let theme = DefaultTheme::new();
    let rgb = real_color(&theme, Color::rgb(1, 2, 3), ColorRole::EditText);
    assert_eq!(rgb, Rgb::new(1, 2, 3));
}

#[test]
fn test_default_override_falls_back_to_theme() {
    let theme = DefaultTheme {
        selection_back: Color::rgb(0, 0, 200),
        ..DefaultTheme::new()
    };
    let rgb = real_color(&theme, Color::Default, ColorRole::SelectionBack);
    assert_eq!(rgb, Rgb::new(0, 0, 200));
}

#[test]
fn test_unset_everywhere_uses_readable_fallback() {
    assert_eq!(
        real_color(&BlankTheme, Color::Default, ColorRole::EditText),
        Rgb::WHITE
    );
    assert_eq!(
        real_color(&BlankTheme, Color::Default, ColorRole::EditBack),
        Rgb::BLACK
    );
}

#[test]
fn test_oklch_white_converts() {
    let rgb = Color::oklch(1.0, 0.0, 0.0).to_rgb().unwrap();
    assert!(rgb.r > 250 && rgb.g > 250 && rgb.b > 250);
}

#[test]
fn test_default_color_has_no_rgb() {
    assert!(Color::Default.to_rgb().is_none());
    assert!(Color::Default.is_default());
}

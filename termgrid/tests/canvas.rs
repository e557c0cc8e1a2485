use termgrid::{Buffer, Canvas, Cell, Rect, Rgb, ScrollbarColors, ScrollbarGlyphs, TextStyle};

const FG: Rgb = Rgb::new(200, 200, 200);
const BG: Rgb = Rgb::new(10, 20, 30);

fn colors() -> ScrollbarColors {
    ScrollbarColors {
        track_fg: Rgb::new(60, 60, 60),
        track_bg: Rgb::BLACK,
        thumb_fg: Rgb::new(150, 150, 150),
        thumb_bg: Rgb::BLACK,
    }
}

// ============================================================================
// fill_rect
// ============================================================================

#[test]
fn test_fill_rect_covers_area() {
    let mut buf = Buffer::new(10, 5);
    buf.fill_rect(Rect::new(2, 1, 3, 2), Cell::blank(FG, BG));

    assert_eq!(buf.get(2, 1).unwrap().bg, BG);
    assert_eq!(buf.get(4, 2).unwrap().bg, BG);
    // Just outside the rect
    assert_eq!(buf.get(5, 1).unwrap().bg, Rgb::BLACK);
    assert_eq!(buf.get(2, 3).unwrap().bg, Rgb::BLACK);
}

#[test]
fn test_fill_rect_clips_to_buffer() {
    let mut buf = Buffer::new(4, 4);
    buf.fill_rect(Rect::new(2, 2, 10, 10), Cell::blank(FG, BG));

    assert_eq!(buf.get(3, 3).unwrap().bg, BG);
    assert!(buf.get(4, 4).is_none());
}

// ============================================================================
// put_text
// ============================================================================

#[test]
fn test_put_text_writes_chars_and_colors() {
    let mut buf = Buffer::new(10, 2);
    let written = buf.put_text(1, 1, "abc", FG, BG);

    assert_eq!(written, 3);
    assert_eq!(buf.row_text(1), " abc      ");
    let cell = buf.get(2, 1).unwrap();
    assert_eq!(cell.char, 'b');
    assert_eq!(cell.fg, FG);
    assert_eq!(cell.bg, BG);
}

#[test]
fn test_put_text_stops_at_right_edge() {
    let mut buf = Buffer::new(5, 1);
    let written = buf.put_text(3, 0, "hello", FG, BG);

    assert_eq!(written, 2);
    assert_eq!(buf.row_text(0), "   he");
}

#[test]
fn test_put_text_wide_char_sets_continuation() {
    let mut buf = Buffer::new(6, 1);
    let written = buf.put_text(0, 0, "日x", FG, BG);

    assert_eq!(written, 3);
    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
}

#[test]
fn test_put_text_drops_wide_char_straddling_edge() {
    let mut buf = Buffer::new(3, 1);
    let written = buf.put_text(0, 0, "ab日", FG, BG);

    assert_eq!(written, 2);
    assert_eq!(buf.get(2, 0).unwrap().char, ' ');
}

#[test]
fn test_put_text_below_buffer_is_ignored() {
    let mut buf = Buffer::new(3, 1);
    assert_eq!(buf.put_text(0, 5, "abc", FG, BG), 0);
}

// ============================================================================
// set_style
// ============================================================================

#[test]
fn test_set_style_keeps_content() {
    let mut buf = Buffer::new(6, 3);
    buf.put_text(0, 1, "abc", FG, BG);
    buf.set_style(Rect::new(1, 1, 10, 1), TextStyle::new().dim());

    let cell = buf.get(1, 1).unwrap();
    assert!(cell.style.dim);
    assert_eq!(cell.char, 'b');
    assert_eq!(cell.fg, FG);
    assert_eq!(cell.bg, BG);
    // Outside the rect
    assert_eq!(buf.get(0, 1).unwrap().style, TextStyle::new());
    assert_eq!(buf.get(1, 0).unwrap().style, TextStyle::new());
}

#[test]
fn test_styled_cells_show_up_in_diff() {
    let mut buf = Buffer::new(4, 2);
    let before = buf.clone();
    buf.set_style(Rect::new(0, 0, 2, 1), TextStyle::new().dim());

    assert_eq!(buf.diff(&before).count(), 2);
}

// ============================================================================
// draw_scrollbar
// ============================================================================

#[test]
fn test_scrollbar_arrows_track_and_thumb() {
    let mut buf = Buffer::new(1, 5);
    let glyphs = ScrollbarGlyphs::default();
    buf.draw_scrollbar(0, 0, 5, Some(2), colors(), glyphs);

    assert_eq!(buf.get(0, 0).unwrap().char, glyphs.up);
    assert_eq!(buf.get(0, 1).unwrap().char, glyphs.track);
    assert_eq!(buf.get(0, 2).unwrap().char, glyphs.thumb);
    assert_eq!(buf.get(0, 2).unwrap().fg, colors().thumb_fg);
    assert_eq!(buf.get(0, 3).unwrap().char, glyphs.track);
    assert_eq!(buf.get(0, 4).unwrap().char, glyphs.down);
}

#[test]
fn test_scrollbar_without_thumb() {
    let mut buf = Buffer::new(1, 4);
    let glyphs = ScrollbarGlyphs::default();
    buf.draw_scrollbar(0, 0, 4, None, colors(), glyphs);

    assert!((0..4).all(|y| buf.get(0, y).unwrap().char != glyphs.thumb));
}

#[test]
fn test_scrollbar_thumb_never_covers_arrows() {
    let mut buf = Buffer::new(1, 3);
    let glyphs = ScrollbarGlyphs::default();
    buf.draw_scrollbar(0, 0, 3, Some(0), colors(), glyphs);

    assert_eq!(buf.get(0, 0).unwrap().char, glyphs.up);
}

// ============================================================================
// diff
// ============================================================================

#[test]
fn test_diff_reports_changed_cells_only() {
    let a = Buffer::new(3, 3);
    let mut b = Buffer::new(3, 3);
    b.set(1, 2, Cell::new('x'));

    let changed: Vec<_> = b.diff(&a).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, vec![(1, 2, 'x')]);
}

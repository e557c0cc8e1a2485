use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = '…';
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Fit `s` into exactly `width` columns.
///
/// Long text is truncated, short text is padded with spaces according to
/// `align`. Returns the column the visible text starts at together with the
/// padded string.
pub fn align_text(s: &str, width: usize, align: TextAlign) -> (usize, String) {
    let text = truncate_to_width(s, width);
    let text_width = display_width(&text);
    let offset = align_offset(text_width, width, align);

    let mut out = String::with_capacity(width.max(text.len()));
    out.extend(std::iter::repeat(' ').take(offset));
    out.push_str(&text);
    // A dropped wide char can leave the line one column short.
    let trailing = width.saturating_sub(offset + text_width);
    out.extend(std::iter::repeat(' ').take(trailing));

    (offset, out)
}

//! Horizontal scrolling for names wider than their container.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GAP: &str = "   ";

/// The part of `text` visible in `width` cells at scroll step `tick`.
///
/// Text that fits is returned unchanged. Longer text scrolls left one
/// character per tick and wraps around after a short gap.
pub fn marquee(text: &str, width: usize, tick: u64) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let cycle: Vec<char> = text.chars().chain(GAP.chars()).collect();
    let start = (tick % cycle.len() as u64) as usize;

    let mut out = String::new();
    let mut used = 0;
    for &c in cycle.iter().cycle().skip(start) {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

use unicode_width::UnicodeWidthStr;

/// True when `text` needs more terminal cells than `container` offers.
pub fn is_long_name(text: &str, container: u16) -> bool {
    text.width() > usize::from(container)
}

//! Text padding helpers for fixed-width terminal output
//!
//! Widths are measured in characters, not bytes.

/// Center `s` in a field of `width`, filling both sides with `fill`
///
/// When the padding cannot be split evenly the extra fill character goes on
/// the right for even widths and on the left for odd widths. Strings at least
/// `width` characters long are returned unchanged.
pub fn center(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;

    let mut out = String::with_capacity(s.len() + margin);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Left-justify `s` to exactly `width` characters, truncating longer input
pub fn left_justify_truncate(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

//! Rendered column width of strings in a fixed-width terminal context.
//!
//! Report alignment must measure what a label *occupies on screen*, not how
//! many `char`s it contains: CJK labels like `アメリカ` take two columns per
//! character. Characters whose East Asian Width property is Fullwidth, Wide,
//! or Ambiguous count 2 columns; everything else counts 1.

use unicode_width::UnicodeWidthChar;

/// Compute the display width of a string.
///
/// Ambiguous-width characters are treated as wide, matching how they render
/// in CJK terminal fonts.
///
/// # Example
///
/// ```rust
/// use countbylib::display_width;
///
/// assert_eq!(display_width("ABC"), 3);
/// assert_eq!(display_width("日本"), 4);
/// assert_eq!(display_width("Hello日本"), 9);
/// ```
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width_cjk().unwrap_or(1)).sum()
}

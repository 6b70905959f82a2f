//! Hex color helpers for the selection highlight.
//!
//! Kept free of any UI toolkit so the same logic serves the CLI, tests, and
//! whatever front end ends up rendering the band list.

use crate::constants::SELECTION_HIGHLIGHT_ALPHA;

/// Normalize a hex color: trim, prefix `#` if missing, validate 6 hex digits.
pub fn normalize_hex(color: &str) -> Option<String> {
    let trimmed = color.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if body.len() != 6 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{body}"))
}

/// Parse "#RRGGBB" (or "RRGGBB") into channel bytes.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let normalized = normalize_hex(hex)?;
    let body = &normalized[1..];
    let r = u8::from_str_radix(&body[0..2], 16).ok()?;
    let g = u8::from_str_radix(&body[2..4], 16).ok()?;
    let b = u8::from_str_radix(&body[4..6], 16).ok()?;
    Some((r, g, b))
}

/// CSS `rgba()` string at the given alpha.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<String> {
    let (r, g, b) = parse_hex_to_u8(hex)?;
    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// Inline style applied to a band row while it is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightStyle {
    pub color: String,
    pub border_color: String,
    pub background: String,
}

/// Highlight for a selected band: full-strength text and border, translucent
/// background fill. Invalid colors yield `None` rather than an error.
pub fn selection_highlight(color: &str) -> Option<HighlightStyle> {
    let normalized = normalize_hex(color)?;
    let background = hex_to_rgba(&normalized, SELECTION_HIGHLIGHT_ALPHA)?;
    Some(HighlightStyle {
        color: normalized.clone(),
        border_color: normalized,
        background,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#FF5D38").as_deref(), Some("#FF5D38"));
        assert_eq!(normalize_hex("79D8B2").as_deref(), Some("#79D8B2"));
        assert_eq!(normalize_hex("  #FFBD42  ").as_deref(), Some("#FFBD42"));
        assert_eq!(normalize_hex("#FFF"), None);
        assert_eq!(normalize_hex("#GGGGGG"), None);
        assert_eq!(normalize_hex(""), None);
    }

    #[test]
    fn test_parse_hex_to_u8() {
        assert_eq!(parse_hex_to_u8("#FF5D38"), Some((255, 93, 56)));
        assert_eq!(parse_hex_to_u8("000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_to_u8("not-a-color"), None);
    }

    #[test]
    fn test_selection_highlight() {
        let style = selection_highlight("#690571").unwrap();
        assert_eq!(style.color, "#690571");
        assert_eq!(style.border_color, "#690571");
        assert_eq!(style.background, "rgba(105, 5, 113, 0.15)");

        assert_eq!(selection_highlight("purple"), None);
    }
}

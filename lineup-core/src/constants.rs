//! Shared constants.

/// Fallback event color when the backend record carries none.
pub const DEFAULT_EVENT_COLOR: &str = "#3788d8";

/// Text color used on top of event blocks.
pub const EVENT_TEXT_COLOR: &str = "#fff";

/// Opacity of the background fill behind a selected band row.
pub const SELECTION_HIGHLIGHT_ALPHA: f32 = 0.15;

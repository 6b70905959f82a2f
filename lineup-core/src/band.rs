//! Festival bands and the selection payload.

use serde::{Deserialize, Serialize};

/// A festival act as listed by the backend.
///
/// Schedule fields are optional: a band may be listed before its slot is
/// assigned. `selected` is client-side state the backend echoes untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Band {
    /// A band with only the required fields set.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Band {
            id,
            title: title.into(),
            description: None,
            start_date: None,
            end_date: None,
            color: None,
            all_day: None,
            location: None,
            attendees: None,
            status: None,
            selected: false,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Payload for saving a person's picks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub bands: Vec<Band>,
    pub person: String,
}

/// Shuffle a slice into a random presentation order (Fisher-Yates).
pub fn shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = fastrand::usize(..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut ids: Vec<i64> = (0..100).collect();
        shuffle(&mut ids);

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn test_shuffle_handles_trivial_slices() {
        let mut empty: Vec<i64> = vec![];
        shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        shuffle(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        fastrand::seed(42);
        let mut first: Vec<i64> = (0..20).collect();
        shuffle(&mut first);

        fastrand::seed(42);
        let mut second: Vec<i64> = (0..20).collect();
        shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_band_selected_defaults_false_on_wire() {
        let json = r##"{"id": 3, "title": "Los Boomerangs", "color": "#3788d8"}"##;
        let band: Band = serde_json::from_str(json).unwrap();
        assert!(!band.selected);
        assert_eq!(band.color.as_deref(), Some("#3788d8"));
    }
}

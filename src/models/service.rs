//! Service line-item inputs for the slot builder.
//!
//! Two shapes feed a reschedule: the booking rows being moved (authoritative
//! for ids and a fallback for durations) and the optional richer basket of
//! service objects picked in the UI, which may override duration and carries
//! clearer naming for chemical classification. Both are ephemeral inputs;
//! nothing here is persisted by this crate.

use serde::{Deserialize, Serialize};

use crate::api::BookingId;

/// Keyword list for classifying a service as chemical (requiring a
/// processing/developing gap before the next service can begin). Matched
/// case-insensitively as substrings of the service's combined name, title
/// and category text.
///
/// Inherited heuristic: a "requires processing gap" flag on the service
/// catalog would be more robust against renamed services. The predicate is
/// centralised here so that flag can replace it at a single seam.
const CHEMICAL_KEYWORDS: &[&str] = &[
    "tint",
    "colour",
    "color",
    "bleach",
    "toner",
    "gloss",
    "highlights",
    "balayage",
    "foils",
    "perm",
    "relaxer",
    "keratin",
    "chemical",
    "straightening",
];

/// Check whether the combined descriptive text of a service marks it as
/// chemical.
pub fn is_chemical_text(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CHEMICAL_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// An existing booking row being rescheduled.
///
/// Carries the booking id (needed for self-exclusion in the conflict query),
/// its own duration, and enough descriptive text to classify the service
/// when no richer basket entry is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingLine {
    pub id: BookingId,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Duration in minutes. Non-positive values are clamped to 1 minute by
    /// the slot builder.
    pub duration_min: i64,
}

impl BookingLine {
    /// Descriptive text used for chemical classification.
    pub fn classification_text(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {}", self.title, category),
            None => self.title.clone(),
        }
    }

    pub fn is_chemical(&self) -> bool {
        is_chemical_text(&self.classification_text())
    }
}

/// A richer service object from the booking basket.
///
/// When present (same length and order as the booking rows) it overrides the
/// row's duration (`display_duration_min` wins over `duration_min`) and
/// provides clearer name/category text for classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLineItem {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub duration_min: Option<i64>,
    #[serde(default)]
    pub display_duration_min: Option<i64>,
}

impl ServiceLineItem {
    /// Duration override, preferring the display duration.
    pub fn effective_duration_min(&self) -> Option<i64> {
        self.display_duration_min.or(self.duration_min)
    }

    /// Descriptive text used for chemical classification: name, title and
    /// category concatenated.
    pub fn classification_text(&self) -> String {
        let mut text = self.name.clone();
        if let Some(title) = &self.title {
            text.push(' ');
            text.push_str(title);
        }
        if let Some(category) = &self.category {
            text.push(' ');
            text.push_str(category);
        }
        text
    }

    pub fn is_chemical(&self) -> bool {
        is_chemical_text(&self.classification_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chemical_keywords_match_case_insensitively() {
        assert!(is_chemical_text("Full Head Highlights"));
        assert!(is_chemical_text("ROOT TINT"));
        assert!(is_chemical_text("balayage + gloss"));
        assert!(is_chemical_text("Keratin Straightening"));
    }

    #[test]
    fn test_non_chemical_services() {
        assert!(!is_chemical_text("Wet Cut"));
        assert!(!is_chemical_text("Blow Dry"));
        assert!(!is_chemical_text("Beard Trim"));
    }

    #[test]
    fn test_both_colour_spellings() {
        assert!(is_chemical_text("Full Head Colour"));
        assert!(is_chemical_text("Full Head Color"));
    }

    #[test]
    fn test_booking_line_classification_uses_category() {
        let line = BookingLine {
            id: BookingId(1),
            title: "Signature Service".to_string(),
            category: Some("Colour".to_string()),
            duration_min: 60,
        };
        assert!(line.is_chemical());
    }

    #[test]
    fn test_service_item_display_duration_wins() {
        let item = ServiceLineItem {
            name: "Wet Cut".to_string(),
            duration_min: Some(45),
            display_duration_min: Some(30),
            ..Default::default()
        };
        assert_eq!(item.effective_duration_min(), Some(30));
    }

    #[test]
    fn test_service_item_falls_back_to_duration() {
        let item = ServiceLineItem {
            name: "Wet Cut".to_string(),
            duration_min: Some(45),
            ..Default::default()
        };
        assert_eq!(item.effective_duration_min(), Some(45));
    }

    #[test]
    fn test_service_item_classification_concatenates_fields() {
        let item = ServiceLineItem {
            name: "Signature Package".to_string(),
            title: Some("Deluxe".to_string()),
            category: Some("Foils".to_string()),
            ..Default::default()
        };
        assert!(item.is_chemical());
    }
}

//! Report record types.
//!
//! A [`ReportRecord`] is one citizen-submitted civic issue. Records are
//! created by the submission path, never deleted, and only their status
//! field is ever mutated afterwards.
//!
//! Serde names match the JSON layout the web front end persists to local
//! storage (camelCase fields, display-label category strings), so the store
//! can read blobs written by either side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed category taxonomy for reports. Exactly these 7 values exist;
/// the enumeration order is the canonical histogram order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Roads & Transportation")]
    RoadsAndTransportation,
    #[serde(rename = "Water & Sanitation")]
    WaterAndSanitation,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    #[serde(rename = "Streetlights & Public Infrastructure")]
    StreetlightsAndPublicInfrastructure,
    #[serde(rename = "Environment & Pollution")]
    EnvironmentAndPollution,
    #[serde(rename = "Safety & Security")]
    SafetyAndSecurity,
    #[serde(rename = "Others / Miscellaneous")]
    Others,
}

impl Category {
    /// All categories in enumeration order.
    pub const ALL: [Category; 7] = [
        Category::RoadsAndTransportation,
        Category::WaterAndSanitation,
        Category::WasteManagement,
        Category::StreetlightsAndPublicInfrastructure,
        Category::EnvironmentAndPollution,
        Category::SafetyAndSecurity,
        Category::Others,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::RoadsAndTransportation => "Roads & Transportation",
            Category::WaterAndSanitation => "Water & Sanitation",
            Category::WasteManagement => "Waste Management",
            Category::StreetlightsAndPublicInfrastructure => {
                "Streetlights & Public Infrastructure"
            }
            Category::EnvironmentAndPollution => "Environment & Pollution",
            Category::SafetyAndSecurity => "Safety & Security",
            Category::Others => "Others / Miscellaneous",
        }
    }

    /// Reverse of [`Category::label`], for binding UI dropdown values.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolution state of a report. A simple two-state toggle; reports are
/// always created Pending and flipped by an administrative actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Pending,
    Resolved,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Resolved => "Resolved",
        }
    }

    /// The other state of the two-state toggle.
    pub fn toggled(&self) -> Status {
        match self {
            Status::Pending => Status::Resolved,
            Status::Resolved => Status::Pending,
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        match label {
            "Pending" => Some(Status::Pending),
            "Resolved" => Some(Status::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One citizen-submitted civic issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Unique, immutable, time-derived. The sole lookup key.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Free-text place description. May come from reverse geocoding in the
    /// front end; the core treats it as opaque text.
    pub location: String,
    /// Reference to a locally-held image, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: Status,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
        assert_eq!(Category::from_label("All"), None);
        assert_eq!(Category::from_label("Roads"), None);
    }

    #[test]
    fn test_category_default_is_first_member() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(Status::Pending.toggled(), Status::Resolved);
        assert_eq!(Status::Resolved.toggled(), Status::Pending);
        assert_eq!(Status::Pending.toggled().toggled(), Status::Pending);
    }

    #[test]
    fn test_record_serializes_like_the_front_end_blob() {
        let record = ReportRecord {
            id: 1700000000000,
            title: "Pothole".to_string(),
            description: "Large pothole".to_string(),
            category: Category::RoadsAndTransportation,
            location: "5th Ave".to_string(),
            image: None,
            status: Status::Pending,
            submitted_at: Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""category":"Roads & Transportation""#));
        assert!(json.contains(r#""status":"Pending""#));
        assert!(json.contains(r#""submittedAt""#));
        // Absent image is omitted, matching the front end leaving it unset.
        assert!(!json.contains("image"));

        let back: ReportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

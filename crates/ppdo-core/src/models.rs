//! Record shapes tracked by the dashboard.
//!
//! Documents come in two categories (incoming and outgoing) that differ
//! only in their status set and the name of the counterparty, so
//! [`Document`] is generic over its status enum. Concerns extend the
//! document fields with routing and contact details. Offices are the
//! directory entries; whether an office is pinned is not stored here (see
//! [`crate::pins`]).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::record::{FieldValue, Record};

/// A closed set of values with stable kebab-case labels.
pub trait Label: Copy + Eq + 'static {
    /// Every declared value, in display order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }

    /// Case-insensitive lookup; `_` and spaces are read as `-`.
    fn parse_label(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.iter().copied().find(|v| v.as_str() == wanted)
    }
}

macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl Label for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_label(s).ok_or_else(|| CoreError::UnknownValue {
                    field: stringify!($name).to_string(),
                    value: s.to_string(),
                    expected: Self::labels().join(", "),
                })
            }
        }
    };
}

label_enum! {
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

label_enum! {
    /// Lifecycle of a document received by the office.
    IncomingStatus {
        Pending => "pending",
        InProgress => "in-progress",
        Completed => "completed",
        Rejected => "rejected",
    }
}

label_enum! {
    /// Lifecycle of a document issued by the office.
    OutgoingStatus {
        Draft => "draft",
        Sent => "sent",
        Delivered => "delivered",
        Acknowledged => "acknowledged",
    }
}

label_enum! {
    ConcernStatus {
        Pending => "pending",
        InProgress => "in-progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

label_enum! {
    ConcernCategory {
        Infrastructure => "infrastructure",
        Health => "health",
        Environment => "environment",
        PublicSafety => "public-safety",
        SocialServices => "social-services",
        Others => "others",
    }
}

/// Per-category naming for [`Document`].
pub trait DocumentStatus: Label {
    /// Sort key naming the counterparty (`requester` or `recipient`).
    const PARTY_FIELD: &'static str;
    /// Sort key naming the document date.
    const DATE_FIELD: &'static str;
    const SORT_KEYS: &'static [&'static str];
}

impl DocumentStatus for IncomingStatus {
    const PARTY_FIELD: &'static str = "requester";
    const DATE_FIELD: &'static str = "date_submitted";
    const SORT_KEYS: &'static [&'static str] = &[
        "document_number",
        "title",
        "requester",
        "date_submitted",
        "status",
        "priority",
    ];
}

impl DocumentStatus for OutgoingStatus {
    const PARTY_FIELD: &'static str = "recipient";
    const DATE_FIELD: &'static str = "date_issued";
    const SORT_KEYS: &'static [&'static str] = &[
        "document_number",
        "title",
        "recipient",
        "date_issued",
        "status",
        "priority",
    ];
}

/// Render an instant the way list views display it (`Jan 05, 2024`).
pub fn display_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

/// A tracked document. Only the raw instant is stored; the display date is
/// derived from it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<S> {
    pub id: String,
    pub document_number: String,
    pub title: String,
    /// Requester for incoming documents, recipient for outgoing ones.
    pub party: String,
    pub date_raw: DateTime<Utc>,
    pub status: S,
    pub priority: Priority,
}

pub type IncomingDocument = Document<IncomingStatus>;
pub type OutgoingDocument = Document<OutgoingStatus>;

impl<S> Document<S> {
    pub fn date_display(&self) -> String {
        display_date(self.date_raw)
    }
}

impl<S: DocumentStatus> Record for Document<S> {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.document_number.as_str(),
            self.title.as_str(),
            self.party.as_str(),
            self.status.as_str(),
            self.priority.as_str(),
        ]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "document_number" => FieldValue::Text(&self.document_number),
            "title" => FieldValue::Text(&self.title),
            "status" => FieldValue::Text(self.status.as_str()),
            "priority" => FieldValue::Text(self.priority.as_str()),
            k if k == S::PARTY_FIELD => FieldValue::Text(&self.party),
            k if k == S::DATE_FIELD => FieldValue::Date(self.date_raw),
            _ => FieldValue::Missing,
        }
    }

    fn enum_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }

    fn raw_date(&self) -> Option<DateTime<Utc>> {
        Some(self.date_raw)
    }

    fn sort_keys() -> &'static [&'static str] {
        S::SORT_KEYS
    }

    fn dimensions() -> &'static [&'static str] {
        &["status", "priority"]
    }

    fn dimension_values(dimension: &str) -> Option<Vec<&'static str>> {
        match dimension {
            "status" => Some(S::labels()),
            "priority" => Some(Priority::labels()),
            _ => None,
        }
    }
}

/// A citizen concern submitted through the e-concern channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concern {
    pub id: String,
    pub document_number: String,
    pub title: String,
    pub submitter: String,
    pub submitter_email: String,
    pub submitter_phone: String,
    pub location: String,
    pub category: ConcernCategory,
    pub date_raw: DateTime<Utc>,
    pub status: ConcernStatus,
    pub priority: Priority,
    pub assigned_department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Concern {
    pub fn date_display(&self) -> String {
        display_date(self.date_raw)
    }
}

impl Record for Concern {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.document_number.as_str(),
            self.title.as_str(),
            self.submitter.as_str(),
            self.status.as_str(),
            self.priority.as_str(),
            self.category.as_str(),
            self.location.as_str(),
            self.assigned_department.as_str(),
        ]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "document_number" => FieldValue::Text(&self.document_number),
            "title" => FieldValue::Text(&self.title),
            "submitter" => FieldValue::Text(&self.submitter),
            "category" => FieldValue::Text(self.category.as_str()),
            "location" => FieldValue::Text(&self.location),
            "assigned_department" => FieldValue::Text(&self.assigned_department),
            "date_submitted" => FieldValue::Date(self.date_raw),
            "status" => FieldValue::Text(self.status.as_str()),
            "priority" => FieldValue::Text(self.priority.as_str()),
            _ => FieldValue::Missing,
        }
    }

    fn enum_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn raw_date(&self) -> Option<DateTime<Utc>> {
        Some(self.date_raw)
    }

    fn sort_keys() -> &'static [&'static str] {
        &[
            "document_number",
            "title",
            "submitter",
            "category",
            "location",
            "assigned_department",
            "date_submitted",
            "status",
            "priority",
        ]
    }

    fn dimensions() -> &'static [&'static str] {
        &["status", "priority", "category"]
    }

    fn dimension_values(dimension: &str) -> Option<Vec<&'static str>> {
        match dimension {
            "status" => Some(ConcernStatus::labels()),
            "priority" => Some(Priority::labels()),
            "category" => Some(ConcernCategory::labels()),
            _ => None,
        }
    }
}

/// Trimmed, upper-case office code.
fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

fn deserialize_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|code| normalize_code(&code))
}

/// An office directory entry, keyed by its upper-case code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Office {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: normalize_code(code),
            name: name.trim().to_string(),
            created_at: None,
        }
    }
}

impl Record for Office {
    fn id(&self) -> &str {
        &self.code
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "code" => FieldValue::Text(&self.code),
            "name" => FieldValue::Text(&self.name),
            "created_at" => self
                .created_at
                .map(FieldValue::Date)
                .unwrap_or(FieldValue::Missing),
            _ => FieldValue::Missing,
        }
    }

    fn raw_date(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn sort_keys() -> &'static [&'static str] {
        &["code", "name", "created_at"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_labels_are_kebab_case() {
        assert_eq!(IncomingStatus::InProgress.as_str(), "in-progress");
        assert_eq!(ConcernCategory::PublicSafety.to_string(), "public-safety");
        let json = serde_json::to_string(&ConcernStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_parse_label_is_lenient() {
        assert_eq!(
            "In_Progress".parse::<IncomingStatus>().unwrap(),
            IncomingStatus::InProgress
        );
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(err.to_string().contains("low, medium, high"));
    }

    #[test]
    fn test_outgoing_rejects_incoming_status() {
        assert!("pending".parse::<OutgoingStatus>().is_err());
        let bad = r#"{"id":"1","document_number":"OUT-1","title":"t","party":"p",
            "date_raw":"2024-01-05T09:00:00Z","status":"pending","priority":"low"}"#;
        assert!(serde_json::from_str::<OutgoingDocument>(bad).is_err());
    }

    #[test]
    fn test_display_date_follows_raw() {
        let doc = IncomingDocument {
            id: "d1".to_string(),
            document_number: "INC-0001-2024".to_string(),
            title: "Budget request".to_string(),
            party: "Juan Dela Cruz".to_string(),
            date_raw: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
            status: IncomingStatus::Pending,
            priority: Priority::High,
        };
        assert_eq!(doc.date_display(), "Jan 05, 2024");
        assert_eq!(doc.field("requester"), FieldValue::Text("Juan Dela Cruz"));
        assert_eq!(doc.field("recipient"), FieldValue::Missing);
        assert_eq!(doc.field("date_submitted"), FieldValue::Date(doc.date_raw));
    }

    #[test]
    fn test_office_code_is_upper_cased() {
        let office = Office::new("  ppdo ", " Planning Office ");
        assert_eq!(office.code, "PPDO");
        assert_eq!(office.name, "Planning Office");
        assert_eq!(office.id(), "PPDO");
    }

    #[test]
    fn test_office_code_normalized_when_read() {
        let office: Office = serde_json::from_str(r#"{"code":" pho ","name":"Health"}"#).unwrap();
        assert_eq!(office.code, "PHO");
    }

    #[test]
    fn test_office_serializes_without_favorite_flag() {
        let json = serde_json::to_value(Office::new("pgo", "Governor's Office")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "PGO", "name": "Governor's Office"}));
    }
}

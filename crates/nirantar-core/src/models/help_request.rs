//! Help request model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RequiredField, ValidationError};
use crate::util::{normalize_required, normalize_text_option};

/// A unique identifier for a help request, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HelpRequestId(Uuid);

impl HelpRequestId {
    /// Create a new unique request ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for HelpRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HelpRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HelpRequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Severity selected on the help form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

impl Urgency {
    /// Wire tag, which doubles as the translation key for the label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown urgency '{other}'")),
        }
    }
}

/// Whether the submitter needs help or is offering it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpKind {
    Need,
    Offer,
}

impl HelpKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Offer => "offer",
        }
    }

    /// Translation key for the form heading
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Need => "needHelp",
            Self::Offer => "offerHelp",
        }
    }

    /// Translation key for the description placeholder
    pub const fn placeholder_key(self) -> &'static str {
        match self {
            Self::Need => "needHelpPlaceholder",
            Self::Offer => "offerHelpPlaceholder",
        }
    }
}

impl fmt::Display for HelpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored help request.
///
/// The JSON shape matches the `<ns>-help-requests` storage layout, so field
/// names are camelCase and `kind` is written as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: HelpRequestId,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "type")]
    kind: HelpKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    synced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    synced_at: Option<DateTime<Utc>>,
}

impl HelpRequest {
    /// Build a record from a validated draft.
    ///
    /// A record created while online is synced at birth, so `synced_at`
    /// equals `timestamp`.
    pub(crate) fn from_draft(
        draft: ValidDraft,
        created_at: DateTime<Utc>,
        online: bool,
    ) -> Self {
        Self {
            id: HelpRequestId::new(),
            location: draft.location,
            description: draft.description,
            urgency: draft.urgency,
            contact: draft.contact,
            kind: draft.kind,
            timestamp: created_at,
            synced: online,
            synced_at: online.then_some(created_at),
        }
    }

    pub const fn kind(&self) -> HelpKind {
        self.kind
    }

    pub const fn is_synced(&self) -> bool {
        self.synced
    }

    pub const fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    /// Mark a pending record synced. Returns `false` (and changes nothing)
    /// when the record was already synced.
    pub fn mark_synced(&mut self, at: DateTime<Utc>) -> bool {
        if self.synced {
            return false;
        }
        self.synced = true;
        self.synced_at = Some(at);
        true
    }
}

/// Mark every pending record in `requests` synced at `at`.
///
/// Returns how many records changed.
pub fn mark_pending_synced(requests: &mut [HelpRequest], at: DateTime<Utc>) -> usize {
    requests
        .iter_mut()
        .map(|request| request.mark_synced(at))
        .filter(|changed| *changed)
        .count()
}

/// Unvalidated form input for a new help request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequestDraft {
    pub kind: HelpKind,
    pub location: String,
    pub description: String,
    pub urgency: Urgency,
    pub contact: Option<String>,
}

impl HelpRequestDraft {
    pub fn new(kind: HelpKind, location: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
            description: description.into(),
            urgency: Urgency::default(),
            contact: None,
        }
    }

    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Check required fields, trimming text on the way.
    pub fn validate(self) -> Result<ValidDraft, ValidationError> {
        let location = normalize_required(&self.location);
        let description = normalize_required(&self.description);

        let mut missing = Vec::new();
        if location.is_none() {
            missing.push(RequiredField::Location);
        }
        if description.is_none() {
            missing.push(RequiredField::Description);
        }

        match (location, description) {
            (Some(location), Some(description)) => Ok(ValidDraft {
                kind: self.kind,
                location,
                description,
                urgency: self.urgency,
                contact: normalize_text_option(self.contact),
            }),
            _ => Err(ValidationError { missing }),
        }
    }
}

/// A draft whose required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    kind: HelpKind,
    location: String,
    description: String,
    urgency: Urgency,
    contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(online: bool) -> HelpRequest {
        let draft = HelpRequestDraft::new(HelpKind::Need, "Sector 5", "Need water")
            .with_urgency(Urgency::High)
            .validate()
            .unwrap();
        HelpRequest::from_draft(draft, Utc::now(), online)
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(HelpRequestId::new(), HelpRequestId::new());
    }

    #[test]
    fn test_request_id_parse() {
        let id = HelpRequestId::new();
        let parsed: HelpRequestId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let error = HelpRequestDraft::new(HelpKind::Offer, "  ", "")
            .validate()
            .unwrap_err();
        assert_eq!(
            error.missing,
            vec![RequiredField::Location, RequiredField::Description]
        );
    }

    #[test]
    fn test_validate_trims_and_drops_blank_contact() {
        let draft = HelpRequestDraft::new(HelpKind::Need, " Ward 3 ", " Rescue ")
            .with_contact("   ")
            .validate()
            .unwrap();
        let request = HelpRequest::from_draft(draft, Utc::now(), false);
        assert_eq!(request.location, "Ward 3");
        assert_eq!(request.description, "Rescue");
        assert_eq!(request.contact, None);
    }

    #[test]
    fn test_online_record_is_born_synced() {
        let request = sample(true);
        assert!(request.is_synced());
        assert_eq!(request.synced_at(), Some(request.timestamp));
    }

    #[test]
    fn test_mark_synced_only_moves_forward() {
        let mut request = sample(false);
        assert!(!request.is_synced());
        assert_eq!(request.synced_at(), None);

        let first = Utc::now();
        assert!(request.mark_synced(first));
        assert_eq!(request.synced_at(), Some(first));

        let later = first + chrono::Duration::seconds(30);
        assert!(!request.mark_synced(later));
        assert_eq!(request.synced_at(), Some(first));
    }

    #[test]
    fn test_mark_pending_synced_counts_changes() {
        let mut requests = vec![sample(false), sample(true), sample(false)];
        assert_eq!(mark_pending_synced(&mut requests, Utc::now()), 2);
        assert!(requests.iter().all(HelpRequest::is_synced));
        assert_eq!(mark_pending_synced(&mut requests, Utc::now()), 0);
    }

    #[test]
    fn test_json_shape_matches_storage_layout() {
        let request = sample(false);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "need");
        assert_eq!(value["urgency"], "high");
        assert_eq!(value["synced"], false);
        assert!(value.get("syncedAt").is_none());
        assert!(value.get("contact").is_none());
    }

    #[test]
    fn test_urgency_parse_and_default() {
        assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
        assert!("urgent".parse::<Urgency>().is_err());
        assert_eq!(Urgency::default(), Urgency::Medium);
    }
}

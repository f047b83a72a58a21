//! Plain-text screens: contacts, tips, help requests, connection status.
//!
//! Every renderer returns lines so commands can print them and tests can
//! inspect them.

use chrono::{DateTime, Utc};
use nirantar_core::error::{RequiredField, ValidationError};
use nirantar_core::models::{EmergencyContact, SafetyTopic, EMERGENCY_CONTACTS};
use nirantar_core::{translate, ConnectivityState, HelpKind, HelpRequest, Language};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RequestListItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
    pub urgency: String,
    pub contact: Option<String>,
    pub timestamp: String,
    pub synced: bool,
    pub synced_at: Option<String>,
}

pub fn request_to_list_item(request: &HelpRequest) -> RequestListItem {
    RequestListItem {
        id: request.id.to_string(),
        kind: request.kind().to_string(),
        location: request.location.clone(),
        description: request.description.clone(),
        urgency: request.urgency.to_string(),
        contact: request.contact.clone(),
        timestamp: request.timestamp.to_rfc3339(),
        synced: request.is_synced(),
        synced_at: request.synced_at().map(|at| at.to_rfc3339()),
    }
}

#[derive(Debug, Serialize)]
pub struct StatusItem {
    pub online: bool,
    pub last_sync: Option<String>,
    pub pending: usize,
    pub language: String,
}

pub fn status_item(state: &ConnectivityState, pending: usize, language: Language) -> StatusItem {
    StatusItem {
        online: state.is_online,
        last_sync: state.last_sync.map(|at| at.to_rfc3339()),
        pending,
        language: language.tag().to_string(),
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn render_header(language: Language) -> Vec<String> {
    vec![format!(
        "{} - {}",
        translate(language, "appName"),
        translate(language, "tagline")
    )]
}

pub fn render_contacts(language: Language) -> Vec<String> {
    let mut lines = vec![translate(language, "emergencyContacts").to_string()];
    lines.extend(EMERGENCY_CONTACTS.iter().map(|contact| contact_line(language, contact)));
    lines
}

fn contact_line(language: Language, contact: &EmergencyContact) -> String {
    format!(
        "  {:<6} {:<24} [{}: {}]",
        contact.number,
        translate(language, contact.name_key),
        translate(language, "call"),
        contact.dial_uri()
    )
}

pub fn render_tips(language: Language, topics: &[&SafetyTopic]) -> Vec<String> {
    let mut lines = vec![translate(language, "safetyTips").to_string()];
    for topic in topics {
        lines.push(String::new());
        lines.push(translate(language, topic.title_key).to_string());
        lines.extend(
            topic
                .tips
                .iter()
                .enumerate()
                .map(|(index, tip)| format!("  {}. {tip}", index + 1)),
        );
    }
    lines
}

pub fn render_status(language: Language, state: &ConnectivityState, pending: usize) -> Vec<String> {
    let connection = if state.is_online {
        format!("● {}", translate(language, "online"))
    } else {
        format!("○ {}", translate(language, "offline"))
    };
    let last_sync = state
        .last_sync
        .map_or_else(|| translate(language, "never").to_string(), format_timestamp);

    let mut lines = vec![
        format!("{}: {connection}", translate(language, "connectionStatus")),
        format!("{}: {last_sync}", translate(language, "lastSync")),
        format!("{}: {pending}", translate(language, "pendingSync")),
    ];
    if state.is_online && pending > 0 {
        lines.push(format!("  -> nirantar sync ({})", translate(language, "syncNow")));
    }
    lines
}

pub fn render_requests(language: Language, kind: HelpKind, requests: &[HelpRequest]) -> Vec<String> {
    let mut lines = vec![format!(
        "{} - {}",
        translate(language, "helpRequests"),
        translate(language, kind.title_key())
    )];

    if requests.is_empty() {
        lines.push(format!("  {}", translate(language, "noHelpRequests")));
        return lines;
    }

    for request in requests {
        lines.extend(request_block(language, request));
    }
    lines
}

fn request_block(language: Language, request: &HelpRequest) -> Vec<String> {
    let id = request.id.to_string();
    let short_id = id.chars().take(13).collect::<String>();
    let badge = if request.is_synced() {
        String::new()
    } else {
        format!(" [{}]", translate(language, "offlineBadge"))
    };

    let mut lines = vec![
        format!(
            "  {short_id}  [{}]{badge}  {}",
            translate(language, request.urgency.as_str()),
            format_timestamp(request.timestamp)
        ),
        format!("    {}", request.location),
        format!("    {}", request.description),
    ];
    if let Some(contact) = &request.contact {
        lines.push(format!("    {}: {contact}", translate(language, "contact")));
    }
    lines
}

pub fn render_submission(language: Language, request: &HelpRequest) -> Vec<String> {
    let (title, detail) = if request.is_synced() {
        ("requestSubmitted", "requestSubmittedDetail")
    } else {
        ("requestSavedOffline", "requestSavedOfflineDetail")
    };
    vec![
        translate(language, title).to_string(),
        translate(language, detail).to_string(),
        request.id.to_string(),
    ]
}

/// Form guidance shown when a submission is rejected: the missing flags
/// with their placeholder text, then the optional contact flag.
pub fn render_form_hints(
    language: Language,
    kind: HelpKind,
    error: &ValidationError,
) -> Vec<String> {
    let mut lines = vec![translate(language, "fillRequiredFields").to_string()];
    for field in [RequiredField::Location, RequiredField::Description] {
        if !error.is_missing(field) {
            continue;
        }
        let placeholder = match field {
            RequiredField::Location => "locationPlaceholder",
            RequiredField::Description => kind.placeholder_key(),
        };
        lines.push(format!("  --{field}  {}", translate(language, placeholder)));
    }
    lines.push(format!(
        "  --contact  {} ({})",
        translate(language, "contactPlaceholder"),
        translate(language, "contactOptional")
    ));
    lines
}

pub fn render_about(language: Language) -> Vec<String> {
    let t = |key: &'static str| translate(language, key);
    let bullet = |key: &'static str| format!("  - {}", translate(language, key));

    vec![
        t("aboutTitle").to_string(),
        String::new(),
        t("aboutSummary").to_string(),
        String::new(),
        format!("{}:", t("keyFeatures")),
        bullet("featureOffline"),
        bullet("featureSync"),
        bullet("featureLanguages"),
        bullet("featureContacts"),
        bullet("featureCommunity"),
        String::new(),
        format!("{}:", t("howItWorks")),
        bullet("howOffline"),
        bullet("howSubmit"),
        bullet("howCommunity"),
        String::new(),
        format!("! {}", t("callEmergencyNotice")),
    ]
}

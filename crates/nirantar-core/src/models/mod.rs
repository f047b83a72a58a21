//! Data models for Nirantar

mod help_request;
mod reference;

pub use help_request::{
    mark_pending_synced, HelpKind, HelpRequest, HelpRequestDraft, HelpRequestId, Urgency,
    ValidDraft,
};
pub use reference::{
    find_contact, find_topic, EmergencyContact, SafetyTopic, EMERGENCY_CONTACTS, SAFETY_TOPICS,
};

//! nirantar-core - Core library for Nirantar
//!
//! This crate contains the models, offline storage, connectivity tracking and
//! translations shared by Nirantar front ends (currently the CLI).

pub mod connectivity;
pub mod db;
pub mod error;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod storage;
pub mod util;

pub use connectivity::{
    ConnectivitySignal, ConnectivityState, ConnectivityTracker, SyncReport, Transition,
};
pub use error::{Error, Result};
pub use i18n::{translate, Language, LanguagePreference};
pub use models::{HelpKind, HelpRequest, HelpRequestDraft, HelpRequestId, Urgency};
pub use repository::HelpRequestRepository;
pub use storage::OfflineStore;

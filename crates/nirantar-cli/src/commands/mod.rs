pub mod common;
pub mod completions;
pub mod config;
pub mod contacts;
pub mod info;
pub mod language;
pub mod requests;
pub mod status;
pub mod submit;
pub mod sync;
pub mod tips;
pub mod watch;

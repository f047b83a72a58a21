//! Error types for nirantar-core

use std::fmt;

use thiserror::Error;

/// Result type alias using nirantar-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nirantar-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required help-request field was missing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Durable storage failed (lock poisoned, backend unavailable, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Help-request form fields that must be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Location,
    Description,
}

impl RequiredField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Submission rejected because required fields were blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill all required fields (missing: {})", render_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

impl ValidationError {
    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.missing.contains(&field)
    }
}

fn render_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_every_missing_field() {
        let error = ValidationError {
            missing: vec![RequiredField::Location, RequiredField::Description],
        };
        assert_eq!(
            error.to_string(),
            "Please fill all required fields (missing: location, description)"
        );
        assert!(error.is_missing(RequiredField::Location));
    }

    #[test]
    fn validation_error_converts_into_core_error() {
        let error: Error = ValidationError {
            missing: vec![RequiredField::Description],
        }
        .into();
        assert!(matches!(error, Error::Validation(_)));
        assert!(error.to_string().contains("description"));
    }
}

//! Error types for the Guides section

use thiserror::Error;

use crate::types::GuideField;

/// Main error type for guide operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuideError {
    /// One or more required fields were empty at submit time
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<GuideField>),

    /// The monotonic ID generator could not produce a new ID
    #[error("ID generation error: {0}")]
    IdGeneration(String),

    /// Reveal threshold outside the unit interval
    #[error("Invalid reveal threshold: {0} (expected 0.0..=1.0)")]
    InvalidThreshold(f64),
}

impl GuideError {
    /// Fields reported as missing, empty for every other variant
    pub fn missing_fields(&self) -> &[GuideField] {
        match self {
            GuideError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[GuideField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using GuideError
pub type GuideResult<T> = Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuideError::MissingFields(vec![GuideField::Title, GuideField::Author]);
        assert_eq!(format!("{}", err), "Missing required fields: title, author");
    }

    #[test]
    fn test_threshold_display() {
        let err = GuideError::InvalidThreshold(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid reveal threshold: 1.5 (expected 0.0..=1.0)"
        );
    }

    #[test]
    fn test_missing_fields_accessor() {
        let err = GuideError::MissingFields(vec![GuideField::Content]);
        assert_eq!(err.missing_fields(), &[GuideField::Content]);
        assert!(GuideError::IdGeneration("overflow".into())
            .missing_fields()
            .is_empty());
    }
}

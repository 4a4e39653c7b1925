//! Field-level validation rules for patient data.
//!
//! Each writable field has one rule set, looked up through `PatientField`:
//! required fields must not be blank and every field has a maximum length.

use super::models::patient::PatientField;

/// A rejected field. `Display` renders the exact `field: message` text sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientValidationError {
    #[error("{0}: must not be blank")]
    Blank(&'static str),
    #[error("{field}: size must be between 0 and {max}")]
    TooLong { field: &'static str, max: usize },
    #[error("{0}: must be a string")]
    NotAString(String),
    #[error("{0}: unknown field")]
    UnknownField(String),
    #[error("{0}: field is read-only")]
    ReadOnly(String),
}

impl PatientValidationError {
    /// Name of the offending field as the client spelled it
    pub fn field(&self) -> &str {
        match self {
            PatientValidationError::Blank(field) => *field,
            PatientValidationError::TooLong { field, .. } => *field,
            PatientValidationError::NotAString(field)
            | PatientValidationError::UnknownField(field)
            | PatientValidationError::ReadOnly(field) => field.as_str(),
        }
    }
}

/// Check one value against the rules of its field.
///
/// `None` means the field is absent or null.
pub fn validate_field(field: PatientField, value: Option<&str>) -> Result<(), PatientValidationError> {
    let value = match value {
        Some(value) => value,
        None if field.is_required() => return Err(PatientValidationError::Blank(field.json_name())),
        None => return Ok(()),
    };

    if field.is_required() && value.trim().is_empty() {
        return Err(PatientValidationError::Blank(field.json_name()));
    }

    let max = field.max_length();
    if value.chars().count() > max {
        return Err(PatientValidationError::TooLong {
            field: field.json_name(),
            max,
        });
    }

    Ok(())
}

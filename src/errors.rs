use thiserror::Error;

use crate::registry::Field;

/// Why a submitted field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Required,
}

/// Field-level validation failure, reported per missing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: value is required", field.label())]
pub struct ValidationError {
    pub field: Field,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn required(field: Field) -> Self {
        Self {
            field,
            reason: ValidationReason::Required,
        }
    }
}

/// Errors raised by index-based record operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("record index {0} is out of range")]
    OutOfRange(usize),
    #[error("no edit in progress")]
    NoActiveEdit,
}

/// Errors raised by the wizard outside per-step validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("submission is only available from the preview step")]
    NotAtPreview,
    #[error("draft is missing required fields")]
    Incomplete(Vec<ValidationError>),
}

use std::fmt;

use plx_client::ApiError;
use thiserror::Error;

use crate::step::WizardStep;

/// A validation failure tied to one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("invalid input: {}", join(.0))]
    Validation(Vec<FieldError>),

    #[error("preview failed: {0}")]
    Preview(#[source] ApiError),

    #[error("generation failed: {0}")]
    Generate(#[source] ApiError),

    /// `next()` on the preview step; generation needs an explicit confirm.
    #[error("review the preview and confirm to generate")]
    ConfirmRequired,

    #[error("no preview for the current input; request one first")]
    PreviewMissing,

    #[error("a preview can only be refreshed on the preview step (now on {0})")]
    NotOnPreview(WizardStep),

    #[error("the wizard is already finished")]
    AtLastStep,
}

impl WizardError {
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Message suitable for showing to a user as-is.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Preview(source) => format!("Preview failed: {}", source.display_message()),
            Self::Generate(source) => format!("Generation failed: {}", source.display_message()),
            other => other.to_string(),
        }
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Library error type.
//!
//! Collision rejections are not errors; they surface as ordinary negative
//! results from the collision gate. Everything here is a failure the host
//! should report to the user.

use crate::model::EntityId;

/// Error returned by layout operations.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The layout document is not valid JSON or does not match the document shape.
    #[error("layout document unreadable: {0}")]
    Unreadable(#[from] serde_json::Error),
    /// The document parsed but describes impossible geometry.
    #[error("layout document invalid: {0}")]
    InvalidDocument(String),
    /// No entity with the given id exists in the session.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),
    /// The deletion policy forbids removing this entity.
    #[error("entity {0} is protected from deletion")]
    DeletionProtected(EntityId),
    /// No catalog template with the given name exists.
    #[error("unknown furniture template: {0}")]
    UnknownTemplate(String),
    /// An engine setting could not be parsed.
    #[error("invalid engine config: {0}")]
    Config(String),
}

impl LayoutError {
    /// Stable machine-readable code for the host's error reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable(_) => "E_DOCUMENT_UNREADABLE",
            Self::InvalidDocument(_) => "E_DOCUMENT_INVALID",
            Self::UnknownEntity(_) => "E_UNKNOWN_ENTITY",
            Self::DeletionProtected(_) => "E_DELETION_PROTECTED",
            Self::UnknownTemplate(_) => "E_UNKNOWN_TEMPLATE",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

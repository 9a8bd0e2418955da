/// Convenience result type used across memeplate.
pub type MemeplateResult<T> = Result<T, MemeplateError>;

/// Top-level error taxonomy for schema parsing and validation.
///
/// Every error is raised at parse/validate time; render-parameter resolution
/// is total over validated input and has no failure path of its own.
#[derive(thiserror::Error, Debug)]
pub enum MemeplateError {
    /// Payload is not well-formed structured data.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A required field is absent (e.g. `Background.size`, `AvatarSlot.type`).
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// An enumerated field holds a value outside its closed vocabulary.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Structurally valid data that breaks a schema invariant
    /// (e.g. a LOCAL avatar without `localName`).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MemeplateError {
    /// Build a [`MemeplateError::MalformedInput`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`MemeplateError::MissingRequiredField`] value.
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingRequiredField(msg.into())
    }

    /// Build a [`MemeplateError::UnknownVariant`] value.
    pub fn unknown_variant(msg: impl Into<String>) -> Self {
        Self::UnknownVariant(msg.into())
    }

    /// Build a [`MemeplateError::InvariantViolation`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Error types for the OTP view.

/// Result type alias for OTP view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the OTP view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A code whose length differs from the number of cells.
    #[error("Invalid otp param: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Number of cells.
        expected: usize,
        /// Number of characters in the rejected code.
        actual: usize,
    },

    /// A code containing characters the cells' input kind refuses.
    #[error("OTP doesn't match input type '{kind}'")]
    InputKindMismatch {
        /// Input kind of the cells.
        kind: crate::cell::InputKind,
    },

    /// The configured cell count is below one.
    #[error("Cell count must be at least 1, got {0}")]
    InvalidCellCount(i64),

    /// An attribute whose value could not be parsed.
    #[error("Invalid value '{value}' for attribute '{name}'")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// The value that failed to parse.
        value: String,
    },

    /// An `input_type` attribute naming an unknown input kind.
    #[error("Unknown input type '{0}'")]
    UnknownInputType(String),
}

impl Error {
    /// Create an invalid attribute error.
    pub fn invalid_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

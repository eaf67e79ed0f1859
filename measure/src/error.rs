use std::fmt;

/// Error types for the measure engine
///
/// Every error is raised at the point of misuse and handed back to the caller.
/// Nothing in the engine retries, logs or swallows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// Two units have no converter between them
    Incompatible(String),

    /// A converter variant was built with parameters that make it the identity
    /// or non-invertible
    DegenerateConverter(String),

    /// A unit was derived from a parent that violates the derivation rules
    InvalidDerivation(String),

    /// Arithmetic domain error or overflow of the decimal context
    Arithmetic(String),

    /// A unit does not have the dimension of the requested quantity kind
    DimensionMismatch(String),

    /// The conversion cannot be expressed as a single converter
    Unsupported(String),
}

impl MeasureError {
    /// Create an incompatible-units error for a source/target pair
    pub fn incompatible(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self::Incompatible(format!("{} is not compatible with {}", from, to))
    }

    /// Create an arithmetic error
    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::Arithmetic(message.into())
    }

    /// Create a degenerate-converter error
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateConverter(message.into())
    }

    /// Create an invalid-derivation error
    pub fn invalid_derivation(message: impl Into<String>) -> Self {
        Self::InvalidDerivation(message.into())
    }

    /// Create an unsupported-conversion error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Overflow of the decimal context during `operation`
    pub(crate) fn overflow(operation: &str) -> Self {
        Self::Arithmetic(format!("Decimal overflow during {}", operation))
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::Incompatible(msg) => write!(f, "Incompatible units: {}", msg),
            MeasureError::DegenerateConverter(msg) => write!(f, "Degenerate converter: {}", msg),
            MeasureError::InvalidDerivation(msg) => write!(f, "Invalid derivation: {}", msg),
            MeasureError::Arithmetic(msg) => write!(f, "Arithmetic error: {}", msg),
            MeasureError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
            MeasureError::Unsupported(msg) => write!(f, "Unsupported conversion: {}", msg),
        }
    }
}

impl std::error::Error for MeasureError {}


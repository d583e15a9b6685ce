//! Error taxonomy for parsing and validating draw requests.
//!
//! Every variant is a validation failure raised before the random source is
//! touched, so a failed call never produces partial output.

use std::fmt;

/// A raw input field as collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Count,
    Start,
    End,
}

impl Field {
    /// Field name as it appears in the JS input object.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw-level error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The range start is not strictly below its end.
    #[error("start ({start}) must be less than end ({end})")]
    InvalidRange { start: i64, end: i64 },

    /// Requested amount outside `1..=MAX_COUNT`.
    #[error("count must be between 1 and {max}, got {0}", max = crate::types::MAX_COUNT)]
    InvalidCount(i64),

    /// More unique numbers requested than the pool holds.
    #[error("cannot draw {count} unique numbers from a pool of {pool}")]
    UnsatisfiableUniqueCount { count: i64, pool: u128 },

    /// A required field was left empty.
    #[error("field `{0}` is required")]
    MissingField(Field),

    /// A field holds text that is not an integer.
    #[error("field `{field}` is not a valid integer: {value:?}")]
    NotANumber { field: Field, value: String },
}

impl DrawError {
    /// Stable machine-readable code, used as the JS error prefix.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::InvalidCount(_) => "INVALID_COUNT",
            Self::UnsatisfiableUniqueCount { .. } => "UNSATISFIABLE_UNIQUE_COUNT",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NotANumber { .. } => "NOT_A_NUMBER",
        }
    }
}

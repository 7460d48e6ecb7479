//! Error type shared by the search procedures.

use thiserror::Error;

/// Errors surfaced by a search run.
///
/// Every variant is raised synchronously, either before the search loop
/// starts (configuration, initial cost) or at the first call of a
/// problem operation the implementor did not provide.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The problem does not implement an operation required by the
    /// chosen search procedure.
    #[error("problem contract not implemented: `{operation}`")]
    NotImplemented {
        /// Name of the missing operation.
        operation: &'static str,
    },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The problem returned a cost that is NaN or infinite.
    #[error("cost must be finite, got {cost}")]
    NonFiniteCost {
        /// The offending cost value.
        cost: f64,
    },
}

impl SearchError {
    /// Shorthand for [`SearchError::NotImplemented`].
    pub fn not_implemented(operation: &'static str) -> Self {
        SearchError::NotImplemented { operation }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SearchError::InvalidConfig(message.into())
    }
}

/// Rejects NaN and infinite costs.
pub(crate) fn ensure_finite(cost: f64) -> Result<f64, SearchError> {
    if cost.is_finite() {
        Ok(cost)
    } else {
        Err(SearchError::NonFiniteCost { cost })
    }
}

//! Error taxonomy for descriptor resolution.

use thiserror::Error;

/// Result alias used throughout the descriptor builders.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Descriptor resolution errors.
///
/// A failed build call aborts discovery of that one component; the caller
/// must discard the descriptor instance instead of publishing it partially
/// populated.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// A recognized but unimplemented declarative feature was encountered.
    #[error("declarative feature not implemented: {feature}")]
    UnsupportedFeature {
        /// The declarative feature (e.g. annotation marker) that is not supported.
        feature: String,
    },

    /// A component declaration is missing required identity data.
    #[error("malformed component declaration: {reason}")]
    MalformedSource {
        /// What was missing or invalid in the declaration.
        reason: String,
    },
}

impl DescriptorError {
    /// Create an `UnsupportedFeature` error for the named feature.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature {
            feature: feature.into(),
        }
    }

    /// Create a `MalformedSource` error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            reason: reason.into(),
        }
    }
}

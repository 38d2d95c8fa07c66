//! Error types for host bridging.

use thiserror::Error;

/// Host-shape discovery failed for a wrapper type.
///
/// This failure is permanent for the affected type: it is surfaced once,
/// cached by [`ResolutionCache`](crate::ResolutionCache), and never
/// re-attempted per packet. It is fatal only for the specific legacy
/// wrapper type, not for the codec as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host shape {host_type} not found: {reason}")]
pub struct ResolutionError {
    /// The host type that could not be resolved.
    pub host_type: String,
    /// Platform-specific description of the failure.
    pub reason: String,
}

impl ResolutionError {
    /// Creates a resolution error.
    #[must_use]
    pub fn new(host_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            host_type: host_type.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from converting between wrapper fields and native objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The adapter's host shape was never resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A field value could not be represented natively, or vice versa.
    #[error("native conversion failed: {reason}")]
    Conversion {
        /// Adapter-specific description.
        reason: String,
    },
}

impl BridgeError {
    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(reason: impl Into<String>) -> Self {
        Self::Conversion {
            reason: reason.into(),
        }
    }
}

//! The per-platform host adapter seam.

use crate::error::{BridgeError, ResolutionError};

/// The cached shape of a resolved host constructor.
///
/// Produced at most once per wrapper type by [`HostAdapter::resolve`] and
/// reused for every subsequent conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor {
    /// Fully qualified name of the host type.
    pub host_type: String,
    /// Number of constructor arguments the host shape takes.
    pub arity: usize,
}

impl AdapterDescriptor {
    /// Creates a descriptor for a resolved host shape.
    #[must_use]
    pub fn new(host_type: impl Into<String>, arity: usize) -> Self {
        Self {
            host_type: host_type.into(),
            arity,
        }
    }
}

/// Converts between a wrapper's resolved field values and a host-specific
/// native object graph.
///
/// One implementation exists per target platform and is injected once at
/// startup - shapes are declared, never discovered reflectively at runtime.
/// Only legacy-compatibility wrappers consume this seam; the core codec
/// path never does.
pub trait HostAdapter: Send + Sync {
    /// The host runtime's native packet object.
    type Native;
    /// The wrapper field set this adapter converts.
    type Fields;

    /// The host type this adapter binds to, used as the cache key.
    fn host_type(&self) -> &str;

    /// Discovers the host shape for this adapter.
    ///
    /// Called at most once per wrapper type via the
    /// [`ResolutionCache`](crate::ResolutionCache); a failure is permanent
    /// and must not be retried per packet.
    fn resolve(&self) -> Result<AdapterDescriptor, ResolutionError>;

    /// Produces a native object equivalent to the given field values.
    fn to_native(
        &self,
        fields: &Self::Fields,
        descriptor: &AdapterDescriptor,
    ) -> Result<Self::Native, BridgeError>;

    /// Extracts field values from a native object.
    fn from_native(&self, native: &Self::Native) -> Result<Self::Fields, BridgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperCaseAdapter;

    impl HostAdapter for UpperCaseAdapter {
        type Native = String;
        type Fields = String;

        fn host_type(&self) -> &str {
            "host.UpperCase"
        }

        fn resolve(&self) -> Result<AdapterDescriptor, ResolutionError> {
            Ok(AdapterDescriptor::new(self.host_type(), 1))
        }

        fn to_native(
            &self,
            fields: &String,
            descriptor: &AdapterDescriptor,
        ) -> Result<String, BridgeError> {
            if descriptor.arity != 1 {
                return Err(BridgeError::conversion("arity mismatch"));
            }
            Ok(fields.to_uppercase())
        }

        fn from_native(&self, native: &String) -> Result<String, BridgeError> {
            Ok(native.to_lowercase())
        }
    }

    #[test]
    fn adapter_converts_both_ways() {
        let adapter = UpperCaseAdapter;
        let descriptor = adapter.resolve().unwrap();
        let native = adapter.to_native(&"hello".to_string(), &descriptor).unwrap();
        assert_eq!(native, "HELLO");
        assert_eq!(adapter.from_native(&native).unwrap(), "hello");
    }

    #[test]
    fn descriptor_equality() {
        let a = AdapterDescriptor::new("host.T", 2);
        let b = AdapterDescriptor::new("host.T", 2);
        assert_eq!(a, b);
        assert_ne!(a, AdapterDescriptor::new("host.T", 3));
    }
}

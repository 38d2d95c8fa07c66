//! Error types for registry construction.

use proto::{Direction, Phase, ProtocolVersion};
use thiserror::Error;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors detected while building the packet type registry.
///
/// These are startup-time configuration errors: the registry is built once
/// before any traffic is processed, so every variant here means a broken
/// packet declaration, never malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two packet types were registered under the same name.
    #[error("duplicate packet type name: {name}")]
    DuplicateName {
        /// The offending name.
        name: &'static str,
    },

    /// A packet type's per-version id table is not strictly ascending.
    #[error("id table for {name} is not strictly ascending by version")]
    UnsortedIdTable {
        /// The offending packet type.
        name: &'static str,
    },

    /// Two packet types map to the same wire id in one partition.
    #[error(
        "wire id {id} at {version} ({phase}/{direction}) claimed by both {first} and {second}"
    )]
    DuplicateWireId {
        /// The protocol phase of the partition.
        phase: Phase,
        /// The direction of the partition.
        direction: Direction,
        /// The protocol version at which the ids collide.
        version: ProtocolVersion,
        /// The colliding wire id.
        id: i32,
        /// The first registered claimant.
        first: &'static str,
        /// The second registered claimant.
        second: &'static str,
    },
}

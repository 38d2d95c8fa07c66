//! Protocol version model and wire identities for the pktwire codec.
//!
//! This crate defines the vocabulary shared by every layer of the codec:
//! - [`ProtocolVersion`] - totally ordered version tokens with comparison
//!   predicates, evaluated per connection rather than against a global
//! - [`Phase`] / [`Direction`] - the partitions of the numeric id space
//! - [`WireEnum`] - closed variant sets with explicit, stable wire ids
//!
//! # Design Principles
//!
//! - **Comparisons only** - Versions are opaque tokens; no arithmetic API.
//! - **Explicit ids** - Variant ids are declared per case, never positional.
//! - **No I/O** - This crate holds identities, not bytes.

mod phase;
mod version;
mod wire_enum;

pub use phase::{Direction, Phase};
pub use version::ProtocolVersion;
pub use wire_enum::WireEnum;

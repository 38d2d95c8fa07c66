//! Versioned packet type registry for the pktwire codec.
//!
//! This crate maps `(phase, direction, numeric id, version)` to packet type
//! descriptors. Registration happens once at startup through a validating
//! builder; dispatch of inbound ids is O(1) against precomputed per-version
//! tables.
//!
//! # Design Principles
//!
//! - **Build once, read forever** - Tables are immutable after `build` and
//!   shared by reference, never a mutable global.
//! - **Unknown ids are not errors** - An id with no match resolves to
//!   [`PacketLookup::Unrecognized`] so unmodeled wire additions pass through.
//! - **Validated declarations** - Duplicate names, colliding ids, and
//!   unsorted id tables are rejected at build time.

mod error;
mod registry;
mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::{PacketLookup, PacketRegistry, RegistryBuilder};
pub use types::{PacketType, VersionedId};

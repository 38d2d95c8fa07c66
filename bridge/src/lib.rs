//! Host-runtime bridge for pktwire.
//!
//! Wrapper structs in `pktwire-codec` are plain data; turning them into the
//! host runtime's native packet objects (and back) goes through the adapter
//! seam defined here. The adapter for a given host is chosen explicitly at
//! startup and injected wherever conversion happens.
//!
//! # Design Principles
//!
//! - **Explicit injection**: no global lookup of "the" adapter; callers hold
//!   a [`HostAdapter`] and pass it where conversion is needed.
//! - **Resolve once**: discovering a host type's shape can be expensive, so
//!   [`ResolutionCache`] makes the first stored outcome durable, including
//!   failures.
//! - **Lazy entity handles**: [`EntityRef`] keeps the raw wire id and only
//!   attaches a host handle when a caller asks for one.

mod adapter;
mod cache;
mod entity_ref;
mod error;

pub use adapter::{AdapterDescriptor, HostAdapter};
pub use cache::{Resolution, ResolutionCache};
pub use entity_ref::EntityRef;
pub use error::{BridgeError, ResolutionError};

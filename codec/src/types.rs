//! Core wire-level identifier types.

/// A wire-level entity identifier.
///
/// Entity ids are assigned by the remote simulation and carried as
/// variable-length integers; the codec treats them as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i32);

impl EntityId {
    /// Creates an entity id from its raw wire value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw wire value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for EntityId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

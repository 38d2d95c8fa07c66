//! Two-state entity references.

use codec::EntityId;

/// A reference to an entity as seen by packet code.
///
/// Packets carry raw numeric entity ids; the host runtime deals in its own
/// handle type `H`. Rather than eagerly looking up a handle for every
/// decoded id, the reference stays [`Unresolved`](EntityRef::Unresolved)
/// until a caller actually needs the handle, and lookup failure simply
/// leaves it unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<H> {
    /// Only the wire-level id is known.
    Unresolved(EntityId),
    /// The id plus the host handle it maps to.
    Resolved(EntityId, H),
}

impl<H> EntityRef<H> {
    /// The raw entity id, available in both states.
    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Self::Unresolved(id) | Self::Resolved(id, _) => *id,
        }
    }

    /// The host handle, if resolution has happened.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        match self {
            Self::Unresolved(_) => None,
            Self::Resolved(_, handle) => Some(handle),
        }
    }

    /// Returns `true` if a host handle is attached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(..))
    }

    /// Attempts resolution through `lookup`, keeping the id either way.
    ///
    /// An already-resolved reference is returned unchanged; `lookup`
    /// returning `None` leaves the reference unresolved rather than
    /// erroring, since the entity may simply not exist on this side yet.
    #[must_use]
    pub fn resolve_with<F>(self, lookup: F) -> Self
    where
        F: FnOnce(EntityId) -> Option<H>,
    {
        match self {
            Self::Unresolved(id) => match lookup(id) {
                Some(handle) => Self::Resolved(id, handle),
                None => Self::Unresolved(id),
            },
            resolved @ Self::Resolved(..) => resolved,
        }
    }
}

impl<H> From<EntityId> for EntityRef<H> {
    fn from(id: EntityId) -> Self {
        Self::Unresolved(id)
    }
}

//! Registry construction and O(1) inbound id dispatch.

use std::collections::HashMap;

use proto::{Direction, Phase, ProtocolVersion};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::types::PacketType;

/// Key of one dispatch partition: ids are unique within a
/// `(phase, direction)` pair at a given version.
type PartitionKey = (Phase, Direction, ProtocolVersion);

/// The outcome of resolving an inbound numeric wire id.
///
/// An unrecognized id is an ordinary result, not an error: wire additions
/// from versions newer than the modeled set must not break processing of
/// everything else. Callers may skip or forward such packets unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketLookup {
    /// The id maps to a registered packet type at the active version.
    Known(&'static PacketType),
    /// No registered packet type claims this id at the active version.
    Unrecognized {
        /// The unresolved wire id.
        id: i32,
    },
}

impl PacketLookup {
    /// Returns the resolved packet type, if any.
    #[must_use]
    pub const fn known(self) -> Option<&'static PacketType> {
        match self {
            Self::Known(packet_type) => Some(packet_type),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Returns `true` if the id had no match.
    #[must_use]
    pub const fn is_unrecognized(self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }
}

/// Immutable lookup tables from inbound wire ids to packet types.
///
/// Built once at startup via [`RegistryBuilder`], then read-only and freely
/// shared across threads without locking. Dispatch is a pair of hash lookups
/// against precomputed per-version tables.
#[derive(Debug)]
pub struct PacketRegistry {
    versions: Vec<ProtocolVersion>,
    tables: HashMap<PartitionKey, HashMap<i32, &'static PacketType>>,
}

impl PacketRegistry {
    /// Starts building a registry.
    #[must_use]
    pub const fn builder() -> RegistryBuilder {
        RegistryBuilder {
            types: Vec::new(),
        }
    }

    /// The protocol versions this registry has tables for.
    #[must_use]
    pub fn supported_versions(&self) -> &[ProtocolVersion] {
        &self.versions
    }

    /// Resolves an inbound numeric id at the active version.
    ///
    /// Ids with no match - including ids from versions absent from the
    /// table - yield [`PacketLookup::Unrecognized`] rather than an error.
    #[must_use]
    pub fn lookup(
        &self,
        phase: Phase,
        direction: Direction,
        version: ProtocolVersion,
        id: i32,
    ) -> PacketLookup {
        self.tables
            .get(&(phase, direction, version))
            .and_then(|table| table.get(&id))
            .map_or(PacketLookup::Unrecognized { id }, |packet_type| {
                PacketLookup::Known(packet_type)
            })
    }
}

/// Collects packet type declarations and builds the immutable registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: Vec<&'static PacketType>,
}

impl RegistryBuilder {
    /// Registers a packet type declaration.
    #[must_use]
    pub fn register(mut self, packet_type: &'static PacketType) -> Self {
        debug!(
            name = packet_type.name,
            phase = %packet_type.phase,
            direction = %packet_type.direction,
            "registering packet type"
        );
        self.types.push(packet_type);
        self
    }

    /// Builds dispatch tables for the given protocol versions.
    ///
    /// Validates that names are unique, every id table is strictly
    /// ascending, and no two types claim the same wire id within one
    /// `(phase, direction, version)` partition.
    pub fn build(self, versions: &[ProtocolVersion]) -> RegistryResult<PacketRegistry> {
        for (index, packet_type) in self.types.iter().enumerate() {
            if !packet_type.ids_sorted() {
                return Err(RegistryError::UnsortedIdTable {
                    name: packet_type.name,
                });
            }
            if self.types[..index]
                .iter()
                .any(|earlier| earlier.name == packet_type.name)
            {
                return Err(RegistryError::DuplicateName {
                    name: packet_type.name,
                });
            }
        }

        let mut tables: HashMap<PartitionKey, HashMap<i32, &'static PacketType>> = HashMap::new();
        for &version in versions {
            for packet_type in &self.types {
                let Some(id) = packet_type.id_at(version) else {
                    continue;
                };
                let key = (packet_type.phase, packet_type.direction, version);
                let table = tables.entry(key).or_default();
                if let Some(existing) = table.insert(id, packet_type) {
                    return Err(RegistryError::DuplicateWireId {
                        phase: packet_type.phase,
                        direction: packet_type.direction,
                        version,
                        id,
                        first: existing.name,
                        second: packet_type.name,
                    });
                }
            }
        }

        debug!(
            types = self.types.len(),
            versions = versions.len(),
            partitions = tables.len(),
            "built packet registry"
        );

        Ok(PacketRegistry {
            versions: versions.to_vec(),
            tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VersionedId;

    static ANIMATION_IDS: &[VersionedId] = &[VersionedId::new(ProtocolVersion::V1_12_2, 0x06)];
    static ANIMATION: PacketType = PacketType::new(
        "entity_animation",
        Phase::Play,
        Direction::Clientbound,
        ANIMATION_IDS,
    );

    static RESOURCE_PACK_IDS: &[VersionedId] = &[
        VersionedId::new(ProtocolVersion::V1_12_2, 0x34),
        VersionedId::new(ProtocolVersion::V1_16, 0x39),
    ];
    static RESOURCE_PACK: PacketType = PacketType::new(
        "resource_pack_send",
        Phase::Play,
        Direction::Clientbound,
        RESOURCE_PACK_IDS,
    );

    fn registry() -> PacketRegistry {
        PacketRegistry::builder()
            .register(&ANIMATION)
            .register(&RESOURCE_PACK)
            .build(&[ProtocolVersion::V1_12_2, ProtocolVersion::V1_16])
            .unwrap()
    }

    #[test]
    fn lookup_resolves_registered_ids() {
        let registry = registry();
        let lookup = registry.lookup(
            Phase::Play,
            Direction::Clientbound,
            ProtocolVersion::V1_16,
            0x39,
        );
        assert_eq!(lookup.known().unwrap().name, "resource_pack_send");
    }

    #[test]
    fn lookup_tracks_version_specific_ids() {
        let registry = registry();
        // At 1.12.2 the resource pack packet lives at 0x34, not 0x39.
        let old = registry.lookup(
            Phase::Play,
            Direction::Clientbound,
            ProtocolVersion::V1_12_2,
            0x34,
        );
        assert_eq!(old.known().unwrap().name, "resource_pack_send");

        let stale = registry.lookup(
            Phase::Play,
            Direction::Clientbound,
            ProtocolVersion::V1_16,
            0x34,
        );
        assert!(stale.is_unrecognized());
    }

    #[test]
    fn lookup_unknown_id_is_unrecognized_not_error() {
        let registry = registry();
        let lookup = registry.lookup(
            Phase::Play,
            Direction::Clientbound,
            ProtocolVersion::V1_16,
            0x7F,
        );
        assert_eq!(lookup, PacketLookup::Unrecognized { id: 0x7F });
    }

    #[test]
    fn lookup_wrong_partition_is_unrecognized() {
        let registry = registry();
        let lookup = registry.lookup(
            Phase::Play,
            Direction::Serverbound,
            ProtocolVersion::V1_16,
            0x06,
        );
        assert!(lookup.is_unrecognized());
    }

    #[test]
    fn lookup_unsupported_version_is_unrecognized() {
        let registry = registry();
        let lookup = registry.lookup(
            Phase::Play,
            Direction::Clientbound,
            ProtocolVersion::V1_20_1,
            0x06,
        );
        assert!(lookup.is_unrecognized());
    }

    #[test]
    fn build_rejects_duplicate_names() {
        let err = PacketRegistry::builder()
            .register(&ANIMATION)
            .register(&ANIMATION)
            .build(&[ProtocolVersion::V1_16])
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn build_rejects_colliding_wire_ids() {
        static COLLIDER_IDS: &[VersionedId] =
            &[VersionedId::new(ProtocolVersion::V1_12_2, 0x06)];
        static COLLIDER: PacketType = PacketType::new(
            "collider",
            Phase::Play,
            Direction::Clientbound,
            COLLIDER_IDS,
        );

        let err = PacketRegistry::builder()
            .register(&ANIMATION)
            .register(&COLLIDER)
            .build(&[ProtocolVersion::V1_12_2])
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateWireId { id: 0x06, .. }
        ));
    }

    #[test]
    fn build_rejects_unsorted_id_tables() {
        static UNSORTED_IDS: &[VersionedId] = &[
            VersionedId::new(ProtocolVersion::V1_16, 0x39),
            VersionedId::new(ProtocolVersion::V1_12_2, 0x34),
        ];
        static UNSORTED: PacketType = PacketType::new(
            "unsorted",
            Phase::Play,
            Direction::Clientbound,
            UNSORTED_IDS,
        );

        let err = PacketRegistry::builder()
            .register(&UNSORTED)
            .build(&[ProtocolVersion::V1_16])
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnsortedIdTable { .. }));
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PacketRegistry>();
    }
}

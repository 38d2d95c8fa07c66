//! Packet type identities and their per-version wire ids.

use proto::{Direction, Phase, ProtocolVersion};

/// One entry in a packet type's id table: from `since` onward, the packet
/// is carried under `id` (until a later entry takes over).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedId {
    /// The first version at which this id applies.
    pub since: ProtocolVersion,
    /// The numeric wire id.
    pub id: i32,
}

impl VersionedId {
    /// Creates an id table entry.
    #[must_use]
    pub const fn new(since: ProtocolVersion, id: i32) -> Self {
        Self { since, id }
    }
}

/// The immutable identity of a packet type.
///
/// Identity is `(phase, direction, name)`; the numeric wire id varies by
/// protocol version via the `ids` table. Packet types are declared as
/// `static`s, registered once before any traffic is processed, and never
/// mutated afterward.
#[derive(Debug, PartialEq, Eq)]
pub struct PacketType {
    /// Stable name, unique across the registry.
    pub name: &'static str,
    /// The protocol stage this packet belongs to.
    pub phase: Phase,
    /// The direction this packet travels.
    pub direction: Direction,
    /// Id table, strictly ascending by `since`.
    pub ids: &'static [VersionedId],
}

impl PacketType {
    /// Declares a packet type.
    #[must_use]
    pub const fn new(
        name: &'static str,
        phase: Phase,
        direction: Direction,
        ids: &'static [VersionedId],
    ) -> Self {
        Self {
            name,
            phase,
            direction,
            ids,
        }
    }

    /// Returns the wire id of this packet at `version`, or `None` if the
    /// packet does not exist at that version.
    #[must_use]
    pub fn id_at(&self, version: ProtocolVersion) -> Option<i32> {
        self.ids
            .iter()
            .take_while(|entry| entry.since.older_than_or_eq(version))
            .last()
            .map(|entry| entry.id)
    }

    /// Returns `true` if the id table is strictly ascending by version.
    #[must_use]
    pub fn ids_sorted(&self) -> bool {
        self.ids
            .windows(2)
            .all(|pair| pair[0].since.older_than(pair[1].since))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static IDS: &[VersionedId] = &[
        VersionedId::new(ProtocolVersion::V1_12_2, 0x34),
        VersionedId::new(ProtocolVersion::V1_16, 0x39),
        VersionedId::new(ProtocolVersion::V1_17, 0x3C),
    ];

    static TYPE: PacketType = PacketType::new(
        "resource_pack_send",
        Phase::Play,
        Direction::Clientbound,
        IDS,
    );

    #[test]
    fn id_at_picks_newest_applicable_entry() {
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_12_2), Some(0x34));
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_15_2), Some(0x34));
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_16), Some(0x39));
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_16_5), Some(0x39));
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_17), Some(0x3C));
        assert_eq!(TYPE.id_at(ProtocolVersion::V1_20_1), Some(0x3C));
    }

    #[test]
    fn id_at_before_first_entry_is_none() {
        assert_eq!(TYPE.id_at(ProtocolVersion::new(100)), None);
    }

    #[test]
    fn ids_sorted_detects_disorder() {
        assert!(TYPE.ids_sorted());

        static UNSORTED: &[VersionedId] = &[
            VersionedId::new(ProtocolVersion::V1_16, 0x39),
            VersionedId::new(ProtocolVersion::V1_12_2, 0x34),
        ];
        static BAD: PacketType =
            PacketType::new("bad", Phase::Play, Direction::Clientbound, UNSORTED);
        assert!(!BAD.ids_sorted());
    }

    #[test]
    fn empty_id_table_never_resolves() {
        static EMPTY: PacketType =
            PacketType::new("empty", Phase::Login, Direction::Serverbound, &[]);
        assert_eq!(EMPTY.id_at(ProtocolVersion::V1_20_1), None);
        assert!(EMPTY.ids_sorted());
    }
}

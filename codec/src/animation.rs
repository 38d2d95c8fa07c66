//! Clientbound entity animation packet.

use buffer::{ByteReader, ByteWriter};
use proto::{Direction, Phase, ProtocolVersion, WireEnum};
use registry::{PacketType, VersionedId};

use crate::error::{DecodeError, EncodeError};
use crate::types::EntityId;
use crate::wrapper::{decode_wire_enum, CodecContext, PacketWrapper};

static ENTITY_ANIMATION_IDS: &[VersionedId] = &[
    VersionedId::new(ProtocolVersion::V1_12_2, 0x06),
    VersionedId::new(ProtocolVersion::V1_17, 0x03),
];

/// Registry descriptor for [`EntityAnimation`].
pub static ENTITY_ANIMATION: PacketType = PacketType::new(
    "entity_animation",
    Phase::Play,
    Direction::Clientbound,
    ENTITY_ANIMATION_IDS,
);

/// The animation a watched entity plays.
///
/// Ids are explicit per case; reordering the declaration cannot change the
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    /// Main-arm swing.
    SwingMainArm,
    /// Damage flash.
    TakeDamage,
    /// Wake-up animation.
    LeaveBed,
    /// Off-hand swing.
    SwingOffhand,
    /// Critical hit particles.
    CriticalEffect,
    /// Enchanted critical hit particles.
    MagicCriticalEffect,
}

impl AnimationType {
    /// The single wire byte carrying this case.
    const fn wire_byte(self) -> u8 {
        match self {
            Self::SwingMainArm => 0,
            Self::TakeDamage => 1,
            Self::LeaveBed => 2,
            Self::SwingOffhand => 3,
            Self::CriticalEffect => 4,
            Self::MagicCriticalEffect => 5,
        }
    }
}

impl WireEnum for AnimationType {
    const NAME: &'static str = "AnimationType";

    fn wire_id(self) -> i32 {
        i32::from(self.wire_byte())
    }

    fn from_wire_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::SwingMainArm),
            1 => Some(Self::TakeDamage),
            2 => Some(Self::LeaveBed),
            3 => Some(Self::SwingOffhand),
            4 => Some(Self::CriticalEffect),
            5 => Some(Self::MagicCriticalEffect),
            _ => None,
        }
    }
}

/// Tells the client to play an animation on an entity.
///
/// Wire layout: `[var_i32 entity_id][u8 animation]` at every modeled
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityAnimation {
    entity_id: EntityId,
    animation: AnimationType,
}

impl EntityAnimation {
    /// Constructs an outbound wrapper.
    #[must_use]
    pub const fn new(entity_id: EntityId, animation: AnimationType) -> Self {
        Self {
            entity_id,
            animation,
        }
    }

    /// The target entity's wire id.
    #[must_use]
    pub const fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// The animation to play.
    #[must_use]
    pub const fn animation(&self) -> AnimationType {
        self.animation
    }
}

impl PacketWrapper for EntityAnimation {
    const PACKET_TYPE: &'static PacketType = &ENTITY_ANIMATION;

    fn decode(reader: &mut ByteReader<'_>, _ctx: &CodecContext<'_>) -> Result<Self, DecodeError> {
        let entity_id = EntityId::new(reader.read_var_i32()?);
        let animation = decode_wire_enum(i32::from(reader.read_u8()?))?;
        Ok(Self {
            entity_id,
            animation,
        })
    }

    fn encode(&self, writer: &mut ByteWriter, _ctx: &CodecContext<'_>) -> Result<(), EncodeError> {
        writer.write_var_i32(self.entity_id.raw());
        writer.write_u8(self.animation.wire_byte());
        Ok(())
    }

    fn copy_from(&mut self, source: &Self) {
        self.entity_id = source.entity_id;
        self.animation = source.animation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_ids_are_stable() {
        let cases = [
            (AnimationType::SwingMainArm, 0),
            (AnimationType::TakeDamage, 1),
            (AnimationType::LeaveBed, 2),
            (AnimationType::SwingOffhand, 3),
            (AnimationType::CriticalEffect, 4),
            (AnimationType::MagicCriticalEffect, 5),
        ];
        for (case, id) in cases {
            assert_eq!(case.wire_id(), id);
            assert_eq!(i32::from(case.wire_byte()), id);
            assert_eq!(AnimationType::from_wire_id(id), Some(case));
        }
    }

    #[test]
    fn out_of_range_ids_do_not_resolve() {
        assert_eq!(AnimationType::from_wire_id(6), None);
        assert_eq!(AnimationType::from_wire_id(-1), None);
        assert_eq!(AnimationType::from_wire_id(255), None);
    }

    #[test]
    fn packet_type_identity() {
        assert_eq!(ENTITY_ANIMATION.name, "entity_animation");
        assert_eq!(ENTITY_ANIMATION.id_at(ProtocolVersion::V1_16), Some(0x06));
        assert_eq!(ENTITY_ANIMATION.id_at(ProtocolVersion::V1_17), Some(0x03));
    }
}

//! Protocol phases and packet directions.

use std::fmt;

/// A protocol stage partitioning the numeric packet-id space.
///
/// Ids are only unique within one `(phase, direction)` partition at a given
/// version; the same numeric id means different packets in different phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Initial connection, before the peer declares intent.
    Handshaking,
    /// Server list ping.
    Status,
    /// Authentication.
    Login,
    /// In-game traffic.
    Play,
}

impl Phase {
    /// All phases, for table construction.
    pub const ALL: [Self; 4] = [Self::Handshaking, Self::Status, Self::Login, Self::Play];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Handshaking => "handshaking",
            Self::Status => "status",
            Self::Login => "login",
            Self::Play => "play",
        };
        write!(f, "{name}")
    }
}

/// The direction a packet travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Sent by the server to the client.
    Clientbound,
    /// Sent by the client to the server.
    Serverbound,
}

impl Direction {
    /// Both directions, for table construction.
    pub const ALL: [Self; 2] = [Self::Clientbound, Self::Serverbound];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Clientbound => Self::Serverbound,
            Self::Serverbound => Self::Clientbound,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clientbound => "clientbound",
            Self::Serverbound => "serverbound",
        };
        write!(f, "{name}")
    }
}

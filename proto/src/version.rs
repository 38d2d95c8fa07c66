//! Negotiated protocol version tokens.

use std::fmt;

/// A negotiated protocol version.
///
/// Versions are opaque, totally ordered tokens: only comparisons are
/// meaningful, never arithmetic. A version is supplied per connection by the
/// transport layer after negotiation and is passed by value to every decode
/// and encode call; the codec holds no global "current version".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolVersion(u32);

impl ProtocolVersion {
    /// Release 1.12.2.
    pub const V1_12_2: Self = Self(340);
    /// Release 1.13.2.
    pub const V1_13_2: Self = Self(404);
    /// Release 1.14.4.
    pub const V1_14_4: Self = Self(498);
    /// Release 1.15.2.
    pub const V1_15_2: Self = Self(578);
    /// Release 1.16.
    pub const V1_16: Self = Self(735);
    /// Release 1.16.5.
    pub const V1_16_5: Self = Self(754);
    /// Release 1.17.
    pub const V1_17: Self = Self(755);
    /// Release 1.18.2.
    pub const V1_18_2: Self = Self(758);
    /// Release 1.19.
    pub const V1_19: Self = Self(759);
    /// Release 1.20.1.
    pub const V1_20_1: Self = Self(763);

    /// Creates a version token from a raw negotiated number.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw negotiated number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if `self` is the same as or newer than `other`.
    #[must_use]
    pub const fn newer_than_or_eq(self, other: Self) -> bool {
        self.0 >= other.0
    }

    /// Returns `true` if `self` is strictly newer than `other`.
    #[must_use]
    pub const fn newer_than(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// Returns `true` if `self` is strictly older than `other`.
    #[must_use]
    pub const fn older_than(self, other: Self) -> bool {
        self.0 < other.0
    }

    /// Returns `true` if `self` is the same as or older than `other`.
    #[must_use]
    pub const fn older_than_or_eq(self, other: Self) -> bool {
        self.0 <= other.0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "protocol {}", self.0)
    }
}

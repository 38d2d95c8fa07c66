//! Closed integer-identified variant sets embedded in the byte stream.

/// A closed set of named cases, each bound to a stable wire id.
///
/// Ids are declared explicitly per case in [`wire_id`](Self::wire_id) and
/// [`from_wire_id`](Self::from_wire_id); declaration order is never
/// load-bearing, so reordering cases cannot silently break the wire format.
///
/// `from_wire_id` returns `None` for any id outside the declared set. The
/// codec layer turns that into a decode failure; it is never an index into
/// a case table.
pub trait WireEnum: Sized + Copy {
    /// Human-readable name of the variant set, used in decode errors.
    const NAME: &'static str;

    /// Returns this case's stable wire id.
    fn wire_id(self) -> i32;

    /// Resolves a wire id to a declared case, or `None` if undeclared.
    fn from_wire_id(id: i32) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Hand {
        Main,
        Off,
    }

    impl WireEnum for Hand {
        const NAME: &'static str = "Hand";

        fn wire_id(self) -> i32 {
            match self {
                Self::Main => 0,
                Self::Off => 1,
            }
        }

        fn from_wire_id(id: i32) -> Option<Self> {
            match id {
                0 => Some(Self::Main),
                1 => Some(Self::Off),
                _ => None,
            }
        }
    }

    #[test]
    fn declared_ids_resolve_to_exactly_one_case() {
        assert_eq!(Hand::from_wire_id(0), Some(Hand::Main));
        assert_eq!(Hand::from_wire_id(1), Some(Hand::Off));
    }

    #[test]
    fn undeclared_ids_resolve_to_none() {
        assert_eq!(Hand::from_wire_id(2), None);
        assert_eq!(Hand::from_wire_id(-1), None);
        assert_eq!(Hand::from_wire_id(i32::MAX), None);
    }

    #[test]
    fn ids_roundtrip() {
        for case in [Hand::Main, Hand::Off] {
            assert_eq!(Hand::from_wire_id(case.wire_id()), Some(case));
        }
    }
}

//! The [`Slot`] optional node index.
//!
//! Node sequences and neighborhood rows have a fixed length regardless
//! of how many real nodes the graph provides. A `Slot` makes the
//! padding case explicit instead of overloading a negative integer, so
//! a padding entry can never be misused as an array index.

use std::fmt;

/// One entry of a node sequence or neighborhood row.
///
/// # Examples
///
/// ```
/// use quilt_core::Slot;
///
/// let real = Slot::Node(3);
/// assert_eq!(real.node(), Some(3));
/// assert_eq!(real.to_sentinel(), 3);
///
/// let pad = Slot::Padding;
/// assert!(pad.is_padding());
/// assert_eq!(pad.to_sentinel(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The index of a real node.
    Node(usize),
    /// A padding entry with no corresponding node.
    Padding,
}

impl Slot {
    /// The node index, or `None` for padding.
    pub fn node(self) -> Option<usize> {
        match self {
            Self::Node(i) => Some(i),
            Self::Padding => None,
        }
    }

    /// Whether this slot is padding.
    pub fn is_padding(self) -> bool {
        matches!(self, Self::Padding)
    }

    /// Encode as the conventional integer sentinel: the node index, or
    /// `-1` for padding. Intended for serialization boundaries that
    /// expect the flat-integer convention.
    pub fn to_sentinel(self) -> i64 {
        match self {
            Self::Node(i) => i as i64,
            Self::Padding => -1,
        }
    }

    /// Decode from the conventional integer sentinel. Any negative
    /// value is treated as padding.
    pub fn from_sentinel(v: i64) -> Self {
        if v < 0 {
            Self::Padding
        } else {
            Self::Node(v as usize)
        }
    }
}

impl From<usize> for Slot {
    fn from(i: usize) -> Self {
        Self::Node(i)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(i) => write!(f, "{i}"),
            Self::Padding => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sentinel_round_trip() {
        assert_eq!(Slot::from_sentinel(5), Slot::Node(5));
        assert_eq!(Slot::from_sentinel(0), Slot::Node(0));
        assert_eq!(Slot::from_sentinel(-1), Slot::Padding);
        assert_eq!(Slot::from_sentinel(-7), Slot::Padding);
    }

    #[test]
    fn node_accessor() {
        assert_eq!(Slot::Node(2).node(), Some(2));
        assert_eq!(Slot::Padding.node(), None);
        assert!(Slot::Padding.is_padding());
        assert!(!Slot::Node(0).is_padding());
    }

    #[test]
    fn display_forms() {
        assert_eq!(Slot::Node(12).to_string(), "12");
        assert_eq!(Slot::Padding.to_string(), "-");
    }

    proptest! {
        #[test]
        fn sentinel_encode_decode_is_identity(i in 0usize..1_000_000) {
            let slot = Slot::Node(i);
            prop_assert_eq!(Slot::from_sentinel(slot.to_sentinel()), slot);
        }
    }
}

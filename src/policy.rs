//! Hooks that distinguish the disjoint set variants.
//!
//! The lookup and merge algorithms live in [`crate::DisjointSet`]; the types here only decide
//! which root survives a merge and whether lookups rewrite the paths they walk.

use crate::config::{CompressionMode, TieBreak};
use crate::storage::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Survivor {
    First,
    Second,
}

/// Chooses the surviving root when two groups merge.
///
/// Each root carries a weight. `link` receives the weights of the roots of the first and the
/// second argument of `unite` and returns the surviving root along with its new weight.
pub trait Linking {
    const TIE_BREAK: TieBreak;

    fn initial_weight<T: Element>() -> T;

    fn link<T: Element>(first: T, second: T) -> (Survivor, T);
}

/// Union by rank. Rank starts at zero and only grows when two roots of equal rank merge.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByRank;

impl Linking for ByRank {
    const TIE_BREAK: TieBreak = TieBreak::Rank;

    fn initial_weight<T: Element>() -> T {
        T::ZERO
    }

    fn link<T: Element>(first: T, second: T) -> (Survivor, T) {
        if first < second {
            (Survivor::Second, second)
        } else if first > second {
            (Survivor::First, first)
        } else {
            (Survivor::First, first + T::ONE)
        }
    }
}

/// Union by size. The weight is the exact number of elements in the group.
#[derive(Clone, Copy, Debug, Default)]
pub struct BySize;

impl Linking for BySize {
    const TIE_BREAK: TieBreak = TieBreak::Size;

    fn initial_weight<T: Element>() -> T {
        T::ONE
    }

    fn link<T: Element>(first: T, second: T) -> (Survivor, T) {
        let survivor = if first < second {
            Survivor::Second
        } else {
            Survivor::First
        };
        (survivor, first + second)
    }
}

/// Whether lookups point every visited element straight at the root.
pub trait Compression {
    const MODE: CompressionMode;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PathCompression;

impl Compression for PathCompression {
    const MODE: CompressionMode = CompressionMode::On;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoCompression;

impl Compression for NoCompression {
    const MODE: CompressionMode = CompressionMode::Off;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank() {
        assert_eq!(ByRank::initial_weight::<u32>(), 0);
        assert_eq!(ByRank::link(1u32, 2), (Survivor::Second, 2));
        assert_eq!(ByRank::link(3u32, 2), (Survivor::First, 3));
        // Equal ranks: the first root survives one level taller
        assert_eq!(ByRank::link(2u32, 2), (Survivor::First, 3));
    }

    #[test]
    fn size() {
        assert_eq!(BySize::initial_weight::<u8>(), 1);
        assert_eq!(BySize::link(1u8, 4), (Survivor::Second, 5));
        assert_eq!(BySize::link(4u8, 1), (Survivor::First, 5));
        assert_eq!(BySize::link(2u8, 2), (Survivor::First, 4));
    }
}

use crate::config::{Capacity, CompressionMode, Config};
use crate::error::UnionFindError;
use crate::policy::{
    ByRank, BySize, Compression, Linking, NoCompression, PathCompression, Survivor,
};
use crate::storage::{Element, Storage};
use core::marker::PhantomData;

/// A partition of `0..len` into disjoint groups that can only grow coarser.
///
/// Storage is two parallel arrays: `parents[i]` is `i` itself for a representative, and
/// `weights[i]` is the rank or size of the group, depending on `L`, and is only meaningful at
/// representatives.
///
/// Operations taking an element index panic if it's out of range. Each of them has a `try_`
/// counterpart that reports [`UnionFindError::IndexOutOfRange`] instead.
#[derive(Clone, Debug)]
pub struct DisjointSet<
    S: Storage = Vec<u32>,
    L: Linking = ByRank,
    C: Compression = PathCompression,
> {
    parents: S,
    weights: S,
    groups: usize,
    _policy: PhantomData<(L, C)>,
}

/// Union by rank with path compression, sized at runtime.
pub type UnionFind<T = u32> = DisjointSet<Vec<T>, ByRank, PathCompression>;

/// Union by size with path compression, sized at runtime. Provides [`DisjointSet::size`].
pub type SizedUnionFind<T = u32> = DisjointSet<Vec<T>, BySize, PathCompression>;

/// Union by rank with path compression over `N` elements fixed at compile time.
pub type FixedUnionFind<T, const N: usize> = DisjointSet<[T; N], ByRank, PathCompression>;

/// Union by rank without path compression: lookups never write.
pub type PlainUnionFind<T = u32> = DisjointSet<Vec<T>, ByRank, NoCompression>;

impl<S: Storage, L: Linking, C: Compression> DisjointSet<S, L, C> {
    fn build(len: usize) -> Result<Self, UnionFindError> {
        let max = S::Element::MAX_LEN;
        if len > max {
            return Err(UnionFindError::CapacityOverflow { capacity: len, max });
        }

        // Every index below `len` fits because `len` itself does
        let parents = S::from_fn(len, |i| S::Element::from_usize(i).unwrap_or(S::Element::ZERO));
        let weights = S::from_fn(len, |_| L::initial_weight());

        log::debug!("created disjoint set of {len} elements ({})", Self::config());

        Ok(Self {
            parents,
            weights,
            groups: len,
            _policy: PhantomData,
        })
    }

    pub fn config() -> Config {
        Config {
            tie_break: L::TIE_BREAK,
            compression: C::MODE,
            capacity: match S::FIXED_LEN {
                Some(len) => Capacity::Static(len),
                None => Capacity::Dynamic,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.parents.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of groups in the partition, i.e. the number of representatives.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    fn position(&self, element: S::Element) -> usize {
        let index = element.index();
        let len = self.len();
        assert!(
            index < len,
            "element index {element} out of range for {len} elements"
        );
        index
    }

    fn try_position(&self, element: S::Element) -> Result<usize, UnionFindError> {
        let index = element.index();
        let len = self.len();
        if index < len {
            Ok(index)
        } else {
            Err(UnionFindError::IndexOutOfRange { index, len })
        }
    }

    fn root(&self, mut index: usize) -> usize {
        let parents = self.parents.as_slice();
        loop {
            let parent = parents[index].index();
            if parent == index {
                return index;
            }
            index = parent;
        }
    }

    fn resolve(&mut self, mut index: usize) -> usize {
        let leader = self.root(index);
        if C::MODE == CompressionMode::On {
            let parents = self.parents.as_mut_slice();
            let leader_id = parents[leader];
            while index != leader {
                index = core::mem::replace(&mut parents[index], leader_id).index();
            }
        }
        leader
    }

    fn merge(&mut self, a: usize, b: usize) -> bool {
        let a = self.resolve(a);
        let b = self.resolve(b);
        if a == b {
            return false;
        }

        let weights = self.weights.as_mut_slice();
        let (survivor, weight) = L::link(weights[a], weights[b]);
        let (leader, absorbed) = match survivor {
            Survivor::First => (a, b),
            Survivor::Second => (b, a),
        };
        weights[leader] = weight;

        let parents = self.parents.as_mut_slice();
        parents[absorbed] = parents[leader];
        self.groups -= 1;

        log::trace!("merged group {absorbed} into {leader}");
        true
    }

    /// Returns the representative of the group containing `element`.
    pub fn find(&mut self, element: S::Element) -> S::Element {
        let index = self.position(element);
        let leader = self.resolve(index);
        self.parents.as_slice()[leader]
    }

    pub fn try_find(&mut self, element: S::Element) -> Result<S::Element, UnionFindError> {
        let index = self.try_position(element)?;
        let leader = self.resolve(index);
        Ok(self.parents.as_slice()[leader])
    }

    /// Merges the groups of `a` and `b`.
    ///
    /// Returns `false` if they already were the same group, in which case nothing changes. When
    /// the tie-break can't decide, `b`'s representative is attached under `a`'s.
    pub fn unite(&mut self, a: S::Element, b: S::Element) -> bool {
        let a = self.position(a);
        let b = self.position(b);
        self.merge(a, b)
    }

    pub fn try_unite(&mut self, a: S::Element, b: S::Element) -> Result<bool, UnionFindError> {
        let a = self.try_position(a)?;
        let b = self.try_position(b)?;
        Ok(self.merge(a, b))
    }

    pub fn same(&mut self, a: S::Element, b: S::Element) -> bool {
        let a = self.position(a);
        let b = self.position(b);
        self.resolve(a) == self.resolve(b)
    }

    pub fn try_same(&mut self, a: S::Element, b: S::Element) -> Result<bool, UnionFindError> {
        let a = self.try_position(a)?;
        let b = self.try_position(b)?;
        Ok(self.resolve(a) == self.resolve(b))
    }
}

impl<T: Element, L: Linking, C: Compression> DisjointSet<Vec<T>, L, C> {
    /// Creates `len` singleton groups.
    ///
    /// Panics if `len` doesn't fit `T`.
    pub fn new(len: usize) -> Self {
        match Self::try_new(len) {
            Ok(set) => set,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_new(len: usize) -> Result<Self, UnionFindError> {
        Self::build(len)
    }
}

impl<T: Element, const N: usize, L: Linking, C: Compression> DisjointSet<[T; N], L, C> {
    /// Creates `N` singleton groups.
    ///
    /// Panics if `N` doesn't fit `T`.
    pub fn new_fixed() -> Self {
        match Self::try_new_fixed() {
            Ok(set) => set,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_new_fixed() -> Result<Self, UnionFindError> {
        Self::build(N)
    }
}

impl<T: Element, const N: usize, L: Linking, C: Compression> Default
    for DisjointSet<[T; N], L, C>
{
    fn default() -> Self {
        Self::new_fixed()
    }
}

impl<S: Storage, C: Compression> DisjointSet<S, BySize, C> {
    /// The number of elements in the group containing `element`.
    pub fn size(&mut self, element: S::Element) -> S::Element {
        let index = self.position(element);
        let leader = self.resolve(index);
        self.weights.as_slice()[leader]
    }

    pub fn try_size(&mut self, element: S::Element) -> Result<S::Element, UnionFindError> {
        let index = self.try_position(element)?;
        let leader = self.resolve(index);
        Ok(self.weights.as_slice()[leader])
    }

    pub fn is_singleton(&mut self, element: S::Element) -> bool {
        self.size(element) == S::Element::ONE
    }
}

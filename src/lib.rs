//! Disjoint-set (union-find) over a fixed universe of elements `0..n`.
//!
//! One implementation covers every variant: the tie-break ([`ByRank`], [`BySize`]), whether
//! lookups compress paths ([`PathCompression`], [`NoCompression`]), and whether the element count
//! is chosen at runtime (`Vec<T>`) or at compile time (`[T; N]`) are all type parameters of
//! [`DisjointSet`].

mod config;
mod error;
mod policy;
mod storage;
mod union_find;

pub use crate::config::{Capacity, CompressionMode, Config, TieBreak};
pub use crate::error::UnionFindError;
pub use crate::policy::{
    ByRank, BySize, Compression, Linking, NoCompression, PathCompression, Survivor,
};
pub use crate::storage::{Element, Storage};
pub use crate::union_find::{
    DisjointSet, FixedUnionFind, PlainUnionFind, SizedUnionFind, UnionFind,
};

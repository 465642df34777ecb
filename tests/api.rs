use disjoint::{
    BySize, Capacity, DisjointSet, FixedUnionFind, NoCompression, PlainUnionFind, SizedUnionFind,
    TieBreak, UnionFind, UnionFindError,
};

#[test]
fn scripted_merges() {
    let mut set = SizedUnionFind::<u32>::new(16);
    for (a, b) in [(0, 3), (3, 6), (9, 0), (2, 4), (5, 4)] {
        set.unite(a, b);
    }

    assert!(set.same(6, 9));
    assert!(!set.same(3, 5));
    assert!(set.same(2, 5));
    assert_eq!(set.size(0), 4);
    assert_eq!(set.size(2), 3);
    assert_eq!(set.group_count(), 11);
}

#[test]
fn transitivity() {
    let mut set = UnionFind::<usize>::new(10);
    set.unite(1, 2);
    set.unite(3, 4);
    assert!(!set.same(1, 4));
    set.unite(2, 3);
    assert!(set.same(1, 4));
    assert!(set.same(4, 1));
    assert_eq!(set.find(1), set.find(4));
}

#[test]
fn chain_without_compression() {
    let len = 1 << 12;
    let mut set = PlainUnionFind::<u32>::new(len);
    for i in 1..len as u32 {
        set.unite(i - 1, i);
    }
    assert_eq!(set.group_count(), 1);
    for i in 0..len as u32 {
        assert_eq!(set.find(i), 0);
    }
}

#[test]
fn custom_combination() {
    let mut set = DisjointSet::<[u16; 8], BySize, NoCompression>::new_fixed();
    set.unite(7, 6);
    set.unite(5, 6);
    assert_eq!(set.size(5), 3);
    assert!(set.is_singleton(0));

    let config = DisjointSet::<[u16; 8], BySize, NoCompression>::config();
    assert_eq!(config.tie_break, TieBreak::Size);
    assert_eq!(config.capacity, Capacity::Static(8));
    assert_eq!(
        config.to_string(),
        "union by size, path compression off, static capacity 8"
    );
}

#[test]
fn fixed_rejects_wide_capacity() {
    assert!(matches!(
        FixedUnionFind::<u8, 256>::try_new_fixed(),
        Err(UnionFindError::CapacityOverflow { capacity: 256, max: 255 })
    ));
}

#[test]
fn errors_display() {
    let mut set = UnionFind::<u32>::new(2);
    let error = set.try_same(0, 5).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Element index 5 is out of range for 2 elements"
    );
    assert_eq!(
        UnionFind::<u8>::try_new(1000).unwrap_err().to_string(),
        "Capacity 1000 does not fit the element index type (max 255)"
    );
}

#[test]
#[should_panic(expected = "out of range")]
fn size_out_of_range_panics() {
    let mut set = SizedUnionFind::<u32>::new(3);
    set.size(3);
}

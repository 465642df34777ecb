use disjoint::{PlainUnionFind, SizedUnionFind, UnionFindError};

const UNITE: [(u32, u32); 5] = [(0, 3), (3, 6), (9, 0), (2, 4), (5, 4)];
const CHECK: [(u32, u32); 3] = [(6, 9), (3, 5), (2, 5)];

fn relation(same: bool) -> &'static str {
    if same { "===" } else { "!==" }
}

fn run_sized() -> Result<(), UnionFindError> {
    let mut set = SizedUnionFind::<u32>::try_new(16)?;
    println!("# {}", SizedUnionFind::<u32>::config());

    for (a, b) in UNITE {
        println!("U: {a} <=> {b}");
        set.try_unite(a, b)?;
    }

    for (a, b) in CHECK {
        let same = set.try_same(a, b)?;
        let size_a = set.try_size(a)?;
        let size_b = set.try_size(b)?;
        println!("C: {a} ({size_a}) {} {b} ({size_b})", relation(same));
    }

    println!("groups: {}", set.group_count());
    Ok(())
}

// Same script without size tracking or path compression
fn run_plain() -> Result<(), UnionFindError> {
    let mut set = PlainUnionFind::<u32>::try_new(16)?;
    println!("# {}", PlainUnionFind::<u32>::config());

    for (a, b) in UNITE {
        println!("U: {a} <=> {b}");
        set.try_unite(a, b)?;
    }

    for (a, b) in CHECK {
        println!("C: {a} {} {b}", relation(set.try_same(a, b)?));
    }

    Ok(())
}

fn main() {
    if let Err(e) = run_sized() {
        panic!("sized demo failed: {e}");
    }
    println!();
    if let Err(e) = run_plain() {
        panic!("plain demo failed: {e}");
    }
}

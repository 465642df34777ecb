use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
/// union by {tie_break}, path compression {compression}, {capacity}
pub struct Config {
    pub tie_break: TieBreak,
    pub compression: CompressionMode,
    pub capacity: Capacity,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum TieBreak {
    /// rank
    Rank,
    /// size
    Size,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum CompressionMode {
    /// on
    On,
    /// off
    Off,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Capacity {
    /// static capacity {0}
    Static(usize),
    /// dynamic capacity
    Dynamic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let config = Config {
            tie_break: TieBreak::Size,
            compression: CompressionMode::Off,
            capacity: Capacity::Static(16),
        };
        assert_eq!(
            config.to_string(),
            "union by size, path compression off, static capacity 16"
        );
        assert_eq!(Capacity::Dynamic.to_string(), "dynamic capacity");
    }
}

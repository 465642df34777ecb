use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("Element index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Capacity {capacity} does not fit the element index type (max {max})")]
    CapacityOverflow { capacity: usize, max: usize },
}

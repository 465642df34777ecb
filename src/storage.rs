use core::fmt::{Debug, Display};
use core::ops::Add;

/// An unsigned integer type used to name elements.
///
/// The same type stores parent links and per-group weights, so a set of `n` elements needs
/// `n` itself to be representable: the largest group has size `n`.
pub trait Element: Copy + Eq + Ord + Debug + Display + Add<Output = Self> + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// The largest element count this type can describe.
    const MAX_LEN: usize;

    fn from_usize(value: usize) -> Option<Self>;

    /// Saturates at `usize::MAX`, which is never a valid index.
    fn index(self) -> usize;
}

macro_rules! impl_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX_LEN: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                fn from_usize(value: usize) -> Option<Self> {
                    value.try_into().ok()
                }

                fn index(self) -> usize {
                    self.try_into().unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, usize);

/// Backing storage for one slot per element.
///
/// `Vec<T>` gives a capacity chosen at runtime, `[T; N]` pins it at compile time.
pub trait Storage {
    type Element: Element;

    /// `Some(N)` if the storage type fixes the number of slots.
    const FIXED_LEN: Option<usize>;

    /// Callers guarantee `len` matches `FIXED_LEN` when it is set.
    fn from_fn(len: usize, f: impl FnMut(usize) -> Self::Element) -> Self;

    fn as_slice(&self) -> &[Self::Element];

    fn as_mut_slice(&mut self) -> &mut [Self::Element];
}

impl<T: Element> Storage for Vec<T> {
    type Element = T;

    const FIXED_LEN: Option<usize> = None;

    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..len).map(f).collect()
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Element, const N: usize> Storage for [T; N] {
    type Element = T;

    const FIXED_LEN: Option<usize> = Some(N);

    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        assert_eq!(len, N, "fixed storage length mismatch");
        core::array::from_fn(f)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

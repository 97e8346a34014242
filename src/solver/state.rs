//! Search states: a value paired with the set of inputs used to build it.

use std::fmt;

use crate::solver::constants::MASK_BITS;

/// Set of input indices, one bit per input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Mask(u64);

impl Mask {
    pub const EMPTY: Mask = Mask(0);

    pub fn singleton(index: usize) -> Self {
        debug_assert!(index < MASK_BITS);
        Mask(1 << index)
    }

    /// Mask with the low `count` bits set, i.e. every input used
    pub fn full(count: usize) -> Self {
        debug_assert!(count <= MASK_BITS);
        if count >= MASK_BITS {
            Mask(u64::MAX)
        } else {
            Mask((1 << count) - 1)
        }
    }

    #[inline]
    pub fn is_disjoint(self, other: Mask) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    pub fn union(self, other: Mask) -> Mask {
        Mask(self.0 | other.0)
    }

    pub fn contains(self, index: usize) -> bool {
        index < MASK_BITS && self.0 & (1 << index) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// A value constructible from exactly the inputs in `mask`, each used once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    value: u64,
    mask: Mask,
}

impl StateKey {
    pub fn new(value: u64, mask: Mask) -> Self {
        Self { value, mask }
    }

    /// State for the raw input at `index`
    pub fn leaf(index: usize, value: u64) -> Self {
        Self::new(value, Mask::singleton(index))
    }

    /// The goal state: `value` built from all `count` inputs
    pub fn target(value: u64, count: usize) -> Self {
        Self::new(value, Mask::full(count))
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.mask)
    }
}

use crate::hand::finger::Finger;
use crate::hand::state::State;
use bitvec::prelude::*;
use std::fmt;
use std::marker::PhantomData;

/// A closed enumeration that can be stored in a [`SymbolSet`]
pub trait Symbol: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, ordered by ordinal
    const VARIANTS: &'static [Self];

    /// Position of this variant within [`Symbol::VARIANTS`]
    fn ordinal(self) -> usize;
}

/// Fixed-size bitset over the variants of a symbol enumeration
///
/// Iteration yields members in canonical order regardless of insertion order.
/// Provides O(1) membership testing and set intersection.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SymbolSet<T: Symbol> {
    bits: BitVec,
    _symbol: PhantomData<T>,
}

/// Set of fingers, used for proximity and link membership
pub type FingerSet = SymbolSet<Finger>;
/// Set of states, used for the accepted-state table
pub type StateSet = SymbolSet<State>;

impl<T: Symbol> SymbolSet<T> {
    /// Create a set with no members
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; T::VARIANTS.len()],
            _symbol: PhantomData,
        }
    }

    /// Create a set containing every variant
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; T::VARIANTS.len()],
            _symbol: PhantomData,
        }
    }

    /// Insert a member
    pub fn insert(&mut self, symbol: T) {
        let ordinal = symbol.ordinal();
        if ordinal < self.bits.len() {
            self.bits.set(ordinal, true);
        }
    }

    /// Test membership
    pub fn contains(&self, symbol: T) -> bool {
        self.bits.get(symbol.ordinal()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no members are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count members
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in canonical order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|ordinal| T::VARIANTS.get(ordinal).copied())
    }

    /// Extract all members as a vector in canonical order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Symbol> Default for SymbolSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> FromIterator<T> for SymbolSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl<T: Symbol> fmt::Debug for SymbolSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

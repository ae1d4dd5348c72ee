//! Fixed-size bitset for sudoku digits
//!
//! The solver manipulates sets of digits constantly: the content of a cell,
//! the digits already present in a house, the candidates left for an empty
//! cell. All of them fit in the low 9 bits of a `u16`, which keeps the hot
//! candidate computation down to a handful of integer ops.

use crate::board::Digit;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A set of the digits 1 through 9, backed by the low 9 bits of a `u16`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

/// Iterator over the digits contained in a [`DigitSet`], in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct Iter(u16);

/// Potential return value for [`DigitSet::unique`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Empty;

const ALL_BITS: u16 = 0o777;

impl DigitSet {
    /// Set containing all nine digits
    pub const ALL: DigitSet = DigitSet(ALL_BITS);

    /// Empty set
    pub const NONE: DigitSet = DigitSet(0);

    /// Construct a set from a raw bitmask.
    ///
    /// # Panic
    /// Panics, if the mask contains bits above [`DigitSet::ALL`]
    pub fn from_bits(mask: u16) -> Self {
        assert!(mask <= ALL_BITS);
        DigitSet(mask)
    }

    /// Return the raw bitmask backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Checks if `digit` is contained in this set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & digit.as_set().0 != 0
    }

    /// Adds `digit` to this set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= digit.as_set().0;
    }

    /// Deletes `digit` from this set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.as_set().0;
    }

    /// Returns the digits in this set that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Returns the number of digits in this set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether this set contains all nine digits.
    pub fn is_full(self) -> bool {
        self.0 == ALL_BITS
    }

    /// Returns the only digit in this set, iff exactly 1 digit exists.
    /// If no digit exists, it returns `Err(Empty)`.
    /// If more than 1 digit exists, it returns `Ok(None)`.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            1 => {
                let digit = self.into_iter().next();
                debug_assert!(digit.is_some());
                Ok(digit)
            }
            0 => Err(Empty),
            _ => Ok(None),
        }
    }
}

impl From<Digit> for DigitSet {
    fn from(digit: Digit) -> Self {
        digit.as_set()
    }
}

impl std::iter::FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, other: Self) -> Self {
        DigitSet(self.0 & other.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitAndAssign for DigitSet {
    #[inline(always)]
    fn bitand_assign(&mut self, other: Self) {
        self.0 &= other.0;
    }
}

impl BitOrAssign for DigitSet {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.0 <= ALL_BITS);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Digit::from_index(bit_pos))
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.into_iter().map(Digit::get)).finish()
    }
}

impl fmt::Binary for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

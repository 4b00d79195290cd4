//! Bound on how far an unreduced element may exceed the modulus.

use subtle::{Choice, ConditionallySelectable};

/// Upper bound `e` on an element's representative `g`, such that `g <= e * p`.
///
/// Additions sum the bounds of their operands, products reduce back to [`Excess::PRODUCT`], and
/// full reduction restores [`Excess::REDUCED`]. Elements never carry an excess above the field's
/// [`capacity`][crate::ModulusParams::capacity].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Excess(u32);

impl Excess {
    /// Excess of a fully reduced element.
    pub const REDUCED: Self = Self(1);

    /// Excess of the output of a reduction: below `2p`.
    pub const PRODUCT: Self = Self(2);

    pub(crate) const fn new(bound: u32) -> Self {
        debug_assert!(bound >= 1);
        Self(bound)
    }

    /// Excess of exactly `2^k`.
    pub(crate) const fn pow2(k: u32) -> Self {
        Self(1 << k)
    }

    /// The bound as an integer multiple of the modulus.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Bound of a sum.
    pub(crate) const fn sum(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// Would a product with an operand of excess `rhs` overflow `capacity`?
    pub(crate) const fn product_exceeds(self, rhs: u32, capacity: u32) -> bool {
        (self.0 as u64) * (rhs as u64) > capacity as u64
    }

    /// `k` such that `2^k` is the smallest power of two that is at least this excess.
    pub(crate) const fn ceil_log2(self) -> u32 {
        u32::BITS - (self.0 - 1).leading_zeros()
    }

    /// Number of conditional subtractions which bring an element with this excess into `[0, p)`.
    pub(crate) const fn reduction_rounds(self) -> u32 {
        self.ceil_log2() + 1
    }
}

impl Default for Excess {
    fn default() -> Self {
        Self::REDUCED
    }
}

impl ConditionallySelectable for Excess {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u32::conditional_select(&a.0, &b.0, choice))
    }
}

//! Double-width accumulator holding unreduced products.

use bigint::{Limb, Uint, Word};

/// Unreduced value of `2 * LIMBS` little-endian words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Wide<const LIMBS: usize>([[Word; LIMBS]; 2]);

impl<const LIMBS: usize> Wide<LIMBS> {
    pub(crate) const ZERO: Self = Self([[0; LIMBS]; 2]);

    /// Join `(lo, hi)` halves, as returned by the widening operations on [`Uint`].
    pub(crate) const fn from_halves((lo, hi): (Uint<LIMBS>, Uint<LIMBS>)) -> Self {
        Self([lo.to_words(), hi.to_words()])
    }

    /// Zero-extend a single-width value.
    pub(crate) const fn from_lo(lo: &Uint<LIMBS>) -> Self {
        Self::from_halves((*lo, Uint::ZERO))
    }

    /// Full product `a * b`.
    pub(crate) fn mul(a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Self {
        Self::from_halves(a.widening_mul(b))
    }

    /// Full square `a^2`.
    pub(crate) fn square(a: &Uint<LIMBS>) -> Self {
        Self::from_halves(a.widening_square())
    }

    /// Full product of `a` with a single word.
    pub(crate) fn mul_word(a: &Uint<LIMBS>, k: Word) -> Self {
        let (lo, hi) = a.widening_mul(&Uint::<1>::from_word(k));
        Self::from_halves((lo, hi.resize()))
    }

    pub(crate) fn as_words_mut(&mut self) -> &mut [Word] {
        self.0.as_flattened_mut()
    }

    /// Low half.
    pub(crate) const fn lo(&self) -> Uint<LIMBS> {
        Uint::from_words(self.0[0])
    }

    /// High half.
    pub(crate) const fn hi(&self) -> Uint<LIMBS> {
        Uint::from_words(self.0[1])
    }

    fn halves(&self) -> (Uint<LIMBS>, Uint<LIMBS>) {
        (self.lo(), self.hi())
    }

    /// `self += rhs`; the sum must not overflow.
    pub(crate) fn add_assign(&mut self, rhs: &Uint<LIMBS>) {
        let (lo, carry) = self.lo().carrying_add(rhs, Limb::ZERO);
        let (hi, carry) = self.hi().carrying_add(&Uint::ZERO, carry);
        debug_assert_eq!(carry, Limb::ZERO);
        *self = Self::from_halves((lo, hi));
    }

    /// Shift left by `bits`, dropping anything shifted past the top word.
    pub(crate) fn shl(&self, bits: u32) -> Self {
        Uint::overflowing_shl_vartime_wide(self.halves(), bits).map_or(Self::ZERO, Self::from_halves)
    }

    /// Split at bit position `bits`, returning `(self >> bits, self mod 2^bits)`.
    ///
    /// `bits` must be smaller than the single-width size and `self >> bits` must fit in it.
    pub(crate) fn split(&self, bits: u32) -> (Uint<LIMBS>, Uint<LIMBS>) {
        debug_assert!(bits < Uint::<LIMBS>::BITS);

        let (high, overflow) =
            Uint::overflowing_shr_vartime_wide(self.halves(), bits).unwrap_or_default();
        debug_assert!(overflow.is_zero_vartime());

        let mask = Uint::<LIMBS>::MAX.unbounded_shr_vartime(Uint::<LIMBS>::BITS - bits);
        (high, self.lo().bitand(&mask))
    }
}

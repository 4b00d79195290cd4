//! Field elements with lazy reduction.
//!
//! Each element carries an [`Excess`] bound alongside its representative. Additions and
//! negations let the representative grow past the modulus, and only when the bound would
//! exceed the field's capacity (or a product of bounds would) is the element fully reduced.

mod pow;
mod sqrt;

use crate::{
    Error, Excess, FieldParams, Result,
    reduce::{reduce, reduce_below},
    wide::Wide,
};
use bigint::{Limb, Uint, Word};
use core::{
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::DefaultIsZeroes;

/// Element of the prime field defined by `MOD`.
///
/// The representative is kept in Montgomery form `x * R mod p` (with `R = 2^(LIMBS * w)`) for
/// Montgomery-friendly and general moduli, and as the plain integer for pseudo-Mersenne and
/// generalized Mersenne moduli.
#[derive(Clone, Copy)]
pub struct FieldElement<MOD, const LIMBS: usize>
where
    MOD: FieldParams<LIMBS>,
{
    g: Uint<LIMBS>,
    excess: Excess,
    params: PhantomData<MOD>,
}

impl<MOD, const LIMBS: usize> FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_parts(Uint::ZERO, Excess::REDUCED);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_parts(*MOD::PARAMS.one(), Excess::REDUCED);

    /// Number of limbs used by the internal integer representation.
    pub const LIMBS: usize = LIMBS;

    /// Largest excess an element of this field carries before it is fully reduced.
    pub const CAPACITY: u32 = MOD::PARAMS.capacity();

    const fn from_parts(g: Uint<LIMBS>, excess: Excess) -> Self {
        Self {
            g,
            excess,
            params: PhantomData,
        }
    }

    /// Single entry point for results whose excess may have grown: fully reduces when the bound
    /// leaves the field's capacity.
    #[inline]
    fn bounded(g: Uint<LIMBS>, excess: Excess) -> Self {
        let ret = Self::from_parts(g, excess);

        if excess.get() > Self::CAPACITY {
            ret.normalize()
        } else {
            ret
        }
    }

    /// Convert a full-width [`Uint`] into a field element, reducing it modulo `p` first.
    pub fn from_uint(uint: &Uint<LIMBS>) -> Self {
        if const { MOD::PARAMS.shape().is_montgomery() } {
            // x * R^2 * R^-1 = x * R
            let d = Wide::mul(uint, MOD::PARAMS.r2());
            Self::from_parts(reduce::<MOD, LIMBS>(&d), Excess::PRODUCT)
        } else {
            let g = reduce_below(
                uint,
                &MOD::PARAMS.modulus(),
                const { MOD::PARAMS.full_width_rounds() },
            );
            Self::from_parts(g, Excess::REDUCED)
        }
    }

    /// Convert a canonical [`Uint`] into a field element.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    pub fn from_canonical(uint: &Uint<LIMBS>) -> CtOption<Self> {
        CtOption::new(Self::from_uint(uint), uint.ct_lt(&MOD::PARAMS.modulus()))
    }

    /// Convert a `u64` into a field element.
    pub fn from_u64(w: u64) -> Self {
        Self::from_uint(&Uint::from_u64(w))
    }

    /// Parse a big endian hexadecimal string (without a `0x` prefix) holding a canonical value.
    ///
    /// Shorter strings are zero-extended. Returns [`Error`] on empty, overlong or malformed input,
    /// and for values which are not below the modulus.
    ///
    /// **This operation is variable time with respect to `hex`.** It is meant for constants.
    pub fn from_hex(hex: &str) -> Result<Self> {
        const NIBBLES: usize = (Word::BITS / 4) as usize;

        if hex.is_empty() || hex.len() > LIMBS * NIBBLES {
            return Err(Error);
        }

        let mut words = [0; LIMBS];
        for (i, c) in hex.bytes().rev().enumerate() {
            let nibble = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => return Err(Error),
            };
            words[i / NIBBLES] |= (nibble as Word) << (4 * (i % NIBBLES));
        }

        Option::from(Self::from_canonical(&Uint::from_words(words))).ok_or(Error)
    }

    /// Translate the field element into its canonical integer in `[0, p)`, leaving the
    /// Montgomery domain if the field uses it.
    pub fn to_canonical(&self) -> Uint<LIMBS> {
        let g = if const { MOD::PARAMS.shape().is_montgomery() } {
            reduce::<MOD, LIMBS>(&Wide::from_lo(&self.g))
        } else {
            self.g
        };

        let rounds = if const { MOD::PARAMS.shape().is_montgomery() } {
            // g * R^-1 <= p, whatever the excess
            1
        } else {
            self.excess.reduction_rounds()
        };

        reduce_below(&g, &MOD::PARAMS.modulus(), rounds)
    }

    /// Current bound on how far the representative exceeds the modulus.
    pub const fn excess(&self) -> Excess {
        self.excess
    }

    /// Fully reduce the representative into `[0, p)`, resetting the excess to one.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let g = reduce_below(
            &self.g,
            &MOD::PARAMS.modulus(),
            self.excess.reduction_rounds(),
        );
        Self::from_parts(g, Excess::REDUCED)
    }

    /// Determine if this field element is zero.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        self.normalize().g.ct_eq(&Uint::ZERO)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    ///
    /// # Returns
    ///
    /// If odd, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_odd(&self) -> Choice {
        self.to_canonical().is_odd().into()
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        let (g, carry) = self.g.carrying_add(&rhs.g, Limb::ZERO);
        debug_assert_eq!(carry, Limb::ZERO);
        Self::bounded(g, self.excess.sum(rhs.excess))
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    /// Negate element: `k * p - g`, where `k` is the smallest power of two at least as large as
    /// the excess, so the result never underflows and no comparison against `p` is needed.
    pub fn neg(&self) -> Self {
        let k = self.excess.ceil_log2();
        let (g, borrow) = MOD::PARAMS
            .modulus()
            .shl_vartime(k)
            .borrowing_sub(&self.g, Limb::ZERO);
        debug_assert_eq!(borrow, Limb::ZERO);
        Self::bounded(g, Excess::pow2(k))
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let lhs = self.within_capacity(rhs.excess);
        let d = Wide::mul(&lhs.g, &rhs.g);
        Self::from_parts(reduce::<MOD, LIMBS>(&d), Excess::PRODUCT)
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        let x = self.within_capacity(self.excess);
        let d = Wide::square(&x.g);
        Self::from_parts(reduce::<MOD, LIMBS>(&d), Excess::PRODUCT)
    }

    /// Fully reduce `self` if its excess times `other` would leave the field's capacity.
    #[inline]
    fn within_capacity(&self, other: Excess) -> Self {
        if self.excess.product_exceeds(other.get(), Self::CAPACITY) {
            self.normalize()
        } else {
            *self
        }
    }

    /// Multiply by a small signed integer.
    pub fn mul_small(&self, k: i32) -> Self {
        let m = k.unsigned_abs();

        let ret = if const { !MOD::PARAMS.shape().is_montgomery() } {
            let d = Wide::mul_word(&self.g, m as Word);
            Self::from_parts(reduce::<MOD, LIMBS>(&d), Excess::PRODUCT)
        } else if m == 0 {
            Self::ZERO
        } else if self.excess.product_exceeds(m, Self::CAPACITY) {
            self.multiply(&Self::from_u64(m as u64))
        } else {
            // scaling a Montgomery representative scales the value
            let (g, overflow) = self.g.widening_mul(&Uint::<1>::from_word(m as Word));
            debug_assert!(overflow.is_zero_vartime());
            Self::from_parts(g, Excess::new(self.excess.get() * m))
        };

        if k < 0 { ret.neg() } else { ret }
    }

    /// Divide by two: if the representative is odd, add `p` first, then shift right by one.
    #[must_use]
    pub fn half(&self) -> Self {
        let p = Uint::conditional_select(
            &Uint::ZERO,
            &MOD::PARAMS.modulus(),
            self.g.is_odd().into(),
        );

        let (sum, carry) = self.g.carrying_add(&p, Limb::ZERO);
        let top = Uint::<LIMBS>::from_word(carry.0).shl_vartime(Uint::<LIMBS>::BITS - 1);
        Self::from_parts(sum.shr_vartime(1).bitor(&top), self.excess)
    }

    /// Overwrite `self` with `src` if `flag` is set, in constant time.
    pub fn conditional_move(&mut self, src: &Self, flag: Choice) {
        self.conditional_assign(src, flag);
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! field_element_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op for FieldElement<MOD, LIMBS>
        where
            MOD: FieldParams<LIMBS>,
        {
            type Output = FieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: FieldElement<MOD, LIMBS>) -> FieldElement<MOD, LIMBS> {
                <FieldElement<MOD, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for FieldElement<MOD, LIMBS>
        where
            MOD: FieldParams<LIMBS>,
        {
            type Output = FieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<MOD, LIMBS>) -> FieldElement<MOD, LIMBS> {
                <FieldElement<MOD, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<Self> for &FieldElement<MOD, LIMBS>
        where
            MOD: FieldParams<LIMBS>,
        {
            type Output = FieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<MOD, LIMBS>) -> FieldElement<MOD, LIMBS> {
                <FieldElement<MOD, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

field_element_op!(Add, add, add);
field_element_op!(Sub, sub, sub);
field_element_op!(Mul, mul, multiply);

/// Emit a `core::ops` assignment trait wrapper for an inherent method.
macro_rules! field_element_assign_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op<Self> for FieldElement<MOD, LIMBS>
        where
            MOD: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: FieldElement<MOD, LIMBS>) {
                *self = <FieldElement<MOD, LIMBS>>::$inner_func(self, &other);
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for FieldElement<MOD, LIMBS>
        where
            MOD: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: &FieldElement<MOD, LIMBS>) {
                *self = <FieldElement<MOD, LIMBS>>::$inner_func(self, other);
            }
        }
    };
}

field_element_assign_op!(AddAssign, add_assign, add);
field_element_assign_op!(SubAssign, sub_assign, sub);
field_element_assign_op!(MulAssign, mul_assign, multiply);

impl<MOD, const LIMBS: usize> Neg for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        <Self>::neg(&self)
    }
}

impl<MOD, const LIMBS: usize> Neg for &FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    type Output = FieldElement<MOD, LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<MOD, LIMBS> {
        <FieldElement<MOD, LIMBS>>::neg(self)
    }
}

impl<MOD, const LIMBS: usize> Sum for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a, MOD, const LIMBS: usize> Sum<&'a Self> for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a FieldElement<MOD, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<MOD, const LIMBS: usize> Product for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a, MOD, const LIMBS: usize> Product<&'a Self> for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<MOD, const LIMBS: usize> ConditionallySelectable for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_parts(
            Uint::conditional_select(&a.g, &b.g, choice),
            Excess::conditional_select(&a.excess, &b.excess, choice),
        )
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        Uint::conditional_swap(&mut a.g, &mut b.g, choice);
        Excess::conditional_swap(&mut a.excess, &mut b.excess, choice);
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeEq for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.normalize().g.ct_eq(&other.normalize().g)
    }
}

//
// `core::fmt` trait impls
//

impl<MOD, const LIMBS: usize> fmt::Debug for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldElement<p={}>(0x{:X}, excess={})",
            MOD::MODULUS_HEX,
            self.to_canonical(),
            self.excess.get()
        )
    }
}

impl<MOD, const LIMBS: usize> fmt::Display for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<MOD, const LIMBS: usize> fmt::LowerHex for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_canonical(), f)
    }
}

impl<MOD, const LIMBS: usize> fmt::UpperHex for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_canonical(), f)
    }
}

//
// Miscellaneous trait impls
//

impl<MOD, const LIMBS: usize> Default for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD, const LIMBS: usize> DefaultIsZeroes for FieldElement<MOD, LIMBS> where
    MOD: FieldParams<LIMBS>
{
}

impl<MOD: FieldParams<LIMBS>, const LIMBS: usize> Eq for FieldElement<MOD, LIMBS> {}
impl<MOD: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<MOD, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<MOD, const LIMBS: usize> From<u32> for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u32) -> FieldElement<MOD, LIMBS> {
        Self::from_u64(n.into())
    }
}

impl<MOD, const LIMBS: usize> From<u64> for FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u64) -> FieldElement<MOD, LIMBS> {
        Self::from_u64(n)
    }
}

impl<MOD, const LIMBS: usize> From<FieldElement<MOD, LIMBS>> for Uint<LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn from(fe: FieldElement<MOD, LIMBS>) -> Uint<LIMBS> {
        Uint::from(&fe)
    }
}

impl<MOD, const LIMBS: usize> From<&FieldElement<MOD, LIMBS>> for Uint<LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    fn from(fe: &FieldElement<MOD, LIMBS>) -> Uint<LIMBS> {
        fe.to_canonical()
    }
}

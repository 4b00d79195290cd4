//! Compile-time description of a field modulus.

use bigint::{Odd, Uint, Word, modular::FixedMontyParams};
use core::{cmp::Ordering, fmt::Debug};

/// Largest capacity exponent: the excess bound is capped at `2^30` so it always fits a `u32`
/// after a sum.
const MAX_CAPACITY_BITS: u32 = 30;

/// Structural category of a modulus, which selects the reduction algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ModulusShape {
    /// `p = 2^n - c` for a small `c` which fits in a single word.
    PseudoMersenne,

    /// `p = 2^n - 2^(n/2) - 1` for even `n`, e.g. the Goldilocks prime.
    GeneralizedMersenne,

    /// `p ≡ -1 (mod 2^w)` where `w` is the word size, so `-p^-1 mod 2^w = 1` and Montgomery
    /// reduction can multiply by `p + 1` directly.
    MontgomeryFriendly,

    /// Any other odd modulus, reduced with Montgomery's algorithm.
    General,
}

impl ModulusShape {
    /// Are elements of fields with this shape held in Montgomery form?
    pub const fn is_montgomery(self) -> bool {
        matches!(self, Self::MontgomeryFriendly | Self::General)
    }
}

/// Parameters of a modulus, derived once at compile time.
///
/// Construction panics (at compile time, when used in a `const`) if the modulus cannot be
/// supported with the requested shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModulusParams<const LIMBS: usize> {
    modulus: Odd<Uint<LIMBS>>,
    bits: u32,
    shape: ModulusShape,
    constant: Word,
    plus_one: Uint<LIMBS>,
    zero_words: usize,
    one: Uint<LIMBS>,
    r2: Uint<LIMBS>,
    capacity_bits: u32,
    non_residue: u64,
}

impl<const LIMBS: usize> ModulusParams<LIMBS> {
    /// Derive parameters for `modulus` with the given shape.
    ///
    /// # Panics
    ///
    /// - if the modulus is even, 64 bits or smaller, or leaves less than two spare bits
    /// - if it does not have the claimed shape, or the shape's headroom requirements aren't met
    /// - if `modulus ≡ 1 (mod 8)`: use [`ModulusParams::with_non_residue`] instead
    pub const fn new(modulus: &Uint<LIMBS>, shape: ModulusShape) -> Self {
        Self::with_non_residue(modulus, shape, 0)
    }

    /// Derive parameters for `modulus`, along with a quadratic non-residue used to compute square
    /// roots when `modulus ≡ 1 (mod 8)`. Pass `0` if there is none.
    ///
    /// The non-residue is trusted: it is checked by the test suite, not here.
    pub const fn with_non_residue(
        modulus: &Uint<LIMBS>,
        shape: ModulusShape,
        non_residue: u64,
    ) -> Self {
        let modulus = match modulus.to_odd().into_option_copied() {
            Some(modulus) => modulus,
            None => panic!("modulus must be odd"),
        };

        let p = modulus.as_ref();
        let low = p.as_words()[0];
        let bits = p.bits_vartime();
        let width = Uint::<LIMBS>::BITS;

        assert!(bits > 64, "modulus is too small to ensure all u64s are in range");
        assert!(
            width >= bits + 2,
            "modulus must leave at least two spare bits for lazy reduction"
        );
        assert!(
            low & 7 != 1 || non_residue != 0,
            "moduli which are 1 mod 8 need a quadratic non-residue for square roots"
        );

        let plus_one = p.wrapping_add(&Uint::ONE);
        let zero_words = (plus_one.trailing_zeros_vartime() / Word::BITS) as usize;
        let monty = FixedMontyParams::new_vartime(modulus);

        let constant = match shape {
            ModulusShape::PseudoMersenne => {
                let c = Uint::<LIMBS>::ONE.shl_vartime(bits).wrapping_sub(p);
                assert!(
                    c.bits_vartime() <= Word::BITS,
                    "pseudo-Mersenne constant must fit in a single word"
                );
                assert!(
                    2 * bits > width + 2 * c.bits_vartime() + 1,
                    "pseudo-Mersenne constant is too large for the available headroom"
                );
                c.as_words()[0]
            }
            ModulusShape::GeneralizedMersenne => {
                assert!(bits % 2 == 0, "generalized Mersenne modulus must have an even bit length");
                let expected = Uint::<LIMBS>::ONE
                    .shl_vartime(bits)
                    .wrapping_sub(&Uint::ONE.shl_vartime(bits / 2))
                    .wrapping_sub(&Uint::ONE);
                assert!(
                    matches!(expected.cmp_vartime(p), Ordering::Equal),
                    "modulus is not of the form 2^n - 2^(n/2) - 1"
                );
                assert!(
                    width + bits / 2 + 3 <= 2 * bits,
                    "generalized Mersenne modulus leaves too much headroom for folding"
                );
                1
            }
            ModulusShape::MontgomeryFriendly => {
                assert!(
                    low == Word::MAX,
                    "Montgomery-friendly modulus must be -1 modulo the word size"
                );
                plus_one.as_words()[zero_words]
            }
            ModulusShape::General => monty.mod_neg_inv().0,
        };

        let one = if shape.is_montgomery() {
            *monty.one()
        } else {
            Uint::ONE
        };

        let spare = width - bits - 1;
        let capacity_bits = if spare < MAX_CAPACITY_BITS {
            spare
        } else {
            MAX_CAPACITY_BITS
        };

        Self {
            modulus,
            bits,
            shape,
            constant,
            plus_one,
            zero_words,
            one,
            r2: *monty.r2(),
            capacity_bits,
            non_residue,
        }
    }

    /// The modulus.
    pub const fn modulus(&self) -> Uint<LIMBS> {
        *self.modulus.as_ref()
    }

    /// Bit length of the modulus.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Residue of the modulus modulo 8, which selects the square root algorithm.
    pub const fn mod8(&self) -> u32 {
        (self.modulus.as_ref().as_words()[0] & 7) as u32
    }

    /// Shape of the modulus.
    pub const fn shape(&self) -> ModulusShape {
        self.shape
    }

    /// Shape-specific reduction constant:
    ///
    /// - pseudo-Mersenne: `c = 2^n - p`
    /// - generalized Mersenne: `1`
    /// - Montgomery-friendly: the lowest non-zero word of `p + 1`
    /// - general: `-p^-1 mod 2^w`
    pub const fn constant(&self) -> Word {
        self.constant
    }

    /// Largest excess an element may carry before it has to be fully reduced.
    pub const fn capacity(&self) -> u32 {
        1 << self.capacity_bits
    }

    /// Quadratic non-residue used by Tonelli-Shanks, or `0` if none was provided.
    pub const fn non_residue(&self) -> u64 {
        self.non_residue
    }

    /// Number of times 2 divides `p - 1`.
    pub const fn two_adicity(&self) -> u32 {
        self.modulus
            .as_ref()
            .wrapping_sub(&Uint::ONE)
            .trailing_zeros_vartime()
    }

    /// Odd part of `p - 1`: `(p - 1) >> two_adicity`.
    pub const fn odd_part(&self) -> Uint<LIMBS> {
        self.modulus
            .as_ref()
            .wrapping_sub(&Uint::ONE)
            .shr_vartime(self.two_adicity())
    }

    pub(crate) const fn odd_modulus(&self) -> &Odd<Uint<LIMBS>> {
        &self.modulus
    }

    /// `p + 1`, along with how many of its low words are zero.
    pub(crate) const fn plus_one(&self) -> (&[Word; LIMBS], usize) {
        (self.plus_one.as_words(), self.zero_words)
    }

    /// Internal representation of one: `R mod p` for Montgomery shapes, otherwise `1`.
    pub(crate) const fn one(&self) -> &Uint<LIMBS> {
        &self.one
    }

    /// `R^2 mod p`, where `R = 2^(LIMBS * w)`.
    pub(crate) const fn r2(&self) -> &Uint<LIMBS> {
        &self.r2
    }

    /// Number of conditional subtractions needed to reduce any full-width value below `p`.
    pub(crate) const fn full_width_rounds(&self) -> u32 {
        Uint::<LIMBS>::BITS - self.bits + 1
    }
}

/// Parameters of a prime field, usually implemented with [`field_params!`][crate::field_params].
pub trait FieldParams<const LIMBS: usize>:
    Copy + Debug + Default + Eq + Send + Sync + 'static
{
    /// Field modulus as a big endian hexadecimal string.
    const MODULUS_HEX: &'static str;

    /// Parameters derived from the modulus.
    const PARAMS: ModulusParams<LIMBS>;
}

#[cfg(test)]
mod tests {
    use super::{ModulusParams, ModulusShape};
    use bigint::{U192, U256, U384, Uint, Word};
    use num_bigint::BigUint;

    const M127: U192 = U192::from_be_hex("00000000000000007fffffffffffffffffffffffffffffff");

    fn to_biguint<const LIMBS: usize>(x: &Uint<LIMBS>) -> BigUint {
        x.as_words()
            .iter()
            .rev()
            .fold(BigUint::default(), |acc, &w| (acc << Word::BITS) + w)
    }

    #[test]
    fn pseudo_mersenne_params() {
        let params = ModulusParams::new(&M127, ModulusShape::PseudoMersenne);
        assert_eq!(params.bits(), 127);
        assert_eq!(params.constant(), 1);
        assert_eq!(params.mod8(), 7);
        assert_eq!(params.capacity(), 1 << 30);
        assert_eq!(params.one(), &U192::ONE);
        assert_eq!(params.two_adicity(), 1);
    }

    #[test]
    fn general_params() {
        let p = U384::from_be_hex(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
        );
        let params = ModulusParams::new(&p, ModulusShape::General);
        assert_eq!(params.bits(), 381);
        assert_eq!(params.capacity(), 4);
        assert_eq!(params.mod8(), 3);
        // m' * p ≡ -1 (mod 2^w)
        assert_eq!(
            params.constant().wrapping_mul(p.as_words()[0]),
            Word::MAX
        );
    }

    #[test]
    fn montgomery_constants() {
        let p = U384::from_be_hex(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
        );
        let params = ModulusParams::new(&p, ModulusShape::General);
        let m = to_biguint(&p);

        // R = 2^384
        assert_eq!(to_biguint(params.one()), (BigUint::from(1u8) << 384u32) % &m);
        assert_eq!(to_biguint(params.r2()), (BigUint::from(1u8) << 768u32) % &m);
        assert_eq!(params.full_width_rounds(), 4);
    }

    #[test]
    fn montgomery_friendly_params() {
        let p = U256::from_be_hex(
            "0000010000000016ffffffffffffffffffffffffffffffffffffffffffffffff",
        );
        let params = ModulusParams::new(&p, ModulusShape::MontgomeryFriendly);
        assert_eq!(params.bits(), 233);
        assert_eq!(params.capacity(), 1 << 22);
        let (plus_one, zero_words) = params.plus_one();
        assert_eq!(zero_words as u32 * Word::BITS, 192);
        assert_eq!(params.constant(), plus_one[zero_words]);
        assert_eq!(
            to_biguint(params.one()),
            (BigUint::from(1u8) << 256u32) % to_biguint(&p)
        );
    }

    #[test]
    fn tonelli_shanks_params() {
        // P-224: p - 1 = 2^96 * (2^128 - 1)
        let p = U256::from_be_hex(
            "00000000ffffffffffffffffffffffffffffffff000000000000000000000001",
        );
        let params = ModulusParams::with_non_residue(&p, ModulusShape::General, 11);
        assert_eq!(params.mod8(), 1);
        assert_eq!(params.two_adicity(), 96);
        assert_eq!(
            params.odd_part(),
            U256::from_be_hex("00000000000000000000000000000000ffffffffffffffffffffffffffffffff")
        );
    }

    #[test]
    #[should_panic(expected = "non-residue")]
    fn missing_non_residue() {
        let p = U256::from_be_hex(
            "00000000ffffffffffffffffffffffffffffffff000000000000000000000001",
        );
        let _ = ModulusParams::new(&p, ModulusShape::General);
    }

    #[test]
    #[should_panic(expected = "modulus must be odd")]
    fn even_modulus() {
        let _ = ModulusParams::new(&M127.wrapping_add(&U192::ONE), ModulusShape::General);
    }

    #[test]
    #[should_panic(expected = "generalized Mersenne")]
    fn wrong_shape() {
        let _ = ModulusParams::new(&M127, ModulusShape::GeneralizedMersenne);
    }
}

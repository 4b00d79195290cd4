//! Exponentiation.

use crate::{FieldElement, FieldParams};
use bigint::{Uint, Word};
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Window size in bits.
const WINDOW: u32 = 4;

/// Number of precomputed powers.
const TABLE_SIZE: usize = 1 << WINDOW;

impl<MOD, const LIMBS: usize> FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// Uses fixed 4-bit windows over a full table of the powers `self^0..self^15`, and selects
    /// table entries by scanning the whole table, so the sequence of operations depends only on
    /// the bit length of `exp`. The result is fully reduced.
    pub fn pow(&self, exp: &Uint<LIMBS>) -> Self {
        let windows = exp.bits_vartime().div_ceil(WINDOW) + 1;

        let mut table = [Self::ONE; TABLE_SIZE];
        table[1] = *self;
        for i in 2..TABLE_SIZE {
            table[i] = table[i - 1] * self;
        }

        let mut acc = lookup(&table, nibble(exp, windows - 1));

        for i in (0..(windows - 1)).rev() {
            for _ in 0..WINDOW {
                acc = acc.square();
            }
            acc *= lookup(&table, nibble(exp, i));
        }

        acc.normalize()
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub fn pow_vartime<const RHS_LIMBS: usize>(&self, exp: &Uint<RHS_LIMBS>) -> Self {
        let mut res = Self::ONE;

        for i in (0..Uint::<RHS_LIMBS>::BITS).rev() {
            res = res.square();

            if exp.bit_vartime(i) {
                res *= self;
            }
        }

        res.normalize()
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    ///
    /// If the exponent is fixed, this operation is constant time.
    pub fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }
}

/// Extracts the 4-bit digit at position `index` of `exp`, which is zero past the top word.
#[inline(always)]
fn nibble<const LIMBS: usize>(exp: &Uint<LIMBS>, index: u32) -> u8 {
    let bit = index * WINDOW;
    exp.as_words()
        .get((bit / Word::BITS) as usize)
        .map_or(0, |w| ((w >> (bit % Word::BITS)) & 0xf) as u8)
}

/// Constant-time table lookup touching every entry.
fn lookup<MOD, const LIMBS: usize>(
    table: &[FieldElement<MOD, LIMBS>; TABLE_SIZE],
    index: u8,
) -> FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    let mut ret = table[0];
    for (i, entry) in table.iter().enumerate().skip(1) {
        ret.conditional_assign(entry, (i as u8).ct_eq(&index));
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::nibble;
    use crate::{FieldElement, field_params};
    use bigint::{U384, Uint, Word};

    field_params!(
        name: Bls12381,
        modulus: "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
        uint: U384,
        shape: General,
        doc: "BLS12-381 base field modulus"
    );

    type Fe = FieldElement<Bls12381, { U384::LIMBS }>;

    #[test]
    fn small_exponents() {
        let x = Fe::from_u64(3);
        assert_eq!(x.pow(&U384::ZERO), Fe::ONE);
        assert_eq!(x.pow(&U384::ONE), x);
        assert_eq!(x.pow(&U384::from_u64(5)), Fe::from_u64(243));
        assert_eq!(x.pow(&U384::from_u64(40)), Fe::from_u64(12157665459056928801));
    }

    #[test]
    fn zero_base() {
        assert_eq!(Fe::ZERO.pow(&U384::ZERO), Fe::ONE);
        assert_eq!(Fe::ZERO.pow(&U384::from_u64(7)), Fe::ZERO);
    }

    #[test]
    fn constant_time_matches_vartime() {
        let x = Fe::from_u64(0xdead_beef) + Fe::from_u64(1).double();
        let exp = U384::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000f0e1d2c3b4a5968778695a4b3c2d1e0f",
        );
        assert_eq!(x.pow(&exp), x.pow_vartime(&exp));
    }

    #[test]
    fn pow_result_is_reduced() {
        let x = Fe::from_u64(2) + Fe::from_u64(2);
        assert_eq!(x.pow(&U384::from_u64(3)).excess().get(), 1);
    }

    #[test]
    fn nibbles() {
        let e = Uint::<2>::from_words([0xa5, 0x3]);
        assert_eq!(nibble(&e, 0), 0x5);
        assert_eq!(nibble(&e, 1), 0xa);
        assert_eq!(nibble(&e, Word::BITS / 4), 0x3);
        assert_eq!(nibble(&e, 2 * Word::BITS / 4), 0);
    }

    #[test]
    fn squarings() {
        let x = Fe::from_u64(3);
        // 3^(2^5) = 3^32
        assert_eq!(x.sqn_vartime(5), Fe::from_u64(1853020188851841));
    }
}

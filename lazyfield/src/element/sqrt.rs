//! Inversion, quadratic residuosity and square roots, adapted from
//! <https://eprint.iacr.org/2012/685.pdf>.

use crate::{FieldElement, FieldParams, ModulusParams};
use bigint::{JacobiSymbol, Uint};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    const fn for_modulus<const LIMBS: usize>(params: &ModulusParams<LIMBS>) -> Self {
        match params.mod8() {
            3 | 7 => Self::Shanks,
            5 => Self::Atkin,
            _ => Self::TonelliShanks,
        }
    }
}

impl<MOD, const LIMBS: usize> FieldElement<MOD, LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    /// Compute field inversion `1 / self` as `self^(p - 2)`.
    ///
    /// Zero has no inverse and maps to zero.
    pub fn invert(&self) -> Self {
        let p_minus_2 = const { MOD::PARAMS.modulus().wrapping_sub(&Uint::from_u8(2)) };
        self.pow(&p_minus_2)
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if `self` is zero.
    pub fn try_invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert(), !self.is_zero())
    }

    /// Is `self` a non-zero square, i.e. is its Jacobi symbol modulo `p` equal to one?
    ///
    /// **This operation is variable time with respect to `self`.**
    pub fn is_quadratic_residue(&self) -> Choice {
        let symbol = self
            .to_canonical()
            .jacobi_symbol_vartime(MOD::PARAMS.odd_modulus());
        Choice::from(matches!(symbol, JacobiSymbol::One) as u8)
    }

    /// Returns a square root of `self`.
    ///
    /// The result is only meaningful when `self` is a square; use [`FieldElement::checked_sqrt`]
    /// if that is not known.
    pub fn sqrt(&self) -> Self {
        match const { Algorithm::for_modulus(&MOD::PARAMS) } {
            Algorithm::Atkin => self.sqrt_atkin(),
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        }
    }

    /// Returns the square root of `self`, or `None` if no square root exists.
    pub fn checked_sqrt(&self) -> CtOption<Self> {
        let sqrt = self.sqrt();
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkin(&self) -> Self {
        debug_assert_eq!(MOD::PARAMS.mod8(), 5);

        let mod_minus_5_over_8 = const {
            MOD::PARAMS
                .modulus()
                .wrapping_sub(&Uint::from_u8(5))
                .shr_vartime(3)
        };

        let a = self.normalize();
        let two_a = a.double();
        let v = two_a.pow(&mod_minus_5_over_8);
        let i = two_a * v.square();
        (a * v * (i - Self::ONE)).normalize()
    }

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    ///
    /// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((p + 1) / 4) (mod p)`.
    fn sqrt_shanks(&self) -> Self {
        debug_assert_eq!(MOD::PARAMS.mod8() & 3, 3);

        let mod_plus_1_over_4 = const {
            MOD::PARAMS
                .modulus()
                .wrapping_add(&Uint::ONE)
                .shr_vartime(2)
        };

        self.pow(&mod_plus_1_over_4)
    }

    /// Tonelli-Shanks algorithm works for every odd prime, given a quadratic non-residue.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> Self {
        let s = const { MOD::PARAMS.two_adicity() };
        let t = const { MOD::PARAMS.odd_part() };
        let t_minus_1_over_2 = const { MOD::PARAMS.odd_part().shr_vartime(1) };

        let w = self.pow(&t_minus_1_over_2);

        let mut v = s;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = Self::from_u64(MOD::PARAMS.non_residue()).pow(&t);

        for max_v in (1..=s).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        x.normalize()
    }
}

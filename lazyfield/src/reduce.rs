//! Reduction of double-width products, one algorithm per [`ModulusShape`].
//!
//! Every algorithm accepts any product of two elements whose excesses multiply to at most the
//! field's capacity, and returns a value below `2p` (for the Montgomery shapes, the result is
//! additionally scaled by `R^-1`).

use crate::{FieldParams, ModulusParams, ModulusShape, wide::Wide};
use bigint::{Limb, Uint, Word};
use subtle::{ConditionallySelectable, ConstantTimeLess};

/// Reduce `d` using the algorithm selected by the shape of `MOD`'s modulus.
#[inline]
pub(crate) fn reduce<MOD, const LIMBS: usize>(d: &Wide<LIMBS>) -> Uint<LIMBS>
where
    MOD: FieldParams<LIMBS>,
{
    match const { MOD::PARAMS.shape() } {
        ModulusShape::PseudoMersenne => pseudo_mersenne(&MOD::PARAMS, d),
        ModulusShape::GeneralizedMersenne => generalized_mersenne(&MOD::PARAMS, d),
        ModulusShape::MontgomeryFriendly => montgomery_friendly(&MOD::PARAMS, d),
        ModulusShape::General => montgomery(&MOD::PARAMS, d),
    }
}

/// Conditionally subtracts `p << j` from `a` for `j = rounds - 1, ..., 0`.
///
/// Any `a <= 2^rounds * p` comes out in `[0, p)`, provided `p << (rounds - 1)` fits in `LIMBS`
/// words.
pub(crate) fn reduce_below<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    p: &Uint<LIMBS>,
    rounds: u32,
) -> Uint<LIMBS> {
    let mut a = *a;
    for j in (0..rounds).rev() {
        let shifted = p.shl_vartime(j);
        let diff = a.wrapping_sub(&shifted);
        a = Uint::conditional_select(&diff, &a, a.ct_lt(&shifted));
    }
    a
}

/// `r += a * k`, where `a` may be shorter than `r`. The carry ripples through all of `r`.
///
/// Returns the carry out of the top word.
#[inline]
fn mac_assign(r: &mut [Word], a: &[Word], k: Word) -> Limb {
    let k = Limb(k);
    let mut carry = Limb::ZERO;
    for (i, ri) in r.iter_mut().enumerate() {
        let ai = Limb(a.get(i).copied().unwrap_or(0));
        let (sum, next) = ai.carrying_mul_add(k, Limb(*ri), carry);
        *ri = sum.0;
        carry = next;
    }
    carry
}

/// `p = 2^n - c`: fold the part above bit `n` back in twice, using `2^n ≡ c (mod p)`.
fn pseudo_mersenne<const LIMBS: usize>(
    params: &ModulusParams<LIMBS>,
    d: &Wide<LIMBS>,
) -> Uint<LIMBS> {
    let n = params.bits();
    let c = params.constant();

    let (t, b) = d.split(n);
    let mut s = Wide::mul_word(&t, c);
    s.add_assign(&b);

    let (h, low) = s.split(n);
    let mut r = Wide::mul_word(&h, c);
    r.add_assign(&low);
    debug_assert!(r.hi().is_zero_vartime());
    r.lo()
}

/// `p = 2^n - 2^h - 1` with `h = n / 2`: fold using `2^n ≡ 2^h + 1 (mod p)`.
///
/// The first fold of the top part `t` produces `t * 2^h`, which is itself folded once more
/// before the final carry above bit `n` is absorbed.
fn generalized_mersenne<const LIMBS: usize>(
    params: &ModulusParams<LIMBS>,
    d: &Wide<LIMBS>,
) -> Uint<LIMBS> {
    let n = params.bits();
    let h = n / 2;

    let (t, b) = d.split(n);
    let mut r = Wide::from_lo(&t);
    r.add_assign(&b);

    let (t2, b2) = Wide::from_lo(&t).shl(h).split(n);
    r.add_assign(&t2);
    r.add_assign(&b2);
    let refold = Wide::from_lo(&t2).shl(h);
    debug_assert!(refold.hi().is_zero_vartime());
    r.add_assign(&refold.lo());

    let (carry, lo) = r.split(n);
    let mut fold = Wide::from_lo(&carry).shl(h);
    fold.add_assign(&carry);
    debug_assert!(fold.hi().is_zero_vartime());

    let (lo, overflow) = lo.carrying_add(&fold.lo(), Limb::ZERO);
    debug_assert_eq!(overflow, Limb::ZERO);
    lo
}

/// `p ≡ -1 (mod 2^w)`: Montgomery reduction where each quotient word is simply the word being
/// cancelled, and `q * p` is added as `q * (p + 1)` after clearing the word.
fn montgomery_friendly<const LIMBS: usize>(
    params: &ModulusParams<LIMBS>,
    d: &Wide<LIMBS>,
) -> Uint<LIMBS> {
    let (plus_one, k) = params.plus_one();
    let mut d = *d;
    let words = d.as_words_mut();

    for i in 0..LIMBS {
        let q = words[i];
        words[i] = 0;

        let carry = mac_assign(&mut words[(i + k)..], &plus_one[k..], q);
        debug_assert_eq!(carry, Limb::ZERO);
    }

    d.hi()
}

/// General Montgomery reduction (REDC) using `m' = -p^-1 mod 2^w`.
fn montgomery<const LIMBS: usize>(
    params: &ModulusParams<LIMBS>,
    d: &Wide<LIMBS>,
) -> Uint<LIMBS> {
    let p = params.modulus();
    let m = params.constant();
    let mut d = *d;
    let words = d.as_words_mut();

    for i in 0..LIMBS {
        let q = words[i].wrapping_mul(m);
        let carry = mac_assign(&mut words[i..], p.as_words(), q);
        debug_assert_eq!(carry, Limb::ZERO);
        debug_assert_eq!(words[i], 0);
    }

    d.hi()
}

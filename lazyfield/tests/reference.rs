//! Property-based tests checking every modulus shape against `num-bigint`.

use lazyfield::{FieldElement, FieldParams};
use num_bigint::BigUint;
use num_traits::{One, Zero};

fn modulus<MOD: FieldParams<LIMBS>, const LIMBS: usize>(_: &FieldElement<MOD, LIMBS>) -> BigUint {
    BigUint::parse_bytes(MOD::MODULUS_HEX.as_bytes(), 16).unwrap()
}

fn to_biguint<MOD: FieldParams<LIMBS>, const LIMBS: usize>(
    fe: &FieldElement<MOD, LIMBS>,
) -> BigUint {
    BigUint::parse_bytes(format!("{fe:x}").as_bytes(), 16).unwrap()
}

fn from_biguint<MOD: FieldParams<LIMBS>, const LIMBS: usize>(
    x: &BigUint,
) -> FieldElement<MOD, LIMBS> {
    let x = x % modulus(&FieldElement::<MOD, LIMBS>::ZERO);
    FieldElement::from_hex(&x.to_str_radix(16)).unwrap()
}

macro_rules! reference_tests {
    ($name:ident, $fe:ty) => {
        mod $name {
            use super::*;
            use proptest::prelude::*;

            type Fe = $fe;

            fn m() -> BigUint {
                modulus(&Fe::ZERO)
            }

            fn big(fe: &Fe) -> BigUint {
                to_biguint(fe)
            }

            fn fe(x: &BigUint) -> Fe {
                from_biguint(x)
            }

            prop_compose! {
                fn field_element()(bytes in proptest::collection::vec(any::<u8>(), 64)) -> (Fe, BigUint) {
                    let x = BigUint::from_bytes_be(&bytes) % m();
                    (fe(&x), x)
                }
            }

            prop_compose! {
                /// Element assembled as `x + y - z` without reduction, so its excess is above one.
                fn lazy_element()(
                    (x, x_bi) in field_element(),
                    (y, y_bi) in field_element(),
                    (z, z_bi) in field_element()
                ) -> (Fe, BigUint) {
                    let m = m();
                    let lazy = x + y - z;
                    (lazy, (x_bi + y_bi + &m - z_bi) % m)
                }
            }

            #[test]
            fn conversions() {
                let m = m();
                let minus_one = &m - BigUint::one();
                assert_eq!(big(&fe(&minus_one)), minus_one);
                assert_eq!(-Fe::ONE, fe(&minus_one));
                assert_eq!(big(&Fe::ZERO), BigUint::zero());
                assert_eq!(big(&Fe::ONE), BigUint::one());
            }

            proptest! {
                #[test]
                fn fuzzy_add((a, a_bi) in lazy_element(), (b, b_bi) in lazy_element()) {
                    let res = a + b;
                    prop_assert_eq!(big(&res), (a_bi + b_bi) % m());
                    prop_assert!(res.excess().get() <= a.excess().get() + b.excess().get());
                }

                #[test]
                fn fuzzy_sub((a, a_bi) in lazy_element(), (b, b_bi) in lazy_element()) {
                    let m = m();
                    prop_assert_eq!(big(&(a - b)), (a_bi + &m - b_bi) % m);
                }

                #[test]
                fn fuzzy_negate((a, a_bi) in lazy_element()) {
                    let m = m();
                    prop_assert_eq!(big(&-a), (&m - a_bi) % m);
                }

                #[test]
                fn fuzzy_mul((a, a_bi) in lazy_element(), (b, b_bi) in lazy_element()) {
                    prop_assert_eq!(big(&(a * b)), (a_bi * b_bi) % m());
                }

                #[test]
                fn fuzzy_square((a, a_bi) in lazy_element()) {
                    let res = a.square();
                    prop_assert_eq!(big(&res), (&a_bi * &a_bi) % m());
                    prop_assert_eq!(res.excess().get(), 2);
                }

                #[test]
                fn fuzzy_pow((a, a_bi) in field_element(), e in any::<u64>()) {
                    let exp = BigUint::from(e);
                    let res = a.pow(&lazyfield::bigint::Uint::from_u64(e));
                    prop_assert_eq!(big(&res), a_bi.modpow(&exp, &m()));
                    prop_assert_eq!(res.excess().get(), 1);
                }

                #[test]
                fn fuzzy_invert((a, a_bi) in lazy_element()) {
                    let inv = big(&a.invert());
                    if a_bi.is_zero() {
                        prop_assert!(inv.is_zero());
                    } else {
                        prop_assert_eq!((inv * a_bi) % m(), BigUint::one());
                    }
                }

                #[test]
                fn fuzzy_sqrt((a, a_bi) in field_element()) {
                    let m = m();
                    let square = a.square();
                    let root = big(&square.sqrt());
                    prop_assert!(root == a_bi || root == (&m - &a_bi) % &m);
                    prop_assert_eq!(
                        bool::from(square.is_quadratic_residue()),
                        !a_bi.is_zero()
                    );
                }

                #[test]
                fn fuzzy_half((a, a_bi) in lazy_element()) {
                    let m = m();
                    let expected = if a_bi.bit(0) { (a_bi + &m) >> 1 } else { a_bi >> 1 };
                    prop_assert_eq!(big(&a.half()), expected);
                }

                #[test]
                fn fuzzy_mul_small((a, a_bi) in lazy_element(), k in any::<i32>()) {
                    let m = m();
                    let product = (a_bi * BigUint::from(k.unsigned_abs())) % &m;
                    let expected = if k < 0 { (&m - product) % &m } else { product };
                    prop_assert_eq!(big(&a.mul_small(k)), expected);
                }

                #[test]
                fn capacity_chain(
                    (a, a_bi) in field_element(),
                    (b, b_bi) in lazy_element(),
                    ops in proptest::collection::vec(0u8..5, 1..200)
                ) {
                    let m = m();
                    let (mut acc, mut acc_bi) = (a, a_bi);
                    for op in ops {
                        match op {
                            0 => {
                                acc += b;
                                acc_bi = (acc_bi + &b_bi) % &m;
                            }
                            1 => {
                                acc = -acc;
                                acc_bi = (&m - acc_bi) % &m;
                            }
                            2 => {
                                acc -= b;
                                acc_bi = (acc_bi + &m - &b_bi) % &m;
                            }
                            3 => {
                                acc = acc.double();
                                acc_bi = (&acc_bi << 1) % &m;
                            }
                            _ => {
                                acc *= b;
                                acc_bi = (acc_bi * &b_bi) % &m;
                            }
                        }
                        prop_assert!(acc.excess().get() <= Fe::CAPACITY);
                        prop_assert_eq!(big(&acc), acc_bi.clone());
                    }
                }
            }
        }
    };
}

#[cfg(feature = "mersenne127")]
reference_tests!(mersenne127, lazyfield::moduli::Fp127);

#[cfg(feature = "curve25519")]
reference_tests!(curve25519, lazyfield::moduli::Fp25519);

#[cfg(feature = "goldilocks")]
reference_tests!(goldilocks, lazyfield::moduli::Fp448);

#[cfg(feature = "mf233")]
reference_tests!(mf233, lazyfield::moduli::Fp233);

#[cfg(feature = "bls12-381")]
reference_tests!(bls12_381, lazyfield::moduli::Fp381);

#[cfg(feature = "p224")]
reference_tests!(p224, lazyfield::moduli::Fp224);

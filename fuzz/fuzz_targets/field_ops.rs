#![no_main]
use lazyfield::bigint::{U192, U256, U320, U384, U512};
use lazyfield::moduli::{Bls12381, Curve25519, Goldilocks, Mersenne127, Mf233, P224};
use lazyfield::{FieldElement, FieldParams};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

/// Replay the input as a sequence of operations on an accumulator, checking every step
/// against `num-bigint`. Each step consumes one opcode byte and, for binary operations,
/// eight operand bytes.
fn run_ops<MOD: FieldParams<LIMBS>, const LIMBS: usize>(data: &[u8]) {
    let m = BigUint::parse_bytes(MOD::MODULUS_HEX.as_bytes(), 16).unwrap();
    let big = |fe: &FieldElement<MOD, LIMBS>| {
        BigUint::parse_bytes(format!("{fe:x}").as_bytes(), 16).unwrap()
    };

    let mut acc = FieldElement::<MOD, LIMBS>::ONE;
    let mut acc_bi = BigUint::from(1u8);
    let mut data = data;

    while let Some((&op, rest)) = data.split_first() {
        let (operand, rest) = rest.split_at(rest.len().min(8));
        data = rest;

        let mut word = [0u8; 8];
        word[..operand.len()].copy_from_slice(operand);
        let n = u64::from_le_bytes(word);
        let x = FieldElement::<MOD, LIMBS>::from_u64(n);

        match op % 9 {
            0 => {
                acc += x;
                acc_bi = (acc_bi + n) % &m;
            }
            1 => {
                acc -= x;
                acc_bi = (acc_bi + &m - BigUint::from(n) % &m) % &m;
            }
            2 => {
                acc = -acc;
                acc_bi = (&m - acc_bi) % &m;
            }
            3 => {
                acc *= x;
                acc_bi = (acc_bi * n) % &m;
            }
            4 => {
                acc = acc.square();
                acc_bi = (&acc_bi * &acc_bi) % &m;
            }
            5 => {
                let k = n as i32;
                acc = acc.mul_small(k);
                let product = (acc_bi * k.unsigned_abs()) % &m;
                acc_bi = if k < 0 { (&m - product) % &m } else { product };
            }
            6 => {
                acc = acc.half();
                acc_bi = if acc_bi.bit(0) { (acc_bi + &m) >> 1 } else { acc_bi >> 1 };
            }
            7 => {
                let inv = acc.invert();
                if acc_bi.bits() != 0 {
                    assert_eq!((big(&inv) * &acc_bi) % &m, BigUint::from(1u8));
                }
                acc = inv;
                acc_bi = big(&inv);
            }
            _ => {
                let square = acc.square();
                let root = big(&square.sqrt());
                assert!(root == acc_bi || root == (&m - &acc_bi) % &m);
            }
        }

        assert_eq!(big(&acc), acc_bi);
        assert!(acc.excess().get() <= MOD::PARAMS.capacity());
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    match selector % 6 {
        0 => run_ops::<Mersenne127, { U192::LIMBS }>(data),
        1 => run_ops::<Curve25519, { U320::LIMBS }>(data),
        2 => run_ops::<Goldilocks, { U512::LIMBS }>(data),
        3 => run_ops::<Mf233, { U256::LIMBS }>(data),
        4 => run_ops::<Bls12381, { U384::LIMBS }>(data),
        _ => run_ops::<P224, { U256::LIMBS }>(data),
    }
});

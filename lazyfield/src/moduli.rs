//! Predefined moduli, one or more for each [`ModulusShape`][crate::ModulusShape].
//!
//! Every modulus is gated behind a cargo feature of the same (snake case) name, all of which
//! are enabled by default.

#[cfg(feature = "bls12-381")]
use bigint::U384;
#[cfg(any(feature = "mf233", feature = "p224"))]
use bigint::U256;
#[cfg(feature = "curve25519")]
use bigint::U320;
#[cfg(feature = "goldilocks")]
use bigint::U512;
#[cfg(feature = "mersenne127")]
use bigint::U192;

#[cfg(feature = "mersenne127")]
crate::field_params!(
    name: Mersenne127,
    modulus: "00000000000000007fffffffffffffffffffffffffffffff",
    uint: U192,
    shape: PseudoMersenne,
    doc: "Mersenne prime `2^127 - 1`"
);

/// Element of GF(2^127 - 1).
#[cfg(feature = "mersenne127")]
pub type Fp127 = crate::FieldElement<Mersenne127, { U192::LIMBS }>;

#[cfg(feature = "curve25519")]
crate::field_params!(
    name: Curve25519,
    modulus: "00000000000000007fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    uint: U320,
    shape: PseudoMersenne,
    doc: "Curve25519 base field modulus `2^255 - 19`"
);

/// Element of GF(2^255 - 19).
#[cfg(feature = "curve25519")]
pub type Fp25519 = crate::FieldElement<Curve25519, { U320::LIMBS }>;

#[cfg(feature = "goldilocks")]
crate::field_params!(
    name: Goldilocks,
    modulus: "0000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    uint: U512,
    shape: GeneralizedMersenne,
    doc: "Goldilocks prime `2^448 - 2^224 - 1`"
);

/// Element of GF(2^448 - 2^224 - 1).
#[cfg(feature = "goldilocks")]
pub type Fp448 = crate::FieldElement<Goldilocks, { U512::LIMBS }>;

#[cfg(feature = "mf233")]
crate::field_params!(
    name: Mf233,
    modulus: "0000010000000016ffffffffffffffffffffffffffffffffffffffffffffffff",
    uint: U256,
    shape: MontgomeryFriendly,
    doc: "Montgomery-friendly prime `0x10000000017 * 2^192 - 1`"
);

/// Element of GF(0x10000000017 * 2^192 - 1).
#[cfg(feature = "mf233")]
pub type Fp233 = crate::FieldElement<Mf233, { U256::LIMBS }>;

#[cfg(feature = "bls12-381")]
crate::field_params!(
    name: Bls12381,
    modulus: "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
    uint: U384,
    shape: General,
    doc: "BLS12-381 base field modulus"
);

/// Element of the BLS12-381 base field.
#[cfg(feature = "bls12-381")]
pub type Fp381 = crate::FieldElement<Bls12381, { U384::LIMBS }>;

#[cfg(feature = "p224")]
crate::field_params!(
    name: P224,
    modulus: "00000000ffffffffffffffffffffffffffffffff000000000000000000000001",
    uint: U256,
    shape: General,
    non_residue: 11,
    doc: "NIST P-224 base field modulus `2^224 - 2^96 + 1`"
);

/// Element of the NIST P-224 base field.
#[cfg(feature = "p224")]
pub type Fp224 = crate::FieldElement<P224, { U256::LIMBS }>;

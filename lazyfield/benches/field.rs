//! Field element benchmarks, one group per predefined modulus.

use criterion::{criterion_group, criterion_main};

mod mersenne127 {
    use lazyfield::moduli::Fp127;

    lazyfield::bench_field!(
        bench_field_element,
        "2^127 - 1",
        Fp127::from_hex("1ccbe91c075fc7f4f033bfa248db8fcc").unwrap(),
        Fp127::from_hex("3565de94bbfb12f3c59ff46c271bf83").unwrap()
    );
}

mod curve25519 {
    use lazyfield::moduli::Fp25519;

    lazyfield::bench_field!(
        bench_field_element,
        "2^255 - 19",
        Fp25519::from_hex("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83").unwrap(),
        Fp25519::from_hex("4e4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9").unwrap()
    );
}

mod goldilocks {
    use lazyfield::moduli::Fp448;

    lazyfield::bench_field!(
        bench_field_element,
        "Goldilocks",
        Fp448::from_hex("32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a4740").unwrap(),
        Fp448::from_hex("9c59bdcee36b692153d0a9877cc62a474002df32e52139f0a032c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a458").unwrap()
    );
}

mod mf233 {
    use lazyfield::moduli::Fp233;

    lazyfield::bench_field!(
        bench_field_element,
        "Montgomery-friendly 233-bit",
        Fp233::from_hex("2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7").unwrap(),
        Fp233::from_hex("2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0").unwrap()
    );
}

mod bls12_381 {
    use lazyfield::moduli::Fp381;

    lazyfield::bench_field!(
        bench_field_element,
        "BLS12-381",
        Fp381::from_hex("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb").unwrap(),
        Fp381::from_hex("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1").unwrap()
    );
}

mod p224 {
    use lazyfield::moduli::Fp224;

    lazyfield::bench_field!(
        bench_field_element,
        "NIST P-224",
        Fp224::from_hex("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21").unwrap(),
        Fp224::from_hex("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34").unwrap()
    );
}

criterion_group!(
    benches,
    mersenne127::bench_field_element,
    curve25519::bench_field_element,
    goldilocks::bench_field_element,
    mf233::bench_field_element,
    bls12_381::bench_field_element,
    p224::bench_field_element
);
criterion_main!(benches);

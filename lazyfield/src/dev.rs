/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_normalize<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a + $fe_b);
            group.bench_function("normalize", |b| b.iter(|| x.normalize()));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<'a, M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'a, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<'a, M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'a, M>,
        ) {
            let x = core::hint::black_box($fe_a.square());
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        pub fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_normalize(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a field element type.
#[macro_export]
macro_rules! test_field {
    ($fe:tt) => {
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
        $crate::test_field_lazy_reduction!($fe);
        $crate::test_field_constant_time!($fe);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
        }

        #[test]
        fn canonical_round_trip() {
            let x = $fe::from_u64(0x0123_4567_89ab_cdef);
            assert_eq!($fe::from_canonical(&x.to_canonical()).unwrap(), x);
            assert_eq!(x.to_canonical(), $fe::from_uint(&x.to_canonical()).to_canonical());
        }

        #[test]
        fn additive_inverse() {
            let x = $fe::from_u64(u64::MAX);
            assert!(bool::from((x + -x).is_zero()));
            assert_eq!(x - x, $fe::ZERO);
        }

        #[test]
        fn distributivity() {
            let a = $fe::from_u64(0xfedc_ba98_7654_3210);
            let b = $fe::from_u64(0x0f0f_0f0f_0f0f_0f0f);
            let c = -$fe::from_u64(42);
            assert_eq!(a * (b + c), a * b + a * c);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert(), one);

            let three = one + &one + &one;
            let inv_three = three.invert();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);

            assert_eq!($fe::ZERO.invert(), $fe::ZERO);
        }
    };
}

/// Implement field element square root and quadratic residuosity tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = fe.checked_sqrt().unwrap();
                assert_eq!(sqrt.square(), fe);
                assert!(bool::from(fe.is_quadratic_residue()));
            }
        }

        #[test]
        fn residuosity_is_invariant_under_squares() {
            let square = $fe::from_u64(7).square();
            for n in 2u64..20 {
                let fe = $fe::from_u64(n);
                assert_eq!(
                    bool::from(fe.is_quadratic_residue()),
                    bool::from((fe * square).is_quadratic_residue())
                );
                assert_eq!(
                    bool::from(fe.is_quadratic_residue()),
                    bool::from(fe.checked_sqrt().is_some())
                );
            }
        }
    };
}

/// Implement tests for excess tracking and lazy reduction.
#[macro_export]
macro_rules! test_field_lazy_reduction {
    ($fe:tt) => {
        #[test]
        fn long_addition_chain() {
            let x = -$fe::from_u64(3);
            let mut acc = $fe::ZERO;
            for i in 1..=1000u64 {
                acc += x;
                assert_eq!(acc, -$fe::from_u64(3 * i));
            }
        }

        #[test]
        fn alternating_negation_chain() {
            let mut acc = $fe::from_u64(5);
            for _ in 0..100 {
                acc = -(acc + acc);
                acc = acc - $fe::ONE;
            }
            let mut expected = $fe::from_u64(5);
            for _ in 0..100 {
                expected = (-(expected + expected)).normalize();
                expected = (expected - $fe::ONE).normalize();
            }
            assert_eq!(acc, expected);
        }

        #[test]
        fn half() {
            for &n in &[0u64, 1, 2, 3, 1_000_001] {
                let fe = $fe::from_u64(n);
                assert_eq!(fe.half().double(), fe);
                assert_eq!((fe + fe + $fe::ONE).half().double(), fe + fe + $fe::ONE);
            }
        }

        #[test]
        fn mul_small() {
            let x = $fe::from_u64(0xdead_beef);
            for k in [0i32, 1, 2, 3, 100, -1, -7, i32::MAX, i32::MIN] {
                let expected = if k < 0 {
                    -(x * $fe::from_u64(k.unsigned_abs() as u64))
                } else {
                    x * $fe::from_u64(k as u64)
                };
                assert_eq!(x.mul_small(k), expected);
            }
        }

        #[test]
        fn excess_stays_within_capacity() {
            let mut acc = $fe::ONE;
            for _ in 0..200 {
                let neg = acc.neg();
                assert!(neg.excess().get() <= $fe::CAPACITY);

                acc = acc + neg + acc + acc;
                let excess = acc.excess().get();
                assert!(
                    (1..=$fe::CAPACITY).contains(&excess),
                    "excess {excess} outside 1..={}",
                    $fe::CAPACITY
                );
            }
            assert_eq!(acc, $fe::from_u64(2).pow_vartime(&$crate::bigint::U64::from_u64(200)));
        }
    };
}

/// Implement tests for constant-time selection and swapping.
#[macro_export]
macro_rules! test_field_constant_time {
    ($fe:tt) => {
        #[test]
        fn conditional_swap() {
            use $crate::subtle::{Choice, ConditionallySelectable};

            let a = $fe::from_u64(1);
            let b = $fe::from_u64(2) + $fe::ZERO;

            let (mut x, mut y) = (a, b);
            $fe::conditional_swap(&mut x, &mut y, Choice::from(0));
            assert_eq!((x, y), (a, b));
            assert_eq!(x.excess(), a.excess());

            $fe::conditional_swap(&mut x, &mut y, Choice::from(1));
            assert_eq!((x, y), (b, a));
            assert_eq!(x.excess(), b.excess());
            assert_eq!(y.excess(), a.excess());
        }
    };
}

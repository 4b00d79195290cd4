//! Macros for defining field parameters.

/// Creates a ZST carrying the parameters of a given field modulus.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - hex serialization of the modulus, padded to the full width of the integer type
/// - `crypto-bigint` unsigned integer type (e.g. U256), which must leave at least two spare bits
/// - [`ModulusShape`][crate::ModulusShape] variant selecting the reduction algorithm
/// - optionally, a small quadratic non-residue (required when `p ≡ 1 (mod 8)`)
/// - documentation string for the field modulus type
///
/// Invalid parameters are rejected at compile time.
///
/// ```
/// use lazyfield::{FieldElement, bigint::U192};
///
/// lazyfield::field_params!(
///     name: Mersenne127,
///     modulus: "00000000000000007fffffffffffffffffffffffffffffff",
///     uint: U192,
///     shape: PseudoMersenne,
///     doc: "2^127 - 1"
/// );
///
/// type Fe = FieldElement<Mersenne127, { U192::LIMBS }>;
/// assert_eq!(Fe::from_u64(5) * Fe::from_u64(3), Fe::from_u64(15));
/// ```
#[macro_export]
macro_rules! field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        uint: $uint:ty,
        shape: $shape:ident,
        non_residue: $non_residue:expr,
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl $crate::FieldParams<{ <$uint>::LIMBS }> for $name {
            const MODULUS_HEX: &'static str = $modulus_hex;
            const PARAMS: $crate::ModulusParams<{ <$uint>::LIMBS }> =
                $crate::ModulusParams::with_non_residue(
                    &<$uint>::from_be_hex($modulus_hex),
                    $crate::ModulusShape::$shape,
                    $non_residue,
                );
        }
    };
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        uint: $uint:ty,
        shape: $shape:ident,
        doc: $doc:expr
    ) => {
        $crate::field_params! {
            name: $name,
            modulus: $modulus_hex,
            uint: $uint,
            shape: $shape,
            non_residue: 0,
            doc: $doc
        }
    };
}

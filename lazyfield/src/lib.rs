#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod dev;
mod element;
mod error;
mod excess;
mod macros;
mod params;
mod reduce;
mod wide;

pub mod moduli;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
    excess::Excess,
    params::{FieldParams, ModulusParams, ModulusShape},
};
pub use bigint;
pub use bigint::Word;
pub use subtle;
pub use zeroize;

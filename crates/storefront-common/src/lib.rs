//! Shared vocabulary for the Storefront migration tooling: the crate-wide
//! error type and the closed code enumerations the platform seeds into its
//! reference tables.

pub mod codes;
pub mod error;

pub use codes::{CountryCode, CurrencyCode, LocaleCode};
pub use error::{Error, Result};

//! Closed code enumerations shared across the platform. Each set is compiled
//! in with a fixed declaration order; there is no runtime registration and no
//! mutation path. The string forms are exactly what the reference tables
//! store.

pub mod country;
pub mod currency;
pub mod locale;

pub use country::CountryCode;
pub use currency::CurrencyCode;
pub use locale::LocaleCode;

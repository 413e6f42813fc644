//! Schema migration engine for the Storefront platform database.
//!
//! Migrations are compiled in as an ordered list of [`Version`] records, each
//! composed of [`SchemaFragment`]s that run inside a single transaction per
//! version. Applied ordinals are tracked in `public.schema_migrations`; the
//! [`Runner`] drives versions forward and backward under an advisory lock.

pub mod executor;
pub mod fragment;
pub mod ledger;
pub mod runner;
pub mod seed;
pub mod version;
pub mod versions;

pub use fragment::SchemaFragment;
pub use ledger::{AppliedVersion, Ledger};
pub use runner::{Runner, VersionStatus};
pub use seed::CodeDomain;
pub use version::Version;

//! Version 1: the initial checkout schema.
//!
//! Creates the `platform` and `fn` namespaces, the reference and checkout
//! tables, the `updated_at` maintenance triggers, and seeds the locale and
//! currency code sets. Down drops both namespaces wholesale.

use postgres::Transaction;
use storefront_common::Result;

use crate::executor;
use crate::fragment::SchemaFragment;
use crate::seed::{self, CodeDomain};

const PLATFORM: &str = "platform";
const FUNCTIONS: &str = "fn";

/// Forward fragments in execution order. Later fragments reference tables
/// created by earlier ones.
pub const FRAGMENTS: &[SchemaFragment] = &[
    SchemaFragment::new("platform", PLATFORM, include_str!("sql/v0001/platform.sql")),
    SchemaFragment::new(
        "checkouts",
        PLATFORM,
        include_str!("sql/v0001/checkouts.sql"),
    ),
    SchemaFragment::new(
        "checkout_line_items",
        PLATFORM,
        include_str!("sql/v0001/checkout_line_items.sql"),
    ),
    SchemaFragment::new("triggers", PLATFORM, include_str!("sql/v0001/triggers.sql")),
];

/// Dropping the namespaces takes every table, trigger, and function with
/// them, so the rollback is a single fragment.
pub const ROLLBACK: &[SchemaFragment] = &[SchemaFragment::new(
    "rollback",
    "public",
    include_str!("sql/v0001/rollback.sql"),
)];

pub fn up(tx: &mut Transaction<'_>) -> Result<()> {
    executor::ensure_schema(tx, PLATFORM)?;
    executor::ensure_schema(tx, FUNCTIONS)?;
    executor::apply(tx, FRAGMENTS)?;
    seed::seed_codes(tx, PLATFORM, CodeDomain::Locale)?;
    seed::seed_codes(tx, PLATFORM, CodeDomain::Currency)?;
    Ok(())
}

pub fn down(tx: &mut Transaction<'_>) -> Result<()> {
    executor::apply(tx, ROLLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_run_reference_tables_first() {
        let names: Vec<&str> = FRAGMENTS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["platform", "checkouts", "checkout_line_items", "triggers"]
        );
    }

    #[test]
    fn forward_fragments_target_the_platform_schema() {
        assert!(FRAGMENTS.iter().all(|f| f.schema == PLATFORM));
    }

    #[test]
    fn embedded_bodies_are_present() {
        assert!(FRAGMENTS[0].sql.contains("locale_codes"));
        assert!(FRAGMENTS[0].sql.contains("currency_codes"));
        assert!(FRAGMENTS[3].sql.contains("fn.set_updated_at"));
        assert!(
            ROLLBACK[0]
                .sql
                .contains("DROP SCHEMA IF EXISTS platform CASCADE")
        );
    }
}

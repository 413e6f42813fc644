//! Version 2: parent links on checkout line items.
//!
//! A line item can belong to another line item in the same checkout, which
//! is how bundles attach their components. Deleting a parent cascades to
//! its children.

use postgres::Transaction;
use storefront_common::Result;

use crate::executor;
use crate::fragment::SchemaFragment;

const PLATFORM: &str = "platform";

pub const UP: &[SchemaFragment] = &[
    SchemaFragment::new(
        "add_parent_column",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD COLUMN parent_line_item_id uuid NULL",
    ),
    SchemaFragment::new(
        "parent_fk",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD CONSTRAINT fk_cli_parent
            FOREIGN KEY (parent_line_item_id)
            REFERENCES checkout_line_items (id)
            ON DELETE CASCADE",
    ),
    SchemaFragment::new(
        "parent_idx",
        PLATFORM,
        "CREATE INDEX IF NOT EXISTS idx_cli_parent
            ON checkout_line_items (checkout_id, parent_line_item_id)",
    ),
];

/// The index and the constraint depend on the column, so they go first.
pub const DOWN: &[SchemaFragment] = &[
    SchemaFragment::new("drop_parent_idx", PLATFORM, "DROP INDEX IF EXISTS idx_cli_parent"),
    SchemaFragment::new(
        "drop_parent_fk",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP CONSTRAINT IF EXISTS fk_cli_parent",
    ),
    SchemaFragment::new(
        "drop_parent_column",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP COLUMN IF EXISTS parent_line_item_id",
    ),
];

pub fn up(tx: &mut Transaction<'_>) -> Result<()> {
    executor::apply(tx, UP)
}

pub fn down(tx: &mut Transaction<'_>) -> Result<()> {
    executor::apply(tx, DOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lands_before_its_dependents() {
        let names: Vec<&str> = UP.iter().map(|f| f.name).collect();
        assert_eq!(names, ["add_parent_column", "parent_fk", "parent_idx"]);
    }

    #[test]
    fn down_drops_dependents_before_the_column() {
        let names: Vec<&str> = DOWN.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["drop_parent_idx", "drop_parent_fk", "drop_parent_column"]
        );
    }

    #[test]
    fn cascade_is_declared_on_the_parent_link() {
        assert!(UP[1].sql.contains("ON DELETE CASCADE"));
    }
}

//! Version 4: price configuration on checkout line items.
//!
//! Adds the columns that describe how a line item's effective unit price is
//! derived from its original price, backfills `unit_original_price` for
//! rows that predate the column, and documents the derivation rules on the
//! column itself.

use postgres::Transaction;
use storefront_common::Result;

use crate::executor;
use crate::fragment::SchemaFragment;

const PLATFORM: &str = "platform";

pub const UP: &[SchemaFragment] = &[
    SchemaFragment::new(
        "price_type",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD COLUMN price_type VARCHAR(20)
            CHECK (price_type IN ('FREE', 'BASE', 'DISCOUNT_AMOUNT', 'DISCOUNT_PERCENT', 'MARKUP_AMOUNT', 'MARKUP_PERCENT', 'OVERRIDE'))",
    ),
    SchemaFragment::new(
        "price_amount",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD COLUMN price_amount BIGINT
            CHECK (price_amount IS NULL OR price_amount >= 0)",
    ),
    SchemaFragment::new(
        "price_percent",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD COLUMN price_percent NUMERIC(5, 2)
            CHECK (price_percent IS NULL OR price_percent >= 0)",
    ),
    SchemaFragment::new(
        "unit_original_price",
        PLATFORM,
        "ALTER TABLE checkout_line_items
            ADD COLUMN unit_original_price BIGINT
            CHECK (unit_original_price IS NULL OR unit_original_price >= 0)",
    ),
    // Only rows without an original price are touched, so reruns and
    // already-populated rows keep their values.
    SchemaFragment::new(
        "backfill_original_price",
        PLATFORM,
        "UPDATE checkout_line_items
            SET unit_original_price = unit_price
            WHERE unit_original_price IS NULL AND unit_price IS NOT NULL",
    ),
    SchemaFragment::new(
        "price_type_comment",
        PLATFORM,
        "COMMENT ON COLUMN checkout_line_items.price_type IS 'Price calculation: FREE = 0, BASE = unit_original_price, DISCOUNT_AMOUNT = unit_original_price - price_amount, DISCOUNT_PERCENT = unit_original_price * (100 - price_percent) / 100, MARKUP_AMOUNT = unit_original_price + price_amount, MARKUP_PERCENT = unit_original_price * (100 + price_percent) / 100, OVERRIDE = price_amount'",
    ),
];

pub const DOWN: &[SchemaFragment] = &[
    SchemaFragment::new(
        "drop_unit_original_price",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP COLUMN IF EXISTS unit_original_price",
    ),
    SchemaFragment::new(
        "drop_price_percent",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP COLUMN IF EXISTS price_percent",
    ),
    SchemaFragment::new(
        "drop_price_amount",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP COLUMN IF EXISTS price_amount",
    ),
    SchemaFragment::new(
        "drop_price_type",
        PLATFORM,
        "ALTER TABLE checkout_line_items DROP COLUMN IF EXISTS price_type",
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

    const PRICE_TYPES: [&str; 7] = [
        "'FREE'",
        "'BASE'",
        "'DISCOUNT_AMOUNT'",
        "'DISCOUNT_PERCENT'",
        "'MARKUP_AMOUNT'",
        "'MARKUP_PERCENT'",
        "'OVERRIDE'",
    ];

    #[test]
    fn price_type_check_lists_every_calculation() {
        for token in PRICE_TYPES {
            assert!(UP[0].sql.contains(token), "missing {token}");
        }
    }

    #[test]
    fn backfill_runs_after_the_column_exists() {
        let names: Vec<&str> = UP.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "price_type",
                "price_amount",
                "price_percent",
                "unit_original_price",
                "backfill_original_price",
                "price_type_comment",
            ]
        );
    }

    #[test]
    fn backfill_skips_rows_that_already_have_a_value() {
        assert!(
            UP[4]
                .sql
                .contains("WHERE unit_original_price IS NULL AND unit_price IS NOT NULL")
        );
    }

    #[test]
    fn down_drops_columns_newest_first() {
        let names: Vec<&str> = DOWN.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "drop_unit_original_price",
                "drop_price_percent",
                "drop_price_amount",
                "drop_price_type",
            ]
        );
    }

    #[test]
    fn comment_documents_every_calculation() {
        let comment = UP[5].sql;
        assert!(comment.contains("FREE = 0"));
        assert!(comment.contains("OVERRIDE = price_amount"));
    }
}

use postgres::Transaction;
use postgres::types::ToSql;
use storefront_common::{CountryCode, CurrencyCode, Error, LocaleCode, Result};
use tracing::info;

const ACTIVE: bool = true;

/// The closed code enumerations that can be seeded into reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeDomain {
    Locale,
    Currency,
    Country,
}

impl CodeDomain {
    /// The reference table holding this domain's codes.
    pub const fn table(self) -> &'static str {
        match self {
            CodeDomain::Locale => "locale_codes",
            CodeDomain::Currency => "currency_codes",
            CodeDomain::Country => "country_codes",
        }
    }

    /// Every code in the domain, in seeding order.
    pub fn codes(self) -> Vec<&'static str> {
        match self {
            CodeDomain::Locale => LocaleCode::ALL.iter().map(|c| c.as_str()).collect(),
            CodeDomain::Currency => CurrencyCode::ALL.iter().map(|c| c.as_str()).collect(),
            CodeDomain::Country => CountryCode::ALL.iter().map(|c| c.as_str()).collect(),
        }
    }
}

/// Batch-inserts `{code, is_active: true}` rows for a code domain.
///
/// The whole set goes in one parameterized INSERT, schema-qualified so it
/// does not depend on the transaction's search path. An empty domain is a
/// no-op. The insert is deliberately not idempotent: rerunning against a
/// seeded table surfaces the primary key violation on `code` instead of
/// hiding it.
pub fn seed_codes(tx: &mut Transaction<'_>, schema: &str, domain: CodeDomain) -> Result<u64> {
    let codes = domain.codes();
    if codes.is_empty() {
        return Ok(0);
    }

    let table = format!("{schema}.{}", domain.table());
    let sql = insert_statement(&table, codes.len());
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(codes.len() * 2);
    for code in &codes {
        params.push(code);
        params.push(&ACTIVE);
    }

    let inserted = tx.execute(sql.as_str(), &params).map_err(|e| Error::Seed {
        table: table.clone(),
        message: e.to_string(),
    })?;
    info!(table = %table, rows = inserted, "seeded reference data");
    Ok(inserted)
}

/// Builds `INSERT INTO <table> (code, is_active) VALUES ($1, $2), …` with one
/// placeholder pair per row.
fn insert_statement(table: &str, rows: usize) -> String {
    let mut sql = format!("INSERT INTO {table} (code, is_active) VALUES ");
    for row in 0..rows {
        if row > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&format!("(${}, ${})", row * 2 + 1, row * 2 + 2));
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_statement_numbers_placeholder_pairs() {
        assert_eq!(
            insert_statement("platform.locale_codes", 3),
            "INSERT INTO platform.locale_codes (code, is_active) VALUES ($1, $2), ($3, $4), ($5, $6)"
        );
    }

    #[test]
    fn domains_map_onto_reference_tables() {
        assert_eq!(CodeDomain::Locale.table(), "locale_codes");
        assert_eq!(CodeDomain::Currency.table(), "currency_codes");
        assert_eq!(CodeDomain::Country.table(), "country_codes");
    }

    #[test]
    fn domain_code_sets_match_the_enumerations() {
        assert_eq!(CodeDomain::Locale.codes().len(), 85);
        assert_eq!(CodeDomain::Currency.codes().len(), 160);
        assert_eq!(CodeDomain::Country.codes().len(), 203);
        assert_eq!(CodeDomain::Locale.codes()[0], "en");
        assert_eq!(CodeDomain::Currency.codes()[0], "AED");
        assert_eq!(CodeDomain::Country.codes()[0], "US");
    }
}

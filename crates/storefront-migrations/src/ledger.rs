use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use postgres::{Client, Transaction};
use storefront_common::{Error, Result};

use crate::version::Version;

/// A row of the migration history table.
#[derive(Debug, Clone)]
pub struct AppliedVersion {
    pub ordinal: i64,
    pub name: String,
    pub applied_at: DateTime<Utc>,
}

/// Tracks applied version ordinals in `public.schema_migrations`.
///
/// Every statement is schema-qualified, so a version transaction's search
/// path cannot misroute ledger writes. `record` and `remove` run inside the
/// version's own transaction: a version and its ledger row commit or roll
/// back together.
pub struct Ledger {
    table: &'static str,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            table: "public.schema_migrations",
        }
    }

    pub fn ensure(&self, client: &mut Client) -> Result<()> {
        client
            .batch_execute(&format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    version BIGINT PRIMARY KEY,
                    name TEXT NOT NULL,
                    applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
                )",
                self.table
            ))
            .map_err(|e| Error::Database(format!("failed to ensure ledger table: {e}")))
    }

    /// Applied versions keyed by ordinal, in ordinal order.
    pub fn applied(&self, client: &mut Client) -> Result<BTreeMap<i64, AppliedVersion>> {
        let rows = client
            .query(
                format!(
                    "SELECT version, name, applied_at FROM {} ORDER BY version",
                    self.table
                )
                .as_str(),
                &[],
            )
            .map_err(|e| Error::Database(format!("failed to read ledger: {e}")))?;

        let mut applied = BTreeMap::new();
        for row in rows {
            let record = AppliedVersion {
                ordinal: row.get(0),
                name: row.get(1),
                applied_at: row.get(2),
            };
            applied.insert(record.ordinal, record);
        }
        Ok(applied)
    }

    pub fn record(&self, tx: &mut Transaction<'_>, version: &Version) -> Result<()> {
        tx.execute(
            format!("INSERT INTO {} (version, name) VALUES ($1, $2)", self.table).as_str(),
            &[&version.ordinal, &version.name],
        )
        .map_err(|e| {
            Error::Database(format!("failed to record version {}: {e}", version.ordinal))
        })?;
        Ok(())
    }

    pub fn remove(&self, tx: &mut Transaction<'_>, ordinal: i64) -> Result<()> {
        let deleted = tx
            .execute(
                format!("DELETE FROM {} WHERE version = $1", self.table).as_str(),
                &[&ordinal],
            )
            .map_err(|e| Error::Database(format!("failed to remove version {ordinal}: {e}")))?;
        if deleted == 0 {
            return Err(Error::Database(format!(
                "version {ordinal} was not recorded in the ledger"
            )));
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

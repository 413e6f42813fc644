use postgres::Transaction;
use storefront_common::{Error, Result};
use tracing::debug;

use crate::fragment::SchemaFragment;

/// Creates a schema namespace if it does not exist yet. Creation is its own
/// operation because a search path naming only a missing schema cannot create
/// objects.
pub fn ensure_schema(tx: &mut Transaction<'_>, schema: &str) -> Result<()> {
    tx.batch_execute(&format!("CREATE SCHEMA IF NOT EXISTS {schema}"))
        .map_err(|e| Error::Database(format!("failed to create schema {schema}: {e}")))?;
    debug!(schema, "schema ensured");
    Ok(())
}

/// Runs fragments in declaration order inside the caller's transaction.
///
/// Before a fragment whose target schema differs from the active one, the
/// transaction-local search path switches to it; `SET LOCAL` reverts when the
/// transaction ends, so the session's path is restored on commit and on
/// rollback. Execution stops at the first failure and the error names the
/// failing fragment. There is no retry and no fragment-level isolation: a
/// later fragment sees the uncommitted effects of earlier ones, and a
/// rollback discards them all together.
pub fn apply(tx: &mut Transaction<'_>, fragments: &[SchemaFragment]) -> Result<()> {
    let mut active: Option<&str> = None;
    for fragment in fragments {
        if active != Some(fragment.schema) {
            set_search_path(tx, fragment.schema)?;
            active = Some(fragment.schema);
        }
        debug!(
            fragment = fragment.name,
            schema = fragment.schema,
            "applying fragment"
        );
        tx.batch_execute(fragment.sql).map_err(|e| Error::Fragment {
            name: fragment.name,
            message: e.to_string(),
        })?;
    }
    Ok(())
}

fn set_search_path(tx: &mut Transaction<'_>, schema: &str) -> Result<()> {
    tx.batch_execute(&format!("SET LOCAL search_path TO {schema}"))
        .map_err(|e| Error::Database(format!("failed to set search path to {schema}: {e}")))
}

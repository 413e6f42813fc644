use postgres::Client;
use storefront_common::{Error, Result};
use tracing::debug;

/// Takes a session-level advisory lock, blocking until it is granted.
pub fn acquire(client: &mut Client, key: i64) -> Result<()> {
    client
        .query_one("SELECT pg_advisory_lock($1)", &[&key])
        .map_err(|e| Error::Database(format!("failed to acquire advisory lock {key}: {e}")))?;
    debug!(key, "advisory lock acquired");
    Ok(())
}

/// Releases a session-level advisory lock. Returns false when the session
/// did not hold it.
pub fn release(client: &mut Client, key: i64) -> Result<bool> {
    let row = client
        .query_one("SELECT pg_advisory_unlock($1)", &[&key])
        .map_err(|e| Error::Database(format!("failed to release advisory lock {key}: {e}")))?;
    let released: bool = row.get(0);
    if !released {
        debug!(key, "advisory lock was not held by this session");
    }
    Ok(released)
}

use chrono::{DateTime, Utc};
use postgres::Client;
use serde::Serialize;
use storefront_common::{Error, Result};
use storefront_db::lock;
use tracing::{info, warn};

use crate::ledger::Ledger;
use crate::version::{self, Version};
use crate::versions;

/// Advisory lock key guarding migration runs, "SFM1" in ASCII. Arbitrary but
/// stable across releases.
const ADVISORY_LOCK_KEY: i64 = 0x5346_4D31;

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Drives versions forward and backward over one database connection.
pub struct Runner<'a> {
    client: &'a mut Client,
    ledger: Ledger,
    versions: &'static [Version],
}

/// One line of `status` output.
#[derive(Debug, Clone, Serialize)]
pub struct VersionStatus {
    pub version: i64,
    pub name: String,
    pub applied: bool,
    pub applied_at: Option<DateTime<Utc>>,
}

impl<'a> Runner<'a> {
    /// Builds a runner over the shipped registry. Fails when the registry is
    /// structurally invalid.
    pub fn new(client: &'a mut Client) -> Result<Self> {
        Self::with_versions(client, versions::all())
    }

    /// Builds a runner over an explicit registry, validated the same way.
    pub fn with_versions(client: &'a mut Client, versions: &'static [Version]) -> Result<Self> {
        version::validate(versions)?;
        Ok(Self {
            client,
            ledger: Ledger::new(),
            versions,
        })
    }

    /// Applies every pending version in ordinal order, each in its own
    /// transaction together with its ledger row. The first failure rolls
    /// that version back and aborts the run. Returns the applied ordinals.
    pub fn up(&mut self) -> Result<Vec<i64>> {
        lock::acquire(self.client, ADVISORY_LOCK_KEY)?;
        let outcome = self.apply_pending();
        self.unlock();
        outcome
    }

    /// Rolls back the most recently applied version, if any. Destructive:
    /// dropped objects take their data with them. Returns the reverted
    /// ordinal.
    pub fn down(&mut self) -> Result<Option<i64>> {
        lock::acquire(self.client, ADVISORY_LOCK_KEY)?;
        let outcome = self.revert_latest();
        self.unlock();
        outcome
    }

    /// Every known version with its applied state, plus any ledger rows
    /// unknown to this binary, ordered by ordinal.
    pub fn status(&mut self) -> Result<Vec<VersionStatus>> {
        self.ledger.ensure(self.client)?;
        let mut applied = self.ledger.applied(self.client)?;

        let mut statuses = Vec::with_capacity(self.versions.len() + applied.len());
        for version in self.versions {
            let row = applied.remove(&version.ordinal);
            statuses.push(VersionStatus {
                version: version.ordinal,
                name: version.name.to_string(),
                applied: row.is_some(),
                applied_at: row.map(|r| r.applied_at),
            });
        }
        // Whatever is left was recorded by a different binary.
        for (ordinal, row) in applied {
            statuses.push(VersionStatus {
                version: ordinal,
                name: row.name,
                applied: true,
                applied_at: Some(row.applied_at),
            });
        }
        statuses.sort_by_key(|status| status.version);
        Ok(statuses)
    }

    fn apply_pending(&mut self) -> Result<Vec<i64>> {
        self.ledger.ensure(self.client)?;
        let applied = self.ledger.applied(self.client)?;
        let highest = applied.keys().next_back().copied();
        let pending: Vec<Version> = self
            .versions
            .iter()
            .filter(|v| !applied.contains_key(&v.ordinal))
            .copied()
            .collect();

        if let Some(highest) = highest
            && let Some(stray) = pending.iter().find(|v| v.ordinal < highest)
        {
            return Err(Error::Registry(format!(
                "version {} is pending but {highest} is already applied; \
                 out-of-order versions are not supported",
                stray.ordinal
            )));
        }

        if pending.is_empty() {
            info!("database is up to date");
            return Ok(Vec::new());
        }

        let mut done = Vec::with_capacity(pending.len());
        for version in &pending {
            info!(version = version.ordinal, name = version.name, "applying version");
            self.run_version(version, Direction::Up)?;
            done.push(version.ordinal);
        }
        info!(count = done.len(), "migration run complete");
        Ok(done)
    }

    fn revert_latest(&mut self) -> Result<Option<i64>> {
        self.ledger.ensure(self.client)?;
        let applied = self.ledger.applied(self.client)?;
        let Some((&ordinal, row)) = applied.iter().next_back() else {
            info!("no applied versions, nothing to revert");
            return Ok(None);
        };
        let Some(version) = self.versions.iter().find(|v| v.ordinal == ordinal).copied() else {
            return Err(Error::Registry(format!(
                "applied version {ordinal} ({}) is unknown to this binary",
                row.name
            )));
        };

        warn!(
            version = version.ordinal,
            name = version.name,
            "reverting version; dropped objects are not recoverable"
        );
        self.run_version(&version, Direction::Down)?;
        Ok(Some(version.ordinal))
    }

    /// One version, one transaction: the entry point and its ledger row
    /// commit or roll back together.
    fn run_version(&mut self, version: &Version, direction: Direction) -> Result<()> {
        let mut tx = self
            .client
            .transaction()
            .map_err(|e| Error::Database(format!("failed to open transaction: {e}")))?;

        let result = match direction {
            Direction::Up => {
                (version.up)(&mut tx).and_then(|_| self.ledger.record(&mut tx, version))
            }
            Direction::Down => {
                (version.down)(&mut tx).and_then(|_| self.ledger.remove(&mut tx, version.ordinal))
            }
        };

        match result {
            Ok(()) => tx.commit().map_err(|e| {
                Error::Database(format!("failed to commit version {}: {e}", version.ordinal))
            }),
            Err(e) => {
                // Dropping the transaction rolls it back.
                drop(tx);
                Err(Error::Version {
                    ordinal: version.ordinal,
                    name: version.name,
                    message: e.to_string(),
                })
            }
        }
    }

    fn unlock(&mut self) {
        if let Err(e) = lock::release(self.client, ADVISORY_LOCK_KEY) {
            warn!("failed to release advisory lock: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ADVISORY_LOCK_KEY;

    #[test]
    fn advisory_lock_key_spells_sfm1() {
        assert_eq!(ADVISORY_LOCK_KEY, i64::from(u32::from_be_bytes(*b"SFM1")));
    }
}

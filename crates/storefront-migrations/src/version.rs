use std::collections::HashSet;
use std::fmt;

use postgres::Transaction;
use storefront_common::{Error, Result};

/// A migration entry point. Plain function pointers keep the whole registry
/// in a static.
pub type MigrationFn = fn(&mut Transaction<'_>) -> Result<()>;

/// One schema version: an ordinal, a name and its Up/Down entry points.
///
/// Versions are compiled in as a statically ordered list; there is no runtime
/// registration path. Ordinal gaps are legal and part of shipped history.
#[derive(Clone, Copy)]
pub struct Version {
    pub ordinal: i64,
    pub name: &'static str,
    pub up: MigrationFn,
    pub down: MigrationFn,
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .finish()
    }
}

/// Checks a registry: ordinals strictly increasing, names non-empty and
/// unique. Runs once at runner construction; a bad registry is a fatal
/// startup error.
pub fn validate(versions: &[Version]) -> Result<()> {
    let mut names = HashSet::new();
    let mut previous: Option<i64> = None;
    for version in versions {
        if version.name.is_empty() {
            return Err(Error::Registry(format!(
                "version {} has an empty name",
                version.ordinal
            )));
        }
        if !names.insert(version.name) {
            return Err(Error::Registry(format!(
                "duplicate version name {}",
                version.name
            )));
        }
        if let Some(prev) = previous
            && version.ordinal <= prev
        {
            return Err(Error::Registry(format!(
                "version ordinals must be strictly increasing, {} follows {prev}",
                version.ordinal
            )));
        }
        previous = Some(version.ordinal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_tx: &mut Transaction<'_>) -> Result<()> {
        Ok(())
    }

    fn version(ordinal: i64, name: &'static str) -> Version {
        Version {
            ordinal,
            name,
            up: noop,
            down: noop,
        }
    }

    #[test]
    fn accepts_increasing_ordinals_with_gaps() {
        let versions = [version(1, "a"), version(2, "b"), version(4, "c")];
        assert!(validate(&versions).is_ok());
    }

    #[test]
    fn empty_registry_is_valid() {
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn rejects_duplicate_ordinals() {
        let versions = [version(1, "a"), version(1, "b")];
        let err = validate(&versions).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn rejects_decreasing_ordinals() {
        let versions = [version(2, "a"), version(1, "b")];
        assert!(validate(&versions).is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let versions = [version(1, "a"), version(2, "a")];
        let err = validate(&versions).unwrap_err();
        assert!(err.to_string().contains("duplicate version name"));
    }

    #[test]
    fn rejects_empty_names() {
        let versions = [version(1, "")];
        assert!(validate(&versions).is_err());
    }
}

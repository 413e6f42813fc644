use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connect(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("fragment {name} failed: {message}")]
    Fragment { name: &'static str, message: String },

    #[error("seeding {table} failed: {message}")]
    Seed { table: String, message: String },

    #[error("version {ordinal} ({name}) failed: {message}")]
    Version {
        ordinal: i64,
        name: &'static str,
        message: String,
    },

    #[error("version registry error: {0}")]
    Registry(String),
}

impl Error {
    /// The name of the failing fragment, when this error came out of the
    /// fragment executor.
    pub fn fragment_name(&self) -> Option<&'static str> {
        match self {
            Error::Fragment { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display_includes_context() {
        let e = Error::Config("DB_HOST is not set".into());
        assert_eq!(e.to_string(), "configuration error: DB_HOST is not set");

        let e = Error::Connect("timed out".into());
        assert_eq!(e.to_string(), "connection error: timed out");

        let e = Error::Fragment {
            name: "checkouts",
            message: "relation exists".into(),
        };
        assert_eq!(e.to_string(), "fragment checkouts failed: relation exists");

        let e = Error::Seed {
            table: "platform.locale_codes".into(),
            message: "duplicate key".into(),
        };
        assert_eq!(
            e.to_string(),
            "seeding platform.locale_codes failed: duplicate key"
        );

        let e = Error::Version {
            ordinal: 2,
            name: "checkout_line_item_parent",
            message: "fragment parent_fk failed: boom".into(),
        };
        assert_eq!(
            e.to_string(),
            "version 2 (checkout_line_item_parent) failed: fragment parent_fk failed: boom"
        );
    }

    #[test]
    fn fragment_name_is_exposed_for_fragment_errors_only() {
        let e = Error::Fragment {
            name: "triggers",
            message: "syntax error".into(),
        };
        assert_eq!(e.fragment_name(), Some("triggers"));
        assert_eq!(Error::Database("nope".into()).fragment_name(), None);
    }
}

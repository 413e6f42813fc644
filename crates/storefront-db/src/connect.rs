use std::time::Duration;

use native_tls::TlsConnector;
use postgres::{Client, NoTls};
use postgres_native_tls::MakeTlsConnector;
use storefront_common::{Error, Result};
use storefront_config::{DatabaseConfig, SslMode};
use tracing::{debug, info};

/// Opens a connection to the platform database and verifies it with a
/// bounded ping before handing it out.
pub fn connect(config: &DatabaseConfig) -> Result<Client> {
    let pg = client_config(config);

    info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        user = %config.user,
        ssl_mode = ?config.ssl_mode,
        "connecting to database"
    );

    let mut client = match config.ssl_mode {
        SslMode::Disable => pg.connect(NoTls),
        SslMode::Prefer | SslMode::Require => pg.connect(tls_connector()?),
    }
    .map_err(|e| Error::Connect(format!("failed to connect to {}: {e}", config.host)))?;

    ping(&mut client, config.connect_timeout)?;
    Ok(client)
}

fn client_config(config: &DatabaseConfig) -> postgres::Config {
    let mut pg = postgres::Config::new();
    pg.host(&config.host)
        .port(config.port)
        .dbname(&config.dbname)
        .user(&config.user)
        .password(&config.password)
        .application_name("storefront-migrate")
        .connect_timeout(config.connect_timeout)
        .ssl_mode(match config.ssl_mode {
            SslMode::Disable => postgres::config::SslMode::Disable,
            SslMode::Prefer => postgres::config::SslMode::Prefer,
            SslMode::Require => postgres::config::SslMode::Require,
        });
    pg
}

fn tls_connector() -> Result<MakeTlsConnector> {
    let connector = TlsConnector::new()
        .map_err(|e| Error::Connect(format!("failed to build tls connector: {e}")))?;
    Ok(MakeTlsConnector::new(connector))
}

/// Round-trips a `SELECT 1` under a statement timeout, so an unresponsive
/// server fails fast instead of hanging the run. The timeout is transaction
/// local and does not leak into migration statements.
pub fn ping(client: &mut Client, timeout: Duration) -> Result<()> {
    let mut tx = client
        .transaction()
        .map_err(|e| Error::Connect(format!("ping failed: {e}")))?;
    tx.batch_execute(&format!(
        "SET LOCAL statement_timeout = {}; SELECT 1;",
        timeout.as_millis()
    ))
    .map_err(|e| Error::Connect(format!("ping failed: {e}")))?;
    tx.rollback()
        .map_err(|e| Error::Connect(format!("ping failed: {e}")))?;
    debug!("database ping ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use postgres::config::Host;

    use super::*;

    fn config(ssl_mode: SslMode) -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".into(),
            port: 6432,
            dbname: "storefront".into(),
            user: "migrator".into(),
            password: "hunter2".into(),
            ssl_mode,
            connect_timeout: Duration::from_secs(3),
        }
    }

    #[test]
    fn client_config_carries_every_setting() {
        let pg = client_config(&config(SslMode::Require));
        assert_eq!(pg.get_hosts(), &[Host::Tcp("db.internal".into())]);
        assert_eq!(pg.get_ports(), &[6432]);
        assert_eq!(pg.get_dbname(), Some("storefront"));
        assert_eq!(pg.get_user(), Some("migrator"));
        assert_eq!(pg.get_application_name(), Some("storefront-migrate"));
        assert_eq!(pg.get_connect_timeout(), Some(&Duration::from_secs(3)));
    }

    #[test]
    fn ssl_mode_maps_onto_driver_modes() {
        let modes = [
            (SslMode::Disable, postgres::config::SslMode::Disable),
            (SslMode::Prefer, postgres::config::SslMode::Prefer),
            (SslMode::Require, postgres::config::SslMode::Require),
        ];
        for (ours, theirs) in modes {
            assert_eq!(client_config(&config(ours)).get_ssl_mode(), theirs);
        }
    }
}

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::Config;

/// Build connection options from the configured URL and credentials.
///
/// `DATABASE_USERNAME` and `DATABASE_PASSWORD` win over anything embedded in `DATABASE_URL`,
/// so the URL can be shared around without the password in it.
///
/// This is the first place the URL is actually parsed; [`Config`] only checks that it's set.
pub fn connect_options(config: &Config) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = config.database_url.parse()?;

    Ok(options
        .username(&config.database_username)
        .password(&config.database_password))
}

/// Open a single connection with the configured credentials and run a trivial query.
pub async fn check_connection(config: &Config) -> anyhow::Result<()> {
    let options = connect_options(config).context("DATABASE_URL is not a valid connection URL")?;

    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("could not connect to the database")?;

    sqlx::query("select 1")
        .execute(&db)
        .await
        .context("database did not answer a trivial query")?;

    log::info!("database connection ok");

    db.close().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OAuthClient;

    fn config_with_url(database_url: &str) -> Config {
        let oauth = OAuthClient {
            client_id: "id".into(),
            client_secret: "secret".into(),
        };

        Config {
            database_url: database_url.into(),
            database_username: "site".into(),
            database_password: "hunter2".into(),
            google: oauth.clone(),
            github: oauth,
            migration_url: "postgres://localhost/site".into(),
        }
    }

    #[test]
    fn parses_configured_url() {
        assert!(connect_options(&config_with_url("postgres://localhost:5432/site")).is_ok());
    }

    #[test]
    fn rejects_garbage_url() {
        assert!(connect_options(&config_with_url("not a url")).is_err());
    }
}

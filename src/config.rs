use std::env::VarError;
use std::fmt;

use crate::error::{ConfigError, FieldError, Problem};

mod loader;
mod source;

pub use loader::ConfigLoader;
pub use source::{EnvSource, ProcessEnv};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_USERNAME: &str = "DATABASE_USERNAME";
pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
pub const GITHUB_CLIENT_ID: &str = "GITHUB_CLIENT_ID";
pub const GITHUB_CLIENT_SECRET: &str = "GITHUB_CLIENT_SECRET";
pub const MIGRATION_URL: &str = "MIGRATION_URL";

/// Every variable the site needs to start, in the order they're read and reported.
///
/// All of them are required and none has a default.
pub const REQUIRED_VARS: [&str; 8] = [
    DATABASE_URL,
    DATABASE_USERNAME,
    DATABASE_PASSWORD,
    GOOGLE_CLIENT_ID,
    GOOGLE_CLIENT_SECRET,
    GITHUB_CLIENT_ID,
    GITHUB_CLIENT_SECRET,
    MIGRATION_URL,
];

/// The configuration parameters for the site.
///
/// Values are taken as-is: nothing here checks that `database_url` or `migration_url` actually
/// look like URLs. The database check in [`crate::db`] is the first thing to interpret them.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// The connection URL for the primary datastore.
    pub database_url: String,
    pub database_username: String,
    pub database_password: String,

    /// Credentials for "Sign in with Google".
    pub google: OAuthClient,

    /// Credentials for "Sign in with GitHub".
    pub github: OAuthClient,

    /// Where schema migration tooling should connect.
    pub migration_url: String,
}

/// An OAuth application registered with a sign-in provider.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Read and validate every variable in [`REQUIRED_VARS`] from `source`.
    ///
    /// This always reads the whole table, even after a failure, so the returned error names
    /// every bad variable and not just the first.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let mut fields = FieldReader::new(source);

        let config = Config {
            database_url: fields.required(DATABASE_URL),
            database_username: fields.required(DATABASE_USERNAME),
            database_password: fields.required(DATABASE_PASSWORD),
            google: OAuthClient {
                client_id: fields.required(GOOGLE_CLIENT_ID),
                client_secret: fields.required(GOOGLE_CLIENT_SECRET),
            },
            github: OAuthClient {
                client_id: fields.required(GITHUB_CLIENT_ID),
                client_secret: fields.required(GITHUB_CLIENT_SECRET),
            },
            migration_url: fields.required(MIGRATION_URL),
        };

        fields.finish(config)
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("database_username", &self.database_username)
            .field("database_password", &Redacted)
            .field("google", &self.google)
            .field("github", &self.github)
            .field("migration_url", &self.migration_url)
            .finish()
    }
}

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &Redacted)
            .finish()
    }
}

struct Redacted;

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"<redacted>\"")
    }
}

/// Collects problems instead of bailing out on the first one.
///
/// A rejected field reads as an empty string so the record can still be assembled;
/// [`FieldReader::finish()`] throws it away if anything was rejected.
struct FieldReader<'a, S: ?Sized> {
    source: &'a S,
    problems: Vec<FieldError>,
}

impl<'a, S: EnvSource + ?Sized> FieldReader<'a, S> {
    fn new(source: &'a S) -> Self {
        FieldReader {
            source,
            problems: Vec::new(),
        }
    }

    fn required(&mut self, name: &'static str) -> String {
        let problem = match self.source.var(name) {
            Ok(value) => return value,
            Err(VarError::NotPresent) => Problem::Missing,
            Err(VarError::NotUnicode(_)) => Problem::NotUnicode,
        };

        log::debug!("required variable {} {}", name, problem);
        self.problems.push(FieldError { name, problem });
        String::new()
    }

    fn finish<T>(self, value: T) -> Result<T, ConfigError> {
        if self.problems.is_empty() {
            Ok(value)
        } else {
            Err(ConfigError::new(self.problems))
        }
    }
}

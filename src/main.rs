use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use personal_site::config::{ConfigLoader, REQUIRED_VARS};
use personal_site::{date, db};

/// Startup checks for the site.
#[derive(clap::Parser)]
struct Cli {
    /// A dotenv file to load into the environment before reading configuration.
    ///
    /// If omitted, `.env` in the working directory is used when it exists.
    #[clap(long, env = "SITE_ENV_FILE")]
    env_file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Validate the site configuration, failing if any required variable is missing.
    Check {
        /// Also connect to the database with the configured credentials.
        #[clap(long)]
        connect: bool,
    },

    /// Print the "published" line for a `YYYY-MM-DD` date the way a blog post shows it.
    Published { date: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // This needs to happen before the logger is initialized so `RUST_LOG` can come from the file.
    let env_file = match &cli.env_file {
        Some(path) => Some(
            dotenv::from_path(path)
                .map(|()| path.clone())
                .with_context(|| format!("could not load env file {}", path.display()))?,
        ),
        // It's fine if there's no `.env`; the variables may be set some other way.
        None => dotenv::dotenv().ok(),
    };

    env_logger::init();

    if let Some(path) = env_file {
        log::debug!("loaded environment from {}", path.display());
    }

    match cli.command {
        Command::Check { connect } => {
            let loader = ConfigLoader::from_env();

            // A bad configuration is fatal: this propagates out of `main()` with the full
            // list of offending variables and a non-zero exit code.
            let config = loader.get()?;

            for name in REQUIRED_VARS {
                println!("{} ok", name);
            }

            if connect {
                db::check_connection(config).await?;
                println!("database ok");
            }
        }
        Command::Published { date: raw } => {
            let published = date::parse_date(&raw)
                .with_context(|| format!("expected a YYYY-MM-DD date, got {:?}", raw))?;

            println!("{}", date::format_published_now(published));
        }
    }

    Ok(())
}

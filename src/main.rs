//! # Snippet Search CLI (`snip`)
//!
//! The `snip` binary runs the search page of a snippet documentation site
//! from the terminal, and can serve it over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! snip --config ./config/snip.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `snip search [query]` | Filter snippets by title and tags |
//! | `snip browse` | Interactive search, one query per stdin line |
//! | `snip get <id>` | Print a full snippet |
//! | `snip state` | Show or clear the remembered query and page |
//! | `snip serve` | Start the JSON HTTP server |
//!
//! ## Logging
//!
//! Diagnostics go to stderr. Set `RUST_LOG` (e.g. `RUST_LOG=snippet_search=debug`)
//! to change the level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use snippet_search::{config, get, search, server, state_file};

/// Snippet Search CLI: filter a snippet collection by title and tags.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file naming the content files and the state file.
#[derive(Parser)]
#[command(
    name = "snip",
    about = "Snippet Search: filter a snippet collection by title and tags",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/snip.toml`. When the file does not exist,
    /// content is read from `./content` and state is kept in memory.
    #[arg(long, global = true, default_value = "./config/snip.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Filter snippets by a free-text query.
    ///
    /// Matches the query case-insensitively against each snippet's title and
    /// tags. Without a query, the last remembered query is used.
    Search {
        /// The search query string.
        query: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session.
    ///
    /// Reads one query per line from stdin and prints the results after each
    /// line. The last line becomes the remembered query.
    Browse,

    /// Print a snippet by its id.
    Get {
        /// Snippet id.
        id: String,

        /// Print the snippet as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the remembered query and last visited page.
    State {
        /// Reset the state to its defaults.
        #[arg(long)]
        clear: bool,
    },

    /// Start the HTTP server.
    ///
    /// Binds to the address configured in `[server].bind`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("snippet_search=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        tracing::debug!(path = %cli.config.display(), "config not found, using defaults");
        config::Config::minimal()
    };

    match cli.command {
        Commands::Search { query, json } => {
            search::run_search(&cfg, query, json)?;
        }
        Commands::Browse => {
            let stdin = std::io::stdin();
            search::run_browse(&cfg, stdin.lock())?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, &id, json)?;
        }
        Commands::State { clear } => {
            state_file::run_state(&cfg, clear)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}

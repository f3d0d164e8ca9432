//! insurapro CLI - customer records from the command line.

use clap::{Parser, Subcommand};
use insurapro::config::{Config, load_config};
use insurapro::{Result, cli};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "insurapro")]
#[command(author, version, about = "Customer records and interaction history", long_about = None)]
struct Cli {
    /// Data file to use instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a customer.
    Add {
        /// Customer name.
        name: String,

        /// Customer surname.
        surname: String,
    },

    /// Show every customer with their interactions.
    List,

    /// Show one customer with their interactions.
    Show {
        /// Customer id, name or surname. Use #ID to pick an id directly.
        query: String,
    },

    /// Find customers by exact id, name or surname.
    Search {
        /// Text to match.
        query: String,
    },

    /// Replace a customer's name and surname.
    Edit {
        /// Customer id, name or surname. Use #ID to pick an id directly.
        query: String,

        /// New name.
        name: String,

        /// New surname.
        surname: String,
    },

    /// Delete a customer.
    Delete {
        /// Customer id, name or surname. Use #ID to pick an id directly.
        query: String,
    },

    /// Record an interaction with a customer.
    Interact {
        /// Customer id, name or surname. Use #ID to pick an id directly.
        query: String,

        /// Interaction type (e.g. Appointment, Contract).
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Interaction details.
        details: String,
    },
}

/// Initialize `env_logger` from config. `RUST_LOG` wins when set.
fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    // Ignore the error if a logger is already installed
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let mut store = cli::open_store(config, cli.file)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Add { name, surname } => cli::add::run(&mut store, &name, &surname, &mut out),
        Commands::List => cli::list::run(&store, &mut out),
        Commands::Show { query } => cli::show::run(&store, &query, &mut out),
        Commands::Search { query } => cli::search::run(&store, &query, &mut out),
        Commands::Edit {
            query,
            name,
            surname,
        } => cli::edit::run(&mut store, &query, &name, &surname, &mut out),
        Commands::Delete { query } => cli::delete::run(&mut store, &query, &mut out),
        Commands::Interact {
            query,
            kind,
            details,
        } => cli::interact::run(&mut store, &query, &kind, &details, &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = load_config().and_then(|config| {
        init_logging(&config);
        run(cli, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("insurapro: error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub mod config;
pub mod ingest;
pub mod parse;
pub mod query;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "busyblocks")]
#[command(about = "Convert employee appointment listings (.LST) into a SQLite database")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a report and replace the database with its appointments
    Ingest {
        /// Path to the .LST report
        #[arg(long)]
        lst: Option<PathBuf>,
        /// Path to the output SQLite database (will be replaced)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Parse a report and print the appointments without storing them
    Parse {
        /// Path to the .LST report
        #[arg(long)]
        lst: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List appointments stored by a previous ingest
    Query {
        /// Path to the SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
        /// Only appointments for this employee number
        #[arg(short, long)]
        employee: Option<String>,
        /// Only appointments on this report date (MM/DD/YY)
        #[arg(short, long)]
        date: Option<String>,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<u32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key (lst-path, db-path)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (lst-path, db-path)
        key: String,
        /// Value to set
        value: String,
    },
    /// Remove a configuration value
    Unset {
        /// Configuration key (lst-path, db-path)
        key: String,
    },
    /// List all configuration values
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Ingest { lst, db } => ingest::handle_ingest_command(lst, db),
            Commands::Parse { lst, format } => parse::handle_parse_command(lst, format),
            Commands::Query {
                db,
                employee,
                date,
                limit,
                format,
            } => query::handle_query_command(db, employee, date, limit, format),
            Commands::Config { command } => match command {
                ConfigCommands::Get { key } => config::handle_config_get(key),
                ConfigCommands::Set { key, value } => config::handle_config_set(key, value),
                ConfigCommands::Unset { key } => config::handle_config_unset(key),
                ConfigCommands::List => config::handle_config_list(),
            },
        }
    }
}

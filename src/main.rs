use busyblocks::cli::Cli;
use busyblocks::{init_logging, LoggingConfig};
use clap::Parser;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (ignore errors if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(Level::DEBUG);
    }
    let _logging_guard = init_logging(logging)?;

    cli.run()
}

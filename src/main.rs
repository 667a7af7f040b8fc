//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whoxysubs` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Banner and version output
//! - Fatal error reporting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process;

use whoxysubs::app::{log_summary, print_banner, version_line};
use whoxysubs::initialization::init_logger_with;
use whoxysubs::{run_lookups, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    if opt.version {
        print_banner();
        println!("{}", version_line());
        return Ok(());
    }

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if !opt.silent {
        print_banner();
    }

    let Some(search) = opt.search else {
        error!("Invalid search type: . Valid options are: company, email, keyword, or name.");
        process::exit(1);
    };
    let config = Config::from_opt(opt, search);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_lookups(&config, stdin, &mut out)
        .await
        .context("Lookup aborted")
    {
        Ok(report) => {
            log_summary(&report);
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}

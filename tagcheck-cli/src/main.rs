//! Command-line interface for tagcheck
//! This binary scans one markup file and prints a line for every mismatched, excess or
//! unclosed tag it finds among the configured tag names.
//!
//! Usage:
//!   tagcheck `<path>`   - Check tag balance in a file
//!
//! Diagnostics go to stdout and never change the exit status. The only failure is a file
//! that cannot be read, which exits with status 1 before anything is printed.
//! Log output goes to stderr and is controlled by `RUST_LOG` (default: warn).

use clap::{Arg, Command};
use tagcheck_parser::tagcheck::loader::SourceLoader;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("tagcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report mismatched or unclosed tags in a markup file")
        .arg(
            Arg::new("path")
                .help("Path to the file to scan")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    handle_check_command(path);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let config = tagcheck_config::load_defaults().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let extractor = config.extraction.extractor().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let reported = loader.check_with(&extractor, |diagnostic| println!("{}", diagnostic));
    tracing::debug!(path, reported, "check finished");
}

//! CLI entry point for treedump

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::Level;
use treedump::{CaptureConfig, CaptureError, DEFAULT_OUTPUT_FILE, generate};

#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(about = "Write a project's tree and every file's contents to codebase_structure.txt")]
#[command(version)]
struct Args {
    /// Root directory of the project to capture
    project_root_path: PathBuf,

    /// Log each directory visited and every unreadable file to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Send log events to stderr so stdout only carries the result line.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = Path::new(DEFAULT_OUTPUT_FILE);
    match generate(&args.project_root_path, output, &CaptureConfig::default()) {
        Ok(summary) => {
            println!(
                "Codebase structure has been saved to {}",
                summary.output.display()
            );
        }
        Err(e @ CaptureError::InvalidRoot(_)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("treedump: {}", e);
            process::exit(1);
        }
    }
}

//! adhosts CLI
//!
//! Appends the hostnames of one or more blocklists to the system hosts file,
//! below a separation line that keeps the user's own entries untouched.

mod fetch;
mod hosts_io;
mod platform;
mod run;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::platform::PlatformPaths;
use crate::run::{run, RunOptions, RunSummary};

#[derive(Parser)]
#[command(name = "adhosts")]
#[command(about = "Keep the hosts file in sync with ad blocklists")]
struct Cli {
    /// Directory holding the hosts file (defaults to the platform location)
    #[arg(long)]
    hosts_dir: Option<PathBuf>,

    /// Directory holding adhosts.cfg (defaults to the platform location)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Additional blocklist location (URL or file://path)
    #[arg(short, long = "source")]
    sources: Vec<String>,

    /// Per-source download timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Print the new hosts file instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: Failed to resolve working directory: {e}");
            std::process::exit(1);
        }
    };

    let opts = RunOptions {
        hosts_dir: cli.hosts_dir,
        config_dir: cli.config_dir,
        working_dir,
        extra_sources: cli.sources,
        timeout: Duration::from_secs(cli.timeout),
        dry_run: cli.dry_run,
    };

    let summary = match run(&opts, &PlatformPaths::current()).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = print_summary(&summary, cli.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_summary(summary: &RunSummary, json: bool) -> Result<(), String> {
    if summary.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&summary.content)
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
        stdout.flush().map_err(|e| format!("Failed to write to stdout: {}", e))?;
    }

    if json {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| format!("Failed to serialize summary: {}", e))?;
        if summary.dry_run {
            eprintln!("{json}");
        } else {
            println!("{json}");
        }
        return Ok(());
    }

    let report = format!(
        "{} '{}'\n  Preserved:  {} lines\n  Sources:    {} ok, {} failed\n  Hostnames:  {} ({} carried over)\n  Time:       {:.1}ms",
        if summary.dry_run { "Dry run for" } else { "Updated" },
        summary.hosts_file.display(),
        summary.preserved_lines,
        summary.sources_ok,
        summary.failed_sources.len(),
        summary.hostnames_written,
        summary.previous_hosts,
        summary.total_ms,
    );
    if summary.dry_run {
        eprintln!("{report}");
    } else {
        println!("{report}");
    }
    for failed in &summary.failed_sources {
        eprintln!("  Skipped:    {} ({})", failed.location, failed.error);
    }

    Ok(())
}

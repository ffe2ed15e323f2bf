use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use ah_core::sources::SOURCE_LIST_FILENAME;
use ah_core::{
    split, synthesize, BlocklistIngestor, HostPaths, PathResolver, SourceList, SourceLines, SourceLocation,
};

use crate::fetch::Fetcher;
use crate::hosts_io::{backup_once, load_source_lists, read_hosts, write_replace};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Core(#[from] ah_core::Error),
    #[error("{0}")]
    Client(String),
}

impl From<ah_core::ConfigError> for RunError {
    fn from(err: ah_core::ConfigError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ah_core::PreconditionError> for RunError {
    fn from(err: ah_core::PreconditionError) -> Self {
        Self::Core(err.into())
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub hosts_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    /// Directory searched for a local source list before the config directory.
    pub working_dir: PathBuf,
    pub extra_sources: Vec<String>,
    pub timeout: Duration,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedSource {
    pub location: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub hosts_file: PathBuf,
    pub backup_created: bool,
    pub preserved_lines: usize,
    pub previous_hosts: usize,
    pub sources_total: usize,
    pub sources_ok: usize,
    pub failed_sources: Vec<FailedSource>,
    pub lines_read: usize,
    pub hostnames_written: usize,
    pub dry_run: bool,
    pub total_ms: f64,
    #[serde(skip)]
    pub content: Vec<u8>,
}

fn resolve_paths(opts: &RunOptions, resolver: &dyn PathResolver) -> Result<HostPaths, RunError> {
    if let (Some(hosts_dir), Some(config_dir)) = (&opts.hosts_dir, &opts.config_dir) {
        return Ok(HostPaths::new(hosts_dir, config_dir));
    }
    let base = resolver.resolve()?;
    Ok(HostPaths::new(
        opts.hosts_dir.clone().unwrap_or(base.hosts_dir),
        opts.config_dir.clone().unwrap_or(base.config_dir),
    ))
}

/// Rebuild the hosts file: back it up, merge every source and write it back.
///
/// Sources are fetched and ingested one at a time; only the host set is kept
/// between them. Nothing is written to the hosts file unless every fatal
/// check passed and all sources have been processed.
pub async fn run(opts: &RunOptions, resolver: &dyn PathResolver) -> Result<RunSummary, RunError> {
    let start = Instant::now();
    let paths = resolve_paths(opts, resolver)?;
    let hosts_file = paths.hosts_file();

    log::info!("Reading hosts from your hostfile in {}", hosts_file.display());
    let existing = read_hosts(&hosts_file)?;

    let backup_created = if opts.dry_run {
        false
    } else {
        let backup_file = paths.backup_file();
        let created = backup_once(&hosts_file, &backup_file)?;
        if created {
            log::info!(
                "Created a copy of your hosts-file {} as {}",
                hosts_file.display(),
                backup_file.display()
            );
        }
        created
    };

    let mut list = SourceList::new();
    let local_list = opts.working_dir.join(SOURCE_LIST_FILENAME);
    let config_list = paths.source_list();
    load_source_lists(&[local_list.as_path(), config_list.as_path()], &mut list)?;
    for raw in &opts.extra_sources {
        if let Some(location) = SourceLocation::parse(raw) {
            list.push(location);
        }
    }
    let locations = list.into_locations()?;

    let mut regions = split(&existing);
    drop(existing);
    let previous_hosts = regions.hosts.len();

    let fetcher = Fetcher::new(opts.timeout).map_err(RunError::Client)?;
    let mut ingestor = BlocklistIngestor::new(&mut regions.hosts);
    for (i, location) in locations.iter().enumerate() {
        log::info!("[{}/{}] Downloading {}...", i + 1, locations.len(), location);
        let lines = fetcher.fetch(location).await;
        ingestor.ingest_source(SourceLines {
            label: location.to_string(),
            lines,
        });
    }
    let report = ingestor.finish();

    let hosts = regions.hosts.sorted_list();
    let content = synthesize(&regions.prefix, &hosts);

    if !opts.dry_run {
        log::info!("Writing new hostfile in {}", hosts_file.display());
        write_replace(&hosts_file, &content)?;
    }

    let failed_sources = report
        .failed
        .iter()
        .map(|(location, err)| FailedSource {
            location: location.clone(),
            error: err.to_string(),
        })
        .collect();

    Ok(RunSummary {
        hosts_file,
        backup_created,
        preserved_lines: regions.prefix.len(),
        previous_hosts,
        sources_total: locations.len(),
        sources_ok: report.sources_ok,
        failed_sources,
        lines_read: report.lines_read,
        hostnames_written: hosts.len(),
        dry_run: opts.dry_run,
        total_ms: start.elapsed().as_secs_f64() * 1000.0,
        content,
    })
}

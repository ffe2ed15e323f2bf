//! Blocklist ingestion.

use crate::error::SourceFetchError;
use crate::grammar::parse_hostname;
use crate::hostset::HostSet;

/// Raw lines retrieved from one source, or the reason retrieval failed.
#[derive(Debug)]
pub struct SourceLines {
    pub label: String,
    pub lines: Result<Vec<String>, SourceFetchError>,
}

impl SourceLines {
    pub fn fetched(label: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            label: label.into(),
            lines: Ok(lines),
        }
    }

    pub fn failed(label: impl Into<String>, error: SourceFetchError) -> Self {
        Self {
            label: label.into(),
            lines: Err(error),
        }
    }
}

/// Counters collected while ingesting.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub sources_ok: usize,
    pub failed: Vec<(String, SourceFetchError)>,
    pub lines_read: usize,
    pub lines_accepted: usize,
    pub hosts_added: usize,
}

impl IngestReport {
    pub fn sources_failed(&self) -> usize {
        self.failed.len()
    }
}

/// Feeds blocklist lines into a shared [`HostSet`].
pub struct BlocklistIngestor<'a> {
    hosts: &'a mut HostSet,
    report: IngestReport,
}

impl<'a> BlocklistIngestor<'a> {
    pub fn new(hosts: &'a mut HostSet) -> Self {
        Self {
            hosts,
            report: IngestReport::default(),
        }
    }

    /// Ingest one source. A failed source is recorded and skipped.
    pub fn ingest_source(&mut self, source: SourceLines) {
        let SourceLines { label, lines } = source;
        let lines = match lines {
            Ok(lines) => lines,
            Err(err) => {
                log::warn!("Skipping {}: {}", label, err);
                self.report.failed.push((label, err));
                return;
            }
        };

        let mut accepted = 0usize;
        let mut added = 0usize;
        for line in &lines {
            if let Some(hostname) = parse_hostname(line) {
                accepted += 1;
                if self.hosts.add(hostname) {
                    added += 1;
                }
            }
        }

        log::debug!(
            "{}: {} lines, {} hostnames, {} new",
            label,
            lines.len(),
            accepted,
            added
        );

        self.report.sources_ok += 1;
        self.report.lines_read += lines.len();
        self.report.lines_accepted += accepted;
        self.report.hosts_added += added;
    }

    /// Ingest sources in the given order.
    pub fn ingest<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = SourceLines>,
    {
        for source in sources {
            self.ingest_source(source);
        }
    }

    pub fn finish(self) -> IngestReport {
        self.report
    }
}

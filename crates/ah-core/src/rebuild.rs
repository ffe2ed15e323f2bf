//! One full pass over a hosts file, without any I/O.

use crate::hostset::Hostname;
use crate::ingest::{BlocklistIngestor, IngestReport, SourceLines};
use crate::region::{split, synthesize};

/// Output of [`rebuild`].
#[derive(Debug)]
pub struct Rebuild {
    /// Complete new hosts file content.
    pub content: Vec<u8>,
    pub report: IngestReport,
    pub preserved_lines: usize,
    /// The file had no sentinel line and one was written.
    pub sentinel_added: bool,
    /// Hostnames carried over from the previous managed region.
    pub previous_hosts: usize,
    /// Managed hostnames, sorted, as written.
    pub hosts: Vec<Hostname>,
}

/// Split `existing`, merge every source into its managed region and
/// synthesize the new file.
pub fn rebuild<I>(existing: &[u8], sources: I) -> Rebuild
where
    I: IntoIterator<Item = SourceLines>,
{
    let mut regions = split(existing);
    let previous_hosts = regions.hosts.len();

    let mut ingestor = BlocklistIngestor::new(&mut regions.hosts);
    ingestor.ingest(sources);
    let report = ingestor.finish();

    let sentinel_added = !regions.prefix.ends_with_sentinel();
    let hosts = regions.hosts.sorted_list();
    let content = synthesize(&regions.prefix, &hosts);

    log::debug!(
        "Rebuilt hosts file: {} preserved lines, {} managed hostnames ({} carried over)",
        regions.prefix.len(),
        hosts.len(),
        previous_hosts
    );

    Rebuild {
        content,
        report,
        preserved_lines: regions.prefix.len(),
        sentinel_added,
        previous_hosts,
        hosts,
    }
}

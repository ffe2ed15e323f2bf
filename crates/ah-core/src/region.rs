//! Preserved/managed regions of a hosts file.
//!
//! Everything up to and including the sentinel line belongs to the user and
//! is kept byte for byte, whatever its encoding. Everything after it is
//! regenerated.

use std::borrow::Cow;

use crate::grammar::{is_sentinel, parse_hostname, BLOCK_ADDRESS, SENTINEL_LINE};
use crate::hostset::{HostSet, Hostname};

/// The user-owned head of a hosts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreservedPrefix {
    /// Raw lines, each with its original terminator (the last may have none).
    lines: Vec<Vec<u8>>,
}

impl PreservedPrefix {
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn ends_with_sentinel(&self) -> bool {
        self.lines.last().is_some_and(|line| is_sentinel(&decode(line)))
    }
}

/// Result of splitting an existing hosts file.
#[derive(Debug, Clone, Default)]
pub struct Split {
    pub prefix: PreservedPrefix,
    /// Hostnames found in a previously written managed region.
    pub hosts: HostSet,
}

// Invalid UTF-8 only ever matters for classification; raw bytes are kept.
fn decode(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}

/// Separate `content` into the preserved prefix and the hostnames of the
/// managed region.
pub fn split(content: &[u8]) -> Split {
    let mut prefix = PreservedPrefix::default();
    let mut hosts = HostSet::new();
    let mut lines = content.split_inclusive(|&b| b == b'\n');

    for line in lines.by_ref() {
        prefix.lines.push(line.to_vec());
        if is_sentinel(&decode(line)) {
            break;
        }
    }

    let mut managed = 0usize;
    for line in lines {
        if let Some(hostname) = parse_hostname(&decode(line)) {
            hosts.add(hostname);
        }
        managed += 1;
    }

    log::debug!(
        "Split hosts file: {} preserved lines, {} managed lines, {} previous hostnames",
        prefix.lines.len(),
        managed,
        hosts.len()
    );

    Split { prefix, hosts }
}

/// Build the complete new hosts file.
///
/// `hosts` is expected to be sorted already (see [`HostSet::sorted_list`]).
pub fn synthesize(prefix: &PreservedPrefix, hosts: &[Hostname]) -> Vec<u8> {
    let body: usize = hosts.iter().map(|h| BLOCK_ADDRESS.len() + h.as_str().len() + 2).sum();
    let head: usize = prefix.lines.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(head + SENTINEL_LINE.len() + body + 1);

    for line in &prefix.lines {
        out.extend_from_slice(line);
    }

    let needs_sentinel = !prefix.ends_with_sentinel();
    if !out.is_empty() && !out.ends_with(b"\n") && (needs_sentinel || !hosts.is_empty()) {
        out.push(b'\n');
    }
    if needs_sentinel {
        out.extend_from_slice(SENTINEL_LINE.as_bytes());
    }

    for hostname in hosts {
        out.extend_from_slice(BLOCK_ADDRESS.as_bytes());
        out.push(b' ');
        out.extend_from_slice(hostname.as_str().as_bytes());
        out.push(b'\n');
    }

    out
}

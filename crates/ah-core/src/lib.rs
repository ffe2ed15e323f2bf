//! adhosts Core Library
//!
//! This crate maintains the managed part of a system hosts file. It knows how
//! to read hosts-file formatted text, deduplicate hostnames and rebuild the
//! file while leaving the user's own entries untouched.
//!
//! # Architecture
//!
//! A hosts file is split by a sentinel line into a preserved prefix and a
//! managed region. The managed region is regenerated on every run from the
//! previous managed entries plus every configured blocklist. Nothing in this
//! crate touches the network or the filesystem; transports and writers live
//! in the CLI.
//!
//! # Modules
//!
//! - `grammar`: hosts-file line grammar and the sentinel detector
//! - `hostset`: deduplicating hostname collection with sorted output
//! - `region`: splitting an existing file and synthesizing the new one
//! - `ingest`: feeding blocklist lines into a `HostSet`
//! - `sources`: source-list file parsing
//! - `paths`: hosts/config directory resolution interface
//! - `rebuild`: the whole split → ingest → synthesize pass
//! - `error`: error taxonomy

pub mod error;
pub mod grammar;
pub mod hostset;
pub mod ingest;
pub mod paths;
pub mod rebuild;
pub mod region;
pub mod sources;

// Re-export commonly used types
pub use error::{ConfigError, Error, PreconditionError, SourceFetchError};
pub use grammar::{is_sentinel, parse_hostname, BLOCK_ADDRESS, SENTINEL_LINE, SEPARATION_TAG};
pub use hostset::{HostSet, Hostname};
pub use ingest::{BlocklistIngestor, IngestReport, SourceLines};
pub use paths::{FixedPaths, HostPaths, PathResolver};
pub use rebuild::{rebuild, Rebuild};
pub use region::{split, synthesize, PreservedPrefix, Split};
pub use sources::{parse_source_list, SourceList, SourceLocation};

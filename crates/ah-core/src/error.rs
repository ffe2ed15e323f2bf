//! Error taxonomy.
//!
//! Configuration and precondition errors abort a run. Source fetch errors
//! only skip the source they belong to. Lines that do not parse are not
//! errors at all; the grammar simply rejects them.

use std::io;
use std::path::PathBuf;

/// Fatal: the run cannot be configured.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the hosts file location for platform '{0}'")]
    UnsupportedPlatform(String),
    #[error("No URLs found to download blocklists from")]
    NoSources,
}

/// Fatal: a file the run depends on could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
    #[error("Failed to read hosts file '{}': {source}", path.display())]
    HostsUnreadable { path: PathBuf, source: io::Error },
    #[error("Failed to read source list '{}': {source}", path.display())]
    SourceListUnreadable { path: PathBuf, source: io::Error },
    #[error("Failed to back up '{}' to '{}': {source}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Recoverable: one blocklist source could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum SourceFetchError {
    #[error("Failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
}

/// Any fatal error of a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::NoSources.into();
        assert!(matches!(err, Error::Config(ConfigError::NoSources)));
        assert_eq!(err.to_string(), "No URLs found to download blocklists from");
    }

    #[test]
    fn test_precondition_message_names_path() {
        let err = PreconditionError::HostsUnreadable {
            path: PathBuf::from("/etc/hosts"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/hosts"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_status_message() {
        let err = SourceFetchError::Status {
            url: "https://lists.example/hosts".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://lists.example/hosts responded with status 404");
    }
}

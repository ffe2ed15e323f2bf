//! Hosts and configuration directory resolution.
//!
//! The library never looks at the host platform. Callers hand it a
//! [`PathResolver`]; the CLI provides one that knows the platform layouts.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::sources::SOURCE_LIST_FILENAME;

pub const HOSTS_FILENAME: &str = "hosts";
pub const BACKUP_FILENAME: &str = "hosts.bak";

/// The two directories a run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    pub hosts_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl HostPaths {
    pub fn new(hosts_dir: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            hosts_dir: hosts_dir.into(),
            config_dir: config_dir.into(),
        }
    }

    pub fn hosts_file(&self) -> PathBuf {
        self.hosts_dir.join(HOSTS_FILENAME)
    }

    pub fn backup_file(&self) -> PathBuf {
        self.hosts_dir.join(BACKUP_FILENAME)
    }

    pub fn source_list(&self) -> PathBuf {
        self.config_dir.join(SOURCE_LIST_FILENAME)
    }
}

pub trait PathResolver {
    fn resolve(&self) -> Result<HostPaths, ConfigError>;
}

/// Resolver returning directories chosen up front.
#[derive(Debug, Clone)]
pub struct FixedPaths(HostPaths);

impl FixedPaths {
    pub fn new(hosts_dir: &Path, config_dir: &Path) -> Self {
        Self(HostPaths::new(hosts_dir, config_dir))
    }
}

impl PathResolver for FixedPaths {
    fn resolve(&self) -> Result<HostPaths, ConfigError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let paths = FixedPaths::new(Path::new("/etc"), Path::new("/usr/local/etc"))
            .resolve()
            .unwrap();
        assert_eq!(paths.hosts_file(), PathBuf::from("/etc/hosts"));
        assert_eq!(paths.backup_file(), PathBuf::from("/etc/hosts.bak"));
        assert_eq!(paths.source_list(), PathBuf::from("/usr/local/etc/adhosts.cfg"));
    }
}

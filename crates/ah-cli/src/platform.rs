use std::path::PathBuf;

use ah_core::{ConfigError, HostPaths, PathResolver};

/// Resolves the hosts and configuration directories from the host platform.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    os: String,
    windir: Option<String>,
}

impl PlatformPaths {
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            windir: std::env::var("windir").ok(),
        }
    }

    #[cfg(test)]
    fn with(os: &str, windir: Option<&str>) -> Self {
        Self {
            os: os.to_string(),
            windir: windir.map(str::to_string),
        }
    }
}

impl PathResolver for PlatformPaths {
    fn resolve(&self) -> Result<HostPaths, ConfigError> {
        match self.os.as_str() {
            "linux" | "macos" => Ok(HostPaths::new("/etc", "/etc")),
            "freebsd" => Ok(HostPaths::new("/etc", "/usr/local/etc")),
            "windows" => {
                let windir = self
                    .windir
                    .as_deref()
                    .filter(|dir| !dir.is_empty())
                    .ok_or_else(|| ConfigError::UnsupportedPlatform("windows (windir not set)".to_string()))?;
                let mut hosts_dir = PathBuf::from(windir);
                hosts_dir.extend(["system32", "drivers", "etc"]);
                Ok(HostPaths::new(hosts_dir, "C:\\"))
            }
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }
}

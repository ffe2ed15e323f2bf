use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use ah_core::{PreconditionError, SourceList};

/// Raw bytes of the hosts file; user content need not be UTF-8.
pub fn read_hosts(path: &Path) -> Result<Vec<u8>, PreconditionError> {
    fs::read(path).map_err(|source| PreconditionError::HostsUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy `hosts` to `backup` unless a backup already exists.
///
/// Returns `true` if a backup was written.
pub fn backup_once(hosts: &Path, backup: &Path) -> Result<bool, PreconditionError> {
    if backup.exists() {
        return Ok(false);
    }

    let err = |source: io::Error| PreconditionError::Backup {
        from: hosts.to_path_buf(),
        to: backup.to_path_buf(),
        source,
    };

    let mut input = fs::File::open(hosts).map_err(err)?;
    let mut output = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(backup)
        .map_err(err)?;
    io::copy(&mut input, &mut output).map_err(err)?;
    output.sync_all().map_err(err)?;
    Ok(true)
}

/// Replace the file at `path` with `content`.
///
/// The content goes to a temporary file next to `path` first, which is then
/// renamed over the original, so a failed write leaves the old file intact.
pub fn write_replace(path: &Path, content: &[u8]) -> Result<(), PreconditionError> {
    let err = |source: io::Error| PreconditionError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(err)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions()).map_err(err)?;
    }
    tmp.write_all(content).map_err(err)?;
    tmp.as_file().sync_all().map_err(err)?;
    tmp.persist(path).map_err(|e| err(e.error))?;
    Ok(())
}

/// Gather locations from every source-list file that exists.
pub fn load_source_lists(candidates: &[&Path], list: &mut SourceList) -> Result<(), PreconditionError> {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        let bytes = fs::read(path).map_err(|source| PreconditionError::SourceListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Reading ad-hosts from {}", path.display());
        let count = list.extend_from_text(&String::from_utf8_lossy(&bytes));
        log::debug!("{}: {} locations", path.display(), count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_is_created_once() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("hosts");
        let backup = dir.path().join("hosts.bak");
        fs::write(&hosts, "original\n").unwrap();

        assert!(backup_once(&hosts, &backup).unwrap());
        fs::write(&hosts, "changed\n").unwrap();
        assert!(!backup_once(&hosts, &backup).unwrap());
        assert_eq!(fs::read_to_string(&backup).unwrap(), "original\n");
    }

    #[test]
    fn test_backup_of_missing_hosts_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = backup_once(&dir.path().join("hosts"), &dir.path().join("hosts.bak")).unwrap_err();
        assert!(matches!(err, PreconditionError::Backup { .. }));
    }

    #[test]
    fn test_write_replace_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("hosts");
        fs::write(&hosts, "old content that is longer\n").unwrap();

        write_replace(&hosts, b"new\n").unwrap();
        assert_eq!(fs::read_to_string(&hosts).unwrap(), "new\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_replace_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("hosts");
        fs::write(&hosts, "old\n").unwrap();
        fs::set_permissions(&hosts, fs::Permissions::from_mode(0o644)).unwrap();

        write_replace(&hosts, b"new\n").unwrap();
        let mode = fs::metadata(&hosts).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_read_hosts_accepts_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("hosts");
        fs::write(&hosts, b"# caf\xe9 box\n10.0.0.1 nas\n").unwrap();
        assert_eq!(read_hosts(&hosts).unwrap(), b"# caf\xe9 box\n10.0.0.1 nas\n");
    }

    #[test]
    fn test_read_missing_hosts() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_hosts(&dir.path().join("hosts")).unwrap_err();
        assert!(matches!(err, PreconditionError::HostsUnreadable { .. }));
    }

    #[test]
    fn test_load_source_lists_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("adhosts.cfg");
        fs::write(&present, "https://a.example/hosts # ads\n").unwrap();
        let missing = dir.path().join("other.cfg");

        let mut list = SourceList::new();
        load_source_lists(&[missing.as_path(), present.as_path()], &mut list).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_load_source_list_with_latin1_comment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adhosts.cfg");
        fs::write(&path, b"# liste fran\xe7aise\nhttps://a.example/hosts\n").unwrap();

        let mut list = SourceList::new();
        load_source_lists(&[path.as_path()], &mut list).unwrap();
        assert_eq!(list.len(), 1);
    }
}

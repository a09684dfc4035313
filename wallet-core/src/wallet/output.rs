// wallet-core/src/wallet/output.rs
//
// Output guard + atomic write for the wallet artifact.
//
// The exists-check and the final rename are not atomic against other
// processes touching the same path; this is a single-shot CLI.

use crate::error::{WalletError, WalletResult};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Refuse to clobber an existing file unless `force`; create the parent
/// directory tree otherwise.
pub fn ensure_writable(path: &Path, force: bool) -> WalletResult<()> {
    let exists = path.try_exists().map_err(|e| WalletError::io(path, e))?;

    if exists {
        if !force {
            return Err(WalletError::Overwrite {
                path: path.to_path_buf(),
            });
        }
        tracing::warn!(path = %path.display(), "overwriting existing wallet file");
    }

    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|e| WalletError::io(dir, e))?;
    Ok(())
}

/// Write `contents` to a temp file beside `path`, then rename it into place.
///
/// A failure before the rename leaves any existing file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> WalletResult<()> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| WalletError::io(dir, e))?;

    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| WalletError::io(tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| WalletError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote wallet file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("outputs").join("wallet").join("wallet.json");

        ensure_writable(&target, false).unwrap();
        assert!(target.parent().unwrap().is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("wallet.json");
        fs::write(&target, "original").unwrap();

        let err = ensure_writable(&target, false).unwrap_err();
        assert_eq!(
            err,
            WalletError::Overwrite {
                path: target.clone()
            }
        );
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_existing_file_with_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("wallet.json");
        fs::write(&target, "original").unwrap();

        ensure_writable(&target, true).unwrap();
        write_atomic(&target, "{\"replaced\":true}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{\"replaced\":true}");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("wallet.json");
        write_atomic(&target, "{}").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("wallet.json");
        write_atomic(&target, "{}").unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn test_parent_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("wallet.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("a/b.json")), Path::new("a"));
    }
}

//! Filesystem walker for enumerating regular files under a root

use crate::error::StorageError;
use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

/// Recursive enumerator of every regular file under a root directory.
///
/// Hidden files are included; there is no name-based filtering here.
/// Directories and non-regular entries (sockets, devices) are excluded.
/// Symlinks are not followed.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Enumerate all regular files under the root, sorted by path.
    ///
    /// Fails with `NotADirectory` before returning any entries if the root
    /// is missing or not a directory. Entries that cannot be read during
    /// traversal (e.g. an unreadable subdirectory) are skipped with a
    /// warning; only the root check is fatal.
    pub fn list_files(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.root.is_dir() {
            return Err(StorageError::NotADirectory(self.root.clone()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            // file_type() is the symlink-aware type: symlinks and special
            // files fall through here along with directories.
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }

        // Sort for determinism across runs and platforms.
        files.sort();

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walker_collects_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::write(root.join("file1.txt"), "content1").unwrap();
        fs::create_dir_all(root.join("a").join("b")).unwrap();
        fs::write(root.join("a").join("b").join("deep.txt"), "deep").unwrap();

        let walker = Walker::new(root);
        let files = walker.list_files().unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("file1.txt")));
        assert!(files.iter().any(|p| p.ends_with("deep.txt")));
    }

    #[test]
    fn test_walker_excludes_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::create_dir(root.join("empty_dir")).unwrap();
        fs::write(root.join("file.txt"), "content").unwrap();

        let walker = Walker::new(root);
        let files = walker.list_files().unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("file.txt"));
    }

    #[test]
    fn test_walker_includes_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::write(root.join(".hidden"), "secret").unwrap();
        fs::create_dir(root.join(".config")).unwrap();
        fs::write(root.join(".config").join("settings"), "data").unwrap();

        let walker = Walker::new(root);
        let files = walker.list_files().unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walker_result_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::write(root.join("z_file.txt"), "content").unwrap();
        fs::write(root.join("a_file.txt"), "content").unwrap();
        fs::write(root.join("m_file.txt"), "content").unwrap();

        let walker = Walker::new(root);
        let files = walker.list_files().unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_walker_missing_root_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");

        let walker = Walker::new(missing.clone());
        match walker.list_files() {
            Err(StorageError::NotADirectory(p)) => assert_eq!(p, missing),
            other => panic!("expected NotADirectory, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_walker_file_root_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let walker = Walker::new(file);
        assert!(matches!(
            walker.list_files(),
            Err(StorageError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_skips_non_regular_entries() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::write(root.join("real.txt"), "content").unwrap();
        symlink(root.join("real.txt"), root.join("link.txt")).unwrap();

        let walker = Walker::new(root);
        let files = walker.list_files().unwrap();

        // The symlink is not followed and not reported as a file.
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.txt"));
    }
}

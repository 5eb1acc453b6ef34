//! Directory listing.
//!
//! [`list`] is what the browser uses: it never fails and always returns
//! entries with directories first. [`read_directory`] is the strict,
//! unsorted primitive underneath it.

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Reads the immediate children of a directory.
///
/// The returned entries are **unsorted**. Symlinks are classified by their
/// target; a dangling link is listed as the link itself. Children whose
/// metadata cannot be read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<Entry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let entries = read_dir
        .filter_map(Result::ok)
        .filter_map(|dir_entry| {
            let path = dir_entry.path();
            let metadata = std::fs::metadata(&path)
                .or_else(|_| dir_entry.metadata())
                .ok()?;
            Some(Entry::new(path, &metadata))
        })
        .collect();

    Ok(entries)
}

/// Lists `path` with directories first, each group sorted by name
/// case-insensitively.
///
/// Missing, unreadable, or non-directory paths yield an empty list. The
/// listing is display-only, so the failure is logged rather than returned.
///
/// # Examples
///
/// ```no_run
/// use sdbrowse_core::list;
/// use std::path::Path;
///
/// for entry in list(Path::new("/sdcard")) {
///     println!("{}{}", entry.name(), if entry.is_dir() { "/" } else { "" });
/// }
/// ```
pub fn list(path: &Path) -> Vec<Entry> {
    match read_directory(path) {
        Ok(entries) => {
            tracing::debug!(path = %path.display(), count = entries.len(), "listed directory");
            sort_entries(&entries)
        }
        Err(CoreError::NotFound(_)) | Err(CoreError::NotADirectory(_)) => {
            tracing::debug!(path = %path.display(), "not a listable directory");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "directory unreadable: {e}");
            Vec::new()
        }
    }
}

/// Returns a new vec with directories before files, each partition sorted
/// by lowercase name.
///
/// The sort is stable: names that compare equal ignoring case keep their
/// input order.
pub fn sort_entries(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(compare_entries);
    sorted
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::name).collect()
    }

    #[test]
    fn read_directory_lists_children() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("Music")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn read_directory_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Download")).unwrap();
        fs::write(tmp.path().join("Download").join("inner.pdf"), "").unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(names(&entries), vec!["Download"]);
    }

    #[test]
    fn read_directory_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = read_directory(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn read_directory_on_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let err = read_directory(&file).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[test]
    fn list_puts_directories_first_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("A")).unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("B")).unwrap();

        let entries = list(tmp.path());
        assert_eq!(names(&entries), vec!["A", "B", "a.txt", "b.txt"]);
    }

    #[test]
    fn list_mixed_case_names_sort_ignoring_case() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zeta.md"), "").unwrap();
        fs::write(tmp.path().join("Alpha.md"), "").unwrap();
        fs::write(tmp.path().join("beta.md"), "").unwrap();
        fs::create_dir(tmp.path().join("pictures")).unwrap();
        fs::create_dir(tmp.path().join("Documents")).unwrap();

        let entries = list(tmp.path());
        assert_eq!(
            names(&entries),
            vec!["Documents", "pictures", "Alpha.md", "beta.md", "zeta.md"]
        );
    }

    #[test]
    fn list_missing_path_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(list(&tmp.path().join("does-not-exist")).is_empty());
    }

    #[test]
    fn list_file_path_is_empty() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("readme.txt");
        fs::write(&file, "").unwrap();
        assert!(list(&file).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn list_symlinked_directory_sorts_with_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("Alias")).unwrap();

        let entries = list(tmp.path());
        assert_eq!(names(&entries), vec!["Alias", "real", "a.txt"]);
        assert!(entries[0].is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn list_keeps_dangling_symlink_as_file() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("broken")).unwrap();

        let entries = list(tmp.path());
        assert_eq!(names(&entries), vec!["broken"]);
        assert!(!entries[0].is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn list_unreadable_directory_is_empty() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores the mode bits.
        let readable = fs::read_dir(&locked).is_ok();
        let entries = list(&locked);
        let strict = read_directory(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        assert!(entries.is_empty());
        assert!(matches!(strict, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn list_empty_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(list(tmp.path()).is_empty());
    }

    #[test]
    fn list_includes_hidden_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".nomedia"), "").unwrap();
        assert_eq!(names(&list(tmp.path())), vec![".nomedia"]);
    }

    #[test]
    fn sort_is_stable_for_case_only_duplicates() {
        let entries = vec![
            Entry::from_parts(PathBuf::from("/r/README"), false),
            Entry::from_parts(PathBuf::from("/r/docs"), true),
            Entry::from_parts(PathBuf::from("/r/Readme"), false),
            Entry::from_parts(PathBuf::from("/r/DOCS"), true),
            Entry::from_parts(PathBuf::from("/r/readme"), false),
        ];

        let sorted = sort_entries(&entries);
        assert_eq!(
            names(&sorted),
            vec!["docs", "DOCS", "README", "Readme", "readme"]
        );
    }

    #[test]
    fn sort_partitions_every_directory_before_every_file() {
        let entries: Vec<Entry> = ["z", "y", "x", "w", "v", "u"]
            .iter()
            .enumerate()
            .map(|(i, n)| Entry::from_parts(PathBuf::from("/r").join(n), i % 2 == 0))
            .collect();

        let sorted = sort_entries(&entries);
        let first_file = sorted.iter().position(|e| !e.is_dir()).unwrap();
        assert!(sorted[..first_file].iter().all(Entry::is_dir));
        assert!(sorted[first_file..].iter().all(|e| !e.is_dir()));
        assert_eq!(names(&sorted), vec!["v", "x", "z", "u", "w", "y"]);
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let entries = vec![
            Entry::from_parts(PathBuf::from("/r/b"), false),
            Entry::from_parts(PathBuf::from("/r/a"), false),
        ];
        let _ = sort_entries(&entries);
        assert_eq!(names(&entries), vec!["b", "a"]);
    }
}

//! Entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single file or directory as displayed in the listing.
///
/// `Entry` is an immutable snapshot taken at listing time. It has no
/// identity beyond its path and is recreated on every listing.
///
/// # Examples
///
/// ```no_run
/// use sdbrowse_core::Entry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = Entry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_hidden: bool,
}

impl Entry {
    /// Creates a new `Entry` from a path and its metadata.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        Self::from_parts(path, metadata.is_dir())
    }

    /// Creates an `Entry` without touching the filesystem.
    ///
    /// The name is the NFC-normalised last path component. Hidden entries
    /// are detected by a leading `.`.
    pub fn from_parts(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_hidden = name.starts_with('.');

        Self {
            path,
            name,
            is_dir,
            is_hidden,
        }
    }

    /// Returns the absolute path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("notes.txt");
        fs::write(&file_path, "hello").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = Entry::new(file_path.clone(), &metadata);

        assert_eq!(entry.name(), "notes.txt");
        assert!(!entry.is_dir());
        assert!(!entry.is_hidden());
        assert_eq!(entry.path(), file_path);
    }

    #[test]
    fn entry_from_directory() {
        let tmp = TempDir::new().unwrap();
        let dir_path = tmp.path().join("DCIM");
        fs::create_dir(&dir_path).unwrap();

        let metadata = fs::metadata(&dir_path).unwrap();
        let entry = Entry::new(dir_path, &metadata);

        assert_eq!(entry.name(), "DCIM");
        assert!(entry.is_dir());
    }

    #[test]
    fn entry_hidden_directory() {
        let entry = Entry::from_parts(PathBuf::from("/sdcard/.thumbnails"), true);
        assert!(entry.is_hidden());
        assert!(entry.is_dir());
        assert_eq!(entry.name(), ".thumbnails");
    }

    #[test]
    fn entry_unicode_name_is_nfc() {
        // "é" as e + combining acute accent
        let decomposed = "caf\u{0065}\u{0301}.txt";
        let entry = Entry::from_parts(PathBuf::from("/sdcard").join(decomposed), false);
        assert_eq!(entry.name(), "caf\u{00e9}.txt");
    }

    #[test]
    fn entry_root_path_has_empty_name() {
        let entry = Entry::from_parts(PathBuf::from("/"), true);
        assert_eq!(entry.name(), "");
        assert!(!entry.is_hidden());
    }

    #[test]
    fn entry_clone_and_eq() {
        let a = Entry::from_parts(PathBuf::from("/sdcard/Music"), true);
        let b = a.clone();
        assert_eq!(a, b);
    }
}

//! Single-directory listing

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a listed entry, decided by following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display name (lossy for names that are not valid UTF-8).
    pub name: String,
    /// Full path, built from the raw OS name so recursion still works.
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the entries of `path`, sorted case-insensitively by name.
///
/// An empty directory yields `Ok(vec![])`; a directory that cannot be opened
/// yields the underlying error so the caller can decide how to show it.
/// Individual entries that fail mid-iteration are skipped.
pub fn list_directory(path: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries: Vec<DirectoryEntry> = fs::read_dir(path)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry in '{}': {}", path.display(), e);
                None
            }
        })
        .map(|entry| {
            let path = entry.path();
            let kind = entry_kind(&entry, &path);
            DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                kind,
            }
        })
        .collect();

    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(entries)
}

/// Classify an entry, following symlinks.
///
/// A dangling link is a file. A link that exists but cannot be resolved
/// (a cycle past the OS hop limit, a target behind a locked directory) is a
/// directory, so its failed listing goes through the walker's listing mode.
fn entry_kind(entry: &fs::DirEntry, path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        Ok(_) => EntryKind::File,
        Err(e) if e.kind() != io::ErrorKind::NotFound && is_symlink(entry) => {
            log::debug!("cannot resolve link '{}': {}", path.display(), e);
            EntryKind::Directory
        }
        Err(_) => EntryKind::File,
    }
}

fn is_symlink(entry: &fs::DirEntry) -> bool {
    entry.file_type().map(|t| t.is_symlink()).unwrap_or(false)
}

/// Case-insensitive name order, ties broken by the original bytes so the
/// result never depends on the filesystem's native ordering.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

//! Chapter discovery and reading order.
//!
//! Directory listings come back in whatever order the filesystem likes, so
//! chapters are never taken in listing order. Instead each chapter file is
//! expected to carry a numeric prefix (`01-intro.md`, `2_setup.md`, `10.md`)
//! and chapters are sorted by that number, then by name. Files without a
//! prefix still build but go after every numbered chapter, sorted by name.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Leading decimal digits of a file name, if there are any.
pub fn numeric_prefix(name: &str) -> Option<&str> {
    let end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    (end > 0).then(|| &name[..end])
}

/// Compare two digit strings by numeric value, without limiting their size.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Compare two chapter file names for reading order.
pub fn compare_chapters(a: &str, b: &str) -> Ordering {
    match (numeric_prefix(a), numeric_prefix(b)) {
        (Some(na), Some(nb)) => compare_numbers(na, nb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort chapter paths into reading order by their file names.
pub fn sort_chapters(files: &mut [PathBuf]) {
    files.sort_by(|a, b| compare_chapters(&file_name(a), &file_name(b)));
}

/// List the chapter files in `dir` in reading order.
///
/// Only regular, non-hidden files are considered chapters.
pub fn list_chapters(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| Error::ChapterRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::default();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_file() || file_name(&path).starts_with('.') {
            continue;
        }
        files.push(path);
    }

    sort_chapters(&mut files);

    for path in files.iter() {
        if numeric_prefix(&file_name(path)).is_none() {
            log::warn!(
                "chapter {} has no numeric prefix, it will be placed after the numbered chapters",
                path.display()
            );
        }
    }

    Ok(files)
}

// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and ordering manga pages.
//!
//! A scan walks the base directory recursively, keeps files whose extension
//! matches the configured pattern, and orders them by the first number found
//! in each path. The numeric ordering is all-or-nothing: as soon as one path
//! has no usable number, the whole list keeps its traversal order.

use crate::config::ScanConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Ordered list of pages with a wrapping cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageList {
    pages: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl PageList {
    /// Creates a new empty PageList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the page list for `path`.
    ///
    /// A directory is scanned directly and the cursor starts on the first page.
    /// A file is scanned through its parent directory and the cursor starts on
    /// that file; if the file is not one of the matching pages the cursor falls
    /// back to the first page.
    pub fn open(path: &Path, scan: &ScanConfig) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let (base, selected) = if metadata.is_dir() {
            (path.to_path_buf(), None)
        } else {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            // Scanned paths are `base/<name>`, so match against that form.
            let selected = path.file_name().map(|name| parent.join(name));
            (parent.to_path_buf(), selected)
        };

        let mut pages = scan_pages(&base, scan)?;
        sort_by_leading_number(&mut pages, &base);

        let current_index = if pages.is_empty() {
            None
        } else {
            match selected {
                Some(file) => match pages.iter().position(|p| *p == file) {
                    Some(idx) => Some(idx),
                    None => {
                        log::warn!(
                            "{} is not an image page, starting at the first page",
                            file.display()
                        );
                        Some(0)
                    }
                },
                None => Some(0),
            }
        };

        Ok(Self {
            pages,
            current_index,
        })
    }

    /// Builds a list from already ordered pages, cursor on the first one.
    pub fn from_pages(pages: Vec<PathBuf>) -> Self {
        let current_index = if pages.is_empty() { None } else { Some(0) };
        Self {
            pages,
            current_index,
        }
    }

    /// Moves the cursor by `step` pages, wrapping past either end.
    ///
    /// Returns the new current page, or `None` (and does nothing) when the
    /// list is empty.
    pub fn advance(&mut self, step: i32) -> Option<&Path> {
        let len = self.pages.len();
        if len == 0 {
            return None;
        }

        let current = self.current_index.unwrap_or(0) as i64;
        let next = (current + i64::from(step)).rem_euclid(len as i64) as usize;
        self.current_index = Some(next);
        self.current()
    }

    /// Returns the current page path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.pages.get(idx))
            .map(|p| p.as_path())
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.pages.get(index).map(|p| p.as_path())
    }

    pub fn pages(&self) -> &[PathBuf] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Recursively collects files under `base` whose extension matches the
/// configured pattern. Entries are visited in file-name order within each
/// directory.
pub fn scan_pages(base: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(base)
        .follow_links(scan.follow_links)
        .sort_by_file_name()
    {
        let entry = entry?;
        // Symlinked directories are only walked with `follow_links`, but a
        // symlink to a file is always a page candidate.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file
            && matches_extension_pattern(entry.path(), &scan.extension_pattern)
        {
            pages.push(entry.into_path());
        }
    }

    Ok(pages)
}

/// Checks a path's extension against `pattern`, where `?` matches any single
/// character. Comparison is case-insensitive and covers the whole extension.
pub fn matches_extension_pattern(path: &Path, pattern: &str) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };

    let ext: Vec<char> = ext.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    ext.len() == pattern.len()
        && ext.iter().zip(&pattern).all(|(e, p)| {
            *p == '?' || e.to_lowercase().eq(p.to_lowercase())
        })
}

/// Sorts pages by the first run of digits in each path (relative to `base`).
///
/// The sort is stable, so equal numbers keep their scan order. If any path
/// has no digits, or a number too large to parse, `pages` is left untouched.
pub fn sort_by_leading_number(pages: &mut [PathBuf], base: &Path) {
    let keys: Option<Vec<u64>> = pages
        .iter()
        .map(|page| leading_number(page.strip_prefix(base).unwrap_or(page)))
        .collect();

    let Some(keys) = keys else {
        log::debug!("page numbers unavailable, keeping scan order");
        return;
    };

    let mut keyed: Vec<(u64, PathBuf)> = keys
        .into_iter()
        .zip(pages.iter_mut().map(std::mem::take))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);

    for (slot, (_, page)) in pages.iter_mut().zip(keyed) {
        *slot = page;
    }
}

/// Parses the first run of ASCII digits in `path`.
pub fn leading_number(path: &Path) -> Option<u64> {
    let text = path.to_string_lossy();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = text[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    digits.parse().ok()
}

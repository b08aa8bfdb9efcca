//! Recursive collection of C sources from a directory tree.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::ScanError;

use super::SourceMap;

/// Collects every `.c` file under `root` into a path-keyed map.
///
/// Contents are decoded leniently: invalid UTF-8 bytes become replacement
/// characters instead of aborting the scan. Entries that cannot be walked
/// or read are skipped with a warning; only a missing or unreadable root
/// is fatal.
pub fn collect_sources(root: &Path) -> Result<SourceMap, ScanError> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::MissingRoot {
                path: root.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ScanError::Unreadable {
                path: root.to_path_buf(),
                source,
            });
        }
    };
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut sources = SourceMap::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!("skipping unwalkable entry: {error}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.path().extension().map_or(false, |ext| ext == "c") {
            continue;
        }
        match fs::read(entry.path()) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                sources.insert(entry.path().to_string_lossy().into_owned(), text);
            }
            Err(error) => {
                tracing::warn!(
                    "skipping unreadable file {}: {error}",
                    entry.path().display()
                );
            }
        }
    }
    Ok(sources)
}

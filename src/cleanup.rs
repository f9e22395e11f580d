use log::Level;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::logging::RunLog;
use crate::utils::is_dir_empty;

/// Removes every empty directory below `root`, deepest first, so a parent that only
/// held empty children goes in the same pass. `root` itself is kept. Returns the
/// number of directories removed.
pub fn remove_empty_dirs(root: &Path, log: &RunLog) -> usize {
    if !root.is_dir() {
        return 0;
    }

    let mut removed = 0;
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log.file_only(Level::Warn, format!("Skipping unreadable entry: {err}"));
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        match is_dir_empty(path) {
            Ok(true) => match fs::remove_dir(path) {
                Ok(()) => {
                    removed += 1;
                    log.debug(format!("Removed empty directory: {}", path.display()));
                }
                Err(err) => log.file_only(
                    Level::Warn,
                    format!("Failed to remove directory {}: {err}", path.display()),
                ),
            },
            Ok(false) => {}
            Err(err) => log.file_only(
                Level::Warn,
                format!("Failed to inspect directory {}: {err}", path.display()),
            ),
        }
    }

    removed
}

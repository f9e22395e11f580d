use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FsbextError, Result};
use crate::logging::RunLog;
use crate::utils::format_gib;

/// Total size in bytes of all regular files below `dir`. A missing directory is empty.
pub fn dir_size(dir: &Path) -> Result<u64> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut size = 0;
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            size += entry.metadata()?.len();
        }
    }
    Ok(size)
}

pub fn estimate_required_space(input_dir: &Path, compression_ratio: f64) -> Result<u64> {
    let input_size = dir_size(input_dir)?;
    Ok((input_size as f64 * compression_ratio) as u64)
}

/// Free bytes on the filesystem that holds `output_dir`. The output directory is
/// usually created later in the run, so the closest existing ancestor is asked instead.
pub fn available_space(output_dir: &Path) -> Result<u64> {
    let probe = nearest_existing(output_dir);
    Ok(fs2::available_space(probe)?)
}

fn nearest_existing(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|candidate| !candidate.as_os_str().is_empty() && candidate.exists())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Warns when the estimated output size exceeds the free space at the output
/// directory. Never fails the run. Returns whether enough space is available.
pub fn check_disk_space(input_dir: &Path, output_dir: &Path, compression_ratio: f64, log: &RunLog) -> bool {
    let required = match estimate_required_space(input_dir, compression_ratio) {
        Ok(required) => required,
        Err(err) => {
            log.warn(format!("Could not estimate the size of {}: {err}", input_dir.display()));
            return true;
        }
    };
    let available = match available_space(output_dir) {
        Ok(available) => available,
        Err(err) => {
            log.warn(format!("Could not query free disk space for {}: {err}", output_dir.display()));
            return true;
        }
    };

    log.debug(format!(
        "Estimated output size: {} (ratio {compression_ratio}), free space: {}",
        format_gib(required),
        format_gib(available)
    ));

    if available < required {
        log.warn(format!(
            "Possibly insufficient disk space. Required: {}, available: {}",
            format_gib(required),
            format_gib(available)
        ));
        return false;
    }
    true
}

pub fn verify_decoder(decoder_path: &Path) -> Result<()> {
    if decoder_path.is_file() {
        Ok(())
    } else {
        Err(FsbextError::DecoderNotFound(decoder_path.to_path_buf()))
    }
}

pub fn describe_host() -> String {
    format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH)
}

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logging::RunLog;

pub const BANK_EXTENSION: &str = "bank";

const BANK_MAGICS: [&[u8; 4]; 2] = [b"RIFF", b"FSB5"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankFile {
    pub path: PathBuf,
    /// File name, lossily converted when it is not valid UTF-8.
    pub name: String,
    pub stem: String,
}

impl BankFile {
    /// `None` only for paths without a file name, such as `..`.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        Some(Self { path, name, stem })
    }
}

/// Lists the `.bank` files directly inside `input_dir`, in no particular order.
/// A missing input directory is created and yields no files, as does an input path
/// that is not a directory.
pub fn discover_bank_files(input_dir: &Path, log: &RunLog) -> Result<Vec<BankFile>> {
    if input_dir.exists() && !input_dir.is_dir() {
        log.warn(format!(
            "Input path {} is not a directory",
            input_dir.display()
        ));
        return Ok(Vec::new());
    }
    if !input_dir.exists() {
        if let Err(err) = fs::create_dir_all(input_dir) {
            log.warn(format!(
                "Failed to create input directory {}: {err}",
                input_dir.display()
            ));
            return Ok(Vec::new());
        }
        log.warn(format!(
            "Input directory {} not found - rebuilding",
            input_dir.display()
        ));
        return Ok(Vec::new());
    }

    let banks = fs::read_dir(input_dir)?
        .filter_map(|res| res.ok())
        .map(|dir_entry| dir_entry.path())
        .filter(|path| path.is_file() && is_bank_extension(path))
        .filter_map(BankFile::from_path)
        .collect::<Vec<_>>();

    Ok(banks)
}

fn is_bank_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(BANK_EXTENSION))
}

/// Checks the first four bytes for a RIFF or FSB5 signature.
pub fn has_bank_header(path: &Path) -> std::io::Result<bool> {
    let mut header = [0u8; 4];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => Ok(BANK_MAGICS.iter().any(|magic| **magic == header)),
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err),
    }
}

use log::Level;
use std::fs;
use std::path::Path;

use crate::classify::{classify, Category};
use crate::decoder::{BankDecoder, DecodeStatus};
use crate::discovery::{has_bank_header, BankFile};
use crate::logging::RunLog;
use crate::utils::{count_files, is_dir_empty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// The decoder exited cleanly and left `files` waveforms behind.
    Extracted { files: usize },
    /// The decoder exited cleanly but produced nothing.
    Empty,
    Failed { reason: String },
    Skipped { reason: String },
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Extracted { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub extracted_files: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ExtractionReport {
    fn record(&mut self, result: &ExtractionResult) {
        self.attempted += 1;
        match result {
            ExtractionResult::Extracted { files } => {
                self.succeeded += 1;
                self.extracted_files += files;
            }
            ExtractionResult::Empty | ExtractionResult::Failed { .. } => self.failed += 1,
            ExtractionResult::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Creates the `Music`, `SFX` and `Other` folders below `output_dir`.
pub fn create_category_dirs(output_dir: &Path, log: &RunLog) {
    for category in Category::ALL {
        let dir = output_dir.join(category.folder_name());
        match fs::create_dir_all(&dir) {
            Ok(()) => log.debug(format!("Created {category} directory {}", dir.display())),
            Err(err) => log.warn(format!("Failed to create directory {}: {err}", dir.display())),
        }
    }
}

pub fn extract_all(
    banks: &[BankFile],
    output_dir: &Path,
    decoder: &dyn BankDecoder,
    log: &RunLog,
) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for (index, bank) in banks.iter().enumerate() {
        let result = extract_bank(bank, output_dir, decoder, log);
        log.console(format!(
            "Processing file {} of {}: {}: {}\n",
            index + 1,
            banks.len(),
            bank.path.display(),
            if result.is_success() { "OK" } else { "FAIL" }
        ));
        if let ExtractionResult::Failed { reason } | ExtractionResult::Skipped { reason } = &result {
            log.debug(format!("{} was not extracted: {reason}", bank.stem));
        }
        report.record(&result);
    }

    report
}

/// Decodes a single bank into its category folder. Failures are logged and returned,
/// never propagated, so one broken bank does not stop the run.
pub fn extract_bank(
    bank: &BankFile,
    output_dir: &Path,
    decoder: &dyn BankDecoder,
    log: &RunLog,
) -> ExtractionResult {
    match has_bank_header(&bank.path) {
        Ok(true) => {}
        Ok(false) => {
            log.file_only(Level::Warn, format!("Invalid bank file: {}", bank.path.display()));
            return ExtractionResult::Skipped {
                reason: "unrecognised bank header".to_string(),
            };
        }
        Err(err) => {
            log.file_only(
                Level::Warn,
                format!("Failed to read bank file {}: {err}", bank.path.display()),
            );
            return ExtractionResult::Skipped {
                reason: err.to_string(),
            };
        }
    }

    let bank_dir = classify(&bank.name).under(output_dir);
    if let Err(err) = fs::create_dir_all(&bank_dir) {
        log.file_only(
            Level::Error,
            format!("Failed to create or access directory {}: {err}", bank_dir.display()),
        );
        return ExtractionResult::Skipped {
            reason: err.to_string(),
        };
    }
    log.debug(format!("Created output directory {}", bank_dir.display()));

    let result = match decoder.decode(&bank.path, &bank_dir) {
        Ok(DecodeStatus::Success) => match count_files(&bank_dir) {
            Ok(0) => {
                log.file_only(Level::Warn, format!("No files were extracted to {}", bank_dir.display()));
                ExtractionResult::Empty
            }
            Ok(files) => {
                log.file_only(
                    Level::Info,
                    format!(
                        "Extracted {files} file(s) from {} to {}",
                        bank.path.display(),
                        bank_dir.display()
                    ),
                );
                ExtractionResult::Extracted { files }
            }
            Err(err) => {
                log.file_only(
                    Level::Error,
                    format!("Error counting files in {}: {err}", bank_dir.display()),
                );
                ExtractionResult::Failed {
                    reason: err.to_string(),
                }
            }
        },
        Ok(DecodeStatus::Failed(code)) => {
            let reason = match code {
                Some(code) => format!("decoder exited with status {code}"),
                None => "decoder was terminated by a signal".to_string(),
            };
            log.file_only(
                Level::Warn,
                format!("Failed to extract {}: {reason}", bank.path.display()),
            );
            ExtractionResult::Failed { reason }
        }
        Err(err) => {
            log.file_only(
                Level::Error,
                format!("Failed to run decoder on {}: {err}", bank.path.display()),
            );
            ExtractionResult::Failed {
                reason: err.to_string(),
            }
        }
    };

    remove_if_empty(&bank_dir, log);
    result
}

fn remove_if_empty(dir: &Path, log: &RunLog) {
    match is_dir_empty(dir) {
        Ok(true) => match fs::remove_dir(dir) {
            Ok(()) => log.debug(format!("Removed empty directory {}", dir.display())),
            Err(err) => log.file_only(
                Level::Warn,
                format!("Failed to remove directory {}: {err}", dir.display()),
            ),
        },
        Ok(false) => {}
        Err(err) => log.file_only(
            Level::Warn,
            format!("Failed to inspect directory {}: {err}", dir.display()),
        ),
    }
}

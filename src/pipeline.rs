use log::Level;

use crate::cleanup::remove_empty_dirs;
use crate::config::RunConfig;
use crate::decoder::BankDecoder;
use crate::discovery::discover_bank_files;
use crate::environment::{check_disk_space, verify_decoder};
use crate::error::Result;
use crate::extract::{create_category_dirs, extract_all, ExtractionReport};
use crate::logging::RunLog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub report: ExtractionReport,
    pub removed_dirs: usize,
    pub enough_disk_space: bool,
}

/// Runs the environment check, discovery, extraction and cleanup stages in order.
///
/// Only a missing decoder aborts the run. Everything else is logged and the run
/// carries on, or stops early without error when there is nothing to extract.
pub fn run(config: &RunConfig, decoder: &dyn BankDecoder, log: &RunLog) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if let Err(err) = verify_decoder(&config.decoder_path) {
        log.error(&err);
        return Err(err);
    }
    log.debug(format!("Using decoder {}", config.decoder_path.display()));

    summary.enough_disk_space = check_disk_space(
        &config.input_dir,
        &config.output_dir,
        config.compression_ratio,
        log,
    );

    log.file_only(Level::Info, format!("Input directory: {}", config.input_dir.display()));
    log.file_only(Level::Info, format!("Output directory: {}", config.output_dir.display()));

    let banks = discover_bank_files(&config.input_dir, log)?;
    summary.discovered = banks.len();
    if banks.is_empty() {
        log.warn("No sound banks found in input directory");
        return Ok(summary);
    }
    log.info(format!("Found {} sound bank(s) in input directory", banks.len()));

    create_category_dirs(&config.output_dir, log);
    summary.report = extract_all(&banks, &config.output_dir, decoder, log);

    if summary.report.succeeded > 0 {
        log.info(format!(
            "Successfully extracted {} bank file(s) ({} audio file(s))",
            summary.report.succeeded, summary.report.extracted_files
        ));
    } else {
        log.warn("No sound banks were extracted");
    }
    if summary.report.failed + summary.report.skipped > 0 {
        log.info(format!(
            "{} bank file(s) failed and {} were skipped, see {} for details",
            summary.report.failed,
            summary.report.skipped,
            config.log_file.display()
        ));
    }

    summary.removed_dirs = remove_empty_dirs(&config.output_dir, log);
    Ok(summary)
}

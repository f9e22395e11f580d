mod classify;
mod cleanup;
mod cli;
mod config;
mod decoder;
mod discovery;
mod environment;
mod error;
mod extract;
mod logging;
mod pipeline;
mod utils;

#[cfg(test)]
mod tests;

use anyhow::Context;
use log::Level;
use crate::cli::get_cli;
use crate::config::{version_string, RunConfig};
use crate::decoder::ExternalDecoder;
use crate::environment::describe_host;
use crate::error::{FsbextError, Result};
use crate::logging::RunLog;
use crate::pipeline::{run, RunSummary};

const BANNER_PADDING: &str = "==========";

pub const EXIT_OK: i32 = 0;
pub const EXIT_DECODER_MISSING: i32 = 1;
pub const EXIT_RUN_FAILED: i32 = 2;

fn main() {
    let config = get_cli().into_config();

    if let Some(code) = version_exit(&config) {
        println!("{}", version_string());
        std::process::exit(code);
    }

    let log = match RunLog::open(&config.log_file, config.verbose)
        .context("cannot start logging for this run")
    {
        Ok(log) => log,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(EXIT_RUN_FAILED);
        }
    };
    log.info(format!("{BANNER_PADDING} {} {BANNER_PADDING}", version_string()));
    log.file_only(Level::Info, format!("Operating system: {}", describe_host()));

    let decoder = ExternalDecoder::new(&config.decoder_path);
    let outcome = run(&config, &decoder, &log);
    match &outcome {
        Ok(summary) => log.file_only(
            Level::Info,
            format!(
                "Discovered {} bank(s), attempted {}, failed {}, skipped {}, removed {} empty folder(s), disk space check {}",
                summary.discovered,
                summary.report.attempted,
                summary.report.failed,
                summary.report.skipped,
                summary.removed_dirs,
                if summary.enough_disk_space { "passed" } else { "warned" }
            ),
        ),
        // Already logged by the pipeline.
        Err(FsbextError::DecoderNotFound(_)) => {}
        Err(err) => log.error(format!("Run aborted: {err}")),
    }
    log.info(format!("{BANNER_PADDING} Done, program exiting. {BANNER_PADDING}"));

    let code = exit_code(&outcome);
    // process::exit skips destructors, so flush the log first.
    drop(log);
    std::process::exit(code);
}

/// `Some(EXIT_OK)` when only the version was requested.
fn version_exit(config: &RunConfig) -> Option<i32> {
    config.show_version.then_some(EXIT_OK)
}

fn exit_code(outcome: &Result<RunSummary>) -> i32 {
    match outcome {
        Ok(_) => EXIT_OK,
        Err(FsbextError::DecoderNotFound(_)) => EXIT_DECODER_MISSING,
        Err(_) => EXIT_RUN_FAILED,
    }
}

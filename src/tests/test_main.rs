use assert_fs::prelude::*;
use clap::Parser;
use std::io;

use super::{FakeDecoder, FSB5_BANK};
use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::FsbextError;
use crate::logging::RunLog;
use crate::pipeline::{run, RunSummary};
use crate::{exit_code, version_exit, EXIT_DECODER_MISSING, EXIT_OK, EXIT_RUN_FAILED};

#[test]
fn test_version_flag_exits_zero() -> anyhow::Result<()> {
    let config = Cli::try_parse_from(["fsbext", "--version"])?.into_config();
    assert_eq!(version_exit(&config), Some(EXIT_OK));
    assert_eq!(EXIT_OK, 0);

    let config = Cli::try_parse_from(["fsbext", "-V"])?.into_config();
    assert_eq!(version_exit(&config), None);

    Ok(())
}

#[test]
fn test_missing_decoder_exits_one() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("in/Music_Forest.bank").write_binary(FSB5_BANK)?;
    let config = RunConfig {
        decoder_path: temp.path().join("vgmstream-win64/vgmstream-cli.exe"),
        input_dir: temp.path().join("in"),
        output_dir: temp.path().join("out"),
        ..RunConfig::default()
    };

    let outcome = run(&config, &FakeDecoder::succeeding(1), &RunLog::silent());

    assert_eq!(exit_code(&outcome), EXIT_DECODER_MISSING);
    assert_eq!(EXIT_DECODER_MISSING, 1);

    Ok(())
}

#[test]
fn test_completed_run_exits_zero_even_with_failed_banks() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    let decoder_path = temp.child("vgmstream-cli.exe");
    decoder_path.write_str("")?;
    temp.child("in/SFX_Wind.bank").write_binary(FSB5_BANK)?;
    let config = RunConfig {
        decoder_path: decoder_path.to_path_buf(),
        input_dir: temp.path().join("in"),
        output_dir: temp.path().join("out"),
        ..RunConfig::default()
    };

    let outcome = run(&config, &FakeDecoder::failing(1), &RunLog::silent());

    assert_eq!(exit_code(&outcome), EXIT_OK);

    Ok(())
}

#[test]
fn test_other_errors_do_not_share_the_decoder_exit_code() {
    let outcome: crate::error::Result<RunSummary> =
        Err(FsbextError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

    assert_eq!(exit_code(&outcome), EXIT_RUN_FAILED);
    assert_ne!(EXIT_RUN_FAILED, EXIT_DECODER_MISSING);
}

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    RunConfig, DEFAULT_COMPRESSION_RATIO, DEFAULT_DECODER_PATH, DEFAULT_INPUT_DIR,
    DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Extract the audio streams of FMOD sound banks into .wav files using an external vgmstream decoder, sorted into Music, SFX and Other folders.",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(env = "FSBEXT_DECODER", default_value = DEFAULT_DECODER_PATH, help="Path to the vgmstream-cli executable.")]
    pub decoder_path: PathBuf,
    #[arg(long, short, default_value = DEFAULT_INPUT_DIR, help="Directory containing the .bank files.")]
    pub input_dir: PathBuf,
    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR, help="Directory the extracted audio is sorted into.")]
    pub output_dir: PathBuf,
    #[arg(long, short = 'v', help="Print the version and exit.")]
    pub version: bool,
    #[arg(long, short = 'V', help="Show debug output on the console.")]
    pub verbose: bool,
    #[arg(long, short, default_value_t = DEFAULT_COMPRESSION_RATIO, value_parser = parse_compression_ratio, help="Expected size ratio of decoded audio to bank data, used for the disk space estimate.")]
    pub compression_ratio: f64,
    #[arg(long, default_value = DEFAULT_LOG_FILE, help="Path of the run log, overwritten on every run.")]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            decoder_path: self.decoder_path,
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            log_file: self.log_file,
            verbose: self.verbose,
            compression_ratio: self.compression_ratio,
            show_version: self.version,
        }
    }
}

fn parse_compression_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!("compression ratio must be a positive number, got {ratio}"));
    }
    Ok(ratio)
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

use std::path::PathBuf;

pub const DEFAULT_DECODER_PATH: &str = "vgmstream-win64/vgmstream-cli.exe";
pub const DEFAULT_INPUT_DIR: &str = "in";
pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_LOG_FILE: &str = "fsbext.log";
pub const DEFAULT_COMPRESSION_RATIO: f64 = 8.0;

/// Settings for a single run. Built once from the command line and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub decoder_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub verbose: bool,
    pub compression_ratio: f64,
    pub show_version: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            decoder_path: PathBuf::from(DEFAULT_DECODER_PATH),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
            compression_ratio: DEFAULT_COMPRESSION_RATIO,
            show_version: false,
        }
    }
}

pub fn version_string() -> String {
    format!("fsbext version: {}", env!("CARGO_PKG_VERSION"))
}

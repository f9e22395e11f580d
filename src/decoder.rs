use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::Result;

/// File name template handed to vgmstream; `?n` expands to the stream name.
pub const OUTPUT_TEMPLATE: &str = "?n.wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    Success,
    /// Non-zero exit. `None` when the process was terminated by a signal.
    Failed(Option<i32>),
}

pub trait BankDecoder {
    /// Decodes `bank` into `dest_dir`. Only the outcome is reported, never the
    /// decoder's own output.
    fn decode(&self, bank: &Path, dest_dir: &Path) -> Result<DecodeStatus>;
}

/// Runs the vgmstream command line decoder as a blocking child process.
pub struct ExternalDecoder {
    program: PathBuf,
}

impl ExternalDecoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command(&self, bank: &Path, dest_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(bank)
            .arg("-o")
            .arg(dest_dir.join(OUTPUT_TEMPLATE))
            .args(["-S", "0"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl BankDecoder for ExternalDecoder {
    fn decode(&self, bank: &Path, dest_dir: &Path) -> Result<DecodeStatus> {
        let status = self.command(bank, dest_dir).status()?;
        if status.success() {
            Ok(DecodeStatus::Success)
        } else {
            Ok(DecodeStatus::Failed(status.code()))
        }
    }
}

mod test_classify;
mod test_main;

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::decoder::{BankDecoder, DecodeStatus};
use crate::error::Result;

pub const FSB5_BANK: &[u8] = b"FSB5\x01\x00\x00\x00bankdata";
pub const RIFF_BANK: &[u8] = b"RIFF\x10\x00\x00\x00FEV FMT ";

/// Stands in for vgmstream: writes `outputs` wav files into the destination and
/// reports `status`.
pub struct FakeDecoder {
    pub status: DecodeStatus,
    pub outputs: usize,
    pub calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeDecoder {
    pub fn succeeding(outputs: usize) -> Self {
        Self {
            status: DecodeStatus::Success,
            outputs,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            status: DecodeStatus::Failed(Some(code)),
            outputs: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl BankDecoder for FakeDecoder {
    fn decode(&self, bank: &Path, dest_dir: &Path) -> Result<DecodeStatus> {
        self.calls
            .borrow_mut()
            .push((bank.to_path_buf(), dest_dir.to_path_buf()));
        for index in 0..self.outputs {
            fs::write(dest_dir.join(format!("stream_{index}.wav")), b"RIFF")?;
        }
        Ok(self.status)
    }
}

/// Cloneable in-memory writer for capturing log output.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

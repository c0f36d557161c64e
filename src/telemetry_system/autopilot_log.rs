use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::control::autopilot::{AutopilotSample, DiagnosticSink};
use crate::errors::SimulationError;

/// Append-only file of autopilot samples, one `closing_rate target_rate`
/// line per invocation.
///
/// Opening truncates the file once for a fresh run. If the file cannot be
/// written the log prints a warning and goes quiet; the simulation carries on.
pub struct AutopilotLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    lines_written: usize,
}

impl AutopilotLog {
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let writer = match Self::open_truncated(&path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                eprintln!(
                    "Warning: could not open autopilot log {} for writing: {}",
                    path.display(),
                    e
                );
                None
            }
        };

        AutopilotLog {
            path,
            writer,
            lines_written: 0,
        }
    }

    fn open_truncated(path: &Path) -> Result<File, SimulationError> {
        File::create(path)?;
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                eprintln!("Warning: failed to flush autopilot log: {}", e);
                self.writer = None;
            }
        }
    }
}

impl DiagnosticSink for AutopilotLog {
    fn record(&mut self, sample: &AutopilotSample) {
        if let Some(writer) = self.writer.as_mut() {
            match writeln!(writer, "{} {}", sample.closing_rate, sample.target_rate) {
                Ok(()) => self.lines_written += 1,
                Err(e) => {
                    eprintln!("Warning: failed to write autopilot log: {}", e);
                    self.writer = None;
                }
            }
        }
    }
}

impl Drop for AutopilotLog {
    fn drop(&mut self) {
        self.flush();
    }
}

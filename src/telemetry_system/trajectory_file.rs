use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::SimulationError;
use crate::trajectory_system::spring::Trajectory;

/// Write `t x v` lines, one per sample.
pub fn try_write_trajectory<P: AsRef<Path>>(
    path: P,
    trajectory: &Trajectory,
) -> Result<(), SimulationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (t, x, v) in trajectory.samples() {
        writeln!(writer, "{} {} {}", t, x, v)?;
    }
    writer.flush()?;
    Ok(())
}

/// Like [`try_write_trajectory`], but a failure only produces a warning.
/// Returns whether the file was written.
pub fn write_trajectory<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> bool {
    match try_write_trajectory(&path, trajectory) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "Warning: could not write trajectory file {}: {}",
                path.as_ref().display(),
                e
            );
            false
        }
    }
}

//! Per-step trajectory output.
//!
//! Writes one frame per completed step in the XYZ-like format consumed
//! by the downstream visualization tooling:
//!
//! ```text
//! <body count>
//! Comment line that needs to be here. Balle.
//! 1 <x> <y> <z>        (one line per body)
//! ```
//!
//! The leading `1` on each data line is a constant placeholder kept for
//! file-format compatibility. The file is created up front so an
//! unwritable path fails at startup, and the buffered handle is flushed
//! explicitly and closed deterministically on drop.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::simulation::states::System;

/// Fixed comment line on the second row of every frame; byte-exact for
/// compatibility with existing readers.
pub const FRAME_COMMENT: &str = "Comment line that needs to be here. Balle.";

pub struct TrajectoryWriter {
    out: BufWriter<File>,
}

impl TrajectoryWriter {
    /// Create (truncate) the trajectory file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Append one frame with the current body positions.
    pub fn write_frame(&mut self, sys: &System) -> Result<()> {
        writeln!(self.out, "{}", sys.body_count())?;
        writeln!(self.out, "{FRAME_COMMENT}")?;
        for body in &sys.bodies {
            writeln!(self.out, "1 {} {} {}", body.x.x, body.x.y, body.x.z)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

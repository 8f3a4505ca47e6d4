//! Writing the payload to disk

use std::fs::OpenOptions;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use crate::{EmitError, EmittedConfig, LineEnding, OutputTarget, Result};

/// Writes an [`EmittedConfig`] to an output target.
///
/// The target is created or truncated in place. Parent directories are not
/// created, and nothing is rolled back if a write fails part way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigEmitter {
    config: EmittedConfig,
    line_ending: LineEnding,
}

impl ConfigEmitter {
    pub fn new(config: EmittedConfig) -> Self {
        Self {
            config,
            line_ending: LineEnding::default(),
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Write the payload to `target`.
    ///
    /// The file handle is dropped before this returns on every path.
    pub fn emit(&self, target: &OutputTarget) -> Result<()> {
        let path = target.as_path();
        tracing::debug!(path = %target, line_ending = %self.line_ending, "Opening output file");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                tracing::debug!(path = %target, error = %e, "Open failed");
                EmitError::open_failed(path, e)
            })?;

        let mut writer = BufWriter::new(file);
        self.config
            .write_to(&mut writer, self.line_ending)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                tracing::debug!(path = %target, error = %e, "Write failed");
                EmitError::write_failed(path, e)
            })?;
        drop(writer);

        tracing::debug!(
            path = %target,
            entries = self.config.len(),
            "Configuration written"
        );
        Ok(())
    }
}

/// Write the default payload to `path` with `\n` line endings.
pub fn emit(path: impl Into<PathBuf>) -> Result<()> {
    ConfigEmitter::default().emit(&OutputTarget::new(path))
}

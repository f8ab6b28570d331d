//! Snapshot Writer
//!
//! Append-only JSONL output of population snapshots for external consumers.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use sim_events::PopulationSnapshot;
use thiserror::Error;

/// Errors raised while writing snapshots
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes one snapshot per line
pub struct SnapshotWriter {
    writer: Option<BufWriter<File>>,
    snapshot_count: u64,
}

impl SnapshotWriter {
    /// Create a writer that truncates and writes to the specified path
    pub fn new(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            snapshot_count: 0,
        })
    }

    /// Create a writer that discards snapshots (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            snapshot_count: 0,
        }
    }

    pub fn snapshot_count(&self) -> u64 {
        self.snapshot_count
    }

    /// Write a snapshot as a single JSON line
    pub fn write(&mut self, snapshot: &PopulationSnapshot) -> Result<(), OutputError> {
        self.snapshot_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = snapshot.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), OutputError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush snapshot writer: {}", e);
        }
    }
}

//! Append-only JSONL session log.
//!
//! One JSON object per line, tagged by `"type"`:
//!
//! ```text
//! {"type":"start","session_id":1,"seed":42}
//! {"type":"lock","session_id":1,"kind":"T","lines_cleared":0,...}
//! {"type":"game_over","session_id":1,"score":140,"rows_cleared":3,"level":0}
//! {"type":"stop","session_id":1}
//! ```

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use colorfall_types::LockEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        session_id: u32,
        seed: u64,
    },
    Lock {
        session_id: u32,
        #[serde(flatten)]
        event: LockEvent,
    },
    GameOver {
        session_id: u32,
        score: u32,
        rows_cleared: u32,
        level: u32,
    },
    Stop {
        session_id: u32,
    },
}

pub struct EventLog {
    writer: Box<dyn Write + Send>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            buf: Vec::with_capacity(256),
        }
    }

    /// Write one record as a line and flush it.
    pub fn record(&mut self, record: &LogRecord) -> anyhow::Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.writer.write_all(&self.buf)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").finish_non_exhaustive()
    }
}

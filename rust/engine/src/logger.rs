use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Side, TurnAction};
use crate::rules::RoundScore;

/// Records a single accepted action during a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that acted
    pub side: Side,
    /// The action taken
    pub action: TurnAction,
    /// Card taken from the deck, for a successful draw
    #[serde(default)]
    pub drawn: Option<Card>,
}

/// Complete record of one round: the opening up-card, every move and the score.
/// Serialized to JSONL, one round per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the round's deck shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// First up-card turned after the deal
    pub up_card: Card,
    /// Chronological list of accepted moves
    pub moves: Vec<MoveRecord>,
    /// Score, present once the round is over
    pub result: Option<RoundScore>,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file.
pub struct RoundLogger {
    writer: BufWriter<File>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Next id in the `YYYYMMDD-NNNNNN` sequence for this file.
    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl std::fmt::Debug for RoundLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundLogger")
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}

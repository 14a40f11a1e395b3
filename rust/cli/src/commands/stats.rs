//! Statistics over JSONL round records.
//!
//! Accepts one `.jsonl` file or a directory searched recursively for them.
//! Reports the number of rounds, how they ended, and points per side.
//! Unparseable lines are skipped with an error message; an incomplete last
//! line (no trailing newline) is treated as a write in progress.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::record_or_skip;
use crate::ui;
use eights_engine::logger::RoundRecord;
use eights_engine::player::Side;
use eights_engine::rules::RoundEnd;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
struct RoundStats {
    rounds: u64,
    human_out: u64,
    computer_out: u64,
    blocked: u64,
    unfinished: u64,
    human_points: u64,
    computer_points: u64,
    skipped: u64,
}

impl RoundStats {
    fn consume(&mut self, content: &str, source: &str, err: &mut dyn Write) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            if i == last && !has_trailing_nl && serde_json::from_str::<RoundRecord>(line).is_err() {
                self.skipped += 1;
                continue;
            }
            let context = format!("{} line {}", source, i + 1);
            let record: RoundRecord = record_or_skip!(line, err, context);
            self.add(&record);
        }
    }

    fn add(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        let Some(score) = record.result else {
            self.unfinished += 1;
            return;
        };
        match score.end {
            RoundEnd::Out(Side::Human) => self.human_out += 1,
            RoundEnd::Out(Side::Computer) => self.computer_out += 1,
            RoundEnd::Blocked => self.blocked += 1,
        }
        self.human_points += u64::from(score.human);
        self.computer_points += u64::from(score.computer);
    }

    fn scored(&self) -> u64 {
        self.rounds - self.unfinished
    }
}

/// Aggregates round records and prints the summary as JSON.
///
/// # Errors
///
/// Fails when the input cannot be read or holds no valid record at all.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    let files = if path.is_dir() {
        collect_jsonl(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut stats = RoundStats::default();
    for file in &files {
        match read_text(file) {
            Ok(content) => stats.consume(&content, &file.display().to_string(), err),
            Err(e) => {
                ui::write_error(err, &e)?;
                return Err(CliError::InvalidInput(e));
            }
        }
    }

    if stats.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", stats.skipped),
        )?;
    }
    if stats.rounds == 0 {
        ui::write_error(err, "No round records found")?;
        return Err(CliError::InvalidInput(format!(
            "no round records in {}",
            input
        )));
    }

    let scored = stats.scored().max(1) as f64;
    let summary = serde_json::json!({
        "rounds": stats.rounds,
        "endings": {
            "human_out": stats.human_out,
            "computer_out": stats.computer_out,
            "blocked": stats.blocked,
            "unfinished": stats.unfinished,
        },
        "points": {
            "human": stats.human_points,
            "computer": stats.computer_points,
        },
        "avg_points": {
            "human": stats.human_points as f64 / scored,
            "computer": stats.computer_points as f64 / scored,
        },
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

fn collect_jsonl(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&d) else {
            continue;
        };
        for entry in entries.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if p.extension().is_some_and(|ext| ext == "jsonl") {
                found.push(p);
            }
        }
    }
    found.sort();
    found
}

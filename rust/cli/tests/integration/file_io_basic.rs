use crate::helpers::{jsonl_lines, CliRunner};
use eights_engine::logger::RoundRecord;

#[test]
fn c1_play_log_holds_one_record_per_round() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("logs/play.jsonl");
    let log_str = log.to_string_lossy().to_string();
    let input = "d\n".repeat(600);
    let res = CliRunner::new().run_with_input(
        &["play", "--rounds", "2", "--seed", "9", "--log", &log_str],
        &input,
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = std::fs::read_to_string(&log).expect("log written");
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("round record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.result.is_some()));
    assert_ne!(records[0].round_id, records[1].round_id);
}

#[test]
fn c2_sim_output_feeds_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sim.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let cli = CliRunner::new();

    let sim = cli.run(&["sim", "--games", "4", "--seed", "3", "--output", &path_str]);
    assert_eq!(sim.exit_code, 0, "stderr={}", sim.stderr);
    let summary: serde_json::Value = serde_json::from_str(&sim.stdout).expect("sim json");
    let rounds = summary["rounds"].as_u64().expect("rounds");
    assert_eq!(jsonl_lines(&path).len() as u64, rounds);

    let stats = cli.run(&["stats", "--input", &path_str]);
    assert_eq!(stats.exit_code, 0, "stderr={}", stats.stderr);
    let json: serde_json::Value = serde_json::from_str(&stats.stdout).expect("stats json");
    assert_eq!(json["rounds"].as_u64(), Some(rounds));
    let endings = &json["endings"];
    let total = endings["human_out"].as_u64().unwrap()
        + endings["computer_out"].as_u64().unwrap()
        + endings["blocked"].as_u64().unwrap();
    assert_eq!(total, rounds);
    assert_eq!(endings["unfinished"], 0);
}

#[test]
fn c3_stats_skips_corrupted_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mixed.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let cli = CliRunner::new();
    let sim = cli.run(&["sim", "--games", "1", "--seed", "12", "--output", &path_str]);
    assert_eq!(sim.exit_code, 0);

    let mut content = std::fs::read_to_string(&path).unwrap();
    content.insert_str(0, "{\"round_id\": oops}\n");
    std::fs::write(&path, content).unwrap();

    let stats = cli.run(&["stats", "--input", &path_str]);
    assert_eq!(stats.exit_code, 0);
    assert!(stats.stderr.contains("line 1"), "stderr={}", stats.stderr);
}

#[test]
fn c4_stats_on_empty_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.jsonl");
    std::fs::write(&path, "").unwrap();
    let res = CliRunner::new().run(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("No round records found"));
}

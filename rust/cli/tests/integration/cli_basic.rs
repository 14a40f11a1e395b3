use crate::helpers::CliRunner;

#[test]
fn a1_help_lists_every_subcommand() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "sim", "stats", "deal", "cfg"] {
        assert!(res.stdout.contains(cmd), "help is missing {cmd}: {}", res.stdout);
    }
}

#[test]
fn a2_version_succeeds() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn a3_unknown_subcommand_prints_usage_to_stderr() {
    let res = CliRunner::new().run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: eights <command> [options]"));
}

#[test]
fn a4_rounds_out_of_range_is_rejected_by_the_parser() {
    let res = CliRunner::new().run(&["play", "--rounds", "0"]);
    assert_eq!(res.exit_code, 2);
    let res = CliRunner::new().run(&["play", "--rounds", "99"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn a5_deal_is_reproducible() {
    let cli = CliRunner::new();
    let first = cli.run(&["deal", "--seed", "2024"]);
    let second = cli.run(&["deal", "--seed", "2024"]);
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
    assert!(first.stdout.contains("Deck: 41 card(s)"));
}

#[test]
fn a6_sim_rejects_unknown_policy() {
    let res = CliRunner::new().run(&["sim", "--games", "1", "--ai-a", "oracle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("oracle"), "stderr={}", res.stderr);
}

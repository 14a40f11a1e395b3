use crate::helpers::CliRunner;

#[test]
fn b1_quit_ends_the_game_gracefully() {
    let res = CliRunner::new().run_with_input(&["play", "--rounds", "2", "--seed", "5"], "q\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Round 1 of 2"));
    assert!(res.stdout.contains("Game abandoned after 0 round(s)."));
    assert!(!res.stdout.contains("Game over"));
}

#[test]
fn b2_closed_input_is_an_interruption() {
    let res = CliRunner::new().run_with_input(&["play", "--rounds", "1", "--seed", "5"], "");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
fn b3_bad_input_reprompts_without_exiting() {
    let res = CliRunner::new().run_with_input(
        &["play", "--rounds", "1", "--seed", "5"],
        "\nplay everything\n1X\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Empty input"));
    assert!(res.stderr.contains("unrecognized card '1X'"));
    let prompts = res.stdout.matches("Your move").count();
    assert_eq!(prompts, 4, "stdout={}", res.stdout);
}

#[test]
fn b4_drawing_every_turn_plays_to_the_end() {
    let input = "d\n".repeat(900);
    let res = CliRunner::new().run_with_input(&["play", "--rounds", "3", "--seed", "77"], &input);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    for n in 1..=3 {
        assert!(res.stdout.contains(&format!("Round {n} of 3")));
        assert!(res.stdout.contains(&format!("Round {n} over")));
    }
    assert!(res.stdout.contains("Final Score: you"));
}

#[test]
fn b5_same_seed_same_game() {
    let input = "d\n".repeat(400);
    let cli = CliRunner::new();
    let args = ["play", "--rounds", "1", "--seed", "31"];
    let first = cli.run_with_input(&args, &input);
    let second = cli.run_with_input(&args, &input);
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
}

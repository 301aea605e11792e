mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn names_list_counts_entries() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--names", env.names_arg(), "names", "list"])
        .assert()
        .success()
        .stdout(contains("Ann"))
        .stdout(contains("(4 names)"));
}

#[test]
fn sample_roster_is_used_without_names_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["names", "list"])
        .assert()
        .success()
        .stdout(contains("王小明"))
        .stdout(contains("(8 names)"));
}

#[test]
fn spin_prints_winner_and_fallback_message() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--names", env.names_arg(), "spin", "--seed", "3", "--no-animate"])
        .assert()
        .success()
        .stdout(contains("winner: "))
        .stdout(contains("on your win!"));
}

#[test]
fn spin_with_one_name_fails_with_notice() {
    let env = TestEnv::new();
    env.write_names("Solo\n");
    env.cmd()
        .args(["--names", env.names_arg(), "spin", "--no-animate"])
        .assert()
        .failure()
        .stderr(contains("enter at least two names"));
}

#[test]
fn message_without_api_key_is_fallback() {
    let env = TestEnv::new();
    env.cmd()
        .args(["message", "Ann"])
        .assert()
        .success()
        .stdout(contains("Congratulations, Ann, on your win!"));
}

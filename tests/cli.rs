use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("pokedex")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--sprite-base-url"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("[NAME_OR_ID]"));
}

#[test]
fn test_version() {
    Command::cargo_bin("pokedex")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pokedex "));
}

#[test]
fn test_unknown_flag_is_rejected() {
    Command::cargo_bin("pokedex")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_invalid_base_url_fails_before_terminal_setup() {
    Command::cargo_bin("pokedex")
        .unwrap()
        .args(["--base-url", "not a url", "--config", "/nonexistent/pokedex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create PokeAPI client"));
}

//! End-to-end tests of the `sixpence` binary.

mod common;

use assert_cmd::Command;
use common::fixtures;
use common::TestContext;
use predicates::prelude::*;

fn sixpence(ctx: &TestContext) -> Command {
    let mut cmd = Command::cargo_bin("sixpence").unwrap();
    cmd.current_dir(ctx.path())
        .env_remove("SIXPENCE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_prints_canonical_lines() {
    let ctx = TestContext::new();
    ctx.write_file("capitals.6p", fixtures::CAPITALS);

    sixpence(&ctx)
        .args(["check", "capitals.6p"])
        .assert()
        .success()
        .stdout(
            "Capital of Poland? [Europe] Warsaw | Warszawa\n\
             Capital of France? [Europe] Paris // easy one\n\
             Capital of Japan? [Asia] Tokyo\n",
        );
}

#[test]
fn test_check_json() {
    let ctx = TestContext::new();
    ctx.write_file("media.6p", fixtures::MEDIA);

    let output = sixpence(&ctx)
        .args(["check", "--json", "media.6p"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items[0]["type"], "image");
    assert_eq!(items[0]["question"], "flag-pl.png");
    assert_eq!(items[0]["hint"], "flag");
    assert_eq!(items[1]["type"], "sound");
    assert_eq!(items[1]["answers"][1], "Polish anthem");
    assert!(items[1].get("hint").is_none());
}

#[test]
fn test_check_reports_bad_line() {
    let ctx = TestContext::new();
    ctx.write_file("broken.6p", fixtures::BROKEN);

    sixpence(&ctx)
        .args(["check", "broken.6p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.6p:2> missing hint"));
}

#[test]
fn test_drill_from_stdin() {
    let ctx = TestContext::new();
    ctx.write_file("capitals.6p", fixtures::CAPITALS);

    sixpence(&ctx)
        .args(["drill", "capitals.6p"])
        .write_stdin("warsaw\nlyon\ntokyo\nparis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All items done."))
        .stdout(predicate::str::contains("[Percentage] 75%"))
        .stdout(predicate::str::contains("[Grade] 4.0"));
}

#[test]
fn test_config_file_in_working_directory() {
    let ctx = TestContext::new();
    ctx.write_file("sixpence.toml", "[format]\nquestion_position = \"right\"\n");
    ctx.write_file("reversed.6p", "4 | four [math] What is 2+2?\n");

    sixpence(&ctx)
        .args(["check", "reversed.6p"])
        .assert()
        .success()
        .stdout("4 | four [math] What is 2+2?\n");

    sixpence(&ctx)
        .args(["drill", "--no-hints", "reversed.6p"])
        .write_stdin("Four\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is 2+2?"))
        .stdout(predicate::str::contains("[hint:").not())
        .stdout(predicate::str::contains("CORRECT!"));
}

#[test]
fn test_explicit_config_flag() {
    let ctx = TestContext::new();
    ctx.write_file("strict.toml", "[matching]\nignore_case = false\n");
    ctx.write_file("case.6p", "Capital of Poland? [] Warsaw\n");

    sixpence(&ctx)
        .args(["--config", "strict.toml", "drill", "case.6p"])
        .write_stdin("warsaw\nWarsaw\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WRONG!"))
        .stdout(predicate::str::contains("[Attempted] 2"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_file("bad.toml", "[format]\ncomment_marker = \"\"\n");
    ctx.write_file("capitals.6p", fixtures::CAPITALS);

    sixpence(&ctx)
        .args(["--config", "bad.toml", "check", "capitals.6p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("comment_marker must not be empty"));
}

#[test]
fn test_missing_file() {
    let ctx = TestContext::new();

    sixpence(&ctx)
        .args(["drill", "nowhere.6p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load items from nowhere.6p"));
}

//! End-to-end checks of the `parallax-landing` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("parallax-landing").unwrap();
    for var in ["PARALLAX_BIND_ADDR", "PARALLAX_TITLE", "PARALLAX_ASSETS", "PARALLAX_LOG_JSON", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn render_writes_document_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public/index.html");

    cmd()
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Parallax Landing</title>"));
}

#[test]
fn render_to_stdout_honors_title() {
    cmd()
        .args(["render", "--title", "Промо"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Промо</title>"));
}

#[test]
fn render_reads_title_from_env() {
    cmd()
        .env("PARALLAX_TITLE", "Из окружения")
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Из окружения</title>"));
}

#[test]
fn render_applies_assets_file() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets.json");
    std::fs::write(&assets, r#"{"font_css": "/fonts/montserrat.css"}"#).unwrap();

    cmd()
        .arg("render")
        .arg("--assets")
        .arg(&assets)
        .assert()
        .success()
        .stdout(predicate::str::contains("/fonts/montserrat.css"))
        .stdout(predicate::str::contains("cdn.jsdelivr.net"));
}

#[test]
fn missing_assets_file_fails_with_message() {
    cmd()
        .args(["render", "--assets", "/no/such/assets.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read assets file"));
}

#[test]
fn help_lists_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn log_json_env_accepts_numeric_switch() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("index.html");

    cmd()
        .env("PARALLAX_LOG_JSON", "1")
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains(r#""level":"INFO""#));
}

#[test]
fn log_json_env_falsey_value_keeps_plain_logs() {
    cmd()
        .env("PARALLAX_LOG_JSON", "0")
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"));
}

#[test]
fn render_ignores_bind_address_env() {
    cmd()
        .env("PARALLAX_BIND_ADDR", "localhost:8080")
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"));
}

#[test]
fn serve_rejects_unparsable_bind_address_env() {
    cmd()
        .env("PARALLAX_BIND_ADDR", "not-an-addr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

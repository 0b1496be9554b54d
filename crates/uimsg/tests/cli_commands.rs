#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn uimsg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uimsg"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("uimsg should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "uimsg-{tag}-{}-{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn types_lists_whole_catalog() {
    let output = uimsg(&["--format", "json", "types"]);

    assert!(output.status.success());
    let payload = stdout_json(&output);
    assert_eq!(payload["count"], 35);
    let tags: Vec<&str> = payload["types"]
        .as_array()
        .expect("types should be an array")
        .iter()
        .filter_map(|row| row["type"].as_str())
        .collect();
    assert!(tags.contains(&"ui-receive_fee"));
    assert!(tags.contains(&"popup-handshake"));
}

#[test]
fn types_filters_by_direction() {
    let output = uimsg(&["--format", "json", "types", "--direction", "from-ui"]);

    assert!(output.status.success());
    let payload = stdout_json(&output);
    for row in payload["types"].as_array().expect("types should be an array") {
        assert_eq!(row["direction"], "from-ui");
    }
}

#[test]
fn build_prints_envelope_with_payload_unchanged() {
    let output = uimsg(&[
        "--format",
        "json",
        "build",
        "ui-receive_fee",
        "--json",
        r#"{"type":"compose-custom","value":42}"#,
        "--id",
        "9",
    ]);

    assert!(output.status.success());
    let envelope = stdout_json(&output);
    assert_eq!(
        envelope,
        serde_json::json!({
            "event": "UI_EVENT",
            "type": "ui-receive_fee",
            "payload": { "type": "compose-custom", "value": 42 },
            "id": 9
        })
    );
}

#[test]
fn build_without_payload_for_notice() {
    let output = uimsg(&["--format", "json", "build", "ui-close_window"]);

    assert!(output.status.success());
    let envelope = stdout_json(&output);
    assert!(envelope.get("payload").is_none());
}

#[test]
fn build_unknown_type_returns_64() {
    let output = uimsg(&["build", "ui-request_word"]);

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown message type"));
}

#[test]
fn build_mismatched_payload_returns_60() {
    let output = uimsg(&["build", "ui-receive_pin", "--json", "1234"]);
    assert_eq!(output.status.code(), Some(60));

    let output = uimsg(&["build", "ui-close_window", "--json", "{}"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn strict_flag_rejects_extra_fields() {
    let payload = r#"{"granted":true,"remember":false,"extra":1}"#;

    let permissive = uimsg(&["build", "ui-receive_permission", "--json", payload]);
    assert!(permissive.status.success());

    let strict = uimsg(&["--strict", "build", "ui-receive_permission", "--json", payload]);
    assert_eq!(strict.status.code(), Some(60));
}

#[test]
fn check_reads_envelope_file() {
    let path = unique_temp_file("check");
    std::fs::write(
        &path,
        br#"{"event":"UI_EVENT","type":"ui-request_pin","payload":{"device":{"path":"1","label":"T","type":"acquired"}}}"#,
    )
    .expect("envelope file should be writable");

    let output = uimsg(&["--format", "json", "check", "--file", path.to_str().unwrap()]);

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["valid"], true);
    assert_eq!(report["type"], "ui-request_pin");
    assert_eq!(report["family"], "device");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn check_reads_stdin_and_rejects_foreign_event() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_uimsg"))
        .arg("check")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("check should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(br#"{"event":"DEVICE_EVENT","type":"popup-opened"}"#)
        .expect("stdin should accept envelope");

    let output = child.wait_with_output().expect("check should finish");
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn check_missing_file_returns_64() {
    let path = unique_temp_file("missing");
    let output = uimsg(&["check", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn schema_prints_payload_schema() {
    let output = uimsg(&["--format", "json", "schema", "ui-receive_passphrase"]);

    assert!(output.status.success());
    let schema = stdout_json(&output);
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], serde_json::json!(["save", "value"]));
}

#[test]
fn schema_for_notice_is_usage_error() {
    let output = uimsg(&["schema", "popup-opened"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_reports_package_version() {
    let output = uimsg(&["version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::{json, Value};

fn run_pump(extra_args: &[&str], input: &str) -> Vec<Value> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_framebridge"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .arg("pump")
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary should spawn");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("stdin write should succeed");

    let output = child.wait_with_output().expect("binary should run");
    assert!(output.status.success(), "pump should exit cleanly");

    String::from_utf8(output.stdout)
        .expect("stdout should be utf-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout lines should be wire JSON"))
        .collect()
}

#[test]
fn pump_announces_ready_first() {
    let wire = run_pump(&[], "");
    assert_eq!(
        wire,
        vec![json!({ "isBridgeMessage": true, "type": "ready", "apiVersion": 1 })]
    );
}

#[test]
fn pump_reports_height_after_load() {
    let wire = run_pump(&["--height", "842"], "load\n");
    assert_eq!(wire.len(), 2);
    assert_eq!(
        wire[1],
        json!({ "isBridgeMessage": true, "type": "setFrameHeight", "height": 842 })
    );
}

#[test]
fn pump_publishes_value_after_stream() {
    let wire = run_pump(
        &["--publish", r#"{"x":1}"#, "--data-type", "bytes"],
        r#"{"type":"render","args":{"n":1}}
{"type":"render","args":{"n":1}}
{"type":"other","args":{"n":2}}
"#,
    );
    // ready + one publish; renders produce no stdout traffic.
    assert_eq!(wire.len(), 2);
    assert_eq!(
        wire[1],
        json!({
            "isBridgeMessage": true,
            "type": "setComponentValue",
            "value": { "x": 1 },
            "dataType": "bytes"
        })
    );
}

#[test]
fn pump_rejects_invalid_json_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_framebridge"))
        .arg("pump")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary should spawn");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"not json\n")
        .expect("stdin write should succeed");

    let status = child.wait().expect("binary should run");
    assert_eq!(status.code(), Some(60));
}

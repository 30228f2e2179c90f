// Runs the compiled binary end to end

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn trojan_node(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trojan-node"))
        .args(args)
        .output()
        .expect("binary runs")
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// **VALUE**: Verifies `build` prints only the engine JSON on stdout.
///
/// **WHY THIS MATTERS**: The output is piped into the engine's config directory.
/// A log line on stdout would corrupt the JSON.
#[test]
fn given_xhttp_node_when_running_build_then_stdout_is_engine_json() {
    // GIVEN: Config with cert and an xhttp node
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "config.toml",
        "[cert]\ncert_file = \"cert\"\nkey_file = \"key\"\n\n[log]\nlevel = \"debug\"\n",
    );
    let node = write(
        dir.path(),
        "node.json",
        r#"{"trojan": {"server_port": 443, "network": "xhttp",
            "networkSettings": {"path": "/GunService", "mode": "stream-up"}}}"#,
    );

    // WHEN: Running build
    let output = trojan_node(&[
        "--config",
        config.to_str().unwrap(),
        "build",
        "--node",
        node.to_str().unwrap(),
    ]);

    // THEN: Success and parseable JSON
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tag"], "trojan_443");
    assert_eq!(json["streamSettings"]["security"], "tls");
    assert_eq!(json["streamSettings"]["xhttpSettings"]["mode"], "stream-up");
}

#[test]
fn given_node_without_trojan_when_running_check_then_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.toml", "");
    let node = write(dir.path(), "node.json", r#"{"vmess": {"server_port": 443}}"#);

    let output = trojan_node(&[
        "--config",
        config.to_str().unwrap(),
        "check",
        "--node",
        node.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("node info missing trojan config"), "stderr: {stderr}");
}

#[test]
fn given_invalid_config_when_running_then_fails_before_building() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.toml", "[cert]\ncert_file = \"only.crt\"\n");
    let node = write(
        dir.path(),
        "node.json",
        r#"{"trojan": {"server_port": 443, "network": "tcp"}}"#,
    );

    let output = trojan_node(&[
        "--config",
        config.to_str().unwrap(),
        "check",
        "--node",
        node.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config Validation Error"));
}

//! End-to-end tests for the golangci-lint-langserver binary

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

/// Get the path to the compiled binary
fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_golangci-lint-langserver")
}

/// Run the binary with given args and return (exit_code, stdout, stderr)
fn run_server(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute golangci-lint-langserver binary");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn test_cli_version() {
    let (code, stdout, _stderr) = run_server(&["--version"]);
    assert_eq!(code, 0, "--version should exit 0");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help() {
    let (code, stdout, _stderr) = run_server(&["--help"]);
    assert_eq!(code, 0, "--help should exit 0");
    assert!(stdout.contains("--nolintername"));
    assert!(stdout.contains("--severity"));
}

#[test]
fn test_cli_rejects_unknown_severity() {
    let (code, _stdout, stderr) = run_server(&["--severity", "loud"]);
    assert_eq!(code, 2, "clap usage errors exit 2");
    assert!(stderr.contains("unknown severity"));
}

/// A server process speaking LSP over stdio
struct Session {
    child: Child,
    stdin: ChildStdin,
    messages: mpsc::Receiver<Value>,
}

impl Session {
    fn start(args: &[&str]) -> Self {
        let mut child = Command::new(binary_path())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start golangci-lint-langserver");

        let stdin = child.stdin.take().unwrap();
        let stdout = child.stdout.take().unwrap();
        let (tx, messages) = mpsc::channel();

        std::thread::spawn(move || {
            let mut reader = BufReader::new(stdout);
            while let Some(message) = read_message(&mut reader) {
                if tx.send(message).is_err() {
                    break;
                }
            }
        });

        Self {
            child,
            stdin,
            messages,
        }
    }

    fn send(&mut self, message: Value) {
        let body = message.to_string();
        write!(self.stdin, "Content-Length: {}\r\n\r\n{}", body.len(), body).unwrap();
        self.stdin.flush().unwrap();
    }

    /// Wait for the first message satisfying `predicate`, skipping others
    fn wait_for(&self, predicate: impl Fn(&Value) -> bool) -> Value {
        loop {
            let message = self
                .messages
                .recv_timeout(Duration::from_secs(20))
                .expect("timed out waiting for server message");
            if predicate(&message) {
                return message;
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn read_message(reader: &mut impl BufRead) -> Option<Value> {
    let mut length = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            length = value.trim().parse::<usize>().ok();
        }
    }

    let mut body = vec![0; length?];
    reader.read_exact(&mut body).ok()?;
    serde_json::from_slice(&body).ok()
}

#[cfg(unix)]
#[test]
fn test_publishes_fatal_error_over_stdio() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("golangci-lint.sh");
    std::fs::write(&script, "#!/bin/sh\nprintf 'panic: x' >&2\nexit 1\n").unwrap();
    let file = dir.path().join("main.go");
    std::fs::write(&file, "package main\n").unwrap();

    let root_uri = format!("file://{}", dir.path().display());
    let file_uri = format!("file://{}", file.display());

    let mut session = Session::start(&[]);
    session.send(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "capabilities": {},
            "rootUri": root_uri,
            "initializationOptions": {
                "command": ["sh", script.display().to_string()]
            }
        }
    }));

    let response = session.wait_for(|m| m["id"] == 1);
    assert_eq!(
        response["result"]["serverInfo"]["name"],
        "golangci-lint-langserver"
    );
    assert_eq!(response["result"]["capabilities"]["textDocumentSync"]["change"], 0);

    session.send(json!({"jsonrpc": "2.0", "method": "initialized", "params": {}}));
    session.send(json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {
            "textDocument": {
                "uri": file_uri,
                "languageId": "go",
                "version": 1,
                "text": "package main\n"
            }
        }
    }));

    let published = session.wait_for(|m| m["method"] == "textDocument/publishDiagnostics");
    assert_eq!(published["params"]["uri"], file_uri);
    let diagnostics = published["params"]["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["message"], "panic: x");
    assert_eq!(diagnostics[0]["severity"], 1);

    session.send(json!({"jsonrpc": "2.0", "id": 2, "method": "shutdown"}));
    let response = session.wait_for(|m| m["id"] == 2);
    assert!(response.get("error").is_none());
}

#[test]
fn test_unknown_method_is_method_not_found() {
    let mut session = Session::start(&[]);
    session.send(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"capabilities": {}}
    }));
    session.wait_for(|m| m["id"] == 1);

    session.send(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "textDocument/hover",
        "params": {
            "textDocument": {"uri": "file:///tmp/main.go"},
            "position": {"line": 0, "character": 0}
        }
    }));

    let response = session.wait_for(|m| m["id"] == 2);
    assert_eq!(response["error"]["code"], -32601);
}

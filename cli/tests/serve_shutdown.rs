//! Process-level shutdown of `duet serve`

#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

fn spawn_server() -> Child {
    Command::new(env!("CARGO_BIN_EXE_duet"))
        .args(["--no-config", "-v", "serve"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn duet")
}

/// Forward stderr lines to a channel, draining until the child exits
fn watch_stderr(child: &mut Child) -> mpsc::Receiver<String> {
    let stderr = child.stderr.take().expect("stderr is piped");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            let _ = tx.send(line);
        }
    });
    rx
}

fn wait_for_log(rx: &mpsc::Receiver<String>, needle: &str, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(line) if line.contains(needle) => return true,
            Ok(_) => continue,
            Err(_) => return false,
        }
    }
    false
}

fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_sigint_stops_server_while_stdin_is_open() {
    let mut child = spawn_server();
    // Held open for the whole test: the server must not depend on EOF
    let _stdin = child.stdin.take();
    let logs = watch_stderr(&mut child);

    assert!(
        wait_for_log(&logs, "Tool server listening", Duration::from_secs(10)),
        "server did not start"
    );
    // Give the Ctrl-C handler task time to register
    thread::sleep(Duration::from_millis(500));

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let status = wait_for_exit(&mut child, Duration::from_secs(5));
    if status.is_none() {
        let _ = child.kill();
    }
    let status = status.expect("server still running after SIGINT");
    assert!(status.success(), "unexpected exit status: {:?}", status);
}

#[test]
fn test_eof_on_stdin_stops_server() {
    let mut child = spawn_server();
    let logs = watch_stderr(&mut child);

    assert!(
        wait_for_log(&logs, "Tool server listening", Duration::from_secs(10)),
        "server did not start"
    );
    drop(child.stdin.take());

    let status = wait_for_exit(&mut child, Duration::from_secs(5));
    if status.is_none() {
        let _ = child.kill();
    }
    assert!(status.expect("server still running after EOF").success());
}

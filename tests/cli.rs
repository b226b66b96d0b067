use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bicolor"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start bicolor");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn prints_verdict_without_newline() {
    let out = run_binary("4 3 1 2 2 3 3 1");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Impossible");

    let out = run_binary("4 4\n0 1\n1 2\n2 3\n3 0\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Possible");
}

#[test]
fn rejects_out_of_range_edge() {
    let out = run_binary("2 1 0 2");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("invalid input:"), "stderr was {:?}", stderr);
    assert!(stderr.contains("edge 0 (0, 2) has an endpoint outside 0..2"));
}

#[test]
fn rejects_truncated_input() {
    let out = run_binary("3 2 0 1");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("invalid input: input ended while reading first endpoint of edge 1"));
}

#[cfg(unix)]
#[test]
fn closed_stdout_is_reported_not_panicked() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bicolor"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start bicolor");
    // The verdict is written only after stdin hits EOF, so the reader is gone by then.
    drop(child.stdout.take());
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"2 1 0 1").unwrap();
    drop(stdin);
    let out = child.wait_with_output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("failed to write result:"), "stderr was {:?}", stderr);
}

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pdf-analyzer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading stdin; a broken pipe is fine then.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_uniform_report() {
    let output = run(&[], "0 1\n1 1\n2 1\n3 1\n");

    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with('#'));
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        ["1.5", "1.118034", "1.25", "0", "-1.36"]
    );
    assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["1", "2", "3"]);
    assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), ["0", "4"]);
}

#[test]
fn test_point_mass_succeeds_with_nan_shape() {
    let output = run(&[], "5 3\n");

    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        ["5", "0", "0", "nan", "nan"]
    );
    assert!(stderr(&output).contains("zero variance"));
}

#[test]
fn test_descending_x_fails_without_tables() {
    let output = run(&[], "1 0.5\n0 0.5\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("ascending order"));
}

#[test]
fn test_negative_density_fails() {
    let output = run(&[], "0 1\n1 -1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("non-negative"));
}

#[test]
fn test_zero_mass_fails() {
    let output = run(&[], "0 0\n1 0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("total probability mass"));
}

#[test]
fn test_malformed_lines_fail() {
    for input in ["0\n", "0 1 2\n", "0 1x\n", ""] {
        let output = run(&[], input);
        assert_eq!(output.status.code(), Some(1), "input {:?}", input);
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).starts_with("error: "));
    }
}

#[test]
fn test_any_argument_is_a_usage_error() {
    let cases: [&[&str]; 4] = [&["data.txt"], &["--help"], &["-V"], &["a", "b"]];
    for args in cases {
        let output = run(args, "0 1\n");

        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(output.stdout.is_empty());
        let err = stderr(&output);
        assert!(err.contains("no arguments allowed"));
        assert!(err.contains("Usage:"));
        assert!(err.contains("standard input"));
    }
}

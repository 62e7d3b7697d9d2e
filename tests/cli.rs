use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_interpreta")).args(args)
                                                   .output()
                                                   .unwrap_or_else(|e| {
                                                       panic!("Failed to run binary: {e}")
                                                   })
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_prints_four() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 4\n");
}

#[test]
fn roman_subcommand() {
    let output = run(&["roman", "V"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 5\n");

    let output = run(&["roman", "X"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 0\n");
}

#[test]
fn convert_default_sentence() {
    let output = run(&["convert"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 6.2137\n");
}

#[test]
fn convert_failure_exits_nonzero() {
    let output = run(&["convert", "10 km to parsecs"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown unit"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let output = run(&["-vvv", "roman", "IV"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 4\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("scan finished"));
}

#[test]
fn verbose_convert_logs_unit_names() {
    let output = run(&["-vv", "convert", "3 miles to km"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Resultado: 4.8280\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("from=miles"), "{stderr}");
    assert!(stderr.contains("to=km"), "{stderr}");
}

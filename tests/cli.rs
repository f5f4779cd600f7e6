//! Binary-level tests: exit codes and stdout for the non-rendering paths

use std::fs;
use std::process::Command;

fn scaling_report() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scaling-report"))
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = scaling_report().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Could not find performance_data/summary.csv"));
    assert!(stderr.contains("Please run the performance tests first"));
    assert!(!dir.path().join("plots").exists());
}

#[test]
fn test_header_only_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("performance_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("summary.csv"),
        "Threads,Elapsed_Time(s),Memory(KB)\n",
    )
    .unwrap();

    let output = scaling_report().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "No data available for analysis\n"
    );
    assert_eq!(fs::read_dir(dir.path().join("plots")).unwrap().count(), 0);
}

#[test]
fn test_malformed_threads_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("performance_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("summary.csv"),
        "Threads,Elapsed_Time(s),Memory(KB)\nmany,1.0,10\n",
    )
    .unwrap();

    let output = scaling_report().current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("plots").exists());
}

#[test]
fn test_unparseable_time_warns_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("performance_data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("summary.csv"),
        "Threads,Elapsed_Time(s),Memory(KB)\n1,bad,100\n2,1.0,lots\n",
    )
    .unwrap();

    let output = scaling_report()
        .current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    // the bad time only warns; the bad memory value then stops the run
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not parse time value"));
    assert!(stderr.contains("bad"));
    assert!(stderr.contains("invalid number"));
    assert!(!dir.path().join("plots").exists());
}

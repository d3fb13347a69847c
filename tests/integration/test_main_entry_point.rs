// main.rsとエントリーポイントのテスト
use crate::fixtures::*;
use tempfile::TempDir;

#[test]
fn test_binary_exists() {
    let binary_path = get_binary_path();
    assert!(binary_path.is_file());
}

#[test]
fn test_cli_help() {
    let output = run_staff(&["--help"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("staff"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("display"));
    assert!(stdout.contains("select"));
}

#[test]
fn test_cli_version() {
    let output = run_staff(&["--version"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "staff 0.1.0");
}

#[test]
fn test_no_subcommand_without_data_path_exits_with_code_1() {
    let output = run_staff(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("The data file name is absent"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_no_subcommand_loads_data_file_and_does_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_data_file(temp_dir.path(), "trains.json", MIXED_TYPES);

    let output = staff_command().env("SHOPS_DATA", &data).output().unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());
    assert_eq!(std::fs::read_to_string(&data).unwrap(), MIXED_TYPES);
}

#[test]
fn test_no_subcommand_with_broken_data_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_data_file(temp_dir.path(), "trains.json", BROKEN_JSON);

    let output = staff_command().env("SHOPS_DATA", &data).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to parse"));
}

#[test]
fn test_subcommand_help_lists_data_option() {
    let output = run_staff(&["select", "--help"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("--selected-trains"));
    assert!(stdout.contains("--data"));
}

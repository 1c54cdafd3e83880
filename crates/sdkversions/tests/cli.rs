use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PODSPEC: &str = r#"Pod::Spec.new do |s|
  s.name             = "AEPEdge"
  s.version          = "1.0.0"
  s.dependency 'AEPCore', '>= 5.0.0'
end
"#;

fn podspec_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    fs::write(temp_dir.path().join("AEPEdge.podspec"), PODSPEC).unwrap();
    temp_dir
}

fn sdkversions(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sdkversions"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn test_json_stdout_is_a_single_document() {
    let temp_dir = podspec_repo();

    // AEPCore has no version and is skipped
    let output = sdkversions(
        temp_dir.path(),
        &[
            "-v",
            "1.0.0",
            "-p",
            "AEPEdge.podspec",
            "-d",
            "AEPCore",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "validate");
    assert_eq!(report["version"], "1.0.0");
    assert_eq!(report["success"], true);
    assert_eq!(report["files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_stdout_reports_skipped_dependency() {
    let temp_dir = podspec_repo();

    let output = sdkversions(
        temp_dir.path(),
        &["-v", "1.0.0", "-p", "AEPEdge.podspec", "-d", "AEPCore"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::notice file=sdkversions,title=Skipping dependency 'AEPCore'::"));
    assert!(stdout.contains("All versions are correct!"));
}

#[test]
fn test_mismatch_exits_with_error_annotation() {
    let temp_dir = podspec_repo();

    let output = sdkversions(temp_dir.path(), &["-v", "1.0.1", "-p", "AEPEdge.podspec"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::error file=sdkversions,title=Version mismatch::"));
}

#[test]
fn test_second_at_in_dependency_is_malformed() {
    let temp_dir = podspec_repo();

    let output = sdkversions(
        temp_dir.path(),
        &[
            "-v",
            "1.0.0",
            "-p",
            "AEPEdge.podspec",
            "-d",
            "AEPCore 2.0.0@AEPEdge.podspec@other",
            "-u",
        ],
    );
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("title=Malformed dependency::"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("AEPEdge.podspec")).unwrap(),
        PODSPEC
    );
}

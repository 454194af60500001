//! End-to-end runs of the `tailsort` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn tailsort() -> Command {
    let mut cmd = cargo_bin_cmd!("tailsort");
    cmd.env_remove("TAILSORT_LOG").env_remove("TAILSORT_CONFIG");
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/App.jsx"),
        "export const App = () => <div className=\"sm:p-0 p-0\" />;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("src/site.css"),
        ".a {\n  @apply sm:flex flex;\n}\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_prints_formatted_file_to_stdout() {
    let dir = project();
    let output = tailsort()
        .arg(dir.path().join("src/App.jsx"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "export const App = () => <div className=\"p-0 sm:p-0\" />;\n"
    );
}

#[test]
fn test_check_fails_on_unsorted_files() {
    let dir = project();
    let output = tailsort().arg("--check").arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("App.jsx"));
    assert!(stdout.contains("site.css"));
}

#[test]
fn test_write_then_check_passes() {
    let dir = project();
    tailsort().arg("--write").arg(dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("src/site.css")).unwrap(),
        ".a {\n  @apply flex sm:flex;\n}\n"
    );
    tailsort()
        .args(["--check", "-j", "2"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_gitignored_files_are_skipped() {
    let dir = project();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".gitignore"), "dist/\n").unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::write(
        dir.path().join("dist/bundle.js"),
        "const a = <b className=\"sm:p-0 p-0\" />;\n",
    )
    .unwrap();

    let output = tailsort().arg("--check").arg(dir.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("bundle.js"));
}

#[test]
fn test_forced_parser_for_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("page.tpl");
    fs::write(&file, "<p class=\"sm:p-0 p-0\"></p>").unwrap();

    let output = tailsort()
        .args(["--parser", "html"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<p class=\"p-0 sm:p-0\"></p>"
    );
}

#[test]
fn test_unknown_parser_name_is_rejected() {
    let dir = project();
    tailsort()
        .args(["--parser", "markdown"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn test_explicit_config_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("theme.toml");
    fs::write(&config, "[theme.extend.colors]\ntomato = \"tomato\"\n").unwrap();
    let file = dir.path().join("index.html");
    fs::write(&file, "<a class=\"sm:bg-tomato bg-red-500\"></a>").unwrap();

    let output = tailsort()
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<a class=\"bg-red-500 sm:bg-tomato\"></a>"
    );
}

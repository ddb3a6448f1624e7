//! Integration tests for the sharpgen binary.
//!
//! Each test runs the real binary in a temp directory seeded with a minimal
//! .NET project layout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CSPROJ: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
    <RootNamespace>Demo</RootNamespace>
  </PropertyGroup>
</Project>
"#;

fn sharpgen() -> Command {
    let mut cmd = Command::cargo_bin("sharpgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("App.csproj"), CSPROJ).unwrap();
    dir
}

// ── general ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    sharpgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("ctor"))
        .stdout(predicate::str::contains("member"));
}

#[test]
fn version_matches_cargo() {
    sharpgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    sharpgen().assert().failure();
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_class_creates_file_with_detected_namespace() {
    let dir = project_dir();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "class", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget.cs"));

    let content = fs::read_to_string(dir.path().join("Widget.cs")).unwrap();
    assert!(content.contains("namespace Demo"));
    assert!(content.contains("public class Widget"));
    assert!(!content.contains("${"));
}

#[test]
fn new_class_in_subfolder_appends_folder_to_namespace() {
    let dir = project_dir();
    let nested = dir.path().join("Models");
    fs::create_dir(&nested).unwrap();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "class", "Order", "--dir", "Models"])
        .assert()
        .success();

    let content = fs::read_to_string(nested.join("Order.cs")).unwrap();
    assert!(content.contains("namespace Demo.Models"));
}

#[test]
fn new_class_file_scoped_on_net8() {
    let dir = project_dir();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "class", "Widget", "--file-scoped"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("Widget.cs")).unwrap();
    assert!(content.contains("namespace Demo;"));
    assert!(!content.contains("namespace Demo\n{"));
}

#[test]
fn new_with_namespace_override_needs_no_project() {
    let dir = TempDir::new().unwrap();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "interface", "IRepository", "--namespace", "My.App"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("IRepository.cs")).unwrap();
    assert!(content.contains("namespace My.App"));
    assert!(content.contains("public interface IRepository"));
}

#[test]
fn new_razor_page_writes_both_files() {
    let dir = project_dir();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "razor-page", "Index"])
        .assert()
        .success();

    assert!(dir.path().join("Index.cs").exists());
    assert!(dir.path().join("Index.cshtml").exists());
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = project_dir();
    fs::write(dir.path().join("Widget.cs"), "// existing").unwrap();

    sharpgen()
        .current_dir(dir.path())
        .args(["new", "class", "Widget"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The original file is untouched.
    let content = fs::read_to_string(dir.path().join("Widget.cs")).unwrap();
    assert_eq!(content, "// existing");
}

// ── ctor ──────────────────────────────────────────────────────────────────────

#[test]
fn ctor_builds_constructor_from_properties() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Person.cs");
    fs::write(
        &file,
        "namespace Demo\n{\n    public class Person\n    {\n        public string Name { get; }\n        public int Age { get; set; }\n    }\n}\n",
    )
    .unwrap();

    sharpgen()
        .args(["ctor", file.to_str().unwrap(), "--line", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Constructor added"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("public Person(string name, int age)"));
    assert!(content.contains("Name = name;"));
    assert!(content.contains("Age = age;"));
}

// ── member ────────────────────────────────────────────────────────────────────

#[test]
fn member_synthesises_field_and_assignment() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Person.cs");
    fs::write(
        &file,
        "namespace Demo\n{\n    public class Person\n    {\n        public Person(string name)\n        {\n        }\n    }\n}\n",
    )
    .unwrap();

    sharpgen()
        .args(["member", file.to_str().unwrap(), "name", "--line", "5"])
        .assert()
        .success();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("private readonly string name;"));
    assert!(content.contains("this.name = name;"));
}

#[test]
fn member_readonly_property_capitalises() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Person.cs");
    fs::write(
        &file,
        "namespace Demo\n{\n    public class Person\n    {\n        public Person(string name)\n        {\n        }\n    }\n}\n",
    )
    .unwrap();

    sharpgen()
        .args([
            "member",
            file.to_str().unwrap(),
            "name",
            "--line",
            "5",
            "--kind",
            "readonly-property",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("public string Name { get; }"));
    assert!(content.contains("this.Name = name;"));
}

// ── list / completions / config ───────────────────────────────────────────────

#[test]
fn list_shows_artifacts() {
    sharpgen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("class"))
        .stdout(predicate::str::contains("razor-page"));
}

#[test]
fn list_json_is_parseable() {
    let output = sharpgen()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(rows.as_array().unwrap().len() >= 15);
}

#[test]
fn global_json_output_format_switches_list_to_json() {
    let output = sharpgen()
        .args(["--output-format", "json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(rows.as_array().unwrap().len() >= 15);
}

#[test]
fn completions_bash_emits_script() {
    sharpgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sharpgen"));
}

#[test]
fn config_path_prints_a_path() {
    sharpgen()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn config_list_shows_defaults() {
    sharpgen()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tab_size"));
}

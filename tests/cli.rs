use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn zcomp_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("zcomp"))
}

const TREE_JSON: &str = r#"{
  "name": "myapp",
  "display_name": "My App",
  "commands": [
    {
      "name": "myapp",
      "primary": true,
      "options": [
        { "name": "verbose", "description": "Enable verbose output" }
      ],
      "arguments": [
        { "name": "path", "order": 1, "completion": { "kind": "file" } }
      ]
    },
    {
      "name": "build",
      "description": "Build the project",
      "options": [
        {
          "name": "target",
          "short": ["t"],
          "description": "Target platform",
          "takes_value": true,
          "completion": { "kind": "on_the_fly" }
        }
      ]
    }
  ]
}"#;

#[test]
fn help_prints_usage() {
    zcomp_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_command_prints_usage_and_exits_2() {
    zcomp_cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn generate_from_file_writes_script_to_stdout() {
    let td = TempDir::new().unwrap();
    let tree = td.path().join("tree.json");
    fs::write(&tree, TREE_JSON).unwrap();

    zcomp_cmd()
        .arg("generate")
        .arg(&tree)
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("#!/usr/bin/env zsh\n#compdef myapp\n")
                .and(predicate::str::contains("__My__App_commands_root_build() {"))
                .and(predicate::str::contains(
                    "{--target,-t}'[Target platform]: :  __My__App_onthefly target'",
                ))
                .and(predicate::str::contains("'--verbose[Enable verbose output]'"))
                .and(predicate::str::contains("'1:path:_files'")),
        );
}

#[test]
fn generate_reads_stdin_when_no_file_given() {
    zcomp_cmd()
        .arg("generate")
        .write_stdin(TREE_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("build) __My__App_commands_root_build;;"));
}

#[test]
fn generate_out_writes_file_instead_of_stdout() {
    let td = TempDir::new().unwrap();
    let tree = td.path().join("tree.json");
    let out = td.path().join("_myapp");
    fs::write(&tree, TREE_JSON).unwrap();

    zcomp_cmd()
        .arg("generate")
        .arg(&tree)
        .args(["--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrote"));

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.starts_with("#!/usr/bin/env zsh"));
    assert!(script.ends_with("#compdef myapp\n"));
}

#[test]
fn generate_rejects_invalid_json() {
    zcomp_cmd()
        .arg("generate")
        .write_stdin("{ not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[zcomp] ERROR"));
}

#[test]
fn generate_reports_missing_input_file() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("nope.json");

    zcomp_cmd()
        .arg("generate")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read"));
}

#[test]
fn candidates_renders_value_description_lines() {
    zcomp_cmd()
        .arg("candidates")
        .write_stdin(r#"[{"value":"linux-x64","description":"Linux"},{"value":"win-x64"}]"#)
        .assert()
        .success()
        .stdout(predicate::eq("linux-x64:Linux\nwin-x64:\n"));
}

#[test]
fn candidates_empty_list_yields_no_output() {
    zcomp_cmd()
        .arg("candidates")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

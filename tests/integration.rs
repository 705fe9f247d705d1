use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docstr")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- markdown output --

#[test]
fn function_query_produces_markdown() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .arg("function_with_docstring")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("## function_with_docstring\n"));
    assert!(output.contains("function_with_docstring(arg1, arg2=True)"));
    assert!(output.contains("#### Arguments"));
    assert!(output.contains("* **arg1** (`int`): The first argument."));
    assert!(output.contains("#### Raises"));
    assert!(output.contains("* **ValueError**: If arg1 equals arg2."));
    assert!(output.contains("#### Source"));
    assert!(output.contains("return True"));
}

#[test]
fn module_query_is_the_default() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Utilities for demonstrating docstring extraction."));
}

// -- json output --

#[test]
fn json_record_keys() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .arg("function_with_docstring")
        .args(["-f", "json"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["function"], "function_with_docstring");
    assert_eq!(value["signature"], "(arg1, arg2=True)");
    assert_eq!(value["type"], "function");
    assert_eq!(value["label"], "function_with_docstring");
    assert_eq!(value["class"], "");
    assert!(value["filename"].as_str().unwrap().ends_with("example.py"));
    let headers: Vec<&str> = value["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["header"].as_str())
        .collect();
    assert_eq!(headers, vec!["Arguments", "Returns", "Raises"]);
}

#[test]
fn json_method_query() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .arg("ExampleOldClass.__init__")
        .args(["-f", "json"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["class"], "ExampleOldClass");
    assert_eq!(value["function"], "__init__");
    assert_eq!(value["type"], "method");
    assert_eq!(value["signature"], "(self, arg1)");
}

#[test]
fn no_sections_flag_skips_parsing() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .arg("function_with_docstring")
        .args(["-f", "json"])
        .arg("--no-sections")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["sections"], serde_json::json!([]));
}

// -- text output --

#[test]
fn text_format_prints_docstring() {
    let assert = cmd()
        .arg(fixture_path("example.py"))
        .arg("ExampleNewClass")
        .args(["-f", "text"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("A new-style class."));
    assert!(!output.contains("##"));
}

// -- pybind dialect --

#[test]
fn pybind_overloads_become_parallel_sequences() {
    let assert = cmd()
        .arg(fixture_path("pybind.txt"))
        .arg("add")
        .args(["--dialect", "pybind", "-f", "json"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["function"], serde_json::json!(["add", "add"]));
    assert_eq!(
        value["signature"],
        serde_json::json!(["(arg0: int, arg1: int)", "(arg0: float, arg1: float)"])
    );
    assert_eq!(value["return_type"], serde_json::json!(["int", "float"]));
    let docs = value["docstring"].as_array().unwrap();
    assert!(docs[0].as_str().unwrap().contains("Add two integers."));
    assert!(docs[1].as_str().unwrap().contains("Add two floats."));
}

// -- literal text fallback --

#[test]
fn nonexistent_path_is_treated_as_source_text() {
    let source = "def greet(name):\n    \"\"\"Say hello.\"\"\"\n    print(name)\n";

    let assert = cmd().arg(source).arg("greet").assert().success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("## greet\n"));
    assert!(output.contains("Say hello."));
}

// -- failure modes --

#[test]
fn missing_name_fails_with_not_found() {
    cmd()
        .arg(fixture_path("example.py"))
        .arg("missing_function")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unable to extract docstring for `missing_function`",
        ));
}

#[test]
fn deep_query_fails_with_malformed_query() {
    cmd()
        .arg(fixture_path("example.py"))
        .arg("a.b.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to parse query `a.b.c`"));
}

#[test]
fn unsupported_extension_fails() {
    let mut input = NamedTempFile::with_suffix(".sh").unwrap();
    input.write_all(b"echo hello\n").unwrap();

    cmd()
        .arg(input.path().to_str().unwrap())
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .arg(fixture_path("example.py"))
        .arg("function_with_docstring")
        .args(["-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn unknown_dialect_fails() {
    cmd()
        .arg(fixture_path("example.py"))
        .arg("function_with_docstring")
        .args(["--dialect", "fortran"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dialect"));
}

//! End-to-end tests for the goscm binary.
//!
//! Each test writes its inputs into a temp dir, runs the binary there and
//! checks stdout, stderr, the exit status and any files left behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn goscm_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_goscm"))
}

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(goscm_bin())
        .current_dir(dir)
        .args(args)
        .arg("--no-color")
        .output()
        .expect("failed to run goscm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "goscm failed:\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected goscm to fail:\nstdout: {}",
        stdout(output)
    );
    assert_eq!(output.status.code(), Some(1));
}

/// `package main` with one function body made of `stmts` (JSON array items).
fn tree_with_body(stmts: &str) -> String {
    format!(
        r#"{{
  "package": "main",
  "decls": [{{ "kind": "FuncDecl", "name": "f", "type": {{}}, "body": {{ "stmts": [{stmts}] }} }}]
}}"#
    )
}

const ADD_TREE: &str = r#"{
  "package": "main",
  "decls": [{
    "kind": "FuncDecl",
    "name": "Add",
    "type": {
      "params": [
        { "names": ["a"], "type": { "kind": "Ident", "name": "int" } },
        { "names": ["b"], "type": { "kind": "Ident", "name": "int" } }
      ],
      "results": [{ "type": { "kind": "Ident", "name": "int" } }]
    },
    "body": { "stmts": [{
      "kind": "ReturnStmt",
      "results": [{
        "kind": "BinaryExpr", "op": "+",
        "x": { "kind": "Ident", "name": "a" },
        "y": { "kind": "Ident", "name": "b" }
      }]
    }] }
  }]
}"#;

const PLACEHOLDER_STMT: &str =
    r#"{ "kind": "ReturnStmt", "results": [{ "kind": "Unsupported", "node": "FuncLit" }] }"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write input");
    path
}

// ── emit ─────────────────────────────────────────────────────────────────

#[test]
fn emit_prints_formatted_output() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD_TREE);

    let output = run(dir.path(), &["emit", "add.json"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "(package main (define-func (Add #(a int) #(b int) int) (return (+ a b))))\n"
    );
}

#[test]
fn emit_respects_width_and_indent_flags() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD_TREE);

    let output = run(dir.path(), &["emit", "add.json", "--width", "40", "--indent", "4"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "(package main\n    (define-func\n        (Add #(a int) #(b int) int)\n        (return (+ a b))))\n"
    );
}

#[test]
fn emit_demo_program() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo("hello.json");

    let output = run(dir.path(), &["emit", demo.to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        r#"(package main
  (import "fmt" (as s "strings"))
  (define-type Point (struct #(X Y int)))
  (define-func (#(p (ptr Point)) Scale #(k int) (void)) (*= p.X k) (*= p.Y k))
  (define-func
    (main (void))
    (:= pts #((slice Point) #(#:X 1 #:Y 2)))
    (range
      (:= (i p) pts)
      (when (> i 0) (continue))
      (fmt.Println (s.ToUpper "hello") p.X))))
"#
    );
}

#[test]
fn emit_raw_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD_TREE);

    let output = run(dir.path(), &["emit", "add.json", "--raw", "-o", "add.scm", "--width", "10"]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    let written = std::fs::read_to_string(dir.path().join("add.scm")).unwrap();
    assert_eq!(
        written,
        "(package main (define-func (Add #(a int) #(b int) int) (return (+ a b))))\n"
    );
}

#[test]
fn emit_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(goscm_bin())
        .current_dir(dir.path())
        .args(["emit", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn goscm");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(tree_with_body(r#"{ "kind": "IncDecStmt", "x": { "kind": "Ident", "name": "n" }, "tok": "++" }"#).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "(package main (define-func (f (void)) (++ n)))\n");
}

#[test]
fn emit_reports_malformed_json_against_the_source() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.json", "{\n  \"package\": \"main\",\n  \"decls\": [ { \"kind\": \"Nope\" } ]\n}\n");

    let output = run(dir.path(), &["emit", "bad.json", "-o", "out.scm"]);
    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("not a valid syntax tree"), "stderr: {err}");
    assert!(err.contains("bad.json"), "stderr: {err}");
    assert!(!dir.path().join("out.scm").exists());
}

#[test]
fn emit_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["emit", "nope.json"]);
    assert_failure(&output);
    assert!(stderr(&output).contains("error: failed to read 'nope.json'"));
}

#[test]
fn structural_violation_discards_output() {
    let dir = tempfile::tempdir().unwrap();
    let bad_key = r#"{ "kind": "ExprStmt", "x": {
        "kind": "CompositeLit",
        "elts": [{ "kind": "KeyValueExpr",
                   "key": { "kind": "BasicLit", "lit": "string", "value": "\"k\"" },
                   "value": { "kind": "BasicLit", "lit": "int", "value": "1" } }]
    } }"#;
    write(dir.path(), "tree.json", &tree_with_body(bad_key));

    let output = run(dir.path(), &["emit", "tree.json", "-o", "out.scm"]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("error: structural violation in KeyValueExpr"));
    assert!(!dir.path().join("out.scm").exists());
}

#[test]
fn placeholder_needs_raw_output() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "tree.json", &tree_with_body(PLACEHOLDER_STMT));

    let laid_out = run(dir.path(), &["emit", "tree.json"]);
    assert_failure(&laid_out);
    assert!(stdout(&laid_out).is_empty());
    let err = stderr(&laid_out);
    assert!(err.contains("--raw"), "stderr: {err}");
    assert!(err.contains("FuncLit"), "stderr: {err}");

    let raw = run(dir.path(), &["emit", "tree.json", "--raw"]);
    assert_success(&raw);
    assert_eq!(
        stdout(&raw),
        "(package main (define-func (f (void)) (return <unhandled:FuncLit>)))\n"
    );
    assert!(stderr(&raw).contains("placeholder"));
}

#[test]
fn strict_mode_fails_on_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "tree.json", &tree_with_body(PLACEHOLDER_STMT));

    let output = run(dir.path(), &["emit", "tree.json", "--raw", "--strict"]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("error: unsupported node kind `FuncLit`"));
}

#[test]
fn character_literal_modes() {
    let dir = tempfile::tempdir().unwrap();
    let char_stmt = r#"{ "kind": "ExprStmt", "x": { "kind": "BasicLit", "lit": "char", "value": "'\\n'" } }"#;
    write(dir.path(), "tree.json", &tree_with_body(char_stmt));

    let decoded = run(dir.path(), &["emit", "tree.json"]);
    assert_success(&decoded);
    assert_eq!(stdout(&decoded), "(package main (define-func (f (void)) #\\newline))\n");

    let legacy = run(dir.path(), &["emit", "tree.json", "--legacy-chars"]);
    assert_success(&legacy);
    assert_eq!(stdout(&legacy), "(package main (define-func (f (void)) #\\\\))\n");
}

#[test]
fn config_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD_TREE);
    write(dir.path(), "goscm.toml", "[format]\nmax_width = 40\n");

    let output = run(dir.path(), &["emit", "add.json"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "(package main\n  (define-func\n    (Add #(a int) #(b int) int)\n    (return (+ a b))))\n"
    );

    // Flags win over the file.
    let output = run(dir.path(), &["emit", "add.json", "--width", "100"]);
    assert_success(&output);
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn explicit_config_and_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "tree.json", &tree_with_body(PLACEHOLDER_STMT));
    write(dir.path(), "strict.toml", "[emit]\nstrict = true\n");
    write(dir.path(), "broken.toml", "[emit]\nstrictness = 1\n");

    let strict = run(dir.path(), &["emit", "tree.json", "--raw", "--config", "strict.toml"]);
    assert_failure(&strict);
    assert!(stderr(&strict).contains("unsupported node kind"));

    let broken = run(dir.path(), &["emit", "tree.json", "--config", "broken.toml"]);
    assert_failure(&broken);
    assert!(stderr(&broken).contains("error: invalid config 'broken.toml'"));
}

// ── fmt ──────────────────────────────────────────────────────────────────

#[test]
fn fmt_rewrites_in_place_and_check_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "add.scm",
        "(package main (define-func (Add #(a int) #(b int) int) (return (+ a b))))",
    );

    let check = run(dir.path(), &["fmt", "add.scm", "--check", "--width", "40"]);
    assert_failure(&check);
    assert!(stderr(&check).contains("error: 'add.scm' is not formatted"));

    let format = run(dir.path(), &["fmt", "add.scm", "--width", "40"]);
    assert_success(&format);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "(package main\n  (define-func\n    (Add #(a int) #(b int) int)\n    (return (+ a b))))\n"
    );

    let recheck = run(dir.path(), &["fmt", "add.scm", "--check", "--width", "40"]);
    assert_success(&recheck);
}

#[test]
fn fmt_reports_unbalanced_input() {
    let dir = tempfile::tempdir().unwrap();
    let original = "(package main\n  (define-var #(x int))\n";
    let path = write(dir.path(), "broken.scm", original);

    let output = run(dir.path(), &["fmt", "broken.scm"]);
    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("cannot be read"), "stderr: {err}");
    assert!(err.contains("unclosed list"), "stderr: {err}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

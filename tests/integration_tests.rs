//! Integration tests for the todo-finder CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn todo_finder(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo-finder").unwrap();
    cmd.arg("--dir").arg(dir.path()).env_remove("RUST_LOG");
    cmd
}

/// Test CLI responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("todo-finder").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PATTERN"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("todo-finder").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("todo-finder"));
}

/// Test TODO reporting across the default roots
#[test]
fn test_reports_todo_comments() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/foo.c", "#include <stdio.h>\n\n// TODO - fix this\n");
    write(dir.path(), "threads/thread.h", "/* todo: document */\n");

    todo_finder(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/foo.c:3 TODO - fix this\n"))
        .stdout(predicate::str::contains("threads/thread.h:1 TODO - document\n"));
}

/// Test that build directories are never descended into
#[test]
fn test_build_directory_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/build/obj/gen.c", "// TODO - generated\n");
    write(dir.path(), "lib/.cache/old.c", "// TODO - stale\n");
    write(dir.path(), "lib/real.c", "// TODO - real\n");

    todo_finder(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/real.c:1 TODO - real"))
        .stdout(predicate::str::contains("generated").not())
        .stdout(predicate::str::contains("stale").not());
}

/// Test long line reporting when blame cannot name anyone
#[test]
fn test_long_line_outside_repository() {
    let dir = TempDir::new().unwrap();
    let long = format!("int x; /* {} */", "a".repeat(80));
    write(dir.path(), "devices/bar.h", &format!("short\n{}\n", long));

    todo_finder(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "devices/bar.h:2 is too long ({} chars), blame unknown",
            long.len()
        )));
}

/// Test search mode context window
#[test]
fn test_search_mode() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/foo.c", "nothing\nsome foo bar baz\n");
    write(dir.path(), "lib/notes.txt", "some foo bar baz\n");

    todo_finder(&dir)
        .arg("foo")
        .assert()
        .success()
        .stdout("lib/foo.c:2 some foo bar baz\n");
}

/// Test search mode ignores TODOs and long lines
#[test]
fn test_search_mode_has_no_analysis() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/foo.c", &format!("// TODO - {}\n", "b".repeat(90)));

    todo_finder(&dir)
        .arg("zzz")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// Test legacy profile skips userprog and DESIGNDOC
#[test]
fn test_legacy_profile() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "userprog/process.c", "// TODO - userprog\n");
    write(dir.path(), "threads/DESIGNDOC", "TODO - answer questions\n");
    write(dir.path(), "threads/synch.c", "// TODO: colon form\n");

    todo_finder(&dir)
        .args(["--profile", "legacy"])
        .assert()
        .success()
        .stdout("threads/synch.c:1 TODO - // TODO: colon form\n");
}

/// Test explicit roots replace the profile's
#[test]
fn test_root_override() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lib/foo.c", "// TODO - lib\n");
    write(dir.path(), "vm/page.c", "// TODO - vm\n");

    todo_finder(&dir)
        .args(["--root", "vm"])
        .assert()
        .success()
        .stdout("vm/page.c:1 TODO - vm\n");
}

/// Test invalid search pattern fails at startup
#[test]
fn test_invalid_pattern_fails() {
    let dir = TempDir::new().unwrap();

    todo_finder(&dir)
        .arg("(unclosed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search pattern"));
}

/// Test unknown profile fails at startup
#[test]
fn test_unknown_profile_fails() {
    let dir = TempDir::new().unwrap();

    todo_finder(&dir)
        .args(["--profile", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

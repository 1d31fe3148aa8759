use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use chrono::Datelike;
use predicates::prelude::*;
use tempfile::tempdir;

// Helper to build a command for the addcopyright binary
fn addcopyright() -> Command {
  Command::cargo_bin("addcopyright").expect("binary should build")
}

// Helper to create a target file without any copyright line
fn write_plain_file(dir: &Path, name: &str, contents: &str) -> Result<std::path::PathBuf> {
  let path = dir.join(name);
  fs::write(&path, contents)?;
  Ok(path)
}

#[test]
fn test_apache2_prepends_header_with_year_and_owner() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.go", "package main\n")?;

  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("prepending header to"))
    .stderr(predicate::str::contains("all done"));

  let year = chrono::Local::now().year();
  let content = fs::read_to_string(&target)?;
  assert!(content.starts_with(&format!("// Copyright {year} Acme. All Rights Reserved.\n")));
  assert!(content.contains("Licensed under the Apache License, Version 2.0"));
  assert!(content.ends_with("package main\n"));
  Ok(())
}

#[test]
fn test_sentinel_present_leaves_file_unchanged() -> Result<()> {
  let temp_dir = tempdir()?;
  let original = "// Copyright 2020 Foo\nbody";
  let target = write_plain_file(temp_dir.path(), "licensed.go", original)?;

  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("prepending header to").not())
    .stderr(predicate::str::contains("all done"));

  assert_eq!(fs::read_to_string(&target)?, original);
  Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&target)
    .assert()
    .success();
  let after_first = fs::read(&target)?;

  // The prepended header contains the default sentinel, so a second run
  // changes nothing.
  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("prepending header to").not());

  assert_eq!(fs::read(&target)?, after_first);
  Ok(())
}

#[test]
fn test_header_file_is_used_verbatim() -> Result<()> {
  let temp_dir = tempdir()?;
  let header = write_plain_file(temp_dir.path(), "NOTICE.txt", "HEADER\n")?;
  let target = write_plain_file(temp_dir.path(), "a.py", "print('hi')\n")?;

  addcopyright()
    .arg("--header")
    .arg(&header)
    .arg(&target)
    .assert()
    .success();

  assert_eq!(fs::read_to_string(&target)?, "HEADER\nprint('hi')\n");
  Ok(())
}

#[test]
fn test_header_from_stdin() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.py", "print('hi')\n")?;

  addcopyright()
    .args(["--header", "-"])
    .arg(&target)
    .write_stdin("STDIN HEADER\n")
    .assert()
    .success();

  assert_eq!(fs::read_to_string(&target)?, "STDIN HEADER\nprint('hi')\n");
  Ok(())
}

#[test]
fn test_custom_sentinel() -> Result<()> {
  let temp_dir = tempdir()?;
  let header = write_plain_file(temp_dir.path(), "NOTICE.txt", "SPDX-License-Identifier: MIT\n")?;
  let tagged = write_plain_file(temp_dir.path(), "tagged.rs", "// SPDX-License-Identifier: MIT\nfn main() {}\n")?;
  let untagged = write_plain_file(temp_dir.path(), "untagged.rs", "fn main() {}\n")?;

  addcopyright()
    .arg("--header")
    .arg(&header)
    .args(["--sentinel", "SPDX-License-Identifier"])
    .arg(&tagged)
    .arg(&untagged)
    .assert()
    .success();

  // The tagged file already carries the sentinel and stays untouched.
  assert_eq!(
    fs::read_to_string(&tagged)?,
    "// SPDX-License-Identifier: MIT\nfn main() {}\n"
  );
  assert!(fs::read_to_string(&untagged)?.starts_with("SPDX-License-Identifier: MIT\n"));
  Ok(())
}

#[test]
fn test_missing_header_source_is_usage_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .arg(&target)
    .assert()
    .failure()
    .stderr(predicate::str::contains("must provide a license type"));

  // No files touched on a usage error.
  assert_eq!(fs::read_to_string(&target)?, "fn main() {}\n");
  Ok(())
}

#[test]
fn test_apache2_without_owner_is_usage_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .arg("--apache2")
    .arg(&target)
    .assert()
    .failure()
    .stderr(predicate::str::contains("must provide --owner with --apache2"));

  assert_eq!(fs::read_to_string(&target)?, "fn main() {}\n");
  Ok(())
}

#[test]
fn test_empty_owner_is_usage_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .args(["--apache2", "--owner", ""])
    .arg(&target)
    .assert()
    .failure()
    .stderr(predicate::str::contains("must provide --owner with --apache2"));

  assert_eq!(fs::read_to_string(&target)?, "fn main() {}\n");
  Ok(())
}

#[test]
fn test_no_files_is_usage_error() {
  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("FILES"));
}

#[test]
fn test_unreadable_header_file_touches_nothing() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .args(["--header", "/nonexistent/NOTICE.txt"])
    .arg(&target)
    .assert()
    .failure()
    .stderr(predicate::str::contains("all done").not());

  assert_eq!(fs::read_to_string(&target)?, "fn main() {}\n");
  Ok(())
}

#[test]
fn test_missing_target_aborts_run_without_rollback() -> Result<()> {
  let temp_dir = tempdir()?;
  let first = write_plain_file(temp_dir.path(), "first.rs", "fn main() {}\n")?;
  let missing = temp_dir.path().join("missing.rs");
  let last = write_plain_file(temp_dir.path(), "last.rs", "fn main() {}\n")?;

  addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&first)
    .arg(&missing)
    .arg(&last)
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing.rs"))
    .stderr(predicate::str::contains("all done").not());

  // The file processed before the failure keeps its new header; the file
  // after the failure was never reached.
  assert!(fs::read_to_string(&first)?.starts_with("// Copyright"));
  assert_eq!(fs::read_to_string(&last)?, "fn main() {}\n");
  Ok(())
}

#[test]
fn test_files_processed_left_to_right() -> Result<()> {
  let temp_dir = tempdir()?;
  let b = write_plain_file(temp_dir.path(), "b.rs", "fn b() {}\n")?;
  let a = write_plain_file(temp_dir.path(), "a.rs", "fn a() {}\n")?;

  let assert = addcopyright()
    .args(["--apache2", "--owner", "Acme"])
    .arg(&b)
    .arg(&a)
    .assert()
    .success();

  let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
  let b_pos = stderr.find("b.rs").expect("b.rs should be logged");
  let a_pos = stderr.find("a.rs").expect("a.rs should be logged");
  assert!(b_pos < a_pos, "files should be processed in argument order");
  Ok(())
}

#[test]
fn test_quiet_suppresses_info_lines() -> Result<()> {
  let temp_dir = tempdir()?;
  let target = write_plain_file(temp_dir.path(), "a.rs", "fn main() {}\n")?;

  addcopyright()
    .args(["--quiet", "--apache2", "--owner", "Acme"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("prepending header to").not())
    .stderr(predicate::str::contains("all done").not());

  // Quiet only changes logging, not behavior.
  assert!(fs::read_to_string(&target)?.starts_with("// Copyright"));
  Ok(())
}

#[test]
fn test_empty_target_file_gets_header_only() -> Result<()> {
  let temp_dir = tempdir()?;
  let header = write_plain_file(temp_dir.path(), "NOTICE.txt", "HEADER\n")?;
  let target = write_plain_file(temp_dir.path(), "empty.rs", "")?;

  addcopyright()
    .arg("--header")
    .arg(&header)
    .arg(&target)
    .assert()
    .success();

  assert_eq!(fs::read_to_string(&target)?, "HEADER\n");
  Ok(())
}

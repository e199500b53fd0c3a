//! Failure modes: exit codes and diagnostics on stderr.

use std::process::Command;

use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

use crate::common::{TestRepo, stderr};

#[test]
fn test_not_a_repository() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    let plain = root.join("plain");
    std::fs::create_dir(&plain).unwrap();

    let output = Command::new(get_cargo_bin("gitsummary"))
        .current_dir(&plain)
        // Stop git from finding a repository above the temp directory
        .env("GIT_CEILING_DIRECTORIES", &root)
        .env("GITSUMMARY_CONFIG_PATH", root.join("config.toml"))
        .env_remove("RUST_LOG")
        .args(["prompt", "--no-style"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr(&output);
    assert!(stderr.contains("Not a git repository"), "{stderr}");
    assert!(stderr.contains("plain"), "{stderr}");
}

#[test]
fn test_missing_directory() {
    let repo = TestRepo::new();
    let output = repo.run(&["-C", "does-not-exist", "prompt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot change to directory"));
}

#[test]
fn test_invalid_branch_order_pattern() {
    let repo = TestRepo::new();
    repo.write_config(r#"branch-order = ["("]"#);
    let output = repo.run(&["prompt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = stderr(&output);
    assert!(stderr.contains("Invalid configuration"), "{stderr}");
    assert!(stderr.contains("config.toml"), "{stderr}");
}

#[test]
fn test_visibility_must_fit_quantity() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"
[prompt.quantities.branch]
show = "num"
"#,
    );
    let output = repo.run(&["prompt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains(r#"Invalid show = "num" for branch"#),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_unknown_style() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"
[prompt.quantities.staged]
style = ["sparkly"]
"#,
    );
    let output = repo.run(&["prompt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("sparkly"), "{}", stderr(&output));
}

#[test]
fn test_unknown_quantity_table() {
    let repo = TestRepo::new();
    repo.write_config("[prompt.quantities.colour]\nprefix = \"x\"\n");
    let output = repo.run(&["prompt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("Unknown quantity [prompt.quantities.colour]"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_unknown_top_level_key_warns() {
    let repo = TestRepo::new();
    repo.write_config("colour = \"always\"\n");
    let output = repo.run(&["prompt", "--no-style"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "master\n");
    let stderr = stderr(&output);
    assert!(stderr.contains("Unknown key colour"), "{stderr}");
}

#[test]
fn test_duplicate_sections_flag() {
    let repo = TestRepo::new();
    let output = repo.run(&["repo", "--sections", "branches,staged,branches"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("Section branches appears more than once in the --sections flag"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_duplicate_configured_sections() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"
[prompt]
sections = ["branch", "staged", "branch"]
"#,
    );
    let output = repo.run(&["prompt"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_explicit_config_must_exist() {
    let repo = TestRepo::new();
    let missing = repo.root_path().join("missing.toml");
    let output = repo.run(&["--config", missing.to_str().unwrap(), "prompt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read"), "{}", stderr(&output));
}

#[test]
fn test_verbose_logs_git_commands() {
    let repo = TestRepo::new();
    let output = repo.run(&["-v", "fields", "branch"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("git status --porcelain=2 -z"));
}

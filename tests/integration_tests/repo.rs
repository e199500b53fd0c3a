//! The full view: `gitsummary` / `gitsummary repo`.

use insta::assert_snapshot;

use crate::common::TestRepo;

/// master <- develop (+1) <- feature (+2), checked out on feature, with a
/// staged, a modified and an untracked file.
fn setup_branches_with_changes() -> TestRepo {
    let repo = TestRepo::new();
    repo.checkout_new("develop");
    repo.commit("develop work");
    repo.checkout_new("feature");
    repo.commit("feature one");
    repo.commit("feature two");

    repo.write_file("added.txt", "new");
    repo.git(&["add", "added.txt"]);
    repo.write_file("file.txt", "edited");
    repo.write_file("notes.md", "todo");
    repo
}

#[test]
fn test_full_view() {
    let repo = setup_branches_with_changes();
    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
    Staged    A added.txt

    Modified  M file.txt

    Untracked notes.md

                Remote     Target
      master
      develop              +1  .    master
    * feature              +2  .    develop
    ");
}

#[test]
fn test_repo_subcommand_matches_default() {
    let repo = setup_branches_with_changes();
    assert_eq!(
        repo.stdout(&["repo", "--no-style", "--width", "80"]),
        repo.stdout(&["--no-style", "--width", "80"])
    );
}

#[test]
fn test_sections_flag_orders_output() {
    let repo = setup_branches_with_changes();
    assert_eq!(
        repo.stdout(&["repo", "--no-style", "--sections", "untracked,modified"]),
        "Untracked notes.md\n\nModified  M file.txt\n"
    );
}

#[test]
fn test_sections_from_config() {
    let repo = setup_branches_with_changes();
    repo.write_config("[full]\nsections = [\"staged\"]\n");
    assert_eq!(repo.stdout(&["--no-style"]), "Staged A added.txt\n");
}

#[test]
fn test_remote_divergence_and_stash() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.commit("local one");
    repo.commit("local two");
    repo.write_file("file.txt", "scratch");
    repo.git(&["stash", "push", "-m", "experiment"]);

    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
    Stashes stash@{0} On master: experiment

               Remote     Target
    * master   +2  .
    ");
}

#[test]
fn test_branch_row_styles() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.commit("ahead");
    let output = repo.stdout(&["repo", "--sections", "branches", "--width", "80"]);
    let row = output.lines().nth(1).expect("branch row");
    // Differs from its remote: bold indicator, name and remote cell
    assert!(
        row.starts_with("\x1b[35;1m*\x1b[0m \x1b[1mmaster\x1b[0m \x1b[1m  +1  .\x1b[0m"),
        "{row:?}"
    );
}

#[test]
fn test_narrow_width_shortens_paths() {
    let repo = TestRepo::new();
    repo.write_file("a/rather/long/directory/name/file.txt", "x");
    repo.git(&["add", "a"]);
    assert_eq!(
        repo.stdout(&["repo", "--no-style", "--sections", "staged", "--width", "24"]),
        "Staged A a/rather/lon...\n"
    );
    // Test mode never shortens
    assert_eq!(
        repo.stdout(&[
            "repo",
            "--no-style",
            "--sections",
            "staged",
            "--width",
            "24",
            "--test-mode"
        ]),
        "Staged A a/rather/long/directory/name/file.txt\n"
    );
}

#[test]
fn test_detached_head_listed_as_branch() {
    let repo = TestRepo::new();
    repo.git(&["tag", "v1.0"]);
    repo.git(&["checkout", "--detach", "v1.0"]);
    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
               Remote     Target
      master
    * v1.0
    ");
}

#[test]
fn test_merge_conflict() {
    let repo = TestRepo::new();
    repo.checkout_new("other");
    repo.commit("theirs");
    repo.checkout("master");
    repo.commit("ours");
    let merge = repo.git_output(&["merge", "other"]);
    assert!(!merge.status.success(), "merge should conflict on file.txt");
    repo.write_file("notes.md", "todo");

    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
    Unmerged  UU file.txt

    Untracked notes.md

               Remote     Target
    * master
      other
    ");
}

#[test]
fn test_gone_upstream_leaves_remote_blank() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.commit("ahead");
    repo.git(&["update-ref", "-d", "refs/remotes/origin/master"]);

    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
               Remote     Target
    * master
    ");
}

#[test]
fn test_tag_named_like_branch() {
    let repo = TestRepo::new();
    // Git resolves a bare `develop` to this tag, not the branch
    repo.git(&["tag", "develop"]);
    repo.checkout_new("develop");
    repo.commit("develop one");
    repo.commit("develop two");

    assert_snapshot!(repo.stdout(&["--no-style", "--width", "80"]), @r"
                Remote     Target
      master
    * develop              +2  .    master
    ");
}

#[test]
fn test_empty_repository_prints_nothing() {
    let repo = TestRepo::empty();
    assert_eq!(repo.stdout(&["--no-style"]), "");
}

#[test]
fn test_directory_flag() {
    let repo = TestRepo::new();
    repo.write_file("notes.md", "todo");
    let elsewhere = tempfile::tempdir().unwrap();
    let output = repo
        .command(&["-C", repo.root_path().to_str().unwrap(), "repo", "--no-style"])
        .current_dir(elsewhere.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stdout).starts_with("Untracked notes.md\n"),
        "{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

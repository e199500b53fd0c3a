//! The compact one-line view: `gitsummary prompt`.

use insta::assert_snapshot;

use crate::common::TestRepo;

#[test]
fn test_clean_repository_shows_branch() {
    let repo = TestRepo::new();
    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"master");
}

#[test]
fn test_default_sections() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.commit("ahead one");
    repo.commit("ahead two");
    repo.write_file("staged.txt", "s");
    repo.git(&["add", "staged.txt"]);
    repo.write_file("file.txt", "modified");
    repo.write_file("untracked.txt", "u");

    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"master ↑2 +1 *1 %");
}

#[test]
fn test_default_styles() {
    let repo = TestRepo::new();
    repo.write_file("staged.txt", "s");
    repo.git(&["add", "staged.txt"]);
    assert_snapshot!(
        repo.stdout(&["prompt"]).escape_debug().to_string(),
        @r"\u{1b}[35mmaster\u{1b}[0m \u{1b}[32m+\u{1b}[0m\u{1b}[32m1\u{1b}[0m\n"
    );
}

#[test]
fn test_configured_formats() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.git(&["checkout", "-b", "develop"]);
    repo.commit("develop work");
    repo.write_config(
        r#"
[prompt]
sections = ["branch", "target", "ahead-target", "untracked"]
separator = { text = " | " }

[prompt.quantities.target]
show = "yes"
prefix = "→"

[prompt.quantities.ahead-target]
show = "num"
prefix = "("
suffix = ")"

[prompt.quantities.untracked]
show = "num"
prefix = "?"
"#,
    );
    repo.write_file("a.txt", "a");
    repo.write_file("b.txt", "b");

    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"develop | →master | (1) | ?2");
}

#[test]
fn test_empty_boolean_prefix_adds_no_separator() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"
[prompt]
sections = ["branch", "untracked", "staged"]

[prompt.quantities.untracked]
prefix = ""
"#,
    );
    repo.write_file("untracked.txt", "u");
    repo.write_file("staged.txt", "s");
    repo.git(&["add", "staged.txt"]);

    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"master +1");
}

#[test]
fn test_sections_flag_overrides_config() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "a");
    assert_snapshot!(
        repo.stdout(&["prompt", "--no-style", "--sections", "untracked,branch"]),
        @"% master"
    );
}

#[test]
fn test_long_branch_is_shortened() {
    let repo = TestRepo::new();
    repo.git(&["checkout", "-b", "feature/a-very-descriptive-branch-name"]);
    repo.write_file("staged.txt", "s");
    repo.git(&["add", "staged.txt"]);

    assert_snapshot!(
        repo.stdout(&["prompt", "--no-style", "--width", "20"]),
        @"feature/a-very... +1"
    );
    // Too narrow to keep anything else: the branch alone, cut to the width
    assert_snapshot!(
        repo.stdout(&["prompt", "--no-style", "--width", "4", "--sections", "staged,branch"]),
        @"feat"
    );
}

#[test]
fn test_tag_named_like_branch() {
    let repo = TestRepo::new();
    repo.setup_remote("master");
    repo.git(&["tag", "master"]);
    repo.commit("ahead");
    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"master ↑1");
}

#[test]
fn test_unborn_branch() {
    let repo = TestRepo::empty();
    repo.write_file("new.txt", "n");
    assert_snapshot!(repo.stdout(&["prompt", "--no-style"]), @"master %");
}

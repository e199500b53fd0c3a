use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

/// Git environment shared by fixture setup and the binary under test, so
/// neither sees the user's config and commits are reproducible.
const GIT_ENV: &[(&str, &str)] = &[
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_SYSTEM", "/dev/null"),
    ("GIT_AUTHOR_NAME", "Test User"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test User"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
    ("GIT_AUTHOR_DATE", "2025-01-01T00:00:00Z"),
    ("GIT_COMMITTER_DATE", "2025-01-01T00:00:00Z"),
    ("LC_ALL", "C"),
    ("LANG", "C"),
];

pub struct TestRepo {
    temp_dir: TempDir,
    root: PathBuf,
}

impl TestRepo {
    /// An initialized repository on `master` with no commits.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        // Canonicalize to resolve symlinks (macOS /var -> /private/var)
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp path")
            .join("repo");
        std::fs::create_dir(&root).expect("Failed to create repo directory");

        let repo = Self { temp_dir, root };
        repo.git(&["init", "-b", "master"]);
        repo
    }

    /// A repository on `master` with one commit.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.commit("Initial commit");
        repo
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Path of the config file the binary reads. It does not exist until
    /// [`write_config`](Self::write_config) is called.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, contents).expect("Failed to write file");
    }

    fn configure_git_env(cmd: &mut Command) {
        for (key, value) in GIT_ENV {
            cmd.env(key, value);
        }
    }

    /// Run git in the repository without checking its exit status.
    pub fn git_output(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        Self::configure_git_env(&mut cmd);
        cmd.args(args)
            .current_dir(&self.root)
            .output()
            .expect("Failed to execute git")
    }

    /// Run git in the repository, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = self.git_output(args);
        if !output.status.success() {
            panic!(
                "git {} failed:\nstdout: {}\nstderr: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Commit a change to `file.txt`.
    pub fn commit(&self, message: &str) {
        self.write_file("file.txt", message);
        self.git(&["add", "file.txt"]);
        self.git(&["commit", "-m", message]);
    }

    /// Create `branch` at HEAD and switch to it.
    pub fn checkout_new(&self, branch: &str) {
        self.git(&["checkout", "-b", branch]);
    }

    pub fn checkout(&self, branch: &str) {
        self.git(&["checkout", branch]);
    }

    /// Add a bare `origin` remote and push `branch` to it with tracking.
    pub fn setup_remote(&self, branch: &str) {
        let remote = self.temp_dir.path().join("origin.git");
        if !remote.exists() {
            let remote = remote.to_str().expect("temp path is UTF-8");
            self.git(&["init", "--bare", "-b", "master", remote]);
            self.git(&["remote", "add", "origin", remote]);
        }
        self.git(&["push", "-u", "origin", branch]);
    }

    /// The binary under test, isolated from the user's config and terminal.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(get_cargo_bin("gitsummary"));
        Self::configure_git_env(&mut cmd);
        cmd.env("GITSUMMARY_CONFIG_PATH", self.config_path())
            .env_remove("RUST_LOG")
            .env_remove("COLUMNS")
            .current_dir(&self.root)
            .args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to run gitsummary")
    }

    /// Run the binary, expect success, and return stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "gitsummary {} failed:\n{}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

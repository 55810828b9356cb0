//! End-to-end tests driving the `jsw` binary.
#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BASE_PATH: &str = "/usr/bin:/bin";

/// Test context that sets up an isolated jsw home and fake JDKs
struct TestContext {
    temp_dir: TempDir,
    jsw_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let jsw_home = temp_dir.path().join(".jsw");
        std::fs::create_dir_all(&jsw_home).expect("failed to create jsw home");
        Self { temp_dir, jsw_home }
    }

    /// Create `<tmp>/<name>/bin/java`.
    fn fake_jdk(&self, name: &str) -> PathBuf {
        let root = self.temp_dir.path().join(name);
        std::fs::create_dir_all(root.join("bin")).expect("failed to create bin");
        std::fs::write(root.join("bin").join("java"), "#!/bin/sh\n").expect("failed to write java");
        root
    }

    /// A `jsw` invocation with a clean environment plus `vars`.
    fn jsw_cmd(&self, vars: &[(&str, &str)]) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_jsw");
        let mut cmd = Command::new(bin_path);
        cmd.env_clear()
            .env("PATH", BASE_PATH)
            .env("NO_COLOR", "1")
            .env("JSW_HOME", &self.jsw_home)
            .current_dir(self.temp_dir.path());
        for (key, value) in vars {
            cmd.env(key, value);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with(&[], args)
    }

    fn run_with(&self, vars: &[(&str, &str)], args: &[&str]) -> Output {
        self.jsw_cmd(vars)
            .args(args)
            .output()
            .expect("failed to run jsw")
    }

    fn registry(&self) -> String {
        std::fs::read_to_string(self.jsw_home.join("jdks")).unwrap_or_default()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse `export KEY='value'` lines emitted in bash mode.
fn exports(output: &Output) -> Vec<(String, String)> {
    stdout(output)
        .lines()
        .filter_map(|line| line.strip_prefix("export "))
        .filter_map(|rest| rest.split_once('='))
        .map(|(k, v)| (k.to_string(), v.trim_matches('\'').to_string()))
        .collect()
}

fn export_of<'a>(vars: &'a [(String, String)], key: &str) -> Option<&'a str> {
    vars.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_no_arguments_prints_help() {
    let ctx = TestContext::new();
    let output = ctx.run(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_missing_argument_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["use"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_list_empty_registry() {
    let ctx = TestContext::new();
    let output = ctx.run(&["ls"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No JDKs registered"));
}

#[test]
fn test_add_and_list() {
    let ctx = TestContext::new();
    let jdk11 = ctx.fake_jdk("jdk11");
    let jdk17 = ctx.fake_jdk("jdk17");

    assert!(ctx.run(&["add", "jdk17", &display(&jdk17)]).status.success());
    assert!(ctx.run(&["add", "jdk11", &display(&jdk11)]).status.success());

    let output = ctx.run(&["list"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains(&display(&jdk11)));
    assert!(listing.contains(&display(&jdk17)));
    assert!(listing.find("jdk11").unwrap() < listing.find("jdk17").unwrap());
    assert!(listing.contains("2 aliases"));
}

#[test]
fn test_add_defaults_to_current_directory() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("here");

    let output = ctx
        .jsw_cmd(&[])
        .current_dir(&jdk)
        .args(["add", "here"])
        .output()
        .expect("failed to run jsw");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(ctx.registry(), format!("here|{}\n", display(&jdk)));
}

#[test]
fn test_add_rejects_directory_without_java() {
    let ctx = TestContext::new();
    let empty = ctx.temp_dir.path().join("empty");
    std::fs::create_dir_all(&empty).unwrap();

    let output = ctx.run(&["add", "broken", &display(&empty)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("bin/java"));
    assert_eq!(ctx.registry(), "");
}

#[test]
fn test_add_same_alias_replaces() {
    let ctx = TestContext::new();
    let a = ctx.fake_jdk("a");
    let b = ctx.fake_jdk("b");

    assert!(ctx.run(&["add", "x", &display(&a)]).status.success());
    assert!(ctx.run(&["add", "x", &display(&b)]).status.success());
    assert_eq!(ctx.registry(), format!("x|{}\n", display(&b)));
}

#[test]
fn test_remove_unknown_alias_succeeds() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("jdk8");
    assert!(ctx.run(&["add", "jdk8", &display(&jdk)]).status.success());
    let before = ctx.registry();

    let output = ctx.run(&["rm", "nonexistent"]);
    assert!(output.status.success());
    assert_eq!(ctx.registry(), before);

    let output = ctx.run(&["remove", "jdk8"]);
    assert!(output.status.success());
    assert_eq!(ctx.registry(), "");
}

#[test]
fn test_use_unknown_alias_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--shell", "bash", "use", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown alias 'nope'"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_use_then_clear_restores_path() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("jdk21");
    assert!(ctx.run(&["add", "jdk21", &display(&jdk)]).status.success());

    let used = ctx.run(&["--shell", "bash", "use", "jdk21"]);
    assert!(used.status.success(), "{}", stderr(&used));
    let vars = exports(&used);
    let expected_path = format!("{}:{BASE_PATH}", display(&jdk.join("bin")));
    assert_eq!(export_of(&vars, "PATH"), Some(expected_path.as_str()));
    assert_eq!(export_of(&vars, "JAVA_HOME"), Some(display(&jdk).as_str()));
    assert_eq!(export_of(&vars, "JSW_ACTIVE"), Some("jdk21"));
    assert_eq!(export_of(&vars, "JSW_ORIGINAL_PATH"), Some(BASE_PATH));

    let session: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let cleared = ctx.run_with(&session, &["--shell", "bash", "clear"]);
    assert!(cleared.status.success());
    let script = stdout(&cleared);
    assert!(script.contains(&format!("export PATH='{BASE_PATH}'")));
    assert!(script.contains("unset JAVA_HOME"));
    assert!(script.contains("unset JSW_ACTIVE"));
}

#[test]
fn test_remove_active_alias_clears_session() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("x");
    assert!(ctx.run(&["add", "x", &display(&jdk)]).status.success());
    let used = ctx.run(&["--shell", "bash", "use", "x"]);
    let vars = exports(&used);
    let session: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

    let removed = ctx.run_with(&session, &["--shell", "bash", "rm", "x"]);
    assert!(removed.status.success());
    let script = stdout(&removed);
    assert!(script.contains(&format!("export PATH='{BASE_PATH}'")));
    assert!(script.contains("unset JSW_ACTIVE"));
}

#[test]
fn test_current_reports_external_and_unselected() {
    let ctx = TestContext::new();

    let output = ctx.run(&["current"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "(not selected)");

    let output = ctx.run_with(&[("JAVA_HOME", "/usr/lib/jvm/system")], &["current"]);
    assert_eq!(stdout(&output).trim(), "/usr/lib/jvm/system (external)");
}

#[test]
fn test_default_without_value() {
    let ctx = TestContext::new();
    let output = ctx.run(&["default"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "(not set)");
}

#[test]
fn test_default_unknown_alias_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["default", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!ctx.jsw_home.join("default").exists());
}

#[test]
fn test_end_to_end_default_scenario() {
    let ctx = TestContext::new();
    let jdk11 = ctx.fake_jdk("jdk11");

    // add
    let added = ctx.run(&["add", "jdk11", &display(&jdk11)]);
    assert!(added.status.success(), "{}", stderr(&added));
    assert_eq!(ctx.registry(), format!("jdk11|{}\n", display(&jdk11)));

    // default
    let defaulted = ctx.run(&["--shell", "bash", "default", "jdk11"]);
    assert!(defaulted.status.success());
    assert_eq!(
        std::fs::read_to_string(ctx.jsw_home.join("default")).unwrap().trim(),
        "jdk11"
    );
    assert_eq!(export_of(&exports(&defaulted), "JSW_ACTIVE"), Some("jdk11"));

    // new session: init loads the default
    let started = ctx.run(&["--shell", "bash", "init"]);
    assert!(started.status.success());
    let vars = exports(&started);
    assert_eq!(export_of(&vars, "JSW_ACTIVE"), Some("jdk11"));

    // current
    let session: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let current = ctx.run_with(&session, &["current"]);
    assert_eq!(
        stdout(&current).trim(),
        format!("jdk11 -> {}", display(&jdk11))
    );
}

#[test]
fn test_init_with_stale_default_is_silent() {
    let ctx = TestContext::new();
    std::fs::write(ctx.jsw_home.join("default"), "deleted\n").unwrap();

    let output = ctx.run(&["--shell", "bash", "init"]);
    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
    assert_eq!(export_of(&exports(&output), "JSW_ACTIVE"), None);
}

#[test]
fn test_hook_switches_once_per_marker() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("jdk17");
    assert!(ctx.run(&["add", "jdk17", &display(&jdk)]).status.success());
    let project = ctx.temp_dir.path().join("project");
    std::fs::create_dir_all(project.join("src")).unwrap();
    std::fs::write(project.join(".java-version"), "jdk17\n").unwrap();

    let first = ctx
        .jsw_cmd(&[("JSW_AUTO_SWITCH", "1")])
        .current_dir(project.join("src"))
        .args(["--shell", "bash", "hook"])
        .output()
        .expect("failed to run jsw");
    assert!(first.status.success());
    let vars = exports(&first);
    assert_eq!(export_of(&vars, "JSW_ACTIVE"), Some("jdk17"));
    assert_eq!(export_of(&vars, "JSW_AUTO_LAST"), Some("jdk17"));

    let mut session: Vec<(&str, &str)> =
        vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    session.push(("JSW_AUTO_SWITCH", "1"));
    let second = ctx
        .jsw_cmd(&session)
        .current_dir(project.join("src"))
        .args(["--shell", "bash", "hook"])
        .output()
        .expect("failed to run jsw");
    assert!(second.status.success());
    assert_eq!(stdout(&second), "");
}

#[test]
fn test_hook_disabled_does_nothing() {
    let ctx = TestContext::new();
    std::fs::write(ctx.temp_dir.path().join(".java-version"), "jdk17\n").unwrap();

    let output = ctx.run(&["--shell", "bash", "hook"]);
    assert!(output.status.success());
    assert_eq!(export_of(&exports(&output), "JSW_ACTIVE"), None);
}

#[test]
fn test_session_hooks_ignore_broken_config() {
    let ctx = TestContext::new();
    std::fs::write(ctx.jsw_home.join("config.toml"), "marker_file = [").unwrap();

    for command in ["init", "hook"] {
        let output = ctx.run_with(&[("JSW_AUTO_SWITCH", "1")], &["--shell", "bash", command]);
        assert!(output.status.success(), "{command} failed");
        assert_eq!(stdout(&output), "", "{command} wrote to stdout");
        assert_eq!(stderr(&output), "", "{command} wrote to stderr");
    }

    let output = ctx.run(&["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid config"));
}

#[test]
fn test_add_refuses_to_rewrite_undecodable_registry() {
    let ctx = TestContext::new();
    let jdk = ctx.fake_jdk("c");
    let before = b"a|/opt/a\nb|/opt/caf\xe9\n".to_vec();
    std::fs::write(ctx.jsw_home.join("jdks"), &before).unwrap();

    let output = ctx.run(&["add", "c", &display(&jdk)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read"));
    assert_eq!(std::fs::read(ctx.jsw_home.join("jdks")).unwrap(), before);
}

#[test]
fn test_completions_script() {
    let ctx = TestContext::new();
    let output = ctx.run(&["completions", "bash"]);
    assert!(output.status.success());
    let script = stdout(&output);
    assert!(!script.is_empty());
    assert!(script.contains("jsw"));
}

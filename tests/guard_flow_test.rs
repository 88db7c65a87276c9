//! Library-level guard flow tests.
//!
//! These exercise the real probe and the real shell build runner against
//! temp projects, using `MockUI` to capture exactly what the guard shows.

use belay::config::load_config;
use belay::guard::{run_guard, GuardOutcome, GuardPlan, PlanOverrides, ShellBuildRunner};
use belay::module::LibraryProbe;
use belay::ui::MockUI;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("native")).unwrap();
    fs::write(temp.path().join("belay.yml"), config).unwrap();
    temp
}

fn resolve(root: &Path) -> GuardPlan {
    let config = load_config(root, None).unwrap();
    GuardPlan::resolve(&config, root, &PlanOverrides::default()).unwrap()
}

#[test]
fn missing_module_triggers_exactly_one_build_in_the_build_dir() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "pwd >> where.log"
version:
  check: false
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui)
        .unwrap();

    assert!(matches!(outcome, GuardOutcome::Rebuilt { .. }));

    let log = fs::read_to_string(temp.path().join("native/where.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1, "build must run exactly once");

    let recorded = fs::canonicalize(lines[0]).unwrap();
    let expected = fs::canonicalize(temp.path().join("native")).unwrap();
    assert_eq!(recorded, expected, "build must run in the configured dir");
}

#[test]
fn build_output_is_passed_through_verbatim() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "echo stdout line; echo stderr line >&2"
version:
  check: false
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui).unwrap();

    assert!(ui.command_outputs().iter().any(|o| o.contains("stdout line")));
    assert!(ui.command_errors().iter().any(|e| e.contains("stderr line")));
}

#[test]
fn silent_build_produces_no_passthrough() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "true"
version:
  check: false
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui).unwrap();

    assert!(ui.command_outputs().is_empty());
    assert!(ui.command_errors().is_empty());
}

#[test]
fn abort_mode_skips_the_build_entirely() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "echo run >> invocations.log"
version:
  check: false
on_unusable: abort
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui)
        .unwrap();

    assert!(matches!(outcome, GuardOutcome::Aborted { .. }));
    assert!(!temp.path().join("native/invocations.log").exists());
    assert!(ui
        .messages()
        .iter()
        .any(|m| m.contains("No current binary was found")));
}

#[test]
fn notice_names_the_running_platform() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "true"
version:
  check: false
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui).unwrap();

    let notices = ui.messages().join("\n");
    assert!(notices.contains(std::env::consts::OS));
}

#[test]
fn garbage_artifact_counts_as_unusable() {
    let temp = setup_project(
        r#"
module:
  path: native/index.node
build:
  command: "echo run >> invocations.log"
version:
  check: false
"#,
    );
    fs::write(temp.path().join("native/index.node"), b"not a library").unwrap();

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui)
        .unwrap();

    assert!(matches!(outcome, GuardOutcome::Rebuilt { .. }));
    assert!(temp.path().join("native/invocations.log").exists());
}

#[test]
fn expected_version_flows_from_manifest_to_plan() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "true"
version:
  manifest: package.json
"#,
    );
    fs::write(
        temp.path().join("package.json"),
        r#"{"name":"pty","version":"3.1.4"}"#,
    )
    .unwrap();

    let plan = resolve(temp.path());
    assert_eq!(plan.expected_version.as_deref(), Some("3.1.4"));
    assert_eq!(plan.module.version_symbol.as_deref(), Some("version"));
}

#[test]
fn rebuild_failure_is_reported_in_the_outcome() {
    let temp = setup_project(
        r#"
module:
  name: pty
build:
  command: "exit 2"
version:
  check: false
"#,
    );

    let plan = resolve(temp.path());
    let mut ui = MockUI::new();
    let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui)
        .unwrap();

    let build = outcome.build_result().unwrap();
    assert!(!build.success);
    assert_eq!(build.exit_code, Some(2));
}

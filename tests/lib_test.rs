//! Library integration tests: the end-to-end properties a provisioning
//! script relies on.

use std::collections::HashMap;

use azlab::azure::deployment_output;
use azlab::naming::unique_string;
use azlab::shell::{RunOptions, Runner};
use azlab::template::render_file;
use azlab::ui::Reporter;
use azlab::AzlabError;

fn runner() -> Runner {
    Runner::with_reporter(Reporter::plain())
}

#[test]
fn run_exit_zero_succeeds_with_status_labels() {
    let result = runner()
        .run("exit 0", &RunOptions::with_status("ok", "bad"))
        .unwrap();

    assert!(result.success);
    assert_eq!(result.exit_code, Some(0));
}

#[test]
fn run_exit_one_fails_without_raising() {
    let result = runner()
        .run("exit 1", &RunOptions::with_status("ok", "bad"))
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.exit_code, Some(1));
}

#[test]
fn run_captures_combined_output() {
    let cmd = if cfg!(target_os = "windows") {
        "echo out & echo err 1>&2"
    } else {
        "echo out; echo err >&2"
    };
    let result = runner().run_quiet(cmd).unwrap();

    assert!(result.output.contains("out"));
    assert!(result.output.contains("err"));
}

#[test]
fn json_command_output_is_available_as_value() {
    // sh strips unquoted double quotes, cmd.exe passes them through
    let cmd = if cfg!(target_os = "windows") {
        r#"echo {"properties":{"outputs":{"x":{"value":42}}}}"#
    } else {
        r#"echo '{"properties":{"outputs":{"x":{"value":42}}}}'"#
    };
    let result = runner().run_quiet(cmd).unwrap();

    let reporter = Reporter::plain();
    let value = deployment_output(&reporter, &result, "x", None);
    assert_eq!(value, Some(serde_json::Value::from(42)));
}

#[test]
fn missing_deployment_output_is_none_not_panic() {
    let result = runner().run_quiet("echo {}").unwrap();

    let reporter = Reporter::plain();
    assert!(deployment_output(&reporter, &result, "anything", None).is_none());
}

#[test]
fn unique_string_is_stable_and_bounded() {
    let first = unique_string("foo");
    assert_eq!(first, unique_string("foo"));
    assert_eq!(first, 1_138_862);
    assert!(first < 100_000_000);
    assert_ne!(unique_string("foo"), unique_string("bar"));
}

#[test]
fn template_round_trip_through_the_filesystem() {
    let source = tempfile::TempDir::new().unwrap();
    let target = tempfile::TempDir::new().unwrap();
    std::fs::write(source.path().join("greeting.txt"), "hello {name}").unwrap();

    let mut vars = HashMap::new();
    vars.insert("name".to_string(), "world".to_string());

    let written = render_file("greeting.txt", source.path(), target.path(), &vars).unwrap();
    assert_eq!(std::fs::read_to_string(written).unwrap(), "hello world");
}

#[test]
fn template_with_unsupplied_key_fails() {
    let source = tempfile::TempDir::new().unwrap();
    let target = tempfile::TempDir::new().unwrap();
    std::fs::write(source.path().join("t.txt"), "hello {name}").unwrap();

    let result = render_file("t.txt", source.path(), target.path(), &HashMap::new());
    assert!(matches!(
        result,
        Err(AzlabError::UnresolvedPlaceholder { .. })
    ));
}

#[test]
fn error_types_are_public() {
    let err = AzlabError::UnresolvedPlaceholder {
        name: "cluster".into(),
    };
    assert!(err.to_string().contains("cluster"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> azlab::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

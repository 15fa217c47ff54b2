// Contract tests: assert only durable external invariants of the hook.
// They never assert specific diagnostic wording, only exit codes, file state
// and stream usage.

mod common;

use common::{commit_msg_file, read_file, run_hook, ORIGINAL_CONTENT};

// ---- Exit code invariants ----

#[test]
fn contract_exit_code_zero_on_valid_substitutions() {
    let file = commit_msg_file(ORIGINAL_CONTENT);
    let (_, _, exit_code) = run_hook(r#"{"x": "y"}"#, file.path());
    assert_eq!(exit_code, 0);
}

#[test]
fn contract_exit_code_nonzero_on_bad_substitutions() {
    for input in ["", "not json", "{\"a\": 1}", "[]", "null"] {
        let file = commit_msg_file(ORIGINAL_CONTENT);
        let (_, _, exit_code) = run_hook(input, file.path());
        assert_ne!(exit_code, 0, "input {input:?} must fail");
    }
}

// ---- File preservation invariants ----

#[test]
fn contract_failure_never_touches_file() {
    for input in ["{\"Original\":", "{\"Original\": [\"Modified\"]}"] {
        let file = commit_msg_file(ORIGINAL_CONTENT);
        run_hook(input, file.path());
        assert_eq!(
            read_file(&file),
            ORIGINAL_CONTENT,
            "input {input:?} must leave the file untouched"
        );
    }
}

#[test]
fn contract_distinct_diagnostics_per_failure_kind() {
    let file = commit_msg_file(ORIGINAL_CONTENT);
    let (_, malformed, _) = run_hook("{", file.path());
    let (_, invalid, _) = run_hook("{\"a\": 1}", file.path());
    assert!(!malformed.is_empty());
    assert!(!invalid.is_empty());
    assert_ne!(malformed, invalid, "failure kinds must be distinguishable");
}

#[test]
fn contract_rerun_is_idempotent_without_cascade() {
    let file = commit_msg_file(ORIGINAL_CONTENT);
    run_hook(r#"{"Original": "Modified"}"#, file.path());
    run_hook(r#"{"Original": "Modified"}"#, file.path());
    assert_eq!(read_file(&file), "Modified Content");
}

// ---- Stream invariants ----

#[test]
fn contract_no_output_on_success() {
    let file = commit_msg_file(ORIGINAL_CONTENT);
    let (stdout, stderr, _) = run_hook(r#"{"Original": "Modified"}"#, file.path());
    assert!(stdout.is_empty(), "stdout should be empty, got: {stdout}");
    assert!(stderr.is_empty(), "stderr should be empty, got: {stderr}");
}

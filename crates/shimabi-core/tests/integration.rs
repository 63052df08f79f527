use shimabi_core::facts::catalog::Profile;
use shimabi_core::facts::table;
use shimabi_core::report::model::{Report, Status, ToolInfo};
use std::io::Write;
use tempfile::NamedTempFile;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "shimabi".into(),
        version: "0.1.0-test".into(),
    }
}

fn check(profile: Profile) -> Report {
    shimabi_core::check(profile, tool())
}

/// Compiles WAT to a temp file and runs the full audit pipeline.
fn inspect_wat(text: &str) -> shimabi_core::report::model::AuditReport {
    let wasm = wat::parse_str(text).expect("fixture should compile");
    let mut tmp = NamedTempFile::new().expect("create temp file");
    tmp.write_all(&wasm).expect("write wasm bytes");
    tmp.flush().expect("flush");

    shimabi_core::inspect(tmp.path(), tool()).expect("inspect should succeed")
}

const REACTOR: &str = r#"
(module
  (import "wasi_snapshot_preview1" "clock_time_get" (func (param i32 i64 i32) (result i32)))
  (import "wasi_snapshot_preview1" "path_open" (func (param i32 i32 i32 i32 i32 i64 i64 i32 i32) (result i32)))
  (import "wasi_snapshot_preview1" "sock_recv" (func (param i32 i32 i32 i32 i32 i32) (result i32)))
  (import "wasi_snapshot_preview1" "sock_send" (func (param i32 i32 i32 i32 i32) (result i32)))
  (import "wasi_snapshot_preview1" "fd_close" (func (param i32) (result i32)))
  (memory 2)
  (func $init)
  (export "memory" (memory 0))
  (export "_initialize" (func $init))
)
"#;

#[test]
fn check_reports_profile_size_and_table_order() {
    for profile in [Profile::Minimal, Profile::Extended] {
        let report = check(profile);
        let selected = table::select(profile);

        assert_eq!(report.profile, profile);
        assert_eq!(report.facts_total, selected.len());
        assert!(!report.evaluated.is_empty());
        for (evaluated, fact) in report.evaluated.iter().zip(&selected) {
            assert_eq!(evaluated.name, fact.name);
        }
    }
}

#[test]
fn check_stops_at_first_failure() {
    let report = check(Profile::Extended);

    let failures = report.evaluated.iter().filter(|f| !f.passed).count();
    match report.outcome.status {
        Status::Passed => {
            assert_eq!(failures, 0);
            assert_eq!(report.evaluated.len(), report.facts_total);
        }
        Status::Failed => {
            assert_eq!(failures, 1);
            assert!(!report.evaluated.last().unwrap().passed);
            let failure = report.outcome.failure.as_ref().unwrap();
            assert_eq!(failure.fact_name, report.evaluated.last().unwrap().name);
        }
    }
}

#[test]
fn check_is_deterministic() {
    let a = serde_json::to_string(&check(Profile::Extended)).unwrap();
    let b = serde_json::to_string(&check(Profile::Extended)).unwrap();
    assert_eq!(a, b);
}

#[cfg(all(target_os = "linux", target_pointer_width = "64"))]
#[test]
fn lp64_linux_fails_minimal_at_long() {
    let report = check(Profile::Minimal);

    assert_eq!(report.outcome.status, Status::Failed);
    assert_eq!(report.outcome.exit_code, 1);
    let failure = report.outcome.failure.unwrap();
    assert_eq!(failure.fact_name, "size of long");
    assert_eq!((failure.expected, failure.actual), (4, 8));
    assert_eq!(report.evaluated.len(), 2);
}

#[cfg(all(target_arch = "wasm32", target_os = "wasi"))]
#[test]
fn wasi_reference_profile_passes() {
    for profile in [Profile::Minimal, Profile::Extended] {
        let report = check(profile);
        assert_eq!(report.outcome.status, Status::Passed);
        assert_eq!(report.outcome.exit_code, 0);
    }
}

#[test]
fn reactor_on_shim_surface_is_clean() {
    let report = inspect_wat(REACTOR);

    assert_eq!(report.analysis.status, "ok");
    assert_eq!(report.exit_code, 0);
    assert_eq!(report.imports.len(), 5);
    assert!(report.findings.is_clean());
    assert_eq!(report.artifact.hash.algorithm, "sha256");
    assert_eq!(report.artifact.hash.value.len(), 64);
}

#[test]
fn stubbed_write_links_and_is_reported() {
    let report = inspect_wat(
        r#"
        (module
          (import "wasi_snapshot_preview1" "fd_write" (func (param i32 i32 i32 i32) (result i32)))
          (import "env" "getpid" (func (result i32)))
          (memory 1)
          (func $init)
          (export "memory" (memory 0))
          (export "_initialize" (func $init))
        )
        "#,
    );

    assert_eq!(report.exit_code, 0);
    assert!(report.findings.unsupported_imports.is_empty());
    assert_eq!(report.findings.stubbed_imports.len(), 1);
    assert_eq!(report.findings.stubbed_imports[0].name, "fd_write");
}

#[test]
fn unregistered_import_fails_the_audit() {
    let report = inspect_wat(
        r#"
        (module
          (import "env" "abort" (func))
          (memory 1)
          (func $init)
          (export "memory" (memory 0))
          (export "_initialize" (func $init))
        )
        "#,
    );

    assert_eq!(report.exit_code, 1);
    assert_eq!(report.findings.unsupported_imports.len(), 1);
    assert_eq!(report.findings.unsupported_imports[0].module, "env");
    assert_eq!(report.findings.unsupported_imports[0].name, "abort");
}

#[test]
fn command_module_fails_for_missing_reactor_exports() {
    let report = inspect_wat(r#"(module (func $s) (export "_start" (func $s)))"#);

    assert_eq!(report.exit_code, 1);
    assert_eq!(report.findings.missing_exports, vec!["memory", "_initialize"]);
}

#[test]
fn malformed_module_is_a_finding_not_an_error() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"\0asm\x01\0\0\0\x02\xff").unwrap();
    tmp.flush().unwrap();

    let report = shimabi_core::inspect(tmp.path(), tool()).unwrap();

    assert_eq!(report.analysis.status, "parse_error");
    assert_eq!(report.exit_code, 1);
}

#[test]
fn unreadable_path_is_an_error() {
    let result = shimabi_core::inspect(std::path::Path::new("/no/such/module.wasm"), tool());
    assert!(result.is_err());
}

#[test]
fn audit_json_shape() {
    let report = inspect_wat(REACTOR);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["schema_version"], shimabi_core::SCHEMA_VERSION);
    assert!(json["findings"]["unsupported_imports"].as_array().unwrap().is_empty());
    assert!(json["findings"]["stubbed_imports"].as_array().unwrap().is_empty());
    assert_eq!(json["imports"][0]["module"], "wasi_snapshot_preview1");
    assert_eq!(json["imports"][0]["name"], "clock_time_get");
    assert_eq!(json["exit_code"], 0);
}

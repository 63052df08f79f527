use serde::Serialize;

use crate::wasm::parse::{ImportFact, ModuleFacts};
use crate::wasm::surface::{self, Linkage, REQUIRED_EXPORTS};

/// Ways a module falls outside what the shim can host.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Findings {
    /// Imports the host never registers, sorted. Instantiation fails.
    pub unsupported_imports: Vec<ImportFact>,
    /// Imports that link to a stub raising on every call, sorted.
    pub stubbed_imports: Vec<ImportFact>,
    /// Required exports that are absent or have the wrong kind.
    pub missing_exports: Vec<String>,
}

impl Findings {
    /// Stubbed imports do not block instantiation and are not counted.
    pub fn is_clean(&self) -> bool {
        self.unsupported_imports.is_empty() && self.missing_exports.is_empty()
    }
}

fn import_linkage(import: &ImportFact) -> Linkage {
    if import.kind != "func" {
        return Linkage::Unlinked;
    }
    surface::linkage(&import.module, &import.name)
}

pub fn audit(module: &ModuleFacts) -> Findings {
    let mut findings = Findings::default();

    for import in &module.imports {
        match import_linkage(import) {
            Linkage::Provided => {}
            Linkage::Stubbed => findings.stubbed_imports.push(import.clone()),
            Linkage::Unlinked => findings.unsupported_imports.push(import.clone()),
        }
    }

    findings.missing_exports = REQUIRED_EXPORTS
        .iter()
        .filter(|required| {
            !module
                .exports
                .iter()
                .any(|e| e.name == required.name && e.kind == required.kind)
        })
        .map(|required| required.name.to_string())
        .collect();

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wasm::parse::parse_module;

    fn audit_wat(text: &str) -> Findings {
        audit(&parse_module(&wat::parse_str(text).unwrap()))
    }

    #[test]
    fn reactor_using_provided_functions_is_clean() {
        let findings = audit_wat(
            r#"
            (module
              (import "wasi_snapshot_preview1" "fd_read" (func (param i32 i32 i32 i32) (result i32)))
              (import "wasi_snapshot_preview1" "poll_oneoff" (func (param i32 i32 i32 i32) (result i32)))
              (memory 1)
              (func $init)
              (export "memory" (memory 0))
              (export "_initialize" (func $init))
            )
            "#,
        );

        assert!(findings.is_clean(), "{findings:?}");
    }

    #[test]
    fn separates_unlinked_from_stubbed_imports() {
        let findings = audit_wat(
            r#"
            (module
              (import "wasi_snapshot_preview1" "fd_write" (func (param i32 i32 i32 i32) (result i32)))
              (import "env" "abort" (func))
              (import "wasi_snapshot_preview1" "sock_recv" (func (param i32 i32 i32 i32 i32 i32) (result i32)))
              (memory 1)
              (func $init)
              (export "memory" (memory 0))
              (export "_initialize" (func $init))
            )
            "#,
        );

        let pairs = |imports: &[ImportFact]| -> Vec<(String, String)> {
            imports
                .iter()
                .map(|i| (i.module.clone(), i.name.clone()))
                .collect()
        };
        assert_eq!(
            pairs(&findings.unsupported_imports),
            vec![("env".to_string(), "abort".to_string())]
        );
        assert_eq!(
            pairs(&findings.stubbed_imports),
            vec![("wasi_snapshot_preview1".to_string(), "fd_write".to_string())]
        );
        assert!(findings.missing_exports.is_empty());
        assert!(!findings.is_clean());
    }

    #[test]
    fn env_identity_and_stubbed_write_still_link() {
        let findings = audit_wat(
            r#"
            (module
              (import "env" "getpid" (func (result i32)))
              (import "wasi_snapshot_preview1" "fd_write" (func (param i32 i32 i32 i32) (result i32)))
              (memory 1)
              (func $init)
              (export "memory" (memory 0))
              (export "_initialize" (func $init))
            )
            "#,
        );

        assert!(findings.unsupported_imports.is_empty(), "{findings:?}");
        assert_eq!(findings.stubbed_imports.len(), 1);
        assert_eq!(findings.stubbed_imports[0].name, "fd_write");
        assert!(findings.is_clean());
    }

    #[test]
    fn env_import_as_a_global_is_unsupported() {
        let findings = audit_wat(
            r#"
            (module
              (import "env" "getpid" (global i32))
              (memory 1)
              (func $init)
              (export "memory" (memory 0))
              (export "_initialize" (func $init))
            )
            "#,
        );

        assert_eq!(findings.unsupported_imports.len(), 1);
        assert_eq!(findings.unsupported_imports[0].kind, "global");
    }

    #[test]
    fn non_function_import_is_unsupported() {
        let findings = audit_wat(
            r#"
            (module
              (import "env" "memory" (memory 1))
              (func $init)
              (export "memory" (memory 0))
              (export "_initialize" (func $init))
            )
            "#,
        );

        assert_eq!(findings.unsupported_imports.len(), 1);
        assert_eq!(findings.unsupported_imports[0].kind, "memory");
    }

    #[test]
    fn command_module_misses_reactor_exports() {
        let findings = audit_wat(
            r#"
            (module
              (func $start)
              (export "_start" (func $start))
            )
            "#,
        );

        assert_eq!(findings.missing_exports, vec!["memory", "_initialize"]);
    }

    #[test]
    fn export_with_wrong_kind_counts_as_missing() {
        let findings = audit_wat(
            r#"
            (module
              (memory 1)
              (global $g i32 (i32.const 0))
              (export "memory" (memory 0))
              (export "_initialize" (global $g))
            )
            "#,
        );

        assert_eq!(findings.missing_exports, vec!["_initialize"]);
    }
}

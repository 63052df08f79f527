use serde::Serialize;
use wasmparser::{
    Encoding, ExportSectionReader, ExternalKind, ImportSectionReader, Parser, Payload, TypeRef,
};

use crate::report::model::AnalysisInfo;

/// An import declared by the module. Orders by `(module, name, kind)`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImportFact {
    pub module: String,
    pub name: String,
    /// "func" | "table" | "memory" | "global" | "tag"
    pub kind: String,
}

/// An export declared by the module. Orders by `(name, kind)`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportFact {
    pub name: String,
    pub kind: String,
}

/// Import/export surface of a module, with parse status.
#[derive(Debug, Clone, Default)]
pub struct ModuleFacts {
    pub imports: Vec<ImportFact>,
    pub exports: Vec<ExportFact>,
    pub analysis: AnalysisInfo,
}

fn import_kind(ty: &TypeRef) -> &'static str {
    match ty {
        TypeRef::Func(_) => "func",
        TypeRef::Table(_) => "table",
        TypeRef::Memory(_) => "memory",
        TypeRef::Global(_) => "global",
        TypeRef::Tag(_) => "tag",
    }
}

fn export_kind(kind: ExternalKind) -> &'static str {
    match kind {
        ExternalKind::Func => "func",
        ExternalKind::Table => "table",
        ExternalKind::Memory => "memory",
        ExternalKind::Global => "global",
        ExternalKind::Tag => "tag",
    }
}

fn on_import_section(
    facts: &mut ModuleFacts,
    reader: ImportSectionReader<'_>,
) -> wasmparser::Result<()> {
    for import in reader {
        let import = import?;
        facts.imports.push(ImportFact {
            module: import.module.to_string(),
            name: import.name.to_string(),
            kind: import_kind(&import.ty).to_string(),
        });
    }
    Ok(())
}

fn on_export_section(
    facts: &mut ModuleFacts,
    reader: ExportSectionReader<'_>,
) -> wasmparser::Result<()> {
    for export in reader {
        let export = export?;
        facts.exports.push(ExportFact {
            name: export.name.to_string(),
            kind: export_kind(export.kind).to_string(),
        });
    }
    Ok(())
}

/// Collect the import and export surface of a core module.
///
/// Malformed input is not an error: it is recorded as `parse_error` in the
/// analysis status and whatever was read before the fault is kept.
/// Components are reported as `unsupported`.
pub fn parse_module(bytes: &[u8]) -> ModuleFacts {
    let mut facts = ModuleFacts {
        analysis: AnalysisInfo::ok(),
        ..Default::default()
    };

    for payload in Parser::new(0).parse_all(bytes) {
        let section = match payload {
            Ok(Payload::Version {
                encoding: Encoding::Component,
                ..
            }) => {
                facts.analysis = AnalysisInfo::unsupported(
                    "component binaries are not instantiated by the shim",
                );
                break;
            }
            Ok(Payload::ImportSection(reader)) => on_import_section(&mut facts, reader),
            Ok(Payload::ExportSection(reader)) => on_export_section(&mut facts, reader),
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        };

        if let Err(e) = section {
            facts.analysis = AnalysisInfo::parse_error(e.to_string());
            break;
        }
    }

    facts.imports.sort();
    facts.exports.sort();
    facts
}

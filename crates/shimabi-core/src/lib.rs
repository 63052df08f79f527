pub mod error;
pub mod facts;
pub mod platform;
pub mod report;
pub mod verify;
pub mod wasm;

use std::path::Path;

use anyhow::Result;

use crate::facts::catalog::Profile;
use crate::platform::{LivePlatform, TargetInfo};
use crate::report::model::{AuditReport, Report, ToolInfo};

pub const TOOL_NAME: &str = "shimabi";

/// JSON schema version of shimabi reports.
/// Bump only when the report documents change semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Bump whenever a fact is added or a pinned value changes.
pub const FACT_TABLE_VERSION: &str = "0.1.0";

/// Verify `profile` against the platform this binary was compiled for.
pub fn check(profile: Profile, tool: ToolInfo) -> Report {
    let facts = facts::table::select(profile);
    let verification = verify::verify(&facts, &LivePlatform);
    Report::new(
        tool,
        TargetInfo::current(),
        profile,
        facts.len(),
        verification,
    )
}

/// Audit the module at `path` against the shim's host surface.
pub fn inspect(path: &Path, tool: ToolInfo) -> Result<AuditReport> {
    let artifact = wasm::read::read_module(path)?;
    let module = wasm::parse::parse_module(&artifact.bytes);
    let findings = wasm::audit::audit(&module);
    Ok(AuditReport::new(tool, artifact.info(), module, findings))
}

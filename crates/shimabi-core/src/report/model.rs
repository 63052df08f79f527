use serde::{Deserialize, Serialize};

use crate::error::AbiMismatch;
use crate::facts::catalog::{FactKind, Profile};
use crate::platform::TargetInfo;
use crate::verify::{Outcome, Verification};
use crate::wasm::audit::Findings;
use crate::wasm::parse::{ExportFact, ImportFact, ModuleFacts};
use crate::{FACT_TABLE_VERSION, SCHEMA_VERSION};

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Result of verifying one profile against the live platform.
///
/// Stable JSON contract; identical platforms produce identical reports.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub target: TargetInfo,
    pub fact_table_version: String,
    pub profile: Profile,
    /// Facts selected by the profile, whether or not they were reached.
    pub facts_total: usize,
    pub evaluated: Vec<EvaluatedFact>,
    pub outcome: OutcomeInfo,
}

impl Report {
    pub fn new(
        tool: ToolInfo,
        target: TargetInfo,
        profile: Profile,
        facts_total: usize,
        verification: Verification,
    ) -> Self {
        let evaluated = verification
            .evaluated
            .iter()
            .map(|e| EvaluatedFact {
                name: e.fact.name.to_string(),
                kind: e.fact.kind,
                expected: e.fact.expected,
                actual: e.actual,
                passed: e.passed(),
            })
            .collect();

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            target,
            fact_table_version: FACT_TABLE_VERSION.to_string(),
            profile,
            facts_total,
            evaluated,
            outcome: OutcomeInfo::from(verification.outcome),
        }
    }
}

/// A fact the verifier reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatedFact {
    pub name: String,
    pub kind: FactKind,
    pub expected: i64,
    pub actual: i64,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Passed,
    Failed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeInfo {
    pub status: Status,
    pub failure: Option<AbiMismatch>,
    pub exit_code: i32,
}

impl From<Outcome> for OutcomeInfo {
    fn from(outcome: Outcome) -> Self {
        let exit_code = outcome.exit_code();
        match outcome {
            Outcome::Passed => Self {
                status: Status::Passed,
                failure: None,
                exit_code,
            },
            Outcome::Failed(mismatch) => Self {
                status: Status::Failed,
                failure: Some(mismatch),
                exit_code,
            },
        }
    }
}

/// Artifact metadata bound to an audit report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: ArtifactHash,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}

/// Parse status of an audited module.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AnalysisInfo {
    pub status: String,
    pub warnings: Vec<String>,
}

impl AnalysisInfo {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            warnings: vec![],
        }
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self {
            status: "parse_error".into(),
            warnings: vec![msg.into()],
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self {
            status: "unsupported".into(),
            warnings: vec![msg.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Result of auditing a module against the shim's host surface.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub artifact: ArtifactInfo,
    pub analysis: AnalysisInfo,
    pub imports: Vec<ImportFact>,
    pub exports: Vec<ExportFact>,
    pub findings: Findings,
    pub exit_code: i32,
}

impl AuditReport {
    pub fn new(
        tool: ToolInfo,
        artifact: ArtifactInfo,
        module: ModuleFacts,
        findings: Findings,
    ) -> Self {
        let exit_code = if module.analysis.is_ok() && findings.is_clean() {
            0
        } else {
            1
        };

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            artifact,
            analysis: module.analysis,
            imports: module.imports,
            exports: module.exports,
            findings,
            exit_code,
        }
    }
}

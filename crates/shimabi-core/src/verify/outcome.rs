use serde::Serialize;

use crate::error::AbiMismatch;
use crate::facts::catalog::Fact;

/// One fact checked against the platform.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Evaluation {
    pub fact: Fact,
    pub actual: i64,
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        self.fact.holds(self.actual)
    }
}

/// Terminal result of a run: every fact held, or the first one that didn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(AbiMismatch),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn mismatch(&self) -> Option<&AbiMismatch> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(mismatch) => Some(mismatch),
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Outcome plus the facts evaluated to reach it, in table order.
///
/// On failure the last evaluation is the failing fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub outcome: Outcome,
    pub evaluated: Vec<Evaluation>,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facts::catalog::Fact;

/// A platform-reported value disagreed with the value the shim hard-codes.
///
/// This is the only failure the verifier produces. It is a build-time
/// configuration error and is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{fact_name}: expected {expected}, found {actual}")]
pub struct AbiMismatch {
    pub fact_name: String,
    pub expected: i64,
    pub actual: i64,
}

impl AbiMismatch {
    pub fn new(fact: &Fact, actual: i64) -> Self {
        Self {
            fact_name: fact.name.to_string(),
            expected: fact.expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::table;

    #[test]
    fn message_names_fact_and_both_values() {
        let fact = table::find("size of generic pointer").unwrap();
        let err = AbiMismatch::new(fact, 8);

        assert_eq!(
            err.to_string(),
            "size of generic pointer: expected 4, found 8"
        );
    }

    #[test]
    fn serializes_flat() {
        let fact = table::find("value of POLLIN").unwrap();
        let json = serde_json::to_value(AbiMismatch::new(fact, 0x100)).unwrap();

        assert_eq!(json["fact_name"], "value of POLLIN");
        assert_eq!(json["expected"], 1);
        assert_eq!(json["actual"], 256);
    }
}

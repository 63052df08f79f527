//! Fail-fast evaluation of the fact table.
//!
//! The verifier is pure: it returns a `Verification` value and never exits
//! the process. Turning a failure into an exit code is the caller's job.

pub mod outcome;
pub mod verifier;

pub use outcome::{Evaluation, Outcome, Verification};
pub use verifier::{Verifier, VerifierState, verify};

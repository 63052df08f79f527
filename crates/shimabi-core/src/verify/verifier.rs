use crate::error::AbiMismatch;
use crate::facts::catalog::Fact;
use crate::platform::Platform;
use crate::verify::outcome::{Evaluation, Outcome, Verification};

/// Lifecycle of a verification run.
///
/// `NotStarted -> Running -> {Passed, Failed}`. Both terminal states are
/// final; stepping a finished verifier leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierState {
    NotStarted,
    Running,
    Passed,
    Failed(AbiMismatch),
}

impl VerifierState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, VerifierState::Passed | VerifierState::Failed(_))
    }

    /// The outcome, once the run has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            VerifierState::Passed => Some(Outcome::Passed),
            VerifierState::Failed(mismatch) => Some(Outcome::Failed(mismatch.clone())),
            VerifierState::NotStarted | VerifierState::Running => None,
        }
    }
}

/// Walks a fact table one fact at a time, stopping at the first mismatch.
#[derive(Debug)]
pub struct Verifier<'a, P: ?Sized> {
    facts: &'a [Fact],
    platform: &'a P,
    state: VerifierState,
    evaluated: Vec<Evaluation>,
}

impl<'a, P: Platform + ?Sized> Verifier<'a, P> {
    pub fn new(facts: &'a [Fact], platform: &'a P) -> Self {
        Self {
            facts,
            platform,
            state: VerifierState::NotStarted,
            evaluated: Vec::with_capacity(facts.len()),
        }
    }

    pub fn state(&self) -> &VerifierState {
        &self.state
    }

    pub fn evaluated(&self) -> &[Evaluation] {
        &self.evaluated
    }

    /// Evaluate the next fact in table order.
    pub fn step(&mut self) -> &VerifierState {
        if self.state.is_terminal() {
            return &self.state;
        }
        self.state = VerifierState::Running;

        let Some(fact) = self.facts.get(self.evaluated.len()) else {
            self.state = VerifierState::Passed;
            return &self.state;
        };

        let actual = self.platform.resolve(fact.source);
        self.evaluated.push(Evaluation {
            fact: *fact,
            actual,
        });

        if !fact.holds(actual) {
            self.state = VerifierState::Failed(AbiMismatch::new(fact, actual));
        } else if self.evaluated.len() == self.facts.len() {
            self.state = VerifierState::Passed;
        }

        &self.state
    }

    /// Step until a terminal state is reached.
    pub fn run(mut self) -> Verification {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Verification {
                    outcome,
                    evaluated: self.evaluated,
                };
            }
            self.step();
        }
    }
}

/// Check `facts` in order against `platform`, halting at the first mismatch.
pub fn verify<P: Platform + ?Sized>(facts: &[Fact], platform: &P) -> Verification {
    Verifier::new(facts, platform).run()
}

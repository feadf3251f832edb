//! Submission lifecycle shared by the login, signup and reset forms.
//!
//! DESIGN
//! ======
//! `Idle -> Validating -> Idle (invalid) | Submitting -> Idle`. Validation is
//! synchronous, so only `Idle` and `Submitting` are observable. A submit
//! while `Submitting` is refused here rather than relying on a disabled
//! button, which a fast double click can beat.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Observable phase of a form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of a submit action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Data was valid and handed to the submission callback.
    Submitted,
    /// Validation failed; errors were stored and the callback was not called.
    Invalid,
    /// A submission is already in flight.
    Busy,
}

/// Failure reported by the external submission step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend refused specific fields, named by their form keys.
    #[error("submission rejected for: {}", .fields.join(", "))]
    Rejected { fields: Vec<String> },

    /// The request failed as a whole.
    #[error("submission failed: {0}")]
    Failed(String),
}

/// Tracks whether a submission is in flight.
#[derive(Clone, Debug, Default)]
pub struct SubmitGate {
    pub phase: SubmitPhase,
    /// Number of submissions that reached the callback.
    pub submitted: u64,
}

impl SubmitGate {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Enter `Submitting`. Returns `false` if already there.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.submitted += 1;
        true
    }

    /// Return to `Idle`. Returns `false` if nothing was in flight.
    pub fn finish(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }
}

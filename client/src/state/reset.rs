//! Forgot-password flow as an explicit state machine.
//!
//! DESIGN
//! ======
//! `Email -> Verify -> Success`, forward only. `cancel` is the single way
//! back and always lands on `Email` with inputs cleared. Each request carries
//! a sequence number; completions for a superseded request are ignored so a
//! timer that fires after `cancel` cannot advance the flow.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use crate::consts::VERIFICATION_CODE_LEN;
use crate::state::submit::{SubmitError, SubmitGate};

/// Step of the password-reset modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    Email,
    Verify,
    Success,
}

impl ResetStep {
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Email => "Enter your email to receive reset instructions",
            Self::Verify => "Verify the code sent to your email",
            Self::Success => "Password reset email sent successfully!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetError {
    #[error("Enter your email first.")]
    EmailRequired,

    #[error("Enter the verification code.")]
    CodeRequired,

    #[error("a request is already in flight")]
    Busy,

    #[error("action not allowed in {actual:?} step (expected {expected:?})")]
    WrongStep { expected: ResetStep, actual: ResetStep },

    /// The pending request came back with an error.
    #[error("{0}")]
    Failed(String),
}

/// Handle for one pending reset request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct PasswordReset {
    pub step: ResetStep,
    pub email: String,
    pub code: String,
    pub gate: SubmitGate,
    pub error: Option<ResetError>,
    seq: u64,
}

impl PasswordReset {
    pub fn is_loading(&self) -> bool {
        self.gate.is_submitting()
    }

    /// Edit the email. Only meaningful on the first step.
    pub fn set_email(&mut self, value: &str) {
        if self.step == ResetStep::Email {
            value.clone_into(&mut self.email);
            self.error = None;
        }
    }

    /// Edit the verification code, truncated to its fixed length.
    pub fn set_code(&mut self, value: &str) {
        if self.step == ResetStep::Verify {
            self.code = value.chars().take(VERIFICATION_CODE_LEN).collect();
            self.error = None;
        }
    }

    /// Start sending the reset email.
    ///
    /// # Errors
    ///
    /// Fails outside the `Email` step, while a request is pending, or when
    /// the email is empty.
    pub fn request_code(&mut self) -> Result<ResetTicket, ResetError> {
        self.start(ResetStep::Email, self.email.is_empty(), ResetError::EmailRequired)
    }

    /// The reset email went out; advance to `Verify`.
    pub fn code_sent(&mut self, ticket: ResetTicket) -> bool {
        self.advance(ticket, ResetStep::Email, ResetStep::Verify)
    }

    /// Start verifying the entered code.
    ///
    /// # Errors
    ///
    /// Fails outside the `Verify` step, while a request is pending, or when
    /// no code was entered.
    pub fn verify(&mut self) -> Result<ResetTicket, ResetError> {
        self.start(ResetStep::Verify, self.code.is_empty(), ResetError::CodeRequired)
    }

    /// The code checked out; advance to `Success`.
    pub fn verified(&mut self, ticket: ResetTicket) -> bool {
        self.advance(ticket, ResetStep::Verify, ResetStep::Success)
    }

    /// The pending request failed; stay on the current step so the user can
    /// retry, and surface the failure.
    pub fn failed(&mut self, ticket: ResetTicket, err: &SubmitError) -> bool {
        if ticket.0 != self.seq || !self.gate.is_submitting() {
            return false;
        }
        self.gate.finish();
        self.error = Some(ResetError::Failed(err.to_string()));
        true
    }

    /// Return to the initial step from anywhere, dropping pending requests.
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.step = ResetStep::Email;
        self.email.clear();
        self.code.clear();
        self.error = None;
        self.gate.finish();
    }

    fn start(&mut self, expected: ResetStep, missing: bool, missing_err: ResetError) -> Result<ResetTicket, ResetError> {
        if self.step != expected {
            return Err(ResetError::WrongStep { expected, actual: self.step });
        }
        if self.gate.is_submitting() {
            return Err(ResetError::Busy);
        }
        if missing {
            self.error = Some(missing_err.clone());
            return Err(missing_err);
        }
        self.error = None;
        self.gate.begin();
        self.seq += 1;
        Ok(ResetTicket(self.seq))
    }

    fn advance(&mut self, ticket: ResetTicket, from: ResetStep, to: ResetStep) -> bool {
        if ticket.0 != self.seq || self.step != from || !self.gate.is_submitting() {
            return false;
        }
        self.gate.finish();
        self.step = to;
        true
    }
}

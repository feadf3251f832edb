//! Login form state.
//!
//! Login checks presence only: the first missing field produces a single
//! form-level message, and any edit clears it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use crate::state::submit::{SubmitError, SubmitGate, SubmitOutcome};
use crate::util::patterns;

pub const IDENTIFIER_REQUIRED: &str = "CNIC or Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Input fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Identifier,
    Password,
}

/// Credentials handed to the login callback.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(rename = "cnicOrEmail")]
    pub identifier: String,
    pub password: String,
}

impl std::fmt::Debug for LoginData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginData")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the "CNIC or Email" input looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Cnic,
    Unknown,
}

impl IdentifierKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Cnic => "cnic",
            Self::Unknown => "unknown",
        }
    }
}

pub fn classify_identifier(identifier: &str) -> IdentifierKind {
    if patterns::is_email(identifier) {
        IdentifierKind::Email
    } else if patterns::is_cnic(identifier) {
        IdentifierKind::Cnic
    } else {
        IdentifierKind::Unknown
    }
}

/// Presence check for the login inputs.
///
/// # Errors
///
/// Returns the message for the first empty field.
pub fn validate_login(identifier: &str, password: &str) -> Result<(), &'static str> {
    if identifier.is_empty() {
        return Err(IDENTIFIER_REQUIRED);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(())
}

/// In-progress login form.
#[derive(Clone, Debug)]
pub struct LoginFormState {
    pub identifier: String,
    pub password: String,
    /// Shown checked; not persisted anywhere.
    pub remember_me: bool,
    pub error: Option<String>,
    pub gate: SubmitGate,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            password: String::new(),
            remember_me: true,
            error: None,
            gate: SubmitGate::default(),
        }
    }
}

impl LoginFormState {
    pub fn set_field(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Identifier => value.clone_into(&mut self.identifier),
            LoginField::Password => value.clone_into(&mut self.password),
        }
        self.error = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    /// Check presence and, if both fields are filled, call `on_valid` once.
    pub fn submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(LoginData),
    {
        if self.gate.is_submitting() {
            return SubmitOutcome::Busy;
        }
        self.error = None;
        if let Err(message) = validate_login(&self.identifier, &self.password) {
            self.error = Some(message.to_owned());
            return SubmitOutcome::Invalid;
        }
        if !self.gate.begin() {
            return SubmitOutcome::Busy;
        }
        on_valid(LoginData { identifier: self.identifier.clone(), password: self.password.clone() });
        SubmitOutcome::Submitted
    }

    pub fn complete(&mut self, result: Result<(), SubmitError>) {
        self.gate.finish();
        self.error = result.err().map(|e| e.to_string());
    }
}

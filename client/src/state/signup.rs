//! Signup form state, field validation and the province -> city cascade.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignupFormState` is the single source of truth for the signup page. The
//! page wraps it in an `RwSignal`; views read it reactively and mutate it
//! only through the methods below so the error-clearing and cascade rules
//! always apply.
//!
//! DESIGN
//! ======
//! - Errors are a set of invalid fields, recomputed wholesale on submit.
//! - Editing a field drops its error immediately without re-validating.
//! - Choosing a province always empties the city, even when the old city
//!   also exists under the new province.
//! - The validator checks that a city is present, not that it belongs to
//!   the selected province.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::regions::{self, Gender, Province};
use crate::state::submit::{SubmitError, SubmitGate, SubmitOutcome};
use crate::util::patterns;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Input fields of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Email,
    Password,
    ConfirmPassword,
    Cnic,
    Gender,
    Province,
    City,
}

impl SignupField {
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Cnic,
        Self::Gender,
        Self::Province,
        Self::City,
    ];

    /// Form/request key (`confirmPassword`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Cnic => "cnic",
            Self::Gender => "gender",
            Self::Province => "province",
            Self::City => "city",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Fixed message shown under an invalid field.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Email => "Valid email required",
            Self::Password => "Min 8 characters required",
            Self::ConfirmPassword => "Passwords do not match",
            Self::Cnic => "Valid CNIC format required",
            // Local validation always has a gender; only a backend rejection flags it.
            Self::Gender => "Gender is required",
            Self::Province => "Province is required",
            Self::City => "City is required",
        }
    }
}

/// Fields currently flagged invalid. An absent field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeSet<SignupField>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, field: SignupField) -> bool {
        self.fields.contains(&field)
    }

    pub fn insert(&mut self, field: SignupField) {
        self.fields.insert(field);
    }

    /// Drop the flag for `field`. Returns whether it was set.
    pub fn clear(&mut self, field: SignupField) -> bool {
        self.fields.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = SignupField> + '_ {
        self.fields.iter().copied()
    }
}

impl FromIterator<SignupField> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = SignupField>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// Validated signup payload handed to the submission callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub cnic: String,
    pub gender: Gender,
    pub province: Province,
    pub city: String,
}

/// In-progress signup form.
#[derive(Clone, Debug, Default)]
pub struct SignupFormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub cnic: String,
    pub gender: Gender,
    pub province: Option<Province>,
    pub city: String,
    pub errors: ValidationErrors,
    pub gate: SubmitGate,
    /// Form-level failure reported by the submission step.
    pub submit_error: Option<String>,
}

impl SignupFormState {
    /// Apply a raw input value to `field` and drop that field's error flag.
    ///
    /// Select inputs arrive as their option value: an empty province value
    /// clears the selection, and an unknown gender leaves the current one.
    pub fn set_field(&mut self, field: SignupField, value: &str) {
        match field {
            SignupField::Email => value.clone_into(&mut self.email),
            SignupField::Password => value.clone_into(&mut self.password),
            SignupField::ConfirmPassword => value.clone_into(&mut self.confirm_password),
            SignupField::Cnic => value.clone_into(&mut self.cnic),
            SignupField::City => value.clone_into(&mut self.city),
            SignupField::Gender => match value.parse::<Gender>() {
                Ok(gender) => self.gender = gender,
                Err(e) => leptos::logging::warn!("ignoring gender input: {e}"),
            },
            SignupField::Province => {
                let province = if value.is_empty() {
                    None
                } else {
                    match value.parse::<Province>() {
                        Ok(province) => Some(province),
                        Err(e) => {
                            leptos::logging::warn!("ignoring province input: {e}");
                            return;
                        }
                    }
                };
                self.select_province(province);
                return;
            }
        }
        self.errors.clear(field);
    }

    /// Current input value of `field`, as its input or select would show it.
    pub fn value_of(&self, field: SignupField) -> String {
        match field {
            SignupField::Email => self.email.clone(),
            SignupField::Password => self.password.clone(),
            SignupField::ConfirmPassword => self.confirm_password.clone(),
            SignupField::Cnic => self.cnic.clone(),
            SignupField::Gender => self.gender.value().to_owned(),
            SignupField::Province => self.province.map(Province::name).unwrap_or_default().to_owned(),
            SignupField::City => self.city.clone(),
        }
    }

    /// Switch province and reset the city.
    pub fn select_province(&mut self, province: Option<Province>) {
        self.province = province;
        self.city.clear();
        self.errors.clear(SignupField::Province);
    }

    /// Cities offered for the current province.
    pub fn available_cities(&self) -> &'static [&'static str] {
        regions::available_cities(self.province)
    }

    /// The city select stays disabled until a province is chosen.
    pub fn city_enabled(&self) -> bool {
        self.province.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    pub fn has_error(&self, field: SignupField) -> bool {
        self.errors.contains(field)
    }

    /// Validate and, if everything passes, hand the data to `on_valid`.
    ///
    /// Invalid input replaces the stored errors and never reaches
    /// `on_valid`. Valid input clears them, enters `Submitting`, and calls
    /// `on_valid` exactly once.
    pub fn submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(SignupData),
    {
        if self.gate.is_submitting() {
            return SubmitOutcome::Busy;
        }
        self.submit_error = None;
        self.errors = validate_signup(self);
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid;
        }
        let Some(province) = self.province else {
            self.errors.insert(SignupField::Province);
            return SubmitOutcome::Invalid;
        };
        let data = SignupData {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            cnic: self.cnic.clone(),
            gender: self.gender,
            province,
            city: self.city.clone(),
        };
        if !self.gate.begin() {
            return SubmitOutcome::Busy;
        }
        on_valid(data);
        SubmitOutcome::Submitted
    }

    /// Record how the submission step ended and return to `Idle`.
    ///
    /// Rejected fields are flagged like local validation failures; keys that
    /// do not name a field fall back to a form-level message.
    pub fn complete(&mut self, result: Result<(), SubmitError>) {
        self.gate.finish();
        match result {
            Ok(()) => self.submit_error = None,
            Err(SubmitError::Rejected { fields }) => {
                let mut unknown = Vec::new();
                for key in fields {
                    match SignupField::from_key(&key) {
                        Some(field) => self.errors.insert(field),
                        None => unknown.push(key),
                    }
                }
                if !unknown.is_empty() {
                    self.submit_error = Some(SubmitError::Rejected { fields: unknown }.to_string());
                }
            }
            Err(e) => self.submit_error = Some(e.to_string()),
        }
    }
}

/// Compute the invalid fields of `form`. Pure.
pub fn validate_signup(form: &SignupFormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.email.is_empty() || !patterns::is_email(&form.email) {
        errors.insert(SignupField::Email);
    }
    if form.password.is_empty() || form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(SignupField::Password);
    }
    if form.confirm_password.is_empty() || form.confirm_password != form.password {
        errors.insert(SignupField::ConfirmPassword);
    }
    if form.cnic.is_empty() || !patterns::is_cnic(&form.cnic) {
        errors.insert(SignupField::Cnic);
    }
    if form.province.is_none() {
        errors.insert(SignupField::Province);
    }
    if form.city.is_empty() {
        errors.insert(SignupField::City);
    }

    errors
}

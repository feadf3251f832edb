//! Completion notices shown after a simulated submission.
//!
//! TRADE-OFFS
//! ==========
//! Notices use the blocking browser `alert()`. SSR and native test builds
//! no-op so rendering stays deterministic.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::state::login::LoginData;
use crate::state::signup::SignupData;

/// Text shown after a login attempt completes.
pub fn login_welcome_message(data: &LoginData) -> String {
    format!("Welcome! Login with {}", data.identifier)
}

/// Text shown after a signup completes.
pub fn signup_success_message(data: &SignupData) -> String {
    format!("Account created successfully!\nEmail: {}\nCity: {}", data.email, data.city)
}

/// Show `message` in a browser alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

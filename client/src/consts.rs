//! Fixed values shared by pages and components.

use std::time::Duration;

/// How long a simulated backend call takes.
pub const SIMULATED_CALL_DELAY: Duration = Duration::from_millis(1500);

pub const BRAND_NAME: &str = "LIMS";
pub const BRAND_TAGLINE: &str = "Enterprise Portal";
pub const BRAND_YEAR: &str = "2026";

/// Length of the password-reset verification code.
pub const VERIFICATION_CODE_LEN: usize = 6;

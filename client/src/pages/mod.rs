//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and the simulated submission, and delegates
//! rendering details to `components`.

pub mod login;
pub mod signup;

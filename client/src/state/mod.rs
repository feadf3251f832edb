//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each form owns a plain state struct with explicit transition methods.
//! Pages wrap them in `RwSignal`s, which gives views change notification
//! without the rules depending on Leptos.

pub mod login;
pub mod reset;
pub mod signup;
pub mod submit;

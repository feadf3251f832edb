//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth forms and page chrome. Form components take
//! their state signal and submission callback from the owning page.

pub mod company_header;
pub mod forgot_password_modal;
pub mod login_form;
pub mod password_field;
pub mod signup_form;
pub mod social_login;

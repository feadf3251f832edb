//! Static reference data consumed read-only by the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Region and gender options are compiled into the client; changing them
//! requires a rebuild.

pub mod regions;

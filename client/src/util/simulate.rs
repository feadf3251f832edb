//! Stand-in for the authentication backend.
//!
//! There is no server API behind the forms. Each submission waits a fixed
//! delay and reports success. Without `hydrate` the delay is skipped so the
//! future resolves immediately.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "simulate_test.rs"]
mod simulate_test;

use std::time::Duration;

use crate::state::submit::SubmitError;

/// Wait `delay`, then succeed.
///
/// # Errors
///
/// Never fails today; the signature matches what a real backend call returns
/// so callers already route failures into form state.
pub async fn simulated_call(delay: Duration) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
    Ok(())
}

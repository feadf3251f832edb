#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn simulated_call_always_succeeds() {
    let result = futures::executor::block_on(simulated_call(Duration::from_millis(1500)));
    assert_eq!(result, Ok(()));
}

#[test]
fn simulated_call_resolves_without_timer_outside_browser() {
    let result = futures::executor::block_on(simulated_call(Duration::from_secs(3600)));
    assert!(result.is_ok());
}

//! Password-reset modal driven by `PasswordReset`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal owns its reset state, so closing it discards the flow. Pending
//! simulated calls check the mount guard and their request ticket before
//! advancing the step.

#[cfg(test)]
#[path = "forgot_password_modal_test.rs"]
mod forgot_password_modal_test;

use leptos::prelude::*;

use crate::consts::{SIMULATED_CALL_DELAY, VERIFICATION_CODE_LEN};
use crate::state::reset::{PasswordReset, ResetStep};
use crate::util::guard::MountGuard;
use crate::util::simulate::simulated_call;

pub fn request_label(loading: bool) -> &'static str {
    if loading { "Sending..." } else { "Send Reset Link" }
}

pub fn verify_label(loading: bool) -> &'static str {
    if loading { "Verifying..." } else { "Verify Code" }
}

#[component]
pub fn ForgotPasswordModal(on_close: Callback<()>) -> impl IntoView {
    let reset = RwSignal::new(PasswordReset::default());
    let guard = MountGuard::for_current_owner();
    let loading = Signal::derive(move || reset.with(PasswordReset::is_loading));
    let step = Signal::derive(move || reset.with(|r| r.step));

    let request = Callback::new({
        let guard = guard.clone();
        move |()| {
            let mut started = None;
            reset.update(|r| started = r.request_code().ok());
            let Some(ticket) = started else {
                return;
            };
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = simulated_call(SIMULATED_CALL_DELAY).await;
                if !guard.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => reset.update(|r| {
                        r.code_sent(ticket);
                    }),
                    Err(e) => {
                        leptos::logging::warn!("reset request failed: {e}");
                        reset.update(|r| {
                            r.failed(ticket, &e);
                        });
                    }
                }
            });
        }
    });

    let verify = Callback::new(move |()| {
        let mut started = None;
        reset.update(|r| started = r.verify().ok());
        let Some(ticket) = started else {
            return;
        };
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let result = simulated_call(SIMULATED_CALL_DELAY).await;
            if !guard.is_alive() {
                return;
            }
            match result {
                Ok(()) => reset.update(|r| {
                    r.verified(ticket);
                }),
                Err(e) => {
                    leptos::logging::warn!("reset verification failed: {e}");
                    reset.update(|r| {
                        r.failed(ticket, &e);
                    });
                }
            }
        });
    });

    let back_to_login = move |_: leptos::ev::MouseEvent| {
        reset.update(PasswordReset::cancel);
        on_close.run(());
    };

    let error_line = move || {
        reset
            .with(|r| r.error.clone())
            .map(|e| view! { <p class="form-field__error">{e.to_string()}</p> })
    };

    let body = move || match step.get() {
        ResetStep::Email => view! {
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    request.run(());
                }
            >
                <div class="form-field">
                    <label class="form-field__label" for="reset-email">"Email Address"</label>
                    <input
                        id="reset-email"
                        type="email"
                        class="auth-input"
                        placeholder="your@email.com"
                        prop:value=move || reset.with(|r| r.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.set_email(&value));
                        }
                        disabled=move || loading.get()
                    />
                    {error_line}
                </div>
                <button type="submit" class="auth-button" disabled=move || loading.get()>
                    {move || request_label(loading.get())}
                </button>
            </form>
        }
        .into_any(),
        ResetStep::Verify => view! {
            <div class="auth-form">
                <div class="form-field">
                    <label class="form-field__label" for="reset-code">"Verification Code"</label>
                    <input
                        id="reset-code"
                        type="text"
                        class="auth-input auth-input--code"
                        placeholder="Enter 6-digit code"
                        maxlength=VERIFICATION_CODE_LEN.to_string()
                        prop:value=move || reset.with(|r| r.code.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            reset.update(|r| r.set_code(&value));
                        }
                        disabled=move || loading.get()
                    />
                    {error_line}
                </div>
                <button
                    type="button"
                    class="auth-button"
                    on:click=move |_| verify.run(())
                    disabled=move || loading.get()
                >
                    {move || verify_label(loading.get())}
                </button>
            </div>
        }
        .into_any(),
        ResetStep::Success => view! {
            <div class="dialog__success">
                <div class="dialog__success-icon" aria-hidden="true">"✓"</div>
                <p>
                    "A password reset link has been sent to "
                    <span class="dialog__strong">{move || reset.with(|r| r.email.clone())}</span>
                </p>
                <p class="dialog__hint">
                    "Please check your email and follow the instructions to reset your password."
                </p>
                <button type="button" class="auth-button" on:click=back_to_login>
                    "Back to Login"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--reset"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.run(());
                    }
                }
                tabindex="0"
            >
                <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                    "✕"
                </button>
                <h2>"Reset Password"</h2>
                <p class="dialog__subtitle">{move || step.get().subtitle()}</p>
                {body}
                <Show when=move || step.get() != ResetStep::Success>
                    <button type="button" class="auth-link auth-link--block" on:click=move |_| on_close.run(())>
                        "← Back to Login"
                    </button>
                </Show>
            </div>
        </div>
    }
}

//! Login page: credentials form, forgot-password modal and social buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepted credentials go to a simulated backend call. When it resolves the
//! page completes the form state and shows a welcome notice, unless the page
//! was unmounted in the meantime.

use leptos::prelude::*;

use crate::components::company_header::CompanyHeader;
use crate::components::forgot_password_modal::ForgotPasswordModal;
use crate::components::login_form::LoginForm;
use crate::components::social_login::SocialLogin;
use crate::consts::{BRAND_NAME, BRAND_YEAR, SIMULATED_CALL_DELAY};
use crate::state::login::{LoginData, LoginFormState, classify_identifier};
use crate::util::guard::MountGuard;
use crate::util::notify;
use crate::util::simulate::simulated_call;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let forgot_open = RwSignal::new(false);
    let guard = MountGuard::for_current_owner();
    let busy = Signal::derive(move || form.with(LoginFormState::is_submitting));

    let on_submit = Callback::new(move |data: LoginData| {
        leptos::logging::log!(
            "login attempt: identifier={} kind={}",
            data.identifier,
            classify_identifier(&data.identifier).as_str()
        );
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let result = simulated_call(SIMULATED_CALL_DELAY).await;
            if !guard.is_alive() {
                return;
            }
            let succeeded = result.is_ok();
            form.update(|f| f.complete(result));
            if succeeded {
                notify::alert(&notify::login_welcome_message(&data));
            }
        });
    });

    let close_forgot = Callback::new(move |()| forgot_open.set(false));

    view! {
        <div class="auth-page">
            <div class="auth-page__backdrop" aria-hidden="true"></div>
            <CompanyHeader/>
            <main class="auth-page__main">
                <div class="auth-card">
                    <div class="auth-card__intro">
                        <h2>"Welcome Back"</h2>
                        <p class="auth-card__subtitle">"Sign in to your account to continue"</p>
                    </div>
                    <div>
                        <LoginForm form=form on_submit=on_submit/>
                        <button
                            type="button"
                            class="auth-link auth-link--block"
                            on:click=move |_| forgot_open.set(true)
                        >
                            "Forgot Password?"
                        </button>
                    </div>
                    <SocialLogin is_loading=busy/>
                </div>
                <footer class="auth-footer">
                    <p>"By signing in, you agree to our Terms of Service"</p>
                    <p>{format!("© {BRAND_YEAR} {BRAND_NAME} . All rights reserved.")}</p>
                </footer>
            </main>
            <Show when=move || forgot_open.get()>
                <ForgotPasswordModal on_close=close_forgot/>
            </Show>
        </div>
    }
}

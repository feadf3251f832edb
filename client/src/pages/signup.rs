//! Signup page hosting the validated registration form.

use leptos::prelude::*;

use crate::components::company_header::CompanyHeader;
use crate::components::signup_form::SignupForm;
use crate::consts::{BRAND_NAME, BRAND_YEAR, SIMULATED_CALL_DELAY};
use crate::state::signup::{SignupData, SignupFormState};
use crate::util::guard::MountGuard;
use crate::util::notify;
use crate::util::simulate::simulated_call;

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupFormState::default());
    let guard = MountGuard::for_current_owner();

    let on_submit = Callback::new(move |data: SignupData| {
        leptos::logging::log!(
            "signup attempt: email={} province={} city={} gender={}",
            data.email,
            data.province,
            data.city,
            data.gender.value()
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
                notify::alert(&notify::signup_success_message(&data));
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-page__backdrop" aria-hidden="true"></div>
            <CompanyHeader/>
            <main class="auth-page__main">
                <div class="auth-card">
                    <div class="auth-card__intro">
                        <h2>"Create Account"</h2>
                        <p class="auth-card__subtitle">"Join us and get started today"</p>
                    </div>
                    <SignupForm form=form on_submit=on_submit/>
                    <div class="auth-card__switch">
                        <p>
                            "Already have an account? "
                            <a href="/" class="auth-link">"Sign In"</a>
                        </p>
                    </div>
                </div>
                <a href="/" class="auth-back">"‹ Back to Login"</a>
                <footer class="auth-footer">
                    <p>"By signing up, you agree to our Terms of Service"</p>
                    <p>{format!("© {BRAND_YEAR} {BRAND_NAME} . All rights reserved.")}</p>
                </footer>
            </main>
        </div>
    }
}

//! Third-party sign-in buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! No OAuth provider is wired up. Clicks are logged so the buttons can be
//! connected to a real redirect later without touching the layout.

#[cfg(test)]
#[path = "social_login_test.rs"]
mod social_login_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }

    pub fn click_message(self) -> &'static str {
        match self {
            Self::Google => "google login clicked",
            Self::Facebook => "facebook login clicked",
        }
    }
}

/// Divider, provider buttons and the sign-up link.
#[component]
pub fn SocialLogin(is_loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="social-login">
            <div class="social-login__divider">
                <span>"OR"</span>
            </div>
            <div class="social-login__buttons">
                {SocialProvider::ALL
                    .into_iter()
                    .map(|provider| {
                        view! {
                            <button
                                type="button"
                                class="social-login__button"
                                disabled=move || is_loading.get()
                                on:click=move |_| leptos::logging::log!("{}", provider.click_message())
                            >
                                {provider.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="social-login__signup">
                "Don't have an account? "
                <a href="/signup" class="auth-link">"Sign up"</a>
            </p>
        </div>
    }
}

//! Login form bound to `LoginFormState`.
//!
//! The form validates presence through the state struct and hands accepted
//! credentials to `on_submit`. The caller owns the backend call and reports
//! back with `LoginFormState::complete`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::state::login::{LoginData, LoginField, LoginFormState};

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn LoginForm(form: RwSignal<LoginFormState>, on_submit: Callback<LoginData>) -> impl IntoView {
    let busy = Signal::derive(move || form.with(LoginFormState::is_submitting));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        form.update(|f| {
            f.submit(|data| accepted = Some(data));
        });
        // Run outside `update` so the callback may touch `form` again.
        if let Some(data) = accepted {
            on_submit.run(data);
        }
    };

    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let on_password = Callback::new(move |value: String| form.update(|f| f.set_field(LoginField::Password, &value)));

    view! {
        <form class="auth-form" on:submit=on_form_submit>
            <div class="form-field">
                <label class="form-field__label" for="cnicOrEmail">"CNIC or Email"</label>
                <input
                    id="cnicOrEmail"
                    name="cnicOrEmail"
                    type="text"
                    class="auth-input"
                    placeholder="12345-1234567-1 or your@email.com"
                    prop:value=move || form.with(|f| f.identifier.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_field(LoginField::Identifier, &value));
                    }
                    disabled=move || busy.get()
                />
            </div>

            <PasswordField
                label="Password"
                name="password"
                placeholder="••••••••"
                value=password
                on_input=on_password
                disabled=busy
            />

            <Show when=move || form.with(|f| f.error.is_some())>
                <div class="auth-alert" role="alert">
                    <p>{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </div>
            </Show>

            <div class="auth-form__row">
                <label class="auth-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.remember_me)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.remember_me = checked);
                        }
                        disabled=move || busy.get()
                    />
                    <span>"Remember me"</span>
                </label>
            </div>

            <button type="submit" class="auth-button" disabled=move || busy.get()>
                {move || submit_label(busy.get())}
            </button>
        </form>
    }
}

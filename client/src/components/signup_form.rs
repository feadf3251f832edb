//! Signup form bound to `SignupFormState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every input writes through `SignupFormState::set_field`, so error flags
//! clear as the user types and the city select follows the province. The
//! caller receives validated `SignupData` through `on_submit`.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::data::regions::{Gender, Province};
use crate::state::signup::{SignupData, SignupField, SignupFormState};

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Create Account" }
}

/// First option of the city select.
pub fn city_placeholder(province_selected: bool) -> &'static str {
    if province_selected { "Select City" } else { "Select Province First" }
}

#[component]
fn FieldError(form: RwSignal<SignupFormState>, field: SignupField) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.has_error(field))>
            <p class="form-field__error">{field.error_message()}</p>
        </Show>
    }
}

#[component]
fn TextField(
    form: RwSignal<SignupFormState>,
    field: SignupField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    busy: Signal<bool>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value_of(field));

    view! {
        <div class="form-field">
            <label class="form-field__label" for=field.key()>{label}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                class="auth-input"
                class:auth-input--invalid=move || form.with(|f| f.has_error(field))
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field(field, &value));
                }
                disabled=move || busy.get()
            />
            <FieldError form=form field=field/>
        </div>
    }
}

#[component]
pub fn SignupForm(form: RwSignal<SignupFormState>, on_submit: Callback<SignupData>) -> impl IntoView {
    let busy = Signal::derive(move || form.with(SignupFormState::is_submitting));
    let city_enabled = move || form.with(SignupFormState::city_enabled);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        form.update(|f| {
            f.submit(|data| accepted = Some(data));
        });
        if let Some(data) = accepted {
            on_submit.run(data);
        }
    };

    let set = move |field: SignupField| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, &value)))
    };
    let invalid = move |field: SignupField| Signal::derive(move || form.with(|f| f.has_error(field)));

    view! {
        <form class="auth-form" on:submit=on_form_submit>
            <TextField
                form=form
                field=SignupField::Email
                label="Email Address"
                input_type="email"
                placeholder="you@example.com"
                busy=busy
            />
            <TextField
                form=form
                field=SignupField::Cnic
                label="CNIC Number"
                input_type="text"
                placeholder="12345-6789012-3 or 1234567890123"
                busy=busy
            />

            <div class="form-field">
                <label class="form-field__label" for="gender">"Gender"</label>
                <select
                    id="gender"
                    name="gender"
                    class="auth-input"
                    prop:value=move || form.with(|f| f.gender.value())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_field(SignupField::Gender, &value));
                    }
                    disabled=move || busy.get()
                >
                    {Gender::ALL
                        .into_iter()
                        .map(|gender| view! { <option value=gender.value()>{gender.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label class="form-field__label" for="province">"Province"</label>
                <select
                    id="province"
                    name="province"
                    class="auth-input"
                    class:auth-input--invalid=move || form.with(|f| f.has_error(SignupField::Province))
                    prop:value=move || form.with(|f| f.province.map(Province::name).unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_field(SignupField::Province, &value));
                    }
                    disabled=move || busy.get()
                >
                    <option value="">"Select Province"</option>
                    {Province::ALL
                        .into_iter()
                        .map(|province| view! { <option value=province.name()>{province.name()}</option> })
                        .collect_view()}
                </select>
                <FieldError form=form field=SignupField::Province/>
            </div>

            <div class="form-field">
                <label class="form-field__label" for="city">"City/Area"</label>
                <select
                    id="city"
                    name="city"
                    class="auth-input"
                    class:auth-input--invalid=move || form.with(|f| f.has_error(SignupField::City))
                    prop:value=move || form.with(|f| f.city.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_field(SignupField::City, &value));
                    }
                    disabled=move || busy.get() || !city_enabled()
                >
                    <option value="">{move || city_placeholder(city_enabled())}</option>
                    {move || {
                        form.with(SignupFormState::available_cities)
                            .iter()
                            .copied()
                            .map(|city| view! { <option value=city>{city}</option> })
                            .collect_view()
                    }}
                </select>
                <FieldError form=form field=SignupField::City/>
            </div>

            <PasswordField
                label="Password"
                name="password"
                placeholder="At least 8 characters"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=set(SignupField::Password)
                disabled=busy
                invalid=invalid(SignupField::Password)
                error=SignupField::Password.error_message()
            />
            <PasswordField
                label="Confirm Password"
                name="confirmPassword"
                placeholder="Confirm your password"
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=set(SignupField::ConfirmPassword)
                disabled=busy
                invalid=invalid(SignupField::ConfirmPassword)
                error=SignupField::ConfirmPassword.error_message()
            />

            <Show when=move || form.with(|f| f.submit_error.is_some())>
                <div class="auth-alert" role="alert">
                    <p>{move || form.with(|f| f.submit_error.clone().unwrap_or_default())}</p>
                </div>
            </Show>

            <button type="submit" class="auth-button auth-button--signup" disabled=move || busy.get()>
                {move || submit_label(busy.get())}
            </button>
        </form>
    }
}

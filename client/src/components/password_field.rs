//! Password input with a show/hide toggle.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

pub fn reveal_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

pub fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn PasswordField(
    label: &'static str,
    name: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    disabled: Signal<bool>,
    #[prop(optional)] invalid: Option<Signal<bool>>,
    #[prop(optional)] error: Option<&'static str>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let is_invalid = move || invalid.is_some_and(|s| s.get());

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name>{label}</label>
            <div class="form-field__control">
                <input
                    id=name
                    name=name
                    class="auth-input auth-input--with-action"
                    class:auth-input--invalid=is_invalid
                    type=move || input_type(visible.get())
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="form-field__reveal"
                    on:click=move |_| visible.update(|v| *v = !*v)
                    disabled=move || disabled.get()
                >
                    {move || reveal_label(visible.get())}
                </button>
            </div>
            {error
                .map(|message| {
                    view! {
                        <Show when=is_invalid>
                            <p class="form-field__error">{message}</p>
                        </Show>
                    }
                })}
        </div>
    }
}

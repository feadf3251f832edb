//! Brand header pinned to the top of the auth pages.

use leptos::prelude::*;

use crate::consts::{BRAND_NAME, BRAND_TAGLINE, BRAND_YEAR};

#[component]
pub fn CompanyHeader() -> impl IntoView {
    view! {
        <header class="company-header">
            <div class="company-header__brand">
                <div class="company-header__logo" aria-hidden="true">"🏢"</div>
                <p class="company-header__tagline">{BRAND_TAGLINE}</p>
            </div>
            <div class="company-header__meta">
                <p class="company-header__name">{BRAND_NAME}</p>
                <p class="company-header__year">{BRAND_YEAR}</p>
            </div>
        </header>
    }
}

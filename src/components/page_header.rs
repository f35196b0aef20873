//! Page Header Component
//!
//! Logo and a link back to the home route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::HOME_PATH;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header>
            <img src="/assets/logo.svg" alt="Logo Ecoleta"/>

            <A href=HOME_PATH>
                <span class="back-arrow">"←"</span>
                "Voltar para Home"
            </A>
        </header>
    }
}

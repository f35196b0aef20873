//! Home Page
//!
//! Landing screen with the entry point to the registration form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{CREATE_POINT_PATH, HOME_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <header>
                    <img src="/assets/logo.svg" alt="Ecoleta"/>
                </header>

                <main>
                    <h1>"Seu marketplace de coleta de resíduos."</h1>
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>

                    <A href=CREATE_POINT_PATH>
                        <span class="enter-arrow">"→"</span>
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}

/// Fallback for unknown routes
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div id="page-not-found">
            <h1>"Página não encontrada"</h1>
            <A href=HOME_PATH>"Voltar para Home"</A>
        </div>
    }
}

//! Contact Fields Component
//!
//! Name, e-mail and WhatsApp inputs. Each keystroke replaces one form field.

use leptos::prelude::*;

use crate::form::FormField;
use crate::store::{use_create_point_store, CreatePointStateStoreFields};

/// Single text input bound to one form field
#[component]
fn TextField(
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let store = use_create_point_store();

    view! {
        <div class="field">
            <label for=field.key()>{label}</label>
            <input
                type=input_type
                name=field.key()
                id=field.key()
                prop:value=move || store.form().with(|form| form.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.form().update(|form| form.set(field, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ContactFields() -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>

            <TextField field=FormField::Name label="Nome da entidade"/>

            <div class="field-group">
                <TextField field=FormField::Email label="E-mail" input_type="email"/>
                <TextField field=FormField::Whatsapp label="Whatsapp"/>
            </div>
        </fieldset>
    }
}

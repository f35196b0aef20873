//! Address Fields Component
//!
//! Map for placing the point, then the cascading UF / city dropdowns.

use leaflet_map::{LatLng, LeafletMap};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::UNSELECTED;
use crate::store::{store_select_uf, use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn AddressFields() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let store = use_create_point_store();

    let on_map_click = Callback::new(move |at: LatLng| {
        store.position().update(|position| position.click(at));
    });

    let on_select_uf = move |ev: web_sys::Event| {
        store_select_uf(&store, event_target_value(&ev));
    };

    let on_select_city = move |ev: web_sys::Event| {
        store.selected_city().set(event_target_value(&ev));
    };

    view! {
        <fieldset>
            <legend>
                <h2>"Endereço"</h2>
                <span>"Selecione o endereço no mapa"</span>
            </legend>

            <LeafletMap
                center=Signal::derive(move || store.center().get())
                marker=Signal::derive(move || store.position().get().selected())
                on_click=on_map_click
                tiles=config.tiles.clone()
                zoom=config.zoom
            />

            <div class="field-group">
                <div class="field">
                    <label for="uf">"Estado (UF)"</label>
                    <select
                        name="uf"
                        id="uf"
                        prop:value=move || store.selected_uf().get()
                        on:change=on_select_uf
                    >
                        <option value=UNSELECTED>"Selecione uma UF"</option>
                        <For
                            each=move || store.ufs().get()
                            key=|uf| uf.id
                            children=move |uf| view! {
                                <option value=uf.code.clone()>{uf.name.clone()}</option>
                            }
                        />
                    </select>
                </div>

                <div class="field">
                    <label for="city">"Cidade"</label>
                    <select
                        name="city"
                        id="city"
                        prop:value=move || store.selected_city().get()
                        on:change=on_select_city
                    >
                        <option value=UNSELECTED>"Selecione uma cidade"</option>
                        <For
                            each=move || store.city_feed().with(|feed| feed.cities().to_vec())
                            key=|city| city.id
                            children=move |city| view! {
                                <option value=city.name.clone()>{city.name.clone()}</option>
                            }
                        />
                    </select>
                </div>
            </div>
        </fieldset>
    }
}

//! Items Grid Component
//!
//! Selectable tiles for the recyclable-item catalog.

use leptos::prelude::*;

use crate::selection::item_tiles;
use crate::store::{use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn ItemsGrid() -> impl IntoView {
    let store = use_create_point_store();

    let tiles = Memo::new(move |_| {
        let items = store.items().get();
        let selected = store.selected_items().get();
        item_tiles(&items, &selected)
    });

    view! {
        <fieldset>
            <legend>
                <h2>"Ítens de coleta"</h2>
                <span>"Selecione um ou mais ítens abaixo"</span>
            </legend>

            <ul class="items-grid">
                <For
                    each=move || tiles.get()
                    key=|tile| (tile.id.clone(), tile.selected)
                    children=move |tile| {
                        let id = tile.id.clone();
                        view! {
                            <li
                                class=if tile.selected { "selected" } else { "" }
                                on:click=move |_| store.selected_items().update(|s| s.toggle(&id))
                            >
                                <img src=tile.image_url.clone() alt=tile.title.clone()/>
                                <span>{tile.title.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}

//! Create Point Page
//!
//! Registration form for a collection point. Owns the page store and runs
//! the loads: geolocation, items and UFs once on mount, cities on every UF
//! change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use reactive_stores::Store;

use crate::app::HOME_PATH;
use crate::components::{AddressFields, ContactFields, ItemsGrid, PageHeader};
use crate::context::use_app_context;
use crate::loaders;
use crate::store::{store_apply_center, CreatePointState, CreatePointStateStoreFields};

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let store = Store::new(CreatePointState::new(config.fallback_center));
    provide_context(store);

    // Center the map on the device once; the fallback stays on failure
    let fallback = config.fallback_center;
    Effect::new(move |_| {
        let location = ctx.location();
        spawn_local(async move {
            let center = loaders::locate(location.as_ref(), fallback).await;
            store_apply_center(&store, center);
        });
    });

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let items = loaders::load_items(api.as_ref()).await;
            store.items().try_update(|current| *current = items);
        });
    });

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let ufs = loaders::load_ufs(api.as_ref()).await;
            store.ufs().try_update(|current| *current = ufs);
        });
    });

    // Cities follow the selected UF, including the initial "0"
    Effect::new(move |_| {
        let uf = store.selected_uf().get();
        let Some(token) = store.city_feed().try_update(|feed| feed.begin()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let cities = loaders::load_cities(api.as_ref(), &uf).await;
            let applied = store.city_feed().try_update(|feed| feed.resolve(token, cities));
            if applied == Some(false) {
                log::debug!("[CreatePoint] Dropped stale cities response for {}", uf);
            }
        });
    });

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let uf = store.selected_uf().get_untracked();
        let city = store.selected_city().get_untracked();
        let position = store.position().get_untracked();
        let items = store.selected_items().get_untracked();
        let point = store.form().with_untracked(|form| form.to_new_point(&uf, &city, position, &items));

        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            if loaders::submit_point(api.as_ref(), &point).await {
                navigate(HOME_PATH, NavigateOptions::default());
            }
        });
    };

    view! {
        <div id="page-create-point">
            <PageHeader/>

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br/> "ponto de coleta"</h1>

                <ContactFields/>
                <AddressFields/>
                <ItemsGrid/>

                <button type="submit">"Cadastrar ponto de coleta"</button>
            </form>
        </div>
    }
}

//! Ecoleta Frontend App
//!
//! Wires the capabilities into context and routes between the pages.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::{BrowserLocation, HttpPointsApi};
use crate::components::{CreatePoint, HomePage, NotFound};
use crate::config::AppConfig;
use crate::context::AppContext;

pub const HOME_PATH: &str = "/";
pub const CREATE_POINT_PATH: &str = "/create-point";

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] Using API {} and geography service {}", config.api_base_url, config.geo_base_url);

    let api = Rc::new(HttpPointsApi::new(config.clone()));
    provide_context(AppContext::new(api, Rc::new(BrowserLocation), config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/create-point") view=CreatePoint/>
            </Routes>
        </Router>
    }
}

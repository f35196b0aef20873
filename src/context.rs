//! Application Context
//!
//! Injected capabilities and configuration, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{LocationProvider, PointsApi};
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Rc<dyn PointsApi>, LocalStorage>,
    location: StoredValue<Rc<dyn LocationProvider>, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(api: Rc<dyn PointsApi>, location: Rc<dyn LocationProvider>, config: AppConfig) -> Self {
        Self {
            api: StoredValue::new_local(api),
            location: StoredValue::new_local(location),
            config: StoredValue::new(config),
        }
    }

    /// HTTP capability (local API + geography service)
    pub fn api(&self) -> Rc<dyn PointsApi> {
        self.api.get_value()
    }

    /// Device position capability
    pub fn location(&self) -> Rc<dyn LocationProvider> {
        self.location.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::TodoApi;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every successful mutation so list queries refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every successful mutation so list queries refetch - write
    set_reload_trigger: WriteSignal<u32>,
    /// Backend the queries and mutations talk to
    api: StoredValue<Rc<dyn TodoApi>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        api: Rc<dyn TodoApi>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new_local(api),
        }
    }

    /// Invalidate cached lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }

    pub fn api(&self) -> Rc<dyn TodoApi> {
        self.api.get_value()
    }
}

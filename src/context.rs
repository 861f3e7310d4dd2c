//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpClient;
use crate::banner::BannerTimer;
use crate::controller::Controller;
use crate::store::AppStore;

/// Controller wired to the browser: fetch transport, reactive store,
/// `setTimeout` banner timer
pub type WebController = Controller<HttpClient, AppStore, BannerTimer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// All view state
    pub store: AppStore,
    /// Session controller; lives on the UI thread only
    controller: StoredValue<Rc<WebController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: WebController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<WebController> {
        self.controller.get_value()
    }

    /// Run a controller operation in the background
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<WebController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

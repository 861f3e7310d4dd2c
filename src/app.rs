//! Item Ledger App
//!
//! Root component: anonymous view with the credential forms, or the
//! signed-in view with the item table and summary.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpClient;
use crate::banner::BannerTimer;
use crate::components::{
    CredentialFormView, ErrorBannerView, ItemTable, LogoutButton, ModeToggle, NavBar, SummaryPanel,
};
use crate::config::ApiConfig;
use crate::context::{use_app_context, AppContext, WebController};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let config = ApiConfig::default();
    log::info!("[APP] Using backend at {}", config.base_url);

    let controller = WebController::new(HttpClient::new(config), store, BannerTimer::default());
    let ctx = AppContext::new(store, controller);
    provide_context(ctx);

    let authenticated = move || ctx.store.session().with(|session| session.is_authenticated());

    view! {
        <Show when=authenticated fallback=|| view! { <AnonymousView /> }>
            <SignedInView />
        </Show>
    }
}

#[component]
fn AnonymousView() -> impl IntoView {
    view! {
        <div>
            <NavBar>
                <ModeToggle />
            </NavBar>
            <ErrorBannerView />
            <CredentialFormView />
        </div>
    }
}

#[component]
fn SignedInView() -> impl IntoView {
    let ctx = use_app_context();
    let summary_visible = move || ctx.store.summary().with(|summary| summary.visible);

    view! {
        <div>
            <NavBar>
                <LogoutButton />
            </NavBar>
            <div class="center">
                <Show when=summary_visible fallback=|| view! { <ItemTable /> }>
                    <SummaryPanel />
                </Show>
            </div>
        </div>
    }
}

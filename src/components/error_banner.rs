//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Most recent failure; disappears on its own
#[component]
pub fn ErrorBannerView() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.store.error().with(|banner| banner.message.clone()).map(|message| view! {
            <p class="text-danger d-flex flex-column align-items-center">{message}</p>
        })
    }
}

//! Summary Panel Component
//!
//! Dumps the server's summary verbatim; submitting returns to the table.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let ctx = use_app_context();

    let back = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.controller().hide_summary();
    };

    view! {
        <form class="d-flex flex-column align-items-center" on:submit=back>
            {move || ctx.store.summary().with(|summary| summary.rendered()).map(|dump| view! {
                <div>
                    <p>"Summary:"</p>
                    <pre>{dump}</pre>
                </div>
            })}
            <button type="submit" class="btn btn-primary mt-3 mb-3">"Back"</button>
        </form>
    }
}

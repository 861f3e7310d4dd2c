//! Item Table Component
//!
//! Lists the session's items; submitting asks for the summary.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::format_price;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_app_context();

    let show_summary = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|controller| async move { controller.fetch_summary().await });
    };

    view! {
        <form class="d-flex flex-column align-items-center" on:submit=show_summary>
            <table class="table table-striped table-bordered table-hover">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Price (£)"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctx.store.items().get()
                        // Rows are immutable per fetch; key on content so a
                        // changed item with the same id re-renders
                        key=|item| (item.id.clone(), item.name.clone(), item.price.to_bits())
                        children=move |item| {
                            view! {
                                <tr>
                                    <td>{item.name}</td>
                                    <td>{format_price(item.price)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <button type="submit" class="btn btn-primary mt-3 mb-3">"Summary"</button>
        </form>
    }
}

//! Navigation Bar Component
//!
//! Brand on the left, session actions on the right.

use leptos::prelude::*;

use crate::context::use_app_context;

const BRAND: &str = "Insurance Challenge";

/// Top bar; `children` are rendered as the right-hand actions
#[component]
pub fn NavBar(children: Children) -> impl IntoView {
    view! {
        <nav class="navbar navbar-dark bg-dark">
            <div class="container">
                <span class="navbar-brand">{BRAND}</span>
                <div class="navbar-text justify-content-end">
                    {children()}
                </div>
            </div>
        </nav>
    }
}

/// Ends the session
#[component]
pub fn LogoutButton() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|controller| async move { controller.logout().await });
    };

    view! {
        <form on:submit=logout>
            <button type="submit" class="btn btn-light">"Logout"</button>
        </form>
    }
}

//! Credential Form Components
//!
//! Login and signup forms sharing one set of field values, plus the nav
//! button that switches between them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::{Field, FormMode};
use crate::store::AppStateStoreFields;

/// Switches between login and signup. The label names the other form.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            type="button"
            class="btn btn-light"
            on:click=move |_| ctx.store.form().update(|form| form.toggle_mode())
        >
            {move || ctx.store.form().with(|form| form.mode.toggle_label())}
        </button>
    }
}

/// Single bound input of the credential form
#[component]
fn FieldInput(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="form-group mb-3">
            <label class="form-label">{label}</label>
            <input
                class="form-control"
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || ctx.store.form().with(|form| form.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.store.form().update(|form| form.set(field, value));
                }
            />
            {hint.map(|text| view! { <small class="form-text text-muted">{text}</small> })}
        </div>
    }
}

/// Login or signup form, depending on the current mode
#[component]
pub fn CredentialFormView() -> impl IntoView {
    let ctx = use_app_context();
    let mode = move || ctx.store.form().with(|form| form.mode);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.store.form().with_untracked(|form| form.mode) {
            FormMode::Login => ctx.spawn(|controller| async move { controller.submit_login().await }),
            FormMode::Signup => ctx.spawn(|controller| async move { controller.submit_signup().await }),
        }
    };

    view! {
        <div class="center">
            <form on:submit=submit>
                {move || match mode() {
                    FormMode::Login => view! {
                        <FieldInput field=Field::Username label="Username" input_type="text" placeholder="Enter username" />
                        <FieldInput field=Field::Password label="Password" input_type="password" placeholder="Password" />
                    }.into_any(),
                    FormMode::Signup => view! {
                        <FieldInput
                            field=Field::Username
                            label="Username"
                            input_type="text"
                            placeholder="Enter username"
                            hint="Needs to be unique"
                        />
                        <FieldInput field=Field::Password label="Password" input_type="password" placeholder="Password" />
                        <FieldInput field=Field::Email label="Email address" input_type="email" placeholder="Enter email" />
                    }.into_any(),
                }}
                <button type="submit" class="btn btn-primary">"Submit"</button>
            </form>
        </div>
    }
}

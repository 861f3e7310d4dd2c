//! UI Components
//!
//! Leptos views over the app store.

mod nav_bar;
mod credential_form;
mod error_banner;
mod item_table;
mod summary_panel;

pub use nav_bar::{LogoutButton, NavBar};
pub use credential_form::{CredentialFormView, ModeToggle};
pub use error_banner::ErrorBannerView;
pub use item_table::ItemTable;
pub use summary_panel::SummaryPanel;

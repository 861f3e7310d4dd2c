//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every state
//! transition lives on [`AppState`] so it can be exercised without a
//! browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::banner::ErrorBanner;
use crate::form::CredentialForm;
use crate::models::{Item, SummaryData};

/// Authentication state. A token exists exactly when authenticated.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryView {
    pub visible: bool,
    /// Last fetched summary; kept after hiding
    pub data: Option<SummaryData>,
}

impl SummaryView {
    pub fn show(&mut self, data: SummaryData) {
        self.data = Some(data);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Pretty-printed dump of the summary, when one is on screen.
    /// Empty payloads (`null`, `false`, `0`, `""`) render nothing.
    pub fn rendered(&self) -> Option<String> {
        if !self.visible {
            return None;
        }
        self.data
            .as_ref()
            .filter(|data| !is_empty_payload(data))
            .and_then(|data| serde_json::to_string_pretty(data).ok())
    }
}

fn is_empty_payload(data: &SummaryData) -> bool {
    match data {
        SummaryData::Null => true,
        SummaryData::Bool(b) => !b,
        SummaryData::Number(n) => n.as_f64() == Some(0.0),
        SummaryData::String(s) => s.is_empty(),
        SummaryData::Array(_) | SummaryData::Object(_) => false,
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub session: Session,
    /// Bumped on every sign-in and sign-out; identifies the session a
    /// response was requested under
    pub epoch: u64,
    pub form: CredentialForm,
    pub error: ErrorBanner,
    /// Items of the current session, in server order
    pub items: Vec<Item>,
    pub summary: SummaryView,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, token: String) {
        self.epoch += 1;
        self.session = Session::Authenticated { token };
        self.summary.hide();
        self.error.clear();
    }

    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.session = Session::Anonymous;
        self.items.clear();
        self.summary.hide();
    }

    /// Epoch to tag an outgoing request with, if signed in
    pub fn current_epoch(&self) -> Option<u64> {
        self.session.is_authenticated().then_some(self.epoch)
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.current_epoch() == Some(epoch)
    }

    /// Replace the item list wholesale. Responses from an earlier session
    /// are dropped.
    pub fn replace_items(&mut self, epoch: u64, items: Vec<Item>) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.items = items;
        true
    }

    pub fn show_summary(&mut self, epoch: u64, data: SummaryData) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.summary.show(data);
        true
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Shared, mutable home of [`AppState`] that the controller writes to
pub trait StateCell: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

#[cfg(test)]
impl StateCell for std::rc::Rc<std::cell::RefCell<AppState>> {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}

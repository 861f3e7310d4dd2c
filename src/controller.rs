//! Session Controller
//!
//! Drives every network-backed transition: login, signup, logout, item and
//! summary fetches, and the error banner they report to. Owns the API
//! client, so the authorization header and the session flag always change
//! together.

use crate::api::{Api, ApiError};
use crate::banner::ExpiryTimer;
use crate::config::ERROR_BANNER_TIMEOUT_MS;
use crate::models::{LoginRequest, SignupRequest};
use crate::store::StateCell;

pub struct Controller<A, S, T> {
    api: A,
    state: S,
    timer: T,
}

impl<A, S, T> Controller<A, S, T>
where
    A: Api,
    S: StateCell,
    T: ExpiryTimer,
{
    pub fn new(api: A, state: S, timer: T) -> Self {
        Self { api, state, timer }
    }

    /// Log in with the credentials currently in the form
    pub async fn submit_login(&self) {
        let request = self.state.with_state(|s| s.form.login_request());
        self.login(request).await;
    }

    /// Sign up with the credentials currently in the form
    pub async fn submit_signup(&self) {
        let request = self.state.with_state(|s| s.form.signup_request());
        self.signup(request).await;
    }

    pub async fn login(&self, request: LoginRequest) {
        if let Err(err) = self.authenticate(&request).await {
            log::warn!("[SESSION] Login failed for {}: {}", request.username, err);
            self.report(&err);
        }
    }

    /// Register, then log in with the same credentials. A failed
    /// registration stops the chain.
    pub async fn signup(&self, request: SignupRequest) {
        let result = async {
            self.api.signup(&request).await?;
            log::info!("[SESSION] Registered {}", request.username);
            self.authenticate(&request.login()).await
        }
        .await;

        if let Err(err) = result {
            log::warn!("[SESSION] Signup failed for {}: {}", request.username, err);
            self.report(&err);
        }
    }

    async fn authenticate(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let response = self.api.login(request).await?;

        // Header and session flag flip in one step, with no await between
        self.api.set_token(Some(&response.token));
        self.state.update_state(|s| s.sign_in(response.token));
        log::info!("[SESSION] Logged in as {}", request.username);

        self.fetch_items().await;
        Ok(())
    }

    /// End the session. Local state is cleared even when the request fails.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            log::warn!("[SESSION] Logout request failed, clearing session anyway: {}", err);
        }
        self.api.set_token(None);
        self.state.update_state(|s| s.sign_out());
        log::info!("[SESSION] Logged out");
    }

    /// Reload the item list. Failures are logged, not shown.
    pub async fn fetch_items(&self) {
        let Some(epoch) = self.state.with_state(|s| s.current_epoch()) else {
            log::debug!("[ITEMS] Not signed in, skipping fetch");
            return;
        };

        match self.api.items().await {
            Ok(items) => {
                let count = items.len();
                let mut applied = false;
                self.state.update_state(|s| applied = s.replace_items(epoch, items));
                if applied {
                    log::debug!("[ITEMS] Loaded {} items", count);
                } else {
                    log::debug!("[ITEMS] Dropped response from an ended session");
                }
            }
            Err(err) => log::error!("[ITEMS] Error fetching items: {}", err),
        }
    }

    /// Fetch the summary and switch to it. On failure the list stays.
    pub async fn fetch_summary(&self) {
        let Some(epoch) = self.state.with_state(|s| s.current_epoch()) else {
            log::debug!("[SUMMARY] Not signed in, skipping fetch");
            return;
        };

        match self.api.summary().await {
            Ok(data) => {
                let mut applied = false;
                self.state.update_state(|s| applied = s.show_summary(epoch, data));
                if !applied {
                    log::debug!("[SUMMARY] Dropped response from an ended session");
                }
            }
            Err(err) => log::error!("[SUMMARY] Error fetching summary: {}", err),
        }
    }

    pub fn hide_summary(&self) {
        self.state.update_state(|s| s.summary.hide());
    }

    /// Show `err` on the banner and restart its countdown
    pub fn report(&self, err: &ApiError) {
        log::error!("[API] {}", err);

        let message = err.user_message();
        let now = self.timer.now_ms();
        let mut generation = 0;
        self.state
            .update_state(|s| generation = s.error.report(message, now));

        let state = self.state.clone();
        self.timer.restart(
            ERROR_BANNER_TIMEOUT_MS,
            Box::new(move || {
                state.update_state(|s| {
                    s.error.expire(generation);
                });
            }),
        );
    }
}

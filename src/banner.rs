//! Error Banner
//!
//! Holds the most recent failure message and the timer that clears it.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

use crate::config::ERROR_BANNER_TIMEOUT_MS;

/// At most one message is active; each report supersedes the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBanner {
    pub message: Option<String>,
    /// Clock time (ms) at which the message is due to disappear
    pub expires_at: Option<f64>,
    generation: u64,
}

impl ErrorBanner {
    /// Show `message` from `now_ms` on. Returns the report generation the
    /// matching expiry must present.
    pub fn report(&mut self, message: String, now_ms: f64) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.expires_at = Some(now_ms + f64::from(ERROR_BANNER_TIMEOUT_MS));
        self.generation
    }

    /// Clear the message if it still belongs to `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.clear();
        true
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.expires_at = None;
    }
}

/// Resettable one-shot timer. Restarting drops whatever was pending.
pub trait ExpiryTimer {
    fn now_ms(&self) -> f64;

    fn restart(&self, after_ms: u32, on_expire: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed timer; dropping the `Timeout` cancels it
#[derive(Default)]
pub struct BannerTimer {
    pending: RefCell<Option<Timeout>>,
}

impl ExpiryTimer for BannerTimer {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn restart(&self, after_ms: u32, on_expire: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(after_ms, move || on_expire());
        // The replaced handle is dropped here, cancelling it
        self.pending.replace(Some(timeout));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sets_message_and_deadline() {
        let mut banner = ErrorBanner::default();
        banner.report("X".to_string(), 1000.0);
        assert_eq!(banner.message.as_deref(), Some("X"));
        assert_eq!(banner.expires_at, Some(6000.0));
    }

    #[test]
    fn test_stale_expiry_keeps_newer_message() {
        let mut banner = ErrorBanner::default();
        let first = banner.report("first".to_string(), 0.0);
        let second = banner.report("second".to_string(), 3000.0);

        assert!(!banner.expire(first));
        assert_eq!(banner.message.as_deref(), Some("second"));

        assert!(banner.expire(second));
        assert_eq!(banner.message, None);
        assert_eq!(banner.expires_at, None);
    }
}

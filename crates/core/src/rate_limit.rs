//! Fixed-window request rate limiting for the form-intake endpoints.
//!
//! The limiter is an explicitly constructed component injected into the
//! server state, not a process-global map, so a multi-instance deployment
//! can swap in a shared store without touching call sites. State is
//! in-memory and resets on restart; that is an accepted limitation at this
//! system's scale.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::CoreError;

/// Default ceiling: 5 requests per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 5;

/// Default window length: 15 minutes.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

struct WindowState {
    started_at: Instant,
    count: u32,
}

/// Fixed-window counter store keyed by an opaque client key (an IP address
/// in practice).
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, WindowState>>,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request for `key`, rejecting when the window is full.
    pub fn try_acquire(&self, key: &str) -> Result<(), CoreError> {
        if self.check_at(key, Instant::now()) {
            Ok(())
        } else {
            tracing::warn!(key, "rate limit exceeded");
            Err(CoreError::RateLimited(format!(
                "Too many requests; limit is {} per {} seconds",
                self.max_requests,
                self.window.as_secs()
            )))
        }
    }

    /// Core counting step with an explicit clock, so tests can drive the
    /// window boundary deterministically. Returns `true` when the request
    /// is within the limit.
    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        let state = windows.entry(key.to_string()).or_insert(WindowState {
            started_at: now,
            count: 0,
        });

        if now.duration_since(state.started_at) >= self.window {
            state.started_at = now;
            state.count = 0;
        }

        if state.count >= self.max_requests {
            return false;
        }
        state.count += 1;
        true
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_ceiling_then_rejects() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(900));
        let now = Instant::now();
        for _ in 0..5 {
            assert!(limiter.check_at("203.0.113.9", now));
        }
        assert!(!limiter.check_at("203.0.113.9", now));
    }

    #[test]
    fn keys_are_counted_independently() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(900));
        let now = Instant::now();
        assert!(limiter.check_at("203.0.113.9", now));
        assert!(!limiter.check_at("203.0.113.9", now));
        assert!(limiter.check_at("198.51.100.4", now));
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(900));
        let start = Instant::now();
        assert!(limiter.check_at("203.0.113.9", start));
        assert!(!limiter.check_at("203.0.113.9", start));

        let later = start + Duration::from_secs(901);
        assert!(limiter.check_at("203.0.113.9", later));
    }

    #[test]
    fn try_acquire_reports_rate_limited_error() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(900));
        assert!(limiter.try_acquire("203.0.113.9").is_ok());
        let err = limiter.try_acquire("203.0.113.9").unwrap_err();
        assert!(matches!(err, CoreError::RateLimited(_)));
    }
}

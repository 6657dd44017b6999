//! Fixed-window rate limiter gating project-plan generation.
//!
//! One counter and reset timestamp per client identifier, kept in memory for
//! the life of the process. A fixed window admits up to `2 * max_requests`
//! requests across a window boundary; that imprecision is accepted for an
//! advisory limiter. State is not shared across processes and is lost on
//! restart. Stale records are never evicted (known limitation).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use axum::http::HeaderMap;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after_secs: u64 },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed)
    }
}

#[derive(Debug)]
struct WindowRecord {
    count: u32,
    reset_at_ms: u64,
}

/// In-memory fixed-window limiter.
///
/// Constructed explicitly and shared via `Arc` in `AppState` rather than held
/// as a module-level singleton, so tests build fresh instances and drive the
/// clock through [`FixedWindowLimiter::check`].
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    records: Mutex<HashMap<String, WindowRecord>>,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Checks `client_id` against the quota using the wall clock.
    pub fn check_now(&self, client_id: &str) -> RateDecision {
        self.check(client_id, chrono::Utc::now().timestamp_millis() as u64)
    }

    /// Checks `client_id` against the quota at `now_ms` (unix millis) and
    /// records the attempt. The whole read-modify-write happens under one
    /// lock so concurrent handlers cannot both slip past the quota.
    pub fn check(&self, client_id: &str, now_ms: u64) -> RateDecision {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let window_ms = self.window.as_millis() as u64;

        match records.get_mut(client_id) {
            None => {
                records.insert(
                    client_id.to_string(),
                    WindowRecord {
                        count: 1,
                        reset_at_ms: now_ms + window_ms,
                    },
                );
                RateDecision::Allowed
            }
            Some(record) if now_ms >= record.reset_at_ms => {
                // Window rolled over: start a fresh one.
                record.count = 1;
                record.reset_at_ms = now_ms + window_ms;
                RateDecision::Allowed
            }
            Some(record) if record.count < self.max_requests => {
                record.count += 1;
                RateDecision::Allowed
            }
            Some(record) => {
                let remaining_ms = record.reset_at_ms - now_ms;
                RateDecision::Limited {
                    retry_after_secs: remaining_ms.div_ceil(1000),
                }
            }
        }
    }

    #[cfg(test)]
    fn count(&self, client_id: &str) -> u32 {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(client_id)
            .map(|r| r.count)
            .unwrap_or(0)
    }
}

/// Derives the client identifier for rate limiting from request headers.
/// First `X-Forwarded-For` entry when present (the service runs behind a
/// proxy in deployment), otherwise a shared local bucket.
pub fn client_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "local".to_string())
}

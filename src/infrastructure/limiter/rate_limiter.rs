use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::constants::{RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited,
}

#[derive(Debug)]
struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request counter keyed by client address.
///
/// A client may burst up to twice the nominal limit across a window
/// boundary; that is the accepted cost of the fixed window. Entries are
/// never evicted and the state is process-local, so a restart clears all
/// limiting.
pub struct FixedWindowLimiter {
    map: DashMap<String, Arc<Mutex<WindowEntry>>>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        FixedWindowLimiter {
            map: DashMap::new(),
            limit,
            window,
        }
    }

    /// Limiter for the public contact form: 5 requests per minute per key.
    pub fn contact_form() -> Self {
        Self::new(RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW)
    }

    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let entry = self.entry_for(key, now);
        let mut entry = entry.lock();

        if now >= entry.reset_at {
            entry.count = 1;
            entry.reset_at = now + self.window;
            return RateDecision::Allowed;
        }

        entry.count += 1;
        if entry.count <= self.limit {
            RateDecision::Allowed
        } else {
            RateDecision::Limited
        }
    }

    fn entry_for(&self, key: &str, now: Instant) -> Arc<Mutex<WindowEntry>> {
        if let Some(existing) = self.map.get(key) {
            return existing.clone();
        }
        // A fresh entry with an already-elapsed window; check_at starts the
        // first window itself, which also resolves races on first insert.
        let fresh = Arc::new(Mutex::new(WindowEntry {
            count: 0,
            reset_at: now,
        }));
        match self.map.entry(key.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(entry) => entry.get().clone(),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(fresh.clone());
                fresh
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_then_denies() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
        let now = Instant::now();

        for i in 0..5 {
            assert_eq!(
                limiter.check_at("203.0.113.7", now),
                RateDecision::Allowed,
                "request {}",
                i + 1
            );
        }
        assert_eq!(limiter.check_at("203.0.113.7", now), RateDecision::Limited);
    }

    #[test]
    fn window_expiry_resets_the_count() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();

        for _ in 0..6 {
            limiter.check_at("key", start);
        }
        assert_eq!(limiter.check_at("key", start), RateDecision::Limited);

        let later = start + Duration::from_secs(61);
        assert_eq!(limiter.check_at("key", later), RateDecision::Allowed);
        // the new window starts fresh
        for _ in 0..4 {
            assert_eq!(limiter.check_at("key", later), RateDecision::Allowed);
        }
        assert_eq!(limiter.check_at("key", later), RateDecision::Limited);
    }

    #[test]
    fn keys_are_counted_independently() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert_eq!(limiter.check_at("a", now), RateDecision::Allowed);
        assert_eq!(limiter.check_at("a", now), RateDecision::Limited);
        assert_eq!(limiter.check_at("b", now), RateDecision::Allowed);
    }

    #[test]
    fn concurrent_checks_never_exceed_the_limit() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let limiter = Arc::new(FixedWindowLimiter::new(5, Duration::from_secs(60)));
        let allowed = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                let allowed = allowed.clone();
                std::thread::spawn(move || {
                    if limiter.check("shared") == RateDecision::Allowed {
                        allowed.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(allowed.load(Ordering::SeqCst), 5);
    }
}

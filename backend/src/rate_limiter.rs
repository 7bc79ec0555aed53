use std::collections::HashMap;
use std::sync::Mutex;
use time::{OffsetDateTime, Duration};
use tracing::{warn, error};

#[derive(Debug)]
struct RateLimit {
    attempts: u32,
    first_attempt: OffsetDateTime,
}

#[derive(Debug)]
pub struct RateLimiter {
    limits: Mutex<HashMap<String, RateLimit>>,
    max_attempts: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            limits: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    pub fn per_minute(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::minutes(1))
    }

    pub fn check_rate_limit(&self, key: &str) -> Result<(), String> {
        self.check_at(key, OffsetDateTime::now_utc())
    }

    fn check_at(&self, key: &str, now: OffsetDateTime) -> Result<(), String> {
        let mut limits = self.limits.lock().map_err(|e| {
            error!("Failed to acquire rate limit lock: {}", e);
            "Internal rate limit error".to_string()
        })?;

        let limit = limits.entry(key.to_string()).or_insert(RateLimit { attempts: 0, first_attempt: now });
        if now - limit.first_attempt > self.window {
            *limit = RateLimit { attempts: 0, first_attempt: now };
        }

        if limit.attempts >= self.max_attempts {
            let seconds_to_wait = (limit.first_attempt + self.window - now).whole_seconds().max(1);
            let message = format!("Rate limit exceeded. Please try again in {} seconds.", seconds_to_wait);
            warn!("Rate limit triggered for key {}: {}", key, message);
            return Err(message);
        }

        limit.attempts += 1;
        Ok(())
    }

    /// Drops entries whose window has passed. Returns how many were removed.
    pub fn prune(&self) -> usize {
        self.prune_at(OffsetDateTime::now_utc())
    }

    fn prune_at(&self, now: OffsetDateTime) -> usize {
        match self.limits.lock() {
            Ok(mut limits) => {
                let before = limits.len();
                limits.retain(|_, limit| now - limit.first_attempt <= self.window);
                before - limits.len()
            }
            Err(e) => {
                error!("Failed to acquire rate limit lock: {}", e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_resets_and_prunes() {
        let limiter = RateLimiter::new(2, Duration::seconds(60));
        let start = OffsetDateTime::now_utc();

        assert!(limiter.check_at("a", start).is_ok());
        assert!(limiter.check_at("a", start + Duration::seconds(1)).is_ok());
        assert!(limiter.check_at("a", start + Duration::seconds(2)).is_err());
        assert!(limiter.check_at("b", start + Duration::seconds(2)).is_ok());

        assert!(limiter.check_at("a", start + Duration::seconds(61)).is_ok());

        assert_eq!(limiter.prune_at(start + Duration::seconds(100)), 1);
        assert_eq!(limiter.prune_at(start + Duration::seconds(200)), 1);
    }
}

use std::time::Duration;

/// Backoff schedule for retried chat queries. No jitter, no shared budget
/// across calls; each query gets a fresh schedule.
///
/// Defaults match the assistant's production settings: 2 retries after the
/// first attempt (3 attempts total), delays of 1s then 2s, later retries
/// pinned at the 5s cap.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(5000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
            max_delay,
        }
    }

    /// Retries after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay before the given 0-indexed retry.
    ///
    /// The multiplier compounds with the retry index (x1, then x2, then x4 on
    /// top of that), so from the third retry on the schedule has saturated at
    /// `max_delay`: 1000ms, 2000ms, min(8000, 5000) = 5000ms, ...
    pub fn delay_for(&self, retry: u32) -> Duration {
        let max = self.max_delay.as_millis() as u64;
        let mut delay = self.initial_delay.as_millis() as u64;
        for step in 1..=retry {
            delay = delay.saturating_mul(2u64.saturating_pow(step));
        }
        Duration::from_millis(delay.min(max))
    }
}

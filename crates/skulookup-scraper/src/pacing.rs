//! Randomized delay between consecutive batch requests.
//!
//! Politeness only: batches already run one request at a time, and the
//! delay never affects ordering or results.

use std::time::Duration;

use rand::Rng;
use skulookup_core::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl Pacing {
    /// A delay drawn uniformly from `min_delay_ms..=max_delay_ms`. The bounds
    /// are swapped if given in the wrong order.
    #[must_use]
    pub fn new(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            min_delay_ms: min_delay_ms.min(max_delay_ms),
            max_delay_ms: min_delay_ms.max(max_delay_ms),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.min_delay_ms, config.max_delay_ms)
    }

    #[must_use]
    pub fn next_delay(&self) -> Duration {
        if self.max_delay_ms == 0 {
            return Duration::ZERO;
        }
        let ms = rand::rng().random_range(self.min_delay_ms..=self.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Sleeps for [`Pacing::next_delay`], returning immediately for zero.
    pub async fn wait(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        tracing::debug!(delay_ms = delay.as_millis(), "pacing before next request");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_always_zero() {
        assert_eq!(Pacing::none().next_delay(), Duration::ZERO);
    }

    #[test]
    fn delay_stays_within_bounds() {
        let pacing = Pacing::new(10, 20);
        for _ in 0..100 {
            let ms = pacing.next_delay().as_millis();
            assert!((10..=20).contains(&ms), "delay {ms}ms out of range");
        }
    }

    #[test]
    fn inverted_bounds_are_normalized() {
        assert_eq!(Pacing::new(50, 5), Pacing::new(5, 50));
    }

    #[test]
    fn fixed_delay_when_bounds_equal() {
        assert_eq!(Pacing::new(7, 7).next_delay(), Duration::from_millis(7));
    }

    #[tokio::test]
    async fn wait_with_no_pacing_returns_immediately() {
        let start = std::time::Instant::now();
        Pacing::none().wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}

//! Display refresh abstraction for frame-driven animations

use async_trait::async_trait;
use std::sync::Mutex;

/// Source of animation frames, the equivalent of a display refresh callback.
#[async_trait]
pub trait FrameClock: Send + Sync {
    /// Waits for the next frame and returns its timestamp in milliseconds.
    /// Timestamps are monotonic for a given clock.
    async fn next_frame(&self) -> f64;
}

/// Frame clock backed by tokio timers
#[cfg(feature = "tokio-runtime")]
pub struct TokioFrameClock {
    origin: tokio::time::Instant,
    interval: std::time::Duration,
}

#[cfg(feature = "tokio-runtime")]
impl TokioFrameClock {
    pub fn new(interval: std::time::Duration) -> Self {
        Self {
            origin: tokio::time::Instant::now(),
            interval,
        }
    }

    pub fn from_config(config: &crate::core::config::ScrollConfig) -> Self {
        Self::new(std::time::Duration::from_millis(config.frame_interval_ms))
    }
}

#[cfg(feature = "tokio-runtime")]
#[async_trait]
impl FrameClock for TokioFrameClock {
    async fn next_frame(&self) -> f64 {
        tokio::time::sleep(self.interval).await;
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that advances a fixed step per frame without waiting.
/// Useful for headless hosts that only care about the final state.
pub struct SteppedFrameClock {
    now: Mutex<f64>,
    step_ms: f64,
}

impl SteppedFrameClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now: Mutex::new(start_ms),
            step_ms,
        }
    }
}

#[async_trait]
impl FrameClock for SteppedFrameClock {
    async fn next_frame(&self) -> f64 {
        let now = {
            let mut now = crate::sync::lock(&self.now);
            let current = *now;
            *now += self.step_ms;
            current
        };
        tokio::task::yield_now().await;
        now
    }
}

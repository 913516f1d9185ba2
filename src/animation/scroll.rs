//! Smooth page scrolling
//!
//! A scroll is an explicit state machine, [`ScrollAnimation`], sampled once
//! per frame. [`Animator`] drives it against a page from a [`FrameClock`] and
//! hands out generations so a newer scroll stops an older one.

use crate::{
    animation::{
        clock::FrameClock,
        interpolation::{EasingFunction, Interpolation},
    },
    core::config::ScrollConfig,
    page::{ElementId, PageSurface},
    sync::lock,
    Error, Result,
};
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::Duration,
};

/// Offset for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub finished: bool,
}

/// Time-based interpolation from one scroll offset to another
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start_time: Option<f64>,
    start_offset: f64,
    target_offset: f64,
    duration_ms: f64,
    easing: EasingFunction,
}

impl ScrollAnimation {
    pub fn new(start_offset: f64, target_offset: f64, duration: Duration) -> Self {
        Self::with_easing(
            start_offset,
            target_offset,
            duration,
            EasingFunction::EaseInOutQuad,
        )
    }

    pub fn with_easing(
        start_offset: f64,
        target_offset: f64,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_time: None,
            start_offset,
            target_offset,
            duration_ms: duration.as_secs_f64() * 1000.0,
            easing,
        }
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn distance(&self) -> f64 {
        self.target_offset - self.start_offset
    }

    /// Advances to the frame at `now` (ms). The first sample fixes the start time.
    pub fn sample(&mut self, now: f64) -> ScrollFrame {
        let start_time = *self.start_time.get_or_insert(now);
        let elapsed = (now - start_time).max(0.0);

        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return ScrollFrame {
                offset: self.target_offset,
                finished: true,
            };
        }

        ScrollFrame {
            offset: Interpolation::ease(
                self.start_offset,
                self.target_offset,
                elapsed / self.duration_ms,
                self.easing,
            ),
            finished: false,
        }
    }
}

/// How a scroll run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Completed { frames: u32 },
    /// A newer scroll started before this one reached its target
    Superseded { frames: u32 },
}

/// Drives scroll animations against a page
pub struct Animator {
    generation: AtomicU64,
    duration: Duration,
    easing: EasingFunction,
}

impl Animator {
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            generation: AtomicU64::new(0),
            duration,
            easing,
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(Duration::from_millis(config.duration_ms), config.easing)
    }

    /// Cancels any running scroll at its next frame
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Smoothly scrolls the page so `element`'s top edge reaches the top of the viewport
    pub async fn scroll_to<P>(
        &self,
        page: &Mutex<P>,
        element: ElementId,
        clock: &dyn FrameClock,
    ) -> Result<ScrollOutcome>
    where
        P: PageSurface + ?Sized,
    {
        let mut animation = {
            let page = lock(page);
            let start = page.scroll_offset();
            let top = page
                .element_top(element)
                .ok_or_else(|| Error::MissingElement(element.to_string()))?;
            ScrollAnimation::with_easing(start, top + start, self.duration, self.easing)
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "scroll #{} to '{}': {:.0}px -> {:.0}px",
            generation,
            element,
            animation.start_offset(),
            animation.target_offset()
        );

        let mut frames = 0;
        loop {
            let now = clock.next_frame().await;
            if self.generation.load(Ordering::SeqCst) != generation {
                log::debug!("scroll #{} superseded after {} frames", generation, frames);
                return Ok(ScrollOutcome::Superseded { frames });
            }

            let frame = animation.sample(now);
            lock(page).scroll_to(frame.offset);
            frames += 1;

            if frame.finished {
                return Ok(ScrollOutcome::Completed { frames });
            }
        }
    }
}

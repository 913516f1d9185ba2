pub mod clock;
pub mod interpolation;
pub mod scroll;

// Re-export commonly used types and functions for convenience
pub use clock::{FrameClock, SteppedFrameClock};
pub use interpolation::{EasingFunction, Interpolation};
pub use scroll::{Animator, ScrollAnimation, ScrollFrame, ScrollOutcome};

#[cfg(feature = "tokio-runtime")]
pub use clock::TokioFrameClock;

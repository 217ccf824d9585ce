//! Utility helpers for tests.
//!
//! Builders for levels and players plus a fixed-rate clock for driving the
//! movement core frame by frame.

pub mod clock;
pub mod physics;

pub use clock::{run_frame, run_frames, settle, FrameClock};
pub use physics::{floor, player_at, rect, single_level, standing_on, stock_level, tower};

/// Collects every event emitted across `outcomes`, in order.
///
/// # Examples
/// ```
/// use kings_trial::{PlayerEvent, StepOutcome};
/// use test_utils::all_events;
/// let outcome = StepOutcome { events: vec![PlayerEvent::Jump], ..StepOutcome::default() };
/// assert_eq!(all_events(&[outcome]), vec![PlayerEvent::Jump]);
/// ```
#[must_use]
pub fn all_events(outcomes: &[kings_trial::StepOutcome]) -> Vec<kings_trial::PlayerEvent> {
    outcomes
        .iter()
        .flat_map(|outcome| outcome.events.iter().copied())
        .collect()
}

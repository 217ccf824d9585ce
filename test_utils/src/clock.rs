//! Fixed-rate frame driving for scenario tests.

use kings_trial::{step, InputSnapshot, LevelGeometry, PlayerState, StepOutcome, World, FRAMES_PER_SECOND};

/// Monotonic simulation clock advancing one frame at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    now: f64,
    dt: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::at_rate(FRAMES_PER_SECOND)
    }
}

impl FrameClock {
    /// A clock starting at zero that ticks `fps` times per second.
    #[must_use]
    pub fn at_rate(fps: f64) -> Self {
        Self { now: 0.0, dt: 1.0 / fps }
    }

    /// Current time in seconds.
    #[must_use]
    pub const fn now(&self) -> f64 {
        self.now
    }

    /// Seconds per frame.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Moves the clock forward by one frame.
    pub fn tick(&mut self) {
        self.now += self.dt;
    }

    /// Moves the clock forward by an arbitrary amount.
    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

/// Steps `player` once with `input` at the clock's time, then ticks.
pub fn run_frame<G>(
    player: &mut PlayerState,
    input: &InputSnapshot,
    level: usize,
    world: World<'_, G>,
    clock: &mut FrameClock,
) -> StepOutcome
where
    G: LevelGeometry + ?Sized,
{
    let outcome = step(player, input, level, world, clock.now());
    clock.tick();
    outcome
}

/// Steps `player` `frames` times with the same `input`, collecting every
/// outcome.
pub fn run_frames<G>(
    player: &mut PlayerState,
    input: &InputSnapshot,
    level: usize,
    world: World<'_, G>,
    clock: &mut FrameClock,
    frames: usize,
) -> Vec<StepOutcome>
where
    G: LevelGeometry + ?Sized,
{
    (0..frames)
        .map(|_| run_frame(player, input, level, world, clock))
        .collect()
}

/// Idle frames until the player is grounded, giving up after `limit`.
/// Returns the outcomes of every frame that ran.
pub fn settle<G>(
    player: &mut PlayerState,
    level: usize,
    world: World<'_, G>,
    clock: &mut FrameClock,
    limit: usize,
) -> Vec<StepOutcome>
where
    G: LevelGeometry + ?Sized,
{
    let mut outcomes = Vec::new();
    for _ in 0..limit {
        outcomes.push(run_frame(player, &InputSnapshot::idle(), level, world, clock));
        if player.grounded {
            break;
        }
    }
    outcomes
}

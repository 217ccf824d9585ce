//! Side effects emitted by a simulation step.
//!
//! The core never touches audio or rendering; it records what happened and
//! the host drains the list after each step.

use serde::{Deserialize, Serialize};

/// Something the host may want to play a sound or effect for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerEvent {
    /// A jump launched.
    Jump,
    /// The player touched down on flat ground after being airborne.
    Land,
    /// The player hit a wall or ceiling.
    Bump,
    /// A long fall ended; `damage` may be zero exactly at the threshold.
    Splat {
        /// Health removed by the impact.
        damage: u16,
    },
    /// Health reached zero.
    Death,
    /// A coin was picked up.
    CoinCollected {
        /// Index into the coin table.
        coin: usize,
    },
    /// The player touched the flag pole on the last level.
    FlagReached,
    /// A turret bullet struck the player.
    BulletHit,
}

/// Level change requested by the step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTransition {
    /// Player left through the top; the next level becomes active.
    Advance,
    /// Player left through the bottom; the previous level becomes active.
    Retreat,
    /// Stay on the current level.
    #[default]
    None,
}

/// Result of one call to [`crate::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Level change the host must apply before the next step.
    pub transition: LevelTransition,
    /// Events in the order they happened.
    pub events: Vec<PlayerEvent>,
}

impl StepOutcome {
    /// Whether the player died during the step.
    #[must_use]
    pub fn died(&self) -> bool {
        self.events.contains(&PlayerEvent::Death)
    }

    /// Whether `event` was emitted.
    #[must_use]
    pub fn emitted(&self, event: PlayerEvent) -> bool {
        self.events.contains(&event)
    }

    /// Number of times `event` was emitted.
    #[must_use]
    pub fn count(&self, event: PlayerEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub(crate) fn push(&mut self, event: PlayerEvent) {
        self.events.push(event);
    }
}

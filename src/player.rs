//! The player's kinematic state.
//!
//! [`PlayerState`] is created once per session, mutated by every
//! [`crate::step`] call and reset only by the host.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::health::Health;
use crate::jump::JumpCharge;
use crate::PhysicsConfig;

/// Everything the movement core tracks about the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Top-left corner of the bounding box.
    pub position: DVec2,
    /// Displacement per step.
    pub velocity: DVec2,
    /// Bounding box size.
    pub size: DVec2,
    /// Resting on flat ground after this step's collision pass.
    pub grounded: bool,
    /// Last non-neutral horizontal intent.
    pub facing_right: bool,
    /// Jump charge sub-state.
    pub jump: JumpCharge,
    /// Simulation time at which the current fall began.
    pub fall_start: Option<f64>,
    /// Frozen after a damaging landing until movement or jump input.
    pub fall_impact_lock: bool,
    /// Latch that keeps the landing cue from repeating while resting.
    pub has_landed: bool,
    /// Remaining health.
    pub health: Health,
    /// Jumps launched this session.
    pub jump_count: u32,
    /// Damaging falls this session.
    pub fall_counter: u32,
}

impl PlayerState {
    /// A fresh player at `position` using the configured size and health.
    #[must_use]
    pub fn new(position: DVec2, config: &PhysicsConfig) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            size: config.player_size,
            grounded: false,
            facing_right: true,
            jump: JumpCharge::default(),
            fall_start: None,
            fall_impact_lock: false,
            has_landed: false,
            health: Health::full(config.max_health),
            jump_count: 0,
            fall_counter: 0,
        }
    }

    /// Bounding box at the current position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }

    /// Bounding box displaced by `offset`.
    #[must_use]
    pub fn bounds_at(&self, offset: DVec2) -> Rect {
        self.bounds().translated(offset)
    }

    /// Whether the player is dead.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// Whether a jump charge is pending.
    #[must_use]
    pub const fn is_charging(&self) -> bool {
        self.jump.is_charging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_airborne_with_full_health() {
        let config = PhysicsConfig::default();
        let player = PlayerState::new(DVec2::new(10.0, 20.0), &config);
        assert!(!player.grounded);
        assert_eq!(player.health.current, config.max_health);
        assert_eq!(player.bounds(), Rect::new(10.0, 20.0, 40.0, 40.0));
        assert!(player.jump.allowed());
    }
}

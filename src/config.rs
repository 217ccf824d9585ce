//! Runtime tuning for the movement core.
//!
//! Defaults mirror [`crate::constants`]; hosts may deserialize a partial
//! JSON object to override individual values.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AUTO_RELEASE_SECS, BASE_JUMP_FORCE, BOUNCE_VELOCITY, CHARGE_CAP_SECS,
    FALL_DAMAGE_PER_SECOND, FALL_DAMAGE_THRESHOLD_SECS, FLY_STEP, GRAVITY, JUMP_FORCE_PER_SECOND,
    JUMP_SPEED, MAX_HEALTH, PLAYER_HEIGHT, PLAYER_WIDTH, SLOPE_DROP_VELOCITY, SLOPE_SLIDE_SPEED,
    SLOPE_WIDTH_THRESHOLD, TERMINAL_VELOCITY, WALK_SPEED, WALL_BOUNCE_BIAS, WORLD_HEIGHT,
    WORLD_WIDTH,
};

/// Tuning values consumed by [`crate::step`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // ------------------------------------------------------------------
    // World
    // ------------------------------------------------------------------
    /// Playable width; the player cannot leave `[0, world_width]`.
    pub world_width: f64,
    /// Height of a level; crossing it triggers a transition.
    pub world_height: f64,
    /// Player bounding box size.
    pub player_size: DVec2,

    // ------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------
    /// Default gravity.
    pub gravity: f64,
    /// Downward speed cap.
    pub terminal_velocity: f64,
    /// Walking speed.
    pub walk_speed: f64,
    /// Default horizontal jump speed.
    pub jump_speed: f64,
    /// Free-fly displacement per step.
    pub fly_step: f64,

    // ------------------------------------------------------------------
    // Jump charge
    // ------------------------------------------------------------------
    /// Force of an uncharged jump.
    pub base_jump_force: f64,
    /// Force gained per second held.
    pub jump_force_per_second: f64,
    /// Charge time after which force stops growing.
    pub charge_cap_secs: f64,
    /// Charge time after which the jump fires by itself.
    pub auto_release_secs: f64,

    // ------------------------------------------------------------------
    // Collisions
    // ------------------------------------------------------------------
    /// Bias added when reflecting off a wall.
    pub wall_bounce_bias: f64,
    /// Platforms narrower than this may be slopes.
    pub slope_width_threshold: f64,
    /// Lateral slide speed.
    pub slope_slide_speed: f64,
    /// Vertical velocity while sliding.
    pub slope_drop_velocity: f64,
    /// Launch velocity of a bounce zone.
    pub bounce_velocity: f64,

    // ------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------
    /// Full health.
    pub max_health: u16,
    /// Falls up to this long are harmless.
    pub fall_damage_threshold_secs: f64,
    /// Damage per second beyond the threshold.
    pub fall_damage_per_second: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_size: DVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),

            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            walk_speed: WALK_SPEED,
            jump_speed: JUMP_SPEED,
            fly_step: FLY_STEP,

            base_jump_force: BASE_JUMP_FORCE,
            jump_force_per_second: JUMP_FORCE_PER_SECOND,
            charge_cap_secs: CHARGE_CAP_SECS,
            auto_release_secs: AUTO_RELEASE_SECS,

            wall_bounce_bias: WALL_BOUNCE_BIAS,
            slope_width_threshold: SLOPE_WIDTH_THRESHOLD,
            slope_slide_speed: SLOPE_SLIDE_SPEED,
            slope_drop_velocity: SLOPE_DROP_VELOCITY,
            bounce_velocity: BOUNCE_VELOCITY,

            max_health: MAX_HEALTH,
            fall_damage_threshold_secs: FALL_DAMAGE_THRESHOLD_SECS,
            fall_damage_per_second: FALL_DAMAGE_PER_SECOND,
        }
    }
}

impl PhysicsConfig {
    /// Parses overrides from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns the decoder error when the JSON does not match the layout.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Strongest jump the charge model can produce.
    #[must_use]
    pub fn max_jump_force(&self) -> f64 {
        self.base_jump_force + self.charge_cap_secs * self.jump_force_per_second
    }
}

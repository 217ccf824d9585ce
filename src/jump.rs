//! Jump charge/release state machine.
//!
//! `Idle → Charging → (Released | AutoReleased) → Idle`. Holding the jump
//! key stores the charge start time; the launch force grows with the held
//! duration up to a cap. A charge that is held too long fires by itself.
//!
//! After either kind of release the machine refuses to start another charge
//! until the host reports a key-up edge via [`JumpCharge::reset`], so one
//! long key press can never produce two jumps.

use serde::{Deserialize, Serialize};

use crate::input::Horizontal;
use crate::PhysicsConfig;

/// Whether a charge is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum JumpPhase {
    /// No jump pending.
    #[default]
    Idle,
    /// Jump key held since `started_at`.
    Charging {
        /// Simulation time the charge began.
        started_at: f64,
    },
}

/// How a charge ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    /// The host reported the key going up.
    Released,
    /// The charge reached the auto-release threshold.
    AutoReleased,
}

/// Charge sub-state of the player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpCharge {
    phase: JumpPhase,
    allowed: bool,
    direction: i8,
    force: f64,
}

impl Default for JumpCharge {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Idle,
            allowed: true,
            direction: 0,
            force: crate::BASE_JUMP_FORCE,
        }
    }
}

/// Launch force for a charge held `held_secs`.
///
/// `base + min(held, cap) * scale`; negative durations count as zero.
#[must_use]
pub fn charge_force(held_secs: f64, config: &PhysicsConfig) -> f64 {
    let held = held_secs.clamp(0.0, config.charge_cap_secs);
    config.base_jump_force + held * config.jump_force_per_second
}

impl JumpCharge {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> JumpPhase {
        self.phase
    }

    /// Whether the jump key is being held for a charge.
    #[must_use]
    pub const fn is_charging(&self) -> bool {
        matches!(self.phase, JumpPhase::Charging { .. })
    }

    /// Time the current charge began.
    #[must_use]
    pub const fn started_at(&self) -> Option<f64> {
        match self.phase {
            JumpPhase::Charging { started_at } => Some(started_at),
            JumpPhase::Idle => None,
        }
    }

    /// Whether a new charge may begin.
    #[must_use]
    pub const fn allowed(&self) -> bool {
        self.allowed
    }

    /// Launch direction chosen while charging: `-1`, `0` or `1`.
    #[must_use]
    pub const fn direction(&self) -> i8 {
        self.direction
    }

    /// Force of the most recent release.
    #[must_use]
    pub const fn force(&self) -> f64 {
        self.force
    }

    /// Seconds the key has been held, zero when idle.
    #[must_use]
    pub fn held_secs(&self, now: f64) -> f64 {
        self.started_at().map_or(0.0, |start| (now - start).max(0.0))
    }

    /// Fill level of the charge bar in `0.0..=1.0`.
    #[must_use]
    pub fn charge_ratio(&self, now: f64, config: &PhysicsConfig) -> f64 {
        if !self.is_charging() || config.auto_release_secs <= 0.0 {
            return 0.0;
        }
        self.held_secs(now).min(config.auto_release_secs) / config.auto_release_secs
    }

    /// Begins charging if the player is grounded and a key-up was seen since
    /// the last release. Returns whether charging started.
    pub fn try_start(&mut self, now: f64, grounded: bool) -> bool {
        if !grounded || !self.allowed || self.is_charging() {
            return false;
        }
        self.phase = JumpPhase::Charging { started_at: now };
        log::debug!("jump charge started at {now:.3}");
        true
    }

    /// Records the launch direction while charging.
    pub fn steer(&mut self, intent: Horizontal) {
        if self.is_charging() {
            self.direction = intent.direction();
        }
    }

    /// Ends the charge on a key-up edge and returns the launch force.
    pub fn release(&mut self, now: f64, config: &PhysicsConfig) -> Option<f64> {
        self.finish(now, config, ReleaseKind::Released)
    }

    /// Ends the charge once it has been held for the auto-release time.
    pub fn auto_release(&mut self, now: f64, config: &PhysicsConfig) -> Option<f64> {
        if self.held_secs(now) < config.auto_release_secs {
            return None;
        }
        self.finish(now, config, ReleaseKind::AutoReleased)
    }

    fn finish(&mut self, now: f64, config: &PhysicsConfig, kind: ReleaseKind) -> Option<f64> {
        if !self.is_charging() || !self.allowed {
            return None;
        }
        self.force = charge_force(self.held_secs(now), config);
        self.phase = JumpPhase::Idle;
        self.allowed = false;
        log::debug!("jump {kind:?} with force {:.2}", self.force);
        Some(self.force)
    }

    /// Refuses new charges until the next key-up edge.
    pub fn disarm(&mut self) {
        self.allowed = false;
    }

    /// Key-up edge: re-arms charging.
    pub fn reset(&mut self) {
        self.allowed = true;
    }

    /// Drops a pending charge without launching.
    pub fn abandon(&mut self) {
        if self.is_charging() {
            log::debug!("jump charge abandoned");
        }
        self.phase = JumpPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    #[rstest]
    #[case(0.0, 5.0)]
    #[case(0.25, 10.0)]
    #[case(0.8, 21.0)]
    #[case(3.0, 21.0)]
    #[case(-1.0, 5.0)]
    fn force_grows_until_cap(config: PhysicsConfig, #[case] held: f64, #[case] expected: f64) {
        assert_relative_eq!(charge_force(held, &config), expected);
    }

    #[rstest]
    fn cannot_charge_airborne() {
        let mut charge = JumpCharge::default();
        assert!(!charge.try_start(0.0, false));
        assert_eq!(charge.phase(), JumpPhase::Idle);
    }

    #[rstest]
    fn release_disarms_until_reset(config: PhysicsConfig) {
        let mut charge = JumpCharge::default();
        assert!(charge.try_start(1.0, true));
        assert_relative_eq!(charge.release(1.25, &config).unwrap_or_default(), 10.0);
        assert!(!charge.allowed());
        assert!(!charge.try_start(2.0, true));
        charge.reset();
        assert!(charge.try_start(2.0, true));
    }

    #[rstest]
    fn auto_release_waits_for_threshold(config: PhysicsConfig) {
        let mut charge = JumpCharge::default();
        charge.try_start(0.0, true);
        assert!(charge.auto_release(0.99, &config).is_none());
        assert!(charge.is_charging());
        assert_relative_eq!(charge.auto_release(1.0, &config).unwrap_or_default(), 21.0);
        assert!(!charge.is_charging());
    }

    #[rstest]
    fn steering_only_counts_while_charging() {
        let mut charge = JumpCharge::default();
        charge.steer(Horizontal::Left);
        assert_eq!(charge.direction(), 0);
        charge.try_start(0.0, true);
        charge.steer(Horizontal::Left);
        assert_eq!(charge.direction(), -1);
    }

    #[rstest]
    fn abandon_discards_force(config: PhysicsConfig) {
        let mut charge = JumpCharge::default();
        charge.try_start(0.0, true);
        charge.abandon();
        assert!(charge.release(0.5, &config).is_none());
        assert_relative_eq!(charge.force(), config.base_jump_force);
        assert!(charge.allowed());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.5, 0.5)]
    #[case(4.0, 1.0)]
    fn charge_ratio_fills_to_one(config: PhysicsConfig, #[case] held: f64, #[case] expected: f64) {
        let mut charge = JumpCharge::default();
        charge.try_start(10.0, true);
        assert_relative_eq!(charge.charge_ratio(10.0 + held, &config), expected);
    }
}

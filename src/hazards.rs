//! The wall turret and its bullets.
//!
//! The turret fires on a fixed interval while the player is on its level.
//! Bullets travel right until they leave the world or hit the player, who is
//! knocked back up and to the right.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::events::{PlayerEvent, StepOutcome};
use crate::geometry::Rect;
use crate::player::PlayerState;
use crate::{
    BULLET_KNOCKBACK_VX, BULLET_KNOCKBACK_VY, BULLET_SPEED, TURRET_INTERVAL_SECS, TURRET_LEVEL,
};

/// A turret mounted on one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    /// Level the turret is mounted on.
    pub level: usize,
    /// Box of a freshly fired bullet.
    pub muzzle: Rect,
    /// Seconds between shots.
    pub interval_secs: f64,
    /// Bullet displacement per step.
    pub bullet_speed: f64,
    /// Velocity given to a player who is hit.
    pub knockback: DVec2,
    bullets: Vec<Rect>,
    last_shot: Option<f64>,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            level: TURRET_LEVEL,
            muzzle: Rect::new(63.0, 664.0, 20.0, 7.0),
            interval_secs: TURRET_INTERVAL_SECS,
            bullet_speed: BULLET_SPEED,
            knockback: DVec2::new(BULLET_KNOCKBACK_VX, BULLET_KNOCKBACK_VY),
            bullets: Vec::new(),
            last_shot: None,
        }
    }
}

impl Turret {
    /// Bullets currently in flight.
    #[must_use]
    pub fn bullets(&self) -> &[Rect] {
        &self.bullets
    }

    /// Advances the turret by one step.
    ///
    /// Away from its level the turret is silent and its bullets vanish.
    pub fn update(
        &mut self,
        level: usize,
        player: &mut PlayerState,
        world_width: f64,
        now: f64,
        outcome: &mut StepOutcome,
    ) {
        if level != self.level {
            self.bullets.clear();
            return;
        }

        let interval = self.interval_secs;
        if self.last_shot.is_none_or(|last| now - last >= interval) {
            self.last_shot = Some(now);
            self.bullets.push(self.muzzle);
            log::trace!("turret fired at {now:.2}");
        }

        let speed = self.bullet_speed;
        let target = player.bounds();
        let mut hit = false;
        self.bullets.retain_mut(|bullet| {
            bullet.x += speed;
            if bullet.x > world_width {
                return false;
            }
            if bullet.overlaps(&target) {
                hit = true;
                return false;
            }
            true
        });

        if hit {
            player.grounded = false;
            player.velocity = self.knockback;
            log::info!("player hit by a bullet");
            outcome.push(PlayerEvent::BulletHit);
        }
    }
}

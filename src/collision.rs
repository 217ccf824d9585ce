//! Axis-separated collision resolution against a level's platforms.
//!
//! The horizontal pass runs first and reflects the player off walls. The
//! vertical pass then tests the vertical displacement from the current
//! position: rising into a platform clamps against its underside; falling
//! into one either slides the player off a slope or lands them flat, at
//! which point a long fall is charged against their health.

use glam::DVec2;

use crate::events::{PlayerEvent, StepOutcome};
use crate::geometry::Rect;
use crate::health::fall_damage;
use crate::level::LevelRules;
use crate::player::PlayerState;
use crate::PhysicsConfig;

/// How a descending player met a platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Came to rest on top.
    Flat,
    /// Deflected sideways by a slope.
    Slide,
}

/// Resolves `delta` against `platforms`, updating velocity, grounding and
/// health, and returns the displacement that keeps the player out of every
/// platform.
#[expect(
    clippy::too_many_arguments,
    reason = "collision needs the full step context and stays a free function"
)]
pub fn resolve(
    player: &mut PlayerState,
    mut delta: DVec2,
    level: usize,
    platforms: &[Rect],
    rules: &LevelRules,
    config: &PhysicsConfig,
    now: f64,
    outcome: &mut StepOutcome,
) -> DVec2 {
    let mut bumped = false;

    for platform in platforms {
        if player.bounds_at(DVec2::new(delta.x, 0.0)).overlaps(platform) {
            bumped |= bounce_off_wall(player, config);
            delta.x = 0.0;
        }
    }

    player.grounded = false;
    for platform in platforms {
        if !player.bounds_at(DVec2::new(0.0, delta.y)).overlaps(platform) {
            continue;
        }
        if player.velocity.y <= 0.0 {
            delta.y = platform.bottom() - player.position.y;
            player.velocity.y = 0.0;
            bumped = true;
        } else {
            let (rest, landing) = land(player, platform, level, rules, config);
            delta.y = rest;
            log::trace!("{landing:?} landing on {platform:?}");
            apply_fall_impact(player, config, now, outcome);
        }
    }

    if bumped {
        outcome.push(PlayerEvent::Bump);
    }
    delta
}

/// Reflects horizontal velocity off a wall. Returns whether the bump cue
/// should play, which is only while airborne.
fn bounce_off_wall(player: &mut PlayerState, config: &PhysicsConfig) -> bool {
    let bias = if player.facing_right {
        config.wall_bounce_bias
    } else {
        -config.wall_bounce_bias
    };
    player.velocity.x = -player.velocity.x + bias;
    !player.grounded
}

/// Handles a descending contact with `platform` and returns the vertical
/// displacement that places the player's feet on its top edge.
pub fn land(
    player: &mut PlayerState,
    platform: &Rect,
    level: usize,
    rules: &LevelRules,
    config: &PhysicsConfig,
) -> (f64, Landing) {
    let rest = platform.top() - player.size.y - player.position.y;
    if platform.w < config.slope_width_threshold {
        if let Some(direction) = rules.slide_at(level, player.position.x) {
            player.velocity.x = direction.sign() * config.slope_slide_speed;
            player.velocity.y = config.slope_drop_velocity;
            return (rest, Landing::Slide);
        }
    } else {
        player.velocity.x = 0.0;
    }
    player.velocity.y = 0.0;
    player.grounded = true;
    (rest, Landing::Flat)
}

/// Charges an ongoing fall against health once the player touches down.
///
/// Falls lasting at least the threshold splat the player, cancel any jump
/// charge and lock input; only time beyond the threshold deals damage. The
/// fall is forgotten afterwards so one landing is charged once.
pub fn apply_fall_impact(
    player: &mut PlayerState,
    config: &PhysicsConfig,
    now: f64,
    outcome: &mut StepOutcome,
) {
    let Some(start) = player.fall_start else {
        return;
    };
    let fall_secs = now - start;
    if fall_secs < config.fall_damage_threshold_secs {
        return;
    }

    let damage = player.health.apply_damage(fall_damage(fall_secs, config));
    player.fall_start = None;
    player.fall_impact_lock = true;
    player.fall_counter = player.fall_counter.saturating_add(1);
    player.jump.abandon();
    log::info!("fell for {fall_secs:.2}s, lost {damage} health");
    outcome.push(PlayerEvent::Splat { damage });

    if player.health.is_depleted() {
        log::info!("player died from a fall");
        outcome.push(PlayerEvent::Death);
    }
}

//! Velocity integration: fall tracking, gravity and the candidate
//! displacement handed to collision resolution.

use glam::DVec2;

use crate::geometry::Rect;
use crate::level::{LevelGeometry, LevelRules, ZoneKind};
use crate::player::PlayerState;
use crate::PhysicsConfig;

/// Starts timing a fall once the player is airborne and moving down, and
/// forgets it as soon as they are grounded or rising again.
pub fn track_fall(player: &mut PlayerState, now: f64) {
    if player.velocity.y > 0.0 && !player.grounded {
        if player.fall_start.is_none() {
            player.fall_start = Some(now);
        }
    } else {
        player.fall_start = None;
    }
}

/// Applies gravity and returns the displacement the player would like to
/// make this step, before platform collisions.
///
/// Slip zones cancel horizontal motion, bounce zones relaunch a descending
/// player, and the world edges stop horizontal motion.
pub fn integrate<G>(
    player: &mut PlayerState,
    level: usize,
    geometry: &G,
    rules: &LevelRules,
    config: &PhysicsConfig,
) -> DVec2
where
    G: LevelGeometry + ?Sized,
{
    let mut delta = DVec2::new(player.velocity.x, 0.0);
    if touches_any(&player.bounds(), geometry.zones_for(level, ZoneKind::Slip)) {
        delta.x = 0.0;
    }

    let gravity = rules.gravity_at(level, player.position.y, config.gravity);
    player.velocity.y = (player.velocity.y + gravity).min(config.terminal_velocity);
    delta.y = player.velocity.y;

    apply_bounce(player, geometry.zones_for(level, ZoneKind::Bounce), &mut delta, config);
    keep_inside_world(player, &mut delta, config);
    delta
}

fn touches_any(bounds: &Rect, zones: &[Rect]) -> bool {
    zones.iter().any(|zone| zone.overlaps(bounds))
}

fn apply_bounce(player: &mut PlayerState, zones: &[Rect], delta: &mut DVec2, config: &PhysicsConfig) {
    if player.velocity.y <= 0.0 {
        return;
    }
    let falling_into = player.bounds_at(DVec2::new(0.0, delta.y));
    if let Some(zone) = zones.iter().find(|zone| zone.overlaps(&falling_into)) {
        player.velocity.y = config.bounce_velocity;
        delta.y = zone.top() - player.size.y - player.position.y;
        log::debug!("bounced off zone at y={:.1}", zone.top());
    }
}

fn keep_inside_world(player: &PlayerState, delta: &mut DVec2, config: &PhysicsConfig) {
    let next_left = player.position.x + delta.x;
    if next_left < 0.0 || next_left + player.size.x > config.world_width {
        delta.x = 0.0;
    }
}

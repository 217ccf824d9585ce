//! Convenience constructors for levels and players used in tests.

use glam::DVec2;
use kings_trial::{LevelSet, PhysicsConfig, PlayerState, Rect, LEVEL_COUNT, WORLD_HEIGHT, WORLD_WIDTH};

/// Height of the floor slab produced by [`floor`].
pub const FLOOR_THICKNESS: f64 = 40.0;

/// Shorthand for [`Rect::new`].
///
/// # Examples
/// ```
/// use test_utils::physics::rect;
/// assert_eq!(rect(1.0, 2.0, 3.0, 4.0).w, 3.0);
/// ```
#[must_use]
pub const fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, w, h)
}

/// A full-width slab along the bottom of the world.
#[must_use]
pub fn floor() -> Rect {
    Rect::new(0.0, WORLD_HEIGHT - FLOOR_THICKNESS, WORLD_WIDTH, FLOOR_THICKNESS)
}

/// A single level holding `platforms`.
#[must_use]
pub fn single_level(platforms: Vec<Rect>) -> LevelSet {
    LevelSet::with_levels(1).with_platforms(0, platforms)
}

/// A tower of `count` levels, each with a floor.
///
/// # Examples
/// ```
/// use kings_trial::LevelGeometry;
/// use test_utils::physics::tower;
/// let levels = tower(3);
/// assert_eq!(levels.level_count(), 3);
/// assert_eq!(levels.platforms_for(2).len(), 1);
/// ```
#[must_use]
pub fn tower(count: usize) -> LevelSet {
    (0..count).fold(LevelSet::with_levels(count), |levels, level| {
        levels.with_platforms(level, vec![floor()])
    })
}

/// The stock tower size with `platforms` placed on `level` and every other
/// level empty. Useful for exercising level-specific rules.
#[must_use]
pub fn stock_level(level: usize, platforms: Vec<Rect>) -> LevelSet {
    LevelSet::with_levels(LEVEL_COUNT).with_platforms(level, platforms)
}

/// A fresh player whose top-left corner is at `(x, y)`.
#[must_use]
pub fn player_at(x: f64, y: f64) -> PlayerState {
    PlayerState::new(DVec2::new(x, y), &PhysicsConfig::default())
}

/// A player at rest on top of `platform` with their left edge at `x`.
///
/// The player is marked grounded and already landed, as if they had been
/// standing there for a while.
#[must_use]
pub fn standing_on(platform: &Rect, x: f64) -> PlayerState {
    let config = PhysicsConfig::default();
    let mut player = PlayerState::new(
        DVec2::new(x, platform.top() - config.player_size.y),
        &config,
    );
    player.grounded = true;
    player.has_landed = true;
    player
}

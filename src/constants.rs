//! Game physics constants used across the movement core.
//!
//! These are the shipped tuning values. [`crate::PhysicsConfig`] copies them
//! into a runtime struct so hosts can override individual values; the
//! per-level quirks live in [`crate::LevelRules`] instead.

/// Width of the playable world in world units.
pub const WORLD_WIDTH: f64 = 800.0;
/// Height of a single level screen in world units.
pub const WORLD_HEIGHT: f64 = 800.0;
/// Host frame rate the step constants were tuned for.
pub const FRAMES_PER_SECOND: f64 = 60.0;
/// Number of hand-designed levels in the shipped game.
pub const LEVEL_COUNT: usize = 22;

/// Player bounding box width.
pub const PLAYER_WIDTH: f64 = 40.0;
/// Player bounding box height.
pub const PLAYER_HEIGHT: f64 = 40.0;
/// Spawn point used by a new game.
pub const START_X: f64 = 400.0;
/// Spawn height used by a new game (60 units above the floor of level 0).
pub const START_Y: f64 = WORLD_HEIGHT - 60.0;

/// Downward acceleration added to `vy` each step.
pub const GRAVITY: f64 = 0.8;
/// Gravity applied on low-gravity levels.
pub const LOW_GRAVITY: f64 = 0.5;
/// Maximum downward speed.
pub const TERMINAL_VELOCITY: f64 = 15.0;

/// Ground walking speed.
pub const WALK_SPEED: f64 = 3.5;
/// Horizontal launch speed of a directional jump.
pub const JUMP_SPEED: f64 = 7.0;
/// Horizontal launch speed on narrow vertical levels.
pub const NARROW_JUMP_SPEED: f64 = 3.0;

/// Jump force of an uncharged jump.
pub const BASE_JUMP_FORCE: f64 = 5.0;
/// Jump force gained per second of charge.
pub const JUMP_FORCE_PER_SECOND: f64 = 20.0;
/// Charge time beyond which the force no longer grows.
pub const CHARGE_CAP_SECS: f64 = 0.8;
/// Charge time at which the jump fires on its own.
pub const AUTO_RELEASE_SECS: f64 = 1.0;

/// Horizontal bias added when bouncing off a wall.
pub const WALL_BOUNCE_BIAS: f64 = 3.0;
/// Platforms narrower than this are slope segments.
pub const SLOPE_WIDTH_THRESHOLD: f64 = 9.0;
/// Lateral speed imparted by a slope segment.
pub const SLOPE_SLIDE_SPEED: f64 = 8.0;
/// Vertical velocity override applied while sliding down a slope.
///
/// Deliberately far above [`TERMINAL_VELOCITY`]; the cap pulls it back on the
/// next step.
pub const SLOPE_DROP_VELOCITY: f64 = 200.0;
/// Vertical velocity a bounce zone launches the player with.
pub const BOUNCE_VELOCITY: f64 = -17.0;

/// Falls shorter than this (seconds) are harmless.
pub const FALL_DAMAGE_THRESHOLD_SECS: f64 = 0.6;
/// Health lost per second of fall beyond the threshold.
pub const FALL_DAMAGE_PER_SECOND: f64 = 12.0;
/// Full health.
pub const MAX_HEALTH: u16 = 100;

/// Distance moved per step in free-fly mode.
pub const FLY_STEP: f64 = 10.0;

/// Side length of a coin's pickup box.
pub const COIN_SIZE: f64 = 32.0;

/// Level holding the turret hazard.
pub const TURRET_LEVEL: usize = 8;
/// Seconds between turret shots.
pub const TURRET_INTERVAL_SECS: f64 = 2.0;
/// Horizontal bullet speed per step.
pub const BULLET_SPEED: f64 = 5.0;
/// Horizontal knockback applied by a bullet hit.
pub const BULLET_KNOCKBACK_VX: f64 = 10.0;
/// Vertical knockback applied by a bullet hit.
pub const BULLET_KNOCKBACK_VY: f64 = -5.0;

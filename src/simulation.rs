//! The per-step movement pipeline.
//!
//! Each call to [`step`] runs, in order:
//!
//! 1. impact-lock handling, which may consume the input entirely;
//! 2. the jump charge (start, steer, release, auto-release) and walking;
//! 3. fall tracking, gravity and zones;
//! 4. collision resolution, landing cue and position integration;
//! 5. level transition detection.
//!
//! Free-fly mode skips stages 1-4 and moves the player directly.

use glam::DVec2;

use crate::collision;
use crate::events::{PlayerEvent, StepOutcome};
use crate::input::{Horizontal, InputSnapshot};
use crate::kinematics;
use crate::level::{LevelGeometry, LevelRules};
use crate::player::PlayerState;
use crate::transition;
use crate::PhysicsConfig;

/// Static context shared by every step: level data, per-level rules and
/// tuning.
#[derive(Debug)]
pub struct World<'a, G: ?Sized> {
    /// Platforms and zones of every level.
    pub geometry: &'a G,
    /// Per-level movement quirks.
    pub rules: &'a LevelRules,
    /// Tuning values.
    pub config: &'a PhysicsConfig,
}

impl<G: ?Sized> Clone for World<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for World<'_, G> {}

impl<'a, G> World<'a, G>
where
    G: LevelGeometry + ?Sized,
{
    /// Bundles the step context.
    #[must_use]
    pub const fn new(geometry: &'a G, rules: &'a LevelRules, config: &'a PhysicsConfig) -> Self {
        Self {
            geometry,
            rules,
            config,
        }
    }

    /// Number of levels in the world.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.geometry.level_count()
    }
}

/// Advances `player` by one fixed step on `level` at simulation time `now`
/// (seconds, monotonic).
///
/// The returned outcome carries the events in the order they happened and
/// the level change the host must apply before the next step.
pub fn step<G>(
    player: &mut PlayerState,
    input: &InputSnapshot,
    level: usize,
    world: World<'_, G>,
    now: f64,
) -> StepOutcome
where
    G: LevelGeometry + ?Sized,
{
    let mut outcome = StepOutcome::default();

    if input.free_fly {
        fly(player, input, world.config);
    } else {
        handle_input(player, input, level, world, now, &mut outcome);
        simulate(player, level, world, now, &mut outcome);
    }

    outcome.transition = transition::detect(player, level, world.geometry, world.config);
    outcome
}

fn fly(player: &mut PlayerState, input: &InputSnapshot, config: &PhysicsConfig) {
    player.grounded = false;
    player.velocity = DVec2::ZERO;
    player.fall_start = None;
    let mut delta = DVec2::ZERO;
    if input.move_left {
        delta.x -= config.fly_step;
    }
    if input.move_right {
        delta.x += config.fly_step;
    }
    if input.move_up {
        delta.y -= config.fly_step;
    }
    if input.move_down {
        delta.y += config.fly_step;
    }
    player.position += delta;
}

fn handle_input<G>(
    player: &mut PlayerState,
    input: &InputSnapshot,
    level: usize,
    world: World<'_, G>,
    now: f64,
    outcome: &mut StepOutcome,
) where
    G: LevelGeometry + ?Sized,
{
    let intent = input.horizontal();

    if player.fall_impact_lock {
        if input.any_horizontal() || input.start_jump_pressed {
            player.fall_impact_lock = false;
            log::debug!("impact lock cleared");
        }
        if input.start_jump_pressed && player.jump.allowed() {
            // Recovery jump reuses the last launch force and direction.
            let force = player.jump.force();
            let direction = f64::from(player.jump.direction());
            player.jump.disarm();
            launch(player, force, direction, level, world, outcome);
        }
    } else {
        if input.start_jump_pressed {
            player.jump.try_start(now, player.grounded);
        }
        steer(player, intent, world.config);
    }

    if input.release_jump_pressed {
        if let Some(force) = player.jump.release(now, world.config) {
            let direction = f64::from(player.jump.direction());
            launch(player, force, direction, level, world, outcome);
        }
        player.jump.reset();
    }

    if let Some(force) = player.jump.auto_release(now, world.config) {
        let direction = f64::from(player.jump.direction());
        launch(player, force, direction, level, world, outcome);
    }
}

fn steer(player: &mut PlayerState, intent: Horizontal, config: &PhysicsConfig) {
    if player.is_charging() {
        player.velocity.x = 0.0;
        player.jump.steer(intent);
    } else if player.grounded {
        player.velocity.x = f64::from(intent.direction()) * config.walk_speed;
    } else {
        // Airborne input neither steers nor turns the player.
        return;
    }
    if let Some(facing_right) = intent.facing_right() {
        player.facing_right = facing_right;
    }
}

fn launch<G>(
    player: &mut PlayerState,
    force: f64,
    direction: f64,
    level: usize,
    world: World<'_, G>,
    outcome: &mut StepOutcome,
) where
    G: LevelGeometry + ?Sized,
{
    if !player.grounded {
        log::debug!("jump of force {force:.2} dropped while airborne");
        return;
    }
    let speed = world
        .rules
        .jump_speed_at(level, player.position.y, world.config.jump_speed);
    player.velocity = DVec2::new(direction * speed, -force);
    player.grounded = false;
    player.jump_count = player.jump_count.saturating_add(1);
    log::debug!("jump {} launched: {:?}", player.jump_count, player.velocity);
    outcome.push(PlayerEvent::Jump);
}

fn simulate<G>(
    player: &mut PlayerState,
    level: usize,
    world: World<'_, G>,
    now: f64,
    outcome: &mut StepOutcome,
) where
    G: LevelGeometry + ?Sized,
{
    kinematics::track_fall(player, now);
    let wanted = kinematics::integrate(player, level, world.geometry, world.rules, world.config);

    let was_grounded = player.grounded;
    let delta = collision::resolve(
        player,
        wanted,
        level,
        world.geometry.platforms_for(level),
        world.rules,
        world.config,
        now,
        outcome,
    );

    if player.grounded && !was_grounded {
        if !player.has_landed {
            outcome.push(PlayerEvent::Land);
        }
        player.has_landed = true;
    } else if !player.grounded {
        player.has_landed = false;
    }

    player.position += delta;
}

//! Behaviour-driven tests for moving between levels.
//!
//! Uses a recording geometry double to check the core only ever asks about
//! the level it was told is active.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use kings_trial::{
    step, InputSnapshot, LevelGeometry, LevelRules, LevelSet, LevelTransition, PhysicsConfig,
    PlayerState, Rect, Session, World, ZoneKind,
};
use rspec_runner::run_serial;
use test_utils::{player_at, tower};

/// Wraps a [`LevelSet`] and remembers every level it was asked about.
#[derive(Clone, Debug, Default)]
struct RecordingGeometry {
    inner: LevelSet,
    queried: Arc<Mutex<Vec<usize>>>,
}

impl RecordingGeometry {
    fn new(inner: LevelSet) -> Self {
        Self {
            inner,
            queried: Arc::default(),
        }
    }

    fn record(&self, level: usize) {
        self.queried
            .lock()
            .unwrap_or_else(|e| panic!("query log poisoned: {e}"))
            .push(level);
    }

    fn queried(&self) -> Vec<usize> {
        self.queried
            .lock()
            .unwrap_or_else(|e| panic!("query log poisoned: {e}"))
            .clone()
    }
}

impl LevelGeometry for RecordingGeometry {
    fn level_count(&self) -> usize {
        self.inner.level_count()
    }

    fn platforms_for(&self, level: usize) -> &[Rect] {
        self.record(level);
        self.inner.platforms_for(level)
    }

    fn zones_for(&self, level: usize, kind: ZoneKind) -> &[Rect] {
        self.record(level);
        self.inner.zones_for(level, kind)
    }
}

#[derive(Clone, Debug)]
struct TowerEnv {
    geometry: RecordingGeometry,
    rules: LevelRules,
    config: PhysicsConfig,
    player: PlayerState,
    level: usize,
    transition: LevelTransition,
}

impl Default for TowerEnv {
    fn default() -> Self {
        Self {
            geometry: RecordingGeometry::new(tower(3)),
            rules: LevelRules::original(),
            config: PhysicsConfig::default(),
            player: player_at(400.0, 300.0),
            level: 0,
            transition: LevelTransition::None,
        }
    }
}

impl TowerEnv {
    fn rising_through_top(&mut self, level: usize) {
        self.level = level;
        self.geometry = RecordingGeometry::new(tower(3));
        self.player.position.y = 2.0;
        self.player.velocity.y = -12.0;
        self.advance_one_step();
    }

    fn falling_through_bottom(&mut self, level: usize) {
        self.level = level;
        self.geometry = RecordingGeometry::new(LevelSet::with_levels(3));
        self.player.position.y = 795.0;
        self.player.velocity.y = 12.0;
        self.advance_one_step();
    }

    fn advance_one_step(&mut self) {
        let world = World::new(&self.geometry, &self.rules, &self.config);
        let outcome = step(&mut self.player, &InputSnapshot::idle(), self.level, world, 0.0);
        self.transition = outcome.transition;
    }
}

#[test]
fn leaving_through_the_top() {
    run_serial(&rspec::given("a tower of three levels", TowerEnv::default(), |ctx| {
        ctx.when("the player rises off the top of the first level", |ctx| {
            ctx.before_each(|env| env.rising_through_top(0));
            ctx.then("the next level is requested", |env| {
                assert_eq!(env.transition, LevelTransition::Advance);
            });
            ctx.then("the player reappears at the bottom edge", |env| {
                assert_relative_eq!(env.player.position.y, env.config.world_height);
            });
            ctx.then("only the active level was consulted", |env| {
                assert!(env.geometry.queried().iter().all(|level| *level == 0));
            });
        });

        ctx.when("the player rises off the top of the last level", |ctx| {
            ctx.before_each(|env| env.rising_through_top(2));
            ctx.then("no transition happens", |env| {
                assert_eq!(env.transition, LevelTransition::None);
            });
            ctx.then("the player stays above the top edge", |env| {
                assert!(env.player.position.y < 0.0);
            });
        });
    }));
}

#[test]
fn leaving_through_the_bottom() {
    run_serial(&rspec::given("a tower of three empty levels", TowerEnv::default(), |ctx| {
        ctx.when("the player drops out of the middle level", |ctx| {
            ctx.before_each(|env| env.falling_through_bottom(1));
            ctx.then("the previous level is requested", |env| {
                assert_eq!(env.transition, LevelTransition::Retreat);
            });
            ctx.then("the player reappears at the top edge", |env| {
                assert_relative_eq!(env.player.position.y, 0.0);
            });
        });

        ctx.when("the player drops out of the first level", |ctx| {
            ctx.before_each(|env| env.falling_through_bottom(0));
            ctx.then("there is nowhere to go", |env| {
                assert_eq!(env.transition, LevelTransition::None);
                assert!(env.player.position.y > env.config.world_height);
            });
        });
    }));
}

#[test]
fn session_tracks_the_active_level() {
    let config = PhysicsConfig::default();
    let rules = LevelRules::original();
    let levels = LevelSet::with_levels(3);
    let world = World::new(&levels, &rules, &config);
    let mut session = Session::new_game(&config);

    session.player.position.y = 2.0;
    session.player.velocity.y = -12.0;
    session.step(&InputSnapshot::idle(), world, 0.0);
    assert_eq!(session.level, 1);

    session.player.position.y = 795.0;
    session.player.velocity.y = 12.0;
    session.step(&InputSnapshot::idle(), world, 0.1);
    assert_eq!(session.level, 0);

    session.player.position.y = 795.0;
    session.player.velocity.y = 12.0;
    session.step(&InputSnapshot::idle(), world, 0.2);
    assert_eq!(session.level, 0);
}

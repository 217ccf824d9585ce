//! One play-through: the player plus everything that lives beside them.
//!
//! [`Session`] owns the active level index and applies the transitions the
//! movement core asks for. It also runs the pickups and hazards that the
//! core itself knows nothing about and keeps the run timer.

use glam::DVec2;

use crate::events::{LevelTransition, StepOutcome};
use crate::hazards::Turret;
use crate::health::Health;
use crate::input::InputSnapshot;
use crate::level::LevelGeometry;
use crate::numeric::clamp_level_index;
use crate::pickups::{CoinSet, FlagPole};
use crate::player::PlayerState;
use crate::save::SaveData;
use crate::simulation::{step, World};
use crate::{PhysicsConfig, START_X, START_Y};

/// State of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// The player.
    pub player: PlayerState,
    /// Active level index.
    pub level: usize,
    /// Coins and the running total.
    pub coins: CoinSet,
    /// Flag pole on the last level.
    pub flag: FlagPole,
    /// Turret hazard.
    pub turret: Turret,
    started_at: Option<f64>,
    finished_at: Option<f64>,
}

impl Session {
    /// A fresh run at the start position of the first level.
    #[must_use]
    pub fn new_game(config: &PhysicsConfig) -> Self {
        Self {
            player: PlayerState::new(DVec2::new(START_X, START_Y), config),
            level: 0,
            coins: CoinSet::original(),
            flag: FlagPole::default(),
            turret: Turret::default(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Whether the player has died. A dead session ignores further steps.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.player.is_dead()
    }

    /// Whether the flag pole has been reached.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Seconds since the first jump charge, frozen once the flag is reached.
    #[must_use]
    pub fn elapsed(&self, now: f64) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end - start,
            (Some(start), None) => (now - start).max(0.0),
            (None, _) => 0.0,
        }
    }

    /// Runs one frame: the movement core, the turret, the level change, the
    /// flag and the coins, in that order.
    pub fn step<G>(&mut self, input: &InputSnapshot, world: World<'_, G>, now: f64) -> StepOutcome
    where
        G: LevelGeometry + ?Sized,
    {
        if self.is_over() {
            return StepOutcome::default();
        }

        let mut outcome = step(&mut self.player, input, self.level, world, now);
        if self.started_at.is_none() && self.player.is_charging() {
            self.started_at = Some(now);
        }

        self.turret.update(
            self.level,
            &mut self.player,
            world.config.world_width,
            now,
            &mut outcome,
        );
        self.apply_transition(outcome.transition, world.level_count());

        let bounds = self.player.bounds();
        if self.level + 1 == world.level_count() && self.flag.touch(&bounds, &mut outcome) {
            self.finished_at = Some(now);
        }
        self.coins.collect(self.level, &bounds, &mut outcome);
        outcome
    }

    fn apply_transition(&mut self, transition: LevelTransition, level_count: usize) {
        match transition {
            LevelTransition::Advance if self.level + 1 < level_count => self.level += 1,
            LevelTransition::Retreat if self.level > 0 => self.level -= 1,
            LevelTransition::Advance | LevelTransition::Retreat | LevelTransition::None => {}
        }
    }

    /// Snapshot of the run for persisting.
    #[must_use]
    pub fn save(&self, now: f64) -> SaveData {
        SaveData {
            player_x: self.player.position.x,
            player_y: self.player.position.y,
            current_level: i64::try_from(self.level).unwrap_or(i64::MAX),
            elapsed_time: self.elapsed(now),
            current_health: i64::from(self.player.health.current),
            jumps: self.player.jump_count,
            falls: self.player.fall_counter,
            total_coins_collected: self.coins.collected(),
            coins: self.coins.flags(),
        }
    }

    /// Rebuilds a run from a save, clamping health and the level index into
    /// range. A non-finite position falls back to the start position.
    #[must_use]
    pub fn restore(save: &SaveData, config: &PhysicsConfig, level_count: usize, now: f64) -> Self {
        let mut session = Self::new_game(config);

        let position = DVec2::new(save.player_x, save.player_y);
        if position.is_finite() {
            session.player.position = position;
        } else {
            log::warn!("save has a non-finite position; using the start position");
        }

        session.level = clamp_level_index(save.current_level, level_count);
        if i64::try_from(session.level).ok() != Some(save.current_level) {
            log::warn!(
                "clamped saved level {} to {}",
                save.current_level,
                session.level
            );
        }

        session.player.health = Health::clamped(save.current_health, config.max_health);
        session.player.jump_count = save.jumps;
        session.player.fall_counter = save.falls;
        session.coins.restore(&save.coins);
        if session.coins.collected() != save.total_coins_collected {
            log::warn!(
                "saved coin total {} disagrees with {} collected flags",
                save.total_coins_collected,
                session.coins.collected()
            );
        }

        if save.elapsed_time.is_finite() && save.elapsed_time > 0.0 {
            session.started_at = Some(now - save.elapsed_time);
        }
        session
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! Movement and collision core for King's Trial, a charge-jump platformer.
//!
//! The crate advances a single player through a vertical tower of levels
//! one fixed step at a time. Hosts own the clock, input and rendering; they
//! call [`step`] (or [`Session::step`]) once per frame and react to the
//! returned [`StepOutcome`].
pub mod collision;
pub mod config;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod hazards;
pub mod health;
pub mod input;
pub mod jump;
pub mod kinematics;
pub mod level;
pub mod logging;
pub mod numeric;
pub mod pickups;
pub mod player;
pub mod save;
pub mod session;
pub mod simulation;
pub mod transition;
pub use constants::*;

// Re-export commonly used items
pub use config::PhysicsConfig;
pub use events::{LevelTransition, PlayerEvent, StepOutcome};
pub use geometry::Rect;
pub use hazards::Turret;
pub use health::{fall_damage, Health};
pub use input::{Horizontal, InputSnapshot};
pub use jump::{charge_force, JumpCharge, JumpPhase};
pub use level::{LevelDataError, LevelGeometry, LevelPack, LevelRules, LevelSet, ZoneKind};
pub use logging::init as init_logging;
pub use pickups::{Coin, CoinSet, FlagPole};
pub use player::PlayerState;
pub use save::{SaveData, SaveError};
pub use session::Session;
pub use simulation::{step, World};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use kings_trial::prelude::*;
    //!
    //! let config = PhysicsConfig::default();
    //! let levels = LevelSet::with_levels(1)
    //!     .with_platforms(0, vec![Rect::new(0.0, 760.0, 800.0, 40.0)]);
    //! let rules = LevelRules::new();
    //! let world = World::new(&levels, &rules, &config);
    //!
    //! let mut player = PlayerState::new(glam::DVec2::new(400.0, 720.0), &config);
    //! let outcome = step(&mut player, &InputSnapshot::idle(), 0, world, 0.0);
    //! assert!(player.grounded);
    //! assert!(outcome.emitted(PlayerEvent::Land));
    //! ```

    pub use crate::step;
    pub use crate::InputSnapshot;
    pub use crate::LevelGeometry;
    pub use crate::LevelRules;
    pub use crate::LevelSet;
    pub use crate::PhysicsConfig;
    pub use crate::PlayerEvent;
    pub use crate::PlayerState;
    pub use crate::Rect;
    pub use crate::Session;
    pub use crate::StepOutcome;
    pub use crate::World;
}

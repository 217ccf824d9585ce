//! Declarative per-level movement quirks.
//!
//! Some levels change gravity or the horizontal jump speed, and some turn
//! their thin platforms into slides whose direction depends on where the
//! player lands. The simulation asks [`LevelRules`] instead of matching on
//! level numbers itself.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Restricts a rule to part of the screen by the player's `y`.
///
/// Screen coordinates grow downwards, so `Below` means a larger `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalGate {
    /// Applies anywhere on the level.
    #[default]
    Anywhere,
    /// Applies while `y` is strictly greater than the line.
    Below(f64),
    /// Applies while `y` is strictly less than the line.
    Above(f64),
}

impl VerticalGate {
    /// Whether a player at height `y` is inside the gate.
    #[must_use]
    pub fn admits(self, y: f64) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Below(line) => y > line,
            Self::Above(line) => y < line,
        }
    }
}

/// Replacement gravity for part of a level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GravityRule {
    /// Gravity used while the gate admits the player.
    pub gravity: f64,
    /// Where the replacement applies.
    #[serde(default)]
    pub when: VerticalGate,
}

/// Replacement horizontal jump speed for part of a level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedRule {
    /// Horizontal launch speed while the gate admits the player.
    pub speed: f64,
    /// Where the replacement applies.
    #[serde(default)]
    pub when: VerticalGate,
}

/// Direction a slope pushes the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl SlideDirection {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Horizontal band of a level whose thin platforms slide the player.
///
/// Bounds are exclusive; a landing exactly on a bound matches neither
/// neighbouring region and is treated as flat ground.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlopeRegion {
    /// Player `x` must exceed this, when set.
    #[serde(default)]
    pub min_x: Option<f64>,
    /// Player `x` must stay below this, when set.
    #[serde(default)]
    pub max_x: Option<f64>,
    /// Slide direction inside the band.
    pub direction: SlideDirection,
}

impl SlopeRegion {
    /// A region spanning the whole level.
    #[must_use]
    pub const fn everywhere(direction: SlideDirection) -> Self {
        Self {
            min_x: None,
            max_x: None,
            direction,
        }
    }

    /// A region bounded on either side.
    #[must_use]
    pub const fn between(min_x: Option<f64>, max_x: Option<f64>, direction: SlideDirection) -> Self {
        Self {
            min_x,
            max_x,
            direction,
        }
    }

    /// Whether `x` falls inside the band.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.min_x.is_none_or(|min| x > min) && self.max_x.is_none_or(|max| x < max)
    }
}

/// All quirks of one level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelRule {
    /// Gravity override.
    #[serde(default)]
    pub gravity: Option<GravityRule>,
    /// Horizontal jump speed override.
    #[serde(default)]
    pub jump_speed: Option<SpeedRule>,
    /// Slide bands, checked in order.
    #[serde(default)]
    pub slopes: Vec<SlopeRegion>,
}

/// Table of level quirks keyed by level index.
///
/// Levels without an entry use the defaults from [`crate::PhysicsConfig`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelRules {
    levels: HashMap<usize, LevelRule>,
}

impl LevelRules {
    /// An empty table: every level behaves the same.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `level`.
    #[must_use]
    pub fn with_rule(mut self, level: usize, rule: LevelRule) -> Self {
        self.levels.insert(level, rule);
        self
    }

    /// Rule registered for `level`, if any.
    #[must_use]
    pub fn rule(&self, level: usize) -> Option<&LevelRule> {
        self.levels.get(&level)
    }

    /// The quirks of the shipped 22-level tower.
    ///
    /// Levels 17 and 18 are narrow shafts with low gravity and slow
    /// horizontal jumps; level 19 switches both at `y = 530`. Levels 11, 14
    /// and 16 carry slopes.
    #[must_use]
    pub fn original() -> Self {
        use SlideDirection::{Left, Right};

        let low = |when| GravityRule {
            gravity: crate::LOW_GRAVITY,
            when,
        };
        let narrow = |when| SpeedRule {
            speed: crate::NARROW_JUMP_SPEED,
            when,
        };
        let shaft = LevelRule {
            gravity: Some(low(VerticalGate::Anywhere)),
            jump_speed: Some(narrow(VerticalGate::Anywhere)),
            slopes: Vec::new(),
        };

        Self::new()
            .with_rule(
                11,
                LevelRule {
                    slopes: vec![
                        SlopeRegion::between(None, Some(100.0), Right),
                        SlopeRegion::between(Some(100.0), Some(388.0), Left),
                        SlopeRegion::between(Some(388.0), None, Right),
                    ],
                    ..LevelRule::default()
                },
            )
            .with_rule(
                14,
                LevelRule {
                    slopes: vec![SlopeRegion::everywhere(Left)],
                    ..LevelRule::default()
                },
            )
            .with_rule(
                16,
                LevelRule {
                    slopes: vec![
                        SlopeRegion::between(Some(561.0), None, Left),
                        SlopeRegion::between(None, Some(561.0), Right),
                    ],
                    ..LevelRule::default()
                },
            )
            .with_rule(17, shaft.clone())
            .with_rule(18, shaft)
            .with_rule(
                19,
                LevelRule {
                    gravity: Some(low(VerticalGate::Below(530.0))),
                    jump_speed: Some(narrow(VerticalGate::Above(530.0))),
                    slopes: Vec::new(),
                },
            )
    }

    /// Gravity acting on a player at height `y` on `level`.
    #[must_use]
    pub fn gravity_at(&self, level: usize, y: f64, default: f64) -> f64 {
        self.rule(level)
            .and_then(|rule| rule.gravity)
            .filter(|rule| rule.when.admits(y))
            .map_or(default, |rule| rule.gravity)
    }

    /// Horizontal launch speed for a jump from height `y` on `level`.
    #[must_use]
    pub fn jump_speed_at(&self, level: usize, y: f64, default: f64) -> f64 {
        self.rule(level)
            .and_then(|rule| rule.jump_speed)
            .filter(|rule| rule.when.admits(y))
            .map_or(default, |rule| rule.speed)
    }

    /// Slide direction for a thin platform landed on at `x`, if the level
    /// treats it as a slope.
    #[must_use]
    pub fn slide_at(&self, level: usize, x: f64) -> Option<SlideDirection> {
        self.rule(level)?
            .slopes
            .iter()
            .find(|region| region.contains(x))
            .map(|region| region.direction)
    }
}

//! Static level geometry and per-level movement rules.
//!
//! Geometry is precomputed outside the core (platform rectangles extracted
//! from bitmap masks) and handed in read-only. [`LevelGeometry`] is the only
//! query surface the simulation uses; [`LevelSet`] is the in-memory
//! implementation hosts load from a JSON level pack.
//!
//! Unknown levels and missing zone sets resolve to empty slices so the
//! player simply free-falls instead of the step failing.

mod rules;

pub use rules::{
    GravityRule, LevelRule, LevelRules, SlideDirection, SlopeRegion, SpeedRule, VerticalGate,
};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Rect;

/// Special rectangle sets a level may carry besides its platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Snow: overlapping it removes horizontal control.
    Slip,
    /// Trampoline: landing on it launches the player upwards.
    Bounce,
}

/// Read-only level geometry consulted by the simulation each step.
pub trait LevelGeometry {
    /// Number of levels; valid indices are `0..level_count()`.
    fn level_count(&self) -> usize;

    /// Solid platforms of `level`, in authoring order.
    fn platforms_for(&self, level: usize) -> &[Rect];

    /// Zones of `kind` on `level`.
    fn zones_for(&self, level: usize, kind: ZoneKind) -> &[Rect];

    /// Whether a level above `level` exists.
    fn has_next(&self, level: usize) -> bool {
        level + 1 < self.level_count()
    }

    /// Whether a level below `level` exists.
    fn has_previous(&self, level: usize) -> bool {
        level > 0 && level < self.level_count()
    }
}

/// Errors raised while building a [`LevelSet`] from external data.
#[derive(Debug, Error)]
pub enum LevelDataError {
    /// The level pack was not valid JSON for the expected layout.
    #[error("malformed level pack: {0}")]
    Parse(#[from] serde_json::Error),
    /// A zone set references a level the pack does not define.
    #[error("{kind:?} zones reference level {level}, but the pack has {count} levels")]
    UnknownLevel {
        /// Zone kind carrying the bad key.
        kind: ZoneKind,
        /// Offending level index.
        level: usize,
        /// Number of levels in the pack.
        count: usize,
    },
    /// A rectangle has a non-positive or non-finite extent.
    #[error("level {level} contains an invalid rectangle {rect:?}")]
    InvalidRect {
        /// Level holding the rectangle.
        level: usize,
        /// The rejected rectangle.
        rect: Rect,
    },
}

/// Serialised form of a level pack.
///
/// ```json
/// { "platforms": [[{"x":0,"y":760,"w":800,"h":40}]],
///   "zones": { "slip": { "0": [] } } }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LevelPack {
    /// Platforms of each level, indexed by level.
    pub platforms: Vec<Vec<Rect>>,
    /// Zones keyed by kind, then by level index.
    #[serde(default)]
    pub zones: HashMap<ZoneKind, HashMap<usize, Vec<Rect>>>,
}

/// In-memory level geometry.
#[derive(Clone, Debug, Default)]
pub struct LevelSet {
    platforms: Vec<Vec<Rect>>,
    zones: HashMap<(usize, ZoneKind), Vec<Rect>>,
}

impl LevelSet {
    /// Creates a set with `count` empty levels.
    #[must_use]
    pub fn with_levels(count: usize) -> Self {
        Self {
            platforms: vec![Vec::new(); count],
            zones: HashMap::new(),
        }
    }

    /// Replaces the platforms of `level`, growing the set if needed.
    pub fn set_platforms(&mut self, level: usize, platforms: Vec<Rect>) {
        if self.platforms.len() <= level {
            self.platforms.resize_with(level + 1, Vec::new);
        }
        if let Some(slot) = self.platforms.get_mut(level) {
            *slot = platforms;
        }
    }

    /// Replaces the zones of `kind` on `level`.
    pub fn set_zones(&mut self, level: usize, kind: ZoneKind, zones: Vec<Rect>) {
        self.zones.insert((level, kind), zones);
    }

    /// Builder-style variant of [`Self::set_platforms`].
    #[must_use]
    pub fn with_platforms(mut self, level: usize, platforms: Vec<Rect>) -> Self {
        self.set_platforms(level, platforms);
        self
    }

    /// Builder-style variant of [`Self::set_zones`].
    #[must_use]
    pub fn with_zones(mut self, level: usize, kind: ZoneKind, zones: Vec<Rect>) -> Self {
        self.set_zones(level, kind, zones);
        self
    }

    /// Validates and converts a decoded [`LevelPack`].
    ///
    /// # Errors
    /// Returns [`LevelDataError::InvalidRect`] for degenerate rectangles and
    /// [`LevelDataError::UnknownLevel`] for zones keyed past the last level.
    pub fn from_pack(pack: LevelPack) -> Result<Self, LevelDataError> {
        let count = pack.platforms.len();
        for (level, rects) in pack.platforms.iter().enumerate() {
            check_rects(level, rects)?;
        }
        let mut zones = HashMap::new();
        for (kind, by_level) in pack.zones {
            for (level, rects) in by_level {
                if level >= count {
                    return Err(LevelDataError::UnknownLevel { kind, level, count });
                }
                check_rects(level, &rects)?;
                zones.insert((level, kind), rects);
            }
        }
        log::debug!("loaded level pack with {count} levels and {} zone sets", zones.len());
        Ok(Self {
            platforms: pack.platforms,
            zones,
        })
    }

    /// Parses a JSON level pack.
    ///
    /// # Errors
    /// Returns [`LevelDataError::Parse`] for malformed JSON and the
    /// validation errors of [`Self::from_pack`].
    pub fn from_json(json: &str) -> Result<Self, LevelDataError> {
        let pack: LevelPack = serde_json::from_str(json)?;
        Self::from_pack(pack)
    }
}

fn check_rects(level: usize, rects: &[Rect]) -> Result<(), LevelDataError> {
    rects
        .iter()
        .find(|rect| !rect.is_valid())
        .map_or(Ok(()), |rect| Err(LevelDataError::InvalidRect { level, rect: *rect }))
}

impl LevelGeometry for LevelSet {
    fn level_count(&self) -> usize {
        self.platforms.len()
    }

    fn platforms_for(&self, level: usize) -> &[Rect] {
        self.platforms.get(level).map(Vec::as_slice).unwrap_or_default()
    }

    fn zones_for(&self, level: usize, kind: ZoneKind) -> &[Rect] {
        self.zones
            .get(&(level, kind))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

//! Collectable coins and the finishing flag pole.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::events::{PlayerEvent, StepOutcome};
use crate::geometry::Rect;
use crate::COIN_SIZE;

/// A coin waiting on one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left corner of the pickup box.
    pub position: DVec2,
    /// Level the coin lives on.
    pub level: usize,
    /// Whether it has been picked up.
    pub collected: bool,
}

impl Coin {
    /// An uncollected coin.
    #[must_use]
    pub const fn new(x: f64, y: f64, level: usize) -> Self {
        Self {
            position: DVec2::new(x, y),
            level,
            collected: false,
        }
    }

    /// Pickup box.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, DVec2::splat(COIN_SIZE))
    }
}

/// Every coin in the game and the running total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinSet {
    coins: Vec<Coin>,
    collected: usize,
}

impl CoinSet {
    /// A set holding `coins`, none collected.
    #[must_use]
    pub fn new(coins: Vec<Coin>) -> Self {
        let mut set = Self { coins, collected: 0 };
        set.clear();
        set
    }

    /// The eight coins of the stock tower.
    #[must_use]
    pub fn original() -> Self {
        Self::new(vec![
            Coin::new(506.0, 175.0, 0),
            Coin::new(753.0, 60.0, 3),
            Coin::new(560.0, 338.0, 5),
            Coin::new(215.0, 649.0, 8),
            Coin::new(309.0, 558.0, 12),
            Coin::new(755.0, 474.0, 14),
            Coin::new(0.0, 355.0, 18),
            Coin::new(592.0, 521.0, 20),
        ])
    }

    /// All coins in table order.
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Number of coins picked up.
    #[must_use]
    pub const fn collected(&self) -> usize {
        self.collected
    }

    /// Number of coins in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Whether every coin has been picked up.
    #[must_use]
    pub fn all_collected(&self) -> bool {
        !self.coins.is_empty() && self.collected == self.coins.len()
    }

    /// Picks up every uncollected coin on `level` that overlaps `player`.
    /// Returns how many were collected.
    pub fn collect(&mut self, level: usize, player: &Rect, outcome: &mut StepOutcome) -> usize {
        let mut picked = 0;
        for (index, coin) in self.coins.iter_mut().enumerate() {
            if coin.collected || coin.level != level || !coin.bounds().overlaps(player) {
                continue;
            }
            coin.collected = true;
            picked += 1;
            log::info!("collected coin {index} on level {level}");
            outcome.push(PlayerEvent::CoinCollected { coin: index });
        }
        self.collected += picked;
        if picked > 0 && self.all_collected() {
            log::info!("all {} coins collected", self.coins.len());
        }
        picked
    }

    /// Collected flags in table order.
    #[must_use]
    pub fn flags(&self) -> Vec<bool> {
        self.coins.iter().map(|coin| coin.collected).collect()
    }

    /// Restores collected flags; missing entries count as uncollected and
    /// extra entries are ignored.
    pub fn restore(&mut self, flags: &[bool]) {
        for (index, coin) in self.coins.iter_mut().enumerate() {
            coin.collected = flags.get(index).copied().unwrap_or(false);
        }
        self.collected = self.coins.iter().filter(|coin| coin.collected).count();
    }

    /// Marks every coin uncollected.
    pub fn clear(&mut self) {
        self.coins.iter_mut().for_each(|coin| coin.collected = false);
        self.collected = 0;
    }
}

/// Where the flag pole stands and whether it has been reached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlagPole {
    /// Touch box of the pole.
    pub pole: Rect,
    /// Whether the player has touched it.
    pub reached: bool,
}

impl Default for FlagPole {
    fn default() -> Self {
        Self::new(Rect::new(769.0, 146.0, 10.0, 100.0))
    }
}

impl FlagPole {
    /// An untouched pole occupying `pole`.
    #[must_use]
    pub const fn new(pole: Rect) -> Self {
        Self {
            pole,
            reached: false,
        }
    }

    /// Marks the pole reached the first time `player` overlaps it. Returns
    /// whether that happened this call.
    pub fn touch(&mut self, player: &Rect, outcome: &mut StepOutcome) -> bool {
        if self.reached || !self.pole.overlaps(player) {
            return false;
        }
        self.reached = true;
        log::info!("flag reached");
        outcome.push(PlayerEvent::FlagReached);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn coins_only_collect_on_their_level() {
        let mut coins = CoinSet::original();
        let mut outcome = StepOutcome::default();
        let over_first = Rect::new(500.0, 170.0, 40.0, 40.0);
        assert_eq!(coins.collect(1, &over_first, &mut outcome), 0);
        assert_eq!(coins.collect(0, &over_first, &mut outcome), 1);
        assert_eq!(coins.collect(0, &over_first, &mut outcome), 0);
        assert_eq!(outcome.events, vec![PlayerEvent::CoinCollected { coin: 0 }]);
        assert_eq!(coins.collected(), 1);
        assert!(!coins.all_collected());
    }

    #[rstest]
    fn collecting_everything_is_reported() {
        let mut coins = CoinSet::new(vec![Coin::new(0.0, 0.0, 2)]);
        let mut outcome = StepOutcome::default();
        coins.collect(2, &Rect::new(10.0, 10.0, 40.0, 40.0), &mut outcome);
        assert!(coins.all_collected());
    }

    #[rstest]
    #[case::short(vec![true], 1)]
    #[case::exact(vec![true, false, true, false, false, false, false, true], 3)]
    #[case::long(vec![false; 12], 0)]
    fn restore_tolerates_length_mismatch(#[case] flags: Vec<bool>, #[case] expected: usize) {
        let mut coins = CoinSet::original();
        coins.restore(&flags);
        assert_eq!(coins.collected(), expected);
        assert_eq!(coins.flags().len(), 8);
    }

    #[rstest]
    fn flag_fires_once() {
        let mut flag = FlagPole::default();
        let mut outcome = StepOutcome::default();
        let player = Rect::new(740.0, 200.0, 40.0, 40.0);
        assert!(flag.touch(&player, &mut outcome));
        assert!(!flag.touch(&player, &mut outcome));
        assert_eq!(outcome.count(PlayerEvent::FlagReached), 1);
    }
}

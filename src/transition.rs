//! Level transitions across the vertical edges of the world.

use crate::events::LevelTransition;
use crate::level::LevelGeometry;
use crate::player::PlayerState;
use crate::PhysicsConfig;

/// Moves the player to the opposite edge when they leave through the top or
/// bottom of `level` and a neighbouring level exists in that direction.
///
/// Leaving through the top of the last level, or the bottom of the first,
/// is not a transition.
pub fn detect<G>(
    player: &mut PlayerState,
    level: usize,
    geometry: &G,
    config: &PhysicsConfig,
) -> LevelTransition
where
    G: LevelGeometry + ?Sized,
{
    if player.position.y < 0.0 && geometry.has_next(level) {
        player.position.y = config.world_height;
        log::info!("advancing from level {level}");
        LevelTransition::Advance
    } else if player.position.y > config.world_height && geometry.has_previous(level) {
        player.position.y = 0.0;
        log::info!("retreating from level {level}");
        LevelTransition::Retreat
    } else {
        LevelTransition::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelSet;
    use approx::assert_relative_eq;
    use glam::DVec2;
    use rstest::rstest;

    #[rstest]
    #[case::advance(0, -1.0, LevelTransition::Advance, 800.0)]
    #[case::top_of_last(2, -1.0, LevelTransition::None, -1.0)]
    #[case::retreat(1, 801.0, LevelTransition::Retreat, 0.0)]
    #[case::bottom_of_first(0, 801.0, LevelTransition::None, 801.0)]
    #[case::inside(1, 400.0, LevelTransition::None, 400.0)]
    fn edges_move_between_levels(
        #[case] level: usize,
        #[case] y: f64,
        #[case] expected: LevelTransition,
        #[case] new_y: f64,
    ) {
        let config = PhysicsConfig::default();
        let levels = LevelSet::with_levels(3);
        let mut player = PlayerState::new(DVec2::new(100.0, y), &config);
        assert_eq!(detect(&mut player, level, &levels, &config), expected);
        assert_relative_eq!(player.position.y, new_y);
    }
}

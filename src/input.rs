//! Per-step input snapshot and the intents derived from it.

use serde::{Deserialize, Serialize};

/// Input gathered by the host for one simulation step.
///
/// `move_*` are key levels (held this frame); the two jump fields are edges
/// (the key went down / up since the previous step).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Left movement key held.
    pub move_left: bool,
    /// Right movement key held.
    pub move_right: bool,
    /// Up key held; only used while free-flying.
    pub move_up: bool,
    /// Down key held; only used while free-flying.
    pub move_down: bool,
    /// Jump key went down this step.
    pub start_jump_pressed: bool,
    /// Jump key went up this step.
    pub release_jump_pressed: bool,
    /// Developer free-fly override.
    pub free_fly: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            move_left: false,
            move_right: false,
            move_up: false,
            move_down: false,
            start_jump_pressed: false,
            release_jump_pressed: false,
            free_fly: false,
        }
    }

    /// Horizontal intent; left wins when both keys are held.
    #[must_use]
    pub const fn horizontal(&self) -> Horizontal {
        if self.move_left {
            Horizontal::Left
        } else if self.move_right {
            Horizontal::Right
        } else {
            Horizontal::Neutral
        }
    }

    /// Whether either horizontal key is held.
    #[must_use]
    pub const fn any_horizontal(&self) -> bool {
        self.move_left || self.move_right
    }

    /// Copy with the left key held.
    #[must_use]
    pub const fn left(mut self) -> Self {
        self.move_left = true;
        self
    }

    /// Copy with the right key held.
    #[must_use]
    pub const fn right(mut self) -> Self {
        self.move_right = true;
        self
    }

    /// Copy with a jump key-down edge.
    #[must_use]
    pub const fn press_jump(mut self) -> Self {
        self.start_jump_pressed = true;
        self
    }

    /// Copy with the up key held.
    #[must_use]
    pub const fn up(mut self) -> Self {
        self.move_up = true;
        self
    }

    /// Copy with the down key held.
    #[must_use]
    pub const fn down(mut self) -> Self {
        self.move_down = true;
        self
    }

    /// Copy with a jump key-up edge.
    #[must_use]
    pub const fn release_jump(mut self) -> Self {
        self.release_jump_pressed = true;
        self
    }

    /// Copy with free-fly enabled.
    #[must_use]
    pub const fn flying(mut self) -> Self {
        self.free_fly = true;
        self
    }
}

/// Horizontal movement intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Horizontal {
    /// Towards smaller `x`.
    Left,
    /// No horizontal key held.
    #[default]
    Neutral,
    /// Towards larger `x`.
    Right,
}

impl Horizontal {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Neutral => 0,
            Self::Right => 1,
        }
    }

    /// Facing implied by the intent, `None` when neutral.
    #[must_use]
    pub const fn facing_right(self) -> Option<bool> {
        match self {
            Self::Left => Some(false),
            Self::Neutral => None,
            Self::Right => Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InputSnapshot::idle(), Horizontal::Neutral)]
    #[case(InputSnapshot::idle().left(), Horizontal::Left)]
    #[case(InputSnapshot::idle().right(), Horizontal::Right)]
    #[case(InputSnapshot::idle().left().right(), Horizontal::Left)]
    fn left_takes_priority(#[case] input: InputSnapshot, #[case] expected: Horizontal) {
        assert_eq!(input.horizontal(), expected);
    }

    #[test]
    fn neutral_keeps_facing() {
        assert_eq!(Horizontal::Neutral.facing_right(), None);
        assert_eq!(Horizontal::Right.direction(), 1);
    }
}

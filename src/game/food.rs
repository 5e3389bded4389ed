use super::arena::Arena;
use super::snake::Snake;
use super::GameError;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The single live piece of food, plus the meal counter that paces
/// level-ups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Position,
    /// Consecutive meals eaten since the last level-up, 0 to
    /// `MEALS_PER_LEVEL - 1`
    pub(super) eaten: u8,
}

/// The effects of a consumed meal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Meal {
    pub(super) points: i32,
    pub(super) level_up: bool,
}

impl Food {
    pub(super) fn new() -> Food {
        Food {
            pos: Position::ORIGIN,
            eaten: 0,
        }
    }

    pub(super) fn position(&self) -> Position {
        self.pos
    }

    /// Per-tick hook: the score delta for a tick on which the food went
    /// uneaten.  The meal award in [`Food::consume`] carries a +1 to offset
    /// the penalty charged on the tick the food is eaten.
    pub(super) fn on_tick(&self) -> i32 {
        -consts::IDLE_PENALTY
    }

    /// Record a consumed meal, returning the points awarded at `level` and
    /// whether the meal counter rolled over into a level-up.
    pub(super) fn consume(&mut self, level: u8) -> Meal {
        let points = i32::from(level) * consts::POINTS_PER_LEVEL + 1;
        let level_up = self.eaten == consts::MEALS_PER_LEVEL - 1;
        if level_up {
            self.eaten = 0;
        } else {
            self.eaten += 1;
        }
        Meal { points, level_up }
    }

    /// Relocate the food to a free inner cell by rejection sampling.
    /// Sampling only terminates if a free cell exists, so an arena packed
    /// solid with snake and obstacles is reported as an error instead of
    /// looping forever.
    pub(super) fn place<R: Rng>(
        &mut self,
        rng: &mut R,
        arena: &Arena,
        snake: &Snake,
    ) -> Result<(), GameError> {
        if !arena
            .bounds()
            .inner_positions()
            .any(|pos| Food::is_free(pos, arena, snake))
        {
            return Err(GameError::ArenaFull);
        }
        loop {
            let pos = arena.sample_inner(rng);
            if Food::is_free(pos, arena, snake) {
                self.pos = pos;
                return Ok(());
            }
        }
    }

    /// Zero the meal counter; called when a round ends
    pub(super) fn reset(&mut self) {
        self.eaten = 0;
    }

    fn is_free(pos: Position, arena: &Arena, snake: &Snake) -> bool {
        !snake.occupies(pos) && !arena.obstacles().contains(&pos)
    }
}

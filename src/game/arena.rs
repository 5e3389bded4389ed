use super::snake::Snake;
use crate::config::BorderMode;
use crate::consts;
use crate::util::Bounds;
use rand::{
    distr::{Bernoulli, Distribution},
    Rng,
};
use ratatui::layout::Position;
use std::collections::HashSet;

/// The playing field: fixed rectangular bounds ringed by border cells,
/// optionally littered with obstacles.  Built once per round and immutable
/// while the round runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Arena {
    bounds: Bounds,
    border: BorderMode,
    pub(super) obstacles: HashSet<Position>,
}

impl Arena {
    pub(super) fn new(bounds: Bounds, border: BorderMode) -> Arena {
        Arena {
            bounds,
            border,
            obstacles: HashSet::new(),
        }
    }

    pub(super) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(super) fn border(&self) -> BorderMode {
        self.border
    }

    pub(super) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    /// Whether `pos` sits on the border ring
    pub(super) fn on_border(&self, pos: Position) -> bool {
        self.bounds.on_border(pos)
    }

    /// Positions of the border ring cells, for drawing.  Cells are two
    /// columns wide, so the top and bottom runs advance by two.
    pub(super) fn border_cells(&self) -> Vec<Position> {
        let Bounds {
            left,
            right,
            top,
            bottom,
        } = self.bounds;
        let mut cells = Vec::new();
        for x in (left..=right).step_by(2) {
            cells.push(Position::new(x, top));
            cells.push(Position::new(x, bottom));
        }
        for y in top + 1..bottom {
            cells.push(Position::new(left, y));
            cells.push(Position::new(right, y));
        }
        cells
    }

    /// Where a head that ran into a warp tile re-enters: the opposite
    /// border, one cell inward.
    pub(super) fn warp_target(&self, pos: Position) -> Position {
        let Bounds {
            left,
            right,
            top,
            bottom,
        } = self.bounds;
        let mut pos = pos;
        if pos.x == left {
            pos.x = right - 2;
        }
        if pos.x == right {
            pos.x = left + 2;
        }
        if pos.y == top {
            pos.y = bottom - 1;
        }
        if pos.y == bottom {
            pos.y = top + 1;
        }
        pos
    }

    /// Scatter obstacles over the inner cells, then clear the snake's
    /// starting segments and a corridor ahead of its head so the first few
    /// moves are survivable.
    pub(super) fn scatter_obstacles<R: Rng>(&mut self, rng: R, snake: &Snake) {
        let dist = Bernoulli::new(consts::OBSTACLE_PROBABILITY)
            .expect("OBSTACLE_PROBABILITY should be between 0 and 1");
        self.obstacles = self
            .bounds
            .inner_positions()
            .zip(dist.sample_iter(rng))
            .filter_map(|(pos, hit)| hit.then_some(pos))
            .collect();
        for pos in snake.segments() {
            self.obstacles.remove(&pos);
        }
        let bounds = self.bounds;
        let ahead = snake.direction();
        for pos in std::iter::successors(Some(snake.head()), |&p| {
            ahead.step(p).filter(|&q| !bounds.on_border(q))
        })
        .take(consts::FORWARDS_CLEARANCE)
        {
            self.obstacles.remove(&pos);
        }
    }

    /// Uniform sample over the inner cells
    pub(super) fn sample_inner<R: Rng>(&self, rng: &mut R) -> Position {
        let Bounds {
            left,
            right,
            top,
            bottom,
        } = self.bounds;
        let x = rng.random_range((left + 2) / 2..right / 2) * 2;
        let y = rng.random_range(top + 1..bottom);
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn arena(border: BorderMode) -> Arena {
        Arena::new(consts::ARENA, border)
    }

    #[test]
    fn border_ring_layout() {
        let arena = arena(BorderMode::Warp);
        let cells = arena.border_cells();
        // 37 cells across the top, 37 across the bottom, 15 down each side
        assert_eq!(cells.len(), 37 * 2 + 15 * 2);
        for &pos in &cells {
            assert!(arena.on_border(pos), "border cell {pos:?} not on border");
        }
        assert!(cells.contains(&Position::new(4, 4)));
        assert!(cells.contains(&Position::new(76, 20)));
        assert!(cells.contains(&Position::new(4, 12)));
        assert!(!cells.contains(&Position::new(6, 6)));
    }

    #[rstest]
    #[case(Position::new(4, 10), Position::new(74, 10))]
    #[case(Position::new(76, 10), Position::new(6, 10))]
    #[case(Position::new(40, 4), Position::new(40, 19))]
    #[case(Position::new(40, 20), Position::new(40, 5))]
    fn test_warp_target(#[case] hit: Position, #[case] reentry: Position) {
        assert_eq!(arena(BorderMode::Warp).warp_target(hit), reentry);
    }

    #[test]
    fn obstacles_avoid_snake_and_corridor() {
        let mut arena = arena(BorderMode::Warp);
        let snake = Snake::new(consts::ARENA);
        arena.scatter_obstacles(ChaCha12Rng::seed_from_u64(RNG_SEED), &snake);
        for pos in snake.segments() {
            assert!(
                !arena.obstacles().contains(&pos),
                "obstacle on snake at {pos:?}"
            );
        }
        // Forward clearance: seven cells east of the head at (14, 6)
        for x in [16, 18, 20, 22, 24, 26] {
            assert!(
                !arena.obstacles().contains(&Position::new(x, 6)),
                "obstacle in start corridor at x={x}"
            );
        }
        for &pos in arena.obstacles() {
            assert!(!arena.on_border(pos), "obstacle on border at {pos:?}");
        }
    }

    #[test]
    fn samples_stay_inner() {
        let arena = arena(BorderMode::Warp);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let pos = arena.sample_inner(&mut rng);
            assert!(!arena.on_border(pos), "sample {pos:?} on border");
            assert!(pos.x % 2 == 0, "sample {pos:?} has an odd x");
            assert!((6..=74).contains(&pos.x), "sample {pos:?} out of range");
            assert!((5..=19).contains(&pos.y), "sample {pos:?} out of range");
        }
    }
}

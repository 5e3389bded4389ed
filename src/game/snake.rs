use super::direction::Direction;
use crate::consts;
use crate::util::Bounds;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are absolute display coordinates, the same space the arena
/// bounds live in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// Body cells in queue order: the oldest segment at the front, the head
    /// at the back.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,
}

impl Snake {
    /// Create the starting snake for `bounds`: segments laid out left to
    /// right just inside the top-left corner, moving east.
    pub(super) fn new(bounds: Bounds) -> Snake {
        let y = bounds.top + 2;
        let body = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| Position::new(bounds.left + 2 + i * 2, y))
            .collect();
        Snake {
            body,
            direction: Direction::East,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self.body.back().expect("snake body should never be empty")
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Positions of all segments, tail first
    pub(super) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Apply a requested direction change.  A change along the current axis
    /// would reverse the snake into its own neck, so it is ignored;
    /// perpendicular changes are applied.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction.axis() != self.direction.axis() {
            self.direction = direction;
        }
    }

    /// The position the head would advance to on the next tick
    pub(super) fn step_head(&self) -> Option<Position> {
        self.direction.step(self.head())
    }

    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    pub(super) fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_front()
    }

    /// Whether `pos` lies on any segment other than the head
    pub(super) fn hits_body(&self, pos: Position) -> bool {
        self.body.iter().rev().skip(1).any(|&p| p == pos)
    }

    /// Whether `pos` lies on any segment, head included
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        left: 4,
        right: 76,
        top: 4,
        bottom: 20,
    };

    #[test]
    fn new_snake() {
        let snake = Snake::new(BOUNDS);
        assert_eq!(
            snake.body,
            VecDeque::from([
                Position::new(6, 6),
                Position::new(8, 6),
                Position::new(10, 6),
                Position::new(12, 6),
                Position::new(14, 6),
            ])
        );
        assert_eq!(snake.head(), Position::new(14, 6));
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn turn_perpendicular() {
        let mut snake = Snake::new(BOUNDS);
        snake.turn(Direction::North);
        assert_eq!(snake.direction(), Direction::North);
        assert_eq!(snake.step_head(), Some(Position::new(14, 5)));
    }

    #[test]
    fn turn_reverse_ignored() {
        let mut snake = Snake::new(BOUNDS);
        snake.turn(Direction::West);
        assert_eq!(snake.direction(), Direction::East);
        assert_eq!(snake.step_head(), Some(Position::new(16, 6)));
    }

    #[test]
    fn turn_same_direction_ignored() {
        let mut snake = Snake::new(BOUNDS);
        snake.turn(Direction::East);
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn slide_keeps_length() {
        let mut snake = Snake::new(BOUNDS);
        let new_head = snake.step_head().expect("head should advance");
        let tail = snake.pop_tail();
        snake.push_head(new_head);
        assert_eq!(tail, Some(Position::new(6, 6)));
        assert_eq!(snake.body.len(), 5);
        assert_eq!(snake.head(), Position::new(16, 6));
    }

    #[test]
    fn hits_body_excludes_head() {
        let snake = Snake::new(BOUNDS);
        assert!(snake.hits_body(Position::new(6, 6)));
        assert!(snake.hits_body(Position::new(12, 6)));
        assert!(!snake.hits_body(Position::new(14, 6)));
        assert!(snake.occupies(Position::new(14, 6)));
        assert!(!snake.occupies(Position::new(16, 6)));
    }
}

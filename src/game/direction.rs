use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub(super) fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// The position one step from `pos` in this direction.  Cells are two
    /// columns wide, so horizontal steps move by two.  Returns `None` if the
    /// step would leave the numeric range of the screen; the border ring
    /// normally stops the snake long before that.
    pub(super) fn step(self, pos: Position) -> Option<Position> {
        let Position { x, y } = pos;
        match self {
            Direction::North => y.checked_sub(1).map(|y| Position::new(x, y)),
            Direction::South => y.checked_add(1).map(|y| Position::new(x, y)),
            Direction::East => x.checked_add(2).map(|x| Position::new(x, y)),
            Direction::West => x.checked_sub(2).map(|x| Position::new(x, y)),
        }
    }
}

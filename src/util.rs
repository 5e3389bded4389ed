use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Position, Rect, Size};

/// Absolute arena bounds, in display coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) left: u16,
    pub(crate) right: u16,
    pub(crate) top: u16,
    pub(crate) bottom: u16,
}

impl Bounds {
    /// Whether `pos` sits on the border ring.
    pub(crate) fn on_border(self, pos: Position) -> bool {
        ((pos.x == self.left || pos.x == self.right) && (self.top..=self.bottom).contains(&pos.y))
            || ((pos.y == self.top || pos.y == self.bottom)
                && (self.left..=self.right).contains(&pos.x))
    }

    /// The playable cells strictly inside the border ring.  Cells are two
    /// columns wide, so x advances by two.
    pub(crate) fn inner_positions(self) -> impl Iterator<Item = Position> {
        (self.top + 1..self.bottom).flat_map(move |y| {
            (self.left + 2..self.right)
                .step_by(2)
                .map(move |x| Position::new(x, y))
        })
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Navigation helpers for `enum_map::Enum` types used as menu selections
pub(crate) trait EnumExt: Enum + Copy {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum + Copy> EnumExt for T {}

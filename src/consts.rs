//! Assorted constants & hard-coded configuration
use crate::util::Bounds;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Arena bounds, in display coordinates.  Cells are two columns wide, so
/// `left` and `right` are even and x coordinates advance by two.
pub(crate) const ARENA: Bounds = Bounds {
    left: 4,
    right: 76,
    top: 4,
    bottom: 20,
};

/// Default time between ticks, in milliseconds.  The live interval is the
/// configured base divided by the current level.
pub(crate) const BASE_TICK_MS: u64 = 500;

/// Number of segments the snake starts a round with
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 5;

/// Consecutive meals needed to advance a level
pub(crate) const MEALS_PER_LEVEL: u8 = 20;

/// Points awarded per level for a meal: food eaten at level L is worth
/// `L * POINTS_PER_LEVEL + 1`, the +1 offsetting that tick's idle penalty.
pub(crate) const POINTS_PER_LEVEL: i32 = 100;

/// Points lost on every tick the food goes uneaten
pub(crate) const IDLE_PENALTY: i32 = 1;

/// Probability of placing an obstacle in a given inner cell
pub(crate) const OBSTACLE_PROBABILITY: f64 = 0.03;

/// When scattering obstacles, remove any obstacles in front of the snake's
/// starting head this many cells forwards.
pub(crate) const FORWARDS_CLEARANCE: usize = 7;

/// Glyph for snake segments
pub(crate) const BODY_GLYPH: [char; 2] = ['[', ']'];

/// Glyph for the food
pub(crate) const FOOD_GLYPH: [char; 2] = ['(', ')'];

/// Glyph for solid border cells
pub(crate) const WALL_GLYPH: [char; 2] = ['[', ']'];

/// Glyph for warp border cells
pub(crate) const WARP_GLYPH: [char; 2] = ['(', ')'];

/// Glyph for obstacles
pub(crate) const OBSTACLE_GLYPH: [char; 2] = ['#', '#'];

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for solid border cells
pub(crate) const WALL_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for warp border cells
pub(crate) const WARP_STYLE: Style = Style::new().fg(Color::Magenta);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

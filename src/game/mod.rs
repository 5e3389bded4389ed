mod arena;
mod direction;
mod food;
mod paused;
mod snake;
use self::arena::Arena;
use self::direction::Direction;
use self::food::Food;
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::config::{BorderMode, Config};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::num::NonZeroU64;
use std::time::{Duration, Instant};
use thiserror::Error;

/// One round of snake: the session struct owning all mutable game state,
/// driven by a fixed-interval tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: Config,
    score: i32,
    level: u8,
    /// Time between ticks; retuned to `base / level` on level-up and
    /// applied when the next tick is scheduled
    interval: Duration,
    snake: Snake,
    food: Food,
    arena: Arena,
    /// The latest direction change staged since the last tick, consumed
    /// once when the tick fires
    pending: Option<Direction>,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Result<Self, GameError> {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, mut rng: R) -> Result<Game<R>, GameError> {
        let mut arena = Arena::new(consts::ARENA, config.border);
        let snake = Snake::new(consts::ARENA);
        if config.obstacles {
            arena.scatter_obstacles(&mut rng, &snake);
        }
        let mut food = Food::new();
        food.place(&mut rng, &arena, &snake)?;
        let interval = tick_interval(config.tick_ms, 1);
        Ok(Game {
            rng,
            config,
            score: 0,
            level: 1,
            interval,
            snake,
            food,
            arena,
            pending: None,
            state: GameState::Running,
            next_tick: None,
        })
    }

    pub(crate) fn process_input(&mut self) -> anyhow::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.interval);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance()?;
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?)?)
            }
        } else {
            Ok(self.handle_event(read()?)?)
        }
    }

    /// Run one tick of the simulation.
    fn advance(&mut self) -> Result<(), GameError> {
        if !self.running() {
            return Ok(());
        }
        // Per-entity tick hooks run to completion before the head advances.
        // The food's idle penalty is the only live hook.
        self.score += self.food.on_tick();
        if let Some(direction) = self.pending.take() {
            self.snake.turn(direction);
        }
        let Some(new_head) = self.snake.step_head() else {
            // Off the numeric edge of the screen; only reachable without a
            // border ring.
            self.end(EndReason::Loss);
            return Ok(());
        };
        match self.resolve(new_head) {
            Outcome::Slide => {
                let _ = self.snake.pop_tail();
                self.snake.push_head(new_head);
            }
            Outcome::Growth => {
                self.snake.push_head(new_head);
                let meal = self.food.consume(self.level);
                self.score += meal.points;
                if meal.level_up {
                    self.level += 1;
                    self.interval = tick_interval(self.config.tick_ms, self.level);
                }
                self.food.place(&mut self.rng, &self.arena, &self.snake)?;
            }
            Outcome::Teleport(dest) => {
                let _ = self.snake.pop_tail();
                self.snake.push_head(dest);
            }
            Outcome::Loss => self.end(EndReason::Loss),
        }
        Ok(())
    }

    /// Decide what the new head runs into.  Border cells, obstacles, food,
    /// and body are pairwise disjoint by construction, so at most one
    /// collision action applies per tick.
    fn resolve(&self, new_head: Position) -> Outcome {
        if self.arena.on_border(new_head) {
            return match self.arena.border() {
                BorderMode::Wall => Outcome::Loss,
                BorderMode::Warp => Outcome::Teleport(self.arena.warp_target(new_head)),
            };
        }
        if self.arena.obstacles().contains(&new_head) {
            return Outcome::Loss;
        }
        if new_head == self.food.position() {
            debug_assert!(
                !self.snake.hits_body(new_head),
                "food should never be placed on the snake"
            );
            return Outcome::Growth;
        }
        if self.snake.hits_body(new_head) {
            return Outcome::Loss;
        }
        Outcome::Slide
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Result<Option<Screen>, GameError> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event)
                {
                    match cmd {
                        Command::Quit => return Ok(Some(Screen::Quit)),
                        Command::Up => self.pending = Some(Direction::North),
                        Command::Left => self.pending = Some(Direction::West),
                        Command::Down => self.pending = Some(Direction::South),
                        Command::Right => self.pending = Some(Direction::East),
                        Command::Esc | Command::P => self.pause(),
                        Command::Q => self.end(EndReason::Retired),
                        _ => (),
                    }
                }
            }
            GameState::Paused(ref mut paused) => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    if cmd == Command::Quit {
                        return Ok(Some(Screen::Quit));
                    }
                    match paused.handle_command(cmd) {
                        Some(PauseOpt::Resume) => self.state = GameState::Running,
                        Some(PauseOpt::Restart) => {
                            return Ok(Some(Screen::Game(Game::new(self.config)?)))
                        }
                        Some(PauseOpt::Retire) => self.end(EndReason::Retired),
                        None => (),
                    }
                }
            }
            GameState::Ended(_) => {
                if let Some(ev) = event.as_key_press_event() {
                    if Command::from_key_event(ev) == Some(Command::Y) {
                        return Ok(Some(Screen::Game(Game::new(self.config)?)));
                    }
                    // Any non-affirmative answer quits
                    return Ok(Some(Screen::Quit));
                }
            }
        }
        Ok(None)
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Paused::new());
        self.next_tick = None;
    }

    fn end(&mut self, reason: EndReason) {
        self.food.reset();
        self.next_tick = None;
        self.state = GameState::Ended(reason);
    }
}

fn tick_interval(base_ms: NonZeroU64, level: u8) -> Duration {
    Duration::from_millis(base_ms.get()) / u32::from(level)
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        Line::styled(
            format!(" Level: {}    Score: {}", self.level, self.score),
            consts::STATUS_BAR_STYLE,
        )
        .render(Rect { height: 1, ..display }, buf);

        {
            let mut canvas = Canvas { area: display, buf };
            let (glyph, style) = match self.arena.border() {
                BorderMode::Wall => (consts::WALL_GLYPH, consts::WALL_STYLE),
                BorderMode::Warp => (consts::WARP_GLYPH, consts::WARP_STYLE),
            };
            for pos in self.arena.border_cells() {
                canvas.draw_cell(pos, glyph, style);
            }
            for &pos in self.arena.obstacles() {
                canvas.draw_cell(pos, consts::OBSTACLE_GLYPH, consts::OBSTACLE_STYLE);
            }
            canvas.draw_cell(self.food.position(), consts::FOOD_GLYPH, consts::FOOD_STYLE);
            for pos in self.snake.segments() {
                canvas.draw_cell(pos, consts::BODY_GLYPH, consts::SNAKE_STYLE);
            }
        }

        match self.state {
            GameState::Running => (),
            GameState::Paused(paused) => {
                let pause_area = center_rect(
                    display,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::Ended(reason) => {
                let verdict = match reason {
                    EndReason::Loss => format!(" You lost! Final score: {}", self.score),
                    EndReason::Retired => format!(" You retired. Final score: {}", self.score),
                };
                let mut msg_area = Rect {
                    y: display.y + 1,
                    height: 1,
                    ..display
                };
                Line::raw(verdict).render(msg_area, buf);
                msg_area.y += 1;
                Line::from_iter([
                    Span::raw(" Play again? ("),
                    Span::styled("y", consts::KEY_STYLE),
                    Span::raw("/n)"),
                ])
                .render(msg_area, buf);
            }
        }
    }
}

/// A view of the buffer addressed in absolute display coordinates, drawing
/// two-column cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw one double-width cell; `pos` addresses its left column.
    fn draw_cell(&mut self, pos: Position, glyph: [char; 2], style: Style) {
        self.draw_char(pos, glyph[0], style);
        if let Some(x) = pos.x.checked_add(1) {
            self.draw_char(Position::new(x, pos.y), glyph[1], style);
        }
    }

    fn draw_char(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// What a tick resolved to.  Exactly one of these happens per tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Slide,
    Growth,
    Teleport(Position),
    Loss,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    Ended(EndReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EndReason {
    Loss,
    Retired,
}

#[derive(Debug, Error)]
pub(crate) enum GameError {
    /// The snake and obstacles cover every inner cell, leaving nowhere to
    /// place food.  Unreachable with normal arena sizing.
    #[error("no free cell left to place the food in")]
    ArenaFull,
}

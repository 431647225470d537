mod banner;
mod direction;
mod food;
pub(crate) mod geometry;
mod snake;
mod timer;
use self::banner::{Banner, BannerKind};
use self::direction::Orientation;
use self::food::Food;
use self::geometry::Cell;
use self::snake::{Eating, Snake};
use self::timer::{TimerId, Timers};
use crate::command::Command;
use crate::config::GameConfig;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::Event;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// Returned by [`Session::handle_event()`] when the player asked to quit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Quit;

/// A game session: the snake, the food, and the timers & state machine that
/// drive them
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    config: GameConfig,
    snake: Snake,
    food: Food,
    state: SessionState,
    timers: Timers,

    /// Which of its two styles the pause/game-over banner is currently shown
    /// in
    blink_on: bool,

    /// Whether the snake may eat before its next movement.  Food is checked
    /// every frame but can be eaten at most once per movement.
    appetite: bool,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: GameConfig, now: Instant) -> Self {
        Session::new_with_rng(config, rand::rng(), now)
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(config: GameConfig, mut rng: R, now: Instant) -> Session<R> {
        let snake = Snake::new(&config);
        let food = Food::new(&mut rng, config.field);
        let mut timers = Timers::new();
        timers.schedule(TimerId::Blink, config.blink, now);
        timers.schedule(TimerId::FoodRespawn, config.food_respawn, now);
        timers.schedule(TimerId::Movement, snake.interval(), now);
        tracing::info!(
            columns = config.field.columns(),
            rows = config.field.rows(),
            "Starting new game"
        );
        Session {
            rng,
            config,
            snake,
            food,
            state: SessionState::Playing,
            timers,
            blink_on: true,
            appetite: true,
        }
    }

    /// Start the game over with a fresh snake & food
    pub(crate) fn reset(&mut self, now: Instant) {
        tracing::info!("Restarting game");
        self.state = SessionState::Playing;
        self.snake.reset();
        self.appetite = true;
        self.blink_on = true;
        self.timers.schedule(TimerId::Movement, self.snake.interval(), now);
        self.respawn_food(now);
    }

    pub(crate) fn handle_event(&mut self, event: Event, now: Instant) -> Option<Quit> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        self.handle_command(cmd, now)
    }

    pub(crate) fn handle_command(&mut self, cmd: Command, now: Instant) -> Option<Quit> {
        match (self.state, cmd) {
            (_, Command::Quit) => return Some(Quit),
            (SessionState::GameOver, Command::Space) => self.reset(now),
            (SessionState::Playing, Command::Space) => {
                tracing::debug!("Pausing game");
                self.state = SessionState::Paused;
                self.blink_on = true;
            }
            (SessionState::Paused, Command::Space) => {
                tracing::debug!("Resuming game");
                self.state = SessionState::Playing;
            }
            (SessionState::Playing, Command::Up) => self.turn(Orientation::Up),
            (SessionState::Playing, Command::Down) => self.turn(Orientation::Down),
            (SessionState::Playing, Command::Left) => self.turn(Orientation::Left),
            (SessionState::Playing, Command::Right) => self.turn(Orientation::Right),
            (SessionState::Paused | SessionState::GameOver, _) => (),
        }
        None
    }

    /// Fire all timers that are due at `now`
    pub(crate) fn run_timers(&mut self, now: Instant) {
        for id in self.timers.due(now) {
            self.fire(id, now);
        }
    }

    /// Per-frame bookkeeping: grow the food in and check whether the snake
    /// has reached it
    pub(crate) fn frame(&mut self, now: Instant) {
        self.food.grow_in();
        if self.state != SessionState::Playing || !self.appetite {
            return;
        }
        match self.snake.check_eaten(&self.food, self.config.field) {
            Eating::Missed => (),
            Eating::Ate => {
                tracing::debug!(
                    value = self.food.value(),
                    score = self.snake.score(),
                    interval_ms = self.snake.interval().as_millis(),
                    "Food eaten"
                );
                self.appetite = false;
                if self.timers.period(TimerId::Movement) != Some(self.snake.interval()) {
                    self.timers.schedule(TimerId::Movement, self.snake.interval(), now);
                }
                self.respawn_food(now);
            }
            Eating::Choked => self.game_over("Snake choked on food"),
        }
    }

    fn fire(&mut self, id: TimerId, now: Instant) {
        match (id, self.state) {
            (TimerId::Movement, SessionState::Playing) => self.tick(),
            (TimerId::FoodRespawn, SessionState::Playing) => self.respawn_food(now),
            (TimerId::Blink, SessionState::Paused | SessionState::GameOver) => {
                self.blink_on = !self.blink_on;
            }
            _ => (),
        }
    }

    fn tick(&mut self) {
        if self.snake.advance(self.config.field) {
            self.appetite = true;
        } else {
            self.game_over("Snake died");
        }
    }

    fn game_over(&mut self, message: &str) {
        let (column, row) = self.config.field.grid_position(self.snake.head());
        tracing::info!(score = self.snake.score(), column, row, "{message}");
        self.state = SessionState::GameOver;
        self.blink_on = true;
    }

    fn turn(&mut self, orientation: Orientation) {
        if !self.snake.change_orientation(orientation) {
            tracing::trace!(?orientation, "Ignoring turn along current axis");
        }
    }

    fn respawn_food(&mut self, now: Instant) {
        self.food.respawn(&mut self.rng, self.config.field);
        self.timers.schedule(TimerId::FoodRespawn, self.config.food_respawn, now);
        tracing::trace!(food = ?self.food, "Placed food");
    }
}

impl<R> Session<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Return the earliest instant at which a timer is due
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub(crate) fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Size of the playing field on screen, in terminal cells
    fn display_size(&self) -> Size {
        let field = self.config.field;
        Size {
            width: u16::try_from(field.columns())
                .unwrap_or(u16::MAX)
                .saturating_mul(consts::COLUMNS_PER_CELL),
            height: u16::try_from(field.rows()).unwrap_or(u16::MAX),
        }
    }
}

impl<R> Widget for &Session<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.config.palette;
        let field_area = center_rect(area, self.display_size());
        Block::new().style(palette.background).render(field_area, buf);

        if let Some(y) = field_area.bottom().checked_sub(1) {
            Line::styled(format!(" Score: {}", self.snake.score()), palette.score).render(
                Rect {
                    y,
                    height: 1,
                    ..field_area
                },
                buf,
            );
        }

        let mut canvas = Canvas {
            area: field_area,
            cell_size: self.config.field.cell_size,
            buf,
        };
        canvas.draw_cell(self.food.cell(), self.food.symbol(), palette.food);
        // Draw the tail first so that the head ends up on top
        for (i, &cell) in self.snake.body().iter().enumerate().rev() {
            if i == 0 {
                canvas.draw_cell(cell, consts::SNAKE_HEAD_SYMBOL, palette.snake_head);
            } else {
                canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, palette.snake);
            }
        }

        let kind = match self.state {
            SessionState::Playing => None,
            SessionState::Paused => Some(BannerKind::Paused),
            SessionState::GameOver => Some(BannerKind::GameOver),
        };
        if let Some(kind) = kind {
            Banner {
                kind,
                blink_on: self.blink_on,
                palette,
            }
            .render(field_area, buf);
        }
    }
}

/// Draws grid cells into a buffer, mapping field units to terminal cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_size: i32,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let Ok(column) = u16::try_from(cell.x / self.cell_size) else {
            return;
        };
        let Ok(row) = u16::try_from(cell.y / self.cell_size) else {
            return;
        };
        let Some(x) = column
            .checked_mul(consts::COLUMNS_PER_CELL)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if x >= self.area.right() || y >= self.area.bottom() {
            return;
        }
        let _ = self.buf.set_stringn(
            x,
            y,
            symbol,
            usize::from(self.area.right() - x),
            style,
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SessionState {
    Playing,
    Paused,
    GameOver,
}

//! Assorted constants & built-in defaults for [`crate::config::GameConfig`]
use ratatui::style::{Color, Modifier, Style};

/// Default width of the playing field, in field units
pub(crate) const FIELD_WIDTH: i32 = 640;

/// Default height of the playing field, in field units
pub(crate) const FIELD_HEIGHT: i32 = 480;

/// Default edge length of a single grid cell, in field units
pub(crate) const CELL_SIZE: i32 = 20;

/// Number of cells in a freshly-reset snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default time between movements of a freshly-reset snake
pub(crate) const INITIAL_INTERVAL_MS: u64 = 300;

/// Eating stops speeding the snake up once its interval is at or below this
pub(crate) const MIN_INTERVAL_MS: u64 = 200;

/// How much each fruit shortens the movement interval
pub(crate) const INTERVAL_STEP_MS: u64 = 40;

/// Uneaten food jumps to a new random cell after this long
pub(crate) const FOOD_RESPAWN_MS: u64 = 10_000;

/// Period of the blinking pause/game-over banner
pub(crate) const BLINK_MS: u64 = 500;

/// Target frame rate of the main loop
pub(crate) const FRAMES_PER_SECOND: u32 = 60;

/// Range of points a single food item may be worth
pub(crate) const FOOD_VALUES: std::ops::RangeInclusive<u32> = 1..=5;

/// Number of rendered frames a freshly-placed food takes to grow to full
/// size
pub(crate) const FOOD_GROW_IN_FRAMES: u8 = 10;

/// Terminal columns used to draw one grid cell.  Terminal cells are roughly
/// twice as tall as they are wide, so two columns make a square.
pub(crate) const COLUMNS_PER_CELL: u16 = 2;

/// Glyphs for a body segment of the snake
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "▓▓";

/// Glyphs for food as it grows in, smallest first; the last entry is the
/// fully-grown food.
pub(crate) const FOOD_SYMBOLS: [&str; 3] = ["··", "◦◦", "◖◗"];

/// Style of the empty playing field
pub(crate) const BACKGROUND_STYLE: Style = Style::new().bg(Color::Indexed(234));

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Rgb(255, 97, 0));

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Rgb(237, 145, 33));

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Rgb(255, 97, 0));

/// Style for the score label
pub(crate) const SCORE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// "On" phase style of the blinking status banner
pub(crate) const TIP_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// "Off" phase style of the blinking status banner
pub(crate) const TIP_OFF_STYLE: Style = Style::new()
    .fg(Color::Rgb(255, 97, 0))
    .add_modifier(Modifier::BOLD);

/// Style for the movement instructions shown under a banner
pub(crate) const INSTRUCTIONS_STYLE: Style = Style::new().fg(Color::Rgb(255, 97, 0));

/// Rows between the center of the field and the instructions line above it
pub(crate) const INSTRUCTIONS_OFFSET: u16 = 5;

/// Environment variable holding the `tracing` filter directives
pub(crate) const LOG_ENV_VAR: &str = "BLINKSNAKE_LOG";

/// Filter directives used when [`LOG_ENV_VAR`] is unset
pub(crate) const DEFAULT_LOG_FILTER: &str = "blinksnake=debug";

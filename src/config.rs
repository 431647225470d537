use crate::consts;
use crate::game::geometry::Field;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Field geometry & timing
    #[serde(default)]
    pub(crate) game: RawGameConfig,

    /// Colors & text attributes
    #[serde(default)]
    pub(crate) styles: StyleConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("blinksnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                tracing::debug!(path = %path.display(), "No configuration file; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        toml::from_str(&content).map_err(Into::into)
    }

    /// Validate the configuration and convert it into the immutable settings
    /// handed to the game
    pub(crate) fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let raw = &self.game;
        if raw.cell_size <= 0 {
            return Err(InvalidConfig::CellSize(raw.cell_size).into());
        }
        for (name, value) in [("field-width", raw.field_width), ("field-height", raw.field_height)]
        {
            if value <= 0 || value % raw.cell_size != 0 {
                return Err(InvalidConfig::FieldDimension {
                    name,
                    value,
                    cell_size: raw.cell_size,
                }
                .into());
            }
        }
        let min_columns = i32::try_from(consts::INITIAL_SNAKE_LENGTH + 1).unwrap_or(i32::MAX);
        if raw.field_width / raw.cell_size < min_columns {
            return Err(InvalidConfig::TooNarrow(min_columns).into());
        }
        for (name, value) in [
            ("min-interval-ms", raw.min_interval_ms),
            ("interval-step-ms", raw.interval_step_ms),
            ("food-respawn-ms", raw.food_respawn_ms),
            ("blink-ms", raw.blink_ms),
        ] {
            if value == 0 {
                return Err(InvalidConfig::ZeroPeriod(name).into());
            }
        }
        if raw.initial_interval_ms < raw.min_interval_ms {
            return Err(InvalidConfig::InitialBelowMinimum {
                initial: raw.initial_interval_ms,
                minimum: raw.min_interval_ms,
            }
            .into());
        }
        if raw.fps == 0 {
            return Err(InvalidConfig::ZeroPeriod("fps").into());
        }
        Ok(GameConfig {
            field: Field {
                width: raw.field_width,
                height: raw.field_height,
                cell_size: raw.cell_size,
            },
            initial_interval: Duration::from_millis(raw.initial_interval_ms),
            min_interval: Duration::from_millis(raw.min_interval_ms),
            interval_step: Duration::from_millis(raw.interval_step_ms),
            food_respawn: Duration::from_millis(raw.food_respawn_ms),
            blink: Duration::from_millis(raw.blink_ms),
            fps: raw.fps,
            palette: self.styles.to_palette(),
        })
    }
}

/// The `[game]` table of the configuration file, before validation
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct RawGameConfig {
    field_width: i32,
    field_height: i32,
    cell_size: i32,
    initial_interval_ms: u64,
    min_interval_ms: u64,
    interval_step_ms: u64,
    food_respawn_ms: u64,
    blink_ms: u64,
    fps: u32,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            cell_size: consts::CELL_SIZE,
            initial_interval_ms: consts::INITIAL_INTERVAL_MS,
            min_interval_ms: consts::MIN_INTERVAL_MS,
            interval_step_ms: consts::INTERVAL_STEP_MS,
            food_respawn_ms: consts::FOOD_RESPAWN_MS,
            blink_ms: consts::BLINK_MS,
            fps: consts::FRAMES_PER_SECOND,
        }
    }
}

/// The `[styles]` table of the configuration file.  Unset entries fall back
/// to the built-in styles in [`consts`].
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct StyleConfig {
    background: Option<parse_style::Style>,
    snake: Option<parse_style::Style>,
    snake_head: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    score: Option<parse_style::Style>,
    tip: Option<parse_style::Style>,
    tip_off: Option<parse_style::Style>,
    instructions: Option<parse_style::Style>,
}

impl StyleConfig {
    fn to_palette(&self) -> Palette {
        let pick = |configured: &Option<parse_style::Style>, default: Style| {
            configured.clone().map_or(default, Style::from)
        };
        Palette {
            background: pick(&self.background, consts::BACKGROUND_STYLE),
            snake: pick(&self.snake, consts::SNAKE_STYLE),
            snake_head: pick(&self.snake_head, consts::SNAKE_HEAD_STYLE),
            food: pick(&self.food, consts::FOOD_STYLE),
            score: pick(&self.score, consts::SCORE_STYLE),
            tip: pick(&self.tip, consts::TIP_STYLE),
            tip_off: pick(&self.tip_off, consts::TIP_OFF_STYLE),
            instructions: pick(&self.instructions, consts::INSTRUCTIONS_STYLE),
        }
    }
}

/// Immutable game settings, shared by the session and everything it owns
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameConfig {
    pub(crate) field: Field,
    pub(crate) initial_interval: Duration,
    pub(crate) min_interval: Duration,
    pub(crate) interval_step: Duration,
    pub(crate) food_respawn: Duration,
    pub(crate) blink: Duration,
    pub(crate) fps: u32,
    pub(crate) palette: Palette,
}

impl GameConfig {
    /// Time allotted to a single frame of the main loop
    pub(crate) fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            field: Field {
                width: consts::FIELD_WIDTH,
                height: consts::FIELD_HEIGHT,
                cell_size: consts::CELL_SIZE,
            },
            initial_interval: Duration::from_millis(consts::INITIAL_INTERVAL_MS),
            min_interval: Duration::from_millis(consts::MIN_INTERVAL_MS),
            interval_step: Duration::from_millis(consts::INTERVAL_STEP_MS),
            food_respawn: Duration::from_millis(consts::FOOD_RESPAWN_MS),
            blink: Duration::from_millis(consts::BLINK_MS),
            fps: consts::FRAMES_PER_SECOND,
            palette: Palette::default(),
        }
    }
}

/// Styles used when drawing the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) background: Style,
    pub(crate) snake: Style,
    pub(crate) snake_head: Style,
    pub(crate) food: Style,
    pub(crate) score: Style,
    pub(crate) tip: Style,
    pub(crate) tip_off: Style,
    pub(crate) instructions: Style,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            background: consts::BACKGROUND_STYLE,
            snake: consts::SNAKE_STYLE,
            snake_head: consts::SNAKE_HEAD_STYLE,
            food: consts::FOOD_STYLE,
            score: consts::SCORE_STYLE,
            tip: consts::TIP_STYLE,
            tip_off: consts::TIP_OFF_STYLE,
            instructions: consts::INSTRUCTIONS_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration")]
    Invalid(#[from] InvalidConfig),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("cell-size must be positive, got {0}")]
    CellSize(i32),
    #[error("{name} must be a positive multiple of cell-size ({cell_size}), got {value}")]
    FieldDimension {
        name: &'static str,
        value: i32,
        cell_size: i32,
    },
    #[error("field must be at least {0} cells wide")]
    TooNarrow(i32),
    #[error("{0} must be nonzero")]
    ZeroPeriod(&'static str),
    #[error("initial-interval-ms ({initial}) is below min-interval-ms ({minimum})")]
    InitialBelowMinimum { initial: u64, minimum: u64 },
}

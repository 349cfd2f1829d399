//! Game Timestamp Types
//!
//! Converts the host's monotonic tick counter into a human-readable date.
//!
//! # Example
//!
//! ```
//! use colony_events::{GameTimestamp, Season, TICKS_PER_DAY};
//!
//! let ts = GameTimestamp::from_tick(TICKS_PER_DAY * 16);
//! assert_eq!(ts.date.season, Season::Summer);
//! assert_eq!(ts.date.day, 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in each season.
pub const DAYS_PER_SEASON: u8 = 15;

/// Number of ticks per in-game day.
pub const TICKS_PER_DAY: u64 = 2500;

const SEASONS_PER_YEAR: u64 = 4;

/// Season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    fn from_index(index: u64) -> Self {
        match index % SEASONS_PER_YEAR {
            0 => Season::Spring,
            1 => Season::Summer,
            2 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Calendar date derived from a tick count. Years and days are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameDate {
    pub year: u32,
    pub season: Season,
    pub day: u8,
}

impl GameDate {
    /// Derives the date a given tick falls on.
    pub fn from_tick(tick: u64) -> Self {
        let days = tick / TICKS_PER_DAY;
        let day_of_season = days % DAYS_PER_SEASON as u64;
        let seasons = days / DAYS_PER_SEASON as u64;
        let years = seasons / SEASONS_PER_YEAR;

        Self {
            year: years as u32 + 1,
            season: Season::from_index(seasons),
            day: day_of_season as u8 + 1,
        }
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, year {}", self.day, self.season, self.year)
    }
}

/// A point in game time: the raw tick plus its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimestamp {
    /// Monotonically increasing game tick.
    pub tick: u64,
    /// Human-readable date.
    pub date: GameDate,
}

impl GameTimestamp {
    pub fn from_tick(tick: u64) -> Self {
        Self {
            tick,
            date: GameDate::from_tick(tick),
        }
    }

    /// Timestamp of the first tick of a new game.
    pub fn start() -> Self {
        Self::from_tick(0)
    }
}

impl fmt::Display for GameTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.date, f)
    }
}

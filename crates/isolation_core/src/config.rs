//! Board configuration.
//!
//! Dimensions and the initial set of blocked cells are supplied by the caller
//! at construction time, either programmatically or from TOML:
//!
//! ```toml
//! width = 3
//! height = 2
//! initial_blocked_cells = [[2, 1]]
//! ```

use serde::{Deserialize, Serialize};

use crate::bitboard::MAX_CELLS;
use crate::error::{Error, Result};
use crate::types::Coord;

pub const DEFAULT_WIDTH: u8 = 3;
pub const DEFAULT_HEIGHT: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
    /// Cells blocked before the first move. Duplicates are ignored.
    pub initial_blocked_cells: Vec<Coord>,
}

impl Default for BoardConfig {
    /// 3x2 board with the bottom-right corner blocked.
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_blocked_cells: vec![Coord(DEFAULT_WIDTH - 1, DEFAULT_HEIGHT - 1)],
        }
    }
}

impl BoardConfig {
    pub fn new(width: u8, height: u8, initial_blocked_cells: Vec<Coord>) -> Self {
        Self {
            width,
            height,
            initial_blocked_cells,
        }
    }

    /// Parse and validate a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check dimensions, bounds of the blocked cells, and that some cell stays open.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cells() > MAX_CELLS {
            return Err(invalid(format!(
                "board has {} cells, at most {} are supported",
                self.cells(),
                MAX_CELLS
            )));
        }
        if let Some(c) = self
            .initial_blocked_cells
            .iter()
            .find(|c| c.col() >= self.width || c.row() >= self.height)
        {
            return Err(invalid(format!(
                "blocked cell {} lies outside the {}x{} board",
                c, self.width, self.height
            )));
        }

        let mut blocked = self.initial_blocked_cells.clone();
        blocked.sort_unstable();
        blocked.dedup();
        if blocked.len() >= self.cells() {
            return Err(invalid("every cell is blocked; no first move is possible".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

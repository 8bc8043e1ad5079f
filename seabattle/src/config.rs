// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Game setup constants and the configuration used to build a game.
use thiserror::Error;

use crate::model::{BoardModel, GameModel, ModelError, ShipPlacement};

/// Side length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Number of boards in a standard game.
pub const DEFAULT_BOARD_COUNT: usize = 2;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 100;

/// Fixed layout used for every board unless another is given: a single 3-cell ship
/// across row 0, columns 2 through 4.
pub const DEFAULT_LAYOUT: &[ShipPlacement] = &[ShipPlacement::horizontal(0, 2, 3)];

/// Reason a [`GameConfig`] is unusable.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// A game needs at least one board.
    #[error("a game needs at least one board")]
    NoBoards,

    /// Boards of this size would be too large to build and display.
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge {
        /// Configured board size.
        size: usize,
        /// Largest accepted size.
        max: usize,
    },

    /// The layout does not fit on boards of the configured size.
    #[error("layout does not fit a {size}x{size} board: {source}")]
    Layout {
        /// Configured board size.
        size: usize,
        #[source]
        source: ModelError,
    },
}

/// Shape of a game: how many boards, how big, and where the ships go.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Number of boards.
    pub board_count: usize,
    /// Side length of every board.
    pub board_size: usize,
    /// Ship layout applied to every board.
    pub layout: Vec<ShipPlacement>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_count: DEFAULT_BOARD_COUNT,
            board_size: DEFAULT_BOARD_SIZE,
            layout: DEFAULT_LAYOUT.to_vec(),
        }
    }
}

impl GameConfig {
    /// Single-board game with the default size and layout.
    pub fn single() -> Self {
        Self {
            board_count: 1,
            ..Self::default()
        }
    }

    /// Check that a game can be built from this configuration.
    ///
    /// Every board shares one layout, so only a single board is built to check it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_shape()?;
        self.build_board().map(|_| ())
    }

    /// Build the boards and wrap them in a [`GameModel`].
    pub fn build(&self) -> Result<GameModel, ConfigError> {
        self.check_shape()?;
        let boards = (0..self.board_count)
            .map(|_| self.build_board())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameModel::new(boards))
    }

    /// Reject shapes that cannot be built before allocating anything.
    fn check_shape(&self) -> Result<(), ConfigError> {
        if self.board_count == 0 {
            return Err(ConfigError::NoBoards);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }

    fn build_board(&self) -> Result<BoardModel, ConfigError> {
        BoardModel::with_layout(self.board_size, &self.layout).map_err(|source| {
            ConfigError::Layout {
                size: self.board_size,
                source,
            }
        })
    }
}

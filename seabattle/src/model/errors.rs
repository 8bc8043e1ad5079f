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
//! Errors raised by the game model.
use thiserror::Error;

use crate::model::Coordinate;

/// Reason a board operation was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ModelError {
    /// A cell was shot twice. Boards guard against this, so it indicates a logic error.
    #[error("the cell was already used")]
    AlreadyUsedCell,

    /// The row or column is outside of the board.
    #[error("invalid cell address {coord} for a {size}x{size} board")]
    InvalidCellAddress {
        /// The address that was looked up.
        coord: Coordinate,
        /// Side length of the board.
        size: usize,
    },

    /// Two ships of a layout claim the same cell.
    #[error("ship placement overlaps another ship at {0}")]
    ShipOverlaps(Coordinate),

    /// A ship in a layout has no cells.
    #[error("ship placement has zero length")]
    EmptyShip,

    /// Boards must have at least one row and column.
    #[error("board size must be nonzero")]
    InvalidSize,
}

/// Reason a shot at the game was rejected.
#[derive(Debug, Error)]
pub enum GameError {
    /// There is no board with the requested number.
    #[error("invalid board number {board_number}, the game has {board_count} board(s)")]
    InvalidBoardNumber {
        /// The board number that was requested.
        board_number: usize,
        /// Number of boards in the game.
        board_count: usize,
    },

    /// The selected board rejected the shot.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The model is already borrowed, e.g. a shot was fired while a caller still held
    /// a reference to the game.
    #[error("the game is busy")]
    Busy,

    /// An observer failed while handling an event for this shot. The shot itself was
    /// applied and every other observer still ran.
    #[error("observer failed: {0}")]
    Observer(anyhow::Error),
}

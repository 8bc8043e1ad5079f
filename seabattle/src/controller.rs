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
//! Translation of clicks into shots.
use std::{cell::RefCell, fmt, rc::Rc};

use log::debug;

use crate::model::{GameError, GameModel, ShotResult};

/// Where a click landed: a cell on one of the game's boards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CellLocation {
    /// Board the cell belongs to.
    pub board_number: usize,
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub column: usize,
}

impl CellLocation {
    /// Construct a location on the given board.
    pub fn new(board_number: usize, row: usize, column: usize) -> Self {
        Self {
            board_number,
            row,
            column,
        }
    }

    /// Location for single-board games, which always target board 0.
    pub fn single(row: usize, column: usize) -> Self {
        Self::new(0, row, column)
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "board {} ({}, {})", self.board_number, self.row, self.column)
    }
}

/// Forwards clicks on cells to the shared [`GameModel`].
#[derive(Clone)]
pub struct GameController {
    model: Rc<RefCell<GameModel>>,
}

impl GameController {
    /// Create a controller driving the given model.
    pub fn new(model: Rc<RefCell<GameModel>>) -> Self {
        Self { model }
    }

    /// Fire at the clicked cell. Validation is left to the model.
    ///
    /// The model is only borrowed while the shot is applied. Observers run afterwards and
    /// may read the model through their own handles. Fails with [`GameError::Busy`] if the
    /// model is borrowed by the caller.
    pub fn cell_click_handler(
        &self,
        location: CellLocation,
    ) -> Result<Option<ShotResult>, GameError> {
        debug!("click on {}", location);
        let fired = self
            .model
            .try_borrow_mut()
            .map_err(|_| GameError::Busy)?
            .fire(location.board_number, location.row, location.column)?;
        match fired {
            Some((result, dispatch)) => {
                dispatch.publish()?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }
}

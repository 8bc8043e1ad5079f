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
//! A single square of ocean.
use crate::model::{ModelError, ShipId};

/// One cell of a board. Tracks whether it has been shot and which ship, if any,
/// sits on it.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct CellModel {
    /// Whether this cell has been shot. Never reverts once set.
    used: bool,

    /// Id of the ship occupying this cell in the owning board's ship table.
    ship: Option<ShipId>,
}

impl CellModel {
    /// Create an unused cell with no ship.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the ship that occupies this cell. Last write wins.
    pub fn set_ship(&mut self, ship: ShipId) {
        self.ship = Some(ship);
    }

    /// Whether this cell has been shot previously.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    /// Mark this cell as shot, returning the ship that occupies it. The caller is
    /// responsible for recording the hit on that ship.
    ///
    /// Fails with [`ModelError::AlreadyUsedCell`] if the cell was already shot; boards
    /// guard against that before calling, so reaching it indicates a logic error.
    pub fn shoot(&mut self) -> Result<Option<ShipId>, ModelError> {
        if self.used {
            return Err(ModelError::AlreadyUsedCell);
        }
        self.used = true;
        Ok(self.ship)
    }
}

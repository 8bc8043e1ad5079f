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
//! A single grid of cells with a fixed ship layout.
use std::fmt;

use log::{debug, trace};

use crate::{
    config::DEFAULT_LAYOUT,
    model::{CellModel, Coordinate, ModelError, ShipId, ShipModel},
};

/// Direction a ship extends in from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship extends toward higher column numbers.
    Horizontal,
    /// The ship extends toward higher row numbers.
    Vertical,
}

/// Fixed position of one ship in a board layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipPlacement {
    /// Cell the ship starts at.
    pub start: Coordinate,
    /// Number of cells the ship occupies.
    pub length: usize,
    /// Direction the ship extends in from `start`.
    pub orientation: Orientation,
}

impl ShipPlacement {
    /// A ship starting at `(row, column)` and extending right for `length` cells.
    pub const fn horizontal(row: usize, column: usize, length: usize) -> Self {
        Self {
            start: Coordinate { row, column },
            length,
            orientation: Orientation::Horizontal,
        }
    }

    /// A ship starting at `(row, column)` and extending down for `length` cells.
    pub const fn vertical(row: usize, column: usize, length: usize) -> Self {
        Self {
            start: Coordinate { row, column },
            length,
            orientation: Orientation::Vertical,
        }
    }

    /// Get an iterator over the cells covered by this placement.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let start = self.start;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, start.column.saturating_add(i)),
            Orientation::Vertical => Coordinate::new(start.row.saturating_add(i), start.column),
        })
    }
}

/// Outcome of a shot that landed on a fresh cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotResult {
    /// The shot struck a ship.
    Hit,
    /// The shot landed in open water.
    Miss,
}

impl ShotResult {
    /// Lowercase name of the result, as carried by events.
    pub fn as_str(self) -> &'static str {
        match self {
            ShotResult::Hit => "hit",
            ShotResult::Miss => "miss",
        }
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A square grid of cells with the ships placed on it.
#[derive(Debug, Clone)]
pub struct BoardModel {
    /// Side length of the grid.
    size: usize,

    /// Cells of the grid in row-major order. Always `size * size` long.
    cells: Box<[CellModel]>,

    /// Ships on this board, indexed by [`ShipId`].
    ships: Vec<ShipModel>,
}

impl BoardModel {
    /// Create a `size`x`size` board with the default fixed layout.
    pub fn new(size: usize) -> Result<Self, ModelError> {
        Self::with_layout(size, DEFAULT_LAYOUT)
    }

    /// Create a `size`x`size` board with the given fixed layout.
    pub fn with_layout(size: usize, layout: &[ShipPlacement]) -> Result<Self, ModelError> {
        let total = match size.checked_mul(size) {
            Some(total) if total > 0 => total,
            _ => return Err(ModelError::InvalidSize),
        };
        let mut board = Self {
            size,
            cells: (0..total).map(|_| CellModel::new()).collect(),
            ships: Vec::with_capacity(layout.len()),
        };
        for placement in layout {
            board.place_ship(placement)?;
        }
        Ok(board)
    }

    /// Place a ship, registering each of its cells with it.
    fn place_ship(&mut self, placement: &ShipPlacement) -> Result<ShipId, ModelError> {
        if placement.length == 0 {
            return Err(ModelError::EmptyShip);
        }
        // Check everything before touching the grid so a bad layout leaves no partial ship.
        for coord in placement.coords() {
            if self.cell(coord)?.ship().is_some() {
                return Err(ModelError::ShipOverlaps(coord));
            }
        }
        let id = ShipId(self.ships.len());
        let mut ship = ShipModel::new();
        for coord in placement.coords() {
            let idx = self.index(coord)?;
            self.cells[idx].set_ship(id);
            ship.add_to_cell(coord);
        }
        trace!(
            "placed {} with {} cells at {}",
            id,
            ship.occupied_cell_count(),
            placement.start
        );
        self.ships.push(ship);
        Ok(id)
    }

    /// Convert a coordinate to an index into `cells`, checking both axes.
    fn index(&self, coord: Coordinate) -> Result<usize, ModelError> {
        if coord.row < self.size && coord.column < self.size {
            Ok(coord.row * self.size + coord.column)
        } else {
            Err(ModelError::InvalidCellAddress {
                coord,
                size: self.size,
            })
        }
    }

    /// Side length of this board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at the given coordinate.
    pub fn cell(&self, coord: Coordinate) -> Result<&CellModel, ModelError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    /// Get the ship with the given id if it exists.
    pub fn ship(&self, id: ShipId) -> Option<&ShipModel> {
        self.ships.get(id.0)
    }

    /// All ships on this board, indexed by [`ShipId`].
    pub fn ships(&self) -> &[ShipModel] {
        &self.ships
    }

    /// Get the ship occupying the given cell, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Result<Option<(ShipId, &ShipModel)>, ModelError> {
        Ok(self
            .cell(coord)?
            .ship()
            .and_then(|id| self.ship(id).map(|ship| (id, ship))))
    }

    /// Returns true if every ship on this board has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(ShipModel::is_sunk)
    }

    /// Get an iterator over the cells that have not been shot yet, in row-major order.
    pub fn unused_cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_used())
            .map(move |(idx, _)| Coordinate::new(idx / size, idx % size))
    }

    /// Fire at the given cell.
    ///
    /// Returns `Ok(None)` without any effect if the cell was already shot. Otherwise the
    /// cell is marked used, any ship on it takes a hit, and the result is returned.
    pub fn shoot_at(&mut self, row: usize, column: usize) -> Result<Option<ShotResult>, ModelError> {
        let coord = Coordinate::new(row, column);
        let idx = self.index(coord)?;
        let cell = &mut self.cells[idx];
        if cell.is_used() {
            debug!("ignoring repeated shot at {}", coord);
            return Ok(None);
        }
        let result = match cell.shoot()? {
            Some(id) => {
                self.ships[id.0].shoot();
                ShotResult::Hit
            }
            None => ShotResult::Miss,
        };
        debug!("shot at {}: {}", coord, result);
        Ok(Some(result))
    }
}

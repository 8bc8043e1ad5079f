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
//! Ships and their hit bookkeeping.
use std::{collections::BTreeSet, fmt};

use crate::model::Coordinate;

/// Index of a ship in its board's ship table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in [`BoardModel::ships`][crate::model::BoardModel::ships].
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ship #{}", self.0)
    }
}

/// A single ship. Counts the cells it occupies and the hits it has taken.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ShipModel {
    /// Cells registered to this ship. Registration is idempotent, so this is a set.
    cells: BTreeSet<Coordinate>,

    /// Number of shots that have landed on this ship.
    hits_taken: usize,
}

impl ShipModel {
    /// Create a ship that occupies no cells yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the cell at `coord` as part of this ship. Returns false and does
    /// nothing if it was already registered.
    pub fn add_to_cell(&mut self, coord: Coordinate) -> bool {
        self.cells.insert(coord)
    }

    /// Record a hit on this ship.
    // Not bounded by the occupied count: each registered cell can only be shot once.
    pub fn shoot(&mut self) {
        self.hits_taken += 1;
    }

    /// Whether every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_taken >= self.occupied_cell_count()
    }

    /// Number of distinct cells this ship occupies.
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of hits this ship has taken.
    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    /// Iterate the cells this ship occupies, in row-major order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.cells.iter().copied()
    }
}

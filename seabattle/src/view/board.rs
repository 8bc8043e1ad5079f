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
//! Grid view of a single board.
use crate::{
    controller::CellLocation,
    view::{self, BoardCellComponent, Class, Component, Document, Mounted, NodeId, Tag, ViewError},
};

/// A `size`x`size` grid of [`BoardCellComponent`]s for one board.
#[derive(Debug)]
pub struct GameBoardComponent {
    board_number: usize,
    size: usize,
    /// Cell views in row-major order, filled in when the element is created.
    cells: Vec<Mounted<BoardCellComponent>>,
}

impl GameBoardComponent {
    /// Create a board view for board `board_number` with the given side length.
    pub fn new(board_number: usize, size: usize) -> Self {
        Self {
            board_number,
            size,
            cells: Vec::new(),
        }
    }

    /// Number of the board this view shows.
    pub fn board_number(&self) -> usize {
        self.board_number
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, ViewError> {
        let invalid = ViewError::InvalidCellAddress {
            row,
            column,
            size: self.size,
        };
        if row >= self.size || column >= self.size {
            return Err(invalid);
        }
        let idx = row * self.size + column;
        if idx < self.cells.len() {
            Ok(idx)
        } else {
            Err(invalid)
        }
    }

    /// Get the view of the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Result<&Mounted<BoardCellComponent>, ViewError> {
        let idx = self.index(row, column)?;
        Ok(&self.cells[idx])
    }

    /// Mutably get the view of the cell at `(row, column)`.
    pub fn cell_mut(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<&mut Mounted<BoardCellComponent>, ViewError> {
        let idx = self.index(row, column)?;
        Ok(&mut self.cells[idx])
    }

    /// Get an iterator over all cell views in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Mounted<BoardCellComponent>> {
        self.cells.iter()
    }
}

impl Component for GameBoardComponent {
    fn create_element(&mut self, doc: &mut Document) -> Result<NodeId, ViewError> {
        let table = doc.create_element(Tag::Table);
        doc.set_classes(table, Class::Board)?;
        self.cells.clear();
        self.cells.reserve(self.size * self.size);
        for row in 0..self.size {
            let row_element = doc.create_element(Tag::Row);
            doc.set_classes(row_element, Class::Row)?;
            doc.append_child(table, row_element)?;
            for column in 0..self.size {
                let location = CellLocation::new(self.board_number, row, column);
                let cell = view::run(BoardCellComponent::new(location), doc)?;
                doc.append_child(row_element, cell.element())?;
                self.cells.push(cell);
            }
        }
        Ok(table)
    }
}

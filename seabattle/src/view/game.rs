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
//! Top-level view of the whole game.
use log::debug;

use crate::{
    model::{GameEvent, GameModel, ShotFired},
    view::{self, Class, Component, Document, GameBoardComponent, Mounted, NodeId, Tag, ViewError},
};

/// One board view per model board, stacked with captions. Keeps itself in sync with the
/// model through [`GameComponent::model_observer`].
#[derive(Debug)]
pub struct GameComponent {
    /// Side length of each board, by board number.
    sizes: Vec<usize>,
    /// Board views, filled in when the element is created.
    boards: Vec<Mounted<GameBoardComponent>>,
}

impl GameComponent {
    /// Create a view matching the boards of `model`.
    pub fn new(model: &GameModel) -> Self {
        Self::with_sizes(model.boards().map(|board| board.size()).collect())
    }

    /// Create a view with one board per entry of `sizes`.
    pub fn with_sizes(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            boards: Vec::new(),
        }
    }

    /// Get the view of the given board.
    pub fn board(&self, board_number: usize) -> Result<&Mounted<GameBoardComponent>, ViewError> {
        self.boards
            .get(board_number)
            .ok_or(ViewError::BoardViewNotFound(board_number))
    }

    /// Mutably get the view of the given board.
    pub fn board_mut(
        &mut self,
        board_number: usize,
    ) -> Result<&mut Mounted<GameBoardComponent>, ViewError> {
        self.boards
            .get_mut(board_number)
            .ok_or(ViewError::BoardViewNotFound(board_number))
    }

    /// Number of board views.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Apply a model event to the view. Only shot events change anything; other kinds
    /// are ignored.
    pub fn model_observer(&mut self, doc: &mut Document, event: &GameEvent) -> Result<(), ViewError> {
        match *event {
            GameEvent::ShotFired(ShotFired {
                board_number,
                row,
                column,
                result,
            }) => {
                debug!(
                    "updating cell ({}, {}) of board {} to {}",
                    row, column, board_number, result
                );
                self.board_mut(board_number)?
                    .cell_mut(row, column)?
                    .set_state(doc, result.into())
            }
            _ => Ok(()),
        }
    }
}

impl Component for GameComponent {
    fn create_element(&mut self, doc: &mut Document) -> Result<NodeId, ViewError> {
        let root = doc.create_element(Tag::Div);
        doc.set_classes(root, Class::Game)?;
        self.boards.clear();
        for (board_number, size) in self.sizes.iter().copied().enumerate() {
            let section = doc.create_element(Tag::Div);
            doc.append_child(root, section)?;
            let caption = doc.create_element(Tag::Caption);
            doc.set_classes(caption, Class::Caption)?;
            doc.set_text(caption, format!("Board {}", board_number))?;
            doc.append_child(section, caption)?;
            let board = view::run(GameBoardComponent::new(board_number, size), doc)?;
            doc.append_child(section, board.element())?;
            self.boards.push(board);
        }
        Ok(root)
    }
}

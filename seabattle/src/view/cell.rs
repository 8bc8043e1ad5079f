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
//! A single cell of a board view.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use log::trace;

use crate::{
    controller::CellLocation,
    model::ShotResult,
    view::{Class, Component, Document, Mounted, NodeId, Tag, ViewError},
};

/// What a cell view shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Not shot yet.
    Unknown,
    /// Shot, and a ship was there.
    Hit,
    /// Shot, and it was open water.
    Miss,
}

impl CellState {
    /// Visible marker text for this state.
    pub fn marker(self) -> &'static str {
        match self {
            CellState::Unknown => "",
            CellState::Hit => "X",
            CellState::Miss => ".",
        }
    }

    /// Style class for this state.
    pub fn class(self) -> Class {
        match self {
            CellState::Unknown => Class::Unknown,
            CellState::Hit => Class::Hit,
            CellState::Miss => Class::Miss,
        }
    }

    /// Name of the state as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            CellState::Unknown => "unknown",
            CellState::Hit => "hit",
            CellState::Miss => "miss",
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CellState {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(CellState::Unknown),
            "hit" => Ok(CellState::Hit),
            "miss" => Ok(CellState::Miss),
            other => Err(ViewError::InvalidState(other.to_owned())),
        }
    }
}

impl From<ShotResult> for CellState {
    fn from(result: ShotResult) -> Self {
        match result {
            ShotResult::Hit => CellState::Hit,
            ShotResult::Miss => CellState::Miss,
        }
    }
}

/// View of one board cell. Clicking its element reports its [`CellLocation`].
#[derive(Debug)]
pub struct BoardCellComponent {
    location: CellLocation,
    state: CellState,
}

impl BoardCellComponent {
    /// Create an unknown cell for the given location.
    pub fn new(location: CellLocation) -> Self {
        Self {
            location,
            state: CellState::Unknown,
        }
    }

    /// Location this cell reports when clicked.
    pub fn location(&self) -> CellLocation {
        self.location
    }

    /// Current display state.
    pub fn state(&self) -> CellState {
        self.state
    }

    fn paint(&self, doc: &mut Document, element: NodeId) -> Result<(), ViewError> {
        doc.set_text(element, self.state.marker())?;
        doc.set_classes(element, BitFlags::from(Class::Cell) | self.state.class())
    }
}

impl Component for BoardCellComponent {
    fn create_element(&mut self, doc: &mut Document) -> Result<NodeId, ViewError> {
        let element = doc.create_element(Tag::Cell);
        doc.set_click_target(element, self.location)?;
        trace!("created cell element {:?} for {}", element, self.location);
        Ok(element)
    }

    fn initialize(&mut self, doc: &mut Document, element: NodeId) -> Result<(), ViewError> {
        self.paint(doc, element)
    }
}

impl Mounted<BoardCellComponent> {
    /// Change the display state and repaint.
    ///
    /// Setting the current state again does nothing. Once a cell shows a hit or a miss
    /// it cannot change to anything else.
    pub fn set_state(&mut self, doc: &mut Document, state: CellState) -> Result<(), ViewError> {
        let from = self.component.state;
        if from == state {
            return Ok(());
        }
        if from != CellState::Unknown {
            return Err(ViewError::InvalidTransition { from, to: state });
        }
        self.component.state = state;
        self.component.paint(doc, self.element)
    }

    /// Parse `name` as a [`CellState`] and apply it. An unrecognized name leaves the
    /// cell unchanged.
    pub fn set_state_named(&mut self, doc: &mut Document, name: &str) -> Result<(), ViewError> {
        let state = name.parse()?;
        self.set_state(doc, state)
    }
}

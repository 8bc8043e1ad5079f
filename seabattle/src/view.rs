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
//! View components.
//!
//! A [`Component`] builds its element in two phases: [`Component::create_element`]
//! creates the node (running and attaching any child components), then
//! [`Component::initialize`] paints its first state. [`run`] performs both and hands
//! back a [`Mounted`] component, which is the only way to reach the element.
use std::ops::{Deref, DerefMut};

pub use self::{
    board::GameBoardComponent,
    cell::{BoardCellComponent, CellState},
    document::{Class, Document, Node, NodeId, Tag},
    errors::ViewError,
    game::GameComponent,
};

mod board;
mod cell;
mod document;
mod errors;
mod game;

/// A widget that renders into a [`Document`].
pub trait Component {
    /// Create this component's element, including the elements of its children.
    fn create_element(&mut self, doc: &mut Document) -> Result<NodeId, ViewError>;

    /// Paint the first state into the freshly created element.
    fn initialize(&mut self, doc: &mut Document, element: NodeId) -> Result<(), ViewError> {
        let _ = (doc, element);
        Ok(())
    }
}

/// A component whose element has been created and initialized.
#[derive(Debug)]
pub struct Mounted<C> {
    component: C,
    element: NodeId,
}

impl<C> Mounted<C> {
    /// The component's root element.
    pub fn element(&self) -> NodeId {
        self.element
    }
}

impl<C> Deref for Mounted<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.component
    }
}

impl<C> DerefMut for Mounted<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

/// Build and initialize a component in the given document.
pub fn run<C: Component>(mut component: C, doc: &mut Document) -> Result<Mounted<C>, ViewError> {
    let element = component.create_element(doc)?;
    component.initialize(doc, element)?;
    Ok(Mounted { component, element })
}

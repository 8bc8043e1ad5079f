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
//! Composition of model, controller and view into a running game.
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use anyhow::anyhow;
use log::info;

use crate::{
    config::GameConfig,
    controller::{CellLocation, GameController},
    model::{GameEvent, GameModel, Observer, ObserverId, ShotResult},
    view::{self, CellState, Document, GameComponent, Mounted, NodeId},
    Error,
};

/// Keeps the game view in sync with the model.
struct ViewObserver {
    view: Rc<RefCell<Mounted<GameComponent>>>,
    document: Rc<RefCell<Document>>,
}

impl Observer for ViewObserver {
    fn notify(&self, event: &GameEvent) -> anyhow::Result<()> {
        let mut view = self
            .view
            .try_borrow_mut()
            .map_err(|_| anyhow!("game view is busy"))?;
        let mut doc = self
            .document
            .try_borrow_mut()
            .map_err(|_| anyhow!("document is busy"))?;
        view.model_observer(&mut doc, event)?;
        Ok(())
    }
}

/// A game wired to a document: clicks on cell nodes become shots, and shot events
/// repaint the clicked cells.
pub struct App {
    document: Rc<RefCell<Document>>,
    model: Rc<RefCell<GameModel>>,
    controller: GameController,
    view: Rc<RefCell<Mounted<GameComponent>>>,
    view_observer: ObserverId,
}

/// Build a game from `config` and mount its view under `container`.
pub fn launch(
    document: Rc<RefCell<Document>>,
    container: NodeId,
    config: &GameConfig,
) -> Result<App, Error> {
    let model = config.build()?;
    App::mount(document, container, model)
}

impl App {
    /// Mount a view of an existing model under `container` and subscribe it to the
    /// model's events.
    pub fn mount(
        document: Rc<RefCell<Document>>,
        container: NodeId,
        model: GameModel,
    ) -> Result<Self, Error> {
        let view = {
            let mut doc = document.borrow_mut();
            let view = view::run(GameComponent::new(&model), &mut doc)?;
            doc.append_child(container, view.element())?;
            view
        };
        info!(
            "mounted game with {} board(s) under {:?}",
            model.board_count(),
            container
        );
        let model = Rc::new(RefCell::new(model));
        let view = Rc::new(RefCell::new(view));
        let view_observer = model.borrow_mut().add_observer(Rc::new(ViewObserver {
            view: view.clone(),
            document: document.clone(),
        }));
        Ok(Self {
            controller: GameController::new(model.clone()),
            document,
            model,
            view,
            view_observer,
        })
    }

    /// Handle a click on `node`. Nodes that are not cells are ignored.
    pub fn click(&self, node: NodeId) -> Result<Option<ShotResult>, Error> {
        let target = self.document.borrow().click_target(node)?;
        match target {
            Some(location) => Ok(self.controller.cell_click_handler(location)?),
            None => Ok(None),
        }
    }

    /// Shoot at a location directly, as if its cell had been clicked.
    pub fn shoot(&self, location: CellLocation) -> Result<Option<ShotResult>, Error> {
        Ok(self.controller.cell_click_handler(location)?)
    }

    /// Element of the cell view at the given address.
    pub fn cell_element(&self, board_number: usize, row: usize, column: usize) -> Result<NodeId, Error> {
        let view = self.view.borrow();
        let cell = view.board(board_number)?.cell(row, column)?;
        Ok(cell.element())
    }

    /// Display state of the cell view at the given address.
    pub fn cell_state(&self, board_number: usize, row: usize, column: usize) -> Result<CellState, Error> {
        let view = self.view.borrow();
        let cell = view.board(board_number)?.cell(row, column)?;
        Ok(cell.state())
    }

    /// Render the whole document as text.
    pub fn render(&self) -> Result<String, Error> {
        let doc = self.document.borrow();
        Ok(doc.render_text(doc.root())?)
    }

    /// The shared document.
    pub fn document(&self) -> &Rc<RefCell<Document>> {
        &self.document
    }

    /// Borrow the model. Observers may call this while handling an event; shots fired
    /// while the borrow is held fail with [`GameError::Busy`][crate::model::GameError::Busy].
    pub fn model(&self) -> Ref<'_, GameModel> {
        self.model.borrow()
    }

    /// The controller clicks are forwarded to.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Subscribe another observer to the model.
    pub fn add_observer(&self, observer: Rc<dyn Observer>) -> ObserverId {
        self.model.borrow_mut().add_observer(observer)
    }

    /// Unsubscribe an observer added with [`App::add_observer`].
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        id != self.view_observer && self.model.borrow_mut().remove_observer(id)
    }
}

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
//! The game as a whole: a fixed set of boards plus the observers watching them.
use std::{fmt, rc::Rc};

use log::{debug, warn};

use crate::model::{
    BoardModel, Coordinate, GameError, GameEvent, Observer, ObserverId, ShotFired, ShotResult,
};

/// An ordered, fixed set of boards. Shots are routed to a board by number and the
/// outcome is published to every registered [`Observer`].
pub struct GameModel {
    /// Boards of the game, numbered by position.
    boards: Vec<BoardModel>,

    /// Registered observers in registration order.
    observers: Vec<(ObserverId, Rc<dyn Observer>)>,

    /// Next id to hand out from `add_observer`.
    next_observer: u64,
}

impl GameModel {
    /// Create a game over the given pre-built boards.
    pub fn new(boards: Vec<BoardModel>) -> Self {
        Self {
            boards,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Number of boards in this game.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Get the board with the given number if it exists.
    pub fn board(&self, board_number: usize) -> Option<&BoardModel> {
        self.boards.get(board_number)
    }

    /// Get an iterator over all boards in order.
    pub fn boards(&self) -> impl Iterator<Item = &BoardModel> {
        self.boards.iter()
    }

    /// Returns true once every board has been defeated.
    pub fn is_over(&self) -> bool {
        self.boards.iter().all(BoardModel::is_defeated)
    }

    /// Register an observer. Registering the same observer twice is a no-op that returns
    /// the id from the first registration.
    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) -> ObserverId {
        if let Some((id, _)) = self
            .observers
            .iter()
            .find(|(_, existing)| same_observer(existing, &observer))
        {
            return *id;
        }
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister an observer. Returns true if it was registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Fire at a cell on the given board and publish the outcome.
    ///
    /// A shot on a fresh cell publishes [`GameEvent::ShotFired`], followed by
    /// [`GameEvent::ShipSunk`] and [`GameEvent::BoardDefeated`] when they apply. A repeated
    /// shot returns `Ok(None)` and publishes nothing.
    ///
    /// If any observer fails, the remaining observers still run and the last failure is
    /// returned as [`GameError::Observer`] after dispatch completes. The shot stays applied.
    ///
    /// Observers run while `self` is borrowed. When the model is shared through a
    /// `RefCell`, use [`GameModel::fire`] instead and publish after the borrow ends.
    pub fn shoot_at(
        &mut self,
        board_number: usize,
        row: usize,
        column: usize,
    ) -> Result<Option<ShotResult>, GameError> {
        match self.fire(board_number, row, column)? {
            Some((result, dispatch)) => {
                dispatch.publish()?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Apply a shot without notifying anyone.
    ///
    /// Returns the result together with a [`Dispatch`] holding the events of the shot and
    /// the observers registered at this point. Nothing is published until
    /// [`Dispatch::publish`] is called, so observers may borrow the model again.
    pub fn fire(
        &mut self,
        board_number: usize,
        row: usize,
        column: usize,
    ) -> Result<Option<(ShotResult, Dispatch)>, GameError> {
        let board_count = self.boards.len();
        let board = self
            .boards
            .get_mut(board_number)
            .ok_or(GameError::InvalidBoardNumber {
                board_number,
                board_count,
            })?;
        let result = match board.shoot_at(row, column)? {
            Some(result) => result,
            None => return Ok(None),
        };

        let mut events = vec![GameEvent::ShotFired(ShotFired {
            board_number,
            row,
            column,
            result,
        })];
        if result == ShotResult::Hit {
            if let Some((ship, model)) = board.ship_at(Coordinate::new(row, column))? {
                if model.is_sunk() {
                    events.push(GameEvent::ShipSunk { board_number, ship });
                    if board.is_defeated() {
                        events.push(GameEvent::BoardDefeated { board_number });
                    }
                }
            }
        }

        let dispatch = Dispatch {
            observers: self.observers.clone(),
            events,
        };
        Ok(Some((result, dispatch)))
    }
}

/// Events of an applied shot, paired with the observers that should receive them.
#[must_use = "observers are only notified by `publish`"]
pub struct Dispatch {
    observers: Vec<(ObserverId, Rc<dyn Observer>)>,
    events: Vec<GameEvent>,
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("observers", &self.observers.len())
            .field("events", &self.events)
            .finish()
    }
}

impl Dispatch {
    /// Events that will be published, in order.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Deliver each event to every observer.
    ///
    /// Every observer sees every event even if some fail. The last failure is returned
    /// as [`GameError::Observer`]; earlier ones are logged and dropped.
    pub fn publish(self) -> Result<(), GameError> {
        let mut last_err = None;
        for event in &self.events {
            debug!(
                "publishing {} on board {} to {} observer(s)",
                event.name(),
                event.board_number(),
                self.observers.len()
            );
            for (id, observer) in &self.observers {
                if let Err(err) = observer.notify(event) {
                    warn!("observer {:?} failed on {}: {}", id, event.name(), err);
                    if let Some(dropped) = last_err.replace(err) {
                        debug!("dropping earlier observer error: {}", dropped);
                    }
                }
            }
        }
        match last_err {
            Some(err) => Err(GameError::Observer(err)),
            None => Ok(()),
        }
    }
}

/// Compare two observers by allocation, ignoring vtable identity.
fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

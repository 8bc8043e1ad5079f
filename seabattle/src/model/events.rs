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
//! Events published by [`GameModel`][crate::model::GameModel] and the observers that
//! receive them.
use crate::model::{ShipId, ShotResult};

/// Payload of a [`GameEvent::ShotFired`] event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotFired {
    /// Board the shot was fired at.
    pub board_number: usize,
    /// Row of the cell that was shot.
    pub row: usize,
    /// Column of the cell that was shot.
    pub column: usize,
    /// Whether the shot hit a ship.
    pub result: ShotResult,
}

/// Something that happened in the game.
///
/// New kinds may be added, so observers should ignore kinds they do not handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum GameEvent {
    /// A shot landed on a fresh cell.
    ShotFired(ShotFired),
    /// The last intact cell of a ship was hit.
    ShipSunk {
        /// Board the ship is on.
        board_number: usize,
        /// The ship that was sunk.
        ship: ShipId,
    },
    /// Every ship on a board has been sunk.
    BoardDefeated {
        /// The board that was cleared.
        board_number: usize,
    },
}

impl GameEvent {
    /// Name of the event type.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::ShotFired(_) => "shotFired",
            GameEvent::ShipSunk { .. } => "shipSunk",
            GameEvent::BoardDefeated { .. } => "boardDefeated",
        }
    }

    /// Number of the board this event concerns.
    pub fn board_number(&self) -> usize {
        match *self {
            GameEvent::ShotFired(ShotFired { board_number, .. })
            | GameEvent::ShipSunk { board_number, .. }
            | GameEvent::BoardDefeated { board_number } => board_number,
        }
    }
}

/// Receiver of [`GameEvent`]s.
///
/// Observers are called synchronously once the shot has been applied. When the shot
/// goes through [`GameController`][crate::GameController], the model is no longer
/// borrowed at that point, so observers may read the game.
pub trait Observer {
    /// Handle a single event. A returned error is reported to whoever fired the shot,
    /// but does not stop other observers from running.
    fn notify(&self, event: &GameEvent) -> anyhow::Result<()>;
}

impl<F> Observer for F
where
    F: Fn(&GameEvent) -> anyhow::Result<()>,
{
    fn notify(&self, event: &GameEvent) -> anyhow::Result<()> {
        self(event)
    }
}

/// Handle returned when registering an observer, used to unsubscribe it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObserverId(pub(crate) u64);

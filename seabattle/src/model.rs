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
//! The game model: cells, ships, boards and the game that publishes shot events.
//!
//! Boards own their cells and ships. Cells refer back to their ship by [`ShipId`], an
//! index into the board's ship table.

pub use self::{
    board::{BoardModel, Orientation, ShipPlacement, ShotResult},
    cell::CellModel,
    coordinate::Coordinate,
    errors::{GameError, ModelError},
    events::{GameEvent, Observer, ObserverId, ShotFired},
    game::{Dispatch, GameModel},
    ship::{ShipId, ShipModel},
};

mod board;
mod cell;
mod coordinate;
mod errors;
mod events;
mod game;
mod ship;

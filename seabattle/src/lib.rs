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
//! Battleship driven by clicks on a rendered board.
//!
//! The crate is split into three layers:
//!
//! - [`model`]: cells, ships and boards, and the [`GameModel`] that routes shots to
//!   boards and publishes [`GameEvent`]s to observers.
//! - [`controller`]: [`GameController`] turns a clicked [`CellLocation`] into a shot.
//! - [`view`]: components that render into a [`Document`] and repaint cells when the
//!   model reports a shot.
//!
//! [`launch`] composes all three under a container node of a caller-owned document.
use thiserror::Error;

pub use crate::{
    app::{launch, App},
    config::{ConfigError, GameConfig},
    controller::{CellLocation, GameController},
    model::{GameEvent, GameModel, Observer, ObserverId, ShotResult},
    view::Document,
};

mod app;
pub mod config;
pub mod controller;
pub mod model;
pub mod view;

/// Any error raised while building or playing a game.
#[derive(Debug, Error)]
pub enum Error {
    /// The game configuration is unusable.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// A board rejected an operation.
    #[error(transparent)]
    Model(#[from] model::ModelError),

    /// The game rejected a shot or an observer failed.
    #[error(transparent)]
    Game(#[from] model::GameError),

    /// A view operation failed.
    #[error(transparent)]
    View(#[from] view::ViewError),
}

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
//! Errors raised by view components and the document they render into.
use thiserror::Error;

use crate::view::{CellState, NodeId};

/// Reason a view operation was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ViewError {
    /// The string does not name a cell display state.
    #[error("invalid cell state {0:?}")]
    InvalidState(String),

    /// Cells only move from unknown to hit or miss, never back or across.
    #[error("cell cannot change from {from} to {to}")]
    InvalidTransition {
        /// State the cell is in.
        from: CellState,
        /// State that was requested.
        to: CellState,
    },

    /// The row or column is outside of the board view.
    #[error("invalid cell address ({row}, {column}) for a {size}x{size} board view")]
    InvalidCellAddress {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Side length of the board view.
        size: usize,
    },

    /// No board view exists for the board number. The view is out of sync with the model.
    #[error("no board view for board number {0}")]
    BoardViewNotFound(usize),

    /// The node id does not belong to this document.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// Attaching the child would make a node its own ancestor.
    #[error("cannot attach {child:?} under {parent:?}")]
    InvalidHierarchy {
        /// Node that was to receive the child.
        parent: NodeId,
        /// Node that was to be attached.
        child: NodeId,
    },
}

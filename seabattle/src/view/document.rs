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
//! Retained element tree that components render into.
//!
//! A [`Document`] is an arena of [`Node`]s addressed by [`NodeId`]. Components create
//! their elements here and keep the ids, so later updates touch only the affected node.
use enumflags2::BitFlags;

use crate::{controller::CellLocation, view::ViewError};

/// Style classes that can be applied to a node.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Class {
    /// Root element of a game view.
    Game = 0b0000_0001,
    /// A board grid.
    Board = 0b0000_0010,
    /// One row of a board grid.
    Row = 0b0000_0100,
    /// One cell of a board grid.
    Cell = 0b0000_1000,
    /// A cell that has not been shot.
    Unknown = 0b0001_0000,
    /// A cell where a shot struck a ship.
    Hit = 0b0010_0000,
    /// A cell where a shot landed in open water.
    Miss = 0b0100_0000,
    /// Text heading of a board.
    Caption = 0b1000_0000,
}

impl Class {
    /// All classes, in declaration order.
    pub const ALL: &'static [Class] = &[
        Class::Game,
        Class::Board,
        Class::Row,
        Class::Cell,
        Class::Unknown,
        Class::Hit,
        Class::Miss,
        Class::Caption,
    ];

    /// Style name of the class.
    pub fn name(self) -> &'static str {
        match self {
            Class::Game => "game",
            Class::Board => "board",
            Class::Row => "row",
            Class::Cell => "cell",
            Class::Unknown => "unknown",
            Class::Hit => "hit",
            Class::Miss => "miss",
            Class::Caption => "caption",
        }
    }
}

/// Kind of element a node represents.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tag {
    /// Generic container.
    Div,
    /// A grid of rows.
    Table,
    /// A row inside a table.
    Row,
    /// A cell inside a row.
    Cell,
    /// A line of heading text.
    Caption,
}

/// Handle to a node in a [`Document`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

/// One element of the tree.
#[derive(Debug, Clone)]
pub struct Node {
    tag: Tag,
    classes: BitFlags<Class>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    click_target: Option<CellLocation>,
}

impl Node {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: BitFlags::empty(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            click_target: None,
        }
    }

    /// Kind of this element.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Style classes currently applied.
    pub fn classes(&self) -> BitFlags<Class> {
        self.classes
    }

    /// Text content of this node, not including children.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parent of this node if it is attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children of this node in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Space-separated class names, like a `class` attribute.
    pub fn class_names(&self) -> String {
        Class::ALL
            .iter()
            .filter(|class| self.classes.contains(**class))
            .map(|class| class.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Arena of nodes with a single root container.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only an empty root container.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Tag::Div)],
        }
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: Tag) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node, ViewError> {
        self.nodes.get(id.0).ok_or(ViewError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ViewError> {
        self.nodes.get_mut(id.0).ok_or(ViewError::UnknownNode(id))
    }

    /// Attach `child` as the last child of `parent`, detaching it from any previous
    /// parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), ViewError> {
        self.node(child)?;
        // Walk up from the parent to make sure the child is not one of its ancestors.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(ViewError::InvalidHierarchy { parent, child });
            }
            cursor = self.node(id)?.parent;
        }
        if let Some(old) = self.node(child)?.parent {
            self.node_mut(old)?.children.retain(|c| *c != child);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Replace the text content of a node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), ViewError> {
        self.node_mut(id)?.text = text.into();
        Ok(())
    }

    /// Replace the style classes of a node.
    pub fn set_classes(
        &mut self,
        id: NodeId,
        classes: impl Into<BitFlags<Class>>,
    ) -> Result<(), ViewError> {
        self.node_mut(id)?.classes = classes.into();
        Ok(())
    }

    /// Make a node clickable, reporting `location` when clicked.
    pub fn set_click_target(&mut self, id: NodeId, location: CellLocation) -> Result<(), ViewError> {
        self.node_mut(id)?.click_target = Some(location);
        Ok(())
    }

    /// Where a click on the node lands, if the node is clickable.
    pub fn click_target(&self, id: NodeId) -> Result<Option<CellLocation>, ViewError> {
        Ok(self.node(id)?.click_target)
    }

    /// Render the subtree under `id` as plain text.
    pub fn render_text(&self, id: NodeId) -> Result<String, ViewError> {
        let mut out = String::new();
        self.render_into(id, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, id: NodeId, out: &mut String) -> Result<(), ViewError> {
        let node = self.node(id)?;
        match node.tag {
            Tag::Table => self.render_table(node, out)?,
            Tag::Caption => {
                out.push_str(&node.text);
                out.push('\n');
            }
            // Rows and cells only make sense inside a table; render their text inline.
            Tag::Row | Tag::Cell => out.push_str(&node.text),
            Tag::Div => {
                if !node.text.is_empty() {
                    out.push_str(&node.text);
                    out.push('\n');
                }
                for (i, child) in node.children.iter().enumerate() {
                    if i > 0 && self.node(*child)?.tag == Tag::Div {
                        out.push('\n');
                    }
                    self.render_into(*child, out)?;
                }
            }
        }
        Ok(())
    }

    /// Render a grid with row and column numbers, in the same layout as the game
    /// prints boards.
    fn render_table(&self, table: &Node, out: &mut String) -> Result<(), ViewError> {
        let columns = match table.children.first() {
            Some(row) => self.node(*row)?.children.len(),
            None => 0,
        };
        out.push_str("   ");
        for i in 0..columns {
            out.push_str(&format!("{:^4}", i));
        }
        out.push('\n');
        for (i, row) in table.children.iter().enumerate() {
            out.push_str(&format!("{:>2} ", i));
            for cell in self.node(*row)?.children.iter() {
                let text = self.node(*cell)?.text.as_str();
                let text = if text.is_empty() { "~~" } else { text };
                out.push_str(&format!("{:^4}", text));
            }
            out.push('\n');
        }
        Ok(())
    }
}

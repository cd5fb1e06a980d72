//! files::node
//!
//! Node identifiers and the closed set of node kinds.

use std::collections::BTreeSet;

/// Index of a node inside a [`FileTree`](super::FileTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a file node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileState {
    Open,
    #[default]
    Closed,
    Deleted,
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileState::Open => "open",
            FileState::Closed => "closed",
            FileState::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}

/// What a node is. Every traversal matches on this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { state: FileState },
    Directory { children: BTreeSet<NodeId> },
    Link { target: Option<NodeId> },
}

impl NodeKind {
    /// Short label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::File { .. } => "file",
            NodeKind::Directory { .. } => "directory",
            NodeKind::Link { .. } => "link",
        }
    }
}

/// A node as stored in the arena.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) base_name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

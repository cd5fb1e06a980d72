//! files::tree
//!
//! An in-memory tree of directories, files and links.
//!
//! # Architecture
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Each node keeps a
//! parent pointer; directories keep the set of their children. Nodes are never
//! freed, so ids stay valid for the life of the tree.
//!
//! # Invariants
//!
//! - The root is a directory and has no parent
//! - Every other node has exactly one parent, which is a directory listing it
//! - Parent pointers never form a cycle (moves into a descendant are refused)

use std::collections::{BTreeSet, HashSet, VecDeque};

use thiserror::Error;

use super::node::{FileState, Node, NodeId, NodeKind};
use crate::core::contract::ContractError;
use crate::core::escape::escape_component;
use crate::core::name::{Name, StringName};
use crate::core::types::Delimiter;

/// Errors from tree operations.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {id} is a {actual}, expected a {expected}")]
    WrongKind {
        id: NodeId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("link {0} has no target")]
    BrokenLink(NodeId),

    #[error("links starting at {0} form a cycle")]
    LinkCycle(NodeId),

    #[error("file {id} is {actual}, expected {expected}")]
    InvalidFileState {
        id: NodeId,
        expected: FileState,
        actual: FileState,
    },

    #[error("search from {start} failed")]
    SearchFailed {
        start: NodeId,
        #[source]
        source: Box<TreeError>,
    },

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("name error: {0}")]
    Name(#[from] ContractError),
}

/// A tree of named nodes rooted at a directory.
///
/// # Example
///
/// ```
/// use hiername::files::FileTree;
/// use hiername::core::name::Name;
///
/// let mut tree = FileTree::new();
/// let usr = tree.add_directory(tree.root(), "usr").unwrap();
/// let bin = tree.add_directory(usr, "bin").unwrap();
/// let ls = tree.add_file(bin, "ls").unwrap();
///
/// assert_eq!(tree.full_name(ls).unwrap().as_data_string(), "/usr/bin/ls");
/// assert!(tree.find_nodes("bin").unwrap().contains(&bin));
/// ```
#[derive(Debug, Clone)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    /// Delimiter of the names produced by [`FileTree::full_name`].
    pub const DELIMITER: char = '/';

    /// Create a tree holding only a root directory with an empty base name.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                base_name: String::new(),
                parent: None,
                kind: NodeKind::Directory {
                    children: BTreeSet::new(),
                },
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn add_directory(&mut self, parent: NodeId, base_name: &str) -> Result<NodeId, TreeError> {
        self.add(
            parent,
            base_name,
            NodeKind::Directory {
                children: BTreeSet::new(),
            },
        )
    }

    pub fn add_file(&mut self, parent: NodeId, base_name: &str) -> Result<NodeId, TreeError> {
        self.add(
            parent,
            base_name,
            NodeKind::File {
                state: FileState::default(),
            },
        )
    }

    /// Add a link, optionally pointing at `target` already.
    pub fn add_link(
        &mut self,
        parent: NodeId,
        base_name: &str,
        target: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        if let Some(target) = target {
            self.node(target)?;
        }
        self.add(parent, base_name, NodeKind::Link { target })
    }

    fn add(&mut self, parent: NodeId, base_name: &str, kind: NodeKind) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        match &mut self.node_mut(parent)?.kind {
            NodeKind::Directory { children } => {
                children.insert(id);
            }
            other => {
                return Err(TreeError::WrongKind {
                    id: parent,
                    expected: "directory",
                    actual: other.label(),
                })
            }
        }

        log::trace!("adding {} {:?} as {} under {}", kind.label(), base_name, id, parent);
        self.nodes.push(Node {
            base_name: base_name.to_string(),
            parent: Some(parent),
            kind,
        });
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Result<&NodeKind, TreeError> {
        Ok(&self.node(id)?.kind)
    }

    /// The parent directory, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// Children of a directory in id order.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        match &self.node(id)?.kind {
            NodeKind::Directory { children } => Ok(children.iter().copied().collect()),
            other => Err(TreeError::WrongKind {
                id,
                expected: "directory",
                actual: other.label(),
            }),
        }
    }

    /// Follow links until a non-link node is reached.
    fn resolve(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let mut current = id;
        for _ in 0..=self.nodes.len() {
            match &self.node(current)?.kind {
                NodeKind::Link { target: Some(next) } => current = *next,
                NodeKind::Link { target: None } => return Err(TreeError::BrokenLink(current)),
                NodeKind::File { .. } | NodeKind::Directory { .. } => return Ok(current),
            }
        }
        Err(TreeError::LinkCycle(id))
    }

    /// The node's base name. Links report the base name of what they point
    /// at.
    pub fn base_name(&self, id: NodeId) -> Result<String, TreeError> {
        let resolved = self.resolve(id)?;
        Ok(self.node(resolved)?.base_name.clone())
    }

    /// Rename a node. Renaming a link renames its target.
    pub fn rename(&mut self, id: NodeId, base_name: &str) -> Result<(), TreeError> {
        let resolved = self.resolve(id)?;
        self.node_mut(resolved)?.base_name = base_name.to_string();
        Ok(())
    }

    pub fn link_target(&self, link: NodeId) -> Result<Option<NodeId>, TreeError> {
        match &self.node(link)?.kind {
            NodeKind::Link { target } => Ok(*target),
            other => Err(TreeError::WrongKind {
                id: link,
                expected: "link",
                actual: other.label(),
            }),
        }
    }

    pub fn set_link_target(&mut self, link: NodeId, target: NodeId) -> Result<(), TreeError> {
        self.node(target)?;
        match &mut self.node_mut(link)?.kind {
            NodeKind::Link { target: slot } => {
                *slot = Some(target);
                Ok(())
            }
            other => Err(TreeError::WrongKind {
                id: link,
                expected: "link",
                actual: other.label(),
            }),
        }
    }

    /// Move `id` into the directory `to`.
    ///
    /// # Errors
    ///
    /// `InvalidMove` when moving the root or moving a directory into itself
    /// or one of its descendants; `WrongKind` when `to` is not a directory.
    pub fn move_node(&mut self, id: NodeId, to: NodeId) -> Result<(), TreeError> {
        let old_parent = self
            .parent(id)?
            .ok_or_else(|| TreeError::InvalidMove("the root cannot be moved".to_string()))?;
        self.children(to)?;

        let mut ancestor = Some(to);
        while let Some(current) = ancestor {
            if current == id {
                return Err(TreeError::InvalidMove(format!(
                    "{id} cannot be moved into its own subtree"
                )));
            }
            ancestor = self.parent(current)?;
        }

        if let NodeKind::Directory { children } = &mut self.node_mut(old_parent)?.kind {
            children.remove(&id);
        }
        if let NodeKind::Directory { children } = &mut self.node_mut(to)?.kind {
            children.insert(id);
        }
        self.node_mut(id)?.parent = Some(to);

        log::debug!("moved {} from {} to {}", id, old_parent, to);
        Ok(())
    }

    /// The full name of a node: its parent's full name with its own base
    /// name appended.
    ///
    /// The root's full name is its base name as the only component, so with
    /// the default empty root every other full name starts with `/`. Base
    /// names containing `/` are escaped and stay one component.
    pub fn full_name(&self, id: NodeId) -> Result<StringName, TreeError> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            chain.push(node.base_name.as_str());
            current = node.parent;
        }

        let delimiter = Delimiter::from_char(Self::DELIMITER)?;
        let mut names = chain.into_iter().rev();
        let root = names.next().unwrap_or_default();
        let mut name = StringName::with_delimiter(escape_component(root, Self::DELIMITER), delimiter)?;
        for base_name in names {
            name = name.append(&escape_component(base_name, Self::DELIMITER))?;
        }
        Ok(name)
    }

    /// All nodes reachable from the root whose base name is `base_name`.
    pub fn find_nodes(&self, base_name: &str) -> Result<BTreeSet<NodeId>, TreeError> {
        self.find_nodes_from(self.root(), base_name)
    }

    /// All nodes reachable from `start` whose base name is `base_name`.
    ///
    /// Directories are searched through their children and links through
    /// their target. Each node is visited once.
    ///
    /// # Errors
    ///
    /// `UnknownNode` if `start` is not in the tree. `SearchFailed` wrapping
    /// `BrokenLink` or `LinkCycle` if the traversal reaches a bad link.
    pub fn find_nodes_from(
        &self,
        start: NodeId,
        base_name: &str,
    ) -> Result<BTreeSet<NodeId>, TreeError> {
        self.node(start)?;
        self.search(start, base_name)
            .map_err(|e| TreeError::SearchFailed {
                start,
                source: Box::new(e),
            })
    }

    fn search(&self, start: NodeId, base_name: &str) -> Result<BTreeSet<NodeId>, TreeError> {
        let mut matches = BTreeSet::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if self.base_name(current)? == base_name {
                matches.insert(current);
            }
            match &self.node(current)?.kind {
                NodeKind::Directory { children } => queue.extend(children.iter().copied()),
                NodeKind::Link { target: Some(target) } => queue.push_back(*target),
                NodeKind::Link { target: None } => return Err(TreeError::BrokenLink(current)),
                NodeKind::File { .. } => {}
            }
        }

        Ok(matches)
    }

    pub fn file_state(&self, file: NodeId) -> Result<FileState, TreeError> {
        match &self.node(file)?.kind {
            NodeKind::File { state } => Ok(*state),
            other => Err(TreeError::WrongKind {
                id: file,
                expected: "file",
                actual: other.label(),
            }),
        }
    }

    /// Open a closed file.
    pub fn open(&mut self, file: NodeId) -> Result<(), TreeError> {
        self.transition(file, FileState::Closed, FileState::Open)
    }

    /// Close an open file.
    pub fn close(&mut self, file: NodeId) -> Result<(), TreeError> {
        self.transition(file, FileState::Open, FileState::Closed)
    }

    /// Mark a closed file deleted. The node stays in the tree.
    pub fn delete(&mut self, file: NodeId) -> Result<(), TreeError> {
        self.transition(file, FileState::Closed, FileState::Deleted)
    }

    fn transition(
        &mut self,
        file: NodeId,
        expected: FileState,
        next: FileState,
    ) -> Result<(), TreeError> {
        let actual = self.file_state(file)?;
        if actual != expected {
            return Err(TreeError::InvalidFileState {
                id: file,
                expected,
                actual,
            });
        }
        if let NodeKind::File { state } = &mut self.node_mut(file)?.kind {
            *state = next;
        }
        Ok(())
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new()
    }
}

//! files
//!
//! A small directory tree whose nodes are identified by hierarchical names.
//!
//! # Modules
//!
//! - [`node`] - Node ids, node kinds and file states
//! - [`tree`] - [`FileTree`], the arena holding every node
//!
//! # Naming
//!
//! Every node has a base name. Its full name is a
//! [`StringName`](crate::core::name::StringName) delimited by `/`, built by
//! appending base names from the root down. Links are transparent for base
//! names: reading or renaming a link reads or renames its target.

pub mod node;
pub mod tree;

pub use node::{FileState, NodeId, NodeKind};
pub use tree::{FileTree, TreeError};

//! hiername - hierarchical names with escape-aware delimiters
//!
//! A name is an ordered list of components joined by a single-character
//! delimiter, such as `oss.cs.fau.de` or `/usr/local/bin`. A delimiter that
//! belongs inside a component is escaped with `\`.
//!
//! # Architecture
//!
//! - [`core`] - Delimiters, escaping, the [`Name`](core::name::Name) contract
//!   and its representations, contract errors, configuration
//! - [`files`] - A directory tree that hands out full names for its nodes
//!
//! # Correctness Invariants
//!
//! 1. Every stored component is well-formed for its name's delimiter
//! 2. Both representations agree on components, rendering, equality and hash
//! 3. Edits return a new name; a failed edit leaves nothing changed
//! 4. Every contract violation surfaces as a typed
//!    [`ContractError`](core::contract::ContractError)

pub mod core;
pub mod files;

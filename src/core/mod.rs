//! core
//!
//! Core domain types for hierarchical names.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Delimiter and the fixed characters
//! - [`escape`] - Splitting and joining data strings around escapes
//! - [`contract`] - Pre-, postcondition and invariant errors
//! - [`name`] - The Name contract and its representations
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid delimiters at construction time
//! - Schemas are strict and self-describing
//! - Contract checks are deterministic and never panic

pub mod config;
pub mod contract;
pub mod escape;
pub mod name;
pub mod types;

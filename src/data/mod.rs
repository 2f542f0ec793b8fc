//! Static data tables
//!
//! This module contains the fixed, read-only tables the engine is driven by:
//! - Symbol maps between the natural, LaTeX, and plain dialects
//! - The command-pattern registry used by repair and segmentation

pub mod maps;
pub mod patterns;

pub use patterns::{Arity, CommandPattern, SymbolMapping, COMMAND_REGISTRY, SYMBOL_TABLE};

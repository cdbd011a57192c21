//! # Types
//!
//! Shared types used by both the generator and the runtime loader.
//!
//! The generator works with [`Symbol`]s collected into a [`SymbolSet`]; the
//! runtime stores one [`ProcAddress`] per symbol.

pub mod address;
pub mod symbols;

// Re-export all public types
pub use address::ProcAddress;
pub use symbols::{Symbol, SymbolSet, VENDOR_SUFFIXES};

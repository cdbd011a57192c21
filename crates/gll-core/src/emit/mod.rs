//! # Scaffold Emission
//!
//! Generates the Rust source that downstream code compiles against.
//!
//! Two artifacts are produced from one [`SymbolSet`]:
//!
//! - **Declarations** ([`DECLARATIONS_FILE`]): one typed accessor per entry
//!   point on the generated `GllProcs` handle. The accessor carries the entry
//!   point's own name, so `gl.glClear()` reads exactly like the C call it
//!   replaces and routes through the slot.
//! - **Definitions** ([`DEFINITIONS_FILE`]): the slot storage (`GllProcs`,
//!   one `ProcAddress` field per entry point), the ordered name table and the
//!   bulk-resolve routine (`ProcTable::load_with`).
//!
//! Both artifacts are meant to be included into the same module, next to the
//! `PFN*PROC` function pointer aliases of the API bindings:
//!
//! ```rust,ignore
//! mod gl {
//!     use crate::bindings::*; // PFNGLCLEARPROC and friends
//!
//!     include!(concat!(env!("OUT_DIR"), "/gll_procs.rs"));
//!     include!(concat!(env!("OUT_DIR"), "/gll_api.rs"));
//! }
//! ```
//!
//! ## Consistency
//!
//! Both templates walk the same ordered set, so every slot has exactly one
//! accessor, one name-table entry and one line in the bulk-resolve routine.

mod template;

use crate::symbols::ExtractMode;
use crate::types::SymbolSet;

/// File name of the declaration artifact
pub const DECLARATIONS_FILE: &str = "gll_api.rs";

/// File name of the definition artifact
pub const DEFINITIONS_FILE: &str = "gll_procs.rs";

/// The two generated artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold
{
    /// Typed accessor per entry point
    pub declarations: String,
    /// Slot storage, name table and bulk-resolve routine
    pub definitions: String,
}

/// Renders a [`SymbolSet`] into a [`Scaffold`].
#[derive(Debug, Clone)]
pub struct ScaffoldEmitter
{
    source_name: String,
    mode: ExtractMode,
}

impl ScaffoldEmitter
{
    /// `source_name` is the header the symbols came from; it only appears in
    /// the generated banner.
    pub fn new(source_name: impl Into<String>, mode: ExtractMode) -> Self
    {
        Self {
            source_name: source_name.into(),
            mode,
        }
    }

    pub fn emit(&self, symbols: &SymbolSet) -> Scaffold
    {
        let banner = template::banner(&self.source_name, self.mode);
        let scaffold = Scaffold {
            declarations: template::declarations(&banner, symbols),
            definitions: template::definitions(&banner, symbols),
        };

        tracing::debug!(
            symbols = symbols.len(),
            declarations_bytes = scaffold.declarations.len(),
            definitions_bytes = scaffold.definitions.len(),
            "Emitted scaffold"
        );

        scaffold
    }
}

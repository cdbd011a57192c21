//! # Symbol Extraction
//!
//! Turns API header text into the ordered set of entry points that the
//! scaffolding and the runtime loader work with.
//!
//! ## Usage
//!
//! ```rust
//! use gll_core::symbols::{ExtractMode, SymbolExtractor};
//!
//! let header = "\
//! GLAPI void APIENTRY glClear (GLbitfield mask);
//! GLAPI void APIENTRY glFooEXT (void);
//! ";
//!
//! let core = SymbolExtractor::new(ExtractMode::Core).extract(header);
//! assert_eq!(core.names(), ["glClear"]);
//!
//! let all = SymbolExtractor::new(ExtractMode::WithExtensions).extract(header);
//! assert_eq!(all.names(), ["glClear", "glFooEXT"]);
//! ```

pub mod extractor;

pub use extractor::{ExtractStats, SymbolExtractor};

/// Which entry points to keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode
{
    /// Core entry points only; vendor extension symbols are dropped (default)
    #[default]
    Core,
    /// Core and vendor extension entry points
    WithExtensions,
}

impl ExtractMode
{
    /// Map the `--ext` style flag onto a mode.
    pub fn from_flag(include_extensions: bool) -> Self
    {
        if include_extensions {
            ExtractMode::WithExtensions
        } else {
            ExtractMode::Core
        }
    }

    /// Whether vendor extension symbols are kept.
    pub fn includes_extensions(self) -> bool
    {
        matches!(self, ExtractMode::WithExtensions)
    }
}

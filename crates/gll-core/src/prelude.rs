//! Common module for library exports

pub use crate::emit::{Scaffold, ScaffoldEmitter};
pub use crate::error::{GllError, GllResult};
pub use crate::generate::{GenerateSummary, Generator, GeneratorConfig};
pub use crate::loader::{LoadReport, Loader, ProcTable, SlotTable};
pub use crate::platform::{DefaultStrategy, LibraryLoader, PlatformStrategy};
pub use crate::resolver::{PlatformResolver, ProcResolver, ResolverState};
pub use crate::source::{CachedSource, FileSource, HeaderSource};
pub use crate::symbols::{ExtractMode, SymbolExtractor};
pub use crate::types::{ProcAddress, Symbol, SymbolSet};

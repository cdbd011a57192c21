//! # Error Types
//!
//! General error handling for the generator and the runtime loader.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gll operations
///
/// Only two categories ever surface as an `Err`:
///
/// 1. **Generation errors**: HeaderNotFound, InvalidArgument, Io. These stop
///    the generation pipeline before any artifact is written.
/// 2. **Open errors**: OpenFailed. These are recoverable; the host
///    process keeps running and every slot stays null.
///
/// Header lines that don't declare an entry point and symbols that can't be
/// resolved are not errors at all. The first are skipped, the second leave
/// their slot null.
#[derive(Error, Debug)]
pub enum GllError
{
    /// The API header could not be found at the given locator
    ///
    /// This is fatal for generation: without the header there is no symbol
    /// set, so no partial artifacts are produced.
    #[error("Header not found: {}", .0.display())]
    HeaderNotFound(PathBuf),

    /// Invalid argument passed to a gll function
    ///
    /// Examples:
    /// - Output root that exists but is not a directory
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No usable combination of platform GL libraries could be opened
    ///
    /// `strategy` names the platform strategy that was attempted
    /// (`wgl`, `bundle`, `glvnd`), `reason` says what was missing.
    #[error("Failed to open GL libraries ({strategy}): {reason}")]
    OpenFailed
    {
        /// Strategy that attempted the open
        strategy: &'static str,
        /// What went wrong
        reason: String,
    },

    /// I/O error (reading headers, writing artifacts)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, GllError>`
///
/// ```rust
/// use gll_core::error::GllResult;
/// fn foo() -> GllResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type GllResult<T> = std::result::Result<T, GllError>;

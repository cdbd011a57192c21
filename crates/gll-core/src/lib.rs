//! # gll-core
//!
//! Symbol extraction, scaffold emission and runtime entry-point resolution
//! for the gll OpenGL loader.
//!
//! This crate provides both halves of the loader:
//! - **Generation**: scan `glcorearb.h`-style headers for entry points
//!   ([`symbols`]) and emit the Rust slot table and typed accessors that
//!   application code compiles against ([`emit`], [`generate`])
//! - **Runtime**: open the right platform GL libraries ([`platform`],
//!   [`resolver`]) and fill a slot table with entry-point addresses
//!   ([`loader`])
//!
//! ## Platform Support
//!
//! - **Windows**: `opengl32.dll` + `wglGetProcAddress`
//! - **macOS**: `OpenGL.framework`
//! - **Linux / BSD**: GLVND (`libOpenGL` + `libEGL`/`libGLX`) or legacy `libGL`
//!
//! ## Why unsafe code is needed
//!
//! Entry points are resolved as untyped addresses and only become callable
//! once reinterpreted as function pointers. That reinterpretation, and calling
//! the platform's `*GetProcAddress` functions, is inherently unsafe. It is
//! wrapped in [`types::ProcAddress::cast`] and the [`platform`] strategies.

#![allow(unsafe_code)] // Required for dlopen/dlsym results and GetProcAddress calls

pub mod emit;
pub mod error;
pub mod generate;
pub mod loader;
pub mod platform;
pub mod prelude;
pub mod resolver;
pub mod source;
pub mod symbols;
pub mod types;

// Re-export commonly used types
pub use error::{GllError, GllResult};
pub use loader::{LoadReport, Loader, ProcTable, SlotTable};
pub use resolver::{PlatformResolver, ProcResolver, ResolverState};
pub use types::{ProcAddress, Symbol, SymbolSet};

//! # Native Dynamic Loader
//!
//! [`LibraryLoader`] backed by the OS loader through `libloading`.
//!
//! - **Unix**: `dlopen(RTLD_LAZY | RTLD_LOCAL)`; probing adds `RTLD_NOLOAD`
//!   (from `libc`) so a library that isn't already mapped stays unloaded
//! - **Windows**: `LoadLibraryExW`; probing uses `GetModuleHandleExW`

use std::ffi::c_void;

use libloading::Library;

use super::LibraryLoader;
use crate::types::ProcAddress;

/// The process's own dynamic loader
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLoader;

impl LibraryLoader for NativeLoader
{
    type Library = Library;

    #[cfg(unix)]
    fn probe(&mut self, name: &str) -> Option<Library>
    {
        use libloading::os::unix::{Library as UnixLibrary, RTLD_LAZY, RTLD_LOCAL};

        // SAFETY: RTLD_NOLOAD never maps a new object, so no initialisers run.
        let library = unsafe { UnixLibrary::open(Some(name), RTLD_LAZY | RTLD_LOCAL | libc::RTLD_NOLOAD) };
        let loaded = library.ok().map(Library::from);
        tracing::trace!(library = name, loaded = loaded.is_some(), "Probed library");
        loaded
    }

    #[cfg(windows)]
    fn probe(&mut self, name: &str) -> Option<Library>
    {
        let loaded = libloading::os::windows::Library::open_already_loaded(name)
            .ok()
            .map(Library::from);
        tracing::trace!(library = name, loaded = loaded.is_some(), "Probed library");
        loaded
    }

    #[cfg(unix)]
    fn open(&mut self, name: &str) -> Option<Library>
    {
        use libloading::os::unix::{Library as UnixLibrary, RTLD_LAZY, RTLD_LOCAL};

        // SAFETY: GL libraries have no initialisers with preconditions on the caller.
        match unsafe { UnixLibrary::open(Some(name), RTLD_LAZY | RTLD_LOCAL) } {
            Ok(library) => {
                tracing::debug!(library = name, "Opened library");
                Some(library.into())
            }
            Err(err) => {
                tracing::debug!(library = name, error = %err, "Failed to open library");
                None
            }
        }
    }

    #[cfg(windows)]
    fn open(&mut self, name: &str) -> Option<Library>
    {
        // SAFETY: opengl32.dll has no initialisers with preconditions on the caller.
        match unsafe { Library::new(name) } {
            Ok(library) => {
                tracing::debug!(library = name, "Opened library");
                Some(library)
            }
            Err(err) => {
                tracing::debug!(library = name, error = %err, "Failed to open library");
                None
            }
        }
    }

    fn symbol(&self, library: &Library, symbol: &str) -> ProcAddress
    {
        // SAFETY: the symbol is read as an untyped address and never dereferenced here.
        match unsafe { library.get::<*mut c_void>(symbol.as_bytes()) } {
            Ok(address) => ProcAddress::from(*address),
            Err(_) => ProcAddress::NULL,
        }
    }

    fn close(&mut self, library: Library)
    {
        if let Err(err) = library.close() {
            // Best effort - the handle is gone either way
            tracing::warn!(error = %err, "Failed to close library");
        }
    }
}

//! # Linux and other Unix (GLVND / legacy libGL)
//!
//! A modern Linux process can reach GL through two ecosystems at once:
//!
//! - **GLVND**: the vendor-neutral dispatch library `libOpenGL.so.0` plus a
//!   window-system library, `libEGL.so.1` or `libGLX.so.1`
//! - **Legacy**: the combined `libGL.so.1`, which contains GL and GLX
//!
//! Loading the wrong one next to what the application already uses (e.g.
//! `libGL` into a process that talks EGL) breaks context creation, so the
//! choice is driven by what is already loaded:
//!
//! 1. `libEGL` or `libGLX` already loaded: open `libOpenGL` alone
//! 2. `libGL` already loaded: reuse it
//! 3. Open `libOpenGL` and `libEGL` together, both or neither
//! 4. Open `libGL`
//! 5. Give up
//!
//! The resolver function is then taken from `libEGL` (`eglGetProcAddress`),
//! `libGLX` (`glXGetProcAddressARB`) or, last, `libGL` itself.
//!
//! ## Probe limitation
//!
//! Probing asks the loader for the exact sonames above. A library loaded
//! under a different name (an unversioned `libEGL.so`, a vendor path) is not
//! seen, and the chain continues as if it were absent.

use std::fmt;

use super::{with_c_name, GetProcAddressFn, LibraryLoader, NativeLoader, PlatformStrategy};
use crate::error::{GllError, GllResult};
use crate::types::ProcAddress;

/// GLVND dispatch library
pub const LIB_OPENGL: &str = "libOpenGL.so.0";

/// EGL window-system library
pub const LIB_EGL: &str = "libEGL.so.1";

/// GLX window-system library (GLVND)
pub const LIB_GLX: &str = "libGLX.so.1";

/// Legacy combined GL + GLX library
pub const LIB_GL: &str = "libGL.so.1";

/// Resolver exported by [`LIB_EGL`]
pub const EGL_GET_PROC_ADDRESS: &str = "eglGetProcAddress";

/// Resolver exported by [`LIB_GLX`] and [`LIB_GL`]
pub const GLX_GET_PROC_ADDRESS: &str = "glXGetProcAddressARB";

/// Which branch of the open chain succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibrarySet
{
    /// `libOpenGL`, next to an `libEGL`/`libGLX` the process already had
    DispatchWithLoadedWindowing,
    /// The process's already loaded `libGL`
    LoadedLegacy,
    /// `libOpenGL` + `libEGL`, both opened by us
    DispatchWithEgl,
    /// `libGL`, opened by us
    Legacy,
}

impl LibrarySet
{
    /// Whether the GL handle is the dispatch library.
    pub fn is_dispatch(self) -> bool
    {
        matches!(self, LibrarySet::DispatchWithLoadedWindowing | LibrarySet::DispatchWithEgl)
    }
}

impl fmt::Display for LibrarySet
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let label = match self {
            LibrarySet::DispatchWithLoadedWindowing => "libOpenGL (window system already loaded)",
            LibrarySet::LoadedLegacy => "libGL (already loaded)",
            LibrarySet::DispatchWithEgl => "libOpenGL + libEGL",
            LibrarySet::Legacy => "libGL",
        };
        write!(f, "{label}")
    }
}

/// Probe-driven GLVND / legacy `libGL` strategy
pub struct GlvndStrategy<L: LibraryLoader = NativeLoader>
{
    loader: L,
    /// `libOpenGL` or `libGL`, depending on `set`
    gl: Option<L::Library>,
    egl: Option<L::Library>,
    glx: Option<L::Library>,
    set: Option<LibrarySet>,
    get_proc_address: Option<GetProcAddressFn>,
}

impl<L: LibraryLoader> GlvndStrategy<L>
{
    pub fn new(loader: L) -> Self
    {
        Self {
            loader,
            gl: None,
            egl: None,
            glx: None,
            set: None,
            get_proc_address: None,
        }
    }

    /// Branch selected by the last successful open.
    pub fn library_set(&self) -> Option<LibrarySet>
    {
        self.set
    }

    fn open_libraries(&mut self) -> Option<LibrarySet>
    {
        self.egl = self.loader.probe(LIB_EGL);
        if self.egl.is_none() {
            self.glx = self.loader.probe(LIB_GLX);
        }
        if self.egl.is_some() || self.glx.is_some() {
            if let Some(dispatch) = self.loader.open(LIB_OPENGL) {
                self.gl = Some(dispatch);
                return Some(LibrarySet::DispatchWithLoadedWindowing);
            }
            tracing::debug!("{LIB_OPENGL} unavailable next to the loaded window-system library");
            self.release();
        }

        if let Some(legacy) = self.loader.probe(LIB_GL) {
            self.gl = Some(legacy);
            return Some(LibrarySet::LoadedLegacy);
        }

        let dispatch = self.loader.open(LIB_OPENGL);
        let egl = self.loader.open(LIB_EGL);
        match (dispatch, egl) {
            (Some(dispatch), Some(egl)) => {
                self.gl = Some(dispatch);
                self.egl = Some(egl);
                return Some(LibrarySet::DispatchWithEgl);
            }
            (dispatch, egl) => {
                for library in [dispatch, egl].into_iter().flatten() {
                    self.loader.close(library);
                }
            }
        }

        if let Some(legacy) = self.loader.open(LIB_GL) {
            self.gl = Some(legacy);
            return Some(LibrarySet::Legacy);
        }

        None
    }

    fn find_get_proc_address(&self) -> Option<GetProcAddressFn>
    {
        let lookup = |library: &Option<L::Library>, symbol: &str| match library {
            Some(library) => self.loader.symbol(library, symbol),
            None => ProcAddress::NULL,
        };

        let address = lookup(&self.egl, EGL_GET_PROC_ADDRESS)
            .or_else(|| lookup(&self.glx, GLX_GET_PROC_ADDRESS))
            .or_else(|| lookup(&self.gl, GLX_GET_PROC_ADDRESS));

        // SAFETY: both resolvers are `void (*(const char *))(void)` with the C ABI.
        unsafe { address.cast() }
    }

    fn generic(&self, name: &str) -> ProcAddress
    {
        match self.get_proc_address {
            // SAFETY: the pointer was looked up under one of the two resolver names.
            Some(get_proc_address) => with_c_name(name, |c_name| ProcAddress::from(unsafe { get_proc_address(c_name) })),
            None => ProcAddress::NULL,
        }
    }

    fn release(&mut self)
    {
        self.get_proc_address = None;
        self.set = None;
        for library in [self.gl.take(), self.egl.take(), self.glx.take()].into_iter().flatten() {
            self.loader.close(library);
        }
    }
}

impl<L: LibraryLoader + Default> Default for GlvndStrategy<L>
{
    fn default() -> Self
    {
        Self::new(L::default())
    }
}

impl<L: LibraryLoader> PlatformStrategy for GlvndStrategy<L>
{
    fn name(&self) -> &'static str
    {
        "glvnd"
    }

    fn open(&mut self) -> GllResult<()>
    {
        self.release();

        let Some(set) = self.open_libraries() else {
            return Err(GllError::OpenFailed {
                strategy: self.name(),
                reason: format!("none of {LIB_OPENGL}, {LIB_EGL}, {LIB_GL} could be loaded"),
            });
        };

        let Some(get_proc_address) = self.find_get_proc_address() else {
            self.release();
            return Err(GllError::OpenFailed {
                strategy: self.name(),
                reason: format!("{set} exports neither {EGL_GET_PROC_ADDRESS} nor {GLX_GET_PROC_ADDRESS}"),
            });
        };

        tracing::debug!(libraries = %set, "Selected GL libraries");
        self.set = Some(set);
        self.get_proc_address = Some(get_proc_address);
        Ok(())
    }

    fn resolve(&self, name: &str) -> ProcAddress
    {
        let (Some(gl), Some(set)) = (&self.gl, self.set) else {
            return ProcAddress::NULL;
        };

        if set.is_dispatch() {
            self.loader.symbol(gl, name).or_else(|| self.generic(name))
        } else {
            self.generic(name).or_else(|| self.loader.symbol(gl, name))
        }
    }

    fn close(&mut self)
    {
        self.release();
    }
}

impl<L: LibraryLoader> Drop for GlvndStrategy<L>
{
    fn drop(&mut self)
    {
        self.release();
    }
}

//! # Platform Strategies
//!
//! Each platform ships its GL entry points through a different set of native
//! libraries. A [`PlatformStrategy`] knows which libraries to open, in which
//! order, and how to turn a name into an address once they are open:
//!
//! - **Windows** ([`WglStrategy`]): `opengl32.dll` plus `wglGetProcAddress`
//!   - See: [wglGetProcAddress](https://learn.microsoft.com/en-us/windows/win32/api/wingdi/nf-wingdi-wglgetprocaddress)
//! - **macOS** ([`BundleStrategy`]): the `OpenGL.framework` bundle, plain
//!   symbol lookup
//! - **Linux and other Unix** ([`GlvndStrategy`]): GLVND dispatch
//!   (`libOpenGL`), `libEGL`, `libGLX` and legacy `libGL`, chosen by what the
//!   process has already loaded
//!   - See: [libglvnd](https://gitlab.freedesktop.org/glvnd/libglvnd)
//!
//! The strategy used by default is picked at build configuration time
//! ([`DefaultStrategy`]). All strategies compile everywhere: they only talk to
//! the OS through a [`LibraryLoader`], so they can be exercised against a
//! mock loader on any host.
//!
//! ## Why unsafe code is needed
//!
//! Looking up a symbol yields an untyped address, and the extended resolvers
//! (`wglGetProcAddress`, `eglGetProcAddress`, `glXGetProcAddressARB`) are
//! called through function pointers reinterpreted from such addresses. The
//! unsafe blocks are confined to this module tree and to [`ProcAddress::cast`].

pub mod bundle;
pub mod glvnd;
pub mod native;
pub mod wgl;

use std::ffi::{c_char, c_void, CString};

pub use bundle::BundleStrategy;
pub use glvnd::{GlvndStrategy, LibrarySet};
pub use native::NativeLoader;
pub use wgl::WglStrategy;

use crate::error::GllResult;
use crate::types::ProcAddress;

/// Windows strategy with the native loader
#[cfg(windows)]
pub type DefaultStrategy = WglStrategy<NativeLoader>;

/// macOS strategy with the native loader
#[cfg(target_os = "macos")]
pub type DefaultStrategy = BundleStrategy<NativeLoader>;

/// GLVND strategy with the native loader
#[cfg(all(unix, not(target_os = "macos")))]
pub type DefaultStrategy = GlvndStrategy<NativeLoader>;

/// Access to the OS dynamic loader
///
/// Handles are plain values: whoever holds a `Library` owns one reference to
/// it and must hand it back to [`LibraryLoader::close`] exactly once.
pub trait LibraryLoader
{
    /// Owned handle to an opened library
    type Library;

    /// Return a handle if `name` is already loaded in this process.
    ///
    /// Never loads the library. The returned handle still counts as a
    /// reference and must be closed.
    fn probe(&mut self, name: &str) -> Option<Self::Library>;

    /// Open `name`, loading it if necessary.
    fn open(&mut self, name: &str) -> Option<Self::Library>;

    /// Address of `symbol` in `library`, null if it isn't exported.
    fn symbol(&self, library: &Self::Library, symbol: &str) -> ProcAddress;

    /// Release one reference to `library`.
    fn close(&mut self, library: Self::Library);
}

/// One way of opening the platform GL libraries and resolving names in them
pub trait PlatformStrategy
{
    /// Short strategy name used in logs and errors
    fn name(&self) -> &'static str;

    /// Open the libraries this strategy needs.
    ///
    /// On failure nothing stays open.
    ///
    /// ## Errors
    ///
    /// - `OpenFailed`: no usable library combination
    fn open(&mut self) -> GllResult<()>;

    /// Resolve `name`, null if no library provides it.
    fn resolve(&self, name: &str) -> ProcAddress;

    /// Release every held library. Calling it again is a no-op.
    fn close(&mut self);
}

/// `eglGetProcAddress` / `glXGetProcAddressARB`
pub(crate) type GetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

/// `wglGetProcAddress`
pub(crate) type WglGetProcAddressFn = unsafe extern "system" fn(*const c_char) -> *const c_void;

/// Call `f` with a NUL-terminated copy of `name`.
///
/// Names with an interior NUL can't name any symbol and resolve to null.
pub(crate) fn with_c_name(name: &str, f: impl FnOnce(*const c_char) -> ProcAddress) -> ProcAddress
{
    match CString::new(name) {
        Ok(c_name) => f(c_name.as_ptr()),
        Err(_) => {
            tracing::debug!(symbol = name, "Symbol name contains a NUL byte");
            ProcAddress::NULL
        }
    }
}

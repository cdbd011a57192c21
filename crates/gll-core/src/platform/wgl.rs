//! # Windows (WGL)
//!
//! `opengl32.dll` exports the GL 1.1 entry points directly; everything newer
//! is only reachable through `wglGetProcAddress`. Resolution therefore asks
//! `wglGetProcAddress` first and falls back to the DLL's export table for
//! the legacy names it refuses to return.

use super::{with_c_name, LibraryLoader, NativeLoader, PlatformStrategy, WglGetProcAddressFn};
use crate::error::{GllError, GllResult};
use crate::types::ProcAddress;

/// The combined GL library on Windows
pub const OPENGL32: &str = "opengl32.dll";

/// Extended resolver exported by [`OPENGL32`]
pub const WGL_GET_PROC_ADDRESS: &str = "wglGetProcAddress";

/// `opengl32.dll` + `wglGetProcAddress`
pub struct WglStrategy<L: LibraryLoader = NativeLoader>
{
    loader: L,
    opengl32: Option<L::Library>,
    get_proc_address: Option<WglGetProcAddressFn>,
}

impl<L: LibraryLoader> WglStrategy<L>
{
    pub fn new(loader: L) -> Self
    {
        Self {
            loader,
            opengl32: None,
            get_proc_address: None,
        }
    }

    /// Whether `wglGetProcAddress` was found on open.
    pub fn has_extended_resolver(&self) -> bool
    {
        self.get_proc_address.is_some()
    }

    fn extended(&self, name: &str) -> ProcAddress
    {
        match self.get_proc_address {
            // SAFETY: the pointer came from opengl32.dll's export of this exact signature.
            Some(get_proc_address) => with_c_name(name, |c_name| ProcAddress::from_wgl(unsafe { get_proc_address(c_name) })),
            None => ProcAddress::NULL,
        }
    }
}

impl<L: LibraryLoader + Default> Default for WglStrategy<L>
{
    fn default() -> Self
    {
        Self::new(L::default())
    }
}

impl<L: LibraryLoader> PlatformStrategy for WglStrategy<L>
{
    fn name(&self) -> &'static str
    {
        "wgl"
    }

    fn open(&mut self) -> GllResult<()>
    {
        self.close();

        let opengl32 = self.loader.open(OPENGL32).ok_or_else(|| GllError::OpenFailed {
            strategy: self.name(),
            reason: format!("could not load {OPENGL32}"),
        })?;

        // SAFETY: wglGetProcAddress has had this signature since Windows NT 3.5.
        self.get_proc_address = unsafe { self.loader.symbol(&opengl32, WGL_GET_PROC_ADDRESS).cast() };
        if self.get_proc_address.is_none() {
            tracing::warn!("{OPENGL32} does not export {WGL_GET_PROC_ADDRESS}; only exported entry points will resolve");
        }

        self.opengl32 = Some(opengl32);
        Ok(())
    }

    fn resolve(&self, name: &str) -> ProcAddress
    {
        let Some(opengl32) = &self.opengl32 else {
            return ProcAddress::NULL;
        };
        self.extended(name).or_else(|| self.loader.symbol(opengl32, name))
    }

    fn close(&mut self)
    {
        self.get_proc_address = None;
        if let Some(opengl32) = self.opengl32.take() {
            self.loader.close(opengl32);
        }
    }
}

impl<L: LibraryLoader> Drop for WglStrategy<L>
{
    fn drop(&mut self)
    {
        self.close();
    }
}

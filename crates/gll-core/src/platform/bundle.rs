//! # macOS (OpenGL.framework)
//!
//! The framework bundle exports every entry point it implements, so a plain
//! symbol lookup is all that's needed. There is no extended resolver.

use super::{LibraryLoader, NativeLoader, PlatformStrategy};
use crate::error::{GllError, GllResult};
use crate::types::ProcAddress;

/// Path of the OpenGL framework binary
pub const OPENGL_FRAMEWORK: &str = "/System/Library/Frameworks/OpenGL.framework/OpenGL";

/// Single framework bundle, direct lookup only
pub struct BundleStrategy<L: LibraryLoader = NativeLoader>
{
    loader: L,
    framework: Option<L::Library>,
}

impl<L: LibraryLoader> BundleStrategy<L>
{
    pub fn new(loader: L) -> Self
    {
        Self { loader, framework: None }
    }
}

impl<L: LibraryLoader + Default> Default for BundleStrategy<L>
{
    fn default() -> Self
    {
        Self::new(L::default())
    }
}

impl<L: LibraryLoader> PlatformStrategy for BundleStrategy<L>
{
    fn name(&self) -> &'static str
    {
        "bundle"
    }

    fn open(&mut self) -> GllResult<()>
    {
        self.close();

        let framework = self.loader.open(OPENGL_FRAMEWORK).ok_or_else(|| GllError::OpenFailed {
            strategy: self.name(),
            reason: format!("could not load {OPENGL_FRAMEWORK}"),
        })?;
        self.framework = Some(framework);
        Ok(())
    }

    fn resolve(&self, name: &str) -> ProcAddress
    {
        match &self.framework {
            Some(framework) => self.loader.symbol(framework, name),
            None => ProcAddress::NULL,
        }
    }

    fn close(&mut self)
    {
        if let Some(framework) = self.framework.take() {
            self.loader.close(framework);
        }
    }
}

impl<L: LibraryLoader> Drop for BundleStrategy<L>
{
    fn drop(&mut self)
    {
        self.close();
    }
}

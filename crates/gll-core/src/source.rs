//! # Header Sources
//!
//! The generator only needs "a function: locator -> header text". How the
//! text is obtained is up to the [`HeaderSource`] implementation.
//!
//! - [`FileSource`]: reads a local path
//! - [`CachedSource`]: keeps a copy at a destination path and reuses it on
//!   later runs instead of fetching again
//!
//! Remote fetching is not provided; a network-backed source only has to
//! implement [`HeaderSource`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GllError, GllResult};

/// Provides header text for a locator
pub trait HeaderSource
{
    /// Return the header text identified by `locator`.
    ///
    /// ## Errors
    ///
    /// - `HeaderNotFound`: nothing exists at `locator`
    /// - `Io`: the header exists but could not be read
    fn fetch(&self, locator: &str) -> GllResult<String>;
}

/// Reads headers from the local filesystem; the locator is a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl HeaderSource for FileSource
{
    fn fetch(&self, locator: &str) -> GllResult<String>
    {
        read_header(Path::new(locator))
    }
}

/// Caches another source's output at a fixed destination path.
///
/// The cache is keyed by destination only: if the destination file exists it
/// is returned as-is and the inner source is never consulted.
#[derive(Debug, Clone)]
pub struct CachedSource<S>
{
    inner: S,
    destination: PathBuf,
}

impl<S: HeaderSource> CachedSource<S>
{
    pub fn new(inner: S, destination: impl Into<PathBuf>) -> Self
    {
        Self {
            inner,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path
    {
        &self.destination
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S
    {
        &self.inner
    }
}

impl<S: HeaderSource> HeaderSource for CachedSource<S>
{
    fn fetch(&self, locator: &str) -> GllResult<String>
    {
        if self.destination.exists() {
            tracing::info!("Reusing {}...", self.destination.display());
            return read_header(&self.destination);
        }

        tracing::info!("Fetching {} into {}...", locator, self.destination.display());
        let text = self.inner.fetch(locator)?;
        if let Some(parent) = self.destination.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.destination, &text)?;
        Ok(text)
    }
}

fn read_header(path: &Path) -> GllResult<String>
{
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => GllError::HeaderNotFound(path.to_path_buf()),
        _ => GllError::Io(err),
    })
}

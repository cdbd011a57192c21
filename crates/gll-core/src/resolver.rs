//! # Platform Resolver
//!
//! Wraps a [`PlatformStrategy`] in the open/close state machine:
//!
//! ```text
//! Unopened --open--> Opened | OpenFailed
//! Opened   --close-> Unopened
//! OpenFailed --open--> Opened | OpenFailed   (explicit new attempt)
//! ```
//!
//! `resolve` only consults the strategy in `Opened`; in every other state it
//! returns null without touching any library.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gll_core::resolver::{PlatformResolver, ProcResolver};
//!
//! let mut resolver = PlatformResolver::new();
//! resolver.open()?;
//! let clear = resolver.resolve("glClear");
//! println!("glClear at {clear}");
//! resolver.close();
//! # Ok::<(), gll_core::error::GllError>(())
//! ```

use std::fmt;

use crate::error::GllResult;
use crate::platform::{DefaultStrategy, PlatformStrategy};
use crate::types::ProcAddress;

/// Anything that can turn an entry-point name into an address
///
/// Implemented by [`PlatformResolver`] and by every `Fn(&str) -> ProcAddress`,
/// so hosts that already manage their own library loading can pass a closure.
pub trait ProcResolver
{
    /// Address of `name`, null if unavailable.
    fn resolve(&self, name: &str) -> ProcAddress;
}

impl<F> ProcResolver for F
where
    F: Fn(&str) -> ProcAddress,
{
    fn resolve(&self, name: &str) -> ProcAddress
    {
        self(name)
    }
}

/// Lifecycle of a [`PlatformResolver`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolverState
{
    /// Nothing opened yet, or closed again
    #[default]
    Unopened,
    /// Libraries are open; `resolve` is live
    Opened,
    /// The last open attempt found no usable library combination
    OpenFailed,
}

impl fmt::Display for ResolverState
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let label = match self {
            ResolverState::Unopened => "unopened",
            ResolverState::Opened => "opened",
            ResolverState::OpenFailed => "open failed",
        };
        write!(f, "{label}")
    }
}

/// Opens the platform GL libraries and resolves names in them
///
/// ## Thread Safety
///
/// Not thread-safe. Open, resolve and close from one thread, before the
/// resolved entry points are used anywhere else.
pub struct PlatformResolver<S: PlatformStrategy = DefaultStrategy>
{
    strategy: S,
    state: ResolverState,
}

impl PlatformResolver<DefaultStrategy>
{
    /// Resolver using this platform's default strategy and the OS loader.
    #[must_use]
    pub fn new() -> Self
    {
        Self::with_strategy(DefaultStrategy::default())
    }
}

impl Default for PlatformResolver<DefaultStrategy>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<S: PlatformStrategy> PlatformResolver<S>
{
    pub fn with_strategy(strategy: S) -> Self
    {
        Self {
            strategy,
            state: ResolverState::Unopened,
        }
    }

    pub fn state(&self) -> ResolverState
    {
        self.state
    }

    pub fn is_open(&self) -> bool
    {
        self.state == ResolverState::Opened
    }

    pub fn strategy(&self) -> &S
    {
        &self.strategy
    }

    /// Open the platform libraries.
    ///
    /// A no-op when already open. After a failure, calling it again is a
    /// fresh attempt.
    ///
    /// ## Errors
    ///
    /// - `OpenFailed`: no usable library combination; the resolver moves to
    ///   [`ResolverState::OpenFailed`] and holds no handles
    pub fn open(&mut self) -> GllResult<()>
    {
        if self.is_open() {
            return Ok(());
        }

        match self.strategy.open() {
            Ok(()) => {
                tracing::info!(strategy = self.strategy.name(), "Opened GL libraries");
                self.state = ResolverState::Opened;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(strategy = self.strategy.name(), error = %err, "Could not open GL libraries");
                self.state = ResolverState::OpenFailed;
                Err(err)
            }
        }
    }

    /// Release every library handle. Safe to call any number of times.
    ///
    /// Only an open resolver changes state; a failed one stays
    /// [`ResolverState::OpenFailed`] until the next `open`.
    pub fn close(&mut self)
    {
        if self.state == ResolverState::Opened {
            tracing::debug!(strategy = self.strategy.name(), "Closing GL libraries");
            self.strategy.close();
            self.state = ResolverState::Unopened;
        }
    }
}

impl<S: PlatformStrategy> ProcResolver for PlatformResolver<S>
{
    fn resolve(&self, name: &str) -> ProcAddress
    {
        if !self.is_open() {
            return ProcAddress::NULL;
        }
        let address = self.strategy.resolve(name);
        if address.is_null() {
            tracing::trace!(symbol = name, "Unresolved entry point");
        }
        address
    }
}

impl<S: PlatformStrategy> Drop for PlatformResolver<S>
{
    fn drop(&mut self)
    {
        self.close();
    }
}

impl<S: PlatformStrategy> fmt::Debug for PlatformResolver<S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("PlatformResolver")
            .field("strategy", &self.strategy.name())
            .field("state", &self.state)
            .finish()
    }
}

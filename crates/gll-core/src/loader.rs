//! # Loader
//!
//! Fills a slot table with entry-point addresses, either from the platform
//! libraries ([`Loader::load_all`]) or from a resolver the host supplies
//! ([`Loader::load_with_resolver`]).
//!
//! The loader owns both the slot table and the library handles, so slots can
//! never outlive the libraries they point into: closing (or dropping) the
//! loader clears every slot before any handle is released.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gll_core::loader::{Loader, SlotTable};
//!
//! let table = SlotTable::from_names(["glClear", "glViewport"]);
//! let mut loader = Loader::new(table);
//! let report = loader.load_all()?;
//! println!("{}/{} entry points resolved", report.resolved, report.requested);
//!
//! if let Some(clear) = loader.procs().get("glClear").filter(|address| !address.is_null()) {
//!     println!("glClear at {clear}");
//! }
//! # Ok::<(), gll_core::error::GllError>(())
//! ```

use std::fmt;

use crate::error::GllResult;
use crate::platform::{DefaultStrategy, PlatformStrategy};
use crate::resolver::{PlatformResolver, ProcResolver, ResolverState};
use crate::types::{ProcAddress, SymbolSet};

/// Storage for one slot per entry point
///
/// Generated `GllProcs` structs implement this, as does the runtime
/// [`SlotTable`]. Implementations must visit their slots in the same order in
/// both methods.
pub trait ProcTable
{
    /// Overwrite every slot with `loader(name)`, in slot order.
    fn load_with(&mut self, loader: &mut dyn FnMut(&str) -> ProcAddress);

    /// Visit every slot with its entry-point name, in slot order.
    fn for_each_slot(&self, visit: &mut dyn FnMut(&str, ProcAddress));

    /// Reset every slot to null.
    fn clear(&mut self)
    {
        self.load_with(&mut |_| ProcAddress::NULL);
    }

    /// Number of slots.
    fn len(&self) -> usize
    {
        let mut count = 0;
        self.for_each_slot(&mut |_, _| count += 1);
        count
    }

    /// Whether the table has no slots at all.
    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Number of non-null slots.
    fn resolved_count(&self) -> usize
    {
        let mut count = 0;
        self.for_each_slot(&mut |_, address| {
            if !address.is_null() {
                count += 1;
            }
        });
        count
    }

    /// Names whose slot is still null.
    fn missing(&self) -> Vec<String>
    {
        let mut missing = Vec::new();
        self.for_each_slot(&mut |name, address| {
            if address.is_null() {
                missing.push(name.to_string());
            }
        });
        missing
    }
}

/// Slot table whose entry points are only known at runtime
///
/// Names are kept sorted and unique, so slot order matches the generated
/// tables for the same symbol set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTable
{
    names: Vec<String>,
    slots: Vec<ProcAddress>,
}

impl SlotTable
{
    /// One null slot per symbol.
    pub fn new(symbols: &SymbolSet) -> Self
    {
        Self::from_names(symbols.names())
    }

    /// One null slot per distinct name.
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        let slots = vec![ProcAddress::NULL; names.len()];
        Self { names, slots }
    }

    /// Slot for `name`, `None` if the table has no such entry point.
    pub fn get(&self, name: &str) -> Option<ProcAddress>
    {
        self.names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .ok()
            .map(|index| self.slots[index])
    }

    /// Entry-point names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.names.iter().map(String::as_str)
    }
}

impl ProcTable for SlotTable
{
    fn load_with(&mut self, loader: &mut dyn FnMut(&str) -> ProcAddress)
    {
        for (name, slot) in self.names.iter().zip(self.slots.iter_mut()) {
            *slot = loader(name);
        }
    }

    fn for_each_slot(&self, visit: &mut dyn FnMut(&str, ProcAddress))
    {
        for (name, slot) in self.names.iter().zip(&self.slots) {
            visit(name, *slot);
        }
    }
}

/// Outcome of filling a slot table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport
{
    /// Slots in the table
    pub requested: usize,
    /// Slots that received a non-null address
    pub resolved: usize,
}

impl LoadReport
{
    fn of(table: &dyn ProcTable) -> Self
    {
        Self {
            requested: table.len(),
            resolved: table.resolved_count(),
        }
    }

    /// Slots left null.
    pub fn unresolved(&self) -> usize
    {
        self.requested - self.resolved
    }

    /// Whether every slot was resolved.
    pub fn is_complete(&self) -> bool
    {
        self.resolved == self.requested
    }
}

impl fmt::Display for LoadReport
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}/{} entry points resolved", self.resolved, self.requested)
    }
}

/// Where the loader's addresses currently come from
enum ActiveResolver
{
    None,
    Platform,
    Custom(Box<dyn ProcResolver>),
}

/// Owns a slot table and the resolver that filled it
///
/// ## Lifecycle
///
/// 1. Create: [`Loader::new`] (platform default) or [`Loader::with_strategy`]
/// 2. Load: [`Loader::load_all`] or [`Loader::load_with_resolver`]
/// 3. Use: [`Loader::procs`], [`Loader::get_proc_address`]
/// 4. Close: [`Loader::close`], or just drop the loader
///
/// ## Thread Safety
///
/// Not thread-safe. Load once, from one thread, before any entry point is
/// called.
pub struct Loader<T: ProcTable, S: PlatformStrategy = DefaultStrategy>
{
    procs: T,
    platform: PlatformResolver<S>,
    active: ActiveResolver,
}

impl<T: ProcTable> Loader<T, DefaultStrategy>
{
    /// Loader for `procs` using this platform's default strategy.
    pub fn new(procs: T) -> Self
    {
        Self::with_strategy(procs, DefaultStrategy::default())
    }
}

impl<T: ProcTable, S: PlatformStrategy> Loader<T, S>
{
    pub fn with_strategy(procs: T, strategy: S) -> Self
    {
        Self {
            procs,
            platform: PlatformResolver::with_strategy(strategy),
            active: ActiveResolver::None,
        }
    }

    /// Open the platform libraries and resolve every slot through them.
    ///
    /// Slots left over from an earlier custom resolver are cleared first, so
    /// a failed open leaves every slot null.
    ///
    /// ## Errors
    ///
    /// - `OpenFailed`: no usable library combination; all slots stay null
    pub fn load_all(&mut self) -> GllResult<LoadReport>
    {
        self.procs.clear();
        if matches!(self.active, ActiveResolver::Custom(_)) {
            self.active = ActiveResolver::None;
        }

        self.platform.open()?;
        self.active = ActiveResolver::Platform;

        let platform = &self.platform;
        self.procs.load_with(&mut |name| platform.resolve(name));

        let report = LoadReport::of(&self.procs);
        tracing::info!(strategy = self.platform.strategy().name(), "Loaded {report}");
        Ok(report)
    }

    /// Resolve every slot through `resolver` instead of the platform libraries.
    ///
    /// Any platform libraries opened earlier are released first. The
    /// resolver is kept for [`Loader::get_proc_address`].
    pub fn load_with_resolver<R>(&mut self, resolver: R) -> LoadReport
    where
        R: ProcResolver + 'static,
    {
        self.procs.clear();
        self.platform.close();

        let resolver: Box<dyn ProcResolver> = Box::new(resolver);
        self.procs.load_with(&mut |name| resolver.resolve(name));
        self.active = ActiveResolver::Custom(resolver);

        let report = LoadReport::of(&self.procs);
        tracing::info!("Loaded {report} through a custom resolver");
        report
    }

    /// Resolve a single name through whichever resolver is active.
    ///
    /// Null before anything was loaded, after [`Loader::close`], or when the
    /// name is unknown.
    pub fn get_proc_address(&self, name: &str) -> ProcAddress
    {
        match &self.active {
            ActiveResolver::None => ProcAddress::NULL,
            ActiveResolver::Platform => self.platform.resolve(name),
            ActiveResolver::Custom(resolver) => resolver.resolve(name),
        }
    }

    /// The slot table.
    pub fn procs(&self) -> &T
    {
        &self.procs
    }

    /// State of the platform resolver.
    pub fn resolver_state(&self) -> ResolverState
    {
        self.platform.state()
    }

    /// The platform resolver, for strategy-specific inspection.
    pub fn platform(&self) -> &PlatformResolver<S>
    {
        &self.platform
    }

    /// Clear every slot, then release the platform libraries.
    ///
    /// Idempotent.
    pub fn close(&mut self)
    {
        self.procs.clear();
        self.platform.close();
        self.active = ActiveResolver::None;
    }
}

impl<T: ProcTable, S: PlatformStrategy> Drop for Loader<T, S>
{
    fn drop(&mut self)
    {
        self.close();
    }
}

//! Symbol and symbol-set types.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Suffixes that mark an entry point as a vendor or non-core extension.
///
/// The set is closed: a name ending in anything else is a core symbol.
pub const VENDOR_SUFFIXES: [&str; 7] = ["ARB", "EXT", "KHR", "OVR", "NV", "AMD", "INTEL"];

/// A named API entry point, e.g. `glClear`.
///
/// Identity is the name. Ordering is byte-wise on the name, which is what
/// makes generated artifacts stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol
{
    name: String,
}

impl Symbol
{
    /// Construct from an entry-point name.
    pub fn new(name: impl Into<String>) -> Self
    {
        Self { name: name.into() }
    }

    /// The entry-point name as it appears in the header.
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// The vendor suffix this name ends with, if any.
    ///
    /// ```rust
    /// use gll_core::types::Symbol;
    ///
    /// assert_eq!(Symbol::new("glFooEXT").vendor_suffix(), Some("EXT"));
    /// assert_eq!(Symbol::new("glClear").vendor_suffix(), None);
    /// ```
    pub fn vendor_suffix(&self) -> Option<&'static str>
    {
        VENDOR_SUFFIXES.iter().copied().find(|suffix| self.name.ends_with(suffix))
    }

    /// Whether this is a vendor extension entry point.
    pub fn is_vendor(&self) -> bool
    {
        self.vendor_suffix().is_some()
    }

    /// Function pointer type name for this entry point.
    ///
    /// Follows the Khronos header convention: `glClear` -> `PFNGLCLEARPROC`.
    pub fn pointer_type(&self) -> String
    {
        format!("PFN{}PROC", self.name.to_ascii_uppercase())
    }
}

impl fmt::Display for Symbol
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.name)
    }
}

// Ordering and equality are the name's, so lookups by `&str` agree with the set order.
impl Borrow<str> for Symbol
{
    fn borrow(&self) -> &str
    {
        &self.name
    }
}

impl From<&str> for Symbol
{
    fn from(name: &str) -> Self
    {
        Symbol::new(name)
    }
}

/// Ordered, duplicate-free set of entry points.
///
/// Iteration is always lexicographic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet
{
    symbols: BTreeSet<Symbol>,
}

impl SymbolSet
{
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Insert a symbol. Returns `false` if it was already present.
    pub fn insert(&mut self, symbol: Symbol) -> bool
    {
        self.symbols.insert(symbol)
    }

    /// Whether a symbol with this name is present.
    pub fn contains(&self, name: &str) -> bool
    {
        self.symbols.contains(name)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize
    {
        self.symbols.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool
    {
        self.symbols.is_empty()
    }

    /// Symbols in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol>
    {
        self.symbols.iter()
    }

    /// Names in lexicographic order.
    pub fn names(&self) -> Vec<&str>
    {
        self.symbols.iter().map(Symbol::name).collect()
    }

    /// Whether every symbol of `self` is also in `other`.
    pub fn is_subset(&self, other: &SymbolSet) -> bool
    {
        self.symbols.is_subset(&other.symbols)
    }
}

impl FromIterator<Symbol> for SymbolSet
{
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self
    {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolSet
{
    type Item = &'a Symbol;
    type IntoIter = std::collections::btree_set::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.symbols.iter()
    }
}

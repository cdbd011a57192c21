//! Header scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractMode;
use crate::types::{Symbol, SymbolSet};

/// `GLAPI <return type> APIENTRY <name> (`
///
/// The export marker must open the line; everything up to the last
/// `APIENTRY` is ignored.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GLAPI\b.*\bAPIENTRY\s+(\w+)\s*\(").expect("declaration pattern compiles"));

/// Counters collected while scanning a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats
{
    /// Lines scanned
    pub lines: usize,
    /// Lines that declared an entry point
    pub declarations: usize,
    /// Declarations dropped because they carry a vendor suffix
    pub vendor_skipped: usize,
    /// Declarations that repeated an earlier name
    pub duplicates: usize,
}

/// Extracts exported entry-point names from header text.
///
/// Output is a pure function of the header text and the [`ExtractMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolExtractor
{
    mode: ExtractMode,
}

impl SymbolExtractor
{
    pub fn new(mode: ExtractMode) -> Self
    {
        Self { mode }
    }

    pub fn mode(&self) -> ExtractMode
    {
        self.mode
    }

    /// Collect the qualifying entry points, sorted and deduplicated.
    pub fn extract(&self, header: &str) -> SymbolSet
    {
        self.extract_with_stats(header).0
    }

    /// Like [`SymbolExtractor::extract`], also reporting scan counters.
    pub fn extract_with_stats(&self, header: &str) -> (SymbolSet, ExtractStats)
    {
        let mut stats = ExtractStats::default();
        let mut symbols = SymbolSet::new();

        for line in header.lines() {
            stats.lines += 1;
            let Some(name) = declared_name(line) else {
                continue;
            };
            stats.declarations += 1;

            let symbol = Symbol::new(name);
            if symbol.is_vendor() && !self.mode.includes_extensions() {
                stats.vendor_skipped += 1;
                continue;
            }
            if !symbols.insert(symbol) {
                stats.duplicates += 1;
            }
        }

        tracing::debug!(
            lines = stats.lines,
            declarations = stats.declarations,
            vendor_skipped = stats.vendor_skipped,
            duplicates = stats.duplicates,
            symbols = symbols.len(),
            "Extracted entry points"
        );

        (symbols, stats)
    }
}

/// Entry-point name declared on `line`, if the line is a declaration.
fn declared_name(line: &str) -> Option<&str>
{
    DECLARATION
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

//! # Generation Pipeline
//!
//! header source -> [`SymbolExtractor`] -> [`ScaffoldEmitter`] -> files.
//!
//! The pipeline writes nothing until extraction and emission have succeeded,
//! so a missing or unreadable header never leaves partial artifacts behind.
//! The two artifacts are then written as a pair: either both land or
//! neither does.
//!
//! ```rust,no_run
//! use gll_core::generate::{Generator, GeneratorConfig};
//! use gll_core::source::FileSource;
//!
//! let config = GeneratorConfig {
//!     include_extensions: false,
//!     output_root: "generated".into(),
//! };
//! let summary = Generator::new(config).run(&FileSource, "include/GL/glcorearb.h")?;
//! println!("{} entry points", summary.symbols);
//! # Ok::<(), gll_core::error::GllError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::{ScaffoldEmitter, DECLARATIONS_FILE, DEFINITIONS_FILE};
use crate::error::{GllError, GllResult};
use crate::source::HeaderSource;
use crate::symbols::{ExtractMode, SymbolExtractor};

/// Generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig
{
    /// Keep vendor extension entry points (`--ext`)
    pub include_extensions: bool,
    /// Directory the `src/` output folder is created under (`--root`)
    pub output_root: PathBuf,
}

impl Default for GeneratorConfig
{
    fn default() -> Self
    {
        Self {
            include_extensions: false,
            output_root: PathBuf::from("."),
        }
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary
{
    /// Number of entry points emitted
    pub symbols: usize,
    /// Path of the declaration artifact
    pub declarations_path: PathBuf,
    /// Path of the definition artifact
    pub definitions_path: PathBuf,
}

/// Runs the generation pipeline for one configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator
{
    config: GeneratorConfig,
}

impl Generator
{
    pub fn new(config: GeneratorConfig) -> Self
    {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig
    {
        &self.config
    }

    /// Directory the artifacts are written to.
    pub fn output_dir(&self) -> PathBuf
    {
        self.config.output_root.join("src")
    }

    /// Fetch the header behind `locator`, extract and emit.
    ///
    /// ## Errors
    ///
    /// - `HeaderNotFound` / `Io`: the header could not be read
    /// - `InvalidArgument`: the output location, or an artifact path, is a
    ///   directory where a file is expected (or vice versa)
    /// - `Io`: an artifact could not be written
    pub fn run(&self, source: &dyn HeaderSource, locator: &str) -> GllResult<GenerateSummary>
    {
        let mode = ExtractMode::from_flag(self.config.include_extensions);

        tracing::info!("Parsing {locator}...");
        let header = source.fetch(locator)?;
        let symbols = SymbolExtractor::new(mode).extract(&header);

        let emitter = ScaffoldEmitter::new(header_name(locator), mode);
        let scaffold = emitter.emit(&symbols);

        let output_dir = self.output_dir();
        prepare_dir(&output_dir)?;

        let declarations_path = output_dir.join(DECLARATIONS_FILE);
        let definitions_path = output_dir.join(DEFINITIONS_FILE);
        tracing::info!("Generating {}...", declarations_path.display());
        tracing::info!("Generating {}...", definitions_path.display());
        write_pair(
            (&declarations_path, &scaffold.declarations),
            (&definitions_path, &scaffold.definitions),
        )?;

        Ok(GenerateSummary {
            symbols: symbols.len(),
            declarations_path,
            definitions_path,
        })
    }
}

fn prepare_dir(dir: &Path) -> GllResult<()>
{
    if dir.exists() && !dir.is_dir() {
        return Err(GllError::InvalidArgument(format!(
            "output location {} is not a directory",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write both artifacts or neither.
///
/// Each artifact is staged in a sibling file first. Nothing is renamed into
/// place until both stages are on disk, and if the second rename fails the
/// first artifact is removed again.
fn write_pair(first: (&Path, &str), second: (&Path, &str)) -> GllResult<()>
{
    for (path, _) in [first, second] {
        if path.is_dir() {
            return Err(GllError::InvalidArgument(format!("{} is a directory", path.display())));
        }
    }

    let first_stage = stage_path(first.0);
    let second_stage = stage_path(second.0);
    let staged = fs::write(&first_stage, first.1).and_then(|()| fs::write(&second_stage, second.1));
    if let Err(err) = staged {
        discard(&first_stage);
        discard(&second_stage);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&first_stage, first.0) {
        discard(&first_stage);
        discard(&second_stage);
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&second_stage, second.0) {
        discard(&second_stage);
        discard(first.0);
        return Err(err.into());
    }
    Ok(())
}

fn stage_path(path: &Path) -> PathBuf
{
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard(path: &Path)
{
    match fs::remove_file(path) {
        Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), error = %err, "Could not remove partial artifact");
        }
        _ => {}
    }
}

/// Last path component of the locator, for the generated banner.
fn header_name(locator: &str) -> &str
{
    locator.rsplit(['/', '\\']).next().unwrap_or(locator)
}

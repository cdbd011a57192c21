//! End-to-end generation into a temporary output root

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use gll_core::error::{GllError, GllResult};
use gll_core::generate::{Generator, GeneratorConfig};
use gll_core::source::{CachedSource, FileSource, HeaderSource};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture() -> String
{
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/mini_glcorearb.h")
        .display()
        .to_string()
}

fn generator(root: &Path, include_extensions: bool) -> Generator
{
    Generator::new(GeneratorConfig {
        include_extensions,
        output_root: root.to_path_buf(),
    })
}

/// Serves a fixed header and counts how often it was asked.
struct CountingSource
{
    text: &'static str,
    fetches: Cell<usize>,
}

impl HeaderSource for CountingSource
{
    fn fetch(&self, _locator: &str) -> GllResult<String>
    {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.text.to_string())
    }
}

#[test]
fn test_writes_both_artifacts_under_src()
{
    let root = TempDir::new().unwrap();
    let summary = generator(root.path(), true).run(&FileSource, &fixture()).unwrap();

    assert_eq!(summary.symbols, 6);
    assert_eq!(summary.declarations_path, root.path().join("src").join("gll_api.rs"));
    assert_eq!(summary.definitions_path, root.path().join("src").join("gll_procs.rs"));

    assert_eq!(
        fs::read_to_string(&summary.declarations_path).unwrap(),
        include_str!("fixtures/gll_api.rs")
    );
    assert_eq!(
        fs::read_to_string(&summary.definitions_path).unwrap(),
        include_str!("fixtures/gll_procs.rs")
    );
}

#[test]
fn test_core_mode_drops_vendor_entry_points()
{
    let root = TempDir::new().unwrap();
    let summary = generator(root.path(), false).run(&FileSource, &fixture()).unwrap();

    assert_eq!(summary.symbols, 4);
    let definitions = fs::read_to_string(&summary.definitions_path).unwrap();
    assert!(!definitions.contains("glDebugMessageInsertARB"));
    assert!(definitions.contains("(core entry points)"));
}

#[test]
fn test_missing_header_writes_nothing()
{
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nowhere").join("glcorearb.h");

    let result = generator(root.path(), false).run(&FileSource, &missing.display().to_string());
    match result {
        Err(GllError::HeaderNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected HeaderNotFound, got {other:?}"),
    }
    assert!(!root.path().join("src").exists());
}

#[test]
fn test_output_root_must_be_a_directory()
{
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("src"), "not a directory").unwrap();

    let result = generator(root.path(), false).run(&FileSource, &fixture());
    assert!(matches!(result, Err(GllError::InvalidArgument(_))));
}

fn entries(dir: &Path) -> Vec<String>
{
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_blocked_definitions_leave_no_declarations()
{
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(src.join("gll_procs.rs")).unwrap();

    let result = generator(root.path(), true).run(&FileSource, &fixture());
    assert!(matches!(result, Err(GllError::InvalidArgument(_))));
    assert_eq!(entries(&src), ["gll_procs.rs"]);
}

#[test]
fn test_failed_staging_is_cleaned_up()
{
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(src.join("gll_procs.rs.tmp")).unwrap();

    let result = generator(root.path(), true).run(&FileSource, &fixture());
    assert!(matches!(result, Err(GllError::Io(_))));
    assert_eq!(entries(&src), ["gll_procs.rs.tmp"]);
}

#[test]
fn test_regeneration_is_stable()
{
    let root = TempDir::new().unwrap();
    let generator = generator(root.path(), true);

    let first = generator.run(&FileSource, &fixture()).unwrap();
    let before = fs::read_to_string(&first.definitions_path).unwrap();
    let second = generator.run(&FileSource, &fixture()).unwrap();
    let after = fs::read_to_string(&second.definitions_path).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_cached_source_fetches_once()
{
    let root = TempDir::new().unwrap();
    let destination: PathBuf = root.path().join("include").join("GL").join("glcorearb.h");
    let inner = CountingSource {
        text: "GLAPI void APIENTRY glClear (GLbitfield mask);\n",
        fetches: Cell::new(0),
    };
    let cached = CachedSource::new(inner, &destination);

    let first = cached.fetch("https://registry.khronos.org/OpenGL/api/GL/glcorearb.h").unwrap();
    let second = cached.fetch("https://registry.khronos.org/OpenGL/api/GL/glcorearb.h").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&destination).unwrap(), first);
    assert_eq!(cached_fetches(&cached), 1);
}

#[test]
fn test_cached_source_trusts_existing_destination()
{
    let root = TempDir::new().unwrap();
    let destination = root.path().join("glcorearb.h");
    fs::write(&destination, "GLAPI void APIENTRY glFlush (void);\n").unwrap();

    let inner = CountingSource {
        text: "GLAPI void APIENTRY glClear (GLbitfield mask);\n",
        fetches: Cell::new(0),
    };
    let cached = CachedSource::new(inner, &destination);

    let summary = generator(root.path(), false).run(&cached, "unused").unwrap();
    assert_eq!(summary.symbols, 1);
    assert!(fs::read_to_string(&summary.definitions_path).unwrap().contains("glFlush"));
    assert_eq!(cached_fetches(&cached), 0);
}

fn cached_fetches(cached: &CachedSource<CountingSource>) -> usize
{
    cached.inner().fetches.get()
}

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use gll_core::generate::{Generator, GeneratorConfig};
use gll_core::loader::{Loader, ProcTable, SlotTable};
use gll_core::source::{CachedSource, FileSource, HeaderSource};
use gll_core::symbols::{ExtractMode, SymbolExtractor};
use gll_core::types::SymbolSet;
use gll_core::GllResult;
use gll_utils::{info, init_logging, init_logging_to_dir, init_logging_with_level, LogFormat, LogGuard, LogLevel};

/// Where the Khronos header lives unless `--header` says otherwise
const DEFAULT_HEADER: &str = "include/GL/glcorearb.h";

/// Generates and probes a cross-platform OpenGL entry-point loader.
#[derive(Parser, Debug)]
#[command(name = "gll")]
#[command(version)]
#[command(about = "Generates and probes a cross-platform OpenGL entry-point loader", long_about = None)]
struct Cli
{
    /// Write logs to a dated file in this directory instead of the console
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

/// Which header to read and which entry points to keep
#[derive(Args, Debug)]
struct HeaderArgs
{
    /// Path of the API header
    #[arg(long, default_value = DEFAULT_HEADER)]
    header: String,
    /// Keep a copy of the header here and reuse it on later runs
    #[arg(long)]
    cache: Option<PathBuf>,
    /// Include vendor extension entry points (ARB, EXT, KHR, ...)
    #[arg(long, default_value_t = false)]
    ext: bool,
}

impl HeaderArgs
{
    fn source(&self) -> Box<dyn HeaderSource>
    {
        match &self.cache {
            Some(destination) => Box::new(CachedSource::new(FileSource, destination)),
            None => Box::new(FileSource),
        }
    }

    fn extract(&self) -> GllResult<SymbolSet>
    {
        let header = self.source().fetch(&self.header)?;
        Ok(SymbolExtractor::new(ExtractMode::from_flag(self.ext)).extract(&header))
    }
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Write gll_api.rs and gll_procs.rs into <root>/src
    Generate
    {
        #[command(flatten)]
        header: HeaderArgs,
        /// Output root; artifacts go to its src/ directory
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Print the extracted entry-point names, one per line
    Symbols
    {
        #[command(flatten)]
        header: HeaderArgs,
    },
    /// Open the platform GL libraries and try to resolve every entry point
    Probe
    {
        #[command(flatten)]
        header: HeaderArgs,
        /// Also list the entry points that stayed unresolved
        #[arg(long, default_value_t = false)]
        missing: bool,
    },
}

fn main()
{
    let cli = Cli::parse();

    // Held until exit so buffered file output gets flushed
    let _guard = match init(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init(cli: &Cli) -> Result<LogGuard, Box<dyn std::error::Error>>
{
    if let Some(dir) = &cli.log_dir {
        let (path, guard) = init_logging_to_dir(dir, cli.log_level)?;
        eprintln!("Logging to {}", path.display());
        return Ok(guard);
    }

    let guard = match cli.log_level {
        Some(level) => {
            let format = std::env::var(gll_utils::logging::LOG_FORMAT_ENV)
                .ok()
                .and_then(|s| s.parse::<LogFormat>().ok())
                .unwrap_or_default();
            init_logging_with_level(level, format)?
        }
        None => init_logging()?,
    };
    Ok(guard)
}

fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>>
{
    match cli.command {
        Commands::Generate { header, root } => {
            let generator = Generator::new(GeneratorConfig {
                include_extensions: header.ext,
                output_root: root,
            });
            let source = header.source();
            let summary = generator.run(source.as_ref(), &header.header)?;

            println!("Generated {} entry points", summary.symbols);
            println!("  {}", summary.declarations_path.display());
            println!("  {}", summary.definitions_path.display());
            Ok(())
        }
        Commands::Symbols { header } => {
            for name in header.extract()?.names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Probe { header, missing } => {
            let symbols = header.extract()?;
            info!("Probing {} entry points", symbols.len());

            let mut loader = Loader::new(SlotTable::new(&symbols));
            let report = loader.load_all()?;

            println!("\nPlatform:");
            println!("  Strategy: {}", platform_name(&loader));
            print_libraries(&loader);
            println!("  Resolved: {report}");

            if missing {
                let unresolved = loader.procs().missing();
                println!("\nUnresolved ({}):", unresolved.len());
                for name in unresolved {
                    println!("  {name}");
                }
            }

            loader.close();
            Ok(())
        }
    }
}

fn platform_name(loader: &Loader<SlotTable>) -> &'static str
{
    use gll_core::platform::PlatformStrategy;

    loader.platform().strategy().name()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn print_libraries(loader: &Loader<SlotTable>)
{
    if let Some(set) = loader.platform().strategy().library_set() {
        println!("  Libraries: {set}");
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn print_libraries(_loader: &Loader<SlotTable>) {}

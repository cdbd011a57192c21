//! Load a handful of entry points at runtime, without generated code
//!
//! Shows both ways of filling a slot table:
//!
//! 1. From the platform GL libraries (`Loader::load_all`)
//! 2. From a resolver the host already has (`Loader::load_with_resolver`)
//!
//! Run with `RUST_LOG=debug` to see which libraries were picked.

use gll_core::loader::{Loader, ProcTable, SlotTable};
use gll_core::types::ProcAddress;
use gll_utils::{info, init_logging, warn};

const ENTRY_POINTS: [&str; 4] = ["glClear", "glClearColor", "glGetString", "glViewport"];

fn main()
{
    let _guard = init_logging().expect("Failed to initialize logging");

    let mut loader = Loader::new(SlotTable::from_names(ENTRY_POINTS));

    match loader.load_all() {
        Ok(report) => {
            info!(%report, "Platform libraries opened");
            for name in loader.procs().names() {
                let address = loader.get_proc_address(name);
                println!("{name:<16} {address}");
            }
        }
        Err(e) => warn!(error = %e, "No GL libraries on this machine"),
    }

    // A host that manages its own libraries hands in a resolver instead
    let report = loader.load_with_resolver(|name: &str| {
        if name == "glClear" {
            ProcAddress::new(0x1000 as *const _)
        } else {
            ProcAddress::NULL
        }
    });
    info!(%report, missing = ?loader.procs().missing(), "Custom resolver");
}

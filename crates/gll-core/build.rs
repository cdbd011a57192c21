//! Build script for gll-core
//!
//! This script checks system requirements before compilation:
//! - Minimum Rust version (1.65.0)
//! - Target support: a platform strategy exists for Windows, macOS and the
//!   other Unix targets; anything else gets a warning
//!
//! ## Requirements
//!
//! - **Rust**: 1.65.0 or newer (`let ... else`)
//! - **Windows**: `opengl32.dll` at runtime
//! - **macOS**: `OpenGL.framework` at runtime
//! - **Linux / BSD**: `libOpenGL.so.0` + `libEGL.so.1`, or `libGL.so.1` at runtime

use std::env;

fn main()
{
    println!("cargo:rerun-if-changed=build.rs");

    // Check minimum Rust version
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 65, 0);

        if rustc_version < min_rust_version {
            panic!("gll-core requires Rust {min_rust_version} or newer, found {rustc_version}");
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }

    check_target_support();
}

fn check_target_support()
{
    // The build script runs on the host, so ask Cargo about the target instead of using cfg!
    let family = env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let supported = family.split(',').any(|family| family == "unix" || family == "windows");
    if !supported {
        println!("cargo:warning=gll-core has no GL library strategy for target os '{os}'");
    }
}

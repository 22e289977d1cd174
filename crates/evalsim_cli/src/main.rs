//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `evalsim_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("evalsim_core ping={}", evalsim_core::ping());
    println!("evalsim_core version={}", evalsim_core::core_version());
}

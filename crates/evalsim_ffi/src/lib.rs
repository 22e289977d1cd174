//! FFI crate for the accreditation-evaluation demo UI.

pub mod api;

pub use api::*;

//! Umbrella crate for the ubike workspace.
//!
//! Re-exports [`ubike_core`] so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the repository root.
pub use ubike_core::*;

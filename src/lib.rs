//! travel-recs
//!
//! Workspace root: re-exports [`travel_core`] so the demos under `demos/`
//! can be run with `cargo run --example basic_usage`.
pub use travel_core::*;

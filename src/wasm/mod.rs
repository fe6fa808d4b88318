//! WebAssembly bindings for the emulator core.
//!
//! Exposes program loading, reset, execution and register inspection to
//! JavaScript so a browser front end can drive the fetch loop.

pub mod api;

pub use api::NesCpu;

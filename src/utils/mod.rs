//! Utility functions for the command line front end.
//!
//! ## Modules
//!
//! - [`app_data`] - User configuration file (`config.json`)
//! - [`input`] - Reading the text to index from an argument, file or stdin
//! - [`logging`] - `tracing` subscriber setup driven by `SFX_LOG`
//! - [`progress`] - Progress bar that compiles away without the `progress` feature

pub mod app_data;
pub mod input;
pub mod logging;
pub mod progress;

pub use app_data::*;
pub use input::*;
pub use logging::*;

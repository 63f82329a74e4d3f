//! Render module orchestrator.
//!
//! Grid-to-terminal serialization and the frame printer live in the
//! private `core` module.

mod core;

pub use core::{PlaquePrinter, PrinterSettings, print_plaque, serialize_row};

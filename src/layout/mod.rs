//! Layout module orchestrator.
//!
//! The axis resolver and pivot model live in the private `core` module.

mod core;

pub use core::{AxisLayout, AxisSpec, Pivot, resolve_axis};

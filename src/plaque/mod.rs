//! Plaque module orchestrator.
//!
//! The tree node lives in the private `core` module and the frame/kind
//! machinery in `frame`; downstream code imports both from here.

mod core;
mod frame;

pub use core::{Plaque, Rendered};
pub use frame::{BorderInsets, FrameGlyphs, FrameStyle, PlaqueKind};

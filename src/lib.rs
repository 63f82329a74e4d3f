//! Plaque compositing engine for terminal UIs.
//!
//! A plaque is a rectangular region placed inside its parent by a mix of
//! absolute and relative position/size values anchored at a pivot point.
//! Rendering resolves each plaque's exact bounds, composites the tree into
//! one grid of styled character cells, and serializes that grid into
//! minimal-escape terminal output.

pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod plaque;
pub mod render;
pub mod width;

pub use cell::{CharCell, Color};
pub use error::{PlaqueError, Result};
pub use grid::CharGrid;
pub use layout::{AxisLayout, AxisSpec, Pivot, resolve_axis};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use plaque::{BorderInsets, FrameGlyphs, FrameStyle, Plaque, PlaqueKind, Rendered};
pub use render::{PlaquePrinter, PrinterSettings, print_plaque, serialize_row};
pub use width::{char_width, display_width};

//! Frame-printing counters and their log-event snapshots.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Saturating counters accumulated by the frame printer.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    frames: u64,
    lines_emitted: u64,
    lines_reused: u64,
    cells_written: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, emitted: usize, reused: usize, cells: usize) {
        self.frames = self.frames.saturating_add(1);
        self.lines_emitted = self.lines_emitted.saturating_add(emitted as u64);
        self.lines_reused = self.lines_reused.saturating_add(reused as u64);
        self.cells_written = self.cells_written.saturating_add(cells as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            frames: self.frames,
            lines_emitted: self.lines_emitted,
            lines_reused: self.lines_reused,
            cells_written: self.cells_written,
        }
    }
}

/// Immutable view of the counters at one point in time.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub frames: u64,
    pub lines_emitted: u64,
    pub lines_reused: u64,
    pub cells_written: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("frames".to_string(), json!(self.frames));
        map.insert("lines_emitted".to_string(), json!(self.lines_emitted));
        map.insert("lines_reused".to_string(), json!(self.lines_reused));
        map.insert("cells_written".to_string(), json!(self.cells_written));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "render_metrics".to_string(),
            self.as_fields(),
        )
    }
}

use std::io::{self, Write};

use serde_json::json;

use crate::cell::CharCell;
use crate::error::Result;
use crate::logging::{LogEvent, LogFields, LogLevel, Logger};
use crate::metrics::RenderMetrics;
use crate::plaque::Plaque;
use crate::width::display_width;

const SGR_RESET: &str = "\x1b[0m";

/// Serialize one grid row into a line of terminal output.
///
/// Cells are walked left to right; before each cell the minimal SGR
/// sequence needed to transition from the previous cell's attributes is
/// emitted. A synthetic all-default cell precedes the first real cell, so
/// non-default leading attributes always get their codes. The line always
/// ends with a full reset.
pub fn serialize_row(row: &[CharCell]) -> String {
    let mut line = String::new();
    let mut prev = CharCell::default();
    for cell in row {
        push_transition(&mut line, &prev, cell);
        line.push(cell.display_char());
        prev = *cell;
    }
    line.push_str(SGR_RESET);
    line
}

// Append the SGR sequence moving the terminal from `prev`'s attributes to
// `next`'s. Appends nothing when no displayed attribute changes. A
// transparent or unset color transitions to the "normal" code.
fn push_transition(line: &mut String, prev: &CharCell, next: &CharCell) {
    let mut codes: Vec<String> = Vec::new();

    if prev.visible_foreground() != next.visible_foreground() {
        codes.push(format!("3{}", next.visible_foreground().sgr_offset()));
    }
    if prev.visible_background() != next.visible_background() {
        codes.push(format!("4{}", next.visible_background().sgr_offset()));
    }
    if prev.bold_on() != next.bold_on() {
        codes.push(if next.bold_on() { "1" } else { "22" }.to_string());
    }
    if prev.underline_on() != next.underline_on() {
        codes.push(if next.underline_on() { "4" } else { "24" }.to_string());
    }
    if prev.italic_on() != next.italic_on() {
        codes.push(if next.italic_on() { "3" } else { "23" }.to_string());
    }

    if !codes.is_empty() {
        line.push_str("\x1b[");
        line.push_str(&codes.join(";"));
        line.push('m');
    }
}

/// Printer runtime parameters.
#[derive(Debug, Clone)]
pub struct PrinterSettings {
    /// Move the cursor here (0-based row, column) after every frame.
    pub restore_cursor: Option<(u16, u16)>,
    /// Skip rewriting lines whose serialized form matches the previous
    /// frame at the same screen row.
    pub diff_frames: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            restore_cursor: None,
            diff_frames: true,
        }
    }
}

/// Writes rendered plaques to a terminal handle, line by line.
///
/// Each line is positioned with a cursor-address sequence at the plaque's
/// resolved offset. Line content hashes from the previous frame let the
/// printer skip unchanged lines, so a steady-state redraw costs close to
/// nothing.
pub struct PlaquePrinter {
    settings: PrinterSettings,
    logger: Option<Logger>,
    metrics: RenderMetrics,
    frame_origin: (i32, i32),
    frame_lines: Vec<Option<blake3::Hash>>,
}

impl PlaquePrinter {
    pub fn new(settings: PrinterSettings) -> Self {
        Self {
            settings,
            logger: None,
            metrics: RenderMetrics::new(),
            frame_origin: (0, 0),
            frame_lines: Vec::new(),
        }
    }

    pub fn with_default() -> Self {
        Self::new(PrinterSettings::default())
    }

    /// Attach a logger; one event is emitted per printed frame.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn settings_mut(&mut self) -> &mut PrinterSettings {
        &mut self.settings
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Render `plaque` against `(columns, rows)` and write the result.
    ///
    /// A plaque that renders to nothing prints nothing. Rows falling
    /// outside the terminal are dropped.
    pub fn print(
        &mut self,
        writer: &mut impl Write,
        plaque: &Plaque,
        columns: u16,
        rows: u16,
    ) -> Result<()> {
        let Some(rendered) = plaque.render(columns as i32, rows as i32) else {
            self.frame_lines.clear();
            return Ok(());
        };

        let origin = (rendered.h_pos, rendered.v_pos);
        if origin != self.frame_origin || self.frame_lines.len() != rendered.grid.height() {
            self.frame_origin = origin;
            self.frame_lines = vec![None; rendered.grid.height()];
        }

        let column = rendered.h_pos.max(0) as u16;
        let mut emitted = 0usize;
        let mut reused = 0usize;
        let mut cells = 0usize;

        for (idx, row) in rendered.grid.rows().enumerate() {
            let screen_row = rendered.v_pos + idx as i32;
            if screen_row < 0 || screen_row >= rows as i32 {
                continue;
            }

            let line = serialize_row(row);
            let hash = blake3::hash(line.as_bytes());
            if self.settings.diff_frames && self.frame_lines[idx] == Some(hash) {
                reused += 1;
                continue;
            }
            self.frame_lines[idx] = Some(hash);

            write!(writer, "\x1b[{};{}H", screen_row + 1, column + 1)?;
            writer.write_all(line.as_bytes())?;
            emitted += 1;
            cells += display_width(&line);
        }

        if let Some((row, col)) = self.settings.restore_cursor {
            write!(writer, "\x1b[{};{}H", row + 1, col + 1)?;
        }
        writer.flush()?;

        self.metrics.record_frame(emitted, reused, cells);
        if let Some(logger) = &self.logger {
            let mut fields = LogFields::new();
            fields.insert("columns".to_string(), json!(columns));
            fields.insert("rows".to_string(), json!(rows));
            fields.insert("lines".to_string(), json!(emitted));
            fields.insert("reused_lines".to_string(), json!(reused));
            fields.insert("cells".to_string(), json!(cells));
            logger.log_event(LogEvent::with_fields(
                LogLevel::Debug,
                "plaques.render".to_string(),
                "frame".to_string(),
                fields,
            ))?;
        }

        Ok(())
    }
}

/// Render a plaque against the real terminal and print it to stdout.
pub fn print_plaque(plaque: &Plaque) -> Result<()> {
    let (columns, rows) = crossterm::terminal::size()?;
    let mut stdout = io::stdout().lock();
    PlaquePrinter::with_default().print(&mut stdout, plaque, columns, rows)
}

use std::io;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plaques::logging::{LogEvent, LogSink};
use plaques::{
    CharCell, Color, FrameStyle, Logger, LoggingResult, Pivot, Plaque, PlaquePrinter,
    PrinterSettings, serialize_row,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn render_dashboard(c: &mut Criterion) {
    let root = build_dashboard();
    c.bench_function("render_dashboard", |b| {
        b.iter(|| {
            let rendered = black_box(&root).render(120, 40).expect("rendered");
            black_box(rendered.grid.height());
        });
    });
}

fn print_dashboard(c: &mut Criterion) {
    let root = build_dashboard();
    c.bench_function("print_dashboard", |b| {
        b.iter(|| {
            let mut printer = PlaquePrinter::new(PrinterSettings {
                restore_cursor: None,
                diff_frames: false,
            })
            .with_logger(Logger::new(NullSink));
            let mut sink = io::sink();
            printer
                .print(&mut sink, black_box(&root), 120, 40)
                .expect("printed");
        });
    });
}

fn serialize_wide_row(c: &mut Criterion) {
    let row: Vec<CharCell> = (0..200)
        .map(|idx| {
            let cell = CharCell::new((b'a' + (idx % 26) as u8) as char).expect("cell");
            if idx % 3 == 0 {
                cell.with_foreground(Color::Cyan).with_bold(true)
            } else {
                cell
            }
        })
        .collect();
    c.bench_function("serialize_wide_row", |b| {
        b.iter(|| black_box(serialize_row(black_box(&row))));
    });
}

fn build_dashboard() -> Plaque {
    let fill = |ch: char| CharCell::new(ch).expect("fill cell");

    let sidebar = Plaque::framed(FrameStyle::Light)
        .with_rel_size(0.25, 1.0)
        .with_abs_size(0, 0)
        .with_pivot(Pivot::TopLeft)
        .with_child(
            Plaque::new()
                .with_rel_size(1.0, 1.0)
                .with_abs_size(0, 0)
                .with_fill(fill('s').with_foreground(Color::Green)),
        );

    let body = Plaque::titled(FrameStyle::Double, "status")
        .expect("titled plaque")
        .with_rel_size(0.75, 1.0)
        .with_abs_size(0, 0)
        .with_rel_pos(1.0, 0.0)
        .with_pivot(Pivot::TopRight)
        .with_child(
            Plaque::new()
                .with_rel_size(0.5, 0.5)
                .with_abs_size(0, 0)
                .with_rel_pos(0.5, 0.5)
                .with_fill(
                    fill('x')
                        .with_background(Color::Blue)
                        .with_foreground(Color::Black),
                ),
        )
        .with_child(
            Plaque::new()
                .with_rel_size(0.3, 0.3)
                .with_abs_size(0, 0)
                .with_rel_pos(1.0, 1.0)
                .with_pivot(Pivot::BottomRight)
                .with_fill(fill('o').with_background(Color::Transparent)),
        );

    Plaque::new()
        .with_rel_size(1.0, 1.0)
        .with_abs_size(0, 0)
        .with_fill(fill('.').with_foreground(Color::White))
        .with_child(sidebar)
        .with_child(body)
}

criterion_group!(benches, render_dashboard, print_dashboard, serialize_wide_row);
criterion_main!(benches);

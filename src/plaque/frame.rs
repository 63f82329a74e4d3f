use crate::cell::CharCell;
use crate::error::{PlaqueError, Result};
use crate::grid::CharGrid;
use crate::layout::Pivot;
use crate::width::char_width;

/// Cell counts reserved from a plaque's interior on each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderInsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl BorderInsets {
    pub const NONE: BorderInsets = BorderInsets {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const RING: BorderInsets = BorderInsets {
        top: 1,
        right: 1,
        bottom: 1,
        left: 1,
    };
}

/// Box-drawing glyph families for framed plaques.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    Light,
    Heavy,
    Double,
}

/// Border glyphs keyed by the nine pivot positions.
///
/// Corners use the corner pivots, edge runs use the edge-midpoint pivots,
/// and the center entry is unused filler. Tables are `const` and resolved
/// once per style.
#[derive(Debug, Clone, Copy)]
pub struct FrameGlyphs {
    glyphs: [char; Pivot::COUNT],
}

impl FrameGlyphs {
    pub const fn of(style: FrameStyle) -> &'static FrameGlyphs {
        match style {
            FrameStyle::Light => &LIGHT,
            FrameStyle::Heavy => &HEAVY,
            FrameStyle::Double => &DOUBLE,
        }
    }

    pub fn at(&self, pivot: Pivot) -> char {
        self.glyphs[pivot.index()]
    }
}

// Table order follows the pivot numbering: center, then clockwise from the
// top-left corner.
const LIGHT: FrameGlyphs = FrameGlyphs {
    glyphs: [' ', '┌', '─', '┐', '│', '┘', '─', '└', '│'],
};
const HEAVY: FrameGlyphs = FrameGlyphs {
    glyphs: [' ', '┏', '━', '┓', '┃', '┛', '━', '┗', '┃'],
};
const DOUBLE: FrameGlyphs = FrameGlyphs {
    glyphs: [' ', '╔', '═', '╗', '║', '╝', '═', '╚', '║'],
};

/// What kind of chrome a plaque carries.
///
/// `Plain` reserves nothing. `Framed` and `Titled` reserve a one-cell ring
/// and draw a box-drawing frame; `Titled` additionally writes a caption
/// into the top border row, centered and truncated to fit.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaqueKind {
    Plain,
    Framed { style: FrameStyle },
    Titled { style: FrameStyle, caption: String },
}

impl PlaqueKind {
    pub fn framed(style: FrameStyle) -> Self {
        PlaqueKind::Framed { style }
    }

    /// A framed kind with a caption. Every caption character must be
    /// exactly one column wide.
    pub fn titled(style: FrameStyle, caption: impl Into<String>) -> Result<Self> {
        let caption = caption.into();
        if let Some(offender) = caption.chars().find(|ch| char_width(*ch) != 1) {
            return Err(PlaqueError::CaptionWidth { caption, offender });
        }
        Ok(PlaqueKind::Titled { style, caption })
    }

    /// Interior space reserved on each edge.
    pub fn insets(&self) -> BorderInsets {
        match self {
            PlaqueKind::Plain => BorderInsets::NONE,
            PlaqueKind::Framed { .. } | PlaqueKind::Titled { .. } => BorderInsets::RING,
        }
    }

    /// Draw this kind's chrome onto a freshly filled grid. The frame cells
    /// inherit the fill's colors and styles.
    pub(crate) fn draw_chrome(&self, grid: &mut CharGrid, fill: &CharCell) {
        let (glyphs, caption) = match self {
            PlaqueKind::Plain => return,
            PlaqueKind::Framed { style } => (FrameGlyphs::of(*style), None),
            PlaqueKind::Titled { style, caption } => (FrameGlyphs::of(*style), Some(caption)),
        };

        let width = grid.width();
        let height = grid.height();
        if width == 0 || height == 0 {
            return;
        }
        let right = width - 1;
        let bottom = height - 1;

        for x in 0..width {
            grid.set(
                x,
                0,
                fill.with_char_unchecked(glyphs.at(Pivot::TopCenter)),
            );
            grid.set(
                x,
                bottom,
                fill.with_char_unchecked(glyphs.at(Pivot::BottomCenter)),
            );
        }
        for y in 0..height {
            grid.set(
                0,
                y,
                fill.with_char_unchecked(glyphs.at(Pivot::CenterLeft)),
            );
            grid.set(
                right,
                y,
                fill.with_char_unchecked(glyphs.at(Pivot::CenterRight)),
            );
        }
        grid.set(0, 0, fill.with_char_unchecked(glyphs.at(Pivot::TopLeft)));
        grid.set(right, 0, fill.with_char_unchecked(glyphs.at(Pivot::TopRight)));
        grid.set(0, bottom, fill.with_char_unchecked(glyphs.at(Pivot::BottomLeft)));
        grid.set(
            right,
            bottom,
            fill.with_char_unchecked(glyphs.at(Pivot::BottomRight)),
        );

        if let Some(caption) = caption {
            draw_caption(grid, fill, caption);
        }
    }
}

fn draw_caption(grid: &mut CharGrid, fill: &CharCell, caption: &str) {
    let interior = grid.width().saturating_sub(2);
    if interior == 0 {
        return;
    }
    let visible: Vec<char> = caption.chars().take(interior).collect();
    let start = 1 + (interior - visible.len()) / 2;
    for (offset, ch) in visible.into_iter().enumerate() {
        grid.set(start + offset, 0, fill.with_char_unchecked(ch));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_reserves_nothing() {
        assert_eq!(PlaqueKind::Plain.insets(), BorderInsets::NONE);
    }

    #[test]
    fn framed_reserves_a_ring() {
        let insets = PlaqueKind::framed(FrameStyle::Light).insets();
        assert_eq!(insets, BorderInsets::RING);
    }

    #[test]
    fn glyph_table_is_pivot_keyed() {
        let glyphs = FrameGlyphs::of(FrameStyle::Light);
        assert_eq!(glyphs.at(Pivot::TopLeft), '┌');
        assert_eq!(glyphs.at(Pivot::BottomRight), '┘');
        assert_eq!(glyphs.at(Pivot::CenterLeft), '│');
        assert_eq!(glyphs.at(Pivot::TopCenter), '─');

        let double = FrameGlyphs::of(FrameStyle::Double);
        assert_eq!(double.at(Pivot::TopLeft), '╔');
    }

    #[test]
    fn every_glyph_is_one_column_wide() {
        for style in [FrameStyle::Light, FrameStyle::Heavy, FrameStyle::Double] {
            let glyphs = FrameGlyphs::of(style);
            for pivot in Pivot::ALL {
                assert_eq!(char_width(glyphs.at(pivot)), 1, "{style:?} {pivot:?}");
            }
        }
    }

    #[test]
    fn titled_rejects_wide_caption_characters() {
        let err = PlaqueKind::titled(FrameStyle::Light, "a界b").unwrap_err();
        match err {
            crate::error::PlaqueError::CaptionWidth { offender, .. } => {
                assert_eq!(offender, '界');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn chrome_draws_ring_and_caption() {
        let kind = PlaqueKind::titled(FrameStyle::Light, "hi").unwrap();
        let fill = CharCell::blank();
        let mut grid = CharGrid::filled(6, 3, fill);
        kind.draw_chrome(&mut grid, &fill);

        assert_eq!(grid.get(0, 0).unwrap().char(), Some('┌'));
        assert_eq!(grid.get(5, 0).unwrap().char(), Some('┐'));
        assert_eq!(grid.get(0, 2).unwrap().char(), Some('└'));
        assert_eq!(grid.get(5, 2).unwrap().char(), Some('┘'));
        assert_eq!(grid.get(0, 1).unwrap().char(), Some('│'));
        assert_eq!(grid.get(5, 1).unwrap().char(), Some('│'));
        // Caption "hi" centered in the 4-cell interior of the top row.
        assert_eq!(grid.get(2, 0).unwrap().char(), Some('h'));
        assert_eq!(grid.get(3, 0).unwrap().char(), Some('i'));
        assert_eq!(grid.get(1, 0).unwrap().char(), Some('─'));
        // Interior untouched.
        assert_eq!(grid.get(2, 1).unwrap().char(), Some(' '));
    }
}

use crate::cell::CharCell;
use crate::error::Result;
use crate::grid::CharGrid;
use crate::layout::{AxisSpec, Pivot, resolve_axis};
use crate::plaque::frame::{FrameStyle, PlaqueKind};

/// A positioned, sized rectangular node in the composition tree.
///
/// A plaque places itself inside the space its parent offers, combining
/// absolute cell counts with fractions of the parent's size, anchored by
/// its pivot. Children are owned exclusively by their parent and painted
/// in insertion order, later children on top. Rendering never mutates the
/// tree, so independent subtrees may render on separate threads as long
/// as nothing mutates a plaque while it renders.
#[derive(Debug)]
pub struct Plaque {
    pub horizontal: AxisSpec,
    pub vertical: AxisSpec,
    pub pivot: Pivot,
    pub kind: PlaqueKind,
    pub fill: CharCell,
    pub visible: bool,
    pub children: Vec<Plaque>,
}

/// Result of rendering a plaque: the composited (already cropped) grid and
/// the resolved position of the untrimmed box in the parent's coordinates.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub grid: CharGrid,
    pub h_pos: i32,
    pub v_pos: i32,
}

impl Default for Plaque {
    fn default() -> Self {
        Self {
            horizontal: AxisSpec::default(),
            vertical: AxisSpec::default(),
            pivot: Pivot::CenterCenter,
            kind: PlaqueKind::Plain,
            fill: CharCell::default(),
            visible: true,
            children: Vec::new(),
        }
    }
}

impl Plaque {
    pub fn new() -> Self {
        Self::default()
    }

    /// A plaque that draws a box-drawing frame and insets its children by
    /// one cell on every edge.
    pub fn framed(style: FrameStyle) -> Self {
        Self {
            kind: PlaqueKind::framed(style),
            ..Self::default()
        }
    }

    /// A framed plaque with a caption in the top border row.
    pub fn titled(style: FrameStyle, caption: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: PlaqueKind::titled(style, caption)?,
            ..Self::default()
        })
    }

    pub fn with_abs_pos(mut self, h: i32, v: i32) -> Self {
        self.horizontal.abs_pos = h;
        self.vertical.abs_pos = v;
        self
    }

    pub fn with_rel_pos(mut self, h: f64, v: f64) -> Self {
        self.horizontal.rel_pos = h;
        self.vertical.rel_pos = v;
        self
    }

    pub fn with_abs_size(mut self, h: i32, v: i32) -> Self {
        self.horizontal.abs_size = h;
        self.vertical.abs_size = v;
        self
    }

    pub fn with_rel_size(mut self, h: f64, v: f64) -> Self {
        self.horizontal.rel_size = h;
        self.vertical.rel_size = v;
        self
    }

    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_h_fit(mut self, move_to_fit: bool, resize_to_fit: bool) -> Self {
        self.horizontal.move_to_fit = move_to_fit;
        self.horizontal.resize_to_fit = resize_to_fit;
        self
    }

    pub fn with_v_fit(mut self, move_to_fit: bool, resize_to_fit: bool) -> Self {
        self.vertical.move_to_fit = move_to_fit;
        self.vertical.resize_to_fit = resize_to_fit;
        self
    }

    pub fn with_fill(mut self, fill: CharCell) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append a child in paint order (later children draw on top).
    pub fn with_child(mut self, child: Plaque) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: Plaque) {
        self.children.push(child);
    }

    /// Structurally independent copy of the layout parameters and fill.
    /// Children are not carried over.
    pub fn duplicate(&self) -> Plaque {
        Plaque {
            horizontal: self.horizontal,
            vertical: self.vertical,
            pivot: self.pivot,
            kind: self.kind.clone(),
            fill: self.fill,
            visible: self.visible,
            children: Vec::new(),
        }
    }

    /// Render this plaque against the offered space.
    ///
    /// Resolves both axes, fills a grid of the untrimmed size with the
    /// fill cell, draws the kind's chrome, composites each visible child
    /// rendered against the inset interior, then crops the trims away.
    /// Returns `None` when the plaque is fully off-screen or zero-area.
    pub fn render(&self, h_avail: i32, v_avail: i32) -> Option<Rendered> {
        let h = resolve_axis(h_avail, self.pivot.h_shift(), self.horizontal);
        let v = resolve_axis(v_avail, self.pivot.v_shift(), self.vertical);
        if h.is_empty() || v.is_empty() {
            return None;
        }

        let mut grid = CharGrid::filled(h.size as usize, v.size as usize, self.fill);
        self.kind.draw_chrome(&mut grid, &self.fill);

        let insets = self.kind.insets();
        let inner_w = h.size - insets.left - insets.right;
        let inner_h = v.size - insets.top - insets.bottom;
        for child in &self.children {
            if !child.visible {
                continue;
            }
            if let Some(rendered) = child.render(inner_w, inner_h) {
                grid.overlay(
                    &rendered.grid,
                    rendered.h_pos + insets.left,
                    rendered.v_pos + insets.top,
                );
            }
        }

        let grid = grid.crop(
            h.trim_leading as usize,
            h.trim_trailing as usize,
            v.trim_leading as usize,
            v.trim_trailing as usize,
        );
        Some(Rendered {
            grid,
            h_pos: h.pos,
            v_pos: v.pos,
        })
    }
}

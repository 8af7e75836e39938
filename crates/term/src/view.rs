//! LifeView: maps a world snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_life_core::WorldSnapshot;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Run-loop facts shown beside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStatus<'a> {
    pub pattern: &'a str,
    pub step_ms: u64,
    pub paused: bool,
    pub adjust: bool,
}

/// Columns and rows of the bounded grid a snapshot projects into.
///
/// The grid starts at the lattice origin and extends one margin past the
/// population's bounding-box maxima: an adjusted population sits at the
/// left/top margins already, so `max + margin` cells frame the shape evenly.
/// When nothing is alive the grid keeps its margins-only size so the frame
/// never collapses.
pub fn grid_size(snap: &WorldSnapshot) -> (u16, u16) {
    let m = snap.margins;
    let (cols, rows) = match snap.bounds {
        Some(b) => (b.max_x + m.right, b.max_y + m.bottom),
        None => (m.left + m.right, m.top + m.bottom),
    };
    (clamp_dim(cols), clamp_dim(rows))
}

fn clamp_dim(v: i64) -> u16 {
    v.clamp(0, u16::MAX as i64) as u16
}

fn decimal_width(mut v: u64) -> u16 {
    let mut w = 1;
    while v >= 10 {
        v /= 10;
        w += 1;
    }
    w
}

/// A lightweight terminal view of the Life grid.
pub struct LifeView {
    /// Life cell width in terminal columns.
    cell_w: u16,
    /// Life cell height in terminal rows.
    cell_h: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl LifeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport, so callers can reuse one
    /// across frames. The grid is anchored at the terminal's top-left; cells
    /// that fall outside the frame (negative coordinates with adjustment
    /// off, or a grid larger than the viewport) are clipped.
    pub fn render_into(
        &self,
        snap: &WorldSnapshot,
        status: &DriverStatus<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let (grid_cols, grid_rows) = grid_size(snap);

        // Clip the grid to what the viewport can frame.
        let max_cols = viewport.width.saturating_sub(2) / self.cell_w;
        let max_rows = viewport.height.saturating_sub(2) / self.cell_h;
        let cols = grid_cols.min(max_cols);
        let rows = grid_rows.min(max_rows);

        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows * self.cell_h + 2;

        let field = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(24, 24, 32),
            bold: false,
            dim: true,
        };
        let alive = CellStyle {
            fg: Rgb::new(120, 220, 140),
            bg: Rgb::new(24, 24, 32),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        for cy in 0..rows {
            for cx in 0..cols {
                self.fill_cell(fb, cx as i64, cy as i64, '·', field);
            }
        }

        for &(x, y) in &snap.cells {
            if x < 0 || y < 0 || x >= cols as i64 || y >= rows as i64 {
                continue;
            }
            self.fill_cell(fb, x, y, '█', alive);
        }

        self.draw_border(fb, frame_w, frame_h, border);
        self.draw_side_panel(fb, snap, status, viewport, frame_w);

        if status.paused {
            self.draw_overlay_text(fb, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &WorldSnapshot,
        status: &DriverStatus<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, cx: i64, cy: i64, ch: char, style: CellStyle) {
        let px = 1 + cx * self.cell_w as i64;
        let py = 1 + cy * self.cell_h as i64;
        if px < 0 || py < 0 || px >= fb.width() as i64 || py >= fb.height() as i64 {
            return;
        }
        fb.fill_rect(px as u16, py as u16, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', style);
            fb.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        status: &DriverStatus<'_>,
        viewport: Viewport,
        frame_w: u16,
    ) {
        let panel_x = frame_w.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = 0;
        fb.put_str(panel_x, y, "PATTERN", label);
        y += 1;
        fb.put_str(panel_x, y, status.pattern, value);
        y += 2;

        fb.put_str(panel_x, y, "GEN", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.generation, value);
        y += 2;

        fb.put_str(panel_x, y, "CELLS", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.population() as u64, value);
        y += 2;

        fb.put_str(panel_x, y, "DELAY", label);
        y += 1;
        fb.put_u64(panel_x, y, status.step_ms, value);
        let unit_x = panel_x.saturating_add(decimal_width(status.step_ms) + 1);
        fb.put_str(unit_x, y, "ms", value);
        y += 2;

        fb.put_str(panel_x, y, "ADJUST", label);
        y += 1;
        fb.put_str(panel_x, y, if status.adjust { "on" } else { "off" }, value);
        y += 2;

        for line in ["p pause", "n step", "+/- speed", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame_w: u16, frame_h: u16, text: &str) {
        let mid_y = frame_h / 2;
        let text_w = text.chars().count() as u16;
        let x = frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be checked in tests.

use crate::core::pieces::{definition, EMPTY};
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::GamePhase;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame lands in a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    /// Top-left border corner.
    pub x: u16,
    pub y: u16,
    /// Size including the border.
    pub width: u16,
    pub height: u16,
}

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 12;

const SCREEN_BG: Rgb = Rgb::BLACK;
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), SCREEN_BG);
const VALUE: CellStyle = CellStyle::new(Rgb::new(235, 235, 235), SCREEN_BG).bold();
const OVERLAY: CellStyle = CellStyle::new(Rgb::WHITE, SCREEN_BG).bold();
const GRID_DOT: Rgb = Rgb::new(90, 90, 100);
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), SCREEN_BG).dim();

/// Renders the playfield, the stats panel and the phase overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell size in terminal columns / rows.
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares the cells on typical terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame position for a snapshot's board in `viewport`.
    pub fn board_frame(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardFrame {
        let width = snap.board.width() as u16 * self.cell_w + 2;
        let height = snap.board.height() as u16 * self.cell_h + 2;

        // Leave room for the panel on the right when the terminal is wide.
        let total_w = width + PANEL_GAP + PANEL_MIN_W;
        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(width) / 2
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };

        BoardFrame {
            x,
            y,
            width,
            height,
        }
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(SCREEN_BG, SCREEN_BG)));

        let frame = self.board_frame(snap, viewport);
        self.draw_border(fb, frame);
        self.draw_cells(fb, snap, frame);
        self.draw_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::NotStarted => {
                self.draw_overlay(fb, frame, &["COLORFALL", "", "PRESS ENTER"]);
            }
            GamePhase::GameOver => {
                let top = self.draw_overlay(
                    fb,
                    frame,
                    &["GAME OVER", "", "FINAL SCORE", "", "", "ENTER: RESTART"],
                );
                let w = decimal_width(snap.score);
                let x = frame.x.saturating_add(frame.width.saturating_sub(w) / 2);
                fb.put_u32(x, top.saturating_add(3), snap.score, OVERLAY);
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: BoardFrame) {
        let BoardFrame {
            x,
            y,
            width: w,
            height: h,
        } = frame;
        if w < 2 || h < 2 {
            return;
        }

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
    }

    /// Locked cells with the active piece drawn on top.
    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: BoardFrame) {
        let well_bg = Rgb::from(EMPTY.color.rgb);

        for by in 0..snap.board.height() as u16 {
            for bx in 0..snap.board.width() as u16 {
                let px = frame.x + 1 + bx * self.cell_w;
                let py = frame.y + 1 + by * self.cell_h;

                match snap.cell_at(bx as i16, by as i16) {
                    Some(kind) => {
                        let color = Rgb::from(definition(kind).color.rgb);
                        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', CellStyle::new(color, well_bg));
                    }
                    None => {
                        let style = CellStyle::new(GRID_DOT, well_bg);
                        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                        fb.put_char(px, py, '·', style.dim());
                    }
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: BoardFrame) {
        let panel_x = frame.x.saturating_add(frame.width).saturating_add(PANEL_GAP);
        if panel_x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }

        let mut y = frame.y.saturating_add(1);
        for (label, value) in [
            ("SCORE", snap.score),
            ("ROWS", snap.rows_cleared),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        if let Some(active) = snap.active {
            let color = Rgb::from(definition(active.kind).color.rgb);
            fb.put_str(panel_x, y, "PIECE", LABEL);
            let style = CellStyle::new(color, SCREEN_BG).bold();
            fb.put_str(panel_x, y.saturating_add(1), active.kind.as_str(), style);
            y = y.saturating_add(3);
        }

        let hints = match snap.phase {
            GamePhase::Playing => &["←/→  move", "↑    rotate", "↓    drop", "q    quit"][..],
            _ => &["Enter start", "q     quit"][..],
        };
        for hint in hints {
            if y >= frame.y.saturating_add(frame.height) {
                break;
            }
            fb.put_str(panel_x, y, hint, HINT);
            y = y.saturating_add(1);
        }
    }

    /// Centre `lines` on the board. Returns the row of the first line.
    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: BoardFrame, lines: &[&str]) -> u16 {
        let top = frame
            .y
            .saturating_add(frame.height / 2)
            .saturating_sub(lines.len() as u16 / 2);

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let w = line.chars().count() as u16;
            let x = frame.x.saturating_add(frame.width.saturating_sub(w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), line, OVERLAY);
        }
        top
    }
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

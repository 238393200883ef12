//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and only ever reads game state. The visible
//! play area is drawn inside a box border, centered in the viewport; the
//! floor sentinel rows are never drawn.

use crate::core::GameState;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GRID_VISIBLE_HEIGHT, GRID_WIDTH};

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

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_px_h = (GRID_VISIBLE_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 20, 26),
            bold: false,
            dim: true,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let block = Style {
            fg: Rgb::new(120, 200, 120),
            bg: Rgb::new(20, 20, 26),
            bold: true,
            dim: false,
        };

        // Play area background with grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, '·', bg);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Merged board cells (visible rows only).
        for (y, row) in game.board().visible_rows().enumerate() {
            for x in 0..GRID_WIDTH {
                if row & (1 << x) != 0 {
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', block);
                }
            }
        }

        // Active piece, skipped while no piece is falling.
        if let Some(piece) = game.active() {
            for (x, y) in piece.cells() {
                if y < GRID_VISIBLE_HEIGHT {
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', block);
                }
            }
        }

        self.draw_help(fb, start_x, start_y + frame_h, frame_w, viewport);

        if game.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, viewport: Viewport) {
        if y >= viewport.height {
            return;
        }
        let help = "←/→ move  r reset  q quit";
        let text_w = help.chars().count() as u16;
        let hx = x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            dim: true,
            ..Style::default()
        };
        fb.put_str(hx, y, help, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

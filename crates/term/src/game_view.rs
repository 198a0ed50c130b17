//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, GridConfig, HighScoreEntry, MAX_HIGH_SCORES, MAX_HISTORY};

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

const BOARD_BG: Rgb = Rgb::new(22, 28, 24);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the word snake.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
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

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_scores(snap, &[], viewport, fb);
    }

    pub fn render_into_with_scores(
        &self,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let frame = self.frame(snap.grid, viewport);
        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            Style::new(Rgb::new(70, 80, 70), BOARD_BG),
        );
        self.draw_border(fb, frame, border);

        for y in 0..snap.grid.rows {
            for x in 0..snap.grid.columns {
                self.draw_empty_cell(fb, frame, x, y);
            }
        }

        let tile_style = Style::new(Rgb::new(20, 20, 20), Rgb::new(240, 200, 80)).bold();
        for tile in &snap.tiles {
            self.draw_letter_cell(fb, snap.grid, frame, tile.cell, tile.letter, tile_style);
        }

        // Tail first so the head wins if anything overlaps.
        let body = Style::new(Rgb::new(10, 30, 10), Rgb::new(90, 200, 110));
        let head = Style::new(Rgb::new(10, 30, 10), Rgb::new(150, 240, 150)).bold();
        for (i, &cell) in snap.snake.iter().enumerate().rev() {
            let (ch, style) = match (i, snap.letter_on_segment(i)) {
                (0, _) => ('@', head),
                (_, Some(letter)) => (letter, body.bold()),
                (_, None) => (' ', body),
            };
            self.draw_letter_cell(fb, snap.grid, frame, cell, ch, style);
        }

        self.draw_side_panel(fb, snap, high_scores, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_scores(snap, &[], viewport)
    }

    pub fn render_with_scores(
        &self,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_scores(snap, high_scores, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left glyph of a grid cell.
    pub fn cell_origin(&self, grid: GridConfig, viewport: Viewport, cell: Cell) -> Option<(u16, u16)> {
        if !grid.contains(cell) {
            return None;
        }
        let frame = self.frame(grid, viewport);
        Some(self.cell_px(frame, cell.x as u16, cell.y as u16))
    }

    fn frame(&self, grid: GridConfig, viewport: Viewport) -> Frame {
        let w = grid.columns.saturating_mul(self.cell_w).saturating_add(2);
        let h = grid.rows.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn cell_px(&self, frame: Frame, cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            frame.x + 1 + cell_x * self.cell_w,
            frame.y + 1 + cell_y * self.cell_h,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: Style) {
        let Frame { x, y, w, h } = frame;
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = Style::new(Rgb::new(70, 85, 75), BOARD_BG).dim();
        let (px, py) = self.cell_px(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    /// Fill one grid cell and put `ch` in its top-left glyph.
    fn draw_letter_cell(
        &self,
        fb: &mut FrameBuffer,
        grid: GridConfig,
        frame: Frame,
        cell: Cell,
        ch: char,
        style: Style,
    ) {
        if !grid.contains(cell) {
            return;
        }
        let (px, py) = self.cell_px(frame, cell.x as u16, cell.y as u16);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();
        let bottom = viewport.height;

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WORD", label);
        y = y.saturating_add(1);
        if snap.current_word.is_empty() {
            fb.put_str(panel_x, y, "-", dim);
        } else {
            fb.put_str(panel_x, y, &snap.current_word, value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LETTERS", label);
        y = y.saturating_add(1);
        // Newest letters are at the end; keep them visible on narrow panels.
        let skip = snap.snake_letters.len().saturating_sub(panel_w as usize);
        let mut x = panel_x;
        for &letter in &snap.snake_letters[skip..] {
            fb.put_char(x, y, letter, value);
            x += 1;
        }
        if snap.snake_letters.is_empty() {
            fb.put_str(panel_x, y, "-", dim);
        }
        y = y.saturating_add(2);

        if y < bottom && !snap.history.is_empty() {
            fb.put_str(panel_x, y, "WORDS", label);
            y = y.saturating_add(1);
            for entry in snap.history.iter().take(MAX_HISTORY) {
                if y >= bottom {
                    break;
                }
                let end = fb.put_str(panel_x, y, &entry.word, value);
                fb.put_char(end + 1, y, '+', dim);
                fb.put_u32(end + 2, y, entry.points, dim);
                y = y.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        if y < bottom && !high_scores.is_empty() {
            fb.put_str(panel_x, y, "HIGH SCORES", label);
            y = y.saturating_add(1);
            for (rank, entry) in high_scores.iter().take(MAX_HIGH_SCORES).enumerate() {
                if y >= bottom {
                    break;
                }
                let end = fb.put_u32(panel_x, y, rank as u32 + 1, dim);
                let end = fb.put_u32(end + 1, y, entry.score, value);
                if panel_w >= 24 {
                    fb.put_str(end + 1, y, &entry.date, dim);
                }
                y = y.saturating_add(1);
            }
        }

        let hint_y = frame.y.saturating_add(frame.h).saturating_sub(1);
        if hint_y < bottom && hint_y >= y {
            fb.put_str(panel_x, hint_y, "ESC QUIT", dim);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let score = format!("FINAL SCORE {}", snap.score);
        let lines = [
            (mid_y.saturating_sub(1), "GAME OVER"),
            (mid_y, score.as_str()),
            (mid_y.saturating_add(1), "SPACE TO RESTART"),
        ];
        for (y, text) in lines {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            fb.put_str(x, y, text, style);
        }
    }
}

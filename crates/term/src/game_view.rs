//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Snake head.
pub const HEAD_STYLE: CellStyle = CellStyle::new(Rgb::new(50, 255, 50), BOARD_BG).bold();
/// Snake body segments.
pub const BODY_STYLE: CellStyle = CellStyle::new(Rgb::new(0, 150, 0), BOARD_BG);
pub const FOOD_STYLE: CellStyle = CellStyle::new(Rgb::new(230, 40, 40), BOARD_BG).bold();

const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(0, 100, 0), PANEL_BG);
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const STATUS_STYLE: CellStyle = CellStyle::new(Rgb::new(240, 220, 60), PANEL_BG);

const SEGMENT: char = '█';
const FOOD: char = '●';

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

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone)]
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
        Self::new(2, 1)
    }
}

/// Screen-space placement of the board frame for one render.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
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

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.grid_width.saturating_mul(self.cell_w).saturating_add(2),
            snap.grid_height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        // One extra row under the frame for the status line.
        let block_h = frame_h.saturating_add(1);
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        };

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, layout);

        // A stopped board is drawn dimmed under its overlay.
        let stopped = snap.paused || snap.game_over;
        let shade = |style: CellStyle| if stopped { style.dim() } else { style };

        if let Some(food) = snap.food {
            self.draw_grid_cell(fb, layout, food, FOOD, shade(FOOD_STYLE));
        }

        // Tail first so the head always wins.
        for (i, &seg) in snap.snake.iter().enumerate().rev() {
            let style = if i == 0 { HEAD_STYLE } else { BODY_STYLE };
            self.draw_grid_cell(fb, layout, seg, SEGMENT, shade(style));
        }

        self.draw_status_line(fb, snap, layout);
        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over {
            self.draw_game_over(fb, snap, layout);
        } else if snap.paused {
            self.draw_centered(fb, layout, layout.frame_h / 2, "PAUSED", LABEL_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        if l.frame_w < 2 || l.frame_h < 2 {
            return;
        }
        let (right, bottom) = (l.x + l.frame_w - 1, l.y + l.frame_h - 1);

        fb.put_char(l.x, l.y, '┌', BORDER_STYLE);
        fb.put_char(right, l.y, '┐', BORDER_STYLE);
        fb.put_char(l.x, bottom, '└', BORDER_STYLE);
        fb.put_char(right, bottom, '┘', BORDER_STYLE);
        for x in l.x + 1..right {
            fb.put_char(x, l.y, '─', BORDER_STYLE);
            fb.put_char(x, bottom, '─', BORDER_STYLE);
        }
        for y in l.y + 1..bottom {
            fb.put_char(l.x, y, '│', BORDER_STYLE);
            fb.put_char(right, y, '│', BORDER_STYLE);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        p: Position,
        ch: char,
        style: CellStyle,
    ) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(p.x), u16::try_from(p.y)) else {
            return;
        };
        let px = l.x.saturating_add(1).saturating_add(cx.saturating_mul(self.cell_w));
        let py = l.y.saturating_add(1).saturating_add(cy.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: Layout,
    ) {
        let panel_x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let fields = [
            ("SCORE", snap.score, ""),
            ("LENGTH", snap.snake.len() as u32, ""),
            ("SPEED", snap.tick_interval_ms, "ms"),
            ("GAME", snap.episode_id.saturating_add(1), ""),
        ];
        let mut y = l.y;
        for (label, value, unit) in fields {
            // Label and value rows must both fit.
            if y.saturating_add(1) >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, label, LABEL_STYLE);
            let end = fb.put_u32(panel_x, y.saturating_add(1), value, VALUE_STYLE);
            fb.put_str(end, y.saturating_add(1), unit, VALUE_STYLE);
            y = y.saturating_add(3);
        }
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: Layout) {
        let text = if snap.game_over {
            "GAME OVER - R to restart"
        } else if snap.paused {
            "PAUSED - SPACE to resume"
        } else {
            "SPACE pause | arrows move"
        };
        // Kept to the frame width so it never runs under the side panel.
        let right = l.x.saturating_add(l.frame_w);
        fb.put_str_until(l.x, l.y.saturating_add(l.frame_h), text, right, STATUS_STYLE);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: Layout) {
        let mid = l.frame_h / 2;
        // Food is only missing once the snake fills the whole grid.
        let title = if snap.food.is_none() { "YOU WIN" } else { "GAME OVER" };
        let title_style = CellStyle {
            fg: FOOD_STYLE.fg,
            ..LABEL_STYLE
        };
        self.draw_centered(fb, l, mid.saturating_sub(1), title, title_style);

        let label = "Final Score: ";
        let w = label.len() as u16 + digit_count(snap.score);
        let x = l.x.saturating_add(l.frame_w.saturating_sub(w) / 2);
        let y = l.y.saturating_add(mid);
        let end = fb.put_str(x, y, label, STATUS_STYLE);
        fb.put_u32(end, y, snap.score, STATUS_STYLE);

        self.draw_centered(fb, l, mid.saturating_add(1), "Press R to restart", VALUE_STYLE);
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        row: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = l.x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, l.y.saturating_add(row), text, style);
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

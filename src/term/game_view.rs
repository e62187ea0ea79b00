//! GameView: maps the simulation state into a framebuffer. Pure, no I/O.

use crate::core::Game;
use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

pub struct GameView {
    /// Terminal columns per board cell. Two columns per cell roughly
    /// squares up the typical glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, origin_x, origin_y, frame_w, frame_h);

        // Settled cells.
        let cells = game.board().cells();
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)];
                match cell {
                    Some(kind) => self.draw_cell(&mut fb, origin_x, origin_y, x, y, kind),
                    None => self.draw_floor(&mut fb, origin_x, origin_y, x, y),
                }
            }
        }

        // Falling piece; cells above the visible top stay hidden.
        if let Some(piece) = game.active() {
            for (dx, dy) in piece.grid.occupied_offsets() {
                let (x, y) = (piece.x + dx, piece.y + dy);
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_cell(&mut fb, origin_x, origin_y, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_hud(&mut fb, game, origin_x + frame_w + 2, origin_y);

        if game.is_game_over() {
            self.draw_banner(&mut fb, origin_x, origin_y + frame_h / 2, frame_w, "GAME OVER");
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..GlyphStyle::default()
        };
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16, kind: PieceKind) {
        let style = GlyphStyle {
            fg: kind_color(kind),
            bg: Rgb::new(25, 25, 35),
            bold: true,
            dim: false,
        };
        fb.fill_rect(ox + 1 + x * self.cell_w, oy + 1 + y, self.cell_w, 1, '█', style);
    }

    fn draw_floor(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(70, 70, 85),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: true,
        };
        fb.fill_rect(ox + 1 + x * self.cell_w, oy + 1 + y, self.cell_w, 1, '·', style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, game: &Game, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        let value = GlyphStyle::default();
        let hint = GlyphStyle {
            dim: true,
            ..GlyphStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &game.score().to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &game.level().to_string(), value);

        fb.put_str(x, y + 7, "←/→ move", hint);
        fb.put_str(x, y + 8, "↑ rotate", hint);
        fb.put_str(x, y + 9, "↓ soft drop", hint);
        fb.put_str(x, y + 10, "r restart  q quit", hint);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 20, 20),
            bold: true,
            dim: false,
        };
        let text_w = text.chars().count() as u16;
        fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

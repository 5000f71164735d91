//! Scene: the terminal implementation of the core [`Renderer`].
//!
//! Pure (no I/O). Each frame is drawn into an owned [`FrameBuffer`] that the
//! terminal renderer flushes afterwards. Board blocks are two columns wide and
//! one row tall to make up for the usual terminal glyph aspect ratio.

use crate::core::{Board, Layout, Piece, Renderer};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::PieceColor;

const PLAY_LABEL: &str = "[ PLAY ]";
const GAME_OVER_LABEL: &str = "GAME OVER";

const BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED: Rgb = Rgb::new(128, 128, 128);

/// Terminal dimensions in cells
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

/// Map a palette token to a terminal color
pub fn rgb_for(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Black => Rgb::new(0, 0, 0),
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::White => Rgb::new(255, 255, 255),
    }
}

pub struct Scene {
    fb: FrameBuffer,
    viewport: Viewport,
    block_w: u16,
    block_h: u16,
    /// Layout of the board drawn this frame
    layout: Layout,
    play_button: Option<Rect>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            block_w: 2,
            block_h: 1,
            layout: Layout::default(),
            play_button: None,
        }
    }

    /// Takes effect on the next `clear`.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Mutable access for the terminal renderer's buffer swap
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Where the Play label was drawn this frame, if it was
    pub fn play_button(&self) -> Option<Rect> {
        self.play_button
    }

    pub fn play_button_contains(&self, x: u16, y: u16) -> bool {
        self.play_button.is_some_and(|r| r.contains(x, y))
    }

    fn fill_block(&mut self, layout: &Layout, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some((px, py)) = layout.cell_origin(x, y) {
            self.fb
                .fill_rect(Rect::new(px, py, layout.block_w, layout.block_h), ch, style);
        }
    }

    fn panel_x(&self) -> u16 {
        self.layout
            .offset_x
            .saturating_add(self.layout.width)
            .saturating_add(3)
    }

    /// Draw `text` centered over the play area, `dy` rows below its middle
    fn centered_label(&mut self, text: &str, dy: u16, style: CellStyle) -> Rect {
        let w = text.chars().count() as u16;
        let x = self
            .layout
            .offset_x
            .saturating_add(self.layout.width.saturating_sub(w) / 2);
        let y = self
            .layout
            .offset_y
            .saturating_add(self.layout.height / 2)
            .saturating_add(dy);
        self.fb.put_str(x, y, text, style);
        Rect::new(x, y, w, 1)
    }
}

impl Renderer for Scene {
    fn layout(&self, rows: usize, cols: usize) -> Layout {
        Layout::centered(self.viewport.width, rows, cols, self.block_w, self.block_h)
    }

    fn clear(&mut self) {
        self.fb.resize(self.viewport.width, self.viewport.height);
        self.fb.clear(Cell::default());
        self.play_button = None;
    }

    fn render_board(&mut self, board: &Board, layout: &Layout) {
        self.layout = *layout;
        let locked = CellStyle::new(LOCKED, WELL_BG);
        let empty = CellStyle::new(Rgb::new(70, 70, 80), WELL_BG);

        for y in 0..board.rows() as i32 {
            for x in 0..board.cols() as i32 {
                if board.is_occupied(x, y) {
                    self.fill_block(layout, x, y, '█', locked);
                } else {
                    self.fill_block(layout, x, y, '·', empty);
                }
            }
        }
    }

    fn render_piece(&mut self, piece: &Piece, layout: &Layout) {
        let style = CellStyle::new(rgb_for(piece.color()), WELL_BG).bold();
        for &(x, y) in piece.blocks() {
            self.fill_block(layout, x, y, '█', style);
        }
    }

    fn render_score(&mut self, score: u32) {
        let x = self.panel_x();
        let y = self.layout.offset_y;
        self.fb.put_str(x, y, "SCORE", CellStyle::default().bold());
        self.fb.put_u32(x, y.saturating_add(1), score, CellStyle::default());
    }

    fn render_next(&mut self, piece: &Piece) {
        let x = self.panel_x();
        let y = self.layout.offset_y.saturating_add(3);
        self.fb.put_str(x, y, "NEXT", CellStyle::default().bold());

        let (px, py) = piece.pivot();
        let style = CellStyle::new(rgb_for(piece.color()), BG);
        for &(bx, by) in piece.blocks() {
            let cx = x.saturating_add((bx - px) as u16 * self.block_w);
            let cy = y.saturating_add(1).saturating_add((by - py) as u16 * self.block_h);
            self.fb
                .fill_rect(Rect::new(cx, cy, self.block_w, self.block_h), '█', style);
        }
    }

    fn render_game_over(&mut self) {
        let style = CellStyle::new(rgb_for(PieceColor::Red), BG).bold();
        self.centered_label(GAME_OVER_LABEL, 0, style);
    }

    fn draw_border(&mut self, layout: &Layout) {
        let rect = Rect::new(
            layout.offset_x.saturating_sub(1),
            layout.offset_y.saturating_sub(1),
            layout.width.saturating_add(2),
            layout.height.saturating_add(2),
        );
        self.fb
            .stroke_rect(rect, CellStyle::new(Rgb::new(200, 200, 200), BG));
    }

    fn render_play_button(&mut self) {
        let style = CellStyle::new(BG, rgb_for(PieceColor::Green)).bold();
        let rect = self.centered_label(PLAY_LABEL, 2, style);
        self.play_button = Some(rect);
    }
}

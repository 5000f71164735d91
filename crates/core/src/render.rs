//! Renderer contract
//!
//! The controller hands its state to a [`Renderer`] once per frame. Implementors
//! only supply the primitive drawing steps; [`Renderer::render`] composes them in
//! a fixed order (clear, board, piece, score, border, game-over banner).

use crate::board::Board;
use crate::piece::Piece;

/// Where the play area sits on the drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Block width in surface units
    pub block_w: u16,
    /// Block height in surface units
    pub block_h: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    /// Play area width (`cols * block_w`)
    pub width: u16,
    /// Play area height (`rows * block_h`)
    pub height: u16,
}

impl Layout {
    /// Center the play area horizontally and leave one block of margin on top.
    pub fn centered(
        surface_w: u16,
        rows: usize,
        cols: usize,
        block_w: u16,
        block_h: u16,
    ) -> Self {
        let width = (cols as u16).saturating_mul(block_w);
        let height = (rows as u16).saturating_mul(block_h);
        Self {
            block_w,
            block_h,
            offset_x: surface_w.saturating_sub(width) / 2,
            offset_y: block_h,
            width,
            height,
        }
    }

    /// Surface position of board cell (x, y). `None` for cells above the board.
    pub fn cell_origin(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 {
            return None;
        }
        let px = self.offset_x as u32 + x as u32 * self.block_w as u32;
        let py = self.offset_y as u32 + y as u32 * self.block_h as u32;
        Some((u16::try_from(px).ok()?, u16::try_from(py).ok()?))
    }
}

/// Whether the scheduler should keep calling `frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// A drawing surface the game can paint itself onto
pub trait Renderer {
    /// Play area placement for a board of the given size
    fn layout(&self, rows: usize, cols: usize) -> Layout;

    fn clear(&mut self);

    /// Paint the locked cells
    fn render_board(&mut self, board: &Board, layout: &Layout);

    /// Paint the falling piece
    fn render_piece(&mut self, piece: &Piece, layout: &Layout);

    fn render_score(&mut self, score: u32);

    fn render_game_over(&mut self);

    fn draw_border(&mut self, layout: &Layout);

    /// Preview of the upcoming piece
    fn render_next(&mut self, _piece: &Piece) {}

    /// The affordance that starts a new session
    fn render_play_button(&mut self) {}

    fn render(
        &mut self,
        board: &Board,
        active: Option<&Piece>,
        score: u32,
        is_game_over: bool,
        layout: &Layout,
    ) {
        self.clear();
        self.render_board(board, layout);
        if let Some(piece) = active {
            self.render_piece(piece, layout);
        }
        self.render_score(score);
        self.draw_border(layout);
        if is_game_over {
            self.render_game_over();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_layout_leaves_top_margin() {
        let layout = Layout::centered(80, 20, 10, 2, 1);
        assert_eq!(layout.width, 20);
        assert_eq!(layout.height, 20);
        assert_eq!(layout.offset_x, 30);
        assert_eq!(layout.offset_y, 1);
    }

    #[test]
    fn cell_origin_scales_by_block_size() {
        let layout = Layout::centered(80, 20, 10, 2, 1);
        assert_eq!(layout.cell_origin(0, 0), Some((30, 1)));
        assert_eq!(layout.cell_origin(9, 19), Some((48, 20)));
        assert_eq!(layout.cell_origin(0, -1), None);
    }

    #[test]
    fn narrow_surface_pins_area_left() {
        let layout = Layout::centered(10, 20, 10, 2, 1);
        assert_eq!(layout.offset_x, 0);
    }
}

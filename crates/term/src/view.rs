//! PlayfieldView: maps a [`Session`] into a framebuffer.
//!
//! This module is pure (no I/O). Grid positions go through
//! [`scale`] so one grid cell covers `cell_w x cell_h` terminal
//! cells; the default 2x1 compensates for tall terminal glyphs.

use crate::core::transform::scale;
use crate::core::{Grid, Session};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::palette::{kind_color, settled_color, BORDER, PLAYFIELD};
use crate::types::Point;

const GAME_OVER: &str = "Game Over";

pub struct PlayfieldView {
    /// Top-left corner of the border, in grid-cell units.
    origin: Point,
    cell_w: i32,
    cell_h: i32,
    /// Score label position, in terminal cells.
    score_at: Point,
}

impl Default for PlayfieldView {
    fn default() -> Self {
        Self {
            origin: Point::new(20, 0),
            cell_w: 2,
            cell_h: 1,
            score_at: Point::new(5, 3),
        }
    }
}

impl PlayfieldView {
    pub fn new(origin: Point, cell_w: i32, cell_h: i32) -> Self {
        Self {
            origin,
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    /// Terminal position of the top-left corner of a grid cell.
    ///
    /// `(0, 0)` of the grid sits just inside the border.
    pub fn cell_origin(&self, cell: Point) -> Point {
        scale(
            self.origin.offset(cell.x + 1, cell.y + 1),
            self.cell_w,
            self.cell_h,
        )
    }

    /// Draw the whole frame.
    pub fn render_into(&self, session: &Session, fb: &mut FrameBuffer) {
        fb.clear();

        self.draw_border(fb, session.grid());
        self.draw_grid(fb, session.grid());

        let active = session.active();
        if !active.is_landed() {
            for p in active.cells().iter() {
                // Cells above the top row stay hidden.
                if p.y >= 0 {
                    self.fill_cell(fb, p, Glyph::solid(kind_color(active.kind())));
                }
            }
        }

        fb.put_str(
            self.score_at.x,
            self.score_at.y,
            &format!("Score: {}", session.score()),
            Style::PLAIN,
        );

        if session.is_over() {
            let x = (fb.width() as i32 - GAME_OVER.len() as i32) / 2;
            let y = fb.height() as i32 / 2 - 1;
            fb.put_str(x, y, GAME_OVER, Style::PLAIN);
        }
    }

    pub fn render(&self, session: &Session, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(session, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, cell: Point, glyph: Glyph) {
        let at = self.cell_origin(cell);
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.set(at.x + dx, at.y + dy, glyph);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, grid: &Grid) {
        let edge = Glyph::solid(BORDER);
        for x in -1..=grid.width() {
            self.fill_cell(fb, Point::new(x, -1), edge);
            self.fill_cell(fb, Point::new(x, grid.height()), edge);
        }
        for y in 0..grid.height() {
            self.fill_cell(fb, Point::new(-1, y), edge);
            self.fill_cell(fb, Point::new(grid.width(), y), edge);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, grid: &Grid) {
        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let bg = match cell {
                    Some(kind) => settled_color(*kind),
                    None => PLAYFIELD,
                };
                self.fill_cell(fb, Point::new(x as i32, y as i32), Glyph::solid(bg));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::fb::Rgb;

    fn bg_at(fb: &FrameBuffer, x: u16, y: u16) -> Option<Rgb> {
        fb.get(x, y).map(|g| g.style.bg)
    }

    #[test]
    fn cell_origin_scales_columns_by_two() {
        let view = PlayfieldView::default();
        // Border at grid x 20 -> terminal 40; cell (0,0) right inside it.
        assert_eq!(view.cell_origin(Point::new(0, 0)), Point::new(42, 1));
        assert_eq!(view.cell_origin(Point::new(9, 19)), Point::new(60, 20));
        assert_eq!(view.cell_origin(Point::new(-1, -1)), Point::new(40, 0));
    }

    #[test]
    fn renders_border_playfield_and_score() {
        let session = Session::new(GameConfig::with_seed(3));
        let view = PlayfieldView::default();
        let fb = view.render(&session, 80, 24);

        assert_eq!(bg_at(&fb, 40, 0), Some(BORDER));
        assert_eq!(bg_at(&fb, 41, 0), Some(BORDER));
        assert_eq!(bg_at(&fb, 63, 21), Some(BORDER));
        assert_eq!(bg_at(&fb, 42, 20), Some(PLAYFIELD));
        assert!(fb.row_text(3).contains("Score: 0"));
        assert!(!fb.row_text(11).contains(GAME_OVER));
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let session = Session::new(GameConfig::with_seed(3));
        let view = PlayfieldView::default();
        let fb = view.render(&session, 80, 24);

        let active = session.active();
        let at = view.cell_origin(active.cells().anchor());
        let color = kind_color(active.kind());
        assert_eq!(bg_at(&fb, at.x as u16, at.y as u16), Some(color));
        assert_eq!(bg_at(&fb, at.x as u16 + 1, at.y as u16), Some(color));
    }
}

//! Board diagram rendering.
//!
//! Draws a flat 2D diagram (no arrows, no highlighting) at a fixed
//! per-square pixel scale and encodes it as PNG. Pieces are filled
//! discs carrying their role letter, so no font or image assets are
//! needed and output is fully deterministic.

use shakmaty::{Board, Color, File, Rank, Role, Square};
use thiserror::Error;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Default diagram scale, in pixels per board square.
pub const DEFAULT_SQUARE_SIZE: u32 = 48;

const MIN_SQUARE_SIZE: u32 = 8;
const MAX_SQUARE_SIZE: u32 = 512;

const LIGHT_SQUARE: (u8, u8, u8) = (240, 217, 181);
const DARK_SQUARE: (u8, u8, u8) = (181, 136, 99);
const WHITE_PIECE: (u8, u8, u8) = (248, 248, 248);
const BLACK_PIECE: (u8, u8, u8) = (40, 40, 40);

/// Errors that can occur while producing a board diagram
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported square size: {0}px")]
    BadScale(u32),

    #[error("could not allocate a {0}x{0} pixel diagram")]
    Allocation(u32),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Renders `board` from White's perspective as a PNG image of
/// `8 * square_px` pixels on a side.
pub fn board_png(board: &Board, square_px: u32) -> Result<Vec<u8>, RenderError> {
    if !(MIN_SQUARE_SIZE..=MAX_SQUARE_SIZE).contains(&square_px) {
        return Err(RenderError::BadScale(square_px));
    }

    let size = square_px * 8;
    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Allocation(size))?;
    let sq = square_px as f32;

    for (rank_idx, rank) in Rank::ALL.into_iter().enumerate() {
        for (file_idx, file) in File::ALL.into_iter().enumerate() {
            let x = file_idx as f32 * sq;
            let y = (7 - rank_idx) as f32 * sq;

            let (r, g, b) = if (rank_idx + file_idx) % 2 == 0 {
                DARK_SQUARE
            } else {
                LIGHT_SQUARE
            };
            fill_rect(&mut pixmap, x, y, sq, sq, (r, g, b));

            if let Some(piece) = board.piece_at(Square::from_coords(file, rank)) {
                draw_piece(&mut pixmap, x, y, sq, piece.color, piece.role);
            }
        }
    }

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

fn draw_piece(pixmap: &mut Pixmap, x: f32, y: f32, sq: f32, color: Color, role: Role) {
    let (disc, letter) = match color {
        Color::White => (WHITE_PIECE, BLACK_PIECE),
        Color::Black => (BLACK_PIECE, WHITE_PIECE),
    };

    let cx = x + sq / 2.0;
    let cy = y + sq / 2.0;
    let radius = sq * 0.4;

    if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
        let mut paint = solid_paint(disc);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        paint = solid_paint(letter);
        let stroke = Stroke {
            width: (sq / 32.0).max(1.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    draw_glyph(pixmap, cx, cy, sq, letter, role);
}

/// 5x7 bitmaps for the role letters, one row per byte, bit 4 leftmost.
fn glyph(role: Role) -> [u8; 7] {
    match role {
        Role::King => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        Role::Queen => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        Role::Rook => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        Role::Bishop => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        Role::Knight => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        Role::Pawn => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    }
}

fn draw_glyph(pixmap: &mut Pixmap, cx: f32, cy: f32, sq: f32, color: (u8, u8, u8), role: Role) {
    let cell = sq / 12.0;
    let rows = glyph(role);
    let left = cx - cell * 2.5;
    let top = cy - cell * 3.5;

    for (row_idx, row) in rows.iter().enumerate() {
        for col in 0..5 {
            if row & (1 << (4 - col)) != 0 {
                fill_rect(
                    pixmap,
                    left + col as f32 * cell,
                    top + row_idx as f32 * cell,
                    cell,
                    cell,
                    color,
                );
            }
        }
    }
}

fn fill_rect(pixmap: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, color: (u8, u8, u8)) {
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        let paint = solid_paint(color);
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn solid_paint((r, g, b): (u8, u8, u8)) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

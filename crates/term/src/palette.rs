//! Piece colors.
//!
//! Settled cells are drawn in a grayed version of their piece color so the
//! falling piece stands out.

use crate::fb::Rgb;
use crate::types::PieceKind;

pub const BORDER: Rgb = Rgb::new(0, 255, 0);
pub const PLAYFIELD: Rgb = Rgb::new(0, 0, 255);

/// Background color of a piece kind.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(173, 216, 230), // light blue
        PieceKind::J => Rgb::new(0, 0, 139),     // dark blue
        PieceKind::L => Rgb::new(255, 165, 0),   // orange
        PieceKind::O => Rgb::new(255, 255, 0),   // yellow
        PieceKind::S => Rgb::new(0, 173, 67),    // green
        PieceKind::Z => Rgb::new(255, 0, 0),     // red
        PieceKind::T => Rgb::new(208, 65, 126),  // magenta
    }
}

/// Pull a color halfway towards a gray slightly lighter than its average.
pub fn shift_to_gray(c: Rgb) -> Rgb {
    let avg = (c.r as u32 + c.g as u32 + c.b as u32) / 3;
    let shift = (avg + 25).min(255);
    let mix = |v: u8| ((v as u32 + shift) / 2) as u8;
    Rgb::new(mix(c.r), mix(c.g), mix(c.b))
}

/// Color of a settled cell of `kind`.
pub fn settled_color(kind: PieceKind) -> Rgb {
    shift_to_gray(kind_color(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_shift_of_red() {
        // avg 85, shift 110
        assert_eq!(shift_to_gray(Rgb::new(255, 0, 0)), Rgb::new(182, 55, 55));
    }

    #[test]
    fn gray_shift_caps_at_white() {
        assert_eq!(shift_to_gray(Rgb::WHITE), Rgb::WHITE);
    }

    #[test]
    fn settled_colors_differ_from_falling_colors() {
        for kind in PieceKind::ALL {
            assert_ne!(settled_color(kind), kind_color(kind), "{:?}", kind);
        }
    }
}

//! Procedural checkerboard bitmap
//!
//! Generated once on the CPU and uploaded once as an RGBA8 texture.

use crate::error::{Result, ViewerError};

/// Default bitmap edge length in pixels
pub const DEFAULT_SIZE: u32 = 64;
/// Default checker square edge length in pixels
pub const DEFAULT_TILE: u32 = 8;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Square RGBA8 bitmap, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkerboard {
    size: u32,
    pixels: Vec<u8>,
}

impl Checkerboard {
    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA8 bytes, `size * size * 4` long
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at row `i`, column `j`, or `None` outside the bitmap
    pub fn pixel(&self, i: u32, j: u32) -> Option<[u8; 4]> {
        if i >= self.size || j >= self.size {
            return None;
        }
        let offset = 4 * (i as usize * self.size as usize + j as usize);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(self.pixels.get(offset..offset + 4)?);
        Some(rgba)
    }
}

/// Whether pixel (`i`, `j`) is white
///
/// White where exactly one of the row and column falls in an even tile.
/// With `tile = 8` this is `((i & 8) == 0) ^ ((j & 8) == 0)`.
fn is_white(i: u32, j: u32, tile: u32) -> bool {
    ((i / tile) % 2 == 0) ^ ((j / tile) % 2 == 0)
}

/// Generate a `size`×`size` opaque black/white checkerboard with `tile`-pixel squares
pub fn generate_checkerboard(size: u32, tile: u32) -> Result<Checkerboard> {
    if tile == 0 {
        return Err(ViewerError::Texture("checkerboard tile must be non-zero".into()));
    }

    let mut pixels = Vec::with_capacity(size as usize * size as usize * 4);
    for i in 0..size {
        for j in 0..size {
            pixels.extend_from_slice(if is_white(i, j, tile) { &WHITE } else { &BLACK });
        }
    }

    Ok(Checkerboard { size, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_board() -> Checkerboard {
        generate_checkerboard(DEFAULT_SIZE, DEFAULT_TILE).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let board = default_board();
        assert_eq!(board.size(), 64);
        assert_eq!(board.pixels().len(), 64 * 64 * 4);
    }

    #[test]
    fn test_matches_bitmask_formula() {
        let board = default_board();
        for i in 0..64 {
            for j in 0..64 {
                let c = ((i & 0x8) == 0) ^ ((j & 0x8) == 0);
                let expected = if c { WHITE } else { BLACK };
                assert_eq!(board.pixel(i, j), Some(expected), "pixel ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_adjacent_tiles_differ() {
        let board = default_board();
        assert_ne!(board.pixel(0, 0), board.pixel(0, 8));
        assert_ne!(board.pixel(0, 0), board.pixel(8, 0));
        // Crossing a tile boundary on both axes flips twice
        assert_eq!(board.pixel(0, 0), board.pixel(8, 8));
    }

    #[test]
    fn test_period_sixteen() {
        let board = default_board();
        assert_eq!(board.pixel(0, 0), board.pixel(16, 16));
        assert_eq!(board.pixel(0, 0), board.pixel(0, 16));
        assert_eq!(board.pixel(3, 11), board.pixel(19, 27));
    }

    #[test]
    fn test_fully_opaque() {
        let board = default_board();
        assert!(board.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_pixel_outside_bitmap_is_none() {
        let board = default_board();
        assert!(board.pixel(63, 63).is_some());
        assert_eq!(board.pixel(64, 0), None);
        assert_eq!(board.pixel(0, 64), None);
        assert_eq!(board.pixel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_zero_tile_rejected() {
        assert!(matches!(
            generate_checkerboard(64, 0),
            Err(ViewerError::Texture(_))
        ));
    }
}

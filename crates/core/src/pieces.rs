//! Pieces module - tetromino catalog and mask rotation
//!
//! Every kind is defined once, as a square mask at rotation 0. Other rotations
//! are derived at runtime with [`Mask::rotate_cw`] (transpose, then reverse each
//! row), so there are no per-rotation shape tables.

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::types::{Cell, PieceKind};

/// Largest mask side length (the I piece).
pub const MAX_MASK_SIZE: usize = 4;

/// Offset of a filled mask cell from the mask's top-left corner.
pub type MinoOffset = (i16, i16);

/// Filled offsets of a mask (at most 16 for a 4x4 mask).
pub type MinoOffsets = ArrayVec<MinoOffset, { MAX_MASK_SIZE * MAX_MASK_SIZE }>;

/// Square grid of filled/empty flags for one rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    size: u8,
    rows: [[bool; MAX_MASK_SIZE]; MAX_MASK_SIZE],
}

impl Mask {
    /// Build a mask from bit rows, most significant of the `size` bits first.
    ///
    /// `Mask::from_bits(3, [0b010, 0b111, 0b000, 0])` is the T piece.
    pub const fn from_bits(size: u8, bits: [u8; MAX_MASK_SIZE]) -> Self {
        let mut rows = [[false; MAX_MASK_SIZE]; MAX_MASK_SIZE];
        let mut y = 0;
        while y < size as usize {
            let mut x = 0;
            while x < size as usize {
                rows[y][x] = (bits[y] >> (size as usize - 1 - x)) & 1 == 1;
                x += 1;
            }
            y += 1;
        }
        Self { size, rows }
    }

    /// Side length of the square mask.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (x, y) is filled. Out-of-range cells are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        let n = self.size as usize;
        x < n && y < n && self.rows[y][x]
    }

    /// Offsets of all filled cells, row-major.
    pub fn filled_cells(&self) -> MinoOffsets {
        let n = self.size as usize;
        let mut out = MinoOffsets::new();
        for y in 0..n {
            for x in 0..n {
                if self.rows[y][x] {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        self.filled_cells().len()
    }

    /// Clockwise quarter turn: transpose, then reverse each row.
    ///
    /// Pure; `self` is left untouched.
    pub fn rotate_cw(self) -> Mask {
        let n = self.size as usize;
        let mut rows = [[false; MAX_MASK_SIZE]; MAX_MASK_SIZE];
        for (y, row) in rows.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                // transposed[y][n-1-x] == self[n-1-x][y]
                *cell = self.rows[n - 1 - x][y];
            }
        }
        Mask {
            size: self.size,
            rows,
        }
    }
}

impl Serialize for Mask {
    /// Serialized as rows of 0/1 flags, e.g. `[[1,1],[1,1]]` for O.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let n = self.size as usize;
        serializer.collect_seq(
            self.rows[..n]
                .iter()
                .map(|row| row[..n].iter().map(|&f| f as u8).collect::<Vec<u8>>()),
        )
    }
}

/// Display color tag for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

/// Immutable catalog entry: rotation-0 mask plus color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoDef {
    pub mask: Mask,
    pub color: PieceColor,
}

/// Sentinel used to resolve the color of empty cells. Never spawned.
pub const EMPTY: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(1, [0, 0, 0, 0]),
    color: PieceColor {
        name: "transparent",
        rgb: (30, 30, 40),
    },
};

const I_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(4, [0b0100, 0b0100, 0b0100, 0b0100]),
    color: PieceColor {
        name: "cyan",
        rgb: (34, 211, 238),
    },
};

const O_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(2, [0b11, 0b11, 0, 0]),
    color: PieceColor {
        name: "yellow",
        rgb: (250, 204, 21),
    },
};

const T_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(3, [0b010, 0b111, 0b000, 0]),
    color: PieceColor {
        name: "purple",
        rgb: (147, 51, 234),
    },
};

const L_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(3, [0b010, 0b010, 0b011, 0]),
    color: PieceColor {
        name: "orange",
        rgb: (249, 115, 22),
    },
};

const J_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(3, [0b010, 0b010, 0b110, 0]),
    color: PieceColor {
        name: "blue",
        rgb: (59, 130, 246),
    },
};

const S_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(3, [0b011, 0b110, 0b000, 0]),
    color: PieceColor {
        name: "green",
        rgb: (34, 197, 94),
    },
};

const Z_DEF: TetrominoDef = TetrominoDef {
    mask: Mask::from_bits(3, [0b110, 0b011, 0b000, 0]),
    color: PieceColor {
        name: "red",
        rgb: (239, 68, 68),
    },
};

/// Catalog entry for a kind.
pub fn definition(kind: PieceKind) -> &'static TetrominoDef {
    match kind {
        PieceKind::I => &I_DEF,
        PieceKind::O => &O_DEF,
        PieceKind::T => &T_DEF,
        PieceKind::L => &L_DEF,
        PieceKind::J => &J_DEF,
        PieceKind::S => &S_DEF,
        PieceKind::Z => &Z_DEF,
    }
}

/// Catalog entry for a board cell; empty cells map to [`EMPTY`].
pub fn definition_for_cell(cell: Cell) -> &'static TetrominoDef {
    match cell {
        Some(kind) => definition(kind),
        None => &EMPTY,
    }
}

/// Rotation-0 mask of a kind.
pub fn spawn_mask(kind: PieceKind) -> Mask {
    definition(kind).mask
}

//! Cell code classification
//!
//! Level data stores each cell as a small unsigned code whose numeric ranges
//! overlap: pointers sit above [`POINTER_BASE`], warps between [`WARP_BASE`]
//! and [`POINTER_BASE`], and the fixed codes below. Range checks therefore
//! run high to low, and the decode happens in exactly one place so the rest
//! of the crate works with the tagged variant.

use crate::consts::{POINTER_BASE, WARP_BASE};

/// One grid cell, decoded from its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Passable floor
    Empty,
    /// Impassable wall
    Wall,
    /// Passable; sends the ball back to the level start
    Trap,
    /// Passable; advances to the next level
    Exit,
    /// Decorative wall variants (impassable, drawn differently)
    WallDecorA,
    WallDecorB,
    /// Inter-level warp to the given level index
    Warp(u8),
    /// Intra-level teleport; destination cell in row-major order
    Pointer(u8),
    /// Unrecognized code, treated like a wall
    Unknown(u8),
}

impl Cell {
    /// Decode a raw cell code. Pointer range first, then warp, then the
    /// fixed codes; that priority is load-bearing because the ranges are
    /// not disjoint.
    pub fn decode(code: u8) -> Self {
        if code >= POINTER_BASE {
            Cell::Pointer(code - POINTER_BASE)
        } else if code >= WARP_BASE {
            Cell::Warp(code - WARP_BASE)
        } else {
            match code {
                0 => Cell::Empty,
                1 => Cell::Wall,
                2 => Cell::Trap,
                3 => Cell::Exit,
                4 => Cell::WallDecorA,
                5 => Cell::WallDecorB,
                other => Cell::Unknown(other),
            }
        }
    }

    /// Numeric encoding used by the level asset format.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Trap => 2,
            Cell::Exit => 3,
            Cell::WallDecorA => 4,
            Cell::WallDecorB => 5,
            Cell::Warp(level) => WARP_BASE + level,
            Cell::Pointer(dest) => POINTER_BASE + dest,
            Cell::Unknown(code) => code,
        }
    }

    /// Whether the ball may occupy this cell.
    pub fn passable(self) -> bool {
        matches!(
            self,
            Cell::Empty | Cell::Trap | Cell::Exit | Cell::Warp(_) | Cell::Pointer(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_priority() {
        // The pointer range shadows everything from 35 up.
        assert_eq!(Cell::decode(35), Cell::Pointer(0));
        assert_eq!(Cell::decode(239), Cell::Pointer(204));
        // Warp range sits just below.
        assert_eq!(Cell::decode(34), Cell::Warp(14));
        assert_eq!(Cell::decode(20), Cell::Warp(0));
        // Fixed codes below the warp base.
        assert_eq!(Cell::decode(0), Cell::Empty);
        assert_eq!(Cell::decode(1), Cell::Wall);
        assert_eq!(Cell::decode(2), Cell::Trap);
        assert_eq!(Cell::decode(3), Cell::Exit);
    }

    #[test]
    fn test_unknown_codes_are_walls() {
        for code in 6..20 {
            let cell = Cell::decode(code);
            assert_eq!(cell, Cell::Unknown(code));
            assert!(!cell.passable());
        }
    }

    #[test]
    fn test_passability() {
        assert!(Cell::Empty.passable());
        assert!(Cell::Trap.passable());
        assert!(Cell::Exit.passable());
        assert!(Cell::Warp(3).passable());
        assert!(Cell::Pointer(204).passable());
        assert!(!Cell::Wall.passable());
        assert!(!Cell::WallDecorA.passable());
        assert!(!Cell::WallDecorB.passable());
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=255u8 {
            assert_eq!(Cell::decode(code).code(), code);
        }
    }
}

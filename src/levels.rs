//! Builtin level pack
//!
//! Twelve hand-authored 17x13 mazes in the same CSR triples the loadable
//! asset format uses, validated like any other asset at construction time.
//! Level 0 is the secret warp hub; play starts on level 1.

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::sim::{GridMap, LevelData, LevelError, LevelSet};

/// One level table in static form.
struct RawLevel {
    start: (f32, f32),
    row_index: &'static [u8],
    columns: &'static [u8],
    values: &'static [u8],
}

// Cell code shorthands for the tables.
const W: u8 = 1; // wall
const T: u8 = 2; // trap
const X: u8 = 3; // exit
const P: u8 = 4; // decorative wall, purple
const C: u8 = 5; // decorative wall, orange
const WARP: u8 = 20; // + target level
const PTR: u8 = 35; // + destination cell

const LEVELS: &[RawLevel] = &[
    // warp hub (secret)
    RawLevel {
        start: (8.0, 6.0),
        row_index: &[
        0, 8, 8, 12, 12, 12, 12, 16, 16, 16, 16, 20, 20, 31,
        ],
        columns: &[
        2, 5, 6, 9, 10, 11, 14, 15, 2, 6, 10, 14, 0, 2, 14, 16, 2, 6, 10, 14,
        1, 2, 4, 5, 6, 7, 9, 10, 11, 14, 15,
        ],
        values: &[
        W, W, W, W, W, W, W, C, WARP + 1, WARP + 2, WARP + 3, WARP + 4, P,
        WARP + 10, WARP + 5, C, WARP + 9, WARP + 8, WARP + 7, WARP + 6, W, P,
        C, W, W, W, C, W, W, C, W,
        ],
    },
    // starting maze
    RawLevel {
        start: (8.0, 6.0),
        row_index: &[
        0, 3, 5, 7, 10, 14, 18, 22, 26, 29, 37, 37, 37, 37,
        ],
        columns: &[
        7, 8, 9, 7, 9, 1, 14, 1, 13, 14, 1, 7, 9, 14, 1, 7, 9, 14, 1, 7, 9,
        14, 1, 7, 9, 14, 1, 8, 14, 1, 2, 3, 4, 8, 13, 14, 15,
        ],
        values: &[
        W, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, X, W, W, W,
        ],
    },
    // teleport corridor
    RawLevel {
        start: (8.0, 6.0),
        row_index: &[
        0, 4, 6, 6, 8, 8, 8, 8, 8, 8, 10, 10, 12, 16,
        ],
        columns: &[
        0, 3, 13, 16, 1, 15, 0, 16, 0, 16, 1, 15, 0, 3, 13, 16,
        ],
        values: &[
        T, W, W, PTR + 204, W, W, W, W, W, W, W, W, PTR + 16, W, W, X,
        ],
    },
    // effigy
    RawLevel {
        start: (4.0, 6.0),
        row_index: &[
        0, 0, 3, 7, 15, 20, 23, 29, 32, 37, 45, 49, 52, 52,
        ],
        columns: &[
        1, 8, 15, 2, 3, 13, 14, 3, 4, 5, 6, 10, 11, 12, 13, 6, 7, 8, 9, 10,
        8, 14, 15, 1, 8, 11, 13, 14, 15, 8, 14, 15, 6, 7, 8, 9, 10, 3, 4, 5,
        6, 10, 11, 12, 13, 2, 3, 13, 14, 1, 8, 15,
        ],
        values: &[
        W, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, PTR + 144, W, W,
        W, W, W, T, T, X, W, W, W, W, W, W, W, W, PTR + 76, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, T, W,
        ],
    },
    // easy spiral
    RawLevel {
        start: (0.0, 12.0),
        row_index: &[
        0, 10, 20, 34, 40, 52, 61, 72, 81, 93, 99, 113, 123, 132,
        ],
        columns: &[
        0, 1, 2, 3, 11, 12, 13, 14, 15, 16, 0, 1, 5, 6, 7, 8, 9, 13, 14, 15,
        0, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 0, 1, 3, 11, 13, 14,
        0, 1, 3, 5, 6, 7, 8, 9, 11, 13, 14, 16, 0, 3, 5, 8, 9, 11, 13, 14,
        16, 0, 2, 3, 5, 7, 8, 9, 11, 13, 14, 16, 0, 2, 3, 5, 7, 8, 11, 13,
        16, 0, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15, 16, 2, 3, 5, 13, 15, 16, 1,
        2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 1, 2, 3, 7, 8, 9, 10,
        11, 15, 16, 1, 2, 3, 4, 5, 13, 14, 15, 16,
        ],
        values: &[
        W, W, T, W, W, W, W, W, W, X, W, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, T, W, W, T, W, W, W, W, W, W, W, T, W, W, T, W,
        W, T, W, W, W, W, W, W, W, PTR + 127, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, T, W, W, W, W, W, W, PTR + 93, W, W, W, T, W, W, W, T, W,
        W, T, W, W, W, W, W, W, W, T, W, W, W, W, W, W, T, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W,
        ],
    },
    // puzzle 1
    RawLevel {
        start: (8.0, 6.0),
        row_index: &[
        0, 7, 16, 20, 27, 34, 43, 51, 58, 68, 76, 83, 90, 98,
        ],
        columns: &[
        0, 6, 7, 8, 9, 13, 16, 0, 2, 3, 4, 7, 9, 11, 13, 16, 4, 11, 14, 16,
        1, 2, 4, 6, 7, 9, 12, 2, 4, 7, 9, 10, 13, 15, 0, 1, 4, 5, 7, 9, 11,
        13, 15, 0, 1, 3, 7, 9, 11, 13, 16, 3, 5, 6, 7, 8, 9, 14, 0, 2, 5, 8,
        9, 10, 11, 12, 14, 15, 0, 2, 4, 5, 7, 8, 12, 15, 2, 5, 10, 12, 13,
        14, 15, 1, 4, 5, 7, 8, 10, 14, 0, 1, 3, 4, 7, 11, 12, 16,
        ],
        values: &[
        T, W, W, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, T, W, W,
        W, W, W, W, W, W, W, W, W, W, W, T, W, W, W, X, W, W, T, W, W, W, W,
        W, W, W, W, W, W, W, W, T, W, W, W, W, W, W, W, W, W, W, W, W, W,
        PTR + 208, W, PTR + 204, W, W, W, T,
        ],
    },
    // big X
    RawLevel {
        start: (7.0, 6.0),
        row_index: &[
        0, 3, 7, 10, 14, 18, 22, 32, 36, 40, 44, 47, 51, 54,
        ],
        columns: &[
        0, 8, 16, 3, 7, 9, 13, 4, 8, 12, 1, 5, 11, 15, 2, 6, 10, 14, 3, 7, 9,
        13, 0, 1, 3, 4, 8, 9, 12, 13, 15, 16, 3, 7, 9, 13, 2, 6, 10, 14, 1,
        5, 11, 15, 4, 8, 12, 3, 7, 9, 13, 0, 8, 16,
        ],
        values: &[
        T, T, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, T,
        W, PTR + 115, W, T, X, W, PTR + 105, W, T, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, T, T, T,
        ],
    },
    // hard spiral
    RawLevel {
        start: (8.0, 5.0),
        row_index: &[
        0, 10, 20, 34, 40, 52, 60, 71, 80, 92, 98, 112, 122, 132,
        ],
        columns: &[
        0, 1, 2, 3, 11, 12, 13, 14, 15, 16, 0, 1, 5, 6, 7, 8, 9, 13, 14, 15,
        0, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 0, 1, 3, 11, 13, 14,
        0, 1, 3, 5, 6, 7, 8, 9, 11, 13, 14, 16, 0, 3, 5, 9, 11, 13, 14, 16,
        0, 2, 3, 5, 7, 8, 9, 11, 13, 14, 16, 0, 2, 3, 5, 7, 8, 11, 13, 16, 0,
        2, 3, 5, 7, 8, 9, 10, 11, 13, 15, 16, 2, 3, 5, 13, 15, 16, 1, 2, 3,
        5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 1, 2, 3, 7, 8, 9, 10, 11, 15,
        16, 0, 1, 2, 3, 4, 5, 13, 14, 15, 16,
        ],
        values: &[
        W, W, T, W, W, W, W, W, W, PTR + 204, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, T, W, W, T, W, W, W, W, W, W, W, T, W,
        W, T, W, W, T, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, T, W, W, W, W, W, W, X, W, W, W, T, W, W, W, T, W, W, T, W,
        W, W, W, W, W, W, T, W, W, W, W, W, W, T, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, PTR + 16, W, W, W, W, W, W, W, W, W,
        ],
    },
    // puzzle 2
    RawLevel {
        start: (8.0, 6.0),
        row_index: &[
        0, 9, 16, 19, 32, 37, 51, 55, 66, 72, 79, 90, 96, 109,
        ],
        columns: &[
        0, 6, 7, 8, 9, 10, 11, 15, 16, 2, 3, 4, 6, 11, 13, 15, 4, 8, 13, 0,
        1, 2, 4, 6, 8, 10, 11, 12, 13, 14, 15, 16, 4, 8, 9, 15, 16, 1, 2, 3,
        4, 5, 6, 7, 8, 9, 11, 12, 13, 15, 16, 5, 9, 11, 12, 0, 1, 2, 4, 5, 7,
        8, 9, 11, 14, 16, 0, 4, 5, 9, 11, 13, 0, 6, 7, 9, 11, 13, 15, 0, 2,
        3, 4, 7, 9, 11, 13, 14, 15, 16, 0, 2, 3, 4, 7, 11, 0, 2, 3, 4, 5, 7,
        8, 9, 10, 13, 14, 15, 16,
        ],
        values: &[
        T, W, T, W, W, W, W, W, X, W, W, W, W, W, W, W, W, W, W, W, W, T, T,
        W, W, W, W, T, W, W, W, W, W, T, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, T, W, W, W, W, T, W, W, T, W, T, W, W, W, W, W, W, W, W, W,
        W, T, W, W, T, W, W, W, W, W, W, W, T, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, PTR + 220, W, W, W, W, W, W, T, W, W, T, W, PTR + 204,
        ],
    },
    // multi warp
    RawLevel {
        start: (8.0, 0.0),
        row_index: &[
        0, 7, 18, 24, 34, 39, 48, 55, 66, 72, 81, 87, 97, 104,
        ],
        columns: &[
        0, 1, 2, 3, 4, 9, 16, 1, 2, 6, 7, 8, 9, 11, 12, 13, 15, 16, 4, 5, 11,
        13, 15, 16, 0, 2, 4, 7, 8, 9, 10, 13, 15, 16, 2, 3, 7, 11, 13, 1, 2,
        5, 7, 9, 11, 13, 14, 15, 4, 5, 7, 8, 9, 11, 13, 0, 1, 2, 3, 5, 8, 9,
        11, 13, 15, 16, 0, 3, 5, 6, 8, 11, 0, 2, 3, 7, 10, 11, 12, 13, 15, 0,
        5, 7, 9, 13, 15, 0, 1, 2, 3, 5, 9, 10, 11, 13, 15, 0, 5, 6, 7, 11,
        15, 16,
        ],
        values: &[
        PTR + 16, W, W, W, W, W, PTR + 220, W, T, W, W, W, W, W, W, T, W, W,
        T, W, W, W, W, W, T, W, W, W, W, W, T, W, T, W, W, W, T, W, W, W, W,
        W, W, W, W, W, W, W, T, W, W, X, W, W, W, W, T, W, W, W, W, T, T, T,
        W, W, W, W, W, T, W, W, W, W, W, W, T, W, W, W, T, T, W, T, W, W, W,
        W, W, W, T, W, W, W, W, T, W, PTR, W, W, T, W, W, PTR + 204,
        ],
    },
    // trap gauntlet
    RawLevel {
        start: (0.0, 10.0),
        row_index: &[
        0, 4, 9, 13, 29, 36, 36, 43, 59, 75, 75, 76, 76, 93,
        ],
        columns: &[
        1, 5, 9, 13, 3, 7, 11, 15, 16, 1, 5, 9, 13, 1, 2, 3, 4, 5, 6, 7, 8,
        9, 10, 11, 12, 13, 14, 15, 16, 2, 4, 6, 8, 10, 12, 14, 2, 4, 6, 8,
        10, 12, 14, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0,
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 8, 0, 1, 2, 3, 4,
        5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
        ],
        values: &[
        T, T, T, T, T, T, T, T, X, T, T, T, T, T, T, T, T, T, T, T, T, T, T,
        T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T,
        T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T,
        T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T,
        T,
        ],
    },
    // winner
    RawLevel {
        start: (3.0, 3.0),
        row_index: &[
        0, 0, 0, 6, 12, 17, 22, 22, 28, 35, 43, 50, 50, 51,
        ],
        columns: &[
        1, 5, 8, 9, 12, 15, 2, 4, 7, 10, 12, 15, 3, 7, 10, 12, 15, 3, 8, 9,
        13, 14, 1, 5, 8, 9, 12, 15, 1, 5, 7, 10, 12, 13, 15, 1, 3, 5, 7, 10,
        12, 14, 15, 2, 3, 4, 8, 9, 12, 15, 16,
        ],
        values: &[
        W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W,
        W, W, W, W, W, W, W, W, W, W, W, W, W, WARP, W, W, W, W, W, W, W, W,
        W, W, W, W, W, X,
        ],
    },];

/// Assemble the builtin pack. Fails only if a table is malformed, which the
/// tests below would catch before it ships.
pub fn builtin_levels() -> Result<LevelSet, LevelError> {
    let levels = LEVELS
        .iter()
        .map(|raw| {
            GridMap::new(
                GRID_WIDTH,
                GRID_HEIGHT,
                LevelData {
                    start_x: raw.start.0,
                    start_y: raw.start.1,
                    row_index: raw.row_index.to_vec(),
                    columns: raw.columns.to_vec(),
                    values: raw.values.to_vec(),
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    LevelSet::new(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Cell;
    use glam::Vec2;

    #[test]
    fn test_builtin_pack_validates() {
        let set = builtin_levels().unwrap();
        assert_eq!(set.count(), 12);
    }

    #[test]
    fn test_every_level_spawns_on_a_passable_cell() {
        let set = builtin_levels().unwrap();
        for index in 0..set.count() {
            let grid = set.level(index);
            let start = grid.start();
            let cell = grid.cell_at(start.x as i32, start.y as i32);
            assert!(cell.passable(), "level {index} spawns on {cell:?}");
        }
    }

    #[test]
    fn test_starting_level_layout() {
        let set = builtin_levels().unwrap();
        let grid = set.level(1);
        assert_eq!(grid.start(), Vec2::new(8.0, 6.0));
        // Trap at the top of the start corridor, exit at the bottom.
        assert_eq!(grid.cell_at(8, 0), Cell::Trap);
        assert_eq!(grid.cell_at(8, 9), Cell::Exit);
    }

    #[test]
    fn test_warp_hub_reaches_every_warp_target() {
        let set = builtin_levels().unwrap();
        let mut targets: Vec<u8> = set
            .level(0)
            .cells()
            .filter_map(|(_, _, cell)| match cell {
                Cell::Warp(level) => Some(level),
                _ => None,
            })
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_teleport_corridor_pointers() {
        let set = builtin_levels().unwrap();
        let grid = set.level(2);
        assert_eq!(grid.cell_at(16, 0), Cell::Pointer(204));
        assert_eq!(grid.cell_at(0, 12), Cell::Pointer(16));
    }

    #[test]
    fn test_winner_level_warps_back_to_hub() {
        let set = builtin_levels().unwrap();
        let warp = set
            .level(11)
            .cells()
            .find_map(|(x, y, cell)| match cell {
                Cell::Warp(level) => Some((x, y, level)),
                _ => None,
            });
        assert_eq!(warp, Some((3, 9, 0)));
    }
}

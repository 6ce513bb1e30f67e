//! Sparse level storage
//!
//! A level is a compressed sparse row matrix of cell codes: `row_index`
//! holds `height + 1` prefix-sum offsets into `columns`/`values`, one slice
//! per row, and any cell absent from its row reads as empty. The same triple
//! is the on-disk asset format ([`LevelData`]), so levels can be authored
//! externally and loaded from JSON.
//!
//! Lookups never fail; authoring mistakes are caught loudly at construction
//! time instead of degrading into invisible empty cells.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Validation failure for a level asset.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("row index must hold height + 1 entries, got {0}")]
    RowIndexLength(usize),
    #[error("row index must start at 0, got {0}")]
    RowIndexStart(u8),
    #[error("row index decreases at row {0}")]
    RowIndexOrder(usize),
    #[error("row index covers {expected} entries but {found} are present")]
    EntryCount { expected: usize, found: usize },
    #[error("columns and values arrays differ in length ({columns} vs {values})")]
    ArrayMismatch { columns: usize, values: usize },
    #[error("row {row} references column {column} outside the grid")]
    ColumnRange { row: usize, column: u8 },
    #[error("row {row} lists column {column} twice")]
    DuplicateColumn { row: usize, column: u8 },
    #[error("start position ({x}, {y}) is outside the grid")]
    StartRange { x: f32, y: f32 },
    #[error("pointer destination {dest} is outside the grid")]
    PointerRange { dest: u8 },
    #[error("warp targets level {level} but only {count} levels exist")]
    WarpRange { level: u8, count: usize },
    #[error("a level set needs at least two levels (secret + start), got {0}")]
    TooFewLevels(usize),
    #[error("malformed level asset: {0}")]
    Asset(#[from] serde_json::Error),
}

/// Serialized form of one level: the CSR triple plus the spawn point.
///
/// `row_index[r] .. row_index[r + 1]` delimits row `r`'s slice of
/// `columns`/`values`. The spawn point may sit mid-cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub start_x: f32,
    pub start_y: f32,
    pub row_index: Vec<u8>,
    pub columns: Vec<u8>,
    pub values: Vec<u8>,
}

impl LevelData {
    /// Parse one level from its JSON asset form.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One immutable maze level.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: u8,
    height: u8,
    row_index: Vec<u8>,
    columns: Vec<u8>,
    values: Vec<u8>,
    start_x: f32,
    start_y: f32,
}

impl GridMap {
    /// Validate a level asset and freeze it into a grid.
    pub fn new(width: u8, height: u8, data: LevelData) -> Result<Self, LevelError> {
        let LevelData {
            start_x,
            start_y,
            row_index,
            columns,
            values,
        } = data;

        if row_index.len() != height as usize + 1 {
            return Err(LevelError::RowIndexLength(row_index.len()));
        }
        if row_index[0] != 0 {
            return Err(LevelError::RowIndexStart(row_index[0]));
        }
        if let Some(row) = row_index.windows(2).position(|w| w[0] > w[1]) {
            return Err(LevelError::RowIndexOrder(row));
        }
        if columns.len() != values.len() {
            return Err(LevelError::ArrayMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }
        let expected = row_index[height as usize] as usize;
        if expected != columns.len() {
            return Err(LevelError::EntryCount {
                expected,
                found: columns.len(),
            });
        }

        for row in 0..height as usize {
            let slice = &columns[row_index[row] as usize..row_index[row + 1] as usize];
            for (i, &column) in slice.iter().enumerate() {
                if column >= width {
                    return Err(LevelError::ColumnRange { row, column });
                }
                if slice[..i].contains(&column) {
                    return Err(LevelError::DuplicateColumn { row, column });
                }
            }
        }

        for &value in &values {
            if let Cell::Pointer(dest) = Cell::decode(value) {
                if dest as u16 >= width as u16 * height as u16 {
                    return Err(LevelError::PointerRange { dest });
                }
            }
        }

        if !(0.0..width as f32).contains(&start_x) || !(0.0..height as f32).contains(&start_y) {
            return Err(LevelError::StartRange {
                x: start_x,
                y: start_y,
            });
        }

        Ok(Self {
            width,
            height,
            row_index,
            columns,
            values,
            start_x,
            start_y,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Spawn point for the ball.
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Look up the cell at integer coordinates. Coordinates outside the
    /// grid, and cells absent from their row, read as empty; the callers
    /// that care about passability treat what they find accordingly.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return Cell::Empty;
        }
        let row = y as usize;
        let lo = self.row_index[row] as usize;
        let hi = self.row_index[row + 1] as usize;
        for i in lo..hi {
            if self.columns[i] as i32 == x {
                return Cell::decode(self.values[i]);
            }
        }
        Cell::Empty
    }

    /// Iterate the stored (non-empty) cells with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        (0..self.height as usize).flat_map(move |row| {
            let lo = self.row_index[row] as usize;
            let hi = self.row_index[row + 1] as usize;
            (lo..hi).map(move |i| (self.columns[i], row as u8, Cell::decode(self.values[i])))
        })
    }

    /// Test helper: build a grid from explicit (x, y, code) entries.
    #[cfg(test)]
    pub(crate) fn from_cells(
        width: u8,
        height: u8,
        start: (f32, f32),
        cells: &[(u8, u8, u8)],
    ) -> Self {
        let mut row_index = vec![0u8];
        let mut columns = Vec::new();
        let mut values = Vec::new();
        for y in 0..height {
            for &(cx, cy, code) in cells {
                if cy == y {
                    columns.push(cx);
                    values.push(code);
                }
            }
            row_index.push(columns.len() as u8);
        }
        Self::new(
            width,
            height,
            LevelData {
                start_x: start.0,
                start_y: start.1,
                row_index,
                columns,
                values,
            },
        )
        .unwrap()
    }
}

/// The ordered collection of levels. Index 0 is the secret level, index 1
/// the starting level; indices stay valid for the lifetime of the set.
#[derive(Debug, Clone)]
pub struct LevelSet {
    levels: Vec<GridMap>,
}

impl LevelSet {
    /// Assemble a set, checking that every warp lands on a real level.
    pub fn new(levels: Vec<GridMap>) -> Result<Self, LevelError> {
        if levels.len() < 2 {
            return Err(LevelError::TooFewLevels(levels.len()));
        }
        for grid in &levels {
            for (_, _, cell) in grid.cells() {
                if let Cell::Warp(level) = cell {
                    if level as usize >= levels.len() {
                        return Err(LevelError::WarpRange {
                            level,
                            count: levels.len(),
                        });
                    }
                }
            }
        }
        log::info!("level set loaded with {} levels", levels.len());
        Ok(Self { levels })
    }

    /// Load a whole set from a JSON array of [`LevelData`] assets.
    pub fn from_json(width: u8, height: u8, json: &str) -> Result<Self, LevelError> {
        let data: Vec<LevelData> = serde_json::from_str(json)?;
        let levels = data
            .into_iter()
            .map(|d| GridMap::new(width, height, d))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    pub fn count(&self) -> u8 {
        self.levels.len() as u8
    }

    /// Borrow one level. `index` must be below [`Self::count`]; the board
    /// maintains that invariant for its active index.
    pub fn level(&self, index: u8) -> &GridMap {
        &self.levels[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_data() -> LevelData {
        // 4x3 grid:  row 0 -> wall at 1, trap at 3
        //            row 1 -> (empty)
        //            row 2 -> exit at 0, wall at 2
        LevelData {
            start_x: 2.0,
            start_y: 1.0,
            row_index: vec![0, 2, 2, 4],
            columns: vec![1, 3, 0, 2],
            values: vec![1, 2, 3, 1],
        }
    }

    #[test]
    fn test_cell_lookup_matches_fixture() {
        let grid = GridMap::new(4, 3, fixture_data()).unwrap();
        assert_eq!(grid.cell_at(1, 0), Cell::Wall);
        assert_eq!(grid.cell_at(3, 0), Cell::Trap);
        assert_eq!(grid.cell_at(0, 2), Cell::Exit);
        assert_eq!(grid.cell_at(2, 2), Cell::Wall);

        // Everything not listed reads as empty.
        for y in 0..3 {
            for x in 0..4 {
                let listed = [(1, 0), (3, 0), (0, 2), (2, 2)].contains(&(x, y));
                assert_eq!(grid.cell_at(x, y) != Cell::Empty, listed, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let grid = GridMap::new(4, 3, fixture_data()).unwrap();
        assert_eq!(grid.cell_at(-1, 0), Cell::Empty);
        assert_eq!(grid.cell_at(0, -1), Cell::Empty);
        assert_eq!(grid.cell_at(4, 0), Cell::Empty);
        assert_eq!(grid.cell_at(0, 3), Cell::Empty);
    }

    #[test]
    fn test_rejects_bad_row_index_length() {
        let mut data = fixture_data();
        data.row_index.pop();
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::RowIndexLength(3))
        ));
    }

    #[test]
    fn test_rejects_decreasing_row_index() {
        let mut data = fixture_data();
        data.row_index = vec![0, 3, 2, 4];
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::RowIndexOrder(1))
        ));
    }

    #[test]
    fn test_rejects_entry_count_mismatch() {
        let mut data = fixture_data();
        data.row_index = vec![0, 2, 2, 3];
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::EntryCount {
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_rejects_column_out_of_range() {
        let mut data = fixture_data();
        data.columns[1] = 4;
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::ColumnRange { row: 0, column: 4 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_column() {
        let mut data = fixture_data();
        data.columns[1] = 1;
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::DuplicateColumn { row: 0, column: 1 })
        ));
    }

    #[test]
    fn test_rejects_start_outside_grid() {
        let mut data = fixture_data();
        data.start_x = 4.0;
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::StartRange { .. })
        ));
    }

    #[test]
    fn test_rejects_pointer_past_grid_end() {
        let mut data = fixture_data();
        data.values[0] = 35 + 12; // dest 12 on a 4x3 grid (cells 0..12)
        assert!(matches!(
            GridMap::new(4, 3, data),
            Err(LevelError::PointerRange { dest: 12 })
        ));
    }

    #[test]
    fn test_level_set_rejects_dangling_warp() {
        let a = GridMap::new(4, 3, fixture_data()).unwrap();
        let mut data = fixture_data();
        data.values[0] = 20 + 5; // warp to level 5 of a 2-level set
        let b = GridMap::new(4, 3, data).unwrap();
        assert!(matches!(
            LevelSet::new(vec![a, b]),
            Err(LevelError::WarpRange { level: 5, count: 2 })
        ));
    }

    #[test]
    fn test_level_set_needs_two_levels() {
        let a = GridMap::new(4, 3, fixture_data()).unwrap();
        assert!(matches!(
            LevelSet::new(vec![a]),
            Err(LevelError::TooFewLevels(1))
        ));
    }

    #[test]
    fn test_set_from_json() {
        let json = r#"[
            {
                "start_x": 2.0, "start_y": 1.0,
                "row_index": [0, 2, 2, 4],
                "columns": [1, 3, 0, 2],
                "values": [1, 2, 3, 1]
            },
            {
                "start_x": 0.5, "start_y": 0.5,
                "row_index": [0, 1, 1, 1],
                "columns": [3],
                "values": [3]
            }
        ]"#;
        let set = LevelSet::from_json(4, 3, json).unwrap();
        assert_eq!(set.count(), 2);
        assert_eq!(set.level(0).cell_at(3, 0), Cell::Trap);
        assert_eq!(set.level(1).cell_at(3, 0), Cell::Exit);
        assert_eq!(set.level(1).start(), glam::Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            LevelSet::from_json(4, 3, "not json"),
            Err(LevelError::Asset(_))
        ));
    }
}

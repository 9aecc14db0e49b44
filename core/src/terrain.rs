use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable terrain layout of one hole, indexed `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainGrid")]
pub struct TerrainGrid {
    cells: Array2<CellKind>,
    hole: Coord2,
    start: Option<Coord2>,
}

/// Unchecked wire form of [`TerrainGrid`].
#[derive(Deserialize)]
struct RawTerrainGrid {
    cells: Array2<CellKind>,
    hole: Coord2,
    start: Option<Coord2>,
}

impl TryFrom<RawTerrainGrid> for TerrainGrid {
    type Error = GameError;

    fn try_from(raw: RawTerrainGrid) -> Result<Self> {
        let grid = Self::from_cells(raw.cells)?;
        if grid.hole != raw.hole || grid.start != raw.start {
            return Err(GameError::InconsistentLayout);
        }
        Ok(grid)
    }
}

impl TerrainGrid {
    /// Validates a prebuilt cell array: exactly one hole, at most one start.
    pub fn from_cells(cells: Array2<CellKind>) -> Result<Self> {
        let (w, h) = cells.dim();
        if w == 0 || h == 0 {
            return Err(GameError::EmptyLayout);
        }
        if w > usize::from(Coord::MAX) || h > usize::from(Coord::MAX) {
            return Err(GameError::LayoutTooLarge);
        }

        let mut hole = None;
        let mut start = None;
        for ((x, y), &kind) in cells.indexed_iter() {
            // bounds were checked above
            let coords = (x as Coord, y as Coord);
            match kind {
                CellKind::Hole if hole.is_some() => return Err(GameError::MultipleHoles),
                CellKind::Hole => hole = Some(coords),
                CellKind::Start if start.is_some() => return Err(GameError::MultipleStarts),
                CellKind::Start => start = Some(coords),
                _ => {}
            }
        }

        let hole = hole.ok_or(GameError::MissingHole)?;
        Ok(Self { cells, hole, start })
    }

    /// Parses a row-major text layout, one string per row, see [`CellKind::glyph`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 || height == 0 {
            return Err(GameError::EmptyLayout);
        }
        if width > usize::from(Coord::MAX) || height > usize::from(Coord::MAX) {
            return Err(GameError::LayoutTooLarge);
        }

        let mut cells = Array2::default((width, height));
        for (y, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.as_ref().chars().collect();
            if glyphs.len() != width {
                return Err(GameError::RaggedLayout);
            }
            for (x, glyph) in glyphs.into_iter().enumerate() {
                cells[[x, y]] = CellKind::from_glyph(glyph)?;
            }
        }

        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (w, h) = self.cells.dim();
        // checked on construction
        (w as Coord, h as Coord)
    }

    pub fn hole(&self) -> Coord2 {
        self.hole
    }

    pub fn start(&self) -> Option<Coord2> {
        self.start
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellKind> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub(crate) fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Row-major glyph rendering, one string per row.
    pub fn to_rows(&self) -> Vec<alloc::string::String> {
        let (w, h) = self.size();
        (0..h)
            .map(|y| (0..w).map(|x| self[(x, y)].glyph()).collect())
            .collect()
    }
}

impl Index<Coord2> for TerrainGrid {
    type Output = CellKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

use crate::*;

/// Cells a putt from `coords` may reach: every in-bounds neighbor that is not water.
pub fn putt_destinations(grid: &TerrainGrid, coords: Coord2) -> Result<Destinations> {
    let coords = grid.validate_coords(coords)?;

    Ok(grid
        .neighbors(coords)
        .filter(|&target| grid[target].accepts_putt())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn includes_trees_and_skips_water() {
        let grid = TerrainGrid::from_rows(&["T~.", ".S.", "..O"]).unwrap();

        let targets = putt_destinations(&grid, (1, 1)).unwrap();

        assert!(targets.contains((0, 0)));
        assert!(!targets.contains((1, 0)));
        assert!(targets.contains((2, 2)));
        assert_eq!(targets.len(), 7);
    }

    #[test]
    fn corner_only_reaches_in_bounds_cells() {
        let grid = TerrainGrid::from_rows(&["S.", ".O"]).unwrap();

        let targets = putt_destinations(&grid, (0, 0)).unwrap();

        assert_eq!(targets.as_slice(), &[(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn off_course_is_an_error() {
        let grid = TerrainGrid::from_rows(&["S.", ".O"]).unwrap();
        assert_eq!(putt_destinations(&grid, (0, 2)), Err(GameError::OutOfBounds));
    }

    fn course_and_lie() -> impl Strategy<Value = (TerrainGrid, Coord2)> {
        (2usize..10, 2usize..10)
            .prop_flat_map(|(w, h)| {
                (
                    prop::collection::vec(
                        prop::collection::vec(prop::sample::select(vec!['.', '=', ':', '~', 'T']), w),
                        h,
                    ),
                    0..w,
                    0..h,
                    0..w,
                    0..h,
                )
            })
            .prop_map(|(mut rows, hx, hy, bx, by)| {
                rows[hy][hx] = 'O';
                let rows: Vec<String> =
                    rows.into_iter().map(|row| row.into_iter().collect()).collect();
                (TerrainGrid::from_rows(&rows).unwrap(), (bx as Coord, by as Coord))
            })
    }

    proptest! {
        #[test]
        fn neighborhood_minus_water((grid, (x, y)) in course_and_lie()) {
            let targets = putt_destinations(&grid, (x, y)).unwrap();

            let (w, h) = grid.size();
            let mut expected = Vec::new();
            for ty in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for tx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    if (tx, ty) != (x, y) && grid[(tx, ty)] != CellKind::Water {
                        expected.push((tx, ty));
                    }
                }
            }
            let mut actual: Vec<_> = targets.iter().collect();
            actual.sort_by_key(|&(tx, ty)| (ty, tx));
            prop_assert_eq!(actual, expected);
        }
    }
}

use crate::*;

/// Landing cells for a rolled shot from `coords`.
///
/// The roll is adjusted by the terrain the ball leaves from. When the hole lies
/// along any compass direction at exactly the adjusted range or one short of it,
/// the hole is the only destination. Otherwise every in-bounds cell at the
/// adjusted range that accepts a shot is offered.
pub fn roll_destinations(grid: &TerrainGrid, coords: Coord2, roll: u8) -> Result<Destinations> {
    let lie = grid.cell_at(coords)?;
    let range = lie.adjust_roll(roll);
    let bounds = grid.size();
    let hole = grid.hole();

    let reaches_hole = DIRECTIONS.iter().any(|&direction| {
        [range, range - 1]
            .into_iter()
            .filter(|&magnitude| magnitude > 0)
            .any(|magnitude| step(coords, direction, magnitude, bounds) == Some(hole))
    });
    if reaches_hole {
        return Ok(Destinations::single(hole));
    }

    Ok(DIRECTIONS
        .iter()
        .filter_map(|&direction| step(coords, direction, range, bounds))
        .filter(|&target| grid[target].accepts_shot())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn open_course(width: usize, height: usize, hole: Coord2) -> TerrainGrid {
        let mut rows: Vec<Vec<char>> = vec![vec!['.'; width]; height];
        rows[usize::from(hole.1)][usize::from(hole.0)] = 'O';
        let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        TerrainGrid::from_rows(&rows).unwrap()
    }

    #[test]
    fn rough_offers_all_eight_directions() {
        let grid = open_course(11, 11, (0, 10));

        let targets = roll_destinations(&grid, (5, 5), 3).unwrap();

        assert_eq!(
            targets.as_slice(),
            &[(2, 2), (5, 2), (8, 2), (2, 5), (8, 5), (2, 8), (5, 8), (8, 8)]
        );
    }

    #[test]
    fn fairway_extends_range() {
        let grid = TerrainGrid::from_rows(&["......", "......", ".=....", "......", "......", ".....O"])
            .unwrap();

        let targets = roll_destinations(&grid, (1, 2), 2).unwrap();

        assert_eq!(targets.as_slice(), &[(4, 2), (1, 5), (4, 5)]);
    }

    #[test]
    fn sand_shortens_range() {
        let grid = TerrainGrid::from_rows(&["O.....", "......", "......", "...:..", "......", "......"])
            .unwrap();

        let targets = roll_destinations(&grid, (3, 3), 3).unwrap();

        assert!(targets.iter().all(|(x, y)| x.abs_diff(3).max(y.abs_diff(3)) == 2));
        assert_eq!(targets.len(), 8);
    }

    #[test]
    fn water_and_trees_are_never_landing_cells() {
        let grid = TerrainGrid::from_rows(&["~..T..", "......", "......", "......", "......", "~....O"])
            .unwrap();

        let targets = roll_destinations(&grid, (0, 3), 3).unwrap();

        assert!(!targets.contains((0, 0)));
        assert!(!targets.contains((3, 0)));
        assert_eq!(targets.as_slice(), &[(3, 3)]);
    }

    #[test]
    fn exact_range_sinks_the_ball() {
        let grid = open_course(10, 10, (7, 7));

        let targets = roll_destinations(&grid, (3, 3), 4).unwrap();

        assert_eq!(targets.as_slice(), &[(7, 7)]);
    }

    #[test]
    fn one_over_still_sinks_the_ball() {
        let grid = open_course(10, 10, (3, 6));

        let targets = roll_destinations(&grid, (3, 3), 4).unwrap();

        assert_eq!(targets.as_slice(), &[(3, 6)]);
    }

    #[test]
    fn two_over_does_not_sink() {
        let grid = open_course(10, 10, (3, 5));

        let targets = roll_destinations(&grid, (3, 3), 4).unwrap();

        assert!(!targets.contains((3, 5)));
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn sand_floor_keeps_range_at_one() {
        let grid = TerrainGrid::from_rows(&["O..", "...", "..:"]).unwrap();

        let targets = roll_destinations(&grid, (2, 2), 1).unwrap();

        assert_eq!(targets.as_slice(), &[(1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn off_course_lie_is_an_error() {
        let grid = open_course(4, 4, (0, 0));
        assert_eq!(roll_destinations(&grid, (4, 0), 3), Err(GameError::OutOfBounds));
    }

    #[test]
    fn empty_result_is_allowed() {
        let grid = TerrainGrid::from_rows(&["~~~~~", "~~~~~", "~~.~~", "~~~~~", "~~~~O"]).unwrap();
        let targets = roll_destinations(&grid, (2, 2), 1).unwrap();
        assert!(targets.is_empty());
    }

    fn glyph() -> impl Strategy<Value = char> {
        prop::sample::select(vec!['.', '=', ':', '~', 'T'])
    }

    fn course_and_lie() -> impl Strategy<Value = (TerrainGrid, Coord2)> {
        (2usize..12, 2usize..12)
            .prop_flat_map(|(w, h)| {
                (
                    prop::collection::vec(prop::collection::vec(glyph(), w), h),
                    0..w,
                    0..h,
                    0..w,
                    0..h,
                )
            })
            .prop_filter("hole and lie must differ", |(_, hx, hy, bx, by)| (hx, hy) != (bx, by))
            .prop_map(|(mut rows, hx, hy, bx, by)| {
                rows[hy][hx] = 'O';
                let rows: Vec<String> =
                    rows.into_iter().map(|row| row.into_iter().collect()).collect();
                (TerrainGrid::from_rows(&rows).unwrap(), (bx as Coord, by as Coord))
            })
    }

    proptest! {
        #[test]
        fn never_lands_in_water_or_trees((grid, lie) in course_and_lie(), roll in 1u8..=6) {
            let targets = roll_destinations(&grid, lie, roll).unwrap();
            for target in targets.iter() {
                prop_assert!(grid[target].accepts_shot());
            }
        }

        #[test]
        fn destinations_sit_at_adjusted_range((grid, lie) in course_and_lie(), roll in 1u8..=6) {
            let range = grid[lie].adjust_roll(roll);
            let targets = roll_destinations(&grid, lie, roll).unwrap();
            for (x, y) in targets.iter() {
                let distance = x.abs_diff(lie.0).max(y.abs_diff(lie.1));
                if (x, y) == grid.hole() {
                    prop_assert!(distance == range || distance + 1 == range);
                } else {
                    prop_assert_eq!(distance, range);
                }
            }
        }

        #[test]
        fn reachable_hole_is_the_only_destination((grid, lie) in course_and_lie(), roll in 1u8..=6) {
            let range = grid[lie].adjust_roll(roll);
            let hole = grid.hole();
            let dx = i16::from(hole.0) - i16::from(lie.0);
            let dy = i16::from(hole.1) - i16::from(lie.1);
            let distance = dx.abs().max(dy.abs());
            let on_line = dx == 0 || dy == 0 || dx.abs() == dy.abs();
            let in_reach = distance == i16::from(range) || distance == i16::from(range) - 1;

            let targets = roll_destinations(&grid, lie, roll).unwrap();
            if on_line && in_reach {
                prop_assert_eq!(targets.as_slice(), &[hole]);
            } else {
                prop_assert!(!targets.contains(hole));
            }
        }
    }
}

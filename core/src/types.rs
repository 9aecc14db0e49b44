/// Single coordinate axis used for course width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The eight compass directions in a fixed order: NW, N, NE, W, E, SW, S, SE.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Moves `coords` by `magnitude` steps along `direction`, returning a value only when it remains in bounds.
pub fn step(coords: Coord2, direction: (i8, i8), magnitude: u8, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = direction;
    let (max_x, max_y) = bounds;

    let dx = i16::from(dx) * i16::from(magnitude);
    let dy = i16::from(dy) * i16::from(magnitude);

    let next_x = Coord::try_from(i16::from(x) + dx).ok()?;
    if next_x >= max_x {
        return None;
    }

    let next_y = Coord::try_from(i16::from(y) + dy).ok()?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds cells at distance one from `center`, diagonals included, in compass order.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DIRECTIONS
        .into_iter()
        .filter_map(move |direction| step(center, direction, 1, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_scales_direction_by_magnitude() {
        assert_eq!(step((5, 5), (1, -1), 3, (10, 10)), Some((8, 2)));
        assert_eq!(step((5, 5), (-1, 0), 5, (10, 10)), Some((0, 5)));
    }

    #[test]
    fn step_rejects_out_of_bounds_without_wrapping() {
        assert_eq!(step((1, 1), (-1, 0), 2, (10, 10)), None);
        assert_eq!(step((8, 1), (1, 0), 2, (10, 10)), None);
        assert_eq!(step((1, 8), (0, 1), 2, (10, 10)), None);
        assert_eq!(step((Coord::MAX - 1, 0), (1, 0), 6, (Coord::MAX, 1)), None);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let around: Vec<_> = neighbors((0, 0), (4, 4)).collect();
        assert_eq!(around, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(neighbors((1, 2), (4, 4)).count(), 8);
    }
}

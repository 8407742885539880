use std::cmp::Ordering;

/// Offsets of the 8 cells in a Moore neighborhood, excluding the center
static NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i64,
    pub y: i64,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offsets this position by `(dx, dy)`
    ///
    /// Returns [`None`] if either coordinate would leave the `i64` range.
    #[inline]
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The representable positions of the Moore neighborhood around this one
    ///
    /// Neighbors that would fall outside the `i64` range are skipped rather
    /// than wrapped, so cells on the edge of the plane yield fewer than 8.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Pos2> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_offset(dx, dy))
    }
}
impl From<(i64, i64)> for Pos2 {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare y coordinate first, then x coordinate
        // i.e. if y coordinate is equal, then compare x coordinate
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = Pos2::new(5, -5).neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Pos2::new(5, -5)));
        assert!(neighbors.contains(&Pos2::new(4, -6)));
        assert!(neighbors.contains(&Pos2::new(6, -4)));
    }

    #[test]
    fn edge_cell_skips_unrepresentable_neighbors() {
        let neighbors: Vec<_> = Pos2::new(i64::MAX, 0).neighbors().collect();

        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|p| p.x >= i64::MAX - 1));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<_> = Pos2::new(i64::MIN, i64::MIN).neighbors().collect();

        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&Pos2::new(i64::MIN + 1, i64::MIN + 1)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut positions = vec![Pos2::new(3, 1), Pos2::new(-2, 1), Pos2::new(9, 0)];
        positions.sort();

        assert_eq!(
            positions,
            vec![Pos2::new(9, 0), Pos2::new(-2, 1), Pos2::new(3, 1)]
        );
    }
}

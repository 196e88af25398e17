//! Iteration over Manhattan-distance shells ([`DiamondIter`]).

use core::iter::FusedIterator;

use crate::math::{GridCoordinate, GridPoint, GridSizeCoord};

/// Iterator over the grid points whose Manhattan (L1) distance from an origin lies in a
/// half-open range of radii.
///
/// Points are produced one level (distance) at a time in increasing order, so the output is
/// a sequence of expanding octahedral shells. Within a level, X increases slowest, then Y,
/// and each (X, Y) column produces its negative-Z point before its positive-Z point.
///
/// The constructors check that every point to be produced is representable as a
/// [`GridPoint`], so iteration itself cannot fail.
///
/// ```
/// use cubic_grid::math::{DiamondIter, GridPoint};
///
/// let points: Vec<GridPoint> = DiamondIter::region(GridPoint::new(10, 0, 0), 1)?.collect();
/// assert_eq!(points.len(), 7);
/// assert_eq!(points[0], GridPoint::new(10, 0, 0));
/// # Ok::<(), cubic_grid::math::DiamondRangeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DiamondIter {
    origin: GridPoint,
    /// Current distance; iteration is finished when this reaches `end`.
    level: u64,
    end: u64,
    x: i64,
    y: i64,
    z_positive: bool,
    /// Number of points already produced at the current level.
    produced_in_level: u64,
}

impl DiamondIter {
    fn new(origin: GridPoint, start: u64, end: u64) -> Result<Self, DiamondRangeError> {
        if end > start {
            // The farthest point on each axis is at offset end - 1.
            let reach = (end - 1).cast_signed();
            let fits = |c: GridCoordinate| {
                i64::from(c) - reach >= i64::from(GridCoordinate::MIN)
                    && i64::from(c) + reach <= i64::from(GridCoordinate::MAX)
            };
            if !(fits(origin.x) && fits(origin.y) && fits(origin.z)) {
                return Err(DiamondRangeError(RangeErrorKind::OutOfBounds {
                    origin,
                    radius: end - 1,
                }));
            }
        }
        Ok(Self {
            origin,
            level: start,
            end,
            x: -level_i64(start),
            y: 0,
            z_positive: false,
            produced_in_level: 0,
        })
    }

    /// Iterates over every point within distance `radius` of `origin`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if some point within `radius` of `origin` has a coordinate outside
    /// the range of [`GridCoordinate`].
    #[inline]
    pub fn region(origin: GridPoint, radius: GridSizeCoord) -> Result<Self, DiamondRangeError> {
        Self::new(origin, 0, u64::from(radius) + 1)
    }

    /// Iterates over the points whose distance from `origin` is at least `start` and less
    /// than `end`.
    ///
    /// ```
    /// use cubic_grid::math::{DiamondIter, GridPoint};
    ///
    /// let o = GridPoint::new(0, 0, 0);
    /// assert_eq!(DiamondIter::hollow(o, 1, 3).unwrap().count(), 6 + 18);
    /// assert_eq!(DiamondIter::hollow(o, 2, 2).unwrap().count(), 0);
    /// assert!(DiamondIter::hollow(o, 3, 2).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end`, or if some point in the range has a coordinate
    /// outside the range of [`GridCoordinate`].
    #[inline]
    pub fn hollow(
        origin: GridPoint,
        start: GridSizeCoord,
        end: GridSizeCoord,
    ) -> Result<Self, DiamondRangeError> {
        if start > end {
            return Err(DiamondRangeError(RangeErrorKind::Inverted { start, end }));
        }
        Self::new(origin, u64::from(start), u64::from(end))
    }

    /// Iterates over the points at exactly distance `radius` from `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if some point at distance `radius` from `origin` has a coordinate
    /// outside the range of [`GridCoordinate`].
    #[inline]
    pub fn shell(origin: GridPoint, radius: GridSizeCoord) -> Result<Self, DiamondRangeError> {
        Self::new(origin, u64::from(radius), u64::from(radius) + 1)
    }

    /// The point distances are measured from.
    #[inline]
    pub fn origin(&self) -> GridPoint {
        self.origin
    }

    /// The distance of the next point to be produced.
    /// Once iteration has finished, this is the end of the range.
    #[inline]
    pub fn level(&self) -> u64 {
        self.level
    }

    fn offset_point(&self, z: i64) -> GridPoint {
        let coord = |base: GridCoordinate, offset: i64| {
            GridCoordinate::try_from(i64::from(base) + offset)
                .unwrap_or_else(|_| unreachable!("offset {offset} from {base} was not checked"))
        };
        GridPoint::new(
            coord(self.origin.x, self.x),
            coord(self.origin.y, self.y),
            coord(self.origin.z, z),
        )
    }
}

impl Iterator for DiamondIter {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.level >= self.end {
            return None;
        }
        let level = level_i64(self.level);
        let rest = level - self.x.abs();
        let r = rest - self.y.abs();
        let point = self.offset_point(if self.z_positive { r } else { -r });

        if !self.z_positive && r > 0 {
            self.z_positive = true;
            self.produced_in_level += 1;
        } else {
            self.z_positive = false;
            if self.y < rest {
                self.y += 1;
                self.produced_in_level += 1;
            } else if self.x < level {
                self.x += 1;
                self.y = -(level - self.x.abs());
                self.produced_in_level += 1;
            } else {
                self.level += 1;
                self.x = -level_i64(self.level);
                self.y = 0;
                self.produced_in_level = 0;
            }
        }

        Some(point)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.level >= self.end {
            return (0, Some(0));
        }
        let remaining = points_within(self.end) - points_within(self.level)
            - u128::from(self.produced_in_level);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for DiamondIter {}

/// Levels never exceed `u32::MAX + 1`.
fn level_i64(level: u64) -> i64 {
    level.cast_signed()
}

/// Number of points at distance exactly `level`.
#[cfg(test)]
fn points_at(level: u64) -> u128 {
    if level == 0 {
        1
    } else {
        let k = u128::from(level);
        4 * k * k + 2
    }
}

/// Number of points at distance less than `n`.
fn points_within(n: u64) -> u128 {
    if n == 0 {
        return 0;
    }
    let m = u128::from(n) - 1;
    // 1 + sum over k in 1..=m of (4k² + 2)
    1 + 4 * m * (m + 1) * (2 * m + 1) / 6 + 2 * m
}

/// Error from a [`DiamondIter`] constructor given radii it cannot iterate over.
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("{0}")]
pub struct DiamondRangeError(RangeErrorKind);

#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
enum RangeErrorKind {
    /// diamond start radius {start} is greater than end radius {end}
    Inverted {
        start: GridSizeCoord,
        end: GridSizeCoord,
    },
    /// diamond of radius {radius} around {origin:?} exceeds the coordinate range
    OutOfBounds { origin: GridPoint, radius: u64 },
}

impl core::error::Error for DiamondRangeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::BlockRegion;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn l1(p: GridPoint) -> u64 {
        u64::from(p.x.unsigned_abs()) + u64::from(p.y.unsigned_abs()) + u64::from(p.z.unsigned_abs())
    }

    fn sorted(iter: impl Iterator<Item = GridPoint>) -> Vec<GridPoint> {
        let mut v: Vec<GridPoint> = iter.collect();
        v.sort_by_key(|p| p.to_array());
        v
    }

    #[test]
    fn radius_zero() {
        let o = GridPoint::new(3, -4, 5);
        assert_eq!(DiamondIter::region(o, 0).unwrap().collect::<Vec<_>>(), [o]);
        assert_eq!(DiamondIter::shell(o, 0).unwrap().collect::<Vec<_>>(), [o]);
    }

    #[test]
    fn radius_one_order() {
        let points: Vec<GridPoint> = DiamondIter::shell(GridPoint::origin(), 1).unwrap().collect();
        assert_eq!(
            points,
            [
                [-1, 0, 0],
                [0, -1, 0],
                [0, 0, -1],
                [0, 0, 1],
                [0, 1, 0],
                [1, 0, 0],
            ]
            .map(GridPoint::from)
        );
    }

    #[rstest]
    fn shell_is_exact_distance(#[values(1, 2, 3, 5)] k: u32) {
        let o = GridPoint::origin();
        let points = sorted(DiamondIter::shell(o, k).unwrap());
        let expected = sorted(
            BlockRegion::from_center_extent(o, k.cast_signed())
                .iter()
                .filter(|&p| l1(p) == u64::from(k)),
        );
        assert_eq!(points, expected);
        assert_eq!(points.len() as u128, points_at(u64::from(k)));
    }

    #[rstest]
    fn hollow_from_zero_is_region(#[values(1, 2, 4)] k: u32) {
        let o = GridPoint::new(-7, 100, 2);
        assert_eq!(
            DiamondIter::hollow(o, 0, k).unwrap().collect::<Vec<_>>(),
            DiamondIter::region(o, k - 1).unwrap().collect::<Vec<_>>()
        );
    }

    #[test]
    fn no_duplicates_and_levels_increase() {
        let o = GridPoint::new(1, 2, 3);
        let points: Vec<GridPoint> = DiamondIter::region(o, 4).unwrap().collect();
        let mut deduped = sorted(points.iter().copied());
        deduped.dedup();
        assert_eq!(deduped.len(), points.len());
        let levels: Vec<u64> = points.iter().map(|&p| l1(p - o.to_vector())).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{levels:?}");
    }

    #[test]
    fn size_hint_at_every_step() {
        let mut iter = DiamondIter::hollow(GridPoint::origin(), 1, 4).unwrap();
        let total = 6 + 18 + 38;
        for remaining in (1..=total).rev() {
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.level(), 4);
    }

    #[test]
    fn size_hint_overflow() {
        let iter = DiamondIter::region(GridPoint::origin(), i32::MAX.cast_unsigned()).unwrap();
        if usize::BITS < 128 {
            assert_eq!(iter.size_hint(), (usize::MAX, None));
        }
    }

    #[test]
    fn accessors() {
        let o = GridPoint::new(9, 9, 9);
        let mut iter = DiamondIter::shell(o, 2).unwrap();
        assert_eq!(iter.origin(), o);
        assert_eq!(iter.level(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.level(), 3);
    }

    #[test]
    fn hollow_error() {
        assert_eq!(
            DiamondIter::hollow(GridPoint::origin(), 5, 2)
                .unwrap_err()
                .to_string(),
            "diamond start radius 5 is greater than end radius 2"
        );
    }

    #[rstest]
    #[case(GridPoint::new(i32::MAX, 0, 0))]
    #[case(GridPoint::new(0, i32::MIN, 0))]
    #[case(GridPoint::new(0, 0, i32::MAX - 1))]
    fn rejects_points_outside_coordinate_range(#[case] origin: GridPoint) {
        let expected = format!(
            "diamond of radius 2 around {origin:?} exceeds the coordinate range"
        );
        assert_eq!(
            DiamondIter::region(origin, 2).unwrap_err().to_string(),
            expected
        );
        assert_eq!(DiamondIter::shell(origin, 2).unwrap_err().to_string(), expected);
        assert_eq!(
            DiamondIter::hollow(origin, 1, 3).unwrap_err().to_string(),
            expected
        );
        // An empty range produces no points, so any origin is accepted.
        assert_eq!(DiamondIter::hollow(origin, 3, 3).unwrap().count(), 0);
    }

    #[test]
    fn iterates_up_to_coordinate_limits() {
        let origin = GridPoint::new(i32::MAX - 1, i32::MIN + 1, 0);
        let iter = DiamondIter::region(origin, 1).unwrap();
        assert_eq!(iter.size_hint(), (7, Some(7)));
        let points: Vec<GridPoint> = iter.collect();
        assert_eq!(points.len(), 7);
        assert!(points.contains(&GridPoint::new(i32::MAX, i32::MIN + 1, 0)));
        assert!(points.contains(&GridPoint::new(i32::MAX - 1, i32::MIN, 0)));
    }
}

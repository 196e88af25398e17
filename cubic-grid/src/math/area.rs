//! Two-dimensional integer areas ([`BlockArea`]).

use core::fmt;
use core::ops::RangeInclusive;

use arrayvec::ArrayVec;

use crate::math::coord::{inclusive_len, inclusive_max, saturate};
use crate::math::region::RangeWithLength;
use crate::math::{
    AreaPoint, AreaSize, AreaVector, BlockAreaIter, FreeCoordinate, GridCoordinate, OverflowKind,
    RegionOverflowError,
};

/// An axis-aligned rectangle of grid points, given by its inclusive minimum and
/// maximum corners.
///
/// This is the two-dimensional counterpart of [`BlockRegion`](crate::math::BlockRegion),
/// with the same conventions: every area containing no points is [`BlockArea::EMPTY`].
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct BlockArea {
    min: AreaPoint,
    max: AreaPoint,
}

impl BlockArea {
    /// The area containing no points.
    pub const EMPTY: Self = Self {
        min: AreaPoint::new(0, 0),
        max: AreaPoint::new(-1, -1),
    };

    /// Constructs an area from its inclusive minimum and maximum corners.
    ///
    /// If `max` is less than `min` on either axis, the result is [`BlockArea::EMPTY`].
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_max(min: impl Into<AreaPoint>, max: impl Into<AreaPoint>) -> Self {
        Self::normalize(min.into(), max.into())
    }

    const fn normalize(min: AreaPoint, max: AreaPoint) -> Self {
        if max.x < min.x || max.y < min.y {
            Self::EMPTY
        } else {
            Self { min, max }
        }
    }

    /// Constructs the smallest area containing both `a` and `b`, in any order.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn bounded(a: impl Into<AreaPoint>, b: impl Into<AreaPoint>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Constructs an area from its minimum corner and its size.
    ///
    /// # Errors
    ///
    /// Returns an error if the maximum corner would not be representable.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_min_size(
        min: impl Into<AreaPoint>,
        size: impl Into<AreaSize>,
    ) -> Result<Self, RegionOverflowError> {
        let (min, size) = (min.into(), size.into());
        if size.is_empty() {
            return Ok(Self::EMPTY);
        }
        let overflow = || RegionOverflowError(OverflowKind::Size2 { min, size });
        Ok(Self {
            min,
            max: AreaPoint::new(
                inclusive_max(min.x, size.width).ok_or_else(overflow)?,
                inclusive_max(min.y, size.height).ok_or_else(overflow)?,
            ),
        })
    }

    /// Constructs an area from its minimum corner and its size.
    ///
    /// Panics if the maximum corner would not be representable.
    /// Use [`BlockArea::checked_from_min_size()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_size(min: impl Into<AreaPoint>, size: impl Into<AreaSize>) -> Self {
        Self::checked_from_min_size(min, size).expect("BlockArea::from_min_size")
    }

    /// Constructs the area extending `extents` from `center` in each direction along each
    /// axis. Negative extents give [`BlockArea::EMPTY`]; bounds are clamped.
    #[inline]
    pub fn from_center_extents(center: AreaPoint, extents: AreaVector) -> Self {
        Self::normalize(
            AreaPoint::new(
                saturate(i64::from(center.x) - i64::from(extents.x)),
                saturate(i64::from(center.y) - i64::from(extents.y)),
            ),
            AreaPoint::new(
                saturate(i64::from(center.x) + i64::from(extents.x)),
                saturate(i64::from(center.y) + i64::from(extents.y)),
            ),
        )
    }

    /// Constructs the area containing the single point `point`.
    #[inline]
    pub const fn single(point: AreaPoint) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Constructs the smallest area containing all of `points`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn bounding_box(points: impl IntoIterator<Item = AreaPoint>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |area, point| area.union_point(point))
    }

    /// The inclusive minimum corner.
    #[inline]
    pub const fn min(&self) -> AreaPoint {
        self.min
    }

    /// The inclusive maximum corner.
    #[inline]
    pub const fn max(&self) -> AreaPoint {
        self.max
    }

    /// Size of the area along each axis, saturating for the full coordinate range.
    #[inline]
    pub fn size(&self) -> AreaSize {
        AreaSize::new(
            inclusive_len(self.min.x, self.max.x),
            inclusive_len(self.min.y, self.max.y),
        )
    }

    /// Number of points in the area, or [`None`] if that does not fit in a `usize`.
    #[inline]
    pub fn area(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        let width = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let height = i64::from(self.max.y) - i64::from(self.min.y) + 1;
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)
    }

    /// Returns whether the area contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The inclusive range of X coordinates.
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<GridCoordinate> {
        self.min.x..=self.max.x
    }

    /// The inclusive range of Y coordinates.
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<GridCoordinate> {
        self.min.y..=self.max.y
    }

    /// The center of the space the area's cells occupy, or [`None`] if it is empty.
    #[inline]
    pub fn center(&self) -> Option<euclid::Point2D<FreeCoordinate, crate::math::Block>> {
        if self.is_empty() {
            return None;
        }
        let min = self.min.to_f64();
        let max = self.max.to_f64() + euclid::Vector2D::splat(1.0);
        Some(min.lerp(max, 0.5))
    }

    /// The area of points contained in both areas.
    #[inline]
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::normalize(self.min.max(other.min), self.max.min(other.max))
    }

    /// The smallest area containing both areas.
    #[inline]
    #[must_use]
    pub fn encompass(self, other: Self) -> Self {
        if self.is_empty() {
            other
        } else if other.is_empty() {
            self
        } else {
            Self {
                min: self.min.min(other.min),
                max: self.max.max(other.max),
            }
        }
    }

    /// The smallest area containing this area and `point`.
    #[inline]
    #[must_use]
    pub fn union_point(self, point: AreaPoint) -> Self {
        self.encompass(Self::single(point))
    }

    /// Returns up to four disjoint areas which together contain exactly the points of `self`
    /// that are not in `other`, cutting along X and then Y.
    ///
    /// ```
    /// use cubic_grid::math::BlockArea;
    ///
    /// let a = BlockArea::from_min_max([0, 0], [4, 4]);
    /// let pieces = a.difference(BlockArea::from_min_max([1, 1], [3, 3]));
    /// assert_eq!(pieces.len(), 4);
    /// assert_eq!(pieces.iter().map(|p| p.area().unwrap()).sum::<usize>(), 16);
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn difference(self, other: Self) -> ArrayVec<Self, 4> {
        let mut pieces = ArrayVec::new();
        if self.is_empty() {
            return pieces;
        }
        let overlap = self.intersection(other);
        if overlap.is_empty() {
            pieces.push(self);
            return pieces;
        }

        let mut rest = self;
        if rest.min.x < overlap.min.x {
            pieces.push(Self {
                max: AreaPoint::new(overlap.min.x - 1, rest.max.y),
                ..rest
            });
        }
        if rest.max.x > overlap.max.x {
            pieces.push(Self {
                min: AreaPoint::new(overlap.max.x + 1, rest.min.y),
                ..rest
            });
        }
        rest.min.x = overlap.min.x;
        rest.max.x = overlap.max.x;
        if rest.min.y < overlap.min.y {
            pieces.push(Self {
                max: AreaPoint::new(rest.max.x, overlap.min.y - 1),
                ..rest
            });
        }
        if rest.max.y > overlap.max.y {
            pieces.push(Self {
                min: AreaPoint::new(rest.min.x, overlap.max.y + 1),
                ..rest
            });
        }
        pieces
    }

    /// Iterate over the points of `self` which are not in `other`.
    #[inline]
    pub fn subtract_points(self, other: Self) -> impl Iterator<Item = AreaPoint> {
        self.iter().filter(move |&point| !other.contains_point(point))
    }

    /// Moves every bound outward by `amount` (inward where negative), clamping on overflow.
    #[inline]
    #[must_use]
    pub fn expand(self, amount: AreaVector) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::normalize(
            AreaPoint::new(
                saturate(i64::from(self.min.x) - i64::from(amount.x)),
                saturate(i64::from(self.min.y) - i64::from(amount.y)),
            ),
            AreaPoint::new(
                saturate(i64::from(self.max.x) + i64::from(amount.x)),
                saturate(i64::from(self.max.y) + i64::from(amount.y)),
            ),
        )
    }

    /// Displaces the area by `offset`, clamping on overflow.
    #[inline]
    #[must_use]
    pub fn translate(self, offset: AreaVector) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let offset = offset.to_point();
        Self {
            min: self
                .min
                .zip(offset, GridCoordinate::saturating_add)
                .to_point(),
            max: self
                .max
                .zip(offset, GridCoordinate::saturating_add)
                .to_point(),
        }
    }

    /// Returns whether the area contains `point`.
    #[inline]
    pub fn contains_point(&self, point: AreaPoint) -> bool {
        self.x_range().contains(&point.x) && self.y_range().contains(&point.y)
    }

    /// Returns whether every point of `other` is in `self`. An empty area contains nothing.
    #[inline]
    pub fn contains_area(&self, other: Self) -> bool {
        if self.is_empty() {
            return false;
        }
        other.is_empty() || (self.contains_point(other.min) && self.contains_point(other.max))
    }

    /// Returns whether the areas have at least one point in common.
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Returns the point of the area closest to `point`, or [`None`] if it is empty.
    #[inline]
    pub fn nearest_point_to(&self, point: AreaPoint) -> Option<AreaPoint> {
        if self.is_empty() {
            None
        } else {
            Some(point.clamp(self.min, self.max))
        }
    }

    /// Iterate over all points of the area; X varies fastest, then Y.
    #[inline]
    pub fn iter(self) -> BlockAreaIter {
        BlockAreaIter::new(self)
    }
}

impl IntoIterator for BlockArea {
    type Item = AreaPoint;
    type IntoIter = BlockAreaIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for BlockArea {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

#[mutants::skip]
impl fmt::Debug for BlockArea {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("BlockArea::EMPTY");
        }
        f.debug_tuple("BlockArea")
            .field(&RangeWithLength(self.x_range()))
            .field(&RangeWithLength(self.y_range()))
            .finish()
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a> arbitrary::Arbitrary<'a> for BlockArea {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a: [GridCoordinate; 2] = u.arbitrary()?;
        let b: [GridCoordinate; 2] = u.arbitrary()?;
        Ok(Self::from_min_max(a, b))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[GridCoordinate; 4] as arbitrary::Arbitrary>::size_hint(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use itertools::Itertools as _;
    use pretty_assertions::assert_eq;

    /// All areas within a small window, including many empty ones.
    fn small_areas() -> impl Iterator<Item = BlockArea> + Clone {
        (-2..=2)
            .cartesian_product(-2..=2)
            .cartesian_product((-2..=2).cartesian_product(-2..=2))
            .step_by(7)
            .map(|((x0, y0), (x1, y1))| BlockArea::from_min_max([x0, y0], [x1, y1]))
    }

    #[test]
    fn empty_is_canonical() {
        assert_eq!(BlockArea::from_min_max([1, 1], [0, 5]), BlockArea::EMPTY);
        assert_eq!(BlockArea::from_min_size([4, 4], [3, 0]), BlockArea::EMPTY);
        assert_eq!(BlockArea::EMPTY.size(), AreaSize::zero());
        assert_eq!(BlockArea::EMPTY.area(), Some(0));
        assert_eq!(BlockArea::EMPTY.expand(AreaVector::splat(4)), BlockArea::EMPTY);
        assert_eq!(BlockArea::EMPTY.center(), None);
    }

    #[test]
    fn sizes() {
        let a = BlockArea::from_min_size([-3, 2], [4, 5]);
        assert_eq!(a.max(), AreaPoint::new(0, 6));
        assert_eq!(a.size(), AreaSize::new(4, 5));
        assert_eq!(a.area(), Some(20));
        assert_eq!(a.iter().count(), 20);
        assert_eq!(a.center(), Some(euclid::point2(-1.0, 4.5)));
    }

    #[test]
    fn overflow_message() {
        let error = BlockArea::checked_from_min_size([0, i32::MAX], [1, 3]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "area size (+1, +3) from minimum (+0, +2147483647) \
                produced (+0, +2147483649) which overflows"
        );
    }

    #[test]
    fn difference_matches_point_sets() {
        for (a, b) in small_areas().cartesian_product(small_areas()) {
            let pieces = a.difference(b);
            let mut actual: Vec<AreaPoint> = pieces.iter().flat_map(|p| p.iter()).collect();
            let total = actual.len();
            actual.sort_by_key(|p| p.to_array());
            actual.dedup();
            assert_eq!(total, actual.len(), "pieces overlap: {a:?} - {b:?}");
            let mut expected: Vec<AreaPoint> = a.subtract_points(b).collect();
            expected.sort_by_key(|p| p.to_array());
            assert_eq!(actual, expected, "{a:?} - {b:?}");
        }
    }

    #[test]
    fn intersection_and_containment() {
        for (a, b) in small_areas().cartesian_product(small_areas()) {
            let i = a.intersection(b);
            assert_eq!(i, b.intersection(a));
            assert_eq!(a.overlaps(b), !i.is_empty());
            if !i.is_empty() {
                assert!(a.contains_area(i) && b.contains_area(i), "{a:?} {b:?}");
            }
            let e = a.encompass(b);
            if !a.is_empty() {
                assert!(e.contains_area(a));
            }
        }
    }

    #[test]
    fn nearest_point() {
        let a = BlockArea::from_min_max([0, 0], [3, 3]);
        assert_eq!(
            a.nearest_point_to(AreaPoint::new(-5, 2)),
            Some(AreaPoint::new(0, 2))
        );
        assert_eq!(BlockArea::EMPTY.nearest_point_to(AreaPoint::new(0, 0)), None);
        assert_eq!(
            BlockArea::bounding_box([AreaPoint::new(3, -1), AreaPoint::new(-2, 4)]),
            BlockArea::from_min_max([-2, -1], [3, 4])
        );
        assert_eq!(
            a.translate(AreaVector::new(1, -1)),
            BlockArea::from_min_max([1, -1], [4, 2])
        );
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", BlockArea::from_min_max([1, 2], [3, 4])),
            "BlockArea(1..=3, 2..=4)"
        );
    }
}

//! Axis-aligned integer regions of blocks ([`BlockRegion`]).

use core::fmt;
use core::ops::RangeInclusive;

use arrayvec::ArrayVec;
use euclid::Box3D;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::coord::{inclusive_len, inclusive_max, saturate};
use crate::math::{
    Axis, Block, BlockRegionIter, FreeCoordinate, FreePoint, FreeVector, GridCoordinate,
    GridPoint, GridSize, GridSizeCoord, GridVector, OverflowKind, RegionOverflowError, Rotation,
    Side, SideMap,
};

/// An axis-aligned box of blocks, given by its inclusive minimum and maximum corners.
///
/// A region whose maximum is less than its minimum on any axis contains no blocks; all such
/// regions are represented by the single value [`BlockRegion::EMPTY`], so that equality of
/// regions is equality of the sets of blocks they contain. Every operation accepts
/// [`EMPTY`](Self::EMPTY) and returns [`EMPTY`](Self::EMPTY), `false`, or nothing for it.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct BlockRegion {
    min: GridPoint,
    /// Not less than `min` on any axis, unless this is [`BlockRegion::EMPTY`].
    max: GridPoint,
}

impl BlockRegion {
    /// The region containing no blocks.
    pub const EMPTY: Self = Self {
        min: GridPoint::new(0, 0, 0),
        max: GridPoint::new(-1, -1, -1),
    };

    /// The region containing every block.
    pub const EVERYWHERE: Self = Self {
        min: GridPoint::new(
            GridCoordinate::MIN,
            GridCoordinate::MIN,
            GridCoordinate::MIN,
        ),
        max: GridPoint::new(
            GridCoordinate::MAX,
            GridCoordinate::MAX,
            GridCoordinate::MAX,
        ),
    };

    /// Constructs a region from its inclusive minimum and maximum corners.
    ///
    /// If `max` is less than `min` on any axis, the result is [`BlockRegion::EMPTY`].
    ///
    /// ```
    /// use cubic_grid::math::BlockRegion;
    ///
    /// let r = BlockRegion::from_min_max([0, 0, 0], [1, 1, 1]);
    /// assert_eq!(r.volume(), Some(8));
    ///
    /// assert_eq!(BlockRegion::from_min_max([5, 5, 5], [3, 3, 3]), BlockRegion::EMPTY);
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_max(min: impl Into<GridPoint>, max: impl Into<GridPoint>) -> Self {
        Self::normalize(min.into(), max.into())
    }

    const fn normalize(min: GridPoint, max: GridPoint) -> Self {
        if max.x < min.x || max.y < min.y || max.z < min.z {
            Self::EMPTY
        } else {
            Self { min, max }
        }
    }

    /// Constructs the smallest region containing both `a` and `b`, in any order.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn bounded(a: impl Into<GridPoint>, b: impl Into<GridPoint>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Constructs a region from its minimum corner and its size.
    ///
    /// A size of zero on any axis gives [`BlockRegion::EMPTY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the maximum corner would not be representable.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_min_size(
        min: impl Into<GridPoint>,
        size: impl Into<GridSize>,
    ) -> Result<Self, RegionOverflowError> {
        fn inner(min: GridPoint, size: GridSize) -> Result<BlockRegion, RegionOverflowError> {
            if size.is_empty() {
                return Ok(BlockRegion::EMPTY);
            }
            let overflow = || RegionOverflowError(OverflowKind::Size3 { min, size });
            Ok(BlockRegion {
                min,
                max: GridPoint::new(
                    inclusive_max(min.x, size.width).ok_or_else(overflow)?,
                    inclusive_max(min.y, size.height).ok_or_else(overflow)?,
                    inclusive_max(min.z, size.depth).ok_or_else(overflow)?,
                ),
            })
        }

        inner(min.into(), size.into())
    }

    /// Constructs a region from its minimum corner and its size.
    ///
    /// Panics if the maximum corner would not be representable.
    /// Use [`BlockRegion::checked_from_min_size()`] to avoid panics.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, GridPoint};
    ///
    /// let r = BlockRegion::from_min_size([5, 0, 0], [10, 1, 1]);
    /// assert_eq!(r.max(), GridPoint::new(14, 0, 0));
    /// ```
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_size(min: impl Into<GridPoint>, size: impl Into<GridSize>) -> Self {
        Self::checked_from_min_size(min, size).expect("BlockRegion::from_min_size")
    }

    /// Constructs the region extending `extents` blocks from `center` in each direction
    /// along each axis. Negative extents give [`BlockRegion::EMPTY`]. Bounds that would
    /// overflow are clamped.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, GridPoint, GridVector};
    ///
    /// let r = BlockRegion::from_center_extents(GridPoint::new(0, 10, 0), GridVector::new(1, 0, 2));
    /// assert_eq!(r, BlockRegion::from_min_max([-1, 10, -2], [1, 10, 2]));
    /// ```
    #[inline]
    pub fn from_center_extents(center: GridPoint, extents: GridVector) -> Self {
        let min = center.zip(extents.to_point(), |c, e| saturate(i64::from(c) - i64::from(e)));
        let max = center.zip(extents.to_point(), |c, e| saturate(i64::from(c) + i64::from(e)));
        Self::normalize(min.to_point(), max.to_point())
    }

    /// As [`BlockRegion::from_center_extents()`] with the same extent on every axis.
    #[inline]
    pub fn from_center_extent(center: GridPoint, extent: GridCoordinate) -> Self {
        Self::from_center_extents(center, GridVector::splat(extent))
    }

    /// Constructs the smallest region containing every block which overlaps the
    /// box of half-size `extents` centered on `center`, where each block occupies the
    /// unit cube extending positively from its coordinates.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, FreePoint, FreeVector};
    ///
    /// let r = BlockRegion::from_free_center_extents(
    ///     FreePoint::new(0.5, 0.5, 0.5),
    ///     FreeVector::new(0.5, 1.0, 0.25),
    /// );
    /// assert_eq!(r, BlockRegion::from_min_max([0, -1, 0], [0, 1, 0]));
    /// ```
    #[inline]
    pub fn from_free_center_extents(center: FreePoint, extents: FreeVector) -> Self {
        let lower = center - extents;
        let upper = center + extents;
        let to_min = |c: FreeCoordinate| saturate(c.floor() as i64);
        let to_max = |c: FreeCoordinate| saturate((c.ceil() as i64).saturating_sub(1));
        Self::normalize(lower.map(to_min), upper.map(to_max))
    }

    /// Constructs the region containing the single block at `point`.
    #[inline]
    pub const fn single(point: GridPoint) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Constructs the smallest region containing all of `points`,
    /// or [`BlockRegion::EMPTY`] if there are none.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn bounding_box(points: impl IntoIterator<Item = GridPoint>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |region, point| region.union_point(point))
    }

    /// The inclusive minimum corner. For [`BlockRegion::EMPTY`] this is `(0, 0, 0)`.
    #[inline]
    pub const fn min(&self) -> GridPoint {
        self.min
    }

    /// The inclusive maximum corner. For [`BlockRegion::EMPTY`] this is `(-1, -1, -1)`.
    #[inline]
    pub const fn max(&self) -> GridPoint {
        self.max
    }

    /// Size of the region in blocks along each axis.
    ///
    /// The size of [`BlockRegion::EVERYWHERE`] on each axis is one more than the maximum
    /// [`GridSizeCoord`], so it is reported as [`GridSizeCoord::MAX`].
    #[inline]
    pub fn size(&self) -> GridSize {
        GridSize::new(
            inclusive_len(self.min.x, self.max.x),
            inclusive_len(self.min.y, self.max.y),
            inclusive_len(self.min.z, self.max.z),
        )
    }

    /// Number of blocks in the region, or [`None`] if that does not fit in a `usize`.
    #[inline]
    pub fn volume(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        let mut volume: usize = 1;
        for axis in Axis::ALL {
            let len = i64::from(self.max[axis]) - i64::from(self.min[axis]) + 1;
            volume = volume.checked_mul(usize::try_from(len).ok()?)?;
        }
        Some(volume)
    }

    /// Returns whether the region contains no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The inclusive range of coordinates along `axis`.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<GridCoordinate> {
        self.min[axis]..=self.max[axis]
    }

    /// The center of the space the region's blocks occupy, or [`None`] if it is empty.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, FreePoint};
    ///
    /// let r = BlockRegion::from_min_size([0, 0, -2], [10, 3, 4]);
    /// assert_eq!(r.center(), Some(FreePoint::new(5.0, 1.5, 0.0)));
    /// ```
    #[inline]
    pub fn center(&self) -> Option<FreePoint> {
        if self.is_empty() {
            return None;
        }
        let free = self.to_free_bounds();
        Some(free.center())
    }

    /// The region of blocks contained in both regions.
    ///
    /// ```
    /// use cubic_grid::math::BlockRegion;
    ///
    /// let a = BlockRegion::from_min_max([0, 0, 0], [9, 9, 9]);
    /// let b = BlockRegion::from_min_max([5, -5, 5], [20, 5, 20]);
    /// assert_eq!(a.intersection(b), BlockRegion::from_min_max([5, 0, 5], [9, 5, 9]));
    /// assert_eq!(a.intersection(BlockRegion::single([10, 0, 0].into())), BlockRegion::EMPTY);
    /// ```
    #[inline]
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::normalize(self.min.max(other.min), self.max.min(other.max))
    }

    /// The smallest region containing both regions. This is not the union of the sets of
    /// blocks, since it also contains any blocks between them.
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

    /// The smallest region containing this region and `point`.
    #[inline]
    #[must_use]
    pub fn union_point(self, point: GridPoint) -> Self {
        self.encompass(Self::single(point))
    }

    /// Returns disjoint regions which together contain exactly the blocks of `self` that are
    /// not in `other`.
    ///
    /// If the regions do not overlap, the result is `self` alone; if `other` contains
    /// `self`, the result is empty. Otherwise, up to six slabs are produced, by cutting
    /// along X, then Y, then Z.
    ///
    /// ```
    /// use cubic_grid::math::BlockRegion;
    ///
    /// let a = BlockRegion::from_min_max([0, 0, 0], [9, 0, 0]);
    /// let hole = BlockRegion::from_min_max([3, 0, 0], [4, 0, 0]);
    /// assert_eq!(
    ///     a.difference(hole).as_slice(),
    ///     &[
    ///         BlockRegion::from_min_max([0, 0, 0], [2, 0, 0]),
    ///         BlockRegion::from_min_max([5, 0, 0], [9, 0, 0]),
    ///     ],
    /// );
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn difference(self, other: Self) -> ArrayVec<Self, 6> {
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
        for axis in Axis::ALL {
            if rest.min[axis] < overlap.min[axis] {
                let mut below = rest;
                below.max[axis] = overlap.min[axis] - 1;
                pieces.push(below);
            }
            if rest.max[axis] > overlap.max[axis] {
                let mut above = rest;
                above.min[axis] = overlap.max[axis] + 1;
                pieces.push(above);
            }
            rest.min[axis] = overlap.min[axis];
            rest.max[axis] = overlap.max[axis];
        }
        pieces
    }

    /// Iterate over the blocks of `self` which are not in `other`, in the same order
    /// as [`BlockRegion::iter()`].
    #[inline]
    pub fn subtract_points(self, other: Self) -> impl Iterator<Item = GridPoint> {
        self.iter().filter(move |&point| !other.contains_point(point))
    }

    /// Moves every bound outward by `amount` (inward where negative). Bounds that would
    /// overflow are clamped, and a result with no blocks is [`BlockRegion::EMPTY`].
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, GridVector};
    ///
    /// let r = BlockRegion::from_min_max([0, 0, 0], [3, 3, 3]);
    /// assert_eq!(
    ///     r.expand(GridVector::new(1, 0, -1)),
    ///     BlockRegion::from_min_max([-1, 0, 1], [4, 3, 2]),
    /// );
    /// assert_eq!(r.expand(GridVector::new(0, -2, 0)), BlockRegion::EMPTY);
    /// ```
    #[inline]
    #[must_use]
    pub fn expand(self, amount: GridVector) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let amount = amount.to_point();
        let min = self.min.zip(amount, |m, a| saturate(i64::from(m) - i64::from(a)));
        let max = self.max.zip(amount, |m, a| saturate(i64::from(m) + i64::from(a)));
        Self::normalize(min.to_point(), max.to_point())
    }

    /// Moves each side outward by the corresponding amount. Bounds that would overflow are
    /// clamped.
    #[inline]
    #[must_use]
    pub fn grow(self, amounts: SideMap<GridSizeCoord>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self {
            min: GridPoint::new(
                self.min.x.saturating_sub_unsigned(amounts.left),
                self.min.y.saturating_sub_unsigned(amounts.bottom),
                self.min.z.saturating_sub_unsigned(amounts.front),
            ),
            max: GridPoint::new(
                self.max.x.saturating_add_unsigned(amounts.right),
                self.max.y.saturating_add_unsigned(amounts.top),
                self.max.z.saturating_add_unsigned(amounts.back),
            ),
        }
    }

    /// Moves each side inward by the corresponding amount. If the sides cross, the result
    /// is [`BlockRegion::EMPTY`].
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, SideMap};
    ///
    /// let r = BlockRegion::from_min_max([10, 10, 10], [20, 20, 20]);
    /// let amounts = SideMap { left: 1, bottom: 2, front: 3, right: 4, top: 5, back: 6 };
    /// assert_eq!(r.shrink(amounts), BlockRegion::from_min_max([11, 12, 13], [16, 15, 14]));
    /// assert_eq!(r.grow(amounts).shrink(amounts), r);
    /// assert_eq!(r.shrink(SideMap::splat(6)), BlockRegion::EMPTY);
    /// ```
    #[inline]
    #[must_use]
    pub fn shrink(self, amounts: SideMap<GridSizeCoord>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let min = [
            i64::from(self.min.x) + i64::from(amounts.left),
            i64::from(self.min.y) + i64::from(amounts.bottom),
            i64::from(self.min.z) + i64::from(amounts.front),
        ];
        let max = [
            i64::from(self.max.x) - i64::from(amounts.right),
            i64::from(self.max.y) - i64::from(amounts.top),
            i64::from(self.max.z) - i64::from(amounts.back),
        ];
        if (0..3).any(|i| max[i] < min[i]) {
            return Self::EMPTY;
        }
        // Both bounds lie within the original bounds, so they do not saturate.
        Self {
            min: GridPoint::from(min.map(saturate)),
            max: GridPoint::from(max.map(saturate)),
        }
    }

    /// Displaces the region by `offset`. Bounds that would overflow are clamped, which may
    /// reduce the size of the region.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, GridVector};
    ///
    /// assert_eq!(
    ///     BlockRegion::from_min_size([0, 0, 0], [10, 20, 30]).translate(GridVector::new(-10, 0, 0)),
    ///     BlockRegion::from_min_size([-10, 0, 0], [10, 20, 30]),
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn translate(self, offset: GridVector) -> Self {
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

    /// The one-block-thick layer of this region adjacent to `side`.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, Side};
    ///
    /// let r = BlockRegion::from_min_max([0, 0, 0], [3, 3, 3]);
    /// assert_eq!(r.face(Side::Top), BlockRegion::from_min_max([0, 3, 0], [3, 3, 3]));
    /// assert_eq!(r.face(Side::Front), BlockRegion::from_min_max([0, 0, 0], [3, 3, 0]));
    /// ```
    #[inline]
    #[must_use]
    pub fn face(self, side: Side) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let axis = side.axis();
        let mut face = self;
        if side.is_positive() {
            face.min[axis] = self.max[axis];
        } else {
            face.max[axis] = self.min[axis];
        }
        face
    }

    /// Returns whether the region contains the block at `point`.
    #[inline]
    pub fn contains_point(&self, point: GridPoint) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Returns whether `point` lies within the space occupied by the region's blocks.
    /// The minimum faces are included and the maximum faces are excluded.
    #[inline]
    pub fn contains_free_point(&self, point: FreePoint) -> bool {
        !self.is_empty() && self.to_free_bounds().contains(point)
    }

    /// Returns whether every block of `other` is in `self`.
    ///
    /// [`BlockRegion::EMPTY`] contains nothing, and is contained in every nonempty region.
    #[inline]
    pub fn contains_region(&self, other: Self) -> bool {
        if self.is_empty() {
            return false;
        }
        other.is_empty() || (self.contains_point(other.min) && self.contains_point(other.max))
    }

    /// Returns whether the regions have at least one block in common.
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Returns the block of the region closest to `point`, or [`None`] if the region is
    /// empty.
    #[inline]
    pub fn nearest_point_to(&self, point: GridPoint) -> Option<GridPoint> {
        if self.is_empty() {
            None
        } else {
            Some(point.clamp(self.min, self.max))
        }
    }

    /// Rotates the region about the origin, so that it contains exactly the rotations of
    /// the blocks it contained (as by [`Rotation::rotate_vector()`]).
    /// Coordinates whose negation would overflow are clamped.
    #[inline]
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let mut rotated = self;
        for axis in Axis::ALL {
            let target = rotation.rotate(axis.positive_side());
            let (low, high) = if target.is_positive() {
                (self.min[axis], self.max[axis])
            } else {
                (
                    self.max[axis].saturating_neg(),
                    self.min[axis].saturating_neg(),
                )
            };
            rotated.min[target.axis()] = low;
            rotated.max[target.axis()] = high;
        }
        rotated
    }

    /// The space occupied by the region's blocks, in which each block is the unit cube
    /// extending positively from its coordinates.
    #[inline]
    pub fn to_free_bounds(&self) -> Box3D<FreeCoordinate, Block> {
        if self.is_empty() {
            return Box3D::zero();
        }
        Box3D::new(
            self.min.to_f64(),
            self.max.to_f64() + euclid::Vector3D::splat(1.0),
        )
    }

    /// Iterate over all blocks of the region.
    ///
    /// X varies fastest, then Y, then Z.
    ///
    /// ```
    /// use cubic_grid::math::{BlockRegion, GridPoint};
    ///
    /// let r = BlockRegion::from_min_size([10, 20, 30], [2, 1, 2]);
    /// assert_eq!(
    ///     r.iter().collect::<Vec<GridPoint>>(),
    ///     [
    ///         GridPoint::new(10, 20, 30),
    ///         GridPoint::new(11, 20, 30),
    ///         GridPoint::new(10, 20, 31),
    ///         GridPoint::new(11, 20, 31),
    ///     ],
    /// );
    /// ```
    #[inline]
    pub fn iter(self) -> BlockRegionIter {
        BlockRegionIter::new(self)
    }
}

impl IntoIterator for BlockRegion {
    type Item = GridPoint;
    type IntoIter = BlockRegionIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for BlockRegion {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

#[mutants::skip]
impl fmt::Debug for BlockRegion {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("BlockRegion::EMPTY");
        }
        f.debug_tuple("BlockRegion")
            .field(&RangeWithLength(self.axis_range(Axis::X)))
            .field(&RangeWithLength(self.axis_range(Axis::Y)))
            .field(&RangeWithLength(self.axis_range(Axis::Z)))
            .finish()
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
impl<'a> arbitrary::Arbitrary<'a> for BlockRegion {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a: [GridCoordinate; 3] = u.arbitrary()?;
        let b: [GridCoordinate; 3] = u.arbitrary()?;
        Ok(Self::from_min_max(a, b))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[GridCoordinate; 6] as arbitrary::Arbitrary>::size_hint(depth)
    }
}

/// `Debug`-formatting helper
pub(crate) struct RangeWithLength(pub(crate) RangeInclusive<GridCoordinate>);
impl fmt::Debug for RangeWithLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = i64::from(*range.end()) - i64::from(*range.start()) + 1
            )
        } else {
            range.fmt(f)
        }
    }
}

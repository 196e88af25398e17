//! Numeric types used for coordinates and related quantities.

use euclid::{Point2D, Point3D, Size2D, Size3D, Vector2D, Vector3D};

/// Unit-of-measure marker for coordinates measured in whole blocks.
///
/// This type has no values; it is used only as the unit parameter of [`euclid`] types.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Block {}

/// Coordinates that are locked to the block grid.
pub type GridCoordinate = i32;

/// Numeric type in a [`GridSize`] or [`AreaSize`].
pub type GridSizeCoord = u32;

/// Positions that are locked to the block grid.
pub type GridPoint = Point3D<GridCoordinate, Block>;

/// Vectors that are locked to the block grid.
pub type GridVector = Vector3D<GridCoordinate, Block>;

/// Sizes of grid-aligned regions.
pub type GridSize = Size3D<GridSizeCoord, Block>;

/// Coordinates that are not locked to the block grid.
///
/// Because `GridCoordinate = i32` and `FreeCoordinate = f64`, which has more than 32 bits
/// of mantissa, the infallible conversion `From<GridCoordinate> for FreeCoordinate` exists.
pub type FreeCoordinate = f64;

/// Positions that are not locked to the block grid but may interact with it.
pub type FreePoint = Point3D<FreeCoordinate, Block>;

/// Vectors that are not locked to the block grid but may interact with it.
pub type FreeVector = Vector3D<FreeCoordinate, Block>;

/// Positions in a two-dimensional grid, such as a horizontal slice of the world.
pub type AreaPoint = Point2D<GridCoordinate, Block>;

/// Vectors in a two-dimensional grid.
pub type AreaVector = Vector2D<GridCoordinate, Block>;

/// Sizes of two-dimensional grid-aligned areas.
pub type AreaSize = Size2D<GridSizeCoord, Block>;

/// Number of lattice points between `min` and `max` inclusive, or zero if `max < min`.
///
/// The result fits in `u32` except for the full `i32` range, which saturates.
#[inline]
pub(crate) fn inclusive_len(min: GridCoordinate, max: GridCoordinate) -> GridSizeCoord {
    if max < min {
        0
    } else {
        let len = i64::from(max) - i64::from(min) + 1;
        GridSizeCoord::try_from(len).unwrap_or(GridSizeCoord::MAX)
    }
}

/// Largest value of `min + len - 1`, or [`None`] if it is not a [`GridCoordinate`].
#[inline]
pub(crate) fn inclusive_max(min: GridCoordinate, len: GridSizeCoord) -> Option<GridCoordinate> {
    GridCoordinate::try_from(i64::from(min) + i64::from(len) - 1).ok()
}

/// Convert an `i64` to a [`GridCoordinate`], clamping to the representable range.
#[inline]
pub(crate) fn saturate(value: i64) -> GridCoordinate {
    GridCoordinate::try_from(value).unwrap_or(if value < 0 {
        GridCoordinate::MIN
    } else {
        GridCoordinate::MAX
    })
}

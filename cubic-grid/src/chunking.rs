//! Mapping between block coordinates and the coordinates of power-of-two-sized chunks.
//!
//! A chunk of shape `size` with chunk position `c` contains the blocks whose coordinates
//! lie in the half-open range `c * size..(c + 1) * size` on each axis. Chunk positions are
//! computed by arithmetic shift, so negative block coordinates map to negative chunks with
//! floor semantics.

use core::fmt;

use euclid::{Point3D, Vector3D};

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::coord::saturate;
use crate::math::{
    Block, BlockRegion, FreeCoordinate, FreePoint, GridCoordinate, GridPoint, GridSize,
    GridSizeCoord, GridVector, Side,
};

/// Unit-of-measure type for block positions relative to the chunk containing them
/// (each coordinate in the range `0..size`).
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum ChunkRelative {}

/// Position of a block within its chunk.
pub type ChunkRelativePoint = Point3D<GridCoordinate, ChunkRelative>;

/// Returns the coordinate of the chunk containing block coordinate `x`, for chunks of size
/// `2.pow(power)` along that axis.
///
/// ```
/// use cubic_grid::chunking::calc_chunk_pos;
///
/// assert_eq!(calc_chunk_pos(31, 5), 0);
/// assert_eq!(calc_chunk_pos(32, 5), 1);
/// assert_eq!(calc_chunk_pos(-1, 5), -1);
/// assert_eq!(calc_chunk_pos(-33, 5), -2);
/// ```
#[inline]
pub const fn calc_chunk_pos(x: GridCoordinate, power: u32) -> GridCoordinate {
    x >> power
}

/// Returns the position of block coordinate `x` within its chunk, where `filter` is the
/// chunk size minus one.
///
/// ```
/// use cubic_grid::chunking::calc_relative_block_pos;
///
/// assert_eq!(calc_relative_block_pos(33, 31), 1);
/// assert_eq!(calc_relative_block_pos(-1, 31), 31);
/// ```
#[inline]
pub const fn calc_relative_block_pos(x: GridCoordinate, filter: GridCoordinate) -> GridCoordinate {
    x & filter
}

/// Identifies a chunk by its position in units of whole chunks.
///
/// Chunk math is much like block math (hence the type of the field), but the distinct type
/// keeps the two from being confused.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkPos(pub GridPoint);

impl fmt::Debug for ChunkPos {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(GridPoint { x, y, z, .. }) = *self;
        write!(f, "ChunkPos({x}, {y}, {z})")
    }
}

impl ChunkPos {
    /// Construct a [`ChunkPos`] from chunk coordinates
    /// (i.e. successive numbers indicate adjacent chunks).
    #[inline]
    pub const fn new(x: GridCoordinate, y: GridCoordinate, z: GridCoordinate) -> Self {
        Self(GridPoint::new(x, y, z))
    }

    /// Returns the region of blocks making up this chunk.
    ///
    /// Chunks which extend past the range of [`GridCoordinate`] are clamped to it.
    ///
    /// ```
    /// use cubic_grid::chunking::{ChunkPos, ChunkShape};
    /// use cubic_grid::math::BlockRegion;
    ///
    /// assert_eq!(
    ///     ChunkPos::new(1, -1, 0).bounds(ChunkShape::STANDARD),
    ///     BlockRegion::from_min_max([32, -64, 0], [63, -1, 31]),
    /// );
    /// ```
    #[inline]
    pub fn bounds(self, shape: ChunkShape) -> BlockRegion {
        let min = |c: GridCoordinate, p: u32| i64::from(c) << p;
        let max = |c: GridCoordinate, p: u32| ((i64::from(c) + 1) << p) - 1;
        let p = shape.power;
        BlockRegion::from_min_max(
            [
                min(self.0.x, p.x),
                min(self.0.y, p.y),
                min(self.0.z, p.z),
            ]
            .map(saturate),
            [
                max(self.0.x, p.x),
                max(self.0.y, p.y),
                max(self.0.z, p.z),
            ]
            .map(saturate),
        )
    }
}

/// The size of the chunks a world is divided into: a power of two along each axis.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ChunkShape {
    power: Vector3D<u32, Block>,
}

impl ChunkShape {
    /// Chunks of 32 × 64 × 32 blocks.
    pub const STANDARD: Self = Self {
        power: Vector3D::new(5, 6, 5),
    };

    /// Largest accepted power; a chunk must be smaller than the whole coordinate range.
    const MAX_POWER: u32 = 30;

    /// Constructs a shape whose size along each axis is two to the given power.
    ///
    /// # Errors
    ///
    /// Returns an error if any power is greater than 30.
    #[inline]
    pub fn from_powers(power: Vector3D<u32, Block>) -> Result<Self, ChunkShapeError> {
        for p in power.to_array() {
            if p > Self::MAX_POWER {
                return Err(ChunkShapeError(ShapeErrorKind::TooLarge(
                    1u64 << p.min(63),
                )));
            }
        }
        Ok(Self { power })
    }

    /// Constructs a shape with the given size in blocks.
    ///
    /// ```
    /// use cubic_grid::chunking::ChunkShape;
    /// use cubic_grid::math::GridSize;
    ///
    /// assert_eq!(ChunkShape::from_size(GridSize::new(32, 64, 32)), Ok(ChunkShape::STANDARD));
    /// assert!(ChunkShape::from_size(GridSize::new(32, 48, 32)).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any size is not a power of two, or is greater than `2.pow(30)`.
    #[inline]
    pub fn from_size(size: GridSize) -> Result<Self, ChunkShapeError> {
        let power = |s: GridSizeCoord| {
            if !s.is_power_of_two() {
                Err(ChunkShapeError(ShapeErrorKind::NotPowerOfTwo(s)))
            } else {
                Ok(s.trailing_zeros())
            }
        };
        Self::from_powers(Vector3D::new(
            power(size.width)?,
            power(size.height)?,
            power(size.depth)?,
        ))
    }

    /// The size of a chunk in blocks.
    #[inline]
    pub fn size(&self) -> GridSize {
        GridSize::new(
            1 << self.power.x,
            1 << self.power.y,
            1 << self.power.z,
        )
    }

    /// The base-2 logarithm of [`ChunkShape::size()`].
    #[inline]
    pub fn power(&self) -> Vector3D<u32, Block> {
        self.power
    }

    /// The mask selecting the within-chunk bits of a block coordinate: the size minus one.
    #[inline]
    pub fn filter(&self) -> GridVector {
        self.size().to_vector().to_i32() - GridVector::splat(1)
    }

    /// Returns the chunk containing `block`.
    ///
    /// ```
    /// use cubic_grid::chunking::{ChunkPos, ChunkShape};
    /// use cubic_grid::math::GridPoint;
    ///
    /// assert_eq!(
    ///     ChunkShape::STANDARD.chunk_pos(GridPoint::new(-1, 64, 40)),
    ///     ChunkPos::new(-1, 1, 1),
    /// );
    /// ```
    #[inline]
    pub fn chunk_pos(&self, block: GridPoint) -> ChunkPos {
        ChunkPos::new(
            calc_chunk_pos(block.x, self.power.x),
            calc_chunk_pos(block.y, self.power.y),
            calc_chunk_pos(block.z, self.power.z),
        )
    }

    /// Returns the chunk containing the block containing `point`.
    ///
    /// Returns [`None`] if the point is NaN or outside the range of block coordinates.
    #[inline]
    pub fn chunk_pos_free(&self, point: FreePoint) -> Option<ChunkPos> {
        let block = |c: FreeCoordinate| -> Option<GridCoordinate> {
            let c = c.floor();
            if c >= FreeCoordinate::from(GridCoordinate::MIN)
                && c <= FreeCoordinate::from(GridCoordinate::MAX)
            {
                Some(c as GridCoordinate)
            } else {
                None
            }
        };
        Some(self.chunk_pos(GridPoint::new(
            block(point.x)?,
            block(point.y)?,
            block(point.z)?,
        )))
    }

    /// Returns the position of `block` within its chunk.
    #[inline]
    pub fn relative_pos(&self, block: GridPoint) -> ChunkRelativePoint {
        let filter = self.filter();
        ChunkRelativePoint::new(
            calc_relative_block_pos(block.x, filter.x),
            calc_relative_block_pos(block.y, filter.y),
            calc_relative_block_pos(block.z, filter.z),
        )
    }

    /// Returns the region, in chunk coordinates, of the chunks which contain any block of
    /// `region`.
    ///
    /// ```
    /// use cubic_grid::chunking::ChunkShape;
    /// use cubic_grid::math::BlockRegion;
    ///
    /// let blocks = BlockRegion::from_min_max([-10, 0, 0], [40, 63, 0]);
    /// assert_eq!(
    ///     ChunkShape::STANDARD.chunk_region(blocks),
    ///     BlockRegion::from_min_max([-1, 0, 0], [1, 0, 0]),
    /// );
    /// ```
    #[inline]
    pub fn chunk_region(&self, region: BlockRegion) -> BlockRegion {
        if region.is_empty() {
            return BlockRegion::EMPTY;
        }
        BlockRegion::from_min_max(
            self.chunk_pos(region.min()).0,
            self.chunk_pos(region.max()).0,
        )
    }

    /// Iterates over the chunks which contain any block of `region`, in the order of
    /// [`BlockRegion::iter()`].
    #[inline]
    pub fn chunk_positions(&self, region: BlockRegion) -> impl Iterator<Item = ChunkPos> {
        self.chunk_region(region).iter().map(ChunkPos)
    }

    /// Returns the region, in chunk coordinates, of the chunks which contain any block within
    /// `extent` blocks of `block` along each axis.
    #[inline]
    pub fn chunk_region_around(&self, block: GridPoint, extent: GridCoordinate) -> BlockRegion {
        self.chunk_region(BlockRegion::from_center_extent(block, extent))
    }

    /// Returns whether `block` lies in `chunk`.
    #[inline]
    pub fn in_chunk(&self, block: GridPoint, chunk: ChunkPos) -> bool {
        self.chunk_pos(block) == chunk
    }
}

impl Default for ChunkShape {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Debug for ChunkShape {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(
            f,
            "ChunkShape({} × {} × {})",
            size.width, size.height, size.depth
        )
    }
}

/// Returns the one-block-thick layer of `region` along `side`, such as the blocks of a
/// chunk which border the neighboring chunk on that side.
#[inline]
pub fn chunk_edge_region(region: BlockRegion, side: Side) -> BlockRegion {
    region.face(side)
}

/// Error from [`ChunkShape::from_size()`] or [`ChunkShape::from_powers()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("{0}")]
pub struct ChunkShapeError(ShapeErrorKind);

#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
enum ShapeErrorKind {
    /// chunk size {0} is not a power of two
    NotPowerOfTwo(GridSizeCoord),
    /// chunk size {0} is too large
    TooLarge(u64),
}

impl core::error::Error for ChunkShapeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::MultiFailure;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use itertools::Itertools as _;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn standard_shape() {
        let shape = ChunkShape::STANDARD;
        assert_eq!(shape.size(), GridSize::new(32, 64, 32));
        assert_eq!(shape.power(), Vector3D::new(5, 6, 5));
        assert_eq!(shape.filter(), GridVector::new(31, 63, 31));
        assert_eq!(ChunkShape::default(), shape);
        assert_eq!(format!("{shape:?}"), "ChunkShape(32 × 64 × 32)");
    }

    #[rstest]
    fn reconstruction(#[values(-1000, -65, -64, -33, -32, -1, 0, 1, 31, 32, 33, 63, 64, 1000)] x: i32) {
        let shape = ChunkShape::STANDARD;
        let block = GridPoint::new(x, x, x.wrapping_mul(7));
        let chunk = shape.chunk_pos(block);
        let rel = shape.relative_pos(block);
        let size = shape.size().to_vector().to_i32();
        assert_eq!(
            chunk.0.to_vector().component_mul(size) + rel.to_vector().cast_unit(),
            block.to_vector(),
        );
        for axis_value in rel.to_array() {
            assert!(axis_value >= 0);
        }
        assert!(rel.x < 32 && rel.y < 64 && rel.z < 32);
        assert!(shape.in_chunk(block, chunk));
        assert!(chunk.bounds(shape).contains_point(block));
    }

    #[test]
    fn monotonic() {
        let shape = ChunkShape::from_powers(Vector3D::new(2, 3, 4)).unwrap();
        let mut previous = shape.chunk_pos(GridPoint::splat(-200));
        for x in -199..200 {
            let current = shape.chunk_pos(GridPoint::splat(x));
            assert!(current.0.x >= previous.0.x);
            assert!(current.0.y >= previous.0.y);
            assert!(current.0.z >= previous.0.z);
            previous = current;
        }
    }

    #[test]
    fn extreme_coordinates() {
        let shape = ChunkShape::STANDARD;
        for &x in &[i32::MIN, i32::MAX] {
            let block = GridPoint::splat(x);
            let chunk = shape.chunk_pos(block);
            assert!(chunk.bounds(shape).contains_point(block), "{chunk:?}");
        }
    }

    #[test]
    fn bounds_saturate_beyond_block_range() {
        assert_eq!(
            ChunkPos::new(i32::MAX, 0, i32::MIN).bounds(ChunkShape::STANDARD),
            BlockRegion::from_min_max([i32::MAX, 0, i32::MIN], [i32::MAX, 63, i32::MIN])
        );
    }

    #[test]
    fn free_point() {
        let shape = ChunkShape::STANDARD;
        assert_eq!(
            shape.chunk_pos_free(FreePoint::new(-0.5, 63.9, 32.0)),
            Some(ChunkPos::new(-1, 0, 1))
        );
        assert_eq!(shape.chunk_pos_free(FreePoint::new(f64::NAN, 0.0, 0.0)), None);
        assert_eq!(shape.chunk_pos_free(FreePoint::new(0.0, 1e10, 0.0)), None);
    }

    #[test]
    fn chunk_region_covers_blocks() {
        let shape = ChunkShape::from_powers(Vector3D::new(2, 2, 2)).unwrap();
        MultiFailure::run(|mf| {
            for (lo, hi) in (-6..6).tuple_combinations() {
                mf.catch(|| {
                    let region = BlockRegion::from_min_max([lo, 0, lo], [hi, 3, lo]);
                    let chunks: Vec<ChunkPos> = shape.chunk_positions(region).collect();
                    for block in region.iter() {
                        assert!(chunks.contains(&shape.chunk_pos(block)), "{region:?}");
                    }
                    for chunk in &chunks {
                        assert!(chunk.bounds(shape).overlaps(region), "{region:?} {chunk:?}");
                    }
                });
            }
        });
        assert_eq!(shape.chunk_region(BlockRegion::EMPTY), BlockRegion::EMPTY);
    }

    #[test]
    fn region_around() {
        assert_eq!(
            ChunkShape::STANDARD.chunk_region_around(GridPoint::new(0, 0, 0), 1),
            BlockRegion::from_min_max([-1, -1, -1], [0, 0, 0])
        );
        assert_eq!(
            ChunkShape::STANDARD.chunk_region_around(GridPoint::new(40, 100, 16), 8),
            BlockRegion::single(GridPoint::new(1, 1, 0))
        );
    }

    #[test]
    fn edge_region() {
        let chunk = ChunkPos::new(0, 0, 0).bounds(ChunkShape::STANDARD);
        assert_eq!(
            chunk_edge_region(chunk, Side::Right),
            BlockRegion::from_min_max([31, 0, 0], [31, 63, 31])
        );
        assert_eq!(
            chunk_edge_region(chunk, Side::Bottom),
            BlockRegion::from_min_max([0, 0, 0], [31, 0, 31])
        );
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            ChunkShape::from_size(GridSize::new(32, 0, 32))
                .unwrap_err()
                .to_string(),
            "chunk size 0 is not a power of two"
        );
        assert_eq!(
            ChunkShape::from_powers(Vector3D::new(5, 31, 5))
                .unwrap_err()
                .to_string(),
            "chunk size 2147483648 is too large"
        );
        assert_eq!(
            ChunkShape::from_size(GridSize::new(1, 1, 1 << 30)).map(|s| s.power()),
            Ok(Vector3D::new(0, 0, 30))
        );
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", ChunkPos::new(1, -2, 3)), "ChunkPos(1, -2, 3)");
    }
}

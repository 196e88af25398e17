//! The six sides of a block: the [`Side`] and [`Direction`] types, and containers keyed by them.
//! This module is private but reexported by its parent.

use core::fmt;
use core::ops;

use manyfmt::Refmt as _;
use manyfmt::formats::Unquote;

use crate::math::{Axis, FreeCoordinate, FreeVector, GridCoordinate, GridPoint, GridVector, Rotation};

/// Identifies a side of a block, or equivalently one of the six axis-aligned unit vectors.
///
/// Sides are named from the point of view of someone looking at the block from its front:
/// [`Left`](Self::Left) is −X, [`Top`](Self::Top) is +Y, and [`Front`](Self::Front) is −Z.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Side {
    /// Positive Y; the side whose normal vector is `(0, 1, 0)`.
    Top = 0,
    /// Negative Y; the side whose normal vector is `(0, -1, 0)`.
    Bottom = 1,
    /// Negative X; the side whose normal vector is `(-1, 0, 0)`.
    Left = 2,
    /// Positive X; the side whose normal vector is `(1, 0, 0)`.
    Right = 3,
    /// Negative Z; the side whose normal vector is `(0, 0, -1)`.
    Front = 4,
    /// Positive Z; the side whose normal vector is `(0, 0, 1)`.
    Back = 5,
}

impl Side {
    /// All the values of [`Side`].
    pub const ALL: [Side; 6] = [
        Side::Top,
        Side::Bottom,
        Side::Left,
        Side::Right,
        Side::Front,
        Side::Back,
    ];

    /// The sides which are perpendicular to the Y axis.
    pub const HORIZONTAL: [Side; 4] = [Side::Left, Side::Right, Side::Front, Side::Back];

    /// The sides which are parallel to the Y axis.
    pub const VERTICAL: [Side; 2] = [Side::Top, Side::Bottom];

    /// Inverse function of `side as u8`, converting the number to [`Side`].
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Side::Top),
            1 => Some(Side::Bottom),
            2 => Some(Side::Left),
            3 => Some(Side::Right),
            4 => Some(Side::Front),
            5 => Some(Side::Back),
            _ => None,
        }
    }

    /// Returns the side whose normal has the greatest magnitude component of the given
    /// vector.
    ///
    /// Ties between magnitudes are broken in favor of X, then Y, then Z. The positive side
    /// is chosen if the winning component is greater than zero.
    ///
    /// ```
    /// use cubic_grid::math::Side;
    ///
    /// assert_eq!(Side::in_direction(3, -1, 2), Side::Right);
    /// assert_eq!(Side::in_direction(0, -4, 1), Side::Bottom);
    /// assert_eq!(Side::in_direction(2, 2, 2), Side::Right);
    /// assert_eq!(Side::in_direction(0, -3, 3), Side::Bottom);
    /// assert_eq!(Side::in_direction(0, 0, 0), Side::Left);
    /// ```
    #[inline]
    pub fn in_direction(x: GridCoordinate, y: GridCoordinate, z: GridCoordinate) -> Self {
        let (ax, ay, az) = (x.unsigned_abs(), y.unsigned_abs(), z.unsigned_abs());
        Self::pick_dominant([ax >= ay, ax >= az, ay >= az], [x > 0, y > 0, z > 0])
    }

    /// As [`Side::in_direction()`], but for a non-grid vector.
    #[inline]
    pub fn in_direction_free(vector: FreeVector) -> Self {
        let FreeVector { x, y, z, .. } = vector;
        let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
        Self::pick_dominant([ax >= ay, ax >= az, ay >= az], [x > 0.0, y > 0.0, z > 0.0])
    }

    /// Returns the horizontal side whose normal is closest to the vector `(x, 0, z)`.
    /// Ties go to the Z axis.
    #[inline]
    pub fn in_horizontal_direction(x: FreeCoordinate, z: FreeCoordinate) -> Self {
        if x.abs() > z.abs() {
            if x > 0.0 { Side::Right } else { Side::Left }
        } else if z > 0.0 {
            Side::Back
        } else {
            Side::Front
        }
    }

    fn pick_dominant([x_ge_y, x_ge_z, y_ge_z]: [bool; 3], positive: [bool; 3]) -> Self {
        let axis = if x_ge_y {
            if x_ge_z { Axis::X } else { Axis::Z }
        } else if y_ge_z {
            Axis::Y
        } else {
            Axis::Z
        };
        if positive[axis] {
            axis.positive_side()
        } else {
            axis.negative_side()
        }
    }

    /// Returns which axis this side's normal vector is parallel to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Top | Side::Bottom => Axis::Y,
            Side::Front | Side::Back => Axis::Z,
        }
    }

    /// Returns whether this side's normal vector points in a positive direction.
    ///
    /// ```
    /// use cubic_grid::math::Side;
    ///
    /// assert_eq!(Side::Right.is_positive(), true);
    /// assert_eq!(Side::Front.is_positive(), false);
    /// ```
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Side::Top | Side::Right | Side::Back)
    }

    /// Returns the unit vector normal to this side, pointing out of the block.
    #[inline]
    pub const fn vector(self) -> GridVector {
        match self {
            Side::Top => GridVector::new(0, 1, 0),
            Side::Bottom => GridVector::new(0, -1, 0),
            Side::Left => GridVector::new(-1, 0, 0),
            Side::Right => GridVector::new(1, 0, 0),
            Side::Front => GridVector::new(0, 0, -1),
            Side::Back => GridVector::new(0, 0, 1),
        }
    }

    /// Returns the position of the block which touches `position` on this side.
    #[inline]
    pub fn adjacent(self, position: GridPoint) -> GridPoint {
        position + self.vector()
    }

    /// Whether yaw (rotation about the Y axis) moves this side.
    #[inline]
    pub const fn can_yaw(self) -> bool {
        !matches!(self, Side::Top | Side::Bottom)
    }

    /// Whether pitch (rotation about the X axis) moves this side.
    #[inline]
    pub const fn can_pitch(self) -> bool {
        !matches!(self, Side::Left | Side::Right)
    }

    /// Whether roll (rotation about the Z axis) moves this side.
    #[inline]
    pub const fn can_roll(self) -> bool {
        !matches!(self, Side::Front | Side::Back)
    }

    /// Whether this is one of [`Side::HORIZONTAL`].
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.can_yaw()
    }

    /// Whether this is one of [`Side::VERTICAL`].
    #[inline]
    pub const fn is_vertical(self) -> bool {
        !self.can_yaw()
    }

    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }

    /// Returns the four sides perpendicular to this one.
    ///
    /// Opposite sides have the same tangents, listed in [`Side::ALL`] order.
    #[inline]
    pub const fn tangents(self) -> [Side; 4] {
        match self {
            Side::Top | Side::Bottom => [Side::Left, Side::Right, Side::Front, Side::Back],
            Side::Left | Side::Right => [Side::Top, Side::Bottom, Side::Front, Side::Back],
            Side::Front | Side::Back => [Side::Top, Side::Bottom, Side::Left, Side::Right],
        }
    }

    /// Returns the side whose normal is the cross product of these sides' normals,
    /// or [`None`] if they are parallel.
    #[inline]
    pub fn cross(self, other: Self) -> Option<Side> {
        Side::try_from(self.vector().cross(other.vector())).ok()
    }

    /// Rotates this side clockwise about the Y axis by `turns` quarter turns,
    /// as seen from above. Negative values turn anticlockwise.
    ///
    /// ```
    /// use cubic_grid::math::Side;
    ///
    /// assert_eq!(Side::Front.yaw_clockwise(1), Side::Left);
    /// assert_eq!(Side::Front.yaw_clockwise(-1), Side::Right);
    /// assert_eq!(Side::Top.yaw_clockwise(1), Side::Top);
    /// ```
    #[inline]
    #[must_use]
    pub const fn yaw_clockwise(self, turns: i32) -> Side {
        let mut side = self;
        let mut i = turns.rem_euclid(4);
        while i > 0 {
            side = match side {
                Side::Front => Side::Left,
                Side::Left => Side::Back,
                Side::Back => Side::Right,
                Side::Right => Side::Front,
                Side::Top | Side::Bottom => side,
            };
            i -= 1;
        }
        side
    }

    /// Rotates this side clockwise about the X axis by `turns` quarter turns.
    /// Negative values turn anticlockwise.
    #[inline]
    #[must_use]
    pub const fn pitch_clockwise(self, turns: i32) -> Side {
        let mut side = self;
        let mut i = turns.rem_euclid(4);
        while i > 0 {
            side = match side {
                Side::Front => Side::Top,
                Side::Top => Side::Back,
                Side::Back => Side::Bottom,
                Side::Bottom => Side::Front,
                Side::Left | Side::Right => side,
            };
            i -= 1;
        }
        side
    }

    /// Rotates this side clockwise about the Z axis by `turns` quarter turns.
    /// Negative values turn anticlockwise.
    #[inline]
    #[must_use]
    pub const fn roll_clockwise(self, turns: i32) -> Side {
        let mut side = self;
        let mut i = turns.rem_euclid(4);
        while i > 0 {
            side = match side {
                Side::Top => Side::Left,
                Side::Left => Side::Bottom,
                Side::Bottom => Side::Right,
                Side::Right => Side::Top,
                Side::Front | Side::Back => side,
            };
            i -= 1;
        }
        side
    }

    /// Converts this side to the [`Direction`] with the same vector.
    #[inline]
    pub const fn to_direction(self) -> Direction {
        match self {
            Side::Top => Direction::Up,
            Side::Bottom => Direction::Down,
            Side::Back => Direction::Forward,
            Side::Front => Direction::Backward,
            Side::Right => Direction::Left,
            Side::Left => Direction::Right,
        }
    }

    /// Returns the side found by turning from this side toward `direction`,
    /// treating this side as the forward direction.
    #[inline]
    #[must_use]
    pub const fn relative_side(self, direction: Direction) -> Side {
        match direction {
            Direction::Up => self.pitch_clockwise(1),
            Direction::Down => self.pitch_clockwise(-1),
            Direction::Left => self.yaw_clockwise(1),
            Direction::Right => self.yaw_clockwise(-1),
            Direction::Backward => self.reverse(),
            Direction::Forward => self,
        }
    }

    /// The bit used for this side in a [`SideSet`].
    #[inline]
    pub const fn flag(self) -> u8 {
        match self {
            Side::Top => 0b000001,
            Side::Left => 0b000010,
            Side::Front => 0b000100,
            Side::Bottom => 0b001000,
            Side::Right => 0b010000,
            Side::Back => 0b100000,
        }
    }
}

impl ops::Neg for Side {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.reverse()
    }
}

impl TryFrom<GridVector> for Side {
    /// Returns the original vector on failure.
    type Error = GridVector;

    /// Recovers a `Side` from its unit normal vector. All other vectors are rejected.
    ///
    /// ```
    /// use cubic_grid::math::{Side, GridVector};
    ///
    /// for side in Side::ALL {
    ///     assert_eq!(Side::try_from(side.vector()), Ok(side));
    /// }
    ///
    /// let v = GridVector::new(1, 2, 3);
    /// assert_eq!(Side::try_from(v), Err(v));
    /// ```
    #[inline]
    fn try_from(value: GridVector) -> Result<Self, Self::Error> {
        match value.to_tuple() {
            (0, 1, 0) => Ok(Side::Top),
            (0, -1, 0) => Ok(Side::Bottom),
            (-1, 0, 0) => Ok(Side::Left),
            (1, 0, 0) => Ok(Side::Right),
            (0, 0, -1) => Ok(Side::Front),
            (0, 0, 1) => Ok(Side::Back),
            _ => Err(value),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A direction relative to a viewer, rather than to a block.
///
/// [`Direction::Left`] is +X and [`Direction::Forward`] is +Z, which is the reverse of the
/// corresponding [`Side`]s; [`Side::to_direction()`] and [`Direction::to_side()`] convert
/// by vector, not by name.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Forward = 4,
    Backward = 5,
}

impl Direction {
    /// All the values of [`Direction`].
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Returns the direction whose vector has the greatest magnitude component of the given
    /// vector.
    ///
    /// Unlike [`Side::in_direction()`], the vertical axis has priority: ties are broken in
    /// favor of Y, then X, then Z.
    ///
    /// ```
    /// use cubic_grid::math::{Direction, Side};
    ///
    /// assert_eq!(Direction::in_direction(2, 2, 1), Direction::Up);
    /// assert_eq!(Side::in_direction(2, 2, 1), Side::Right);
    /// ```
    #[inline]
    pub fn in_direction(x: GridCoordinate, y: GridCoordinate, z: GridCoordinate) -> Self {
        let (ax, ay, az) = (x.unsigned_abs(), y.unsigned_abs(), z.unsigned_abs());
        if ay >= ax && ay >= az {
            if y > 0 { Direction::Up } else { Direction::Down }
        } else if ax >= az {
            if x > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if z > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Returns the unit vector of this direction.
    #[inline]
    pub const fn vector(self) -> GridVector {
        self.to_side().vector()
    }

    /// Converts this direction to the [`Side`] with the same vector.
    #[inline]
    pub const fn to_side(self) -> Side {
        match self {
            Direction::Up => Side::Top,
            Direction::Down => Side::Bottom,
            Direction::Forward => Side::Back,
            Direction::Backward => Side::Front,
            Direction::Left => Side::Right,
            Direction::Right => Side::Left,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        self.to_side().reverse().to_direction()
    }
}

// -------------------------------------------------------------------------------------------------

/// Container for values keyed by [`Side`]s. Always holds exactly six elements.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SideMap<V> {
    /// The value whose key is [`Side::Top`].
    pub top: V,
    /// The value whose key is [`Side::Bottom`].
    pub bottom: V,
    /// The value whose key is [`Side::Left`].
    pub left: V,
    /// The value whose key is [`Side::Right`].
    pub right: V,
    /// The value whose key is [`Side::Front`].
    pub front: V,
    /// The value whose key is [`Side::Back`].
    pub back: V,
}

#[allow(
    clippy::missing_inline_in_public_items,
    reason = "all methods are generic code"
)]
impl<V> SideMap<V> {
    /// Constructs a [`SideMap`] by using the provided function to compute
    /// a value for each [`Side`].
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Side) -> V) -> Self {
        Self {
            top: f(Side::Top),
            bottom: f(Side::Bottom),
            left: f(Side::Left),
            right: f(Side::Right),
            front: f(Side::Front),
            back: f(Side::Back),
        }
    }

    /// Iterate over the map's key-value pairs by reference, in the same order as [`Side::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (Side, &V)> {
        Side::ALL.iter().copied().map(move |s| (s, &self[s]))
    }

    /// Iterate over the map values by reference, in the same order as [`Side::ALL`].
    pub fn values(&self) -> impl Iterator<Item = &V> {
        Side::ALL.iter().copied().map(move |s| &self[s])
    }

    /// Convert to an array, whose elements are arranged in the same order as [`Side::ALL`].
    pub fn into_values(self) -> [V; 6] {
        [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.front,
            self.back,
        ]
    }

    /// Transform values.
    pub fn map<U>(self, mut f: impl FnMut(Side, V) -> U) -> SideMap<U> {
        SideMap {
            top: f(Side::Top, self.top),
            bottom: f(Side::Bottom, self.bottom),
            left: f(Side::Left, self.left),
            right: f(Side::Right, self.right),
            front: f(Side::Front, self.front),
            back: f(Side::Back, self.back),
        }
    }

    /// Combine two [`SideMap`]s using a function applied to each pair of corresponding values.
    pub fn zip<U, R>(self, other: SideMap<U>, mut f: impl FnMut(Side, V, U) -> R) -> SideMap<R> {
        SideMap {
            top: f(Side::Top, self.top, other.top),
            bottom: f(Side::Bottom, self.bottom, other.bottom),
            left: f(Side::Left, self.left, other.left),
            right: f(Side::Right, self.right, other.right),
            front: f(Side::Front, self.front, other.front),
            back: f(Side::Back, self.back, other.back),
        }
    }

    /// Returns this map with one entry's value replaced.
    ///
    /// ```
    /// use cubic_grid::math::{Side, SideMap};
    ///
    /// let m = SideMap::default().with(Side::Top, 10);
    /// assert_eq!(m.top, 10);
    /// assert_eq!(m.bottom, 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn with(mut self, side: Side, value: V) -> Self {
        self[side] = value;
        self
    }

    /// Move each value to the side that its key is carried to by `rotation`.
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self
    where
        V: Clone,
    {
        let to_source = rotation.reverse();
        Self::from_fn(|side| self[to_source.rotate(side)].clone())
    }
}

impl<V: Clone> SideMap<V> {
    /// Constructs a [`SideMap`] containing clones of the provided value.
    #[inline]
    pub fn splat(value: V) -> Self {
        Self {
            top: value.clone(),
            bottom: value.clone(),
            left: value.clone(),
            right: value.clone(),
            front: value.clone(),
            back: value,
        }
    }
}

impl<V> ops::Index<Side> for SideMap<V> {
    type Output = V;
    #[inline]
    fn index(&self, side: Side) -> &V {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

impl<V> ops::IndexMut<Side> for SideMap<V> {
    #[inline]
    fn index_mut(&mut self, side: Side) -> &mut V {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }
}

impl<V> fmt::Debug for SideMap<V>
where
    V: fmt::Debug + PartialEq,
{
    /// In addition to the usual formatting behaviors, [`SideMap`] will detect whether
    /// elements are equal and avoid redundant printing.
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SideMap {
            top,
            bottom,
            left,
            right,
            front,
            back,
        } = self;

        let mut dm = f.debug_map();

        if top == bottom && top == left && top == right && top == front && top == back {
            dm.entry(&"all".refmt(&Unquote), top);
        } else if left == right && left == front && left == back {
            dm.entry(&"top".refmt(&Unquote), top);
            dm.entry(&"bottom".refmt(&Unquote), bottom);
            dm.entry(&"horizontal".refmt(&Unquote), left);
        } else {
            for (side, value) in self.iter() {
                dm.entry(&side, value);
            }
        }

        dm.finish()
    }
}

macro_rules! impl_binary_operator_for_sidemap {
    ($trait:ident :: $method:ident) => {
        impl<V: ops::$trait> ops::$trait for SideMap<V> {
            type Output = SideMap<V::Output>;
            /// Apply the operator pairwise to the values for all six sides.
            #[inline]
            fn $method(self, other: SideMap<V>) -> SideMap<V::Output> {
                self.zip(other, |_, a, b| <V as ops::$trait>::$method(a, b))
            }
        }
    };
}
impl_binary_operator_for_sidemap!(Add::add);
impl_binary_operator_for_sidemap!(Sub::sub);

// -------------------------------------------------------------------------------------------------

/// A set of [`Side`]s, stored as the bit flags given by [`Side::flag()`].
///
/// If other values than membership are needed, use [`SideMap`] instead.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct SideSet {
    flags: u8,
}

impl SideSet {
    /// The set of all six sides.
    pub const ALL: Self = Self { flags: 0b111111 };
    /// The empty set.
    pub const NONE: Self = Self { flags: 0 };

    /// Returns the set whose flags are `bits`, or [`None`] if any bit does not belong to
    /// a side.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.flags == 0 {
            Some(Self { flags: bits })
        } else {
            None
        }
    }

    /// Returns the flags of the members of this set.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.flags
    }

    /// Whether `side` is a member of this set.
    #[inline]
    pub const fn contains(self, side: Side) -> bool {
        self.flags & side.flag() != 0
    }

    /// Add `side` to this set.
    #[inline]
    pub fn insert(&mut self, side: Side) {
        self.flags |= side.flag();
    }

    /// Remove `side` from this set.
    #[inline]
    pub fn remove(&mut self, side: Side) {
        self.flags &= !side.flag();
    }

    /// Number of sides in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.flags.count_ones() as usize
    }

    /// Whether the set has no members.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.flags == 0
    }

    /// Returns the set of the reverses of the members of this set.
    ///
    /// ```
    /// use cubic_grid::math::{Side, SideSet};
    ///
    /// let set = SideSet::from_iter([Side::Top, Side::Right]);
    /// assert_eq!(set.reverse_all(), SideSet::from_iter([Side::Bottom, Side::Left]));
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse_all(self) -> Self {
        // The three positive-named flags are the low bits and their reverses are the high bits.
        Self {
            flags: (self.flags >> 3) | ((self.flags & 0b111) << 3),
        }
    }

    /// Iterate over the members of this set, in [`Side::ALL`] order.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Side> + Clone {
        Side::ALL.into_iter().filter(move |&side| self.contains(side))
    }
}

impl fmt::Debug for SideSet {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Not using f.debug_set() because we want never-multiline output.
        write!(f, "{{")?;
        for (i, side) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{side:?}")?;
        }
        write!(f, "}}")
    }
}

impl ops::BitOr for SideSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            flags: self.flags | rhs.flags,
        }
    }
}
impl ops::BitAnd for SideSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            flags: self.flags & rhs.flags,
        }
    }
}
impl ops::Not for SideSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Self {
            flags: !self.flags & Self::ALL.flags,
        }
    }
}

impl FromIterator<Side> for SideSet {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Side>>(iter: T) -> Self {
        let mut new_self = SideSet::NONE;
        iter.into_iter().for_each(|side| new_self.insert(side));
        new_self
    }
}

impl From<Side> for SideSet {
    #[inline]
    fn from(side: Side) -> Self {
        Self { flags: side.flag() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Pitch, Roll, Yaw};
    use crate::util::MultiFailure;
    use alloc::vec::Vec;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn all_matches_exhaust() {
        assert_eq!(Side::ALL.to_vec(), Side::exhaust().collect::<Vec<_>>());
        assert_eq!(
            Direction::ALL.to_vec(),
            Direction::exhaust().collect::<Vec<_>>()
        );
        for side in Side::ALL {
            assert_eq!(Side::from_index(side as u8), Some(side));
        }
        assert_eq!(Side::from_index(6), None);
    }

    #[test]
    fn reverse_is_fixed_point_free_involution() {
        for side in Side::ALL {
            assert_ne!(side, side.reverse());
            assert_eq!(side, side.reverse().reverse());
            assert_eq!(side.reverse(), -side);
            assert_eq!(side.reverse().vector(), -side.vector());
        }
    }

    #[test]
    fn one_side_per_unit_vector() {
        let vectors: Vec<GridVector> = Side::ALL.iter().map(|s| s.vector()).collect();
        for (i, a) in vectors.iter().enumerate() {
            assert_eq!(a.x.abs() + a.y.abs() + a.z.abs(), 1);
            for b in &vectors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn tangents_are_perpendicular() {
        MultiFailure::run(|mf| {
            for side in Side::ALL {
                let tangents = side.tangents();
                mf.catch(|| {
                    for t in tangents {
                        assert_eq!(side.vector().dot(t.vector()), 0, "{side:?} {t:?}");
                    }
                    assert_eq!(tangents, side.reverse().tangents());
                });
            }
        });
    }

    #[test]
    fn rotation_axes_flags() {
        for side in Side::ALL {
            assert_eq!(side.can_yaw(), side.axis() != Axis::Y, "{side:?}");
            assert_eq!(side.can_pitch(), side.axis() != Axis::X, "{side:?}");
            assert_eq!(side.can_roll(), side.axis() != Axis::Z, "{side:?}");
            assert_eq!(side.is_vertical(), Side::VERTICAL.contains(&side));
            assert_eq!(side.is_horizontal(), Side::HORIZONTAL.contains(&side));
        }
    }

    /// Each clockwise step must match the rotation of the side's vector about the
    /// corresponding axis.
    #[test]
    fn clockwise_steps_match_vector_rotation() {
        MultiFailure::run(|mf| {
            for side in Side::ALL {
                let v = side.vector();
                mf.catch(|| {
                    assert_eq!(
                        side.yaw_clockwise(1).vector(),
                        GridVector::new(v.z, v.y, -v.x),
                        "yaw {side:?}"
                    );
                    assert_eq!(
                        side.pitch_clockwise(1).vector(),
                        GridVector::new(v.x, -v.z, v.y),
                        "pitch {side:?}"
                    );
                    assert_eq!(
                        side.roll_clockwise(1).vector(),
                        GridVector::new(-v.y, v.x, v.z),
                        "roll {side:?}"
                    );
                });
            }
        });
    }

    #[test]
    fn turns_reduce_euclidean() {
        for side in Side::ALL {
            for turns in -9..=9 {
                assert_eq!(
                    side.yaw_clockwise(turns),
                    side.yaw_clockwise(turns.rem_euclid(4))
                );
                assert_eq!(side.pitch_clockwise(turns).pitch_clockwise(-turns), side);
                assert_eq!(side.roll_clockwise(turns).roll_clockwise(-turns), side);
            }
            let half_turn = if side.can_yaw() { side.reverse() } else { side };
            assert_eq!(side.yaw_clockwise(2), half_turn);
        }
        // 4 turns anticlockwise is no turn, not half a turn.
        assert_eq!(Side::Front.yaw_clockwise(-2), Side::Back);
        assert_eq!(Side::Front.yaw_clockwise(-4), Side::Front);
    }

    #[test]
    fn single_turns_agree_with_rotation_enums() {
        for side in Side::ALL {
            for yaw in Yaw::ALL {
                assert_eq!(side.yaw_clockwise(yaw.increments()), yaw.apply(side));
            }
            for pitch in Pitch::ALL {
                assert_eq!(side.pitch_clockwise(pitch.increments()), pitch.apply(side));
            }
            for roll in Roll::ALL {
                assert_eq!(side.roll_clockwise(roll.increments()), roll.apply(side));
            }
        }
    }

    #[rstest]
    #[case((1, 0, 0), Side::Right)]
    #[case((-1, 0, 0), Side::Left)]
    #[case((0, 5, 0), Side::Top)]
    #[case((0, -5, 4), Side::Bottom)]
    #[case((0, 0, 2), Side::Back)]
    #[case((0, 0, -2), Side::Front)]
    #[case((3, 3, 0), Side::Right)]
    #[case((-3, 3, 0), Side::Left)]
    #[case((3, 0, 3), Side::Right)]
    #[case((0, 3, 3), Side::Top)]
    #[case((0, -3, 3), Side::Bottom)]
    #[case((3, 1, 3), Side::Right)]
    #[case((2, 2, 2), Side::Right)]
    #[case((2, 2, 1), Side::Right)]
    #[case((1, 2, -2), Side::Top)]
    #[case((0, 0, 0), Side::Left)]
    #[case((i32::MIN, 0, 0), Side::Left)]
    #[case((i32::MIN, i32::MIN, i32::MIN), Side::Left)]
    fn in_direction_priority(#[case] v: (i32, i32, i32), #[case] expected: Side) {
        let (x, y, z) = v;
        assert_eq!(Side::in_direction(x, y, z), expected);
        assert_eq!(
            Side::in_direction_free(FreeVector::new(x.into(), y.into(), z.into())),
            expected
        );
    }

    #[rstest]
    #[case((2, 2, 1), Direction::Up)]
    #[case((-2, 3, 1), Direction::Up)]
    #[case((2, 2, 2), Direction::Up)]
    #[case((0, -3, 3), Direction::Down)]
    #[case((3, 0, 3), Direction::Left)]
    #[case((-3, 1, 3), Direction::Right)]
    #[case((-3, 1, 2), Direction::Right)]
    #[case((1, 0, -2), Direction::Backward)]
    #[case((0, 0, 0), Direction::Down)]
    fn direction_in_direction_priority(#[case] v: (i32, i32, i32), #[case] expected: Direction) {
        let (x, y, z) = v;
        assert_eq!(Direction::in_direction(x, y, z), expected);
    }

    #[test]
    fn unit_vectors_round_trip() {
        for side in Side::ALL {
            let v = side.vector();
            assert_eq!(Side::in_direction(v.x, v.y, v.z), side);
            assert_eq!(Direction::in_direction(v.x, v.y, v.z).to_side(), side);
            assert_eq!(side.to_direction().vector(), v);
            assert_eq!(side.to_direction().to_side(), side);
            assert_eq!(side.to_direction().reverse(), side.reverse().to_direction());
            assert_eq!(side.adjacent(GridPoint::new(1, 2, 3)), GridPoint::new(1, 2, 3) + v);
        }
    }

    #[test]
    fn horizontal_direction() {
        assert_eq!(Side::in_horizontal_direction(2.0, -1.0), Side::Right);
        assert_eq!(Side::in_horizontal_direction(-2.0, 1.0), Side::Left);
        assert_eq!(Side::in_horizontal_direction(1.0, 1.0), Side::Back);
        assert_eq!(Side::in_horizontal_direction(0.0, 0.0), Side::Front);
    }

    #[test]
    fn relative_side() {
        assert_eq!(Side::Front.relative_side(Direction::Up), Side::Top);
        assert_eq!(Side::Front.relative_side(Direction::Down), Side::Bottom);
        assert_eq!(Side::Front.relative_side(Direction::Left), Side::Left);
        assert_eq!(Side::Front.relative_side(Direction::Right), Side::Right);
        assert_eq!(Side::Front.relative_side(Direction::Backward), Side::Back);
        assert_eq!(Side::Front.relative_side(Direction::Forward), Side::Front);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Side::Right.cross(Side::Top), Some(Side::Back));
        assert_eq!(Side::Bottom.cross(Side::Back), Some(Side::Left));
        assert_eq!(Side::Top.cross(Side::Bottom), None);
        assert_eq!(Side::Top.cross(Side::Top), None);
    }

    #[test]
    fn side_set_flags() {
        let bits: Vec<u8> = Side::ALL.iter().map(|s| s.flag()).collect();
        assert_eq!(bits, vec![1, 8, 2, 16, 4, 32]);

        let mut set = SideSet::NONE;
        set.insert(Side::Front);
        set.insert(Side::Bottom);
        assert_eq!(set.bits(), 12);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Side::Front));
        assert!(!set.contains(Side::Back));
        assert_eq!(format!("{set:?}"), "{Bottom, Front}");
        set.remove(Side::Front);
        assert_eq!(set, SideSet::from(Side::Bottom));
        assert_eq!(!SideSet::NONE, SideSet::ALL);
        assert_eq!(SideSet::from_bits(64), None);
    }

    #[test]
    fn side_set_reverse_all() {
        for bits in 0..64u8 {
            let set = SideSet::from_bits(bits).unwrap();
            let expected: SideSet = set.iter().map(Side::reverse).collect();
            assert_eq!(set.reverse_all(), expected, "{bits}");
            assert_eq!(set.reverse_all().bits(), (bits / 8) + (bits % 8) * 8);
        }
    }

    #[test]
    fn side_map_iter_in_enum_order() {
        let map = SideMap::from_fn(|s| s);
        assert_eq!(
            Side::ALL.iter().map(|&s| (s, s)).collect::<Vec<_>>(),
            map.iter().map(|(k, &v)| (k, v)).collect::<Vec<_>>()
        );
        assert_eq!(Side::ALL.to_vec(), map.values().copied().collect::<Vec<_>>());
        assert_eq!(Side::ALL, map.into_values());
    }

    #[test]
    fn side_map_debug() {
        assert_eq!(format!("{:?}", SideMap::splat(1)), "{all: 1}");
        assert_eq!(
            format!("{:?}", SideMap::splat(1).with(Side::Top, 2)),
            "{top: 2, bottom: 1, horizontal: 1}"
        );
        assert_eq!(
            format!("{:?}", SideMap::splat(0).with(Side::Left, 3)),
            "{Top: 0, Bottom: 0, Left: 3, Right: 0, Front: 0, Back: 0}"
        );
    }

    #[test]
    fn side_map_rotate() {
        let map = SideMap::from_fn(|s| s);
        let yawed = map.rotate(Rotation::from_yaw_pitch_roll(
            Yaw::Clockwise90,
            Pitch::None,
            Roll::None,
        ));
        // The value that was on the front is now on the left.
        assert_eq!(yawed.left, Side::Front);
        assert_eq!(yawed.back, Side::Left);
        assert_eq!(yawed.top, Side::Top);
        assert_eq!(yawed.rotate(Rotation::none()), yawed);
    }
}

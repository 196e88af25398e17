//! The [`Corner`] orientations of a block.
//! This module is private but reexported by its parent.

use crate::math::edge::{check_pair, rotation_for_pair};
use crate::math::{Rotation, Side, SideSet, SidesError};

/// A corner of a block, together with an ordering of the three sides which meet there.
///
/// A cube has 8 corners, and each may be approached from any of its 3 sides, giving 24
/// orientations. Each corner is named by its major side, then its second side, then its
/// third side, where the third side is always the cross product of the first two. The
/// first 8 values of [`Corner::ALL`] are one orientation of each physical corner; the next
/// 8 and the last 8 rotate the side order of those by one and two places.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Corner {
    BottomBackLeft = 0,
    BottomLeftFront,
    BottomFrontRight,
    BottomRightBack,
    TopBackRight,
    TopRightFront,
    TopFrontLeft,
    TopLeftBack,

    BackLeftBottom,
    LeftFrontBottom,
    FrontRightBottom,
    RightBackBottom,
    BackRightTop,
    RightFrontTop,
    FrontLeftTop,
    LeftBackTop,

    LeftBottomBack,
    FrontBottomLeft,
    RightBottomFront,
    BackBottomRight,
    RightTopBack,
    FrontTopRight,
    LeftTopFront,
    BackTopLeft,
}

impl Corner {
    /// All 24 corners. The first 8 are one per physical corner.
    #[rustfmt::skip]
    pub const ALL: [Corner; 24] = {
        use Corner::*;
        [
            BottomBackLeft, BottomLeftFront, BottomFrontRight, BottomRightBack,
            TopBackRight, TopRightFront, TopFrontLeft, TopLeftBack,
            BackLeftBottom, LeftFrontBottom, FrontRightBottom, RightBackBottom,
            BackRightTop, RightFrontTop, FrontLeftTop, LeftBackTop,
            LeftBottomBack, FrontBottomLeft, RightBottomFront, BackBottomRight,
            RightTopBack, FrontTopRight, LeftTopFront, BackTopLeft,
        ]
    };

    /// The corner which other corners are described as rotations of.
    pub const CANONICAL: Corner = Corner::BottomBackLeft;

    /// Inverse function of `corner as u8`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The major, second, and third sides, in that order.
    #[inline]
    pub const fn sides(self) -> [Side; 3] {
        let index = self as usize;
        // Each group of 8 is the first group with its sides rotated left.
        let [a, b, c] = Self::BASE_SIDES[index % 8];
        match index / 8 {
            0 => [a, b, c],
            1 => [b, c, a],
            _ => [c, a, b],
        }
    }

    const BASE_SIDES: [[Side; 3]; 8] = {
        use Side::*;
        [
            [Bottom, Back, Left],
            [Bottom, Left, Front],
            [Bottom, Front, Right],
            [Bottom, Right, Back],
            [Top, Back, Right],
            [Top, Right, Front],
            [Top, Front, Left],
            [Top, Left, Back],
        ]
    };

    /// The side this corner is primarily attached to.
    #[inline]
    pub const fn major(self) -> Side {
        self.sides()[0]
    }

    /// The set of the three sides meeting at this corner, which identifies the physical
    /// corner regardless of orientation.
    #[inline]
    pub fn fingerprint(self) -> SideSet {
        self.sides().into_iter().collect()
    }

    /// Returns the corner whose major side is `major` and whose other sides are
    /// `b` and `c`, in either order.
    ///
    /// ```
    /// use cubic_grid::math::{Corner, Side};
    ///
    /// assert_eq!(
    ///     Corner::for_sides(Side::Top, Side::Left, Side::Front),
    ///     Ok(Corner::TopFrontLeft),
    /// );
    /// assert!(Corner::for_sides(Side::Top, Side::Bottom, Side::Front).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any two of the sides are equal or opposite.
    #[inline]
    pub fn for_sides(major: Side, b: Side, c: Side) -> Result<Self, SidesError> {
        check_pair(major, b)?;
        check_pair(major, c)?;
        check_pair(b, c)?;
        match Self::ALL.into_iter().find(|corner| {
            let [m, second, third] = corner.sides();
            m == major && ((second, third) == (b, c) || (second, third) == (c, b))
        }) {
            Some(corner) => Ok(corner),
            None => unreachable!("no corner for sides {major:?}, {b:?}, {c:?}"),
        }
    }

    /// Returns the representative of this physical corner used for symmetric blocks:
    /// the first corner in [`Corner::ALL`] with the same [fingerprint](Self::fingerprint).
    #[inline]
    #[must_use]
    pub fn symmetric_equivalent(self) -> Self {
        let fingerprint = self.fingerprint();
        match Self::ALL
            .into_iter()
            .find(|corner| corner.fingerprint() == fingerprint)
        {
            Some(corner) => corner,
            None => unreachable!(),
        }
    }

    /// Returns the rotation which carries [`Corner::CANONICAL`] onto this corner: it carries
    /// [`Side::Bottom`] to the major side and [`Side::Back`] to the second side.
    #[inline]
    pub fn rotation(self) -> Rotation {
        let [major, second, _] = self.sides();
        rotation_for_pair(major, second)
    }

    /// Returns the corner this corner is carried to by `rotation`.
    #[inline]
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self {
        let [major, second, third] = self.sides().map(|side| rotation.rotate(side));
        match Self::for_sides(major, second, third) {
            Ok(corner) => corner,
            Err(e) => unreachable!("rotation broke corner {self:?}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_matches_exhaust() {
        assert_eq!(Corner::ALL.to_vec(), Corner::exhaust().collect::<Vec<_>>());
        for corner in Corner::ALL {
            assert_eq!(Corner::from_index(corner as u8), Some(corner));
        }
    }

    #[test]
    fn third_side_is_cross_product() {
        for corner in Corner::ALL {
            let [a, b, c] = corner.sides();
            assert_eq!(a.cross(b), Some(c), "{corner:?}");
        }
    }

    #[test]
    fn first_eight_are_distinct_corners() {
        let mut fingerprints: Vec<u8> = Corner::ALL[..8]
            .iter()
            .map(|c| c.fingerprint().bits())
            .collect();
        fingerprints.sort_unstable();
        fingerprints.dedup();
        assert_eq!(fingerprints.len(), 8);
        for corner in &Corner::ALL[..8] {
            assert_eq!(corner.symmetric_equivalent(), *corner);
        }
    }

    #[test]
    fn symmetric_equivalent_shares_fingerprint() {
        for corner in Corner::ALL {
            let rep = corner.symmetric_equivalent();
            assert_eq!(rep.fingerprint(), corner.fingerprint());
            assert!((rep as u8) < 8);
            assert_eq!(rep as u8, corner as u8 % 8);
        }
    }

    #[test]
    fn for_sides_round_trip() {
        for corner in Corner::ALL {
            let [a, b, c] = corner.sides();
            assert_eq!(Corner::for_sides(a, b, c), Ok(corner));
            assert_eq!(Corner::for_sides(a, c, b), Ok(corner));
        }
    }

    #[test]
    fn for_sides_rejects_degenerate() {
        use Side::*;
        assert!(Corner::for_sides(Top, Top, Left).is_err());
        assert!(Corner::for_sides(Top, Left, Left).is_err());
        assert!(Corner::for_sides(Left, Top, Right).is_err());
        assert!(Corner::for_sides(Top, Front, Back).is_err());
    }

    #[test]
    fn rotation_carries_canonical() {
        assert_eq!(Corner::CANONICAL.rotation(), Rotation::none());
        for corner in Corner::ALL {
            let r = corner.rotation();
            assert_eq!(
                Corner::CANONICAL.sides().map(|s| r.rotate(s)),
                corner.sides(),
                "{corner:?}"
            );
            assert_eq!(Corner::CANONICAL.rotate(r), corner);
        }
    }

    #[test]
    fn rotations_act_transitively() {
        let reached: Vec<Corner> = Rotation::all()
            .iter()
            .map(|&r| Corner::CANONICAL.rotate(r))
            .collect();
        for corner in Corner::ALL {
            assert!(reached.contains(&corner), "{corner:?}");
        }
    }
}

//! The [`Edge`] orientations of a block.
//! This module is private but reexported by its parent.

use crate::math::{Rotation, RotationRegistry, Side};

/// An edge of a block, together with which of its two adjacent sides is the major one.
///
/// A cube has 12 edges. Blocks which look the same after a half turn about the edge need
/// only those 12 orientations; blocks with a directional texture use all 24. The first 12
/// values of [`Edge::ALL`] are the symmetric subset, and each of the last 12 is the twin of
/// the value 12 places before it with major and minor sides swapped.
///
/// Each edge is named by its major side followed by its minor side.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Edge {
    BottomBack = 0,
    BottomLeft,
    BottomFront,
    BottomRight,
    TopBack,
    TopLeft,
    TopFront,
    TopRight,
    LeftBack,
    LeftFront,
    RightFront,
    RightBack,

    BackBottom,
    LeftBottom,
    FrontBottom,
    RightBottom,
    BackTop,
    LeftTop,
    FrontTop,
    RightTop,
    BackLeft,
    FrontLeft,
    FrontRight,
    BackRight,
}

impl Edge {
    /// All 24 edges. The first 12 are the symmetric subset.
    #[rustfmt::skip]
    pub const ALL: [Edge; 24] = {
        use Edge::*;
        [
            BottomBack, BottomLeft, BottomFront, BottomRight,
            TopBack, TopLeft, TopFront, TopRight,
            LeftBack, LeftFront, RightFront, RightBack,
            BackBottom, LeftBottom, FrontBottom, RightBottom,
            BackTop, LeftTop, FrontTop, RightTop,
            BackLeft, FrontLeft, FrontRight, BackRight,
        ]
    };

    /// The edge which other edges are described as rotations of.
    pub const CANONICAL: Edge = Edge::BottomBack;

    /// Inverse function of `edge as u8`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The side this edge is primarily attached to.
    #[inline]
    pub const fn major(self) -> Side {
        self.sides()[0]
    }

    /// The other side adjacent to this edge.
    #[inline]
    pub const fn minor(self) -> Side {
        self.sides()[1]
    }

    /// The major and minor sides, in that order.
    #[inline]
    pub const fn sides(self) -> [Side; 2] {
        use Side::*;
        match self {
            Edge::BottomBack => [Bottom, Back],
            Edge::BottomLeft => [Bottom, Left],
            Edge::BottomFront => [Bottom, Front],
            Edge::BottomRight => [Bottom, Right],
            Edge::TopBack => [Top, Back],
            Edge::TopLeft => [Top, Left],
            Edge::TopFront => [Top, Front],
            Edge::TopRight => [Top, Right],
            Edge::LeftBack => [Left, Back],
            Edge::LeftFront => [Left, Front],
            Edge::RightFront => [Right, Front],
            Edge::RightBack => [Right, Back],
            Edge::BackBottom => [Back, Bottom],
            Edge::LeftBottom => [Left, Bottom],
            Edge::FrontBottom => [Front, Bottom],
            Edge::RightBottom => [Right, Bottom],
            Edge::BackTop => [Back, Top],
            Edge::LeftTop => [Left, Top],
            Edge::FrontTop => [Front, Top],
            Edge::RightTop => [Right, Top],
            Edge::BackLeft => [Back, Left],
            Edge::FrontLeft => [Front, Left],
            Edge::FrontRight => [Front, Right],
            Edge::BackRight => [Back, Right],
        }
    }

    /// Returns the edge whose major side is `major` and whose minor side is `minor`.
    ///
    /// ```
    /// use cubic_grid::math::{Edge, Side};
    ///
    /// assert_eq!(Edge::for_sides(Side::Left, Side::Top), Ok(Edge::LeftTop));
    /// assert!(Edge::for_sides(Side::Left, Side::Right).is_err());
    /// assert!(Edge::for_sides(Side::Top, Side::Top).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the sides are equal or opposite, since they then do not
    /// share an edge.
    #[inline]
    pub fn for_sides(major: Side, minor: Side) -> Result<Self, SidesError> {
        check_pair(major, minor)?;
        match Self::ALL
            .into_iter()
            .find(|edge| edge.sides() == [major, minor])
        {
            Some(edge) => Ok(edge),
            None => unreachable!("no edge for perpendicular sides {major:?}, {minor:?}"),
        }
    }

    /// Returns the edge with the same two sides but major and minor swapped.
    /// This is the same edge after a half turn about the edge's own axis.
    #[inline]
    #[must_use]
    pub const fn symmetric_equivalent(self) -> Self {
        let index = self as usize;
        Self::ALL[if index < 12 { index + 12 } else { index - 12 }]
    }

    /// Whether this edge is one of the first 12, which stand for all edges of
    /// symmetric blocks.
    #[inline]
    pub const fn is_symmetric_representative(self) -> bool {
        (self as u8) < 12
    }

    /// Returns the rotation which carries [`Edge::CANONICAL`] onto this edge: it carries
    /// [`Side::Bottom`] to the major side and [`Side::Back`] to the minor side.
    ///
    /// ```
    /// use cubic_grid::math::{Edge, Side};
    ///
    /// for edge in Edge::ALL {
    ///     let r = edge.rotation();
    ///     assert_eq!(r.rotate(Side::Bottom), edge.major());
    ///     assert_eq!(r.rotate(Side::Back), edge.minor());
    /// }
    /// ```
    #[inline]
    pub fn rotation(self) -> Rotation {
        rotation_for_pair(self.major(), self.minor())
    }

    /// Returns the edge this edge is carried to by `rotation`.
    #[inline]
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self {
        let [major, minor] = self.sides().map(|side| rotation.rotate(side));
        match Self::for_sides(major, minor) {
            Ok(edge) => edge,
            Err(e) => unreachable!("rotation broke edge {self:?}: {e}"),
        }
    }
}

/// Returns the rotation carrying [`Side::Bottom`] to `down` and [`Side::Back`] to `back`,
/// which must be perpendicular.
pub(crate) fn rotation_for_pair(down: Side, back: Side) -> Rotation {
    // Front and Top are the reverses of Back and Bottom.
    match RotationRegistry::global().find_by_images(back.reverse(), down.reverse()) {
        Some(r) => r,
        None => unreachable!("sides {down:?} and {back:?} are not perpendicular"),
    }
}

pub(crate) fn check_pair(a: Side, b: Side) -> Result<(), SidesError> {
    if a == b {
        Err(SidesError(SidesErrorKind::Repeated(a)))
    } else if a == b.reverse() {
        Err(SidesError(SidesErrorKind::Opposite(a, b)))
    } else {
        Ok(())
    }
}

/// Error from [`Edge::for_sides()`] or [`Corner::for_sides()`](crate::math::Corner::for_sides)
/// when the given sides do not meet at an edge or corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[displaydoc("{0}")]
pub struct SidesError(SidesErrorKind);

#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
enum SidesErrorKind {
    /// side {0:?} was given more than once
    Repeated(Side),
    /// sides {0:?} and {1:?} are opposite
    Opposite(Side, Side),
}

impl core::error::Error for SidesError {}

//! Quarter-turn rotations of a block: [`Yaw`], [`Pitch`], [`Roll`], their compositions as
//! [`Rotation`], and the [`RotationRegistry`] which canonicalizes them.
//! This module is private but reexported by its parent.

use core::f64::consts::FRAC_PI_2;
use core::fmt;
use core::ops::Mul;

use arrayvec::ArrayVec;
use manyfmt::Refmt as _;

use crate::math::{FreeCoordinate, GridVector, Side};
use crate::util::ConciseDebug;

/// Rotation about the vertical (Y) axis, clockwise as seen from above.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Yaw {
    /// No rotation.
    #[default]
    None = 0,
    /// A quarter turn clockwise.
    Clockwise90 = 1,
    /// A half turn.
    Clockwise180 = 2,
    /// Three quarter turns clockwise, or one quarter turn anticlockwise.
    Clockwise270 = 3,
}

/// Rotation about the X axis, turning the front side upward.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Pitch {
    /// No rotation.
    #[default]
    None = 0,
    /// A quarter turn clockwise.
    Clockwise90 = 1,
    /// A half turn.
    Clockwise180 = 2,
    /// Three quarter turns clockwise, or one quarter turn anticlockwise.
    Clockwise270 = 3,
}

/// Rotation about the Z axis, turning the top side leftward.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Roll {
    /// No rotation.
    #[default]
    None = 0,
    /// A quarter turn clockwise.
    Clockwise90 = 1,
    /// A half turn.
    Clockwise180 = 2,
    /// Three quarter turns clockwise, or one quarter turn anticlockwise.
    Clockwise270 = 3,
}

/// Methods shared by [`Yaw`], [`Pitch`], and [`Roll`].
macro_rules! impl_quarter_turns {
    ($name:ident, $side_method:ident) => {
        impl $name {
            /// All four values, in increasing order of clockwise turns.
            pub const ALL: [Self; 4] = [
                Self::None,
                Self::Clockwise90,
                Self::Clockwise180,
                Self::Clockwise270,
            ];

            /// Returns the two-bit index of this value, which is also its number of
            /// clockwise quarter turns.
            #[inline]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Inverse of [`Self::index()`].
            #[inline]
            pub const fn from_index(index: u8) -> Option<Self> {
                match index {
                    0 => Some(Self::None),
                    1 => Some(Self::Clockwise90),
                    2 => Some(Self::Clockwise180),
                    3 => Some(Self::Clockwise270),
                    _ => None,
                }
            }

            /// Number of clockwise quarter turns, from 0 to 3.
            #[inline]
            pub const fn increments(self) -> i32 {
                self as i32
            }

            /// Returns the value which turns clockwise by `increments` quarter turns.
            /// Negative values turn anticlockwise.
            #[inline]
            pub const fn from_increments(increments: i32) -> Self {
                match increments.rem_euclid(4) {
                    0 => Self::None,
                    1 => Self::Clockwise90,
                    2 => Self::Clockwise180,
                    _ => Self::Clockwise270,
                }
            }

            /// The clockwise rotation angle, in radians.
            #[inline]
            pub fn radians(self) -> FreeCoordinate {
                FreeCoordinate::from(self.increments()) * FRAC_PI_2
            }

            /// Returns the value which undoes this one.
            #[inline]
            #[must_use]
            pub const fn reverse(self) -> Self {
                Self::from_increments(-self.increments())
            }

            /// Apply this rotation alone to `side`.
            #[inline]
            #[must_use]
            pub const fn apply(self, side: Side) -> Side {
                side.$side_method(self.increments())
            }
        }
    };
}

impl_quarter_turns!(Yaw, yaw_clockwise);
impl_quarter_turns!(Pitch, pitch_clockwise);
impl_quarter_turns!(Roll, roll_clockwise);

// -------------------------------------------------------------------------------------------------

/// One of the 24 rotations of a cube, expressed as a composition of a [`Yaw`], [`Pitch`],
/// and [`Roll`].
///
/// Of the 64 possible triples, only 24 are distinct as functions from [`Side`] to [`Side`];
/// every `Rotation` value holds the canonical triple chosen by the [`RotationRegistry`], so
/// two `Rotation`s are equal exactly when they rotate every side the same way.
///
/// ```
/// use cubic_grid::math::{Pitch, Roll, Rotation, Side, Yaw};
///
/// let r = Rotation::from_yaw_pitch_roll(Yaw::Clockwise90, Pitch::None, Roll::None);
/// assert_eq!(r.rotate(Side::Front), Side::Left);
/// assert_eq!(r.rotate(Side::Top), Side::Top);
///
/// // Two half turns about different axes equal a half turn about the third.
/// assert_eq!(
///     Rotation::from_yaw_pitch_roll(Yaw::Clockwise180, Pitch::Clockwise180, Roll::None),
///     Rotation::from(Roll::Clockwise180),
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rotation {
    yaw: Yaw,
    pitch: Pitch,
    roll: Roll,
}

impl Rotation {
    /// The identity rotation.
    #[inline]
    pub const fn none() -> Self {
        Self::raw(Yaw::None, Pitch::None, Roll::None)
    }

    /// Constructs a triple without canonicalizing it.
    const fn raw(yaw: Yaw, pitch: Pitch, roll: Roll) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Returns the canonical rotation equivalent to applying `roll`, then `pitch`,
    /// then `yaw`.
    ///
    /// This is shorthand for calling [`RotationRegistry::rotate()`] on
    /// [`RotationRegistry::global()`].
    #[inline]
    pub fn from_yaw_pitch_roll(yaw: Yaw, pitch: Pitch, roll: Roll) -> Self {
        RotationRegistry::global().rotate(yaw, pitch, roll)
    }

    /// All 24 canonical rotations, in registration order.
    #[inline]
    pub fn all() -> &'static [Rotation; 24] {
        RotationRegistry::global().all()
    }

    /// The yaw component of the canonical triple.
    #[inline]
    pub const fn yaw(self) -> Yaw {
        self.yaw
    }

    /// The pitch component of the canonical triple.
    #[inline]
    pub const fn pitch(self) -> Pitch {
        self.pitch
    }

    /// The roll component of the canonical triple.
    #[inline]
    pub const fn roll(self) -> Roll {
        self.roll
    }

    /// Packs the triple into six bits, as `(yaw << 4) | (pitch << 2) | roll`.
    #[inline]
    pub const fn packed_index(self) -> u8 {
        (self.yaw.index() << 4) | (self.pitch.index() << 2) | self.roll.index()
    }

    /// Apply this rotation to `side`: first the roll, then the pitch, then the yaw.
    #[inline]
    #[must_use]
    pub const fn rotate(self, side: Side) -> Side {
        self.yaw.apply(self.pitch.apply(self.roll.apply(side)))
    }

    /// Apply this rotation to a vector.
    ///
    /// ```
    /// use cubic_grid::math::{GridVector, Rotation, Side};
    ///
    /// for r in Rotation::all() {
    ///     for side in Side::ALL {
    ///         assert_eq!(r.rotate_vector(side.vector()), r.rotate(side).vector());
    ///     }
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn rotate_vector(self, vector: GridVector) -> GridVector {
        self.rotate(Side::Right).vector() * vector.x
            + self.rotate(Side::Top).vector() * vector.y
            + self.rotate(Side::Back).vector() * vector.z
    }

    /// Returns the rotation which undoes this one.
    ///
    /// ```
    /// use cubic_grid::math::{Rotation, Side};
    ///
    /// for &r in Rotation::all() {
    ///     assert_eq!(r * r.reverse(), Rotation::none());
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn reverse(self) -> Self {
        match RotationRegistry::global().find_reverse(self) {
            Some(r) => r,
            None => unreachable!("rotation {self:?} has no inverse"),
        }
    }

    /// The sides that [`Side::Front`] and [`Side::Top`] are carried to, which identify
    /// the rotation.
    #[inline]
    fn images(self) -> (Side, Side) {
        (self.rotate(Side::Front), self.rotate(Side::Top))
    }
}

impl Default for Rotation {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl Mul for Rotation {
    type Output = Self;

    /// Composes two rotations; `a * b` applies `b` first and then `a`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (front, top) = rhs.images();
        match RotationRegistry::global().find_by_images(self.rotate(front), self.rotate(top)) {
            Some(r) => r,
            None => unreachable!("composition of {self:?} and {rhs:?} is not a rotation"),
        }
    }
}

impl From<Yaw> for Rotation {
    /// Returns the canonical rotation made of this yaw alone.
    #[inline]
    fn from(value: Yaw) -> Self {
        Self::from_yaw_pitch_roll(value, Pitch::None, Roll::None)
    }
}
impl From<Pitch> for Rotation {
    /// Returns the canonical rotation made of this pitch alone.
    #[inline]
    fn from(value: Pitch) -> Self {
        Self::from_yaw_pitch_roll(Yaw::None, value, Roll::None)
    }
}
impl From<Roll> for Rotation {
    /// Returns the canonical rotation made of this roll alone.
    #[inline]
    fn from(value: Roll) -> Self {
        Self::from_yaw_pitch_roll(Yaw::None, Pitch::None, value)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Rotation {
    #[inline]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        u.choose(Rotation::all()).copied()
    }

    #[inline]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}

// -------------------------------------------------------------------------------------------------

/// Marker in the image table for a pair of sides no rotation produces.
const NO_ROTATION: u8 = u8::MAX;

/// The table of canonical [`Rotation`]s.
///
/// Every one of the 64 (yaw, pitch, roll) triples is mapped to one of the 24 canonical
/// rotations. The canonical representative of a set of equivalent triples is the first
/// one met when iterating pitch in the outer loop, yaw in the middle, and roll innermost.
///
/// Most code should use [`RotationRegistry::global()`], which is built once on first use.
pub struct RotationRegistry {
    canonical: [Rotation; 24],
    /// Index into `canonical` for each packed triple.
    redirect: [u8; 64],
    /// Index into `canonical` for each pair of images of [`Side::Front`] and [`Side::Top`],
    /// or [`NO_ROTATION`].
    by_images: [[u8; 6]; 6],
}

impl RotationRegistry {
    /// Computes the registry.
    ///
    /// This does not touch any shared state; see [`RotationRegistry::global()`] for
    /// the shared instance.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn build() -> Self {
        let raw_triples = || {
            Pitch::ALL.into_iter().flat_map(|pitch| {
                Yaw::ALL.into_iter().flat_map(move |yaw| {
                    Roll::ALL
                        .into_iter()
                        .map(move |roll| Rotation::raw(yaw, pitch, roll))
                })
            })
        };

        // First pass: every triple whose effect has not been seen yet becomes canonical.
        let mut canonical: ArrayVec<Rotation, 24> = ArrayVec::new();
        let mut by_images = [[NO_ROTATION; 6]; 6];
        for triple in raw_triples() {
            let (front, top) = triple.images();
            let slot = &mut by_images[front as usize][top as usize];
            if *slot == NO_ROTATION {
                *slot = canonical.len() as u8;
                canonical.push(triple);
            }
        }

        // Second pass: redirect every triple to its canonical equivalent.
        let mut redirect = [0; 64];
        for triple in raw_triples() {
            let (front, top) = triple.images();
            let index = by_images[front as usize][top as usize];
            redirect[usize::from(triple.packed_index())] = index;
            let target = canonical[usize::from(index)];
            if target != triple {
                log::trace!(
                    "rotation {} redirected to {}",
                    triple.refmt(&ConciseDebug),
                    target.refmt(&ConciseDebug),
                );
            }
        }

        let canonical = match canonical.into_inner() {
            Ok(array) => array,
            Err(partial) => unreachable!(
                "expected 24 distinct rotations, found {}",
                partial.len()
            ),
        };

        Self {
            canonical,
            redirect,
            by_images,
        }
    }

    /// Returns the shared registry, building it on first use.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn global() -> &'static Self {
        fn build_logged() -> RotationRegistry {
            let registry = RotationRegistry::build();
            log::debug!(
                "built rotation registry: {} canonical rotations, {} redirected triples",
                registry.canonical.len(),
                registry.redirect.len() - registry.canonical.len(),
            );
            registry
        }

        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                static REGISTRY: std::sync::OnceLock<RotationRegistry> =
                    std::sync::OnceLock::new();
                REGISTRY.get_or_init(build_logged)
            } else {
                // OnceBox has extra boxing, so only use it if necessary
                static REGISTRY: once_cell::race::OnceBox<RotationRegistry> =
                    once_cell::race::OnceBox::new();
                REGISTRY.get_or_init(|| alloc::boxed::Box::new(build_logged()))
            }
        }
    }

    /// Returns the canonical rotation equivalent to applying `roll`, then `pitch`,
    /// then `yaw`.
    #[inline]
    pub fn rotate(&self, yaw: Yaw, pitch: Pitch, roll: Roll) -> Rotation {
        let packed = Rotation::raw(yaw, pitch, roll).packed_index();
        self.canonical[usize::from(self.redirect[usize::from(packed)])]
    }

    /// All 24 canonical rotations, in registration order. The first is [`Rotation::none()`].
    #[inline]
    pub fn all(&self) -> &[Rotation; 24] {
        &self.canonical
    }

    /// Returns the rotation which carries [`Side::Front`] to `front` and [`Side::Top`]
    /// to `top`, or [`None`] if `front` and `top` are not perpendicular.
    #[inline]
    pub fn find_by_images(&self, front: Side, top: Side) -> Option<Rotation> {
        match self.by_images[front as usize][top as usize] {
            NO_ROTATION => None,
            index => Some(self.canonical[usize::from(index)]),
        }
    }

    /// Returns the rotation which undoes `rotation`, found by testing each canonical
    /// rotation against the images of [`Side::Front`] and [`Side::Top`].
    ///
    /// Every rotation has an inverse, so this never returns [`None`] in practice.
    #[inline]
    pub fn find_reverse(&self, rotation: Rotation) -> Option<Rotation> {
        let (front, top) = rotation.images();
        self.canonical.iter().copied().find(|candidate| {
            candidate.rotate(front) == Side::Front && candidate.rotate(top) == Side::Top
        })
    }
}

impl fmt::Debug for RotationRegistry {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationRegistry")
            .field("canonical", &self.canonical.len())
            .finish_non_exhaustive()
    }
}

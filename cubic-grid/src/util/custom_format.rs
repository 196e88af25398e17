#![allow(clippy::missing_inline_in_public_items)]

use core::fmt;

use manyfmt::Fmt;

use crate::math::Rotation;

/// Format type for [`manyfmt::Fmt`] which is similar to [`fmt::Debug`], but uses an
/// alternate concise format.
///
/// This format is always on one line, and signs are always shown so that columns of
/// coordinates line up in logs.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

/// Implements [`ConciseDebug`] as a signed tuple of the named fields.
macro_rules! concise_tuple {
    ($($ty:ident { $($field:ident),* })*) => {
        $(
            impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::$ty<T, U> {
                fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
                    fmt.write_str("(")?;
                    for (i, value) in [$(&self.$field),*].into_iter().enumerate() {
                        if i > 0 {
                            fmt.write_str(", ")?;
                        }
                        write!(fmt, "{value:+?}")?;
                    }
                    fmt.write_str(")")
                }
            }
        )*
    };
}

concise_tuple! {
    Point2D { x, y }
    Point3D { x, y, z }
    Vector2D { x, y }
    Vector3D { x, y, z }
    Size2D { width, height }
    Size3D { width, height, depth }
}

/// Prints the quarter turns of each component in degrees, such as `Y90 P0 R180`.
impl Fmt<ConciseDebug> for Rotation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(
            fmt,
            "Y{} P{} R{}",
            self.yaw().increments() * 90,
            self.pitch().increments() * 90,
            self.roll().increments() * 90,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{GridPoint, GridSize, Pitch, Roll, Yaw};
    use manyfmt::Refmt as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn euclid_types() {
        assert_eq!(
            format!("{}", GridPoint::new(1, -2, 0).refmt(&ConciseDebug)),
            "(+1, -2, +0)"
        );
        assert_eq!(
            format!("{}", GridSize::new(4, 5, 6).refmt(&ConciseDebug)),
            "(+4, +5, +6)"
        );
        assert_eq!(
            format!("{}", euclid::Point2D::<_, ()>::new(1.5, -0.25).refmt(&ConciseDebug)),
            "(+1.5, -0.25)"
        );
    }

    #[test]
    fn rotation() {
        let r = Rotation::from_yaw_pitch_roll(Yaw::Clockwise270, Pitch::None, Roll::None);
        assert_eq!(format!("{}", r.refmt(&ConciseDebug)), "Y270 P0 R0");
    }
}

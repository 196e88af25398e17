use crate::math::Side;

/// Enumeration of the axes of three-dimensional space.
///
/// Can be used to infallibly index 3-component arrays and vectors.
///
/// See also:
///
/// * [`Side`] specifies an axis and a direction on the axis.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the [`Side`] which faces the positive direction on this axis.
    ///
    /// ```
    /// use cubic_grid::math::{Axis, Side};
    ///
    /// assert_eq!(Axis::Y.positive_side(), Side::Top);
    /// assert_eq!(Axis::Z.positive_side(), Side::Back);
    /// ```
    #[inline]
    pub const fn positive_side(self) -> Side {
        match self {
            Axis::X => Side::Right,
            Axis::Y => Side::Top,
            Axis::Z => Side::Back,
        }
    }

    /// Returns the [`Side`] which faces the negative direction on this axis.
    #[inline]
    pub const fn negative_side(self) -> Side {
        match self {
            Axis::X => Side::Left,
            Axis::Y => Side::Bottom,
            Axis::Z => Side::Front,
        }
    }
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }

    macro_rules! impl_xyz_e {
        ($x:ident $y:ident $z:ident, $($type:tt)*) => {
            impl<T, U> ops::Index<Axis> for $($type)*<T, U> {
                type Output = T;

                #[inline]
                fn index(&self, index: Axis) -> &Self::Output {
                    match index {
                        Axis::X => &self.$x,
                        Axis::Y => &self.$y,
                        Axis::Z => &self.$z,
                    }
                }
            }
            impl<T, U> ops::IndexMut<Axis> for $($type)*<T, U> {
                #[inline]
                fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
                    match index {
                        Axis::X => &mut self.$x,
                        Axis::Y => &mut self.$y,
                        Axis::Z => &mut self.$z,
                    }
                }
            }
        };
    }
    impl_xyz_e!(x y z, euclid::Vector3D);
    impl_xyz_e!(x y z, euclid::Point3D);
    impl_xyz_e!(width height depth, euclid::Size3D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::GridVector;

    #[test]
    fn sides_lie_on_axis() {
        for axis in Axis::ALL {
            let p = axis.positive_side();
            let n = axis.negative_side();
            assert_eq!(p.axis(), axis);
            assert_eq!(n.axis(), axis);
            assert_eq!(p.reverse(), n);
            let mut expected = GridVector::zero();
            expected[axis] = 1;
            assert_eq!(p.vector(), expected);
            assert_eq!(Axis::ALL[axis], axis);
        }
    }
}

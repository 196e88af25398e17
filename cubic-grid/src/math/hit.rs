//! Classifying where on a block a pointer hit.

use crate::math::{Axis, Corner, Edge, FreeCoordinate, FreeVector, Side};

/// Whether a hit on a block is closest to a face, an edge, or a corner.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[allow(missing_docs)]
pub enum HitType {
    Face,
    Edge,
    Corner,
}

/// Classifies hit points relative to the center of a unit block.
///
/// Hit offsets range from −0.5 to 0.5 on each axis. An axis counts toward an edge or
/// corner hit when the magnitude of its offset exceeds [`threshold`](Self::threshold).
/// Choosing the nearest side, edge, or corner does not depend on the threshold, and
/// ties between equal magnitudes go to X, then Y, then Z, as in [`Side::in_direction()`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct BlockHitDetector {
    /// Offset magnitude beyond which an axis is considered near the block's boundary.
    pub threshold: FreeCoordinate,
}

impl Default for BlockHitDetector {
    #[inline]
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

impl BlockHitDetector {
    /// Returns the side nearest to `offset`.
    #[inline]
    #[allow(clippy::unused_self, reason = "the threshold only affects detect_hit_type")]
    pub fn detect_side(&self, offset: FreeVector) -> Side {
        let [a, _, _] = ranked_axes(offset);
        side_toward(offset, a)
    }

    /// Returns the edge nearest to `offset`: the major side is on the axis with the largest
    /// offset and the minor side on the second largest.
    #[inline]
    #[allow(clippy::unused_self, reason = "the threshold only affects detect_hit_type")]
    pub fn detect_edge(&self, offset: FreeVector) -> Edge {
        let [a, b, _] = ranked_axes(offset);
        match Edge::for_sides(side_toward(offset, a), side_toward(offset, b)) {
            Ok(edge) => edge,
            Err(e) => unreachable!("distinct axes gave {e}"),
        }
    }

    /// Returns the corner nearest to `offset`, whose major side is on the axis with the
    /// largest offset.
    #[inline]
    #[allow(clippy::unused_self, reason = "the threshold only affects detect_hit_type")]
    pub fn detect_corner(&self, offset: FreeVector) -> Corner {
        let [a, b, c] = ranked_axes(offset).map(|axis| side_toward(offset, axis));
        match Corner::for_sides(a, b, c) {
            Ok(corner) => corner,
            Err(e) => unreachable!("distinct axes gave {e}"),
        }
    }

    /// Classifies `offset` by how many of its components exceed the threshold in magnitude.
    ///
    /// ```
    /// use cubic_grid::math::{BlockHitDetector, FreeVector, HitType};
    ///
    /// let detector = BlockHitDetector::default();
    /// assert_eq!(detector.detect_hit_type(FreeVector::new(0.5, 0.1, 0.0)), HitType::Face);
    /// assert_eq!(detector.detect_hit_type(FreeVector::new(0.5, -0.4, 0.0)), HitType::Edge);
    /// assert_eq!(detector.detect_hit_type(FreeVector::new(0.5, 0.4, 0.45)), HitType::Corner);
    /// ```
    #[inline]
    pub fn detect_hit_type(&self, offset: FreeVector) -> HitType {
        let count = Axis::ALL
            .into_iter()
            .filter(|&axis| offset[axis].abs() > self.threshold)
            .count();
        match count {
            0 | 1 => HitType::Face,
            2 => HitType::Edge,
            3 => HitType::Corner,
            _ => unreachable!("{count} of 3 axes exceeded the threshold"),
        }
    }
}

/// Returns the side which should receive a block placed against the face with
/// normal `normal`, while looking along `direction`.
///
/// The view direction is projected onto the plane of the face, and the reverse of its
/// dominant side is chosen, so that the placed block's attachment faces the viewer.
///
/// ```
/// use cubic_grid::math::{secondary_placement_direction, FreeVector, Side};
///
/// // Looking forward and down at the top of a block.
/// let side = secondary_placement_direction(
///     FreeVector::new(0.0, -1.0, -0.5),
///     FreeVector::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(side, Side::Back);
/// ```
#[inline]
pub fn secondary_placement_direction(direction: FreeVector, normal: FreeVector) -> Side {
    let surface = Side::in_direction_free(normal);
    let attach = surface.reverse().vector().to_f64();
    let raw = direction - attach * direction.dot(attach);
    Side::in_direction_free(raw).reverse()
}

/// Axes in decreasing order of the magnitude of the corresponding component of `v`.
/// Ties are broken in the order X, Y, Z.
fn ranked_axes(v: FreeVector) -> [Axis; 3] {
    let mut axes = Axis::ALL;
    // Insertion sort; an axis only moves ahead of strictly smaller magnitudes.
    for i in 1..axes.len() {
        let mut j = i;
        while j > 0 && v[axes[j]].abs() > v[axes[j - 1]].abs() {
            axes.swap(j, j - 1);
            j -= 1;
        }
    }
    axes
}

fn side_toward(v: FreeVector, axis: Axis) -> Side {
    if v[axis] > 0.0 {
        axis.positive_side()
    } else {
        axis.negative_side()
    }
}

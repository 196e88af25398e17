//! Mathematical types: sides, rotations, regions, and lattice iteration.

pub use num_traits::identities::Zero;

use crate::util::ConciseDebug;

mod area;
pub use area::*;
mod axis;
pub use axis::*;
pub(crate) mod coord;
pub use coord::*;
mod corner;
pub use corner::*;
mod diamond;
pub use diamond::*;
mod edge;
pub use edge::*;
mod hit;
pub use hit::*;
mod region;
pub use region::*;
mod region_iter;
pub use region_iter::*;
mod rotation;
pub use rotation::*;
#[cfg(feature = "serde")]
mod serde_impls;
mod side;
pub use side::*;

// We make an assumption in several places that `usize` is at least 32 bits.
// It's likely that compilation would not succeed anyway, but let's make it explicit.
#[cfg(target_pointer_width = "16")]
compile_error!("cubic-grid does not support platforms with less than 32-bit `usize`");

/// Error from a constructor which would have produced coordinates outside the range of
/// [`GridCoordinate`].
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{0}")]
pub struct RegionOverflowError(OverflowKind);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OverflowKind {
    Size3 { min: GridPoint, size: GridSize },
    Size2 { min: AreaPoint, size: AreaSize },
}

impl core::fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use manyfmt::Refmt as _;
        match self {
            OverflowKind::Size3 { min, size } => write!(
                f,
                "region size {size} from minimum {min} produced {max} which overflows",
                size = size.refmt(&ConciseDebug),
                min = min.refmt(&ConciseDebug),
                // i64 cannot overflow here.
                max = (min.to_i64() + size.to_i64() - euclid::Size3D::splat(1))
                    .refmt(&ConciseDebug),
            ),
            OverflowKind::Size2 { min, size } => write!(
                f,
                "area size {size} from minimum {min} produced {max} which overflows",
                size = size.refmt(&ConciseDebug),
                min = min.refmt(&ConciseDebug),
                max = (min.to_i64() + size.to_i64() - euclid::Size2D::splat(1))
                    .refmt(&ConciseDebug),
            ),
        }
    }
}

impl core::error::Error for RegionOverflowError {}

//! Discrete spatial algebra for worlds made of blocks.
//!
//! This library defines:
//!
//! * the six [`Side`](math::Side)s of a cube, and the 24 [`Rotation`](math::Rotation)s
//!   reachable by quarter turns of yaw, pitch, and roll;
//! * the [`Edge`](math::Edge) and [`Corner`](math::Corner) orientations derived from them;
//! * integer regions in three ([`BlockRegion`](math::BlockRegion)) and two
//!   ([`BlockArea`](math::BlockArea)) dimensions;
//! * [`DiamondIter`](math::DiamondIter), which walks Manhattan-distance shells;
//! * mapping between block coordinates and [chunk](chunking) coordinates.
//!
//! All values are small `Copy` types. The only shared state is the
//! [`RotationRegistry`](math::RotationRegistry), built once on first use.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

pub mod math;

pub mod chunking;

pub mod util;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;

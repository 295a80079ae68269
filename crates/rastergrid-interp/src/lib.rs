#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Bilinear interpolation kernel and interpolator.
pub mod bilinear;

/// Error types for the interpolation module.
pub mod error;

/// Grid capability shared by interpolation sources and targets.
///
/// Any type implementing [`grid::GridLike`] can be sampled by the
/// interpolation strategies in this crate.
pub mod grid;

/// Registry of the available interpolation algorithms.
pub mod interpolate;

/// Axis aligned grid with explicit coordinate axes.
pub mod rectangular;

/// Utility functions for resizing grids and images.
pub mod resize;

pub use bilinear::BilinearInterpolator;
pub use error::InterpolationError;
pub use grid::{BoundingCell, GridLike};
pub use interpolate::InterpolationMode;
pub use rectangular::RectangularGrid;
pub use resize::{linspace, resize_grid, resize_image};

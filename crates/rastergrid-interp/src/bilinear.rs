use ndarray::Array2;

use crate::error::InterpolationError;
use crate::grid::GridLike;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `grid` - The source grid.
/// * `y` - The vertical coordinate to interpolate.
/// * `x` - The horizontal coordinate to interpolate.
///
/// # Returns
///
/// The weighted combination of the four nodes bracketing `(y, x)`. Nodes are
/// returned exactly.
pub(crate) fn bilinear_interpolation<G: GridLike + ?Sized>(
    grid: &G,
    y: f32,
    x: f32,
) -> Result<f32, InterpolationError> {
    let cell = grid.bounding_cell(y, x)?;

    if cell.is_node() {
        return grid.node_value(cell.iy0, cell.ix0);
    }

    let (ty, tx) = cell.offsets(y, x);

    let v00 = grid.node_value(cell.iy0, cell.ix0)?;
    let v01 = grid.node_value(cell.iy0, cell.ix1)?;
    let v10 = grid.node_value(cell.iy1, cell.ix0)?;
    let v11 = grid.node_value(cell.iy1, cell.ix1)?;

    let w00 = (1.0 - ty) * (1.0 - tx);
    let w01 = (1.0 - ty) * tx;
    let w10 = ty * (1.0 - tx);
    let w11 = ty * tx;

    Ok(w00 * v00 + w01 * v01 + w10 * v10 + w11 * v11)
}

/// Performs bilinear interpolation from a source grid.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use rastergrid_interp::{BilinearInterpolator, RectangularGrid};
///
/// let src = RectangularGrid::new(
///     (vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]),
///     Some(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
/// )
/// .unwrap();
///
/// let dst = RectangularGrid::new((vec![0.5], vec![0.5]), None).unwrap();
/// let values = BilinearInterpolator::new(&src).interpolate(&dst).unwrap();
///
/// assert_eq!(values[[0, 0]], 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BilinearInterpolator<'a, G: GridLike + ?Sized> {
    src: &'a G,
}

impl<'a, G: GridLike + ?Sized> BilinearInterpolator<'a, G> {
    /// Create an interpolator sampling from `src`.
    pub fn new(src: &'a G) -> Self {
        Self { src }
    }

    /// The source grid.
    pub fn src(&self) -> &G {
        self.src
    }

    /// Interpolate the source at every node of `target`.
    ///
    /// # Returns
    ///
    /// An array with the shape of `target` where entry `[i, j]` holds the
    /// estimate at `(target_y[i], target_x[j])`.
    ///
    /// # Errors
    ///
    /// The first target coordinate outside the source bounds aborts the
    /// whole computation with [`InterpolationError::OutOfBounds`].
    pub fn interpolate<T: GridLike + ?Sized>(
        &self,
        target: &T,
    ) -> Result<Array2<f32>, InterpolationError> {
        let (y_axis, x_axis) = target.points();
        let mut values = Array2::zeros(target.shape());

        for (iy, &y) in y_axis.iter().enumerate() {
            for (ix, &x) in x_axis.iter().enumerate() {
                values[[iy, ix]] = bilinear_interpolation(self.src, y, x)?;
            }
        }

        Ok(values)
    }
}

use ndarray::Array2;
use rastergrid_image::{Image, ImageDtype, ImageSize};

use crate::bilinear::bilinear_interpolation;
use crate::error::InterpolationError;
use crate::grid::GridLike;

/// An axis aligned grid with explicit, possibly non uniform, coordinate axes.
///
/// The grid exclusively owns its axes and an optional array of values with
/// shape `(y_axis.len(), x_axis.len())`. Values may be assigned after
/// construction, e.g. once an interpolator has computed them.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use rastergrid_interp::{GridLike, RectangularGrid};
///
/// let grid = RectangularGrid::new(
///     (vec![0.0, 1.0], vec![0.0, 1.0, 2.0]),
///     Some(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
/// )
/// .unwrap();
///
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.get_value(1.0, 0.5).unwrap(), 4.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularGrid {
    points: (Vec<f32>, Vec<f32>),
    values: Option<Array2<f32>>,
}

impl RectangularGrid {
    /// Create a new grid from its `(y_axis, x_axis)` coordinates.
    ///
    /// # Errors
    ///
    /// * [`InterpolationError::InvalidGrid`] if an axis is empty, holds non
    ///   finite coordinates or is not monotonically non decreasing.
    /// * [`InterpolationError::ShapeMismatch`] if `values` does not match the axes.
    pub fn new(
        points: (Vec<f32>, Vec<f32>),
        values: Option<Array2<f32>>,
    ) -> Result<Self, InterpolationError> {
        validate_axis("y", &points.0)?;
        validate_axis("x", &points.1)?;

        let mut grid = Self {
            points,
            values: None,
        };

        if let Some(values) = values {
            grid.set_values(values)?;
        }

        Ok(grid)
    }

    /// The values of the grid, if any.
    pub fn values(&self) -> Option<&Array2<f32>> {
        self.values.as_ref()
    }

    /// Assign the values of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::ShapeMismatch`] if the array shape does not
    /// match the grid shape.
    pub fn set_values(&mut self, values: Array2<f32>) -> Result<(), InterpolationError> {
        let (rows, cols) = values.dim();
        let (height, width) = self.shape();
        if (rows, cols) != (height, width) {
            return Err(InterpolationError::ShapeMismatch(rows, cols, height, width));
        }

        self.values = Some(values);

        Ok(())
    }

    /// Consume the grid and return its values.
    pub fn into_values(self) -> Option<Array2<f32>> {
        self.values
    }

    /// Create one grid per channel from an image.
    ///
    /// All grids share the pixel index axes `0..height` and `0..width`; the
    /// pixel values are widened to `f32` without loss.
    ///
    /// # Errors
    ///
    /// Fails with [`InterpolationError::InvalidGrid`] for an image without pixels.
    pub fn from_image<T, const C: usize>(
        image: &Image<T, C>,
    ) -> Result<Vec<RectangularGrid>, InterpolationError>
    where
        T: ImageDtype,
    {
        let (height, width) = (image.height(), image.width());
        let y_axis = (0..height).map(|i| i as f32).collect::<Vec<_>>();
        let x_axis = (0..width).map(|i| i as f32).collect::<Vec<_>>();

        image
            .split_channels()?
            .into_iter()
            .map(|channel| {
                let data: Vec<f32> = channel.into_vec().into_iter().map(Into::into).collect();
                let values = Array2::from_shape_vec((height, width), data)?;
                RectangularGrid::new((y_axis.clone(), x_axis.clone()), Some(values))
            })
            .collect()
    }

    /// Convert the grid values to a single channel image.
    ///
    /// Values are rounded and saturated to the range of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::MissingValues`] if the grid has no values.
    pub fn to_image<T: ImageDtype>(&self) -> Result<Image<T, 1>, InterpolationError> {
        let values = self
            .values
            .as_ref()
            .ok_or(InterpolationError::MissingValues)?;

        let (height, width) = self.shape();
        let data = values.iter().map(|&v| T::from_f32(v)).collect();

        Ok(Image::new(ImageSize { width, height }, data)?)
    }

    /// Merge per channel grids back into an image.
    ///
    /// This is the inverse of [`RectangularGrid::from_image`].
    ///
    /// # Errors
    ///
    /// * [`InterpolationError::ChannelCountMismatch`] if the number of grids is not `C`.
    /// * [`InterpolationError::ShapeMismatch`] if the grids differ in shape.
    /// * [`InterpolationError::MissingValues`] if any grid has no values.
    pub fn merge_channels<T, const C: usize>(
        grids: &[RectangularGrid],
    ) -> Result<Image<T, C>, InterpolationError>
    where
        T: ImageDtype,
    {
        if grids.len() != C {
            return Err(InterpolationError::ChannelCountMismatch(grids.len(), C));
        }

        if let (Some(first), Some(other)) = (
            grids.first(),
            grids.iter().find(|g| g.shape() != grids[0].shape()),
        ) {
            let (rows, cols) = other.shape();
            let (height, width) = first.shape();
            return Err(InterpolationError::ShapeMismatch(rows, cols, height, width));
        }

        let channels = grids
            .iter()
            .map(|grid| grid.to_image::<T>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Image::from_channels(&channels)?)
    }
}

impl GridLike for RectangularGrid {
    fn points(&self) -> (&[f32], &[f32]) {
        (&self.points.0, &self.points.1)
    }

    fn shape(&self) -> (usize, usize) {
        (self.points.0.len(), self.points.1.len())
    }

    fn node_value(&self, iy: usize, ix: usize) -> Result<f32, InterpolationError> {
        let values = self
            .values
            .as_ref()
            .ok_or(InterpolationError::MissingValues)?;

        values.get((iy, ix)).copied().ok_or_else(|| {
            let (height, width) = self.shape();
            InterpolationError::IndexOutOfBounds(iy, ix, height, width)
        })
    }

    fn get_value(&self, y: f32, x: f32) -> Result<f32, InterpolationError> {
        if self.values.is_none() {
            return Err(InterpolationError::MissingValues);
        }
        bilinear_interpolation(self, y, x)
    }
}

fn validate_axis(name: &str, axis: &[f32]) -> Result<(), InterpolationError> {
    if axis.is_empty() {
        return Err(InterpolationError::InvalidGrid(format!("empty {name} axis")));
    }

    if let Some(v) = axis.iter().find(|v| !v.is_finite()) {
        return Err(InterpolationError::InvalidGrid(format!(
            "non finite coordinate {v} in {name} axis"
        )));
    }

    if let Some(i) = axis.windows(2).position(|w| w[1] < w[0]) {
        return Err(InterpolationError::InvalidGrid(format!(
            "{name} axis is not monotonic at index {}: {} > {}",
            i + 1,
            axis[i],
            axis[i + 1]
        )));
    }

    Ok(())
}

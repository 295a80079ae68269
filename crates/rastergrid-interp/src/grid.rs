use crate::error::InterpolationError;

/// The four nodes of a grid that bracket a query coordinate.
///
/// When the query lies exactly on an axis node the lower and upper indices
/// along that axis coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCell {
    /// Index of the lower vertical node.
    pub iy0: usize,
    /// Index of the upper vertical node.
    pub iy1: usize,
    /// Index of the lower horizontal node.
    pub ix0: usize,
    /// Index of the upper horizontal node.
    pub ix1: usize,
    /// Coordinate of the lower vertical node.
    pub y0: f32,
    /// Coordinate of the upper vertical node.
    pub y1: f32,
    /// Coordinate of the lower horizontal node.
    pub x0: f32,
    /// Coordinate of the upper horizontal node.
    pub x1: f32,
}

impl BoundingCell {
    /// Whether the query coincides with a grid node on both axes.
    pub fn is_node(&self) -> bool {
        self.iy0 == self.iy1 && self.ix0 == self.ix1
    }

    /// Normalized offsets `(ty, tx)` of `(y, x)` inside the cell.
    ///
    /// A degenerate axis (zero extent) gets a zero offset so that the
    /// lower node is used as is.
    pub fn offsets(&self, y: f32, x: f32) -> (f32, f32) {
        let ty = if self.y1 > self.y0 {
            (y - self.y0) / (self.y1 - self.y0)
        } else {
            0.0
        };
        let tx = if self.x1 > self.x0 {
            (x - self.x0) / (self.x1 - self.x0)
        } else {
            0.0
        };
        (ty, tx)
    }
}

/// Capability contract of any interpolation source or target.
///
/// The trait is object safe so that strategies can work with `&dyn GridLike`.
pub trait GridLike {
    /// The sample coordinates as `(y_axis, x_axis)`.
    fn points(&self) -> (&[f32], &[f32]);

    /// The grid dimensions as `(height, width)`.
    fn shape(&self) -> (usize, usize);

    /// The value stored at node `(iy, ix)`.
    fn node_value(&self, iy: usize, ix: usize) -> Result<f32, InterpolationError>;

    /// The value at or interpolated near the continuous coordinate `(y, x)`.
    fn get_value(&self, y: f32, x: f32) -> Result<f32, InterpolationError>;

    /// Find the cell of grid nodes that brackets `(y, x)`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::OutOfBounds`] if the point is outside
    /// the axis range on either dimension.
    fn bounding_cell(&self, y: f32, x: f32) -> Result<BoundingCell, InterpolationError> {
        let (y_axis, x_axis) = self.points();

        match (find_bracket(y_axis, y), find_bracket(x_axis, x)) {
            (Some((iy0, iy1)), Some((ix0, ix1))) => Ok(BoundingCell {
                iy0,
                iy1,
                ix0,
                ix1,
                y0: y_axis[iy0],
                y1: y_axis[iy1],
                x0: x_axis[ix0],
                x1: x_axis[ix1],
            }),
            _ => Err(out_of_bounds(y_axis, x_axis, y, x)),
        }
    }
}

/// Locate the consecutive pair of axis indices bracketing `value`.
///
/// Returns `(i, i)` for an exact hit on a node and `None` when the value is
/// outside the axis range or not a number.
pub(crate) fn find_bracket(axis: &[f32], value: f32) -> Option<(usize, usize)> {
    let (first, last) = (*axis.first()?, *axis.last()?);
    if !(first <= value && value <= last) {
        return None;
    }

    // the first node not below the value, i.e. a left sided search
    let i = axis.partition_point(|&a| a < value);
    if axis[i] == value {
        Some((i, i))
    } else {
        Some((i - 1, i))
    }
}

fn out_of_bounds(y_axis: &[f32], x_axis: &[f32], y: f32, x: f32) -> InterpolationError {
    let bound = |v: Option<&f32>| v.copied().unwrap_or(f32::NAN);
    InterpolationError::OutOfBounds {
        y,
        x,
        y_min: bound(y_axis.first()),
        y_max: bound(y_axis.last()),
        x_min: bound(x_axis.first()),
        x_max: bound(x_axis.last()),
    }
}

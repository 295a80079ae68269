use rastergrid_image::ImageError;

/// An error type for the interpolation module.
#[derive(thiserror::Error, Debug)]
pub enum InterpolationError {
    /// The values array does not match the grid axes.
    #[error("Values shape ({0}, {1}) does not match the grid shape ({2}, {3})")]
    ShapeMismatch(usize, usize, usize, usize),

    /// The number of grids does not match the number of image channels.
    #[error("Got {0} grids for an image with {1} channels")]
    ChannelCountMismatch(usize, usize),

    /// The requested coordinate lies outside the grid axes.
    #[error(
        "Point ({y}, {x}) is out of grid bounds, required: \
         {y_min} <= y <= {y_max} and {x_min} <= x <= {x_max}"
    )]
    OutOfBounds {
        /// The requested vertical coordinate.
        y: f32,
        /// The requested horizontal coordinate.
        x: f32,
        /// Lower bound of the vertical axis.
        y_min: f32,
        /// Upper bound of the vertical axis.
        y_max: f32,
        /// Lower bound of the horizontal axis.
        x_min: f32,
        /// Upper bound of the horizontal axis.
        x_max: f32,
    },

    /// A node index is outside the grid.
    #[error("Node index ({0}, {1}) is out of bounds for a grid of shape ({2}, {3})")]
    IndexOutOfBounds(usize, usize, usize, usize),

    /// The algorithm name is not registered.
    #[error("Unsupported interpolation algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The grid axes are empty, not finite or not monotonic.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// The grid has no values assigned yet.
    #[error("Trying to get a value from a grid with empty values")]
    MissingValues,

    /// Error when building the values array.
    #[error("Invalid shape. {0}")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// Error when converting from or to an image.
    #[error("Image error. {0}")]
    Image(#[from] ImageError),
}

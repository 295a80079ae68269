use ndarray::Array1;
use rastergrid_image::{Image, ImageDtype};

use crate::error::InterpolationError;
use crate::grid::GridLike;
use crate::interpolate::InterpolationMode;
use crate::rectangular::RectangularGrid;

/// Generate `n` evenly spaced samples over `[start, end]`.
///
/// Both endpoints are included and the last sample is exactly `end`.
///
/// # Example
///
/// ```
/// use rastergrid_interp::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    let mut samples = Array1::linspace(start, end, n).to_vec();
    // rounding in the step may overshoot `end` and leave the source bounds
    if n > 1 {
        if let Some(last) = samples.last_mut() {
            *last = end;
        }
    }
    samples
}

// target grid spanning the same coordinate range as `src`
fn target_grid<G: GridLike + ?Sized>(
    src: &G,
    y_size: usize,
    x_size: usize,
) -> Result<RectangularGrid, InterpolationError> {
    let (y_axis, x_axis) = src.points();
    let span = |axis: &[f32]| match (axis.first(), axis.last()) {
        (Some(&first), Some(&last)) => Ok((first, last)),
        _ => Err(InterpolationError::InvalidGrid("empty source axis".to_string())),
    };

    let (y_min, y_max) = span(y_axis)?;
    let (x_min, x_max) = span(x_axis)?;

    RectangularGrid::new(
        (
            linspace(y_min, y_max, y_size),
            linspace(x_min, x_max, x_size),
        ),
        None,
    )
}

/// Resample a grid onto a new grid of shape `(y_size, x_size)`.
///
/// The new axes are spread evenly over the coordinate range of the source
/// axes, endpoints included.
///
/// # Errors
///
/// Fails with [`InterpolationError::InvalidGrid`] if a target size is zero.
pub fn resize_grid<G: GridLike + ?Sized>(
    src: &G,
    y_size: usize,
    x_size: usize,
    mode: InterpolationMode,
) -> Result<RectangularGrid, InterpolationError> {
    let mut dst = target_grid(src, y_size, x_size)?;
    let values = mode.interpolate(src, &dst)?;
    dst.set_values(values)?;
    Ok(dst)
}

/// Resize an image to `y_size` rows and `x_size` columns.
///
/// Every channel is resampled as an independent scalar field. The output is
/// stretched to exactly the requested size, the aspect ratio is not kept.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `y_size` - The target height in pixels.
/// * `x_size` - The target width in pixels.
/// * `algorithm` - The name of the interpolation algorithm, e.g. `"bilinear"`.
///
/// # Errors
///
/// * [`InterpolationError::UnsupportedAlgorithm`] if the algorithm is not
///   registered. The image is not read in that case.
/// * [`InterpolationError::InvalidGrid`] if the image or the target size is empty.
///
/// # Example
///
/// ```
/// use rastergrid_image::{Image, ImageSize};
/// use rastergrid_interp::resize_image;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0, 255, 255, 0],
/// )
/// .unwrap();
///
/// let resized = resize_image(&image, 3, 3, "bilinear").unwrap();
///
/// assert_eq!(resized.size().width, 3);
/// assert_eq!(resized.size().height, 3);
/// assert_eq!(resized.get([1, 1, 0]), Some(&128));
/// ```
pub fn resize_image<T, const C: usize>(
    image: &Image<T, C>,
    y_size: usize,
    x_size: usize,
    algorithm: &str,
) -> Result<Image<T, C>, InterpolationError>
where
    T: ImageDtype,
{
    let mode = algorithm.parse::<InterpolationMode>()?;

    log::debug!(
        "resizing {} image with {} channels to {x_size}x{y_size} using {mode}",
        image.size(),
        C
    );

    let src_grids = RectangularGrid::from_image(image)?;
    let Some(first) = src_grids.first() else {
        return Err(InterpolationError::InvalidGrid(
            "image has no channels".to_string(),
        ));
    };

    let target = target_grid(first, y_size, x_size)?;

    let dst_grids = src_grids
        .iter()
        .map(|src| {
            let mut dst = target.clone();
            dst.set_values(mode.interpolate(src, &target)?)?;
            Ok(dst)
        })
        .collect::<Result<Vec<_>, InterpolationError>>()?;

    RectangularGrid::merge_channels(&dst_grids)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rastergrid_image::{Image, ImageSize};

    use super::{linspace, resize_grid, resize_image};
    use crate::error::InterpolationError;
    use crate::grid::GridLike;
    use crate::interpolate::InterpolationMode;
    use crate::rectangular::RectangularGrid;

    #[test]
    fn linspace_endpoints() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 4.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let axis = linspace(0.0, 3.0, 7);
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[6], 3.0);
        assert!(axis.windows(2).all(|w| w[0] <= w[1]));

        // large resizes stay inside the source range
        for (extent, n) in [(479, 997), (1077, 2999), (3, 10007)] {
            let end = (extent - 1) as f32;
            let axis = linspace(0.0, end, n);
            assert_eq!(axis.first(), Some(&0.0));
            assert_eq!(axis.last(), Some(&end));
            assert!(axis.iter().all(|&v| (0.0..=end).contains(&v)));
        }
    }

    #[test]
    fn resize_grid_upsample() -> Result<(), InterpolationError> {
        let src = RectangularGrid::new(
            (vec![0.0, 1.0], vec![0.0, 1.0]),
            Some(array![[0.0, 255.0], [255.0, 0.0]]),
        )?;

        let dst = resize_grid(&src, 3, 3, InterpolationMode::Bilinear)?;
        assert_eq!(dst.shape(), (3, 3));
        assert_eq!(dst.points(), (&[0.0, 0.5, 1.0][..], &[0.0, 0.5, 1.0][..]));
        assert_eq!(dst.get_value(0.5, 0.5)?, 127.5);
        assert_eq!(dst.get_value(0.0, 0.0)?, 0.0);
        assert_eq!(dst.get_value(0.0, 1.0)?, 255.0);
        assert_eq!(dst.get_value(1.0, 0.0)?, 255.0);
        assert_eq!(dst.get_value(1.0, 1.0)?, 0.0);
        Ok(())
    }

    #[test]
    fn resize_grid_keeps_coordinate_range() -> Result<(), InterpolationError> {
        let src = RectangularGrid::new(
            (vec![10.0, 12.0, 20.0], vec![-1.0, 1.0]),
            Some(array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]),
        )?;

        let dst = resize_grid(&src, 2, 5, InterpolationMode::Bilinear)?;
        let (y_axis, x_axis) = dst.points();
        assert_eq!(y_axis, &[10.0, 20.0]);
        assert_eq!(x_axis, &[-1.0, -0.5, 0.0, 0.5, 1.0]);
        let expected = array![[1.0, 1.0, 1.0, 1.0, 1.0], [3.0, 3.0, 3.0, 3.0, 3.0]];
        assert_eq!(dst.values(), Some(&expected));
        Ok(())
    }

    #[test]
    fn resize_grid_zero_size() -> Result<(), InterpolationError> {
        let src = RectangularGrid::new((vec![0.0], vec![0.0]), Some(array![[1.0]]))?;
        assert!(matches!(
            resize_grid(&src, 0, 2, InterpolationMode::Bilinear),
            Err(InterpolationError::InvalidGrid(_))
        ));
        Ok(())
    }

    #[test]
    fn resize_image_identity() -> Result<(), InterpolationError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..36).map(|v| (v * 7) as u8).collect(),
        )?;

        let resized = resize_image(&image, 3, 4, "bilinear")?;
        assert_eq!(resized, image);
        Ok(())
    }

    #[test]
    fn resize_image_upsample_scenario() -> Result<(), InterpolationError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 255, 255, 0],
        )?;

        let resized = resize_image(&image, 3, 3, "bilinear")?;
        assert_eq!(resized.size(), ImageSize { width: 3, height: 3 });
        assert_eq!(resized.get([1, 1, 0]), Some(&128));
        assert_eq!(resized.get([0, 0, 0]), Some(&0));
        assert_eq!(resized.get([0, 2, 0]), Some(&255));
        assert_eq!(resized.get([2, 0, 0]), Some(&255));
        assert_eq!(resized.get([2, 2, 0]), Some(&0));

        // the float pipeline keeps the exact centre value
        let resized_f32 = resize_image(&image.cast::<f32>()?, 3, 3, "bilinear")?;
        assert_relative_eq!(resized_f32.get([1, 1, 0]).copied().unwrap_or(0.0), 127.5);
        Ok(())
    }

    #[test]
    fn resize_image_shapes() -> Result<(), InterpolationError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).collect(),
        )?;

        let small = resize_image(&image, 2, 2, "bilinear")?;
        assert_eq!(small.size(), ImageSize { width: 2, height: 2 });
        assert_eq!(small.as_slice(), &[0, 3, 12, 15]);

        let large = resize_image(&image, 8, 8, "bilinear")?;
        assert_eq!(large.size(), ImageSize { width: 8, height: 8 });

        let stretched = resize_image(&image, 2, 7, "bilinear")?;
        assert_eq!(stretched.size(), ImageSize { width: 7, height: 2 });
        Ok(())
    }

    #[test]
    fn resize_image_rgb_channels_independent() -> Result<(), InterpolationError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 100, 200, 100, 100, 0],
        )?;

        let resized = resize_image(&image, 1, 3, "bilinear")?;
        assert_eq!(resized.as_slice(), &[0, 100, 200, 50, 100, 100, 100, 100, 0]);
        Ok(())
    }

    #[test]
    fn resize_image_unsupported_algorithm() -> Result<(), InterpolationError> {
        // an empty image would fail grid validation, so the error proves the
        // algorithm is checked first
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;

        assert!(matches!(
            resize_image(&image, 2, 2, "nearest"),
            Err(InterpolationError::UnsupportedAlgorithm(name)) if name == "nearest"
        ));
        assert!(matches!(
            resize_image(&image, 2, 2, "bilinear"),
            Err(InterpolationError::InvalidGrid(_))
        ));
        Ok(())
    }
}

use std::path::PathBuf;

use argh::FromArgs;
use rastergrid_image::{Image, ImageSize};
use rastergrid_interp::{resize_image, InterpolationError, InterpolationMode};
use rastergrid_io::functional::{self as F, GenericImage};
use rastergrid_io::IoError;

/// An error type for the command line.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Error while resampling the image.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Error while reading or writing the image.
    #[error(transparent)]
    Io(#[from] IoError),
}

#[derive(FromArgs, Debug, PartialEq)]
/// Interpolation instrument for images.
pub struct Args {
    /// the command to run
    #[argh(subcommand)]
    pub command: Command,
}

/// The commands of the `rastergrid` binary.
#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum Command {
    /// Resize an image.
    Resize(ResizeArgs),
}

#[derive(FromArgs, Debug, PartialEq)]
/// Resize an image to the given dimensions using interpolation.
#[argh(subcommand, name = "resize")]
pub struct ResizeArgs {
    /// path to the input image
    #[argh(positional)]
    pub input_path: PathBuf,

    /// path where the resized image will be saved
    #[argh(positional)]
    pub output_path: PathBuf,

    /// target width in pixels, defaults to the input width
    #[argh(option, from_str_fn(parse_dimension))]
    pub width: Option<usize>,

    /// target height in pixels, defaults to the input height
    #[argh(option, from_str_fn(parse_dimension))]
    pub height: Option<usize>,

    /// interpolation algorithm to use [default: bilinear]
    #[argh(option, default = "InterpolationMode::default()")]
    pub algorithm: InterpolationMode,
}

fn parse_dimension(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!(
            "Width and height must be positive integers, got '{value}'"
        )),
    }
}

impl ResizeArgs {
    /// The output size for an input of size `input`.
    ///
    /// A missing width or height keeps the input dimension; the image is
    /// stretched to the result without keeping the aspect ratio.
    pub fn target_size(&self, input: ImageSize) -> ImageSize {
        ImageSize {
            width: self.width.unwrap_or(input.width),
            height: self.height.unwrap_or(input.height),
        }
    }
}

fn resize_channels<const C: usize>(
    image: &Image<u8, C>,
    size: ImageSize,
    mode: InterpolationMode,
) -> Result<Image<u8, C>, InterpolationError> {
    resize_image(image, size.height, size.width, mode.name())
}

/// Read the input image, resize it and write the result.
///
/// # Returns
///
/// The size of the written image.
pub fn resize(args: &ResizeArgs) -> Result<ImageSize, CliError> {
    let image = F::read_image_any(&args.input_path)?;
    let size = args.target_size(image.size());

    log::info!(
        "resizing {} from {} to {} with {}",
        args.input_path.display(),
        image.size(),
        size,
        args.algorithm
    );

    let resized = match image {
        GenericImage::L8(image) => GenericImage::L8(resize_channels(&image, size, args.algorithm)?),
        GenericImage::La8(image) => {
            GenericImage::La8(resize_channels(&image, size, args.algorithm)?)
        }
        GenericImage::Rgb8(image) => {
            GenericImage::Rgb8(resize_channels(&image, size, args.algorithm)?)
        }
        GenericImage::Rgba8(image) => {
            GenericImage::Rgba8(resize_channels(&image, size, args.algorithm)?)
        }
    };

    F::write_image_any(&args.output_path, &resized)?;

    Ok(resized.size())
}

#[cfg(test)]
mod tests {
    use super::parse_dimension;

    #[test]
    fn dimension_parsing() {
        assert_eq!(parse_dimension("12"), Ok(12));
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("-100").is_err());
        assert!(parse_dimension("ten").is_err());
    }
}

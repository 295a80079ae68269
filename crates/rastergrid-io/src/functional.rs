use std::path::Path;

use rastergrid_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded 8-bit image with the channel layout of the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(image) => image.size(),
            GenericImage::La8(image) => image.size(),
            GenericImage::Rgb8(image) => image.size(),
            GenericImage::Rgba8(image) => image.size(),
        }
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(image) => image.num_channels(),
            GenericImage::La8(image) => image.num_channels(),
            GenericImage::Rgb8(image) => image.num_channels(),
            GenericImage::Rgba8(image) => image.num_channels(),
        }
    }
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content and the channel layout of the
/// file is kept: grayscale decodes to [`GenericImage::L8`] or
/// [`GenericImage::La8`], color to [`GenericImage::Rgb8`] or
/// [`GenericImage::Rgba8`]. Higher bit depths are reduced to 8 bits.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if the path does not exist.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let color = img.color();
    log::debug!("decoded {} as {color:?} {size}", file_path.display());

    let image = match (color.channel_count(), color.has_alpha()) {
        (1, _) => GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?),
        (2, _) => GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?),
        (_, true) => GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?),
        _ => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
    };

    Ok(image)
}

/// Writes an 8-bit image to the given file path.
///
/// The encoding format is selected from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The image with 1 (gray), 2 (gray alpha), 3 (rgb) or 4 (rgba) channels.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedChannels`] for any other channel count.
pub fn write_image<const C: usize>(
    file_path: impl AsRef<Path>,
    image: &Image<u8, C>,
) -> Result<(), IoError> {
    let color = match C {
        1 => image::ColorType::L8,
        2 => image::ColorType::La8,
        3 => image::ColorType::Rgb8,
        4 => image::ColorType::Rgba8,
        _ => return Err(IoError::UnsupportedChannels(C)),
    };

    let [width, height] = <[u32; 2]>::from(image.size());
    image::save_buffer(file_path.as_ref(), image.as_slice(), width, height, color)?;

    Ok(())
}

/// Writes a [`GenericImage`] to the given file path.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    match image {
        GenericImage::L8(image) => write_image(file_path, image),
        GenericImage::La8(image) => write_image(file_path, image),
        GenericImage::Rgb8(image) => write_image(file_path, image),
        GenericImage::Rgba8(image) => write_image(file_path, image),
    }
}

use std::path::Path;

use warpkit_image::{Image, ImageSize};

use crate::error::IoError;

/// An 8-bit image as decoded from disk, with the channel layout of the file.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
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
            GenericImage::Rgb8(image) => image.size(),
            GenericImage::Rgba8(image) => image.size(),
        }
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) => 1,
            GenericImage::Rgb8(_) => 3,
            GenericImage::Rgba8(_) => 4,
        }
    }
}

impl From<Image<u8, 1>> for GenericImage {
    fn from(image: Image<u8, 1>) -> Self {
        GenericImage::L8(image)
    }
}

impl From<Image<u8, 3>> for GenericImage {
    fn from(image: Image<u8, 3>) -> Self {
        GenericImage::Rgb8(image)
    }
}

impl From<Image<u8, 4>> for GenericImage {
    fn from(image: Image<u8, 4>) -> Self {
        GenericImage::Rgba8(image)
    }
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content. Grayscale files decode to
/// [`GenericImage::L8`], files with an alpha channel to [`GenericImage::Rgba8`]
/// and everything else to [`GenericImage::Rgb8`]. Deeper bit depths are
/// reduced to 8 bits.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap[..]))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    let color = img.color();

    log::debug!("read {}: {} {:?}", file_path.display(), size, color);

    let image = if color.has_alpha() {
        GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
    } else if color.has_color() {
        GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?)
    } else {
        GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?)
    };

    Ok(image)
}

/// Reads an image from the given file path as RGB.
///
/// Grayscale images are expanded to three channels and alpha is dropped.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let image = match read_image_any(file_path)? {
        GenericImage::Rgb8(image) => image,
        GenericImage::L8(image) => {
            Image::from_fn(image.size(), |x, y| [image.pixel(x, y)[0]; 3])?
        }
        GenericImage::Rgba8(image) => Image::from_fn(image.size(), |x, y| {
            let p = image.pixel(x, y);
            [p[0], p[1], p[2]]
        })?,
    };
    Ok(image)
}

/// Writes an image to the given file path.
///
/// The format follows the file extension, `png`, `jpg` or `jpeg`. JPEG files
/// cannot store an alpha channel.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to encode.
pub fn write_image(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let supported = file_path.extension().is_some_and(|ext| {
        let ext = ext.to_ascii_lowercase();
        ext == "png" || ext == "jpg" || ext == "jpeg"
    });
    if !supported {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let size = image.size();
    let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height)) else {
        return Err(IoError::ImageTooLarge(size.width, size.height));
    };

    let (buf, color) = match image {
        GenericImage::L8(image) => (image.as_slice(), image::ColorType::L8),
        GenericImage::Rgb8(image) => (image.as_slice(), image::ColorType::Rgb8),
        GenericImage::Rgba8(image) => (image.as_slice(), image::ColorType::Rgba8),
    };

    log::debug!("write {}: {} {:?}", file_path.display(), size, color);

    image::save_buffer(file_path, buf, width, height, color)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern<const C: usize>(width: usize, height: usize) -> Result<Image<u8, C>, IoError> {
        Ok(Image::from_fn([width, height].into(), |x, y| {
            let mut pixel = [0u8; C];
            for (ch, v) in pixel.iter_mut().enumerate() {
                *v = ((x * 13 + y * 7 + ch * 50) % 256) as u8;
            }
            pixel
        })?)
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        for image in [
            GenericImage::from(pattern::<1>(17, 9)?),
            GenericImage::from(pattern::<3>(17, 9)?),
            GenericImage::from(pattern::<4>(17, 9)?),
        ] {
            let file_path = tmp_dir
                .path()
                .join(format!("pattern_{}.png", image.num_channels()));
            write_image(&file_path, &image)?;
            assert!(file_path.exists(), "File does not exist: {file_path:?}");

            let image_back = read_image_any(&file_path)?;
            assert_eq!(image_back, image);
        }

        Ok(())
    }

    #[test]
    fn read_write_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("pattern.jpg");

        let image = GenericImage::from(pattern::<3>(32, 24)?);
        write_image(&file_path, &image)?;

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.num_channels(), 3);

        let rgb = read_image_rgb8(&file_path)?;
        assert_eq!(rgb.size(), image.size());
        Ok(())
    }

    #[test]
    fn read_gray_as_rgb() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let gray = pattern::<1>(5, 4)?;
        write_image(&file_path, &GenericImage::from(gray.clone()))?;

        let rgb = read_image_rgb8(&file_path)?;
        assert_eq!(rgb.pixel(3, 2), &[gray.pixel(3, 2)[0]; 3]);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let res = read_image_any("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn unsupported_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = GenericImage::from(pattern::<3>(4, 4)?);

        for name in ["image.bmp", "image"] {
            let res = write_image(tmp_dir.path().join(name), &image);
            assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        }
        Ok(())
    }
}

use crate::error::MediaConvError;
use crate::ffmpeg;
use image::{DynamicImage, ImageFormat};
use resvg::{tiny_skia, usvg};
use std::fmt;
use std::fs;
use std::path::Path;

/// Decode a WebP file and re-encode it as PNG.
///
/// WebP carries RGB or RGBA pixels; anything else the decoder hands back is
/// normalized to RGBA8 so transparency survives the re-encode.
pub fn convert_webp_to_png(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    let img = image::open(input).map_err(|e| {
        MediaConvError::ConversionFailed(format!("failed to decode {}: {e}", input.display()))
    })?;

    let img = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    };

    img.save_with_format(output, ImageFormat::Png).map_err(|e| {
        MediaConvError::ConversionFailed(format!("failed to write {}: {e}", output.display()))
    })?;

    Ok(())
}

/// Rasterize an SVG document at its intrinsic pixel size and write a PNG.
pub fn convert_svg_to_png(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    let data = fs::read(input)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|e| {
        MediaConvError::ConversionFailed(format!("invalid SVG {}: {e}", input.display()))
    })?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        MediaConvError::ConversionFailed(format!(
            "SVG has no pixel size: {}",
            input.display()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.save_png(output).map_err(|e| {
        MediaConvError::ConversionFailed(format!("failed to write {}: {e}", output.display()))
    })?;

    Ok(())
}

/// Decode AVIF by shelling out to ffmpeg. The image stack has no AVIF
/// decoder, and ffmpeg is already a required collaborator for audio.
pub fn convert_avif_to_png(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    ffmpeg::ensure_available("AVIF images")?;
    ffmpeg::transcode(input, &[], output)
}

/// Basic facts about an image file.
#[derive(Debug)]
pub struct ImageInfo {
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    pub color: image::ColorType,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {:?}", self.width, self.height, self.color)?;
        if let Some(format) = self.format {
            write!(f, " ({format:?})")?;
        }
        Ok(())
    }
}

/// Inspect an image file: container format, dimensions, pixel layout.
pub fn probe(path: &Path) -> Result<ImageInfo, MediaConvError> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();

    let img = reader.decode().map_err(|e| {
        MediaConvError::ConversionFailed(format!("failed to decode {}: {e}", path.display()))
    })?;

    Ok(ImageInfo {
        format,
        width: img.width(),
        height: img.height(),
        color: img.color(),
    })
}

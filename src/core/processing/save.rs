use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::Result;

pub fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory {:?}", parent);
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Encoders limited to 8-bit RGB
fn needs_rgb8(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg | ImageFormat::Pnm)
}

pub fn save_with_format(img: &DynamicImage, output: &Path, format: ImageFormat) -> Result<()> {
    ensure_parent_dir(output)?;
    if needs_rgb8(format) {
        DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(output, format)?;
    } else {
        img.save_with_format(output, format)?;
    }
    Ok(())
}

/// Save using the format implied by the output extension, overwriting any existing file.
pub fn save_by_extension(img: &DynamicImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output)?;
    save_with_format(img, output, format)
}

pub fn save_png(img: &DynamicImage, output: &Path) -> Result<()> {
    save_with_format(img, output, ImageFormat::Png)
}

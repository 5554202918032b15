use image::{DynamicImage, GenericImageView};
use tracing::info;

use crate::core::geometry::{PixelBounds, center_crop_rect};
use crate::core::processing::resize::{resize_image, restore_color};
use crate::error::Result;
use crate::types::ResampleFilter;

/// Extract the centered viewport for `zoom` and resample it back to the source size.
/// Returns the magnified image, in the source's color type, together with the
/// pixel region that was extracted.
pub fn crop_center_raster(
    src: &DynamicImage,
    zoom: f64,
    filter: ResampleFilter,
) -> Result<(DynamicImage, PixelBounds)> {
    let (width, height) = src.dimensions();
    let rect = center_crop_rect(width, height, zoom)?;
    let bounds = rect.pixel_bounds(width, height)?;

    info!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        width, height, bounds.width, bounds.height, bounds.x, bounds.y
    );

    let resampled = resize_image(src, Some(bounds), width, height, filter)?;
    Ok((restore_color(resampled, src.color()), bounds))
}

use fast_image_resize::{
    PixelType, ResizeOptions, Resizer,
    images::{Image, ImageRef},
};
use image::{ColorType, DynamicImage, ImageBuffer, Rgba, RgbaImage};
use tracing::debug;

use crate::core::geometry::PixelBounds;
use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

fn resize_options(
    region: Option<PixelBounds>,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<ResizeOptions> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::ZeroSize {
            width: target_width,
            height: target_height,
        });
    }

    let mut options = ResizeOptions::new().resize_alg(filter.resize_alg());
    if let Some(r) = region {
        options = options.crop(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
    }
    Ok(options)
}

/// Resample `src` (or only its `region`) to `target_width`x`target_height`.
///
/// Alpha is premultiplied for the convolution and restored afterwards.
pub fn resize_rgba8(
    src: &RgbaImage,
    region: Option<PixelBounds>,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let options = resize_options(region, target_width, target_height, filter)?;

    let (src_width, src_height) = src.dimensions();
    debug!(
        "Resampling {}x{} (region {:?}) to {}x{} with {}",
        src_width, src_height, region, target_width, target_height, filter
    );

    let src_image = ImageRef::new(src_width, src_height, src.as_raw(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{} RGBA",
            target_width, target_height
        ))
    })
}

/// 16-bit counterpart of [`resize_rgba8`].
pub fn resize_rgba16(
    src: &Rgba16Image,
    region: Option<PixelBounds>,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<Rgba16Image> {
    let options = resize_options(region, target_width, target_height, filter)?;

    let (src_width, src_height) = src.dimensions();
    debug!(
        "Resampling {}x{} U16 (region {:?}) to {}x{} with {}",
        src_width, src_height, region, target_width, target_height, filter
    );

    // fast_image_resize takes u16 samples as little-endian bytes
    let mut src_bytes = Vec::with_capacity(src.as_raw().len() * 2);
    for &v in src.as_raw() {
        src_bytes.extend_from_slice(&v.to_le_bytes());
    }

    let src_image = ImageRef::new(src_width, src_height, &src_bytes, PixelType::U16x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U16x4);
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &options)?;

    let samples: Vec<u16> = dst_image
        .into_vec()
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    Rgba16Image::from_raw(target_width, target_height, samples).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{} RGBA16",
            target_width, target_height
        ))
    })
}

fn is_high_depth(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::L16
            | ColorType::La16
            | ColorType::Rgb16
            | ColorType::Rgba16
            | ColorType::Rgb32F
            | ColorType::Rgba32F
    )
}

/// Convert to the RGBA layout the resizer works in: 16-bit for deep sources, 8-bit otherwise.
pub fn working_copy(src: &DynamicImage) -> DynamicImage {
    if is_high_depth(src.color()) {
        DynamicImage::ImageRgba16(src.to_rgba16())
    } else {
        DynamicImage::ImageRgba8(src.to_rgba8())
    }
}

/// Resample any decoded image; RGBA8 and RGBA16 buffers are read in place.
/// The result is RGBA at the source's bit depth; see [`restore_color`].
pub fn resize_image(
    src: &DynamicImage,
    region: Option<PixelBounds>,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    match src {
        DynamicImage::ImageRgba8(buf) => Ok(DynamicImage::ImageRgba8(resize_rgba8(
            buf,
            region,
            target_width,
            target_height,
            filter,
        )?)),
        DynamicImage::ImageRgba16(buf) => Ok(DynamicImage::ImageRgba16(resize_rgba16(
            buf,
            region,
            target_width,
            target_height,
            filter,
        )?)),
        other => resize_image(
            &working_copy(other),
            region,
            target_width,
            target_height,
            filter,
        ),
    }
}

/// Convert a resized RGBA image back to the source's color type.
/// Palette sources are decoded to RGB(A) by `image`, so they stay RGB(A).
pub fn restore_color(img: DynamicImage, color: ColorType) -> DynamicImage {
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(img.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(img.to_rgb8()),
        ColorType::L16 => DynamicImage::ImageLuma16(img.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(img.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(img.to_rgb16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(img.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(img.to_rgba32f()),
        _ => img,
    }
}

/// Square resample of the whole image, the shape every launcher icon takes.
pub fn resize_square(src: &DynamicImage, size: u32, filter: ResampleFilter) -> Result<DynamicImage> {
    resize_image(src, None, size, size, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Luma};

    #[test]
    fn test_resize_dimensions() {
        let src = RgbaImage::from_pixel(64, 32, Rgba([200, 100, 50, 255]));
        let out = resize_rgba8(&src, None, 16, 40, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (16, 40));
        // A flat image stays flat, up to fixed-point rounding
        let px = out.get_pixel(7, 20);
        for (got, want) in px.0.iter().zip([200u8, 100, 50, 255]) {
            assert!(got.abs_diff(want) <= 1, "{:?}", px);
        }
    }

    #[test]
    fn test_region_selects_center() {
        // Red frame around a green center block
        let mut src = RgbaImage::from_pixel(30, 30, Rgba([255, 0, 0, 255]));
        for y in 10..20 {
            for x in 10..20 {
                src.put_pixel(x, y, Rgba([0, 255, 0, 255]));
            }
        }
        let region = PixelBounds {
            x: 10,
            y: 10,
            width: 10,
            height: 10,
        };
        let out = resize_rgba8(&src, Some(region), 30, 30, ResampleFilter::Nearest).unwrap();
        assert_eq!(out.dimensions(), (30, 30));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*out.get_pixel(29, 29), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_square_forces_square_output() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 60, Rgba([1, 2, 3, 255])));
        let out = resize_square(&src, 48, ResampleFilter::CatmullRom).unwrap();
        assert_eq!(out.dimensions(), (48, 48));
    }

    #[test]
    fn test_zero_target_rejected() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        assert!(matches!(
            resize_square(&src, 0, ResampleFilter::Lanczos3),
            Err(Error::ZeroSize { .. })
        ));
    }

    #[test]
    fn test_sixteen_bit_keeps_depth() {
        let src = Rgba16Image::from_pixel(40, 40, Rgba([40000, 1000, 65535, 65535]));
        let out = resize_rgba16(&src, None, 10, 10, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
        let px = out.get_pixel(5, 5);
        for (got, want) in px.0.iter().zip([40000u16, 1000, 65535, 65535]) {
            assert!(got.abs_diff(want) <= 2, "{:?}", px);
        }
    }

    #[test]
    fn test_grayscale_round_trips_color_type() {
        let gray = DynamicImage::ImageLuma16(ImageBuffer::from_pixel(20, 20, Luma([30000u16])));
        let resized = resize_image(&gray, None, 8, 8, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(resized.color(), ColorType::Rgba16);

        let restored = restore_color(resized, gray.color());
        assert_eq!(restored.color(), ColorType::L16);
        assert_eq!(restored.dimensions(), (8, 8));

        let gray8 = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(20, 20, Luma([90u8])));
        let resized = resize_image(&gray8, None, 8, 8, ResampleFilter::Nearest).unwrap();
        assert_eq!(restore_color(resized, gray8.color()).color(), ColorType::L8);
    }
}

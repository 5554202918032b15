//! Center-crop geometry: the fractional viewport for a zoom factor and the
//! whole-pixel region that is actually extracted from the source.
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Integer pixel region inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Centered viewport in fractional source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Snap edges to the nearest pixel (halves to even) and clamp to the `(width, height)` image.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> Result<PixelBounds> {
        let snap = |v: f64, max: u32| v.round_ties_even().clamp(0.0, max as f64) as u32;
        let x0 = snap(self.left, width);
        let y0 = snap(self.top, height);
        let x1 = snap(self.right, width);
        let y1 = snap(self.bottom, height);

        let bounds = PixelBounds {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        };
        if bounds.width == 0 || bounds.height == 0 {
            return Err(Error::ZeroSize {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(bounds)
    }
}

pub fn validate_zoom(zoom: f64) -> Result<()> {
    if !zoom.is_finite() || zoom < 1.0 {
        return Err(Error::invalid("zoom", zoom));
    }
    Ok(())
}

pub fn center_crop_rect(width: u32, height: u32, zoom: f64) -> Result<CropRect> {
    validate_zoom(zoom)?;
    if width == 0 || height == 0 {
        return Err(Error::ZeroSize { width, height });
    }

    let (w, h) = (width as f64, height as f64);
    let view_w = w / zoom;
    let view_h = h / zoom;
    let left = (w - view_w) / 2.0;
    let top = (h - view_h) / 2.0;

    let rect = CropRect {
        left,
        top,
        right: left + view_w,
        bottom: top + view_h,
    };
    debug!(
        "Viewport for {}x{} at {}x zoom: ({:.1},{:.1})-({:.1},{:.1})",
        width, height, zoom, rect.left, rect.top, rect.right, rect.bottom
    );
    Ok(rect)
}

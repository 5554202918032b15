use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{IconSize, ResampleFilter};

/// Zoom used when none is given; slightly above 1.5 to clear a logo's padding ring.
pub const DEFAULT_ZOOM: f64 = 1.55;

pub const DEFAULT_ICON_FILE_NAME: &str = "ic_launcher.png";

/// Parameters for the center crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropParams {
    /// Viewport fraction per axis is `1 / zoom`; 1.0 keeps the whole image
    pub zoom: f64,
    pub filter: ResampleFilter,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

/// Parameters for emitting one square icon per resolution class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSetParams {
    pub source: PathBuf,
    /// Resource root; each entry is written to `res_dir/<name>/<file_name>`
    pub res_dir: PathBuf,
    pub file_name: String,
    pub sizes: Vec<IconSize>,
    pub filter: ResampleFilter,
}

impl Default for IconSetParams {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets/images/logo_clean.png"),
            res_dir: PathBuf::from("android/app/src/main/res"),
            file_name: DEFAULT_ICON_FILE_NAME.to_string(),
            sizes: IconSize::android_defaults(),
            filter: ResampleFilter::Lanczos3,
        }
    }
}

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::{error, info};

use crate::error::{Error, Result};

/// Decode the source raster, reporting a missing file distinctly from a decode failure.
pub fn open_source(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        error!("Source image not found at {:?}", path);
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    info!("Opened source image {:?}: {}x{}", path, width, height);
    Ok(img)
}

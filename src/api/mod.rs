//! High-level library API: crop a logo toward its center and emit a launcher
//! icon set from it. Prefer these entrypoints over the low-level `core` modules.
use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, GenericImageView};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::geometry::{PixelBounds, validate_zoom};
use crate::core::params::{CropParams, IconSetParams};
use crate::core::processing::crop::crop_center_raster;
use crate::core::processing::resize::{resize_square, restore_color, working_copy};
use crate::core::processing::save::{save_by_extension, save_png};
use crate::error::{Error, Result};
use crate::io::open_source;
use crate::types::{IconSize, ResampleFilter, is_single_component};

/// What a successful crop wrote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    /// Pixel region of the source that was magnified
    pub region: PixelBounds,
}

/// Crop `source` toward its center by `zoom` and write it to `destination` at the original size.
pub fn crop_center(source: &Path, destination: &Path, zoom: f64) -> Result<CropOutcome> {
    let params = CropParams {
        zoom,
        ..CropParams::default()
    };
    crop_center_with_params(source, destination, &params)
}

pub fn crop_center_with_params(
    source: &Path,
    destination: &Path,
    params: &CropParams,
) -> Result<CropOutcome> {
    // Fail on a bad zoom before touching the filesystem
    validate_zoom(params.zoom)?;

    let img = open_source(source)?;
    let (resampled, region) = crop_center_raster(&img, params.zoom, params.filter)?;
    save_by_extension(&resampled, destination)?;

    info!(
        "Successfully cropped {:?} to {:?} with {}x zoom",
        source, destination, params.zoom
    );

    Ok(CropOutcome {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        width: resampled.width(),
        height: resampled.height(),
        zoom: params.zoom,
        region,
    })
}

/// In-memory crop (no disk I/O). The result keeps the color type of `img`.
pub fn crop_center_image(img: &DynamicImage, params: &CropParams) -> Result<DynamicImage> {
    let (resampled, _) = crop_center_raster(img, params.zoom, params.filter)?;
    Ok(resampled)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum EntryStatus {
    Written,
    Failed(String),
    /// Not attempted because an earlier entry failed
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub name: String,
    pub size: u32,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// Per-entry result of an icon set run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub entries: Vec<EntryOutcome>,
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl EmitReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }

    fn record(&mut self, entry: &IconSize, path: PathBuf, status: EntryStatus) {
        match status {
            EntryStatus::Written => self.written += 1,
            EntryStatus::Failed(_) => self.failed += 1,
            EntryStatus::Skipped => self.skipped += 1,
        }
        self.entries.push(EntryOutcome {
            name: entry.name.clone(),
            size: entry.size,
            path,
            status,
        });
    }
}

fn validate_icon_set(params: &IconSetParams) -> Result<()> {
    if params.sizes.is_empty() {
        return Err(Error::invalid("sizes", "[]"));
    }
    if !is_single_component(&params.file_name) {
        return Err(Error::invalid("file_name", &params.file_name));
    }
    for entry in &params.sizes {
        entry.validate()?;
    }
    Ok(())
}

fn emit_entry(
    working: &DynamicImage,
    source_color: ColorType,
    target_path: &Path,
    entry: &IconSize,
    filter: ResampleFilter,
) -> Result<()> {
    let resized = restore_color(resize_square(working, entry.size, filter)?, source_color);
    save_png(&resized, target_path)?;
    info!(
        "Saved {} ({}x{})",
        target_path.display(),
        entry.size,
        entry.size
    );
    Ok(())
}

/// Resize an already decoded image into every entry of `params.sizes`.
/// `params.source` is not read; icons keep the color type of `src`.
///
/// Each entry is resized from the full source independently. When
/// `continue_on_error` is false the first failure marks every later entry as
/// skipped; otherwise all entries are attempted.
pub fn emit_icon_set(
    src: &DynamicImage,
    params: &IconSetParams,
    continue_on_error: bool,
) -> Result<EmitReport> {
    validate_icon_set(params)?;
    emit_validated(src, params, continue_on_error)
}

fn emit_validated(
    src: &DynamicImage,
    params: &IconSetParams,
    continue_on_error: bool,
) -> Result<EmitReport> {
    let (width, height) = src.dimensions();
    if width != height {
        warn!(
            "Source is {}x{}, not square; icons will be stretched to square",
            width, height
        );
    }

    // Converted once; every size resamples from this buffer
    let working = working_copy(src);
    let mut report = EmitReport::default();
    let mut aborted = false;

    for entry in &params.sizes {
        let target_path = params.res_dir.join(&entry.name).join(&params.file_name);
        if aborted {
            report.record(entry, target_path, EntryStatus::Skipped);
            continue;
        }

        match emit_entry(&working, src.color(), &target_path, entry, params.filter) {
            Ok(()) => report.record(entry, target_path, EntryStatus::Written),
            Err(e) => {
                warn!("Failed to write {}: {}", target_path.display(), e);
                report.record(entry, target_path, EntryStatus::Failed(e.to_string()));
                aborted = !continue_on_error;
            }
        }
    }

    info!(
        "Icon set complete: written={} failed={} skipped={}",
        report.written, report.failed, report.skipped
    );
    Ok(report)
}

/// Decode `params.source` once and emit the whole icon set from it.
///
/// A missing or undecodable source is returned as an error before anything is
/// written; per-entry failures are reported in the [`EmitReport`].
pub fn fix_icons(params: &IconSetParams, continue_on_error: bool) -> Result<EmitReport> {
    validate_icon_set(params)?;
    let src = open_source(&params.source)?;
    emit_validated(&src, params, continue_on_error)
}

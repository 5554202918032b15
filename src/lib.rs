#![doc = r#"
launcher-icons — prepare an application logo for use as an Android launcher icon.

Two independent steps, normally run one after the other:

1. **Center crop**: cut a centered viewport of `1 / zoom` of each dimension out of
   the logo and resample it back to the original size, so the artwork fills more
   of the frame.
2. **Icon set**: resize the cropped logo to every `mipmap-*` density
   (48, 72, 96, 144 and 192 px) and write `ic_launcher.png` into each directory.

Resampling uses `fast_image_resize` with Lanczos3 by default.

Crop a logo
-----------
```rust,no_run
use std::path::Path;

fn main() -> launcher_icons::Result<()> {
    let outcome = launcher_icons::crop_center(
        Path::new("assets/images/logo.png"),
        Path::new("assets/images/logo_clean.png"),
        1.55,
    )?;
    println!("magnified region {:?}", outcome.region);
    Ok(())
}
```

Emit the icon set
-----------------
```rust,no_run
use std::path::PathBuf;
use launcher_icons::{IconSetParams, fix_icons};

fn main() -> launcher_icons::Result<()> {
    let params = IconSetParams {
        source: PathBuf::from("assets/images/logo_clean.png"),
        res_dir: PathBuf::from("android/app/src/main/res"),
        ..IconSetParams::default()
    };

    let report = fix_icons(&params, false)?;
    println!("written={} failed={} skipped={}", report.written, report.failed, report.skipped);
    Ok(())
}
```

Error handling
--------------
All public functions return `launcher_icons::Result<T>`. A missing source is
`Error::SourceNotFound`; decode and encode failures are `Error::Image`. Failures
of individual icon sizes do not abort the call; they are recorded per entry in
the returned [`EmitReport`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop geometry, resampling, and save helpers.
- [`types`] — `ResampleFilter` and `IconSize`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use core::geometry::{CropRect, PixelBounds, center_crop_rect};
pub use core::params::{CropParams, DEFAULT_ICON_FILE_NAME, DEFAULT_ZOOM, IconSetParams};
pub use error::{Error, Result};
pub use types::{IconSize, ResampleFilter};

pub use api::{
    CropOutcome, EmitReport, EntryOutcome, EntryStatus, crop_center, crop_center_image,
    crop_center_with_params, emit_icon_set, fix_icons,
};

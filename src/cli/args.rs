use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use launcher_icons::{DEFAULT_ICON_FILE_NAME, DEFAULT_ZOOM, IconSize, ResampleFilter};

#[derive(Parser)]
#[command(name = "launcher-icons", version, about = "Crop a logo and emit Android launcher icons")]
pub struct CliArgs {
    /// Verbose logging (debug level); RUST_LOG overrides
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crop toward the center and resample back to the original size
    Crop(CropArgs),
    /// Resize a square logo into every mipmap density
    Icons(IconsArgs),
}

#[derive(Args)]
pub struct CropArgs {
    /// Source image
    #[arg(short, long, default_value = "assets/images/logo.png")]
    pub input: PathBuf,

    /// Destination image; format follows the extension
    #[arg(short, long, default_value = "assets/images/logo_clean.png")]
    pub output: PathBuf,

    /// Zoom factor (>= 1.0); each dimension keeps 1/zoom of the source
    #[arg(short, long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,
}

#[derive(Args)]
pub struct IconsArgs {
    /// Cropped source image, expected square
    #[arg(short, long, default_value = "assets/images/logo_clean.png")]
    pub input: PathBuf,

    /// Android resource root holding the mipmap-* directories
    #[arg(long, default_value = "android/app/src/main/res")]
    pub res_dir: PathBuf,

    /// File name written into each density directory
    #[arg(long, default_value = DEFAULT_ICON_FILE_NAME)]
    pub file_name: String,

    /// Output entry as NAME=PX (repeatable). Replaces the default
    /// mdpi..xxxhdpi table (48, 72, 96, 144, 192) when given
    #[arg(long = "size", value_name = "NAME=PX")]
    pub sizes: Vec<IconSize>,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Keep writing the remaining sizes after one fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print the per-size report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_defaults() {
        let args = CliArgs::try_parse_from(["launcher-icons", "crop"]).unwrap();
        let Command::Crop(crop) = args.command else {
            panic!("expected crop subcommand");
        };
        assert_eq!(crop.zoom, DEFAULT_ZOOM);
        assert_eq!(crop.filter, ResampleFilter::Lanczos3);
        assert_eq!(crop.output, PathBuf::from("assets/images/logo_clean.png"));
    }

    #[test]
    fn test_icons_sizes_parse() {
        let args = CliArgs::try_parse_from([
            "launcher-icons",
            "--log",
            "icons",
            "--size",
            "mipmap-mdpi=48",
            "--size",
            "mipmap-huge=512",
            "--filter",
            "catmull-rom",
        ])
        .unwrap();
        assert!(args.log);
        let Command::Icons(icons) = args.command else {
            panic!("expected icons subcommand");
        };
        assert_eq!(
            icons.sizes,
            vec![IconSize::new("mipmap-mdpi", 48), IconSize::new("mipmap-huge", 512)]
        );
        assert_eq!(icons.filter, ResampleFilter::CatmullRom);
        assert_eq!(icons.file_name, "ic_launcher.png");
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(CliArgs::try_parse_from(["launcher-icons", "icons", "--size", "mdpi"]).is_err());
    }
}

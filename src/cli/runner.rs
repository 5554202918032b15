use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use launcher_icons::{CropParams, IconSetParams, IconSize, crop_center_with_params, fix_icons};

use super::args::{CliArgs, Command, CropArgs, IconsArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Fails only when a global subscriber is already installed, which is fine to keep
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run_crop(args: CropArgs) -> Result<(), AppError> {
    let params = CropParams {
        zoom: args.zoom,
        filter: args.filter,
    };
    let outcome = crop_center_with_params(&args.input, &args.output, &params)?;
    info!(
        "Wrote {}x{} from region {}x{} at ({}, {})",
        outcome.width,
        outcome.height,
        outcome.region.width,
        outcome.region.height,
        outcome.region.x,
        outcome.region.y
    );
    Ok(())
}

fn run_icons(args: IconsArgs) -> Result<(), AppError> {
    let params = IconSetParams {
        source: args.input,
        res_dir: args.res_dir,
        file_name: args.file_name,
        sizes: if args.sizes.is_empty() {
            IconSize::android_defaults()
        } else {
            args.sizes
        },
        filter: args.filter,
    };

    let report = fix_icons(&params, args.continue_on_error)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !report.is_success() {
        return Err(AppError::IncompleteIconSet {
            failed: report.failed,
            skipped: report.skipped,
            total: report.entries.len(),
        });
    }
    Ok(())
}

fn execute(command: Command) -> Result<(), AppError> {
    match command {
        Command::Crop(crop) => run_crop(crop),
        Command::Icons(icons) => run_icons(icons),
    }
}

/// Run the parsed command. Failures are logged here, once, and mapped to a failing exit code.
pub fn run(args: CliArgs) -> ExitCode {
    init_logging(args.log);

    match execute(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn icons_command(args: &[&str]) -> Command {
        let mut argv = vec!["launcher-icons", "icons"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap().command
    }

    fn write_square_logo(path: &Path) {
        RgbaImage::from_pixel(96, 96, Rgba([20, 140, 90, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_icons_default_table_when_no_sizes_given() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo_clean.png");
        write_square_logo(&src);
        let res = dir.path().join("res");

        let command = icons_command(&[
            "--input",
            src.to_str().unwrap(),
            "--res-dir",
            res.to_str().unwrap(),
        ]);
        execute(command).unwrap();

        for entry in IconSize::android_defaults() {
            assert!(res.join(&entry.name).join("ic_launcher.png").is_file());
        }
    }

    #[test]
    fn test_icons_blocked_density_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo_clean.png");
        write_square_logo(&src);
        let res = dir.path().join("res");
        std::fs::create_dir_all(&res).unwrap();
        std::fs::write(res.join("mipmap-xhdpi"), b"not a directory").unwrap();

        let command = icons_command(&[
            "--input",
            src.to_str().unwrap(),
            "--res-dir",
            res.to_str().unwrap(),
        ]);
        let err = execute(command).unwrap_err();
        assert!(matches!(
            err,
            AppError::IncompleteIconSet {
                failed: 1,
                skipped: 2,
                total: 5
            }
        ));
    }

    #[test]
    fn test_icons_continue_on_error_still_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo_clean.png");
        write_square_logo(&src);
        let res = dir.path().join("res");
        std::fs::create_dir_all(&res).unwrap();
        std::fs::write(res.join("mipmap-mdpi"), b"not a directory").unwrap();

        let command = icons_command(&[
            "--input",
            src.to_str().unwrap(),
            "--res-dir",
            res.to_str().unwrap(),
            "--continue-on-error",
        ]);
        let err = execute(command).unwrap_err();
        assert!(matches!(
            err,
            AppError::IncompleteIconSet {
                failed: 1,
                skipped: 0,
                total: 5
            }
        ));
        assert!(res.join("mipmap-xxxhdpi/ic_launcher.png").is_file());
    }

    #[test]
    fn test_missing_source_reports_readable_message() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let command = icons_command(&["--input", missing.to_str().unwrap()]);

        let err = execute(command).unwrap_err();
        assert!(matches!(err, AppError::Library(launcher_icons::Error::SourceNotFound { .. })));
        assert_eq!(
            err.to_string(),
            format!("Source image not found at {}", missing.display())
        );
    }

    #[test]
    fn test_run_maps_failure_to_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let args = CliArgs::try_parse_from([
            "launcher-icons",
            "crop",
            "--input",
            missing.to_str().unwrap(),
            "--output",
            dir.path().join("out.png").to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(format!("{:?}", run(args)), format!("{:?}", ExitCode::FAILURE));
    }
}

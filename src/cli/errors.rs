use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{failed} of {total} icon sizes failed, {skipped} skipped")]
    IncompleteIconSet {
        failed: usize,
        skipped: usize,
        total: usize,
    },

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Library(#[from] launcher_icons::Error),
}

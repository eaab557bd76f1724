use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Rating text that is not a whole number between 1 and 5.
    #[error("invalid rating '{input}': rating must be a whole number between 1 and 5")]
    InvalidRating { input: String },

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DirectoryError::InvalidRating { .. })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

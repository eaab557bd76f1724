use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "local_connect.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the SQLite file holding businesses and reviews.
    ///
    /// Every store operation opens its own connection to this path.
    pub db_path: PathBuf,
    /// 0 prints everything, 1 hides banner and headers, 2 prints results only.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            quiet: 0,
            no_banner: false,
        }
    }
}

use std::path::PathBuf;

/// Fixed service constants. The port and storage path are deliberately not
/// configurable: the service has no environment or CLI surface.
pub const PORT: u16 = 3000;
pub const DB_PATH: &str = "db.json";

pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: PORT,
            db_path: PathBuf::from(DB_PATH),
        }
    }
}

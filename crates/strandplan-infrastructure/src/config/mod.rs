use std::path::PathBuf;

/// Runtime configuration for the engine's infrastructure.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("strandplan");
        Self {
            database_path: base.join("strandplan.db"),
            log_dir: base.join("logs"),
        }
    }
}

impl AppConfig {
    /// Default paths, with `STRANDPLAN_DB` / `STRANDPLAN_LOG_DIR`
    /// environment overrides applied.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Ok(db) = std::env::var("STRANDPLAN_DB") {
            config.database_path = PathBuf::from(db);
        }
        if let Ok(dir) = std::env::var("STRANDPLAN_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }
}

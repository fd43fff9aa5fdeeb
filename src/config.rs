//! Database Location
//!
//! Resolves where the single database file lives. Embedding apps can
//! point this anywhere (including `:memory:`); the default is a fixed
//! file name under the platform data directory.

use std::path::PathBuf;

use crate::domain::{DbError, DbResult};

pub const DB_FILE_NAME: &str = "simple_list.db";
const APP_DIR_NAME: &str = "simple-list";

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub db_path: PathBuf,
}

impl DbConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Default location under the platform data directory, creating the
    /// app directory if needed.
    pub fn resolve_default() -> DbResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| DbError::Init("no platform data directory".to_string()))?;
        let app_dir = data_dir.join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir).map_err(|e| DbError::Init(e.to_string()))?;
        Ok(Self::new(app_dir.join(DB_FILE_NAME)))
    }
}

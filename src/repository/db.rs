//! Database Connection and Setup
//!
//! Opens the local SQLite database and applies the schema.

use libsql::{Builder, Connection, Database};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DbError, DbResult};
use super::schema;

/// Holds the open database and its single shared connection.
///
/// The connection is opened once at startup and shared by every
/// repository; there is no pooling or reconnection.
pub struct DbState {
    _db: Database,
    conn: Arc<Mutex<Connection>>,
}

impl DbState {
    /// Handle to the shared connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and apply the schema.
///
/// Safe to call against an existing file: every schema statement is
/// `IF NOT EXISTS`.
pub async fn init_db(db_path: &Path) -> DbResult<DbState> {
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| DbError::Init("invalid db path".to_string()))?;

    let db = Builder::new_local(db_path_str)
        .build()
        .await
        .map_err(|e| DbError::Init(format!("failed to build db: {}", e)))?;

    let conn = db
        .connect()
        .map_err(|e| DbError::Init(format!("failed to connect: {}", e)))?;

    // SQLite leaves foreign keys off per connection; the cascade deletes
    // on items_lists need them on.
    conn.execute("PRAGMA foreign_keys = ON", ())
        .await
        .map_err(|e| DbError::Init(e.to_string()))?;

    apply_schema(&conn).await?;

    log::info!("database initialized at {}", db_path_str);

    Ok(DbState {
        _db: db,
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Apply all table definitions
async fn apply_schema(conn: &Connection) -> DbResult<()> {
    for statement in schema::ALL {
        conn.execute(statement, ())
            .await
            .map_err(|e| DbError::Init(e.to_string()))?;
    }
    Ok(())
}

//! Connection opening: pragmas plus migrations on every open.

pub mod pragmas;

use std::path::Path;

use rusqlite::Connection;

use flipgate_core::errors::StorageError;

use crate::migrations;

/// Open (or create) a database file, apply pragmas, and run pending
/// migrations.
pub fn open(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::Sqlite {
        message: format!("failed to open {}: {e}", path.display()),
    })?;
    prepare(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the same pragmas and schema. Used by
/// tests and ephemeral evaluation runs.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::Sqlite {
        message: format!("failed to open in-memory database: {e}"),
    })?;
    prepare(&conn)?;
    Ok(conn)
}

fn prepare(conn: &Connection) -> Result<(), StorageError> {
    pragmas::apply_pragmas(conn)?;
    migrations::run_migrations(conn)?;
    Ok(())
}

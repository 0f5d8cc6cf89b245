use rusqlite::Connection;

use crate::error::AppResult;

/// Initialize the database schema. Creates the key-value table if it doesn't exist.
pub fn initialize(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection with the schema applied.
pub fn memory_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

//! SQLite-backed fixed-key state sink.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{PersistResult, StateSink, STATE_KEY};

/// SQLite implementation of [`StateSink`]. The whole record collection lives
/// in a single row of the `state` table.
pub struct SqliteStateSink {
    conn: Connection,
}

impl SqliteStateSink {
    /// Opens or creates a SQLite-backed sink at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory SQLite sink.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }
}

impl StateSink for SqliteStateSink {
    fn load_state(&self) -> PersistResult<Option<String>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM state WHERE key = ?1",
                params![STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save_state(&mut self, payload: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO state(key, payload) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
            params![STATE_KEY, payload],
        )?;
        Ok(())
    }
}

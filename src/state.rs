use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::selection::Selection;

/// Explicit owner of everything a session needs: the open store, the config
/// and the transient selection. Nothing here is global.
pub struct AppState {
    pub conn: Connection,
    pub config: AppConfig,
    pub selection: Selection,
}

impl AppState {
    pub fn new(conn: Connection, config: AppConfig) -> Self {
        Self {
            conn,
            config,
            selection: Selection::new(),
        }
    }
}

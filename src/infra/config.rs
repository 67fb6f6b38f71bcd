//! Загрузка конфига стола из JSON.
//!
//! Любое отсутствующее поле берётся из `TableConfig::default()`.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::domain::table::{TableConfig, TableConfigError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Некорректный конфиг стола: {0}")]
    Invalid(#[from] TableConfigError),
}

/// Разобрать и проверить конфиг из строки JSON.
pub fn parse_table_config(raw: &str) -> Result<TableConfig, ConfigError> {
    let config: TableConfig = serde_json::from_str(raw)?;
    if let Err(err) = config.validate() {
        warn!(%err, "table config rejected");
        return Err(err.into());
    }
    Ok(config)
}

/// Прочитать конфиг стола из файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_table_config(&raw)
}

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Всё это — мягкие отказы: фронт показывает короткое сообщение, стол идёт дальше.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе.
    BettingClosed,

    /// Не хватает баланса.
    InsufficientBalance { needed: Chips, available: Chips },

    /// Прочие отказы движка (нет ставок, нечего повторять и т.п.).
    Rejected(String),
}

impl ApiError {
    /// Текст для короткого всплывающего сообщения.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Rejected(msg) => msg.clone(),
            ApiError::BettingClosed => EngineError::BettingClosed.to_string(),
            ApiError::InsufficientBalance { needed, available } => EngineError::InsufficientBalance {
                needed: *needed,
                available: *available,
            }
            .to_string(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BettingClosed => ApiError::BettingClosed,
            EngineError::InsufficientBalance { needed, available } => {
                ApiError::InsufficientBalance { needed, available }
            }
            other => ApiError::Rejected(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

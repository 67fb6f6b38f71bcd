//! Граница стола для клиента: JSON-команды и запросы поверх `TableSession`.
//!
//! `commands` меняют состояние (ставки, фишка, сдача, тик), `queries` только
//! читают. Ответы собираются в `dto`, отказы движка переводятся в `ApiError`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;

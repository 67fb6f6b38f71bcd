use crate::domain::chips::Chips;

use thiserror::Error;

/// Отказы движка на пользовательский ввод.
///
/// Любой `Err` отсюда означает: операция не выполнена, состояние стола не изменилось.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ставки сейчас не принимаются")]
    BettingClosed,

    #[error("Недостаточно очков: нужно {needed}, доступно {available}")]
    InsufficientBalance { needed: Chips, available: Chips },

    #[error("Сначала сделайте ставку")]
    NoBetsPlaced,

    #[error("Нет ставок прошлого раунда для повтора")]
    NoPreviousBets,

    #[error("Нечего удваивать – ставок нет")]
    NothingToDouble,

    #[error("Фишки номиналом {0} нет на этом столе")]
    UnknownChip(Chips),
}

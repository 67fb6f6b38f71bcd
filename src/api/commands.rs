use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::chips::Chips;
use crate::domain::hand::Winner;
use crate::engine::{RandomSource, TableSession, TickOutcome};

use super::dto::{CommandResponse, SettledRoundDto};
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команды, которые фронт шлёт столу.
///
/// Каждая команда либо целиком применяется, либо отклоняется с `ApiError`
/// без изменения состояния.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableCommand {
    /// Поставить произвольную сумму на исход.
    PlaceBet { target: Winner, amount: Chips },

    /// Поставить выбранную фишку.
    PlaceSelected { target: Winner },

    /// Выбрать номинал фишки.
    SelectChip { chip: Chips },

    /// Снять все ставки.
    ClearBets,

    /// Повторить ставки прошлого раунда.
    Rebet,

    /// Удвоить текущие ставки.
    Double,

    /// Закрыть ставки досрочно и сдать.
    Deal,

    /// Прошло `elapsed_secs` секунд.
    Tick { elapsed_secs: u32 },
}

/// Разобрать команду из JSON.
pub fn parse_command(raw: &str) -> Result<TableCommand, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Выполнить команду над сессией.
pub fn execute_command<R: RandomSource>(
    session: &mut TableSession,
    command: TableCommand,
    rng: &mut R,
) -> Result<CommandResponse, ApiError> {
    debug!(table_id = session.table_id(), ?command, "executing table command");

    match command {
        TableCommand::PlaceBet { target, amount } => {
            session.place_bet(target, amount)?;
        }
        TableCommand::PlaceSelected { target } => {
            session.place_selected(target)?;
        }
        TableCommand::SelectChip { chip } => session.select_chip(chip)?,
        TableCommand::ClearBets => {
            session.clear_bets()?;
        }
        TableCommand::Rebet => {
            session.rebet()?;
        }
        TableCommand::Double => {
            session.double_bets()?;
        }
        TableCommand::Deal => {
            let settled = session.deal(rng)?;
            return Ok(CommandResponse::RoundSettled {
                table: build_table_view(session),
                round: SettledRoundDto::from(&settled),
            });
        }
        TableCommand::Tick { elapsed_secs } => {
            if let TickOutcome::Dealt(settled) = session.tick(elapsed_secs, rng) {
                return Ok(CommandResponse::RoundSettled {
                    table: build_table_view(session),
                    round: SettledRoundDto::from(settled.as_ref()),
                });
            }
        }
    }

    Ok(CommandResponse::TableState(build_table_view(session)))
}

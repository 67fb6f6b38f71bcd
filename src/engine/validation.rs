use crate::domain::bets::BetSet;
use crate::domain::chips::Chips;
use crate::domain::table::TableConfig;
use crate::engine::errors::EngineError;

/// Проверка одной ставки: сумма зажимается в `[min_bet, max_bet]`,
/// после чего баланс не должен уйти в минус.
///
/// Возвращает фактическую (зажатую) сумму, которую можно списать.
pub fn validate_bet(config: &TableConfig, balance: Chips, requested: Chips) -> Result<Chips, EngineError> {
    let amount = config.clamp_bet(requested);
    ensure_affordable(balance, amount)?;
    Ok(amount)
}

/// Проверка повтора ставок прошлого раунда.
///
/// Текущие ставки будут возвращены на баланс, поэтому доступно `balance + current`.
pub fn validate_rebet(balance: Chips, current: &BetSet, previous: &BetSet) -> Result<Chips, EngineError> {
    ensure_affordable(balance + current.total(), previous.total())
}

/// Проверка удвоения: доплатить нужно ещё столько же, сколько уже стоит.
pub fn validate_double(balance: Chips, current: &BetSet) -> Result<Chips, EngineError> {
    if current.is_empty() {
        return Err(EngineError::NothingToDouble);
    }
    ensure_affordable(balance, current.total())?;
    Ok(current.total())
}

/// Фишка должна быть из списка номиналов стола (пустой список — любые).
pub fn validate_chip(config: &TableConfig, chip: Chips) -> Result<(), EngineError> {
    if config.chips.is_empty() || config.chips.contains(&chip) {
        Ok(())
    } else {
        Err(EngineError::UnknownChip(chip))
    }
}

/// Хватает ли баланса на `needed`. Возвращает остаток после списания.
fn ensure_affordable(available: Chips, needed: Chips) -> Result<Chips, EngineError> {
    available
        .checked_sub(needed)
        .ok_or(EngineError::InsufficientBalance { needed, available })
}

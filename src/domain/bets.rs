use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Winner;

/// Ставки текущего раунда: по одному полю на каждую цель.
///
/// Ключи закрыты enum'ом `Winner` — никаких строковых "banker"/"player" в логике.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetSet {
    pub banker: Chips,
    pub player: Chips,
    pub tie: Chips,
}

impl BetSet {
    pub const EMPTY: BetSet = BetSet {
        banker: Chips::ZERO,
        player: Chips::ZERO,
        tie: Chips::ZERO,
    };

    pub fn new(banker: Chips, player: Chips, tie: Chips) -> Self {
        Self { banker, player, tie }
    }

    pub fn get(&self, target: Winner) -> Chips {
        match target {
            Winner::Banker => self.banker,
            Winner::Player => self.player,
            Winner::Tie => self.tie,
        }
    }

    pub fn get_mut(&mut self, target: Winner) -> &mut Chips {
        match target {
            Winner::Banker => &mut self.banker,
            Winner::Player => &mut self.player,
            Winner::Tie => &mut self.tie,
        }
    }

    /// Сумма всех ставок.
    pub fn total(&self) -> Chips {
        self.banker + self.player + self.tie
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }

    /// Ненулевые ставки в фиксированном порядке banker, player, tie.
    pub fn legs(&self) -> impl Iterator<Item = (Winner, Chips)> + '_ {
        Winner::ALL
            .into_iter()
            .map(|w| (w, self.get(w)))
            .filter(|(_, amount)| !amount.is_zero())
    }

    /// Каждая ненулевая ставка удвоена.
    pub fn doubled(&self) -> BetSet {
        BetSet {
            banker: self.banker.times(2),
            player: self.player.times(2),
            tie: self.tie.times(2),
        }
    }

    /// Описание для истории: `"banker: 100, tie: 10"`, либо `"—"` если ставок нет.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .legs()
            .map(|(target, amount)| format!("{}: {}", target.as_str(), amount))
            .collect();

        if parts.is_empty() {
            "—".to_string()
        } else {
            parts.join(", ")
        }
    }
}

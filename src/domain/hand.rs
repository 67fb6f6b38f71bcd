use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval;

/// Сторона стола, которой сдаются карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Banker,
}

/// Итог раунда. Он же — символ для дорог (bead plate, big road)
/// и он же — ключ ставки (на кого ставим).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Banker,
    Player,
    Tie,
}

impl Winner {
    pub const ALL: [Winner; 3] = [Winner::Banker, Winner::Player, Winner::Tie];

    /// Короткий символ для дорог: B / P / T.
    pub fn symbol(&self) -> char {
        match self {
            Winner::Banker => 'B',
            Winner::Player => 'P',
            Winner::Tie => 'T',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Banker => "banker",
            Winner::Player => "player",
            Winner::Tie => "tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.as_str().to_uppercase())
    }
}

/// Рука одной стороны: 2 или 3 карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub side: Side,
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            cards: Vec::with_capacity(3),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Сумма очков по модулю 10.
    pub fn total(&self) -> u8 {
        eval::hand_total(&self.cards)
    }

    /// Третья карта (если была добрана).
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    /// Формат вида `A♠ 9♥ (0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({})", self.total())
    }
}

/// Результат одной сдачи. Создаётся дилером один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub player_hand: Hand,
    pub banker_hand: Hand,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Winner,
}

impl RoundOutcome {
    /// Собрать итог по двум готовым рукам: тоталы и победитель считаются здесь.
    pub fn from_hands(player_hand: Hand, banker_hand: Hand) -> Self {
        let player_total = player_hand.total();
        let banker_total = banker_hand.total();
        Self {
            player_hand,
            banker_hand,
            player_total,
            banker_total,
            winner: eval::classify_winner(player_total, banker_total),
        }
    }

    /// Была ли это натуральная сдача (8/9 на двух картах у любой стороны).
    pub fn is_natural(&self) -> bool {
        self.player_hand.len() == 2
            && self.banker_hand.len() == 2
            && (eval::is_natural(&self.player_hand.cards) || eval::is_natural(&self.banker_hand.cards))
    }
}

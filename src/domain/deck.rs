use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub const CARDS_PER_DECK: usize = 52;

    /// Стандартная 52-карточная колода в порядке:
    /// ♠ A..K, ♥ A..K, ♦ A..K, ♣ A..K.
    pub fn standard_52() -> Self {
        Self::multi_deck(1)
    }

    /// Несколько колод подряд (шуз), `decks × 52` карт, без перемешивания.
    pub fn multi_deck(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * Self::CARDS_PER_DECK);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::RandomSource;

/// Шуз: перемешанная последовательность из нескольких колод.
///
/// Карты берутся с хвоста. Когда шуз пуст, следующая `draw`
/// сама собирает и перемешивает свежий шуз — вытянуть карту можно всегда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    /// Сколько раз шуз пересобирался (для логов/отладки).
    shuffles: u64,
}

impl Shoe {
    /// Новый перемешанный шуз из `decks × 52` карт.
    pub fn new<R: RandomSource>(decks: u8, rng: &mut R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            shuffles: 0,
        };
        shoe.reshuffle(rng);
        shoe
    }

    /// Шуз с заранее заданным порядком: `draw_order[0]` выйдет первой.
    /// Для тестов и реплея конкретных сдач.
    pub fn stacked(decks: u8, draw_order: Vec<Card>) -> Self {
        let mut cards = draw_order;
        cards.reverse();
        Self {
            cards,
            decks,
            shuffles: 0,
        }
    }

    /// Выбросить остаток и собрать свежий перемешанный шуз.
    pub fn reshuffle<R: RandomSource>(&mut self, rng: &mut R) {
        // Пустой шуз из нуля колод зациклил бы `draw`.
        let mut deck = Deck::multi_deck(self.decks.max(1));
        rng.shuffle(&mut deck.cards);
        self.cards = deck.cards;
        self.shuffles += 1;
        debug!(decks = self.decks, cards = self.cards.len(), "shoe reshuffled");
    }

    /// Взять одну карту. Пустой шуз пересобирается прямо здесь.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle(rng);
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }

    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }
}

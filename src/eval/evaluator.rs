use crate::domain::card::Card;
use crate::domain::hand::Winner;

/// Тотал руки: сумма очков карт, учитывается только последняя цифра.
pub fn hand_total(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |acc, card| (acc + card.value()) % 10)
}

/// Натуральная рука: 8 или 9 на двух первых картах.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && is_natural_total(hand_total(cards))
}

#[inline]
pub fn is_natural_total(total: u8) -> bool {
    total >= 8
}

/// Победитель по тоталам: больше — выиграл, поровну — ничья.
pub fn classify_winner(player_total: u8, banker_total: u8) -> Winner {
    use core::cmp::Ordering;

    match player_total.cmp(&banker_total) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Banker,
        Ordering::Equal => Winner::Tie,
    }
}

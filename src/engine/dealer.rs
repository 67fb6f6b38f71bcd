use tracing::debug;

use crate::domain::hand::{Hand, RoundOutcome, Side};
use crate::engine::shoe::Shoe;
use crate::engine::RandomSource;
use crate::eval::{banker_draws, hand_total, is_natural_total, player_draws};

/// Сдать один раунд из шуза.
///
/// Порядок: игрок, банкир, игрок, банкир. Если у любой стороны натуральные 8/9 —
/// больше никто не добирает. Иначе игрок добирает на 0–5, а банкир решает
/// по своему тоталу и третьей карте игрока (см. `eval::drawing_rules`).
///
/// Вся случайность — только в шузе: при одинаковой последовательности карт
/// результат всегда одинаковый.
pub fn deal_round<R: RandomSource>(shoe: &mut Shoe, rng: &mut R) -> RoundOutcome {
    let mut player = Hand::new(Side::Player);
    let mut banker = Hand::new(Side::Banker);

    for _ in 0..2 {
        player.push(shoe.draw(rng));
        banker.push(shoe.draw(rng));
    }

    let natural_player = hand_total(&player.cards);
    let natural_banker = hand_total(&banker.cards);

    if is_natural_total(natural_player) || is_natural_total(natural_banker) {
        debug!(natural_player, natural_banker, "natural, no third cards");
        return RoundOutcome::from_hands(player, banker);
    }

    let mut player_third = None;
    if player_draws(natural_player) {
        let card = shoe.draw(rng);
        player.push(card);
        player_third = Some(card.value());
    }

    if banker_draws(natural_banker, player_third) {
        banker.push(shoe.draw(rng));
    }

    RoundOutcome::from_hands(player, banker)
}

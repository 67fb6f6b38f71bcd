//! Правила третьей карты (punto banco).
//!
//! Игрок добирает на 0–5, стоит на 6–7.
//! Банкир, если игрок НЕ добирал, добирает на 0–5.
//! Если игрок добирал (значение третьей карты `v`), банкир смотрит таблицу:
//!
//! | тотал банкира | добирает, если |
//! |---------------|----------------|
//! | 0–2           | всегда         |
//! | 3             | v != 8         |
//! | 4             | v ∈ 2..=7      |
//! | 5             | v ∈ 4..=7      |
//! | 6             | v ∈ 6..=7      |
//! | 7+            | никогда        |

/// Добирает ли игрок третью карту при данном тотале двух карт.
pub fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Добирает ли банкир третью карту.
///
/// `player_third` — очки третьей карты игрока (`None`, если игрок стоял).
pub fn banker_draws(banker_total: u8, player_third: Option<u8>) -> bool {
    let Some(v) = player_third else {
        return banker_total <= 5;
    };

    match banker_total {
        0..=2 => true,
        3 => v != 8,
        4 => (2..=7).contains(&v),
        5 => (4..=7).contains(&v),
        6 => (6..=7).contains(&v),
        _ => false,
    }
}

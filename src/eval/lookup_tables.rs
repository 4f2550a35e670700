use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех трёхкарточных стритов (3 подряд), от 234 до QKA.
/// Туз только старший: A23 стритом не считается.
pub const STRAIGHT3_MASKS: [RankMask; 11] = [
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Queen, Rank::King, Rank::Ace]),
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = rank.value().saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Три разных ранга подряд. Маска с повторами (пара, сет) сюда не попадёт:
/// в ней меньше трёх бит.
pub fn is_three_card_straight(rank_mask: RankMask) -> bool {
    STRAIGHT3_MASKS.iter().any(|&sm| rank_mask == sm)
}

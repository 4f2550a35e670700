use log::{debug, warn};

use crate::domain::chips::Chips;
use crate::domain::game::BettingPolicy;
use crate::domain::hand::BetOutcome;
use crate::domain::player::Participant;
use crate::engine::errors::EngineError;
use crate::engine::pot::Pot;

/// Списать ставку с участника по заданной политике.
///
/// Возвращает сумму, которую нужно положить в банк. При
/// `RejectIfInsufficient` и нехватке фишек, а также при переполнении
/// баланса участник не меняется.
pub fn place_bet(
    participant: &mut Participant,
    amount: Chips,
    policy: BettingPolicy,
) -> Result<Chips, EngineError> {
    if policy == BettingPolicy::RejectIfInsufficient && !participant.can_afford(amount) {
        return Err(EngineError::InsufficientBalance {
            participant_id: participant.id,
            balance: participant.balance,
            amount,
        });
    }

    participant.balance = participant
        .balance
        .checked_sub(amount)
        .ok_or(EngineError::ChipOverflow("баланс участника после ставки"))?;
    if participant.balance.is_negative() {
        warn!(
            "participant {} went negative: balance={}",
            participant.id, participant.balance
        );
    }
    Ok(amount)
}

/// Круг ставок: каждый участник по порядку ставит `amount`.
///
/// Пропущенная из-за нехватки фишек ставка не прерывает круг.
/// Переполнение баланса или банка прерывает: раунд сыгран быть не может.
pub fn collect_bets(
    participants: &mut [Participant],
    amount: Chips,
    policy: BettingPolicy,
    pot: &mut Pot,
) -> Result<Vec<BetOutcome>, EngineError> {
    let mut outcomes = Vec::with_capacity(participants.len());

    for p in participants.iter_mut() {
        match place_bet(p, amount, policy) {
            Ok(contributed) => {
                pot.add(contributed)?;
                outcomes.push(BetOutcome::Placed(contributed));
            }
            Err(err @ EngineError::InsufficientBalance { .. }) => {
                debug!("bet skipped: {err}");
                outcomes.push(BetOutcome::Skipped);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcomes)
}

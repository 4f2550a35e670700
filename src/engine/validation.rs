use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;

/// Минимальное число участников в игре.
pub const MIN_PARTICIPANTS: usize = 2;

/// Разобрать ставку из текстового поля UI.
///
/// Поле ввода может прийти с пробелами по краям (вставка, автозамена
/// клавиатуры), поэтому они игнорируются; всё, что не целое число > 0,
/// даёт `InvalidBetAmount`.
pub fn parse_bet_amount(input: &str) -> Result<Chips, EngineError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidBetAmount(input.to_string()))?;
    validate_bet_amount(Chips(value))
}

/// Ставка должна быть строго положительной.
pub fn validate_bet_amount(amount: Chips) -> Result<Chips, EngineError> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(EngineError::InvalidBetAmount(amount.to_string()))
    }
}

/// Проверка состава новой игры.
pub fn validate_roster(participant_count: usize, starting_balance: Chips) -> Result<(), EngineError> {
    if participant_count < MIN_PARTICIPANTS {
        return Err(EngineError::NotEnoughParticipants {
            min: MIN_PARTICIPANTS,
            actual: participant_count,
        });
    }
    if starting_balance.is_negative() {
        return Err(EngineError::InvalidStartingBalance(starting_balance));
    }
    Ok(())
}

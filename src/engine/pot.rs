use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Participant;
use crate::engine::errors::EngineError;

/// Общий банк раунда. Равен сумме ставок с последней выплаты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(EngineError::ChipOverflow("банк"))?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }

    /// Отдать весь банк победителю и обнулить его.
    /// Возвращает выплаченную сумму. При переполнении ничего не меняется.
    pub fn award(&mut self, winner: &mut Participant) -> Result<Chips, EngineError> {
        let amount = self.total;
        winner.balance = winner
            .balance
            .checked_add(amount)
            .ok_or(EngineError::ChipOverflow("баланс победителя"))?;
        self.reset();
        Ok(amount)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Participant;
use crate::domain::ParticipantId;

/// Вариант игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameVariant {
    /// Одна карта каждому, побеждает старший ранг.
    LuckyDraw,
    /// Три карты каждому, сравнение по категории и старшей карте.
    Showdown,
}

impl GameVariant {
    pub const fn cards_per_participant(self) -> usize {
        match self {
            GameVariant::LuckyDraw => 1,
            GameVariant::Showdown => 3,
        }
    }

    /// Политика ставок по умолчанию для режима.
    pub const fn default_betting_policy(self) -> BettingPolicy {
        match self {
            GameVariant::LuckyDraw => BettingPolicy::RejectIfInsufficient,
            GameVariant::Showdown => BettingPolicy::AllowNegative,
        }
    }

    pub const fn default_roster_size(self) -> usize {
        match self {
            GameVariant::LuckyDraw => 3,
            GameVariant::Showdown => 2,
        }
    }
}

/// Правило приёма ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BettingPolicy {
    /// Ставка принимается только если `balance >= amount`, иначе пропускается.
    RejectIfInsufficient,
    /// Ставка списывается всегда, баланс может стать отрицательным.
    AllowNegative,
}

/// Конфиг игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: GameVariant,
    pub starting_balance: Chips,
    /// `None` — взять политику по умолчанию для варианта.
    #[serde(default)]
    pub betting_policy: Option<BettingPolicy>,
}

impl GameConfig {
    pub fn new(variant: GameVariant, starting_balance: Chips) -> Self {
        Self {
            variant,
            starting_balance,
            betting_policy: None,
        }
    }

    pub fn with_betting_policy(mut self, policy: BettingPolicy) -> Self {
        self.betting_policy = Some(policy);
        self
    }

    pub fn effective_betting_policy(&self) -> BettingPolicy {
        self.betting_policy
            .unwrap_or_else(|| self.variant.default_betting_policy())
    }

    /// Стартовые имена: "Player 1", "Player 2", ...
    pub fn default_names(&self) -> Vec<String> {
        (1..=self.variant.default_roster_size())
            .map(|i| format!("Player {i}"))
            .collect()
    }

    pub fn lucky_draw_default() -> Self {
        Self::new(GameVariant::LuckyDraw, Chips(100))
    }

    pub fn showdown_default() -> Self {
        Self::new(GameVariant::Showdown, Chips(100))
    }
}

/// Снимок состояния игры между раундами.
///
/// Раунд не меняет снимок на месте: `engine::play_round` возвращает новый,
/// вызывающий код заменяет старый целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    /// Порядок = порядок раздачи и тай-брейка.
    pub participants: Vec<Participant>,
    /// Между раундами всегда 0.
    pub pot: Chips,
    pub rounds_played: u64,
}

impl GameState {
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn balances(&self) -> Vec<(ParticipantId, Chips)> {
        self.participants.iter().map(|p| (p.id, p.balance)).collect()
    }

    /// Сумма балансов + банк. Сохраняется на протяжении раунда.
    pub fn total_chips(&self) -> Chips {
        self.participants.iter().map(|p| p.balance).sum::<Chips>() + self.pot
    }
}

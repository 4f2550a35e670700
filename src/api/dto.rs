use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::game::GameVariant;
use crate::domain::hand::HandCategory;
use crate::domain::{ParticipantId, RoundId};

/// DTO карты: код, индекс картинки и готовое имя ассета.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    /// Формат `Ah`, `Td`.
    pub code: String,
    pub image_index: u8,
    pub asset: String,
}

/// DTO участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantDto {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub balance: Chips,
    pub cards: Vec<CardDto>,
    /// По одному имени на слот карты; пустой слот — рубашка.
    pub card_assets: Vec<String>,
}

/// DTO экрана игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub variant: GameVariant,
    pub pot: Chips,
    pub rounds_played: u64,
    pub participants: Vec<ParticipantDto>,
}

/// Результат одного участника в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantResultDto {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub cards: Vec<CardDto>,
    pub category: Option<HandCategory>,
    pub balance_after: Chips,
    pub is_winner: bool,
}

/// DTO итога раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcomeDto {
    pub round_id: RoundId,
    pub winner_id: ParticipantId,
    pub winner_name: String,
    pub pot_awarded: Chips,
    /// "Player 1 wins the pot of 30 chips!"
    pub message: String,
    pub results: Vec<ParticipantResultDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    GameCreated(GameViewDto),
    RoundPlayed {
        outcome: RoundOutcomeDto,
        game: GameViewDto,
    },
}

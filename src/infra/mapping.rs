use crate::api::dto::{CardDto, GameViewDto, ParticipantDto, ParticipantResultDto, RoundOutcomeDto};
use crate::domain::card::Card;
use crate::domain::game::{GameState, GameVariant};
use crate::engine::RoundOutcome;

/// Картинка для участника без карты.
pub const CARD_BACK_ASSET: &str = "card_back";

/// Имя картинки карты для экрана конкретного варианта.
///
/// LuckyDraw исторически грузит `image_index + 1` ("2".."53"),
/// Showdown — сам `image_index` ("1".."52"). Менять нельзя: на эти
/// имена завязаны ассеты.
pub fn card_asset_name(variant: GameVariant, card: &Card) -> String {
    let idx = card.image_index() as u32;
    match variant {
        GameVariant::LuckyDraw => (idx + 1).to_string(),
        GameVariant::Showdown => idx.to_string(),
    }
}

/// То же, но с рубашкой для пустого слота.
pub fn asset_name_for(variant: GameVariant, card: Option<&Card>) -> String {
    match card {
        Some(c) => card_asset_name(variant, c),
        None => CARD_BACK_ASSET.to_string(),
    }
}

pub fn map_card(variant: GameVariant, card: &Card) -> CardDto {
    CardDto {
        code: card.to_string(),
        image_index: card.image_index(),
        asset: card_asset_name(variant, card),
    }
}

/// Снимок игры -> DTO для экрана.
pub fn map_game_to_dto(state: &GameState) -> GameViewDto {
    let variant = state.config.variant;
    let slots = variant.cards_per_participant();

    let participants = state
        .participants
        .iter()
        .map(|p| ParticipantDto {
            participant_id: p.id,
            display_name: p.name.clone(),
            balance: p.balance,
            cards: p.cards.iter().map(|c| map_card(variant, c)).collect(),
            card_assets: (0..slots)
                .map(|i| asset_name_for(variant, p.cards.get(i)))
                .collect(),
        })
        .collect();

    GameViewDto {
        variant,
        pot: state.pot,
        rounds_played: state.rounds_played,
        participants,
    }
}

/// Итог раунда -> DTO.
pub fn map_outcome_to_dto(outcome: &RoundOutcome) -> RoundOutcomeDto {
    RoundOutcomeDto {
        round_id: outcome.round_id,
        winner_id: outcome.winner_id,
        winner_name: outcome.winner_name.clone(),
        pot_awarded: outcome.pot_awarded,
        message: outcome.announcement(),
        results: outcome
            .results
            .iter()
            .map(|r| ParticipantResultDto {
                participant_id: r.participant_id,
                display_name: r.name.clone(),
                cards: r.cards.iter().map(|c| map_card(outcome.variant, c)).collect(),
                category: r.category,
                balance_after: r.balance_after,
                is_winner: r.is_winner,
            })
            .collect(),
    }
}

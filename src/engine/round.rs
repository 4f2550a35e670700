use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::game::{GameConfig, GameState, GameVariant};
use crate::domain::hand::{BetOutcome, ParticipantResult, RoundPhase};
use crate::domain::player::Participant;
use crate::domain::{ParticipantId, RoundId};
use crate::engine::betting::collect_bets;
use crate::engine::dealer::{deal, shuffle};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::pot::Pot;
use crate::engine::validation::{validate_bet_amount, validate_roster, MIN_PARTICIPANTS};
use crate::engine::RandomSource;
use crate::eval::{evaluate_hand, high_card_winner, showdown_winner, HandEvaluation, ShowdownHand};
use crate::infra::ids::IdGenerator;

/// Итог раунда для UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_id: RoundId,
    pub variant: GameVariant,
    pub winner_id: ParticipantId,
    pub winner_name: String,
    pub pot_awarded: Chips,
    /// По одному на участника, в порядке мест.
    pub results: Vec<ParticipantResult>,
    pub history: RoundHistory,
}

impl RoundOutcome {
    pub fn updated_hands(&self) -> Vec<(ParticipantId, Vec<Card>)> {
        self.results
            .iter()
            .map(|r| (r.participant_id, r.cards.clone()))
            .collect()
    }

    pub fn updated_balances(&self) -> Vec<(ParticipantId, Chips)> {
        self.results
            .iter()
            .map(|r| (r.participant_id, r.balance_after))
            .collect()
    }

    pub fn winner(&self) -> Option<&ParticipantResult> {
        self.results.iter().find(|r| r.is_winner)
    }

    /// Строка для метки победителя.
    pub fn announcement(&self) -> String {
        format!(
            "{} wins the pot of {} chips!",
            self.winner_name, self.pot_awarded
        )
    }
}

/// Создать новую игру. Участники получают id по порядку имён.
pub fn new_game<S: Into<String>>(
    names: impl IntoIterator<Item = S>,
    config: GameConfig,
) -> Result<GameState, EngineError> {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    validate_roster(names.len(), config.starting_balance)?;

    let ids = IdGenerator::new();
    let participants = names
        .into_iter()
        .map(|name| Participant::new(ids.next_participant_id(), name, config.starting_balance))
        .collect::<Vec<_>>();

    info!(
        "new {:?} game: {} participants, starting balance {}",
        config.variant,
        participants.len(),
        config.starting_balance
    );

    Ok(GameState {
        config,
        participants,
        pot: Chips::ZERO,
        rounds_played: 0,
    })
}

/// Сыграть раунд целиком: ставки → раздача → оценка → выплата.
///
/// Снимок вызывающего кода не меняется. При ошибке на любом шаге
/// у вызывающего остаётся прежнее состояние.
pub fn play_round<R: RandomSource>(
    state: &GameState,
    bet_amount: Chips,
    rng: &mut R,
) -> Result<(GameState, RoundOutcome), EngineError> {
    let mut engine = RoundEngine::new(state, bet_amount)?;
    engine.collect_bets()?;
    engine.deal(rng)?;
    engine.resolve()?;
    engine.finish()
}

/// Пошаговый движок одного раунда.
///
/// `Idle → BetsCollected → Dealt → Resolved → Idle`. Работает на
/// собственной копии `GameState`; наружу она отдаётся только в `finish`.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub bet_amount: Chips,
    pub state: GameState,
    pub pot: Pot,
    pub bets: Vec<BetOutcome>,
    pub remaining_deck: Option<Deck>,
    /// Только для Showdown, по местам.
    pub evaluations: Vec<HandEvaluation>,
    pub winner: Option<usize>,
    pub pot_awarded: Chips,
    pub history: RoundHistory,
}

impl RoundEngine {
    pub fn new(state: &GameState, bet_amount: Chips) -> Result<Self, EngineError> {
        let bet_amount = validate_bet_amount(bet_amount)?;
        if state.participants.len() < MIN_PARTICIPANTS {
            return Err(EngineError::NotEnoughParticipants {
                min: MIN_PARTICIPANTS,
                actual: state.participants.len(),
            });
        }

        let round_id = state.rounds_played + 1;
        let mut pot = Pot::new();
        pot.add(state.pot)?;

        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted {
            round_id,
            bet_amount,
        });

        Ok(Self {
            round_id,
            phase: RoundPhase::Idle,
            bet_amount,
            state: state.clone(),
            pot,
            bets: Vec::new(),
            remaining_deck: None,
            evaluations: Vec::new(),
            winner: None,
            pot_awarded: Chips::ZERO,
            history,
        })
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::IllegalPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Idle → BetsCollected.
    pub fn collect_bets(&mut self) -> Result<(), EngineError> {
        self.expect_phase(RoundPhase::Idle)?;

        let policy = self.state.config.effective_betting_policy();
        let mut pot_after = self.pot.total;
        self.bets = collect_bets(
            &mut self.state.participants,
            self.bet_amount,
            policy,
            &mut self.pot,
        )?;

        for (p, bet) in self.state.participants.iter().zip(&self.bets) {
            match bet {
                BetOutcome::Placed(amount) => {
                    pot_after += *amount;
                    self.history.push(RoundEventKind::BetPlaced {
                        participant_id: p.id,
                        amount: *amount,
                        balance_after: p.balance,
                        pot_after,
                    });
                }
                BetOutcome::Skipped => self.history.push(RoundEventKind::BetSkipped {
                    participant_id: p.id,
                    balance: p.balance,
                }),
            }
        }

        debug!(
            "round {}: bets collected with {:?}, pot={}",
            self.round_id, policy, self.pot.total
        );
        self.phase = RoundPhase::BetsCollected;
        Ok(())
    }

    /// BetsCollected → Dealt: новая колода, перемешивание, раздача блоками.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.expect_phase(RoundPhase::BetsCollected)?;

        let deck = shuffle(Deck::standard_52(), rng);
        let dealt = deal(
            deck,
            self.state.participants.len(),
            self.state.config.variant.cards_per_participant(),
        )?;

        for (p, hand) in self.state.participants.iter_mut().zip(dealt.hands) {
            p.cards = hand;
            self.history.push(RoundEventKind::CardsDealt {
                participant_id: p.id,
                cards: p.cards.clone(),
            });
        }

        debug!(
            "round {}: dealt, {} cards left in deck",
            self.round_id,
            dealt.remaining.len()
        );
        self.remaining_deck = Some(dealt.remaining);
        self.phase = RoundPhase::Dealt;
        Ok(())
    }

    /// Dealt → Resolved: выбор победителя и выплата банка.
    pub fn resolve(&mut self) -> Result<(), EngineError> {
        self.expect_phase(RoundPhase::Dealt)?;

        let winner = match self.state.config.variant {
            GameVariant::LuckyDraw => self.lucky_draw_winner()?,
            GameVariant::Showdown => self.showdown_winner()?,
        };

        let participant = self
            .state
            .participants
            .get_mut(winner)
            .ok_or(EngineError::Internal("индекс победителя вне списка участников"))?;
        self.pot_awarded = self.pot.award(participant)?;
        self.history.push(RoundEventKind::PotAwarded {
            participant_id: participant.id,
            amount: self.pot_awarded,
        });

        self.winner = Some(winner);
        self.phase = RoundPhase::Resolved;
        Ok(())
    }

    fn lucky_draw_winner(&self) -> Result<usize, EngineError> {
        let cards = self
            .state
            .participants
            .iter()
            .map(|p| p.cards.first().copied())
            .collect::<Option<Vec<Card>>>()
            .ok_or(EngineError::Internal("участник остался без карты"))?;

        high_card_winner(&cards).ok_or(EngineError::Internal("нет карт для сравнения"))
    }

    fn showdown_winner(&mut self) -> Result<usize, EngineError> {
        let hands = self
            .state
            .participants
            .iter()
            .map(|p| ShowdownHand::try_from(p.cards.as_slice()).ok())
            .collect::<Option<Vec<ShowdownHand>>>()
            .ok_or(EngineError::Internal("в Showdown у каждого должно быть 3 карты"))?;

        self.evaluations = hands.iter().map(evaluate_hand).collect();
        for (p, eval) in self.state.participants.iter().zip(&self.evaluations) {
            self.history.push(RoundEventKind::HandEvaluated {
                participant_id: p.id,
                category: eval.category,
            });
        }

        showdown_winner(&hands).ok_or(EngineError::Internal("нет рук для сравнения"))
    }

    /// Resolved → Idle: новый снимок игры и итог раунда.
    pub fn finish(mut self) -> Result<(GameState, RoundOutcome), EngineError> {
        self.expect_phase(RoundPhase::Resolved)?;
        let winner = self
            .winner
            .ok_or(EngineError::Internal("раунд разрешён без победителя"))?;

        self.state.pot = self.pot.total;
        self.state.rounds_played = self.round_id;
        self.history.push(RoundEventKind::RoundFinished {
            round_id: self.round_id,
        });
        self.phase = RoundPhase::Idle;

        let results = self
            .state
            .participants
            .iter()
            .enumerate()
            .map(|(idx, p)| ParticipantResult {
                participant_id: p.id,
                name: p.name.clone(),
                bet: self.bets.get(idx).copied().unwrap_or(BetOutcome::Skipped),
                cards: p.cards.clone(),
                category: self.evaluations.get(idx).map(|e| e.category),
                balance_after: p.balance,
                is_winner: idx == winner,
            })
            .collect();

        let winner_p = self
            .state
            .participants
            .get(winner)
            .ok_or(EngineError::Internal("индекс победителя вне списка участников"))?;
        let outcome = RoundOutcome {
            round_id: self.round_id,
            variant: self.state.config.variant,
            winner_id: winner_p.id,
            winner_name: winner_p.name.clone(),
            pot_awarded: self.pot_awarded,
            results,
            history: self.history,
        };

        info!(
            "round {}: {} wins {} chips",
            outcome.round_id, outcome.winner_name, outcome.pot_awarded
        );

        Ok((self.state, outcome))
    }
}

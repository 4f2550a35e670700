//! Раунд целиком: new_game + play_round + пошаговый RoundEngine.

use chip_poker_engine::domain::{
    BetOutcome, BettingPolicy, Chips, GameConfig, GameState, GameVariant, RoundPhase,
};
use chip_poker_engine::engine::{
    new_game, parse_bet_amount, play_round, EngineError, RoundEngine, RoundEventKind,
};
use chip_poker_engine::infra::{DeterministicRng, NoShuffle};

fn showdown(names: &[&str], balance: i64) -> GameState {
    new_game(
        names.iter().copied(),
        GameConfig::new(GameVariant::Showdown, Chips(balance)),
    )
    .unwrap()
}

fn lucky(names: &[&str], balance: i64) -> GameState {
    new_game(
        names.iter().copied(),
        GameConfig::new(GameVariant::LuckyDraw, Chips(balance)),
    )
    .unwrap()
}

fn balances(state: &GameState) -> Vec<i64> {
    state.participants.iter().map(|p| p.balance.0).collect()
}

// ----------------------
// new_game
// ----------------------

#[test]
fn new_game_assigns_sequential_ids_and_balances() {
    let state = lucky(&["Ann", "Bob", "Cid"], 100);
    let ids: Vec<u64> = state.participants.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(balances(&state), vec![100, 100, 100]);
    assert_eq!(state.pot, Chips::ZERO);
    assert_eq!(state.rounds_played, 0);
    assert!(state.participants.iter().all(|p| p.cards.is_empty()));
}

#[test]
fn new_game_validates_roster() {
    let err = new_game(["Solo"], GameConfig::showdown_default()).unwrap_err();
    assert_eq!(err, EngineError::NotEnoughParticipants { min: 2, actual: 1 });

    let err = new_game(["A", "B"], GameConfig::new(GameVariant::Showdown, Chips(-1))).unwrap_err();
    assert_eq!(err, EngineError::InvalidStartingBalance(Chips(-1)));
}

// ----------------------
// сквозные сценарии
// ----------------------

/// Два участника по 100, ставка 10: после раунда сумма 200, банк 0.
#[test]
fn two_participants_conserve_chips() {
    let state = showdown(&["Player 1", "Player 2"], 100);
    let mut rng = DeterministicRng::from_seed(7);

    let (next, outcome) = play_round(&state, Chips(10), &mut rng).unwrap();

    assert_eq!(next.total_chips(), Chips(200));
    assert_eq!(next.pot, Chips::ZERO);
    assert_eq!(next.rounds_played, 1);
    assert_eq!(outcome.pot_awarded, Chips(20));

    let mut b = balances(&next);
    b.sort();
    assert_eq!(b, vec![90, 110]);

    // Исходный снимок не тронут.
    assert_eq!(balances(&state), vec![100, 100]);
    assert_eq!(state.rounds_played, 0);
}

#[test]
fn showdown_canonical_deal_has_known_winner() {
    // Без перемешивания: 2h3h4h против 5h6h7h, обе руки — стрит-флеш,
    // старшая карта решает в пользу второго.
    let state = showdown(&["Player 1", "Player 2"], 100);
    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    assert_eq!(outcome.winner_id, 2);
    assert_eq!(outcome.winner_name, "Player 2");
    assert_eq!(outcome.announcement(), "Player 2 wins the pot of 20 chips!");
    assert_eq!(balances(&next), vec![90, 110]);
    assert_eq!(next.participants[0].cards.len(), 3);
    assert_eq!(next.participants[0].cards[0].to_string(), "2h");
    assert_eq!(next.participants[1].cards[2].to_string(), "7h");
}

#[test]
fn lucky_draw_canonical_deal_last_card_wins() {
    let state = lucky(&["Player 1", "Player 2", "Player 3"], 100);
    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    assert_eq!(outcome.winner_id, 3);
    assert_eq!(outcome.pot_awarded, Chips(30));
    assert_eq!(balances(&next), vec![90, 90, 120]);
    assert!(next.participants.iter().all(|p| p.cards.len() == 1));
    assert!(outcome.results.iter().all(|r| r.category.is_none()));
}

#[test]
fn balances_are_keyed_by_id_not_name() {
    // Одинаковые имена: выплата идёт только победителю по id.
    let state = lucky(&["Twin", "Twin"], 100);
    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    assert_eq!(outcome.winner_id, 2);
    assert_eq!(outcome.updated_balances(), vec![(1, Chips(90)), (2, Chips(110))]);
    assert_eq!(balances(&next), vec![90, 110]);
}

#[test]
fn invalid_bet_leaves_state_unchanged() {
    let state = lucky(&["A", "B"], 100);
    let mut rng = DeterministicRng::from_seed(1);

    for input in ["-5", "abc", "0", ""] {
        assert!(matches!(
            parse_bet_amount(input),
            Err(EngineError::InvalidBetAmount(_))
        ));
    }

    for bet in [Chips(0), Chips(-5)] {
        let err = play_round(&state, bet, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidBetAmount(_)));
    }

    assert_eq!(balances(&state), vec![100, 100]);
    assert_eq!(state.pot, Chips::ZERO);
}

#[test]
fn lucky_draw_skips_unaffordable_bets_but_still_deals() {
    let state = lucky(&["A", "B", "C"], 5);
    let mut rng = DeterministicRng::from_seed(3);

    let (next, outcome) = play_round(&state, Chips(10), &mut rng).unwrap();

    assert_eq!(outcome.pot_awarded, Chips::ZERO);
    assert_eq!(balances(&next), vec![5, 5, 5]);
    assert!(outcome.results.iter().all(|r| r.bet == BetOutcome::Skipped));
    assert!(next.participants.iter().all(|p| p.cards.len() == 1));

    let skipped = outcome
        .history
        .kinds()
        .filter(|k| matches!(k, RoundEventKind::BetSkipped { .. }))
        .count();
    assert_eq!(skipped, 3);
}

#[test]
fn lucky_draw_mixed_balances_conserve_chips() {
    let mut state = lucky(&["A", "B", "C"], 100);
    state.participants[1].balance = Chips(4);
    let before = state.total_chips();
    let mut rng = DeterministicRng::from_seed(11);

    let (next, outcome) = play_round(&state, Chips(10), &mut rng).unwrap();

    assert_eq!(outcome.pot_awarded, Chips(20));
    assert_eq!(outcome.results[1].bet, BetOutcome::Skipped);
    assert_eq!(next.total_chips(), before);
}

#[test]
fn showdown_default_policy_allows_negative_balances() {
    let state = showdown(&["A", "B"], 5);
    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    assert_eq!(outcome.pot_awarded, Chips(20));
    assert_eq!(balances(&next), vec![-5, 15]);
    assert_eq!(next.total_chips(), Chips(10));
}

#[test]
fn showdown_with_strict_policy_skips_like_lucky_draw() {
    let config = GameConfig::new(GameVariant::Showdown, Chips(5))
        .with_betting_policy(BettingPolicy::RejectIfInsufficient);
    let state = new_game(["A", "B"], config).unwrap();

    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();
    assert_eq!(outcome.pot_awarded, Chips::ZERO);
    assert_eq!(balances(&next), vec![5, 5]);
}

#[test]
fn too_many_showdown_participants_is_insufficient_cards() {
    let names: Vec<String> = (1..=18).map(|i| format!("Player {i}")).collect();
    let state = new_game(names, GameConfig::showdown_default()).unwrap();
    let mut rng = DeterministicRng::from_seed(5);

    let err = play_round(&state, Chips(10), &mut rng).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            required: 54,
            available: 52
        }
    );
    // Ставки не видны снаружи: снимок прежний.
    assert!(state.participants.iter().all(|p| p.balance == Chips(100)));

    // 17 * 3 = 51 — помещается.
    let names: Vec<String> = (1..=17).map(|i| format!("Player {i}")).collect();
    let state = new_game(names, GameConfig::showdown_default()).unwrap();
    let (next, _) = play_round(&state, Chips(10), &mut rng).unwrap();
    assert_eq!(next.total_chips(), Chips(1700));
}

#[test]
fn many_rounds_conserve_chips_and_replay_with_same_seed() {
    let start = lucky(&["A", "B", "C"], 100);

    let run = |seed: u64| {
        let mut rng = DeterministicRng::from_seed(seed);
        let mut state = start.clone();
        let mut winners = Vec::new();
        for _ in 0..25 {
            let (next, outcome) = play_round(&state, Chips(7), &mut rng).unwrap();
            assert_eq!(next.total_chips(), Chips(300));
            assert!(next.participants.iter().all(|p| !p.balance.is_negative()));
            winners.push(outcome.winner_id);
            state = next;
        }
        (state, winners)
    };

    let (s1, w1) = run(99);
    let (s2, w2) = run(99);
    assert_eq!(s1, s2);
    assert_eq!(w1, w2);
    assert_eq!(s1.rounds_played, 25);
}

// ----------------------
// RoundEngine по шагам
// ----------------------

#[test]
fn round_engine_walks_through_phases() {
    let state = showdown(&["A", "B"], 100);
    let mut engine = RoundEngine::new(&state, Chips(10)).unwrap();
    assert_eq!(engine.phase, RoundPhase::Idle);

    engine.collect_bets().unwrap();
    assert_eq!(engine.phase, RoundPhase::BetsCollected);
    assert_eq!(engine.pot.total, Chips(20));

    engine.deal(&mut NoShuffle).unwrap();
    assert_eq!(engine.phase, RoundPhase::Dealt);
    assert_eq!(engine.remaining_deck.as_ref().map(|d| d.len()), Some(46));

    engine.resolve().unwrap();
    assert_eq!(engine.phase, RoundPhase::Resolved);
    assert_eq!(engine.pot.total, Chips::ZERO);
    assert_eq!(engine.evaluations.len(), 2);

    let (next, outcome) = engine.finish().unwrap();
    assert_eq!(next.rounds_played, 1);
    assert_eq!(outcome.round_id, 1);
}

#[test]
fn round_engine_rejects_out_of_order_steps() {
    let state = lucky(&["A", "B"], 100);

    let mut engine = RoundEngine::new(&state, Chips(10)).unwrap();
    assert_eq!(
        engine.deal(&mut NoShuffle),
        Err(EngineError::IllegalPhase {
            expected: RoundPhase::BetsCollected,
            actual: RoundPhase::Idle,
        })
    );
    assert!(matches!(
        engine.resolve(),
        Err(EngineError::IllegalPhase { .. })
    ));

    engine.collect_bets().unwrap();
    assert!(matches!(
        engine.collect_bets(),
        Err(EngineError::IllegalPhase { .. })
    ));

    assert!(matches!(
        engine.finish(),
        Err(EngineError::IllegalPhase {
            expected: RoundPhase::Resolved,
            actual: RoundPhase::BetsCollected,
        })
    ));
}

#[test]
fn history_records_the_round_in_order() {
    let state = showdown(&["A", "B"], 100);
    let (_, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    let kinds: Vec<&RoundEventKind> = outcome.history.kinds().collect();
    assert!(matches!(
        kinds.first(),
        Some(RoundEventKind::RoundStarted { round_id: 1, .. })
    ));
    assert!(matches!(
        kinds.last(),
        Some(RoundEventKind::RoundFinished { round_id: 1 })
    ));

    let awarded: Vec<_> = kinds
        .iter()
        .filter_map(|k| match k {
            RoundEventKind::PotAwarded {
                participant_id,
                amount,
            } => Some((*participant_id, *amount)),
            _ => None,
        })
        .collect();
    assert_eq!(awarded, vec![(2, Chips(20))]);

    let evaluated = kinds
        .iter()
        .filter(|k| matches!(k, RoundEventKind::HandEvaluated { .. }))
        .count();
    assert_eq!(evaluated, 2);

    for (i, e) in outcome.history.events.iter().enumerate() {
        assert_eq!(e.index as usize, i);
    }
}

#[test]
fn outcome_exposes_hands_and_winner() {
    let state = lucky(&["A", "B", "C"], 100);
    let (next, outcome) = play_round(&state, Chips(10), &mut NoShuffle).unwrap();

    let hands = outcome.updated_hands();
    assert_eq!(hands.len(), 3);
    for ((id, cards), p) in hands.iter().zip(&next.participants) {
        assert_eq!(*id, p.id);
        assert_eq!(cards, &p.cards);
    }

    let winner = outcome.winner().unwrap();
    assert!(winner.is_winner);
    assert_eq!(winner.participant_id, outcome.winner_id);
    assert_eq!(outcome.results.iter().filter(|r| r.is_winner).count(), 1);
}

// ----------------------
// переполнение фишек
// ----------------------

#[test]
fn huge_showdown_bet_aborts_round_without_losing_chips() {
    let state = showdown(&["A", "B"], 100);
    let bet = parse_bet_amount(&i64::MAX.to_string()).unwrap();

    let err = play_round(&state, bet, &mut NoShuffle).unwrap_err();
    assert!(matches!(err, EngineError::ChipOverflow(_)));
    assert_eq!(balances(&state), vec![100, 100]);
    assert_eq!(state.pot, Chips::ZERO);
    assert_eq!(state.rounds_played, 0);
}

#[test]
fn winner_balance_overflow_aborts_round() {
    let state = lucky(&["A", "B"], i64::MAX);

    let err = play_round(&state, Chips(1), &mut NoShuffle).unwrap_err();
    assert!(matches!(err, EngineError::ChipOverflow(_)));
    assert_eq!(balances(&state), vec![i64::MAX, i64::MAX]);
}

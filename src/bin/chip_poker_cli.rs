// src/bin/chip_poker_cli.rs

use std::path::PathBuf;

use chip_poker_engine::api::{execute, Command, CommandResponse, NewGameCommand, PlayRoundCommand};
use chip_poker_engine::domain::{GameConfig, GameState, GameVariant};
use chip_poker_engine::engine::RandomSource;
use chip_poker_engine::infra::{load_config, DeterministicRng, SystemRng};
use clap::{Parser, ValueEnum};
use log::error;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    LuckyDraw,
    Showdown,
}

#[derive(Debug, Parser)]
struct Cli {
    /// Вариант игры (игнорируется, если задан --config).
    #[clap(long, short, value_enum, default_value_t = VariantArg::LuckyDraw)]
    variant: VariantArg,
    /// JSON-конфиг игры.
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Имена участников; по умолчанию стандартный состав варианта.
    #[clap(long, short, value_delimiter = ',')]
    players: Vec<String>,
    /// Ставка, как её ввели бы в поле.
    #[clap(long, short, default_value = "10")]
    bet: String,
    /// Сколько раундов сыграть.
    #[clap(long, short, default_value_t = 5)]
    rounds: u32,
    /// Seed для воспроизводимых раздач.
    #[clap(long)]
    seed: Option<u64>,
}

/// Системный или детерминированный RNG, в зависимости от --seed.
enum CliRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RandomSource for CliRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            CliRng::System(r) => r.shuffle(slice),
            CliRng::Seeded(r) => r.shuffle(slice),
        }
    }
}

fn print_game(state: &GameState) {
    for p in &state.participants {
        let cards: Vec<String> = p.cards.iter().map(|c| c.to_string()).collect();
        println!(
            "    {:<12} chips={:<6} cards=[{}]",
            p.name,
            p.balance.0,
            cards.join(" ")
        );
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("{e}");
                return;
            }
        },
        None => match cli.variant {
            VariantArg::LuckyDraw => GameConfig::lucky_draw_default(),
            VariantArg::Showdown => GameConfig::showdown_default(),
        },
    };

    let mut rng = match cli.seed {
        Some(seed) => CliRng::Seeded(DeterministicRng::from_seed(seed)),
        None => CliRng::System(SystemRng),
    };

    let variant_name = match config.variant {
        GameVariant::LuckyDraw => "LUCKY DRAW",
        GameVariant::Showdown => "SHOWDOWN",
    };
    println!("=== {variant_name} ===\n");

    let new_game = Command::NewGame(NewGameCommand {
        participant_names: cli.players.clone(),
        config,
    });
    let mut state = match execute(None, new_game, &mut rng) {
        Ok((state, _)) => state,
        Err(e) => {
            error!("{}", e.user_message());
            return;
        }
    };
    print_game(&state);

    for _ in 0..cli.rounds {
        let cmd = Command::PlayRound(PlayRoundCommand {
            bet_amount: cli.bet.clone(),
        });
        match execute(Some(&state), cmd, &mut rng) {
            Ok((next, CommandResponse::RoundPlayed { outcome, .. })) => {
                println!("\nRound {}: {}", outcome.round_id, outcome.message);
                state = next;
                print_game(&state);
            }
            Ok((next, _)) => state = next,
            Err(e) => {
                println!("\n{}", e.user_message());
                break;
            }
        }
    }

    println!("\n=== DONE after {} rounds ===", state.rounds_played);
}

//! Color Clash - Main Binary
//!
//! Headless battle runner and catalog inspection tools

use clap::{Parser, Subcommand};
use colorclash::{
    ai::Difficulty,
    catalog::{self, CardCatalog, DeckList},
    core::Player,
    game::{BattleEngine, BattleLogger, BattleResult, BattleState, Seat, VerbosityLevel},
    EngineError, Result,
};

/// Safety net against stalled battles (mirrored champions with empty decks
/// can loop forever under strategies that refuse mirror attacks)
const TURN_LIMIT: u32 = 1000;

#[derive(Parser)]
#[command(name = "colorclash")]
#[command(about = "Color Clash - color-wheel card battle engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run seat-vs-seat battles between two AI strategies
    Sim {
        /// Strategy tier for seat 1 (easy, medium, hard)
        #[arg(long, default_value = "easy")]
        p1: Difficulty,

        /// Strategy tier for seat 2 (easy, medium, hard)
        #[arg(long, default_value = "hard")]
        p2: Difficulty,

        /// Number of battles to run
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Set random seed for deterministic battles
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level for battle output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, short = 'v', default_value = "normal")]
        verbosity: VerbosityLevel,

        /// Print the final snapshot of each battle as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every card in the built-in catalog
    Cards,

    /// Show the built-in starter deck lists
    Decks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            p1,
            p2,
            games,
            seed,
            verbosity,
            json,
        } => run_simulation(p1, p2, games, seed, verbosity, json),
        Commands::Cards => {
            list_cards();
            Ok(())
        }
        Commands::Decks => {
            list_decks();
            Ok(())
        }
    }
}

fn run_simulation(
    p1: Difficulty,
    p2: Difficulty,
    games: u32,
    seed: Option<u64>,
    verbosity: VerbosityLevel,
    json: bool,
) -> Result<()> {
    let catalog = CardCatalog::builtin();
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut p1_wins = 0u32;
    let mut p2_wins = 0u32;
    let mut draws = 0u32;

    for game in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(game));
        let result = run_battle(&catalog, p1, p2, game_seed, verbosity, json)?;
        match result {
            Some(BattleResult::PlayerWin) => p1_wins += 1,
            Some(BattleResult::AiWin) => p2_wins += 1,
            Some(BattleResult::Draw) | None => draws += 1,
        }
    }

    println!(
        "Results over {games} game(s) (base seed {base_seed}): \
         seat 1 ({p1}) won {p1_wins}, seat 2 ({p2}) won {p2_wins}, {draws} drawn/stalled"
    );
    Ok(())
}

/// Run one battle to completion. `None` means the turn limit was hit.
fn run_battle(
    catalog: &CardCatalog,
    p1: Difficulty,
    p2: Difficulty,
    seed: u64,
    verbosity: VerbosityLevel,
    json: bool,
) -> Result<Option<BattleResult>> {
    let deck1 = catalog::starter_quest().materialize(catalog, 0)?;
    let deck2 = catalog::starter_tides().materialize(catalog, 100)?;
    let seat1 = Player::new("Player", "avatars/player.png", &deck1);
    let seat2 = Player::new("AI", "avatars/ai.png", &deck2);

    let state = BattleState::new(seat1, seat2, seed, None);
    let mut logger = BattleLogger::new(verbosity);
    let mut engine = BattleEngine::new(state, p2, &mut logger);

    while !engine.state().is_over() && engine.state().turn.turn_number <= TURN_LIMIT {
        let difficulty = match engine.state().active_seat() {
            Seat::Human => p1,
            Seat::Ai => p2,
        };
        engine.run_strategy_turn(difficulty)?;
    }

    let snapshot = engine.snapshot();
    if json {
        let rendered = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| EngineError::SerializationError(e.to_string()))?;
        println!("{rendered}");
    }
    Ok(snapshot.result)
}

fn list_cards() {
    let catalog = CardCatalog::builtin();
    println!("{} cards in the catalog:", catalog.len());
    for entry in catalog.entries() {
        let effects: Vec<String> = entry.effects.iter().map(|e| e.to_string()).collect();
        println!(
            "  {:20} {:24} {:12} {}",
            entry.id,
            entry.name,
            entry.color.to_string(),
            effects.join(", ")
        );
    }
}

fn list_decks() {
    for list in [catalog::starter_quest(), catalog::starter_tides()] {
        print_deck(&list);
    }
}

fn print_deck(list: &DeckList) {
    println!("{} ({} cards):", list.name, list.card_ids.len());
    for id in &list.card_ids {
        println!("  {id}");
    }
}

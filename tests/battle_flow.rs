//! Battle flow and determinism tests
//!
//! Full games through the public surface: turn legality, stacking, card
//! conservation, and seed-deterministic replays with the built-in catalog.

use colorclash::ai::Difficulty;
use colorclash::catalog::{self, CardCatalog};
use colorclash::core::{Card, CardId, Color, Deck, Effect, Player};
use colorclash::game::{
    AttackTarget, BattleEngine, BattleState, GameEvent, NullSink, Phase, RecordingSink, Seat,
};
use colorclash::Result;

const TURN_LIMIT: u32 = 1000;

fn mono_deck(first_id: u32, color: Color) -> Deck {
    let cards = (0..10)
        .map(|i| {
            Card::new(
                CardId::new(first_id + i),
                format!("Card {}", first_id + i),
                color,
                &[Effect::None],
            )
        })
        .collect();
    Deck::new("mono", cards).expect("ten cards")
}

fn catalog_state(seed: u64) -> BattleState {
    let catalog = CardCatalog::builtin();
    let deck1 = catalog::starter_quest()
        .materialize(&catalog, 0)
        .expect("starter deck");
    let deck2 = catalog::starter_tides()
        .materialize(&catalog, 100)
        .expect("starter deck");
    let human = Player::new("Player", "p.png", &deck1);
    let ai = Player::new("AI", "a.png", &deck2);
    BattleState::new(human, ai, seed, None)
}

/// An attack is rejected on the starting seat's first turn but legal on that
/// seat's next turn
#[test]
fn test_first_turn_attack_restriction() -> Result<()> {
    let human = Player::new("Player", "p.png", &mono_deck(0, Color::Yellow));
    let ai = Player::new("AI", "a.png", &mono_deck(100, Color::Green));
    let state = BattleState::new(human, ai, 7, Some(Seat::Human));
    let mut sink = NullSink;
    let mut engine = BattleEngine::new(state, Difficulty::Easy, &mut sink);

    // Turn 1: play a champion, then try to force combat
    engine.draw_for_active_player()?;
    let id = engine.state().human.hand[0].id;
    engine.play_card(id)?;
    // Phase advance skips combat entirely, so the attack arrives in END
    let snap = engine.advance_phase()?;
    assert_eq!(snap.phase, Phase::End);
    assert!(engine.attack(AttackTarget::Direct).is_err());
    engine.advance_phase()?;

    // AI turn 2 passes
    engine.draw_for_active_player()?;
    engine.advance_phase()?;
    engine.advance_phase()?;
    engine.advance_phase()?;

    // Human turn 3: the restriction is gone
    engine.draw_for_active_player()?;
    engine.advance_phase()?; // decline to play
    let snap = engine.attack(AttackTarget::Direct)?;
    assert_eq!(snap.ai.life, 4); // YELLOW hits for 3
    Ok(())
}

/// Stacked champions fall as one unit: the whole stack reaches the tomb in
/// the same transition
#[test]
fn test_defeated_stack_is_buried_atomically() -> Result<()> {
    let human = Player::new("Player", "p.png", &mono_deck(0, Color::Yellow));
    let ai = Player::new("AI", "a.png", &mono_deck(100, Color::Purple));
    let state = BattleState::new(human, ai, 7, Some(Seat::Human));
    let mut sink = NullSink;
    let mut engine = BattleEngine::new(state, Difficulty::Easy, &mut sink);

    // Human turn 1: first champion
    engine.draw_for_active_player()?;
    let id = engine.state().human.hand[0].id;
    engine.play_card(id)?;
    engine.advance_phase()?;
    engine.advance_phase()?;

    // AI turn 2: champion, no attack
    engine.draw_for_active_player()?;
    let ai_id = engine.state().ai.hand[0].id;
    engine.play_card(ai_id)?;
    engine.advance_phase()?;
    engine.advance_phase()?;
    engine.advance_phase()?;

    // Human turn 3: stack a second card onto the champion
    engine.draw_for_active_player()?;
    let second = engine.state().human.hand[0].id;
    let snap = engine.play_card(second)?;
    assert_eq!(snap.human.champion.as_ref().expect("champion").stack_size, 2);
    engine.advance_phase()?;
    engine.advance_phase()?;
    engine.advance_phase()?;

    // AI turn 4: PURPLE(6) into YELLOW(3) pushes to 0 and defeats the stack
    engine.draw_for_active_player()?;
    engine.advance_phase()?;
    let snap = engine.attack(AttackTarget::Champion)?;
    assert!(snap.human.champion.is_none());
    assert_eq!(snap.human.tomb_size, 2);
    Ok(())
}

/// The same seed replays the same battle, event for event
#[test]
fn test_seeded_battles_replay_identically() -> Result<()> {
    fn run(seed: u64) -> Result<Vec<GameEvent>> {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(catalog_state(seed), Difficulty::Easy, &mut sink);
        while !engine.state().is_over() && engine.state().turn.turn_number <= TURN_LIMIT {
            let tier = match engine.state().active_seat() {
                Seat::Human => Difficulty::Intermediate,
                Seat::Ai => Difficulty::Easy,
            };
            engine.run_strategy_turn(tier)?;
        }
        drop(engine);
        Ok(sink.events)
    }

    assert_eq!(run(12345)?, run(12345)?);
    Ok(())
}

/// Every strategy pairing plays out without violating card conservation or
/// the life bounds
#[test]
fn test_all_strategy_pairs_hold_invariants() -> Result<()> {
    let tiers = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard];
    for (i, &p1) in tiers.iter().enumerate() {
        for (j, &p2) in tiers.iter().enumerate() {
            let seed = 1000 + (i * 3 + j) as u64;
            let mut sink = NullSink;
            let mut engine = BattleEngine::new(catalog_state(seed), p2, &mut sink);
            while !engine.state().is_over() && engine.state().turn.turn_number <= TURN_LIMIT {
                let tier = match engine.state().active_seat() {
                    Seat::Human => p1,
                    Seat::Ai => p2,
                };
                engine.run_strategy_turn(tier)?;
            }

            let state = engine.state();
            for seat in [Seat::Human, Seat::Ai] {
                let player = state.player(seat);
                assert!((0..=7).contains(&player.life), "life out of bounds");
                let total = player.hand_size()
                    + player.deck_size()
                    + player.tomb_size()
                    + player.champion.stack_size();
                assert_eq!(total, 10, "cards leaked for {seat} under {p1}/{p2}");
            }
        }
    }
    Ok(())
}

/// A finished battle rejects every intent and its result never changes
#[test]
fn test_finished_battle_is_frozen() -> Result<()> {
    let human = Player::new("Player", "p.png", &mono_deck(0, Color::Green));
    let ai = Player::new("AI", "a.png", &mono_deck(100, Color::White));
    let state = BattleState::new(human, ai, 3, Some(Seat::Human));
    let mut sink = RecordingSink::new();
    let mut engine = BattleEngine::new(state, Difficulty::Easy, &mut sink);

    // Human passes turn 1
    engine.draw_for_active_player()?;
    engine.advance_phase()?;
    engine.advance_phase()?;

    // AI turn 2: WHITE(7) direct attack ends it in one hit
    engine.draw_for_active_player()?;
    let id = engine.state().ai.hand[0].id;
    engine.play_card(id)?;
    engine.advance_phase()?;
    let snap = engine.attack(AttackTarget::Direct)?;
    let result = snap.result.expect("battle over");

    assert!(engine.draw_for_active_player().is_err());
    assert!(engine.advance_phase().is_err());
    assert!(engine.run_ai_turn().is_err());
    assert_eq!(engine.snapshot().result, Some(result));

    drop(engine);
    let game_overs = sink.count_matching(|e| matches!(e, GameEvent::GameOver { .. }));
    assert_eq!(game_overs, 1);
    Ok(())
}

/// Observer ordering: a played card is announced after its draw, and the
/// game-over notification is published at most once per battle
#[test]
fn test_event_stream_ordering() -> Result<()> {
    let mut sink = RecordingSink::new();
    let mut engine = BattleEngine::new(catalog_state(77), Difficulty::Hard, &mut sink);
    while !engine.state().is_over() && engine.state().turn.turn_number <= TURN_LIMIT {
        let tier = match engine.state().active_seat() {
            Seat::Human => Difficulty::Hard,
            Seat::Ai => Difficulty::Hard,
        };
        engine.run_strategy_turn(tier)?;
    }
    drop(engine);

    assert!(matches!(sink.events[0], GameEvent::TurnStarted { .. }));
    let game_overs = sink.count_matching(|e| matches!(e, GameEvent::GameOver { .. }));
    assert!(game_overs <= 1);

    // Turn numbers never decrease across the stream
    let mut last_turn = 0;
    for event in &sink.events {
        if let GameEvent::TurnStarted { turn_number, .. } = event {
            assert!(*turn_number > last_turn);
            last_turn = *turn_number;
        }
    }
    Ok(())
}

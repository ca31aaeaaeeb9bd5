//! The battle engine: validated intents over the phase state machine
//!
//! The engine wraps a `BattleState` and is the only writer to it. Intents are
//! validated against the current phase and the active seat; a rejected intent
//! returns `EngineError::InvalidAction` and leaves the state untouched. Every
//! committed transition is published to the injected sink before the call
//! returns, so observers always see transitions in commit order.
//!
//! Empty resources are not errors: drawing from an empty deck and attacking
//! with no champion are quiet no-ops, matching the tabletop reading of those
//! situations.

use crate::ai::{self, DecisionContext, Difficulty};
use crate::core::{CardId, Color};
use crate::game::combat::{self, CombatOutcome};
use crate::game::events::{AttackOutcome, EventSink, GameEvent};
use crate::game::phase::{Phase, Seat};
use crate::game::state::{BattleSnapshot, BattleState};
use crate::{EngineError, Result};

/// What an attack is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTarget {
    /// The opponent's active champion
    Champion,
    /// The opponent's life total; legal only with an empty opposing lane
    Direct,
}

pub struct BattleEngine<'a> {
    state: BattleState,

    /// Difficulty driving the AI seat
    difficulty: Difficulty,

    /// Injected observer; the engine owns no global event bus
    sink: &'a mut dyn EventSink,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: BattleState, difficulty: Difficulty, sink: &'a mut dyn EventSink) -> Self {
        let mut engine = BattleEngine {
            state,
            difficulty,
            sink,
        };
        engine.emit(GameEvent::TurnStarted {
            seat: engine.state.active_seat(),
            turn_number: engine.state.turn.turn_number,
        });
        engine
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.state.snapshot()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    // ---- intents -----------------------------------------------------------

    /// DRAW intent: the active seat draws one card (no-op on an empty deck)
    /// and the phase auto-advances to CHAMPION.
    pub fn draw_for_active_player(&mut self) -> Result<BattleSnapshot> {
        self.ensure_running()?;
        self.ensure_phase(Phase::Draw)?;
        self.do_draw_phase();
        Ok(self.snapshot())
    }

    /// CHAMPION intent: play one card from the active hand into the champion
    /// zone. At most one card per turn.
    pub fn play_card(&mut self, card_id: CardId) -> Result<BattleSnapshot> {
        self.ensure_running()?;
        self.ensure_phase(Phase::Champion)?;
        if self.state.card_played_this_turn {
            return Err(EngineError::InvalidAction(
                "only one card may be played per turn".into(),
            ));
        }
        let seat = self.state.active_seat();
        if self.state.player(seat).hand_card(card_id).is_none() {
            return Err(EngineError::InvalidAction(format!(
                "card {card_id} is not in the active player's hand"
            )));
        }
        self.do_play(card_id)?;
        Ok(self.snapshot())
    }

    /// COMBAT intent: one attack, then the phase ends. Rejected during the
    /// starting seat's first turn. Attacking with no champion is a no-op that
    /// still closes the phase.
    pub fn attack(&mut self, target: AttackTarget) -> Result<BattleSnapshot> {
        self.ensure_running()?;
        self.ensure_phase(Phase::Combat)?;
        if self.state.turn.attack_restricted() {
            return Err(EngineError::InvalidAction(
                "attacks are not allowed on the first turn".into(),
            ));
        }
        if self.state.attacked_this_turn {
            return Err(EngineError::InvalidAction(
                "only one attack may be made per turn".into(),
            ));
        }

        let seat = self.state.active_seat();
        let opponent = seat.opponent();
        if self.state.player(seat).champion.is_empty() {
            // EmptyResource: nothing to attack with, phase just closes
            self.close_combat();
            return Ok(self.snapshot());
        }

        let defender_occupied = !self.state.player(opponent).champion.is_empty();
        match target {
            AttackTarget::Champion if !defender_occupied => {
                return Err(EngineError::InvalidAction(
                    "opponent has no champion to attack".into(),
                ));
            }
            AttackTarget::Direct if defender_occupied => {
                return Err(EngineError::InvalidAction(
                    "direct attacks require an empty opposing champion zone".into(),
                ));
            }
            AttackTarget::Champion => self.do_champion_attack(),
            AttackTarget::Direct => self.do_direct_attack(),
        }
        self.close_combat();
        Ok(self.snapshot())
    }

    /// Advance out of the current phase without a phase-specific action:
    /// DRAW draws and moves on, CHAMPION declines to play, COMBAT declines to
    /// attack, END hands the turn over.
    pub fn advance_phase(&mut self) -> Result<BattleSnapshot> {
        self.ensure_running()?;
        match self.state.phase() {
            Phase::Draw => self.do_draw_phase(),
            Phase::Champion => {
                self.set_phase(Phase::Combat);
                // The first-turn restriction auto-skips combat entirely
                if self.state.turn.attack_restricted() {
                    self.set_phase(Phase::End);
                }
            }
            Phase::Combat => self.close_combat(),
            Phase::End => self.end_turn(),
        }
        Ok(self.snapshot())
    }

    /// Run the AI seat's whole turn synchronously: draw, strategy card
    /// choice, strategy attack decision, end of turn. Must be called at the
    /// start of the AI's turn (DRAW phase).
    pub fn run_ai_turn(&mut self) -> Result<BattleSnapshot> {
        if self.state.active_seat() != Seat::Ai {
            return Err(EngineError::InvalidAction(
                "it is not the AI seat's turn".into(),
            ));
        }
        let difficulty = self.difficulty;
        self.run_strategy_turn(difficulty)
    }

    /// Drive the active seat's whole turn with the given strategy tier,
    /// whichever seat it is. Used for AI-vs-AI simulation.
    pub fn run_strategy_turn(&mut self, difficulty: Difficulty) -> Result<BattleSnapshot> {
        self.ensure_running()?;
        self.ensure_phase(Phase::Draw)?;

        let seat = self.state.active_seat();
        self.do_draw_phase();

        // Champion phase: ask the strategy for a hand index
        let choice = {
            let player = self.state.player(seat);
            let opponent = self.state.player(seat.opponent());
            let ctx = DecisionContext {
                hand: &player.hand,
                opponent_champion: opponent.champion.active(),
                own_champion: player.champion.active(),
                opponent_life: opponent.life,
                own_life: player.life,
                first_turn: self.state.turn.first_turn,
            };
            let mut rng = self.state.rng.borrow_mut();
            ai::select_card_to_play(difficulty, &ctx, &mut *rng)
                .map(|idx| player.hand[idx].id)
        };
        if let Some(card_id) = choice {
            self.do_play(card_id)?;
        }
        self.set_phase(Phase::Combat);

        // Combat phase: strategy decides, restriction and empty lane aside
        if !self.state.turn.attack_restricted() {
            let decision = {
                let player = self.state.player(seat);
                let opponent = self.state.player(seat.opponent());
                player.champion.active().map(|own| {
                    let target = if opponent.champion.is_empty() {
                        AttackTarget::Direct
                    } else {
                        AttackTarget::Champion
                    };
                    (
                        ai::should_attack(difficulty, own, opponent.champion.active()),
                        target,
                    )
                })
            };
            if let Some((true, target)) = decision {
                match target {
                    AttackTarget::Champion => self.do_champion_attack(),
                    AttackTarget::Direct => self.do_direct_attack(),
                }
            }
        }
        self.close_combat();

        if !self.state.is_over() {
            self.end_turn();
        }
        Ok(self.snapshot())
    }

    // ---- internals ---------------------------------------------------------

    fn ensure_running(&self) -> Result<()> {
        if self.state.is_over() {
            return Err(EngineError::InvalidAction("the game is over".into()));
        }
        Ok(())
    }

    fn ensure_phase(&self, expected: Phase) -> Result<()> {
        let phase = self.state.phase();
        if phase != expected {
            return Err(EngineError::InvalidAction(format!(
                "action not legal in {phase} phase"
            )));
        }
        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        self.sink.publish(&event);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.state.turn.phase = phase;
        let seat = self.state.active_seat();
        self.emit(GameEvent::PhaseChanged { seat, phase });
    }

    /// Draw for the active seat and auto-advance to CHAMPION
    fn do_draw_phase(&mut self) {
        let seat = self.state.active_seat();
        let drawn = self
            .state
            .player_mut(seat)
            .draw_card()
            .map(|card| (card.id, card.name.clone()));
        if let Some((card_id, card_name)) = drawn {
            self.emit(GameEvent::CardDrawn {
                seat,
                card_id,
                card_name,
            });
        }
        self.set_phase(Phase::Champion);
    }

    fn do_play(&mut self, card_id: CardId) -> Result<()> {
        let seat = self.state.active_seat();
        let player = self.state.player_mut(seat);
        let (name, color) = {
            let card = player
                .hand_card(card_id)
                .ok_or(EngineError::CardNotFound(card_id.as_u32()))?;
            (card.name.clone(), card.current_color)
        };
        let stacked = player.play_card(card_id)?;
        self.state.card_played_this_turn = true;
        self.emit(GameEvent::CardPlayed {
            seat,
            card_id,
            card_name: name,
            color,
            stacked,
        });
        Ok(())
    }

    fn do_champion_attack(&mut self) {
        let seat = self.state.active_seat();
        let opponent = seat.opponent();

        // Both zones were checked occupied by the caller
        let attacker_color = match self.state.player(seat).champion.active() {
            Some(card) => card.current_color,
            None => return,
        };
        let defender_color = match self.state.player(opponent).champion.active() {
            Some(card) => card.current_color,
            None => return,
        };

        let outcome = combat::resolve_champion_combat(attacker_color, defender_color);
        self.state.attacked_this_turn = true;
        self.apply_combat_outcome(seat, defender_color, outcome);
    }

    fn apply_combat_outcome(&mut self, attacker: Seat, defender_color: Color, outcome: CombatOutcome) {
        let defender = attacker.opponent();
        let event_outcome = if outcome.attacker_defeated && outcome.defender_defeated {
            AttackOutcome::MutualDefeat
        } else if outcome.defender_defeated {
            AttackOutcome::DefenderDefeated
        } else {
            AttackOutcome::DefenderPushed {
                new_color: outcome.new_defender_color.unwrap_or(defender_color),
            }
        };
        self.emit(GameEvent::AttackResolved {
            attacker,
            outcome: event_outcome,
        });

        if outcome.attacker_defeated {
            self.state.player_mut(attacker).bury_champion();
            self.emit(GameEvent::ChampionDefeated { seat: attacker });
        }
        if outcome.defender_defeated {
            self.state.player_mut(defender).bury_champion();
            self.emit(GameEvent::ChampionDefeated { seat: defender });
        } else if let Some(color) = outcome.new_defender_color {
            self.state
                .player_mut(defender)
                .champion
                .set_active_color(color);
        }
    }

    fn do_direct_attack(&mut self) {
        let seat = self.state.active_seat();
        let opponent = seat.opponent();

        // The caller checked the zone is occupied
        let damage = match self.state.player(seat).champion.active() {
            Some(own) => combat::direct_damage(own.current_color),
            None => return,
        };
        self.state.attacked_this_turn = true;
        self.emit(GameEvent::AttackResolved {
            attacker: seat,
            outcome: AttackOutcome::Direct { damage },
        });

        let life = self.state.player_mut(opponent).change_life(-damage);
        self.emit(GameEvent::LifeChanged {
            seat: opponent,
            life,
        });
        if let Some(result) = self.state.check_game_end() {
            self.emit(GameEvent::GameOver { result });
        }
    }

    /// Leave COMBAT for END (after an attack, a decline, or a skip)
    fn close_combat(&mut self) {
        self.set_phase(Phase::End);
    }

    fn end_turn(&mut self) {
        let seat = self.state.active_seat();
        self.emit(GameEvent::TurnEnded { seat });
        self.state.turn.next_turn();
        self.state.card_played_this_turn = false;
        self.state.attacked_this_turn = false;
        self.emit(GameEvent::TurnStarted {
            seat: self.state.active_seat(),
            turn_number: self.state.turn.turn_number,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, Color, Deck, Effect, Player};
    use crate::game::events::RecordingSink;

    fn deck(first_id: u32, colors: [Color; 10]) -> Deck {
        let cards = colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                Card::new(
                    CardId::new(first_id + i as u32),
                    format!("Card {}", first_id + i as u32),
                    *color,
                    &[Effect::None],
                )
            })
            .collect();
        Deck::new("test", cards).unwrap()
    }

    fn flat_deck(first_id: u32, color: Color) -> Deck {
        deck(first_id, [color; 10])
    }

    fn new_state(human_color: Color, ai_color: Color) -> BattleState {
        let human = Player::new("Alice", "a.png", &flat_deck(0, human_color));
        let ai = Player::new("Bot", "b.png", &flat_deck(100, ai_color));
        BattleState::new(human, ai, 11, Some(Seat::Human))
    }

    #[test]
    fn test_draw_intent_advances_to_champion() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );

        let snap = engine.draw_for_active_player().unwrap();
        assert_eq!(snap.phase, Phase::Champion);
        assert_eq!(snap.human.hand_size, 4);
    }

    #[test]
    fn test_intents_rejected_in_wrong_phase() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );

        // Still in DRAW: playing and attacking are both illegal
        assert!(engine.play_card(CardId::new(0)).is_err());
        assert!(engine.attack(AttackTarget::Direct).is_err());
        // And the state did not move
        assert_eq!(engine.snapshot().phase, Phase::Draw);
    }

    #[test]
    fn test_one_card_per_turn() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );
        engine.draw_for_active_player().unwrap();

        let first = engine.state().human.hand[0].id;
        let second = engine.state().human.hand[1].id;
        engine.play_card(first).unwrap();
        let err = engine.play_card(second).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAction(_)));
    }

    #[test]
    fn test_first_turn_attack_rejected_and_skipped() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );
        engine.draw_for_active_player().unwrap();
        let id = engine.state().human.hand[0].id;
        engine.play_card(id).unwrap();

        // Leaving CHAMPION skips COMBAT entirely on the first turn
        let snap = engine.advance_phase().unwrap();
        assert_eq!(snap.phase, Phase::End);
    }

    #[test]
    fn test_direct_attack_requires_empty_lane() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );

        // Human turn 1: play a champion, no combat allowed
        engine.draw_for_active_player().unwrap();
        let id = engine.state().human.hand[0].id;
        engine.play_card(id).unwrap();
        engine.advance_phase().unwrap(); // Champion -> End (combat skipped)
        engine.advance_phase().unwrap(); // End -> AI turn

        // AI turn 2: play a champion and stop before attacking
        engine.draw_for_active_player().unwrap();
        let ai_id = engine.state().ai.hand[0].id;
        engine.play_card(ai_id).unwrap();
        engine.advance_phase().unwrap(); // Champion -> Combat

        // Opponent lane is occupied: direct attack is an illegal target
        let err = engine.attack(AttackTarget::Direct).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAction(_)));
        // Champion attack works: RED(1) vs GREEN(4) pushes to WHITE, defeat
        let snap = engine.attack(AttackTarget::Champion).unwrap();
        assert_eq!(snap.phase, Phase::End);
        assert!(snap.human.champion.is_none());
        assert_eq!(snap.human.tomb_size, 1);
    }

    #[test]
    fn test_attack_with_no_champion_is_noop() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );
        // Human plays nothing on turn 1
        engine.draw_for_active_player().unwrap();
        engine.advance_phase().unwrap(); // Champion -> End (first turn)
        engine.advance_phase().unwrap(); // -> AI turn
        engine.run_ai_turn().unwrap();

        // Human turn 3 with no champion: attack quietly closes combat
        engine.draw_for_active_player().unwrap();
        engine.advance_phase().unwrap(); // Champion -> Combat
        let snap = engine.attack(AttackTarget::Direct).unwrap();
        assert_eq!(snap.phase, Phase::End);
        drop(engine);

        // The human seat never produced an attack event
        let human_attacks = sink.count_matching(|e| {
            matches!(
                e,
                GameEvent::AttackResolved {
                    attacker: Seat::Human,
                    ..
                }
            )
        });
        assert_eq!(human_attacks, 0);
    }

    #[test]
    fn test_mutual_defeat_buries_both_stacks() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Blue, Color::Blue),
            Difficulty::Easy,
            &mut sink,
        );

        // Human turn 1
        engine.draw_for_active_player().unwrap();
        let id = engine.state().human.hand[0].id;
        engine.play_card(id).unwrap();
        engine.advance_phase().unwrap();
        engine.advance_phase().unwrap();

        // AI turn 2
        engine.draw_for_active_player().unwrap();
        let ai_id = engine.state().ai.hand[0].id;
        engine.play_card(ai_id).unwrap();
        engine.advance_phase().unwrap();
        let snap = engine.attack(AttackTarget::Champion).unwrap();

        // BLUE vs BLUE trades both champions
        assert!(snap.human.champion.is_none());
        assert!(snap.ai.champion.is_none());
        assert_eq!(snap.human.tomb_size, 1);
        assert_eq!(snap.ai.tomb_size, 1);
    }

    #[test]
    fn test_direct_attack_can_end_game() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::White),
            Difficulty::Easy,
            &mut sink,
        );

        // Human turn 1: nothing
        engine.draw_for_active_player().unwrap();
        engine.advance_phase().unwrap();
        engine.advance_phase().unwrap();

        // AI turn 2: play WHITE and attack directly for 7
        engine.draw_for_active_player().unwrap();
        let ai_id = engine.state().ai.hand[0].id;
        engine.play_card(ai_id).unwrap();
        engine.advance_phase().unwrap();
        let snap = engine.attack(AttackTarget::Direct).unwrap();

        assert_eq!(snap.human.life, 0);
        assert_eq!(snap.result, Some(crate::game::state::BattleResult::AiWin));

        // Every further intent is rejected
        assert!(engine.advance_phase().is_err());
        assert!(engine.draw_for_active_player().is_err());
    }

    #[test]
    fn test_ai_turn_runs_to_completion() {
        let mut sink = RecordingSink::new();
        let human = Player::new("Alice", "a.png", &flat_deck(0, Color::Green));
        let ai = Player::new("Bot", "b.png", &flat_deck(100, Color::Red));
        let state = BattleState::new(human, ai, 5, Some(Seat::Ai));
        let mut engine = BattleEngine::new(state, Difficulty::Hard, &mut sink);

        let snap = engine.run_ai_turn().unwrap();
        // AI drew and played; turn passed to the human
        assert_eq!(snap.active, Seat::Human);
        assert_eq!(snap.phase, Phase::Draw);
        assert_eq!(snap.turn_number, 2);
        assert!(snap.ai.champion.is_some());
    }

    #[test]
    fn test_ai_turn_rejected_for_human_seat() {
        let mut sink = RecordingSink::new();
        let mut engine = BattleEngine::new(
            new_state(Color::Green, Color::Red),
            Difficulty::Easy,
            &mut sink,
        );
        assert!(engine.run_ai_turn().is_err());
    }
}

//! Application state for the battle screen: the engine plus UI-only bits.

use crate::input::InputCommand;
use battle::{BattleAction, BattleEngine, BattleRng, SeededRng, rules};
use error::GameError;
use serde_json::json;
use tracing::{debug, info};

pub struct App<R: BattleRng = SeededRng> {
    pub engine: BattleEngine<R>,
    running: bool,
    /// One-line hint for the status bar, e.g. why a key did nothing.
    status: Option<String>,
}

impl App<SeededRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(BattleEngine::with_seed(seed))
    }

    /// JSON line for the session log: the seed that drove the fight plus the
    /// final snapshot.
    pub fn session_record(&self) -> Result<String, GameError> {
        let rng = serde_json::to_value(self.engine.rng())?;
        let snapshot = serde_json::to_value(self.engine.snapshot())?;
        Ok(json!({ "rng": rng, "snapshot": snapshot }).to_string())
    }
}

impl<R: BattleRng> App<R> {
    pub fn new(engine: BattleEngine<R>) -> Self {
        Self {
            engine,
            running: true,
            status: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle(&mut self, command: InputCommand) {
        match command {
            InputCommand::Quit => {
                info!("quit requested");
                self.running = false;
            }
            InputCommand::Battle(action) => {
                self.status = self.blocked_reason(action).map(str::to_string);
                debug!(%action, blocked = self.status.is_some(), "player input");
                self.engine.apply(action);
                if action == BattleAction::Reset {
                    self.status = Some("A new monster appears!".to_string());
                }
            }
        }
    }

    /// Why the engine will ignore `action` right now, if it will.
    fn blocked_reason(&self, action: BattleAction) -> Option<&'static str> {
        let state = self.engine.state();
        match action {
            BattleAction::Reset => None,
            _ if state.game_over => Some("The battle is over. Press r for a new one."),
            BattleAction::Surrender => None,
            _ if !state.is_active() => Some("The battle is over. Press r for a new one."),
            BattleAction::SpecialAttack if !state.special_attack_available() => {
                Some("Special attack is still cooling down.")
            }
            BattleAction::Heal if state.player_health >= rules::MAX_HEALTH => {
                Some("Already at full health.")
            }
            _ => None,
        }
    }
}

//! Battle state aggregate and the read-only snapshot handed to the UI.

use crate::log::BattleLog;
use crate::rules::MAX_HEALTH;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Outcome of a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Monster,
    Draw,
}

/// Whether the battle is still running or over (until the next reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    InProgress,
    GameOver,
}

/// Running totals for the current battle. Only ever grow until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStats {
    pub player_damage_dealt: u32,
    pub monster_damage_dealt: u32,
    pub healing_done: u32,
    /// Player critical hits only; monster crits are not counted.
    pub critical_hits: u32,
    pub rounds_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub player_health: u32,
    pub monster_health: u32,
    pub round: u32,
    pub battle_log: BattleLog,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub special_attack_cooldown: u32,
    pub last_action_critical: bool,
    pub stats: BattleStats,
}

impl Default for BattleState {
    fn default() -> Self {
        Self {
            player_health: MAX_HEALTH,
            monster_health: MAX_HEALTH,
            round: 0,
            battle_log: BattleLog::new(),
            game_over: false,
            winner: None,
            special_attack_cooldown: 0,
            last_action_critical: false,
            stats: BattleStats::default(),
        }
    }
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh battle starting from the given health values (clamped to the
    /// health range). Handy for staging end-game situations.
    pub fn with_health(player_health: u32, monster_health: u32) -> Self {
        Self {
            player_health: player_health.min(MAX_HEALTH),
            monster_health: monster_health.min(MAX_HEALTH),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> BattlePhase {
        if self.game_over {
            BattlePhase::GameOver
        } else {
            BattlePhase::InProgress
        }
    }

    /// Both sides still standing and no result recorded.
    pub fn is_active(&self) -> bool {
        !self.game_over && self.player_health > 0 && self.monster_health > 0
    }

    pub fn special_attack_available(&self) -> bool {
        self.special_attack_cooldown == 0
    }
}

/// Read-only view of a battle for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleSnapshot {
    pub player_health: u32,
    pub monster_health: u32,
    pub round: u32,
    pub battle_log: BattleLog,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub special_attack_cooldown: u32,
    pub special_attack_available: bool,
    pub last_action_critical: bool,
    pub stats: BattleStats,
}

impl From<&BattleState> for BattleSnapshot {
    fn from(state: &BattleState) -> Self {
        Self {
            player_health: state.player_health,
            monster_health: state.monster_health,
            round: state.round,
            battle_log: state.battle_log.clone(),
            game_over: state.game_over,
            winner: state.winner,
            special_attack_cooldown: state.special_attack_cooldown,
            special_attack_available: state.special_attack_available(),
            last_action_critical: state.last_action_critical,
            stats: state.stats,
        }
    }
}

// src/battle/src/lib.rs
//! Player-versus-monster battle rules.
//!
//! [`BattleEngine`] owns a [`BattleState`] and mutates it only through the
//! player actions (attack, special attack, heal, surrender, reset). Illegal
//! actions are silently ignored. Randomness is drawn through [`BattleRng`] so
//! a battle can be replayed from a seed or from scripted rolls.

pub mod engine;
pub mod log;
pub mod rng;
pub mod state;

pub use crate::engine::{BattleAction, BattleEngine};
pub use crate::log::{Actor, BattleLog, LogEntry, LogKind};
pub use crate::rng::{BattleRng, ScriptedRng, SeededRng};
pub use crate::state::{BattlePhase, BattleSnapshot, BattleState, BattleStats, Winner};

/// Battle balance constants. Damage and heal ranges are half-open.
pub mod rules {
    use std::ops::Range;

    pub const MAX_HEALTH: u32 = 100;
    pub const CRITICAL_CHANCE: f64 = 0.2;
    pub const PLAYER_ATTACK_DAMAGE: Range<u32> = 5..12;
    pub const SPECIAL_ATTACK_DAMAGE: Range<u32> = 10..20;
    pub const MONSTER_ATTACK_DAMAGE: Range<u32> = 8..15;
    pub const HEAL_AMOUNT: Range<u32> = 8..20;
    /// Player turns before the special attack can be used again.
    pub const SPECIAL_ATTACK_COOLDOWN: u32 = 3;

    /// 1.5x, rounded down.
    pub fn critical_damage(base: u32) -> u32 {
        base * 3 / 2
    }
}

#[cfg(test)]
mod tests;

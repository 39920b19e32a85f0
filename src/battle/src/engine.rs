//! Turn resolution for a player-versus-monster battle.
use crate::log::{Actor, BattleLog, LogEntry};
use crate::rng::{BattleRng, SeededRng};
use crate::rules;
use crate::state::{BattlePhase, BattleSnapshot, BattleState, BattleStats, Winner};
use std::ops::Range;
use strum::Display;
use tracing::{debug, info, trace};

/// Player-invocable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattleAction {
    Attack,
    SpecialAttack,
    Heal,
    Surrender,
    Reset,
}

/// Owns the battle state and applies the battle rules to it.
///
/// Every action runs to completion, including the monster's counter-attack.
/// Actions that are not legal in the current state leave it untouched.
#[derive(Debug, Clone)]
pub struct BattleEngine<R: BattleRng = SeededRng> {
    state: BattleState,
    rng: R,
}

impl BattleEngine<SeededRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededRng::new(seed))
    }
}

impl<R: BattleRng> BattleEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_state(BattleState::default(), rng)
    }

    /// Start from a prepared state instead of the defaults.
    /// Resume from an arbitrary state. A state with a health already at 0
    /// is settled immediately.
    pub fn with_state(state: BattleState, rng: R) -> Self {
        let mut engine = Self { state, rng };
        engine.check_winner();
        engine
    }

    pub fn apply(&mut self, action: BattleAction) {
        match action {
            BattleAction::Attack => self.attack(),
            BattleAction::SpecialAttack => self.special_attack(),
            BattleAction::Heal => self.heal(),
            BattleAction::Surrender => self.surrender(),
            BattleAction::Reset => self.reset(),
        }
    }

    pub fn attack(&mut self) {
        if !self.state.is_active() {
            debug!(action = "attack", "ignored: battle is over");
            return;
        }

        self.state.round += 1;
        let damage = self.player_strike(rules::PLAYER_ATTACK_DAMAGE);
        if self.state.special_attack_cooldown > 0 {
            self.state.special_attack_cooldown -= 1;
        }
        if self.state.monster_health > 0 {
            self.monster_attack();
        }
        trace!(round = self.state.round, damage, "attack resolved");

        self.check_winner();
    }

    pub fn special_attack(&mut self) {
        if !self.state.is_active() {
            debug!(action = "special_attack", "ignored: battle is over");
            return;
        }
        if !self.state.special_attack_available() {
            debug!(
                cooldown = self.state.special_attack_cooldown,
                "ignored: special attack cooling down"
            );
            return;
        }

        self.state.round += 1;
        let damage = self.player_strike(rules::SPECIAL_ATTACK_DAMAGE);
        self.state.special_attack_cooldown = rules::SPECIAL_ATTACK_COOLDOWN;
        if self.state.monster_health > 0 {
            self.monster_attack();
        }
        trace!(round = self.state.round, damage, "special attack resolved");

        self.check_winner();
    }

    pub fn heal(&mut self) {
        if !self.state.is_active() {
            debug!(action = "heal", "ignored: battle is over");
            return;
        }
        if self.state.player_health >= rules::MAX_HEALTH {
            debug!("ignored: player already at full health");
            return;
        }

        self.state.round += 1;
        let roll = self.rng.roll_range(rules::HEAL_AMOUNT);
        let before = self.state.player_health;
        let capped = before + roll >= rules::MAX_HEALTH;
        self.state.player_health = (before + roll).min(rules::MAX_HEALTH);
        let healed = self.state.player_health - before;

        self.state.last_action_critical = false;
        self.state.stats.healing_done += healed;
        self.state.stats.rounds_played += 1;
        self.state.battle_log.push(LogEntry::heal(Actor::Player, healed, capped));

        if self.state.special_attack_cooldown > 0 {
            self.state.special_attack_cooldown -= 1;
        }
        trace!(round = self.state.round, roll, healed, capped, "heal resolved");

        // Healing always gives the monster its turn.
        self.monster_attack();
        self.check_winner();
    }

    /// Ends the battle in the monster's favour. Allowed whatever the health
    /// values are, as long as no result has been recorded yet.
    pub fn surrender(&mut self) {
        if self.state.game_over {
            debug!(action = "surrender", "ignored: battle is over");
            return;
        }

        self.state.player_health = 0;
        self.state.battle_log.push(LogEntry::surrender(Actor::Player));
        self.finish(Winner::Monster);
    }

    pub fn reset(&mut self) {
        self.state = BattleState::default();
        debug!("battle reset");
    }

    /// Rolls and applies one player strike, returning the damage dealt.
    fn player_strike(&mut self, damage_range: Range<u32>) -> u32 {
        let (damage, critical) = roll_damage(&mut self.rng, damage_range);
        if critical {
            self.state.stats.critical_hits += 1;
        }

        self.state.monster_health = self.state.monster_health.saturating_sub(damage);
        self.state.last_action_critical = critical;
        self.state.stats.player_damage_dealt += damage;
        self.state.stats.rounds_played += 1;
        self.state
            .battle_log
            .push(LogEntry::damage(Actor::Player, damage, critical));

        damage
    }

    fn monster_attack(&mut self) {
        if !self.state.is_active() {
            return;
        }

        let (damage, critical) = roll_damage(&mut self.rng, rules::MONSTER_ATTACK_DAMAGE);
        self.state.player_health = self.state.player_health.saturating_sub(damage);
        self.state.stats.monster_damage_dealt += damage;
        self.state
            .battle_log
            .push(LogEntry::damage(Actor::Monster, damage, critical));
        trace!(damage, critical, "monster attack resolved");
    }

    pub(crate) fn check_winner(&mut self) {
        let winner = match (self.state.player_health, self.state.monster_health) {
            (0, 0) => Winner::Draw,
            (_, 0) => Winner::Player,
            (0, _) => Winner::Monster,
            _ => return,
        };
        self.finish(winner);
    }

    fn finish(&mut self, winner: Winner) {
        if self.state.winner.is_some() {
            return;
        }
        self.state.winner = Some(winner);
        self.state.game_over = true;
        info!(
            %winner,
            rounds = self.state.round,
            player_damage = self.state.stats.player_damage_dealt,
            monster_damage = self.state.stats.monster_damage_dealt,
            "battle finished"
        );
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::from(&self.state)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn player_health(&self) -> u32 {
        self.state.player_health
    }

    pub fn monster_health(&self) -> u32 {
        self.state.monster_health
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.state.battle_log
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    pub fn special_attack_cooldown(&self) -> u32 {
        self.state.special_attack_cooldown
    }

    pub fn special_attack_available(&self) -> bool {
        self.state.special_attack_available()
    }

    pub fn last_action_critical(&self) -> bool {
        self.state.last_action_critical
    }

    pub fn stats(&self) -> &BattleStats {
        &self.state.stats
    }

    pub fn phase(&self) -> BattlePhase {
        self.state.phase()
    }
}

/// Critical roll first, then the amount; crits deal 1.5x rounded down.
fn roll_damage<R: BattleRng>(rng: &mut R, range: Range<u32>) -> (u32, bool) {
    let critical = rng.roll_critical(rules::CRITICAL_CHANCE);
    let base = rng.roll_range(range);
    let damage = if critical {
        rules::critical_damage(base)
    } else {
        base
    };
    (damage, critical)
}

//! Battle log entries, kept most-recent-first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use strum::Display;

/// Side that produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Player,
    Monster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogKind {
    Damage,
    Heal,
    Surrender,
}

/// One line of the battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub actor: Actor,
    pub kind: LogKind,
    /// Damage dealt or health restored; `None` for a surrender.
    pub amount: Option<u32>,
    pub critical: bool,
    /// The heal hit the health ceiling.
    pub capped: bool,
}

impl LogEntry {
    pub fn damage(actor: Actor, amount: u32, critical: bool) -> Self {
        Self {
            actor,
            kind: LogKind::Damage,
            amount: Some(amount),
            critical,
            capped: false,
        }
    }

    pub fn heal(actor: Actor, amount: u32, capped: bool) -> Self {
        Self {
            actor,
            kind: LogKind::Heal,
            amount: Some(amount),
            critical: false,
            capped,
        }
    }

    pub fn surrender(actor: Actor) -> Self {
        Self {
            actor,
            kind: LogKind::Surrender,
            amount: None,
            critical: false,
            capped: false,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount.unwrap_or(0);
        match (self.kind, self.actor) {
            (LogKind::Damage, Actor::Player) => {
                write!(f, "Player hits Monster for {amount} damage")?;
            }
            (LogKind::Damage, Actor::Monster) => {
                write!(f, "Monster hits Player for {amount} damage")?;
            }
            (LogKind::Heal, actor) => write!(f, "{actor} heals for {amount}")?,
            (LogKind::Surrender, actor) => return write!(f, "{actor} surrendered"),
        }
        if self.critical {
            write!(f, " (critical!)")?;
        }
        if self.capped {
            write!(f, " (max health)")?;
        }
        Ok(())
    }
}

/// Unbounded log that always prepends, so index 0 is the latest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }
}

impl<'a> IntoIterator for &'a BattleLog {
    type Item = &'a LogEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_prepends() {
        let mut log = BattleLog::new();
        log.push(LogEntry::damage(Actor::Player, 8, false));
        log.push(LogEntry::damage(Actor::Monster, 10, true));

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|e| e.actor), Some(Actor::Monster));
        assert_eq!(log.get(1).map(|e| e.actor), Some(Actor::Player));
    }

    #[test]
    fn test_entry_messages() {
        assert_eq!(
            LogEntry::damage(Actor::Player, 8, false).to_string(),
            "Player hits Monster for 8 damage"
        );
        assert_eq!(
            LogEntry::damage(Actor::Monster, 21, true).to_string(),
            "Monster hits Player for 21 damage (critical!)"
        );
        assert_eq!(
            LogEntry::heal(Actor::Player, 5, true).to_string(),
            "Player heals for 5 (max health)"
        );
        assert_eq!(
            LogEntry::surrender(Actor::Player).to_string(),
            "Player surrendered"
        );
    }
}

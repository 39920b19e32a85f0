//src/battle/src/rng.rs
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;
use std::collections::VecDeque;
use std::ops::Range;

/// Source of every random draw the battle makes.
///
/// Each action asks for its critical roll first and its amount second, so a
/// scripted source can reproduce an exact fight.
pub trait BattleRng {
    /// `true` with the given probability.
    fn roll_critical(&mut self, chance: f64) -> bool;

    /// Uniform integer from a half-open range (`start` inclusive, `end` exclusive).
    fn roll_range(&mut self, range: Range<u32>) -> u32;
}

/// 战斗专用的确定性RNG
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: Pcg32,
    seed: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 获取当前种子值
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BattleRng for SeededRng {
    fn roll_critical(&mut self, chance: f64) -> bool {
        self.rng.random_bool(chance.clamp(0.0, 1.0))
    }

    fn roll_range(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }
}

// 序列化时只记录种子，足以复现整场战斗
impl Serialize for SeededRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.seed)
    }
}

/// Replays pre-decided rolls in call order.
///
/// Critical draws and amount draws are queued separately. Amounts outside the
/// requested range are clamped into it; once a queue runs dry the source
/// answers "not critical" and the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    criticals: VecDeque<bool>,
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(
        criticals: impl IntoIterator<Item = bool>,
        values: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            criticals: criticals.into_iter().collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Queue one damage roll: a critical decision followed by its amount.
    pub fn hit(mut self, critical: bool, amount: u32) -> Self {
        self.criticals.push_back(critical);
        self.values.push_back(amount);
        self
    }

    /// Queue a bare amount roll (heals draw no critical).
    pub fn value(mut self, amount: u32) -> Self {
        self.values.push_back(amount);
        self
    }

    /// Rolls not consumed yet, as `(criticals, values)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.criticals.len(), self.values.len())
    }
}

impl BattleRng for ScriptedRng {
    fn roll_critical(&mut self, _chance: f64) -> bool {
        self.criticals.pop_front().unwrap_or(false)
    }

    fn roll_range(&mut self, range: Range<u32>) -> u32 {
        let max = range.end.saturating_sub(1).max(range.start);
        self.values
            .pop_front()
            .map_or(range.start, |value| value.clamp(range.start, max))
    }
}

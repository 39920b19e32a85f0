//! Shared builders for deterministic battle tests.
#![allow(dead_code)]

use monster_battle::battle::{BattleEngine, BattleState, ScriptedRng};
use ratatui::{Terminal, backend::TestBackend};

/// Engine at full health driven by scripted rolls.
pub fn scripted_engine(rng: ScriptedRng) -> BattleEngine<ScriptedRng> {
    BattleEngine::new(rng)
}

/// Engine starting from the given health values.
pub fn staged_engine(player: u32, monster: u32, rng: ScriptedRng) -> BattleEngine<ScriptedRng> {
    BattleEngine::with_state(BattleState::with_health(player, monster), rng)
}

/// Rendered buffer as trimmed text rows.
pub fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area().width;
    let height = buffer.area().height;

    (0..height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn contains_line(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

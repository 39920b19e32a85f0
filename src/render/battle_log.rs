//! 战斗日志渲染器
//!
//! 最新的消息显示在最上方，按行动者和类型着色。

use battle::{Actor, BattleLog, LogEntry, LogKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub struct BattleLogRenderer;

impl BattleLogRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, log: &BattleLog) {
        // 边框占两行
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = log
            .iter()
            .take(visible)
            .map(|entry| ListItem::new(entry_line(entry)))
            .collect();

        let title = format!("Battle Log ({})", log.len());
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }
}

impl Default for BattleLogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_style(entry: &LogEntry) -> Style {
    let color = match (entry.kind, entry.actor) {
        (LogKind::Damage, Actor::Player) => Color::LightGreen,
        (LogKind::Damage, Actor::Monster) => Color::LightRed,
        (LogKind::Heal, _) => Color::LightCyan,
        (LogKind::Surrender, _) => Color::Gray,
    };
    let style = Style::default().fg(color);
    if entry.critical {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn entry_prefix(entry: &LogEntry) -> &'static str {
    match entry.kind {
        LogKind::Damage => "⚔ ",
        LogKind::Heal => "✚ ",
        LogKind::Surrender => "⚑ ",
    }
}

fn entry_line(entry: &LogEntry) -> Line<'static> {
    Line::from(vec![
        Span::raw(entry_prefix(entry)),
        Span::styled(entry.to_string(), entry_style(entry)),
    ])
}

//! 游戏结束界面渲染器
//!
//! 在战斗画面上方弹出结果窗口，显示胜者和本局统计。

use battle::{BattleSnapshot, Winner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub struct GameOverRenderer;

impl GameOverRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &BattleSnapshot) {
        let Some(winner) = snapshot.winner else {
            return;
        };
        let (title_text, color) = headline(winner);

        let popup = centered_rect(area, 60, 60);
        frame.render_widget(Clear, popup);

        let stats = &snapshot.stats;
        let stat_line = |label: &str, value: u32| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), Style::default().fg(Color::Gray)),
                Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let mut lines = vec![
            Line::from(Span::styled(
                title_text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            stat_line("Rounds played", stats.rounds_played),
            stat_line("Damage dealt", stats.player_damage_dealt),
            stat_line("Damage taken", stats.monster_damage_dealt),
            stat_line("Healing done", stats.healing_done),
            stat_line("Critical hits", stats.critical_hits),
            Line::from(""),
        ];
        lines.push(Line::from(Span::styled(
            "r: new battle   q: quit",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title("═══ Battle Over ═══")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(paragraph, popup);
    }
}

impl Default for GameOverRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn headline(winner: Winner) -> (&'static str, Color) {
    match winner {
        Winner::Player => ("🏆 You won!", Color::Yellow),
        Winner::Monster => ("☠ You lost!", Color::Red),
        Winner::Draw => ("⚖ It's a draw!", Color::Cyan),
    }
}

/// 计算居中矩形
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

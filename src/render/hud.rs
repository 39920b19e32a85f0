//! HUD 渲染器
//!
//! 显示双方生命值、回合数以及特殊攻击冷却。

use battle::{BattleSnapshot, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// HUD 渲染器
///
/// 布局：
/// ```text
/// | ===== Player 生命值 ===== | ===== Monster 生命值 ===== |
/// | 回合               | 特殊攻击状态                      |
/// ```
pub struct HudRenderer;

impl HudRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &BattleSnapshot) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // 血条
                Constraint::Length(1), // 回合 + 冷却
            ])
            .split(area);

        let bars = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        self.render_health(frame, bars[0], "Player", snapshot.player_health);
        self.render_health(frame, bars[1], "Monster", snapshot.monster_health);

        if let Some(info_area) = rows.get(1) {
            self.render_round_info(frame, *info_area, snapshot);
        }
    }

    fn render_health(&self, frame: &mut Frame, area: Rect, name: &str, health: u32) {
        let ratio = health as f64 / rules::MAX_HEALTH as f64;
        let label = format!("{}/{}", health, rules::MAX_HEALTH);

        // 根据生命值比例选择颜色
        let color = health_color(ratio);

        let gauge = Gauge::default()
            .block(Block::default().title(name.to_string()).borders(Borders::ALL))
            .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .percent((ratio * 100.0).min(100.0) as u16)
            .label(label)
            .use_unicode(true);

        frame.render_widget(gauge, area);
    }

    fn render_round_info(&self, frame: &mut Frame, area: Rect, snapshot: &BattleSnapshot) {
        let special = if snapshot.special_attack_available {
            Span::styled(
                "Special ready",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("Special in {}", snapshot.special_attack_cooldown),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut spans = vec![
            Span::styled("Round ", Style::default().fg(Color::Gray)),
            Span::styled(
                snapshot.round.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  "),
            special,
        ];
        if snapshot.last_action_critical {
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled(
                "CRITICAL!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for HudRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn health_color(ratio: f64) -> Color {
    match ratio {
        r if r > 0.6 => Color::Green,
        r if r > 0.3 => Color::Yellow,
        _ => Color::Red,
    }
}

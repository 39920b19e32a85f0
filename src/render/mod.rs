//! 模块化渲染系统
//!
//! 将战斗画面分解为独立的、可测试的组件：
//! - `hud` - 双方血条、回合与冷却
//! - `battle_log` - 战斗日志
//! - `game_over` - 战斗结束弹窗
//!
//! 所有渲染器只读取 [`battle::BattleSnapshot`]，不修改战斗状态。

pub mod battle_log;
pub mod game_over;
pub mod hud;

pub use battle_log::BattleLogRenderer;
pub use game_over::GameOverRenderer;
pub use hud::HudRenderer;

use battle::BattleSnapshot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Whole battle screen: title, HUD, log, key help and the result popup.
#[derive(Default)]
pub struct BattleScreen {
    hud: HudRenderer,
    log: BattleLogRenderer,
    game_over: GameOverRenderer,
}

impl BattleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &BattleSnapshot, status: Option<&str>) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 标题
                Constraint::Length(4), // HUD
                Constraint::Min(3),    // 日志
                Constraint::Length(1), // 状态提示
                Constraint::Length(1), // 按键帮助
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "⚔ Monster Battle ⚔",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        self.hud.render(frame, chunks[1], snapshot);
        self.log.render(frame, chunks[2], &snapshot.battle_log);

        if let Some(message) = status {
            frame.render_widget(
                Paragraph::new(message.to_string())
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center),
                chunks[3],
            );
        }

        frame.render_widget(
            Paragraph::new(help_line(snapshot)).alignment(Alignment::Center),
            chunks[4],
        );

        if snapshot.game_over {
            self.game_over.render(frame, area, snapshot);
        }
    }
}

fn help_line(snapshot: &BattleSnapshot) -> Line<'static> {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let dim = Style::default().fg(Color::DarkGray);
    let special_style = if snapshot.special_attack_available {
        Style::default()
    } else {
        dim
    };

    Line::from(vec![
        key("a"),
        Span::raw(" attack  "),
        key("s"),
        Span::styled(" special  ", special_style),
        key("h"),
        Span::raw(" heal  "),
        key("g"),
        Span::raw(" give up  "),
        key("r"),
        Span::raw(" reset  "),
        key("q"),
        Span::raw(" quit"),
    ])
}

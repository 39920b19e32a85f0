//! Keyboard input handling for the battle screen.

use battle::BattleAction;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Battle(BattleAction),
    Quit,
}

/// Trait for input sources
pub trait InputSource {
    /// Wait up to `timeout` for the next command.
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<InputCommand>>;
}

/// Reads key presses from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<InputCommand>> {
        if event::poll(timeout)? {
            if let CEvent::Key(key_event) = event::read()? {
                return Ok(key_to_command(key_event));
            }
        }
        Ok(None)
    }
}

/// Key bindings:
///
/// | key | command |
/// |-----|---------|
/// | `a` | attack |
/// | `s` | special attack |
/// | `h` | heal |
/// | `g` | surrender (give up) |
/// | `r` | new battle |
/// | `q`, `Esc`, `Ctrl-C` | quit |
pub fn key_to_command(key: KeyEvent) -> Option<InputCommand> {
    // 只处理按下事件，忽略 Windows 上的释放/重复事件
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(InputCommand::Battle(BattleAction::Attack)),
            's' => Some(InputCommand::Battle(BattleAction::SpecialAttack)),
            'h' => Some(InputCommand::Battle(BattleAction::Heal)),
            'g' => Some(InputCommand::Battle(BattleAction::Surrender)),
            'r' => Some(InputCommand::Battle(BattleAction::Reset)),
            'q' => Some(InputCommand::Quit),
            _ => None,
        },
        KeyCode::Esc => Some(InputCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_action_keys() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('a'))),
            Some(InputCommand::Battle(BattleAction::Attack))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('S'))),
            Some(InputCommand::Battle(BattleAction::SpecialAttack))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('h'))),
            Some(InputCommand::Battle(BattleAction::Heal))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('g'))),
            Some(InputCommand::Battle(BattleAction::Surrender))
        );
        assert_eq!(
            key_to_command(press(KeyCode::Char('r'))),
            Some(InputCommand::Battle(BattleAction::Reset))
        );
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(key_to_command(press(KeyCode::Char('q'))), Some(InputCommand::Quit));
        assert_eq!(key_to_command(press(KeyCode::Esc)), Some(InputCommand::Quit));
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputCommand::Quit)
        );
    }

    #[test]
    fn ignores_other_keys_and_releases() {
        assert_eq!(key_to_command(press(KeyCode::Char('x'))), None);
        assert_eq!(key_to_command(press(KeyCode::Enter)), None);
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );

        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_command(release), None);
    }
}

use anyhow::{Context, Result};
use crossterm::terminal::enable_raw_mode;
use error::handle_error;
use monster_battle::{
    app::App,
    config::Config,
    input::{ConsoleInput, InputSource},
    logging,
    render::BattleScreen,
    terminal as screen_setup,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use scopeguard::defer;
use std::{io, time::Duration};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let (config, rejected) = Config::from_env();
    for e in &rejected {
        eprintln!("{}", handle_error(e));
    }

    // 日志初始化失败不影响游戏
    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", handle_error(&e));
            None
        }
    };
    for e in &rejected {
        tracing::warn!(error = %e, "config value ignored");
    }
    tracing::info!(seed = config.seed, "new session");

    let app = run_tui(App::with_seed(config.seed))?;

    match app.session_record() {
        Ok(record) => tracing::info!(%record, "session ended"),
        Err(e) => tracing::warn!(error = %e, "session record unavailable"),
    }

    let snapshot = app.engine.snapshot();
    match snapshot.winner {
        Some(winner) => println!(
            "Battle over after {} rounds, winner: {} (seed {})",
            snapshot.round, winner, config.seed
        ),
        None => println!(
            "Left the battle at round {} (seed {})",
            snapshot.round, config.seed
        ),
    }

    Ok(())
}

fn run_tui(mut app: App) -> Result<App> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        screen_setup::restore(&mut io::stdout());
    }
    screen_setup::enter_screen(&mut io::stdout()).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let screen = BattleScreen::new();
    let mut input = ConsoleInput::new();

    while app.is_running() {
        let snapshot = app.engine.snapshot();
        terminal
            .draw(|frame| screen.render(frame, &snapshot, app.status()))
            .context("Failed to draw frame")?;

        if let Some(command) = input.poll(POLL_INTERVAL)? {
            app.handle(command);
        }
    }

    Ok(app)
}

//! Terminal UI event loop

use std::io;
use std::time::{Duration, Instant};

use binop_calculator::config::CalculatorConfig;
use binop_calculator::tui::{render, InputHandler, TuiApp};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Poll interval while no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: CalculatorConfig) -> CliResult<()> {
    enable_raw_mode()?;
    with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            info!(policy = config.replay_policy.name(), "starting terminal UI");
            run_app(&mut terminal, TuiApp::new(config))
        },
        restore_terminal,
    )
}

/// Runs `body`, then `restore` whatever happened; the first error wins
fn with_restore<T>(
    body: impl FnOnce() -> CliResult<T>,
    restore: impl FnOnce() -> CliResult<()>,
) -> CliResult<T> {
    let result = body();
    let restored = restore();
    result.and_then(|value| restored.map(|()| value))
}

/// Leaves raw mode and the alternate screen, attempting every step
fn restore_terminal() -> CliResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen).map_err(CliError::from)
}

/// Draw/poll loop; timers are advanced with wall-clock time
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: TuiApp) -> CliResult<()> {
    let input_handler = InputHandler::new();
    let started = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| render(&app, frame))?;

        let timeout = app.time_until_next().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let action = input_handler.handle_key(key);
                if let Some(outcome) = app.apply_at(started.elapsed(), action) {
                    debug!(?action, ?outcome, "key handled");
                }
            }
        }

        app.tick_at(started.elapsed());
    }

    info!("terminal UI closed");
    Ok(())
}

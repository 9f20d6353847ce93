//! Terminal UI for XO.

mod app;
mod input;
mod mode;
mod score;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::cli::Cli;
use app::App;
pub use mode::GameMode;
pub use score::ScoreBoard;

/// Input poll timeout per frame.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cosmetic pause before the computer replies, so its move renders in
/// its own frame rather than together with the human's.
const COMPUTER_PAUSE: Duration = Duration::from_millis(120);

/// Runs the TUI until the user quits.
pub fn run(cli: &Cli) -> Result<()> {
    // Log to a file; the terminal itself is in raw mode.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting XO TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mode = if cli.two_players {
        GameMode::TwoPlayers
    } else {
        GameMode::VsComputer
    };
    let mut app = App::new(mode);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Event loop: draw, let the computer act if it is O's turn, then poll
/// the keyboard. Single-threaded; the search runs inline.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if app.computer_to_move() {
            std::thread::sleep(COMPUTER_PAUSE);
            app.computer_move();
            continue;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
}

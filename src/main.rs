use std::{
    io::stdout,
    sync::mpsc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{app::state::App, events::types::AppEvent, input::capture::MouseCapture};

mod app;
mod config;
mod events;
mod input;
mod logging;
mod ui;

fn main() -> Result<()> {
    let config = config::load_or_create_config().context("Failed to load config")?;
    let (log_target, _log_guard) = logging::setup_logging(&config)?;
    info!(log = %log_target.pattern(), theme = ?config.theme, "starting arcspin preview");

    ui::theme::init_theme(config.theme);

    let mut terminal = ratatui::init();
    let mouse_capture = match MouseCapture::enable(stdout()) {
        Ok(capture) => capture,
        Err(err) => {
            ratatui::restore();
            return Err(err).context("Failed to enable mouse capture");
        }
    };
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let _input_handle = input::thread::spawn(event_tx);

    let mut app = App::new(&config, Instant::now());
    let result = run(&mut terminal, &mut app, &event_rx, config.frame_interval());

    drop(mouse_capture);
    ratatui::restore();
    info!(
        cycles = app.cycles_completed,
        turns = app.indicator.turns(),
        "exiting"
    );
    result
}

fn run(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    event_rx: &mpsc::Receiver<AppEvent>,
    frame_interval: Duration,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal
            .draw(|f| ui::render::render(f, app))
            .context("Failed to draw frame")?;

        match event_rx.recv_timeout(frame_interval) {
            Ok(event) => match event {
                AppEvent::Input(key_event) => app.handle_input(key_event),
                AppEvent::Mouse(mouse_event) => app.handle_mouse(mouse_event),
                AppEvent::Resize(_width, _height) => {}
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                anyhow::bail!("Event channel disconnected");
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

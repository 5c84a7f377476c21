pub mod app;
pub mod cli;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    fs::OpenOptions,
    io::{self, Stdout, Write},
    sync::Mutex,
};

use anyhow::{Context, Result};
use app::{
    events::{AppEvent, spawn_input_task},
    settings::{SceneConfig, load_scene_config},
    state::{AppMode, AppState},
};
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;
    let (config, config_path) = load_scene_config(&cli)?;
    if let Some(path) = &config_path {
        tracing::info!(path = %path.display(), "scene config loaded");
    }

    if cli.snapshot {
        let mut stdout = io::stdout().lock();
        return write_snapshot(&config, cli.ticks, &mut stdout);
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &config, &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &SceneConfig,
    cli: &Cli,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(config, cli.theme)?;

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    tracing::info!(ticks = app.frame_tick, "animation stopped");
    Ok(())
}

/// Runs the scene headless for `ticks` steps per fleet and writes it as JSON.
pub fn write_snapshot<W: Write>(config: &SceneConfig, ticks: u32, out: &mut W) -> Result<()> {
    let mut app = AppState::new(config, cli::ThemeArg::default())?;
    for _ in 0..ticks {
        app.scene.tick_all();
    }
    serde_json::to_writer_pretty(&mut *out, &app.scene.snapshot())
        .context("serializing scene snapshot failed")?;
    writeln!(out).context("writing scene snapshot failed")?;
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {} failed", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::from(cli.log_level))
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber failed: {err}"))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}

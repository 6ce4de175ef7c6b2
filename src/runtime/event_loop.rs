use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::config;
use crate::engine::Engine;
use crate::events::EngineCmd;
use crate::library::scan;
use crate::ui;

/// Main terminal event loop: draws the engine's view and forwards key presses.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    engine: &Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let view = app.snapshot();
        terminal.draw(|f| ui::draw(f, app, &view, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, engine)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    engine: &Engine,
) -> Result<bool, Box<dyn std::error::Error>> {
    app.clear_notice();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('s') => engine.send(EngineCmd::Skip)?,
        KeyCode::Char('r') => engine.send(EngineCmd::PlayRadio)?,
        KeyCode::Char('u') => {
            let Some(dir) = app.current_dir.clone() else {
                app.set_notice("no music folder to rescan");
                return Ok(false);
            };
            let tracks = scan(&dir, &settings.library);
            info!(dir = %dir.display(), tracks = tracks.len(), "folder rescanned");
            if tracks.is_empty() {
                warn!(dir = %dir.display(), "rescan found no tracks");
            }
            app.set_notice(format!("loaded {} tracks", tracks.len()));
            engine.send(EngineCmd::LoadTracks(tracks))?;
        }
        _ => {}
    }

    Ok(false)
}

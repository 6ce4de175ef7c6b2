use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::engine::Engine;
use crate::library::{Track, scan};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, problem) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(path) => info!(log = %path.display(), "radioshuffle starting"),
        Err(e) => eprintln!("radioshuffle: logging disabled: {e}"),
    }
    settings::report(problem);

    // Positional folder wins over `library.folder`; no folder means radio only.
    let dir: Option<PathBuf> = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.folder.clone());

    let tracks: Vec<Track> = match &dir {
        Some(d) => scan(d, &settings.library),
        None => {
            warn!("no music folder given; playing radio only");
            Vec::new()
        }
    };

    let engine = Engine::start(settings.clone(), tracks)?;
    let mut app = App::new(engine.view_handle());
    if let Some(d) = dir {
        app.set_current_dir(d);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &engine);

    engine.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("radioshuffle stopped");
    run_result
}

//! UI rendering for the terminal user interface.
//!
//! Everything drawn here comes from a `PlayerView` snapshot; the UI never
//! touches playback state directly.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, progress_ratio, timer_text};
use crate::config::UiSettings;
use crate::engine::{PlaybackMode, PlayerView};

const CONTROLS: [(&str, &str); 4] = [
    ("s", "skip"),
    ("r", "radio"),
    ("u", "rescan folder"),
    ("q/esc", "quit"),
];

fn controls_text(skip_enabled: bool) -> String {
    CONTROLS
        .iter()
        .filter(|(k, _)| skip_enabled || *k != "s")
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_text(app: &App, view: &PlayerView) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(match view.mode {
        PlaybackMode::Radio => " MODE: Radio".to_string(),
        PlaybackMode::Playlist => " MODE: Playlist".to_string(),
    });
    if !view.banner.is_empty() {
        parts.push(view.banner.clone());
    }
    parts.push(format!("Tracks: {}", view.pool_len));
    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir.display()));
    }
    if let Some(n) = &app.notice {
        parts.push(n.clone());
    }

    parts.join(" • ")
}

/// Render the entire UI into `frame` from the `view` snapshot.
pub fn draw(frame: &mut Frame, app: &App, view: &PlayerView, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" radioshuffle ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app, view))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Now playing followed by what comes next.
    let mut items: Vec<ListItem> = Vec::new();
    match (&view.mode, &view.current) {
        (PlaybackMode::Playlist, Some(name)) => {
            items.push(ListItem::new(format!("> {name}")).bold());
        }
        _ => items.push(ListItem::new("> live radio").bold()),
    }
    for name in &view.upcoming {
        items.push(ListItem::new(format!("  {name}")));
    }
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" now playing / up next "),
    );
    frame.render_widget(list, chunks[2]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
        .ratio(progress_ratio(view.elapsed, view.total))
        .label(timer_text(view.elapsed, view.total));
    frame.render_widget(gauge, chunks[3]);

    let footer = Paragraph::new(controls_text(view.skip_enabled))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

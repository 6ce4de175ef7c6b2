mod app;
mod audio;
mod config;
mod engine;
mod error;
mod events;
mod library;
mod runtime;
mod speech;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

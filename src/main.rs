use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
};
use ratatui::DefaultTerminal;

use pokedex::app::App;
use pokedex::config;
use pokedex::lookup::worker::spawn_worker;

/// How long to wait for terminal input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Look up Pokémon from PokeAPI with live name autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name or National Dex number to look up on startup
    name_or_id: Option<String>,

    /// Config file (default: ~/.config/pokedex/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// PokeAPI base URL, overrides the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Base URL for Pokémon images, overrides the config file
    #[arg(long, value_name = "URL")]
    sprite_base_url: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    pokedex::logging::init();

    let loaded = config::load_config(args.config.as_deref());
    let mut api = loaded.config.api;
    if let Some(base_url) = args.base_url {
        api.base_url = base_url;
    }
    if let Some(sprite_base_url) = args.sprite_base_url {
        api.sprite_base_url = sprite_base_url;
    }
    log::debug!("Starting with PokeAPI at {}", api.base_url);

    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(&api, response_tx)?;

    let mut app = App::new(worker, response_rx);
    app.status_message = loaded.warning;
    app.focus_input();
    if let Some(name_or_id) = args.name_or_id {
        app.set_query(&name_or_id);
        app.search();
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(
        std::io::stdout(),
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )
    .map_err(Into::into)
    .and_then(|()| run(terminal, &mut app));

    let _ = execute!(
        std::io::stdout(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture
    );
    ratatui::restore();
    app.shutdown();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_responses();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

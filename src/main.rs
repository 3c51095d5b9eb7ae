//! cmlog - changelog viewer for CyanogenMod builds
//!
//! Binary entry point for the TUI application.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use cmlog::app::{App, Services, SystemBrowser};
use cmlog::changelog::{
    ChangelogClient, Connectivity, DnsConnectivity, StaticConnectivity,
};
use cmlog::cli::Cli;
use cmlog::config::Config;
use cmlog::device::{DeviceInfo, PropertyReader};
use cmlog::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
        logging::init(&path, cli.verbose)
            .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
    }
    log::info!("Starting cmlog {}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let reader = PropertyReader::new(cli.target());
    let device = DeviceInfo::load(&reader, &config.device);

    let client = ChangelogClient::new(&config.changelog.base_url)?;
    let connectivity: Arc<dyn Connectivity> = if cli.offline {
        Arc::new(StaticConnectivity(false))
    } else {
        Arc::new(DnsConnectivity::for_url(client.base_url()))
    };
    let services = Services {
        source: Arc::new(client),
        connectivity,
        browser: Box::new(SystemBrowser),
    };

    let mut app = App::new(config, device, services);
    app.start();

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    log::info!("Exiting");
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so finished fetches and expired notices are
/// picked up while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    app.poll_refresh();
    Ok(())
}

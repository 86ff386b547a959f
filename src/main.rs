//! Desktop entry point: opens a window with the HCT palette.

use std::process;

use clap::Parser;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hct::{AppConfig, Cli, ConfigError, ParameterState, hct_palette};

fn run(cli: Cli) -> Result<(), ConfigError> {
    let config = AppConfig::try_from(cli)?;
    log::info!(
        "starting with hue {}, chroma {}, tone {} in a {}x{} window",
        config.initial.hue(),
        config.initial.chroma(),
        config.initial.tone(),
        config.window_size.0,
        config.window_size.1,
    );

    floem::Application::new()
        .window(
            move |_| {
                let state = ParameterState::new(config.initial);
                hct_palette(state).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size(config.window_size)
                    .title("HCT Color Palette"),
            ),
        )
        .run();
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}

use clap::Parser;
use std::path::PathBuf;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use vitrine::app::model::Model;
use vitrine::config::{self, ConfigLoadResult};
use vitrine::logger;
use vitrine::theme::ThemeManager;

/// Terminal showcase of the vitrine widget set
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Some(path) = args.config {
        config::set_config_path(path);
    }

    // Configuration problems are reported before the terminal is taken over
    let app_config = match config::get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(errors) = app_config.validate() {
        for error in &errors {
            eprintln!("{}", error.user_message());
        }
        std::process::exit(1);
    }

    logger::setup_logger()?;
    ThemeManager::init_global(app_config.theme())?;

    // Setup model
    let mut model = Model::new()?;

    // Enter alternate screen
    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        // Handle messages raised outside the component tree
        model.update_outside_msg();

        // Tick
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                log::error!("Application tick error: {err}");
            }
            Ok(messages) if !messages.is_empty() => {
                // NOTE: redraw if at least one msg has been processed
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }
        // Redraw
        if model.redraw {
            if let Err(e) = model.view() {
                log::error!("View rendering failed: {e}");
            }
            model.redraw = false;
        }
    }

    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}

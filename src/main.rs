use std::error::Error;
use std::path::PathBuf;

use signup_gui::{
    app::App,
    config::{self, Config, ConfigError},
    logger,
};

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_config_path);
    let config = match config_path {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Config::default(),
            Err(e) => return Err(e.into()),
        },
        None => Config::default(),
    };

    logger::setup_logger(config.log_level()?);
    tracing::info!("Starting signup screen against {}", config.api_url());

    let window_settings = iced::window::Settings {
        size: iced::Size {
            width: 520.0,
            height: 620.0,
        },
        ..Default::default()
    };

    if let Err(e) = iced::application("Create account", App::update, App::view)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        tracing::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("signup-gui");
        path.push(config::DEFAULT_FILE_NAME);
        path
    })
}

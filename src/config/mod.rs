// Configuration module entry point
// Layers built-in defaults with command-line overrides and resolves the serving root

mod types;

use std::io;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::ServerError;

pub use types::{ServerConfig, Settings, DEFAULT_PORT};

impl Settings {
    /// Resolve settings from defaults overridden by the command line.
    /// No config file or environment variable is consulted.
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_override_option("port", cli.port.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }
}

impl ServerConfig {
    /// Load the process configuration: port from `cli`, root from the executable's location
    pub fn load(cli: &Cli) -> Result<Self, ServerError> {
        let settings = Settings::load(cli)?;
        let root = program_directory().map_err(ServerError::RootDirectory)?;
        Self::new(settings.port, root).map_err(ServerError::RootDirectory)
    }
}

/// Directory containing the running executable, independent of the caller's cwd
fn program_directory() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable {} has no parent directory", exe.display()),
        )
    })
}

//! Errors raised while loading configuration and preparing a session.

use std::{io, path::PathBuf};

use thiserror::Error;
use warden_idp::IdpError;
use warden_session::ValidationError;

#[derive(Debug, Error)]
pub enum WardenError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file does not exist: {}", path.display())]
    MissingConfig { path: PathBuf },

    /// None of the default configuration locations exist.
    #[error("No configuration file found. Tried:\n{tried}")]
    NoConfig { tried: String },

    #[error("Failed to read config from {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("Invalid authenticator: {0}")]
    Backend(#[from] IdpError),

    #[error("Failed to initialise session: {0}")]
    Session(#[from] ValidationError),
}

impl WardenError {
    /// Returns `true` if the error came from locating, reading or parsing the
    /// configuration file.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig { .. }
                | Self::NoConfig { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse(_)
        )
    }
}

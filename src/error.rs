use std::{path::PathBuf, sync::Arc};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't read the agent configuration at '{path}': {source}")]
    ConfigUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't parse the agent configuration at '{path}': {source}")]
    ConfigMalformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Couldn't remove the payload marker at '{path}': {source}")]
    MarkerMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't decode the notification payload: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("Action with name '{0}' already exists.")]
    ActionAlreadyExists(Arc<str>),
}

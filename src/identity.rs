use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct AgentConf {
    agent: AgentTable,
}

#[derive(Debug, Deserialize)]
struct AgentTable {
    uuid: String,
}

/// Read the node's own UUID from the agent configuration file.
///
/// The file is opened, read and closed within this call; nothing is cached
/// between invocations. The configuration must be TOML with an `[agent]`
/// table carrying a string `uuid`. A stored value wrapped in literal double
/// quotes loses exactly one surrounding pair; anything else is returned
/// unchanged.
///
/// A missing or unreadable file, invalid TOML, or an absent `agent.uuid`
/// field is an error.
pub async fn read_local_uuid(path: &Path) -> Result<String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let conf: AgentConf = toml::from_str(&raw).map_err(|source| Error::ConfigMalformed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(unquote(&conf.agent.uuid).to_owned())
}

/// Remove one pair of surrounding double quotes, if both are present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

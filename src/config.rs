use std::path::PathBuf;

/// Filesystem paths the actions operate on.
///
/// [`Default`] yields the paths used on a provisioned node. Use the builder
/// pattern to point actions somewhere else, e.g. at a temporary directory
/// under test.
///
/// # Examples
///
/// ```rust
/// use revocation_actions::ActionConfig;
///
/// let config = ActionConfig::default()
///     .with_agent_config_path("/tmp/agent.conf")
///     .with_marker_path("/tmp/payload_marker");
/// ```
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Agent configuration file holding the node's own identity in the
    /// `[agent]` table.
    /// Default: `/etc/keylime/agent.conf`
    pub agent_config_path: PathBuf,

    /// Marker file whose presence records a completed payload setup.
    /// Default: `/var/tmp/test_payload_file`
    pub marker_path: PathBuf,
}

impl Default for ActionConfig {
    fn default() -> Self {
        ActionConfig {
            agent_config_path: PathBuf::from("/etc/keylime/agent.conf"),
            marker_path: PathBuf::from("/var/tmp/test_payload_file"),
        }
    }
}

impl ActionConfig {
    /// Set the path of the agent configuration file.
    pub fn with_agent_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.agent_config_path = path.into();
        self
    }

    /// Set the path of the payload marker file.
    pub fn with_marker_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.marker_path = path.into();
        self
    }
}

use async_trait::async_trait;

use crate::{Action, ActionConfig, Error, Result, RevocationEvent, identity};

/// Removes the payload marker when a revocation names this node.
///
/// The marker file records that payload setup previously completed on this
/// node. For every `revocation` event the action reads the node's own UUID
/// from the agent configuration, prints the identities under comparison to
/// stdout, and deletes the marker iff the event's `agent_id` equals the
/// local UUID. Events of any other kind are ignored without touching the
/// filesystem.
///
/// Nothing is recovered locally: an unavailable or malformed configuration
/// surfaces before the diagnostics are printed, and a marker already gone at
/// delete time surfaces as [`Error::MarkerMissing`]. There is no existence
/// probe before the delete, so two overlapping revocations for the same
/// identity race it and the loser fails.
pub struct RevokePayload {
    config: ActionConfig,
}

impl RevokePayload {
    pub fn new(config: ActionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Action for RevokePayload {
    async fn execute(&mut self, event: &RevocationEvent) -> Result<()> {
        if !event.is_revocation() {
            tracing::debug!(kind = event.kind(), "not a revocation, skipping");
            return Ok(());
        }

        let event_uuid = event.agent_id();
        let event_ip = event.event_ip();
        let my_uuid = identity::read_local_uuid(&self.config.agent_config_path).await?;

        println!("A node in the network has been compromised: {event_ip}");
        println!("my UUID: {my_uuid}, event UUID: {event_uuid}");

        if my_uuid == event_uuid {
            tokio::fs::remove_file(&self.config.marker_path)
                .await
                .map_err(|source| Error::MarkerMissing {
                    path: self.config.marker_path.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

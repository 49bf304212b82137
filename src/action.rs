use async_trait::async_trait;

use crate::{Result, RevocationEvent};

/// A local reaction to revocation notifications.
///
/// Implement this for everything the agent should do when a node in the
/// attested network is revoked. The host delivers each decoded notification
/// through [`execute`](Action::execute); the action decides whether the
/// event applies to it and performs its side effects.
///
/// Actions run one invocation at a time inside the host's cooperative
/// scheduler: `execute` may suspend at I/O points but spawns no concurrent
/// work of its own, and must not retain event data across invocations.
/// Errors are not handled locally; they propagate to the host, which owns
/// containment and logging policy.
///
/// The trait is object-safe so a host can hold a heterogeneous set of
/// actions as `Box<dyn Action>` (see [`crate::Runner`]).
#[async_trait]
pub trait Action: Send {
    /// Handle a single inbound notification.
    async fn execute(&mut self, event: &RevocationEvent) -> Result<()>;
}

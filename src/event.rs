use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A notification delivered by the agent's revocation watcher.
///
/// Decoded from the JSON mapping the dispatcher publishes per notification.
/// Only three keys are interpreted by actions:
///
/// - `type`: event kind discriminator. Anything other than `"revocation"`
///   is ignored by the stock actions.
/// - `agent_id`: identifier of the node the event concerns.
/// - `event_ip`: network address of the originating node, informational.
///
/// Any other keys the dispatcher attaches travel along in [`extra`](Self::extra)
/// and are never interpreted here. Events are constructed once per
/// notification, consumed, and discarded; nothing about them is persisted.
///
/// `agent_id` and `event_ip` may be absent. The accessors then return the
/// literal [`MISSING_FIELD`](Self::MISSING_FIELD) value `"my"`, kept
/// bit-for-bit compatible with existing dispatchers. Note the corner this
/// creates: a node whose configured UUID is literally `my` will treat an
/// event without an `agent_id` as addressed to itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationEvent {
    #[serde(rename = "type", default)]
    kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_ip: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RevocationEvent {
    /// Event kind marking a node in the network as compromised.
    pub const REVOCATION: &'static str = "revocation";

    /// Value the accessors substitute for an absent `agent_id` or `event_ip`.
    pub const MISSING_FIELD: &'static str = "my";

    /// Create an event of the given kind with no other fields set.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            agent_id: None,
            event_ip: None,
            extra: Map::new(),
        }
    }

    /// Create a revocation event.
    pub fn revocation() -> Self {
        Self::new(Self::REVOCATION)
    }

    /// Set the identifier of the node the event concerns.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    /// Set the network address of the originating node.
    pub fn with_event_ip(mut self, event_ip: impl Into<String>) -> Self {
        self.event_ip = Some(event_ip.into());
        self
    }

    /// The event kind discriminator.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether this event marks a node as compromised.
    pub fn is_revocation(&self) -> bool {
        self.kind == Self::REVOCATION
    }

    /// Identifier of the node the event concerns,
    /// or [`MISSING_FIELD`](Self::MISSING_FIELD) when absent.
    pub fn agent_id(&self) -> &str {
        self.agent_id.as_deref().unwrap_or(Self::MISSING_FIELD)
    }

    /// Network address of the originating node,
    /// or [`MISSING_FIELD`](Self::MISSING_FIELD) when absent.
    pub fn event_ip(&self) -> &str {
        self.event_ip.as_deref().unwrap_or(Self::MISSING_FIELD)
    }

    /// Keys the dispatcher attached beyond the recognized ones.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

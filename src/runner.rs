use std::sync::Arc;

use crate::{Action, Error, Result, RevocationEvent};

/// Drives a set of named actions for each inbound notification.
///
/// This is the host side of the [`Action`] contract: the runner decodes the
/// raw JSON payload the transport hands over and runs every registered
/// action against it, sequentially, in registration order. Delivery order
/// between notifications, retries and acknowledgements remain with the
/// transport.
///
/// The first failing action aborts the pass and its error propagates to the
/// caller; later actions do not run for that notification.
#[derive(Default)]
pub struct Runner {
    actions: Vec<(Arc<str>, Box<dyn Action>)>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under a unique name.
    ///
    /// The name identifies the action in logs. Registering two actions with
    /// the same name is an error.
    pub fn register<A>(&mut self, name: &str, action: A) -> Result<()>
    where
        A: Action + 'static,
    {
        let name: Arc<str> = Arc::from(name);
        if self.actions.iter().any(|(n, _)| n == &name) {
            return Err(Error::ActionAlreadyExists(name));
        }
        self.actions.push((name, Box::new(action)));
        Ok(())
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run every registered action against an already-decoded event.
    pub async fn dispatch(&mut self, event: &RevocationEvent) -> Result<()> {
        for (name, action) in self.actions.iter_mut() {
            tracing::debug!(action = %name, kind = event.kind(), "running action");
            action.execute(event).await?;
        }
        Ok(())
    }

    /// Decode a raw JSON notification and dispatch it.
    pub async fn dispatch_json(&mut self, payload: &str) -> Result<()> {
        let event: RevocationEvent = serde_json::from_str(payload)?;
        self.dispatch(&event).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Action for Recorder {
        async fn execute(&mut self, _event: &RevocationEvent) -> Result<()> {
            self.log.lock().unwrap().push(self.name);
            Ok(())
        }
    }

    #[test]
    fn test_register_rejects_duplicate_names() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = Runner::new();

        let first = Recorder {
            name: "a",
            log: log.clone(),
        };
        let second = Recorder {
            name: "a again",
            log: log.clone(),
        };

        assert!(runner.register("revoke", first).is_ok());
        let err = runner.register("revoke", second).unwrap_err();
        assert!(matches!(err, Error::ActionAlreadyExists(_)));
        assert_eq!(runner.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_runs_actions_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = Runner::new();
        for name in ["first", "second", "third"] {
            runner
                .register(
                    name,
                    Recorder {
                        name,
                        log: log.clone(),
                    },
                )
                .unwrap();
        }

        let event = RevocationEvent::revocation().with_agent_id("d432fbb3");
        runner.dispatch(&event).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_dispatch_json_decodes_the_payload() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = Runner::new();
        runner
            .register(
                "recorder",
                Recorder {
                    name: "recorder",
                    log: log.clone(),
                },
            )
            .unwrap();

        runner
            .dispatch_json(r#"{"type": "revocation", "agent_id": "d432fbb3"}"#)
            .await
            .unwrap();

        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_json_rejects_malformed_payloads() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = Runner::new();
        runner
            .register(
                "recorder",
                Recorder {
                    name: "recorder",
                    log: log.clone(),
                },
            )
            .unwrap();

        let err = runner.dispatch_json("not json at all").await.unwrap_err();
        assert!(matches!(err, Error::MalformedEvent(_)));
        assert!(log.lock().unwrap().is_empty());
    }
}

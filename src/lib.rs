//! Revocation actions - local reactions to attestation revocation events
//!
//! When a remote-attestation verifier deems a node in the network
//! compromised, the agent's revocation watcher receives a notification and
//! hands it to a set of local actions. This crate provides the action
//! contract ([`Action`]), the decoded notification type
//! ([`RevocationEvent`]), a registry that drives actions per notification
//! ([`Runner`]), and the stock action that tears down the payload marker of
//! a revoked node ([`RevokePayload`]).
//!
//! Transport, delivery order, retries and acknowledgements stay with the
//! host; actions only react to the events they are handed.

mod action;
mod config;
mod error;
mod event;
mod identity;
mod revoke_payload;
mod runner;

pub use action::Action;
pub use config::ActionConfig;
pub use error::Error;
pub use event::RevocationEvent;
pub use identity::read_local_uuid;
pub use revoke_payload::RevokePayload;
pub use runner::Runner;

pub type Result<T = ()> = std::result::Result<T, Error>;

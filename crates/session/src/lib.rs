//! Session crate for the ReelPicks front-end.
//!
//! This crate contains the session that drives the state container and
//! performs its network effects through the backend client.

pub mod session;

pub use session::{DiscoverySession, LoadOutcome, RecommendOutcome, SessionError};

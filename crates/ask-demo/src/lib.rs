//! # Ask Demo Library
//!
//! Sample workers, a domain client and a small orchestrator, exposed for the
//! demo binary and for integration testing.

pub mod clients;
pub mod lifecycle;
pub mod workers;

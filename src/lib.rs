//! Review Pulse: a sentiment dashboard service for customer reviews.
//!
//! Scoring lives in [`review_pulse_core`], re-exported here as [`scoring`].
//! This crate adds the HTTP API, the dashboard tally, configuration, and a
//! client for talking to a running server.

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod models;

pub use review_pulse_core as scoring;

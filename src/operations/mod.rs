//! Long-running operation polling.
//!
//! A stop request returns an [`Operation`](crate::models::compute::Operation)
//! that is polled through the endpoint of its scope until it reports `DONE`
//! or the wait budget runs out.
//!
//! Only HTTP 503 answers are treated as transient; every other API error ends
//! the wait immediately. Polls are spaced by a fixed interval, without backoff.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod types;

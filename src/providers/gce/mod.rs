//! Google Compute Engine v1 REST client.
//!
//! [`types::GceClient`] implements [`crate::providers::ComputeApi`] on top of
//! `reqwest`. Every request carries a bearer token fetched from an
//! [`auth::TokenSource`] right before it is sent.

pub mod auth;
pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

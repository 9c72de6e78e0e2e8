//! Settings of a run.
//!
//! Values come, from lowest to highest precedence, from the optional settings
//! file, `VMSTOP_*` environment variables and command-line flags. They are
//! validated once into an immutable [`types::RunConfig`].

pub mod cli;
pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

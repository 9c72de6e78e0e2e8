pub mod errors;
pub mod functions;
pub mod types;

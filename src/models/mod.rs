pub mod compute;
pub mod functions;

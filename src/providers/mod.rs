pub mod gce;
pub mod traits;

pub use traits::ComputeApi;

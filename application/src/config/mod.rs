//! Application configuration

mod coordinator_params;

pub use coordinator_params::CoordinatorParams;

pub mod auth;
pub mod health;

pub use auth::{index, signin, signup};
pub use health::{health_check, metrics_endpoint, readiness_check};

pub mod logging;
pub mod metrics;
pub mod shutdown;

pub use logging::init_tracing;
pub use metrics::{get_metrics, init_metrics};
pub use shutdown::shutdown_signal;

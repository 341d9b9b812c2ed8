pub mod api;
pub mod logging;
#[cfg(test)]
pub mod manual_scheduler;
pub mod scheduler;
pub mod transitions;

pub use api::{ApiClient, ApiError};
pub use logging::Logger;
pub use scheduler::{GlooScheduler, Scheduler};

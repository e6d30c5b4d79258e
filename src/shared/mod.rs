// Shared kernel used by every module

pub mod domain; // Shared domain concepts (service records)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

pub use domain::ServiceRecord;
pub use errors::{AppError, AppResult};

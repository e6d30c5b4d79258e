pub mod service_record;

pub use service_record::{ServiceRecord, REQUIRED_FIELDS};

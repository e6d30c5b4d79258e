pub mod service;

pub use service::QualityAssessor;

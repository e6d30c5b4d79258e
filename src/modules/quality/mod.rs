pub mod application;
pub mod domain;

pub use application::QualityAssessor;
pub use domain::{Assessment, AssessmentStatus, QualityIssue};

pub mod assessment;

pub use assessment::{Assessment, AssessmentStatus, QualityIssue};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Pass,
    Fail,
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::Pass => write!(f, "pass"),
            AssessmentStatus::Fail => write!(f, "fail"),
        }
    }
}

/// One problem found on a service record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub field: String,
    pub message: String,
}

impl QualityIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Verdict for one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub service_id: Option<String>,
    pub status: AssessmentStatus,
    pub issues: Vec<QualityIssue>,
    pub assessed_at: DateTime<Utc>,
}

impl Assessment {
    /// Status follows from the issues: no issue means pass
    pub fn from_issues(service_id: Option<String>, issues: Vec<QualityIssue>) -> Self {
        let status = if issues.is_empty() {
            AssessmentStatus::Pass
        } else {
            AssessmentStatus::Fail
        };

        Self {
            service_id,
            status,
            issues,
            assessed_at: Utc::now(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == AssessmentStatus::Pass
    }

    pub fn has_issue_for(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

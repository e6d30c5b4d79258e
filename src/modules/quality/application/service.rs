use crate::modules::catalogue::ServiceCatalogue;
use crate::modules::quality::domain::{Assessment, QualityIssue};
use crate::shared::{
    domain::ServiceRecord,
    errors::{AppError, AppResult},
};
use serde_json::Value;
use std::sync::Arc;

/// Evaluates the quality of services held in a catalogue
pub struct QualityAssessor {
    catalogue: Arc<ServiceCatalogue>,
}

impl QualityAssessor {
    pub fn new(catalogue: Arc<ServiceCatalogue>) -> Self {
        Self { catalogue }
    }

    /// Assess the first catalogue record whose id is `service_id`
    ///
    /// Unknown ids are an error, unlike invalid additions to the catalogue.
    pub async fn assess_service(&self, service_id: &str) -> AppResult<Assessment> {
        let service = self
            .catalogue
            .find_by_id(service_id)
            .await
            .ok_or_else(|| AppError::ServiceNotFound(service_id.to_string()))?;

        let assessment = Self::assess_record(&service);
        log::info!(
            "Assessed service {}: {} ({} issue(s))",
            service_id,
            assessment.status,
            assessment.issues.len()
        );
        Ok(assessment)
    }

    /// Provisional checks: non-blank `name` and `provider` strings, and a
    /// non-empty `features` list.
    pub fn assess_record(service: &ServiceRecord) -> Assessment {
        let mut issues = Vec::new();

        if let Some(issue) = Self::check_text(service.name.as_ref(), "name") {
            issues.push(issue);
        }
        if let Some(issue) = Self::check_text(service.provider.as_ref(), "provider") {
            issues.push(issue);
        }

        match service.features.as_ref() {
            None => issues.push(QualityIssue::new("features", "features are missing")),
            Some(Value::Array(features)) if features.is_empty() => {
                issues.push(QualityIssue::new("features", "no features listed"))
            }
            Some(Value::Array(_)) => {}
            Some(other) => issues.push(QualityIssue::new(
                "features",
                format!("features must be a list, got {}", json_type(other)),
            )),
        }

        for issue in &issues {
            log::debug!(
                "Quality issue on {}: {} {}",
                service.display_name(),
                issue.field,
                issue.message
            );
        }

        Assessment::from_issues(service.id_str(), issues)
    }

    fn check_text(value: Option<&Value>, field: &str) -> Option<QualityIssue> {
        match value {
            None => Some(QualityIssue::new(field, format!("{} is missing", field))),
            Some(Value::String(text)) if text.trim().is_empty() => {
                Some(QualityIssue::new(field, format!("{} is empty", field)))
            }
            Some(Value::String(_)) => None,
            Some(other) => Some(QualityIssue::new(
                field,
                format!("{} must be text, got {}", field, json_type(other)),
            )),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

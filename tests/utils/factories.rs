/// Test data factories for provider payloads
use serde_json::{json, Value};

/// JSON body listing one record per `(id, name)` pair
pub fn services_body(provider: &str, entries: &[(&str, &str)]) -> String {
    let records: Vec<Value> = entries
        .iter()
        .map(|(id, name)| service_json(id, name, provider))
        .collect();
    Value::Array(records).to_string()
}

pub fn service_json(id: &str, name: &str, provider: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "provider": provider,
        "features": ["24/7 support", "dedicated manager"],
        "tier": "gold"
    })
}

//! Environment mapping

use super::{DocumentMapper, EXPORTED_AT_FORMAT};
use crate::accessor::{describe, ValueExt};
use crate::types::{EnvironmentDocument, EnvironmentValue};
use serde_json::Value;
use tracing::{debug, warn};

impl DocumentMapper {
    /// Map a source environment entity to a Postman environment
    pub fn map_environment(&self, entity: &Value) -> EnvironmentDocument {
        let name = entity.text_at("name");
        let values: Vec<EnvironmentValue> =
            variables(entity).filter_map(map_variable).collect();

        debug!(environment = name, values = values.len(), "mapped environment");

        EnvironmentDocument {
            id: self.fresh_id(),
            name: name.to_string(),
            values,
            variable_scope: self.config.variable_scope.clone(),
            exported_at: self.exported_at.format(EXPORTED_AT_FORMAT).to_string(),
            exported_using: self.config.exported_using.clone(),
        }
    }
}

/// Variable records in document order, whether stored as a map or a list
fn variables<'a>(entity: &'a Value) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
    match entity.at("variables") {
        Some(Value::Object(map)) => Box::new(map.values()),
        Some(Value::Array(items)) => Box::new(items.iter()),
        other => {
            warn!(
                path = "variables",
                value = %describe(other),
                "expected a map of variables, mapping none"
            );
            Box::new(std::iter::empty())
        }
    }
}

/// Unnamed variables cannot be referenced and are dropped
fn map_variable(variable: &Value) -> Option<EnvironmentValue> {
    let key = variable.at("name").and_then(Value::as_str).unwrap_or_default();
    if key.is_empty() {
        return None;
    }

    Some(EnvironmentValue {
        key: key.to_string(),
        value: variable.text_at("value").to_string(),
        enabled: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::MapperConfig;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn mapper() -> DocumentMapper {
        DocumentMapper::new(MapperConfig::default())
            .unwrap()
            .with_exported_at(Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_map_environment() {
        let entity = json!({
            "name": "Staging",
            "variables": {
                "a1": {"name": "HOST", "value": "staging.example.com"},
                "b2": {"name": "TOKEN", "value": "secret"}
            }
        });

        let env = mapper().map_environment(&entity);
        assert_eq!(env.name, "Staging");
        assert_eq!(env.variable_scope, "environment");
        assert_eq!(env.exported_at, "2021-01-02T03:04:05Z");
        assert_eq!(env.exported_using, "Postman/7.36.1");
        assert_eq!(env.id.len(), 36);

        let keys: Vec<&str> = env.values.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["HOST", "TOKEN"]);
        assert!(env.values.iter().all(|v| v.enabled));
    }

    #[test]
    fn test_unnamed_variables_are_dropped() {
        let entity = json!({
            "name": "Prod",
            "variables": {
                "x": {"name": "", "value": "x"},
                "y": {"name": "TOKEN", "value": "y"},
                "z": {"value": "no name"}
            }
        });

        let env = mapper().map_environment(&entity);
        assert_eq!(
            env.values,
            vec![EnvironmentValue {
                key: "TOKEN".to_string(),
                value: "y".to_string(),
                enabled: true,
            }]
        );
    }

    #[test]
    fn test_variables_as_list() {
        let entity = json!({
            "name": "Dev",
            "variables": [
                {"name": "", "value": "x"},
                {"name": "TOKEN", "value": "y"}
            ]
        });

        let env = mapper().map_environment(&entity);
        assert_eq!(env.values.len(), 1);
        assert_eq!(env.values[0].key, "TOKEN");
        assert_eq!(env.values[0].value, "y");
    }

    #[test]
    fn test_variables_keep_document_order() {
        let entity: Value = serde_json::from_str(
            r#"{"name": "Ordered", "variables": {
                "zz": {"name": "ZULU", "value": "1"},
                "aa": {"name": "ALPHA", "value": "2"},
                "mm": {"name": "MIKE", "value": "3"}
            }}"#,
        )
        .unwrap();

        let keys: Vec<String> = mapper()
            .map_environment(&entity)
            .values
            .into_iter()
            .map(|v| v.key)
            .collect();
        assert_eq!(keys, vec!["ZULU", "ALPHA", "MIKE"]);
    }

    #[test]
    fn test_malformed_variables_map_to_nothing() {
        for variables in [json!("oops"), json!(3), Value::Null] {
            let env = mapper().map_environment(&json!({"name": "Bad", "variables": variables}));
            assert!(env.values.is_empty());
        }

        let env = mapper().map_environment(&json!({"name": "Missing"}));
        assert!(env.values.is_empty());
        assert_eq!(env.name, "Missing");
    }

    #[test]
    fn test_non_text_value_becomes_empty() {
        let entity = json!({"name": "E", "variables": {"a": {"name": "PORT", "value": 8080}}});
        let env = mapper().map_environment(&entity);
        assert_eq!(env.values[0].key, "PORT");
        assert_eq!(env.values[0].value, "");
    }
}

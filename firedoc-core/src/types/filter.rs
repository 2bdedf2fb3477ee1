//! Equality filters for property queries.
//!
//! The facade's only query predicate shape: a named field must equal a
//! given value. A query takes a set of filters and applies them
//! conjunctively (every filter must match).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::document::Properties;

/// A predicate requiring a named field to equal a given value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualityFilter {
    /// The field to compare.
    pub field: String,
    /// The value the field must equal.
    pub value: Value,
}

impl EqualityFilter {
    /// Create an equality filter.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the given properties satisfy this filter.
    pub fn matches(&self, properties: &Properties) -> bool {
        properties.get(&self.field) == Some(&self.value)
    }
}

/// Build a conjunctive filter set from a field→value mapping.
///
/// Convenience for callers holding lookup criteria as plain properties,
/// the shape the facade's query-by-properties operation consumes.
pub fn filters_from_properties(properties: &Properties) -> Vec<EqualityFilter> {
    properties
        .iter()
        .map(|(field, value)| EqualityFilter::new(field.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(pairs: &[(&str, Value)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_filter_matches() {
        let properties = props(&[("x", json!(1)), ("title", json!("T"))]);

        assert!(EqualityFilter::new("x", json!(1)).matches(&properties));
        assert!(!EqualityFilter::new("x", json!(2)).matches(&properties));
        assert!(!EqualityFilter::new("missing", json!(1)).matches(&properties));
    }

    #[test]
    fn test_filters_from_properties() {
        let lookup = props(&[("x", json!(1)), ("y", json!(3))]);
        let filters = filters_from_properties(&lookup);
        assert_eq!(filters.len(), 2);

        let matching = props(&[("x", json!(1)), ("y", json!(3)), ("z", json!(9))]);
        let half = props(&[("x", json!(1)), ("y", json!(4))]);

        assert!(filters.iter().all(|f| f.matches(&matching)));
        assert!(!filters.iter().all(|f| f.matches(&half)));
    }
}

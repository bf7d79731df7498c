// Metric domain model
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Numeric,
    Boolean,
}

/// A questionnaire metric lacking a recorded value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricDescriptor {
    pub id: String,
    pub kind: MetricKind,
    #[serde(default)]
    pub unit: String,
}

impl MetricDescriptor {
    pub fn new(id: impl Into<String>, kind: MetricKind, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            unit: unit.into(),
        }
    }

    pub fn numeric(id: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::new(id, MetricKind::Numeric, unit)
    }

    pub fn boolean(id: impl Into<String>) -> Self {
        Self::new(id, MetricKind::Boolean, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_has_empty_unit() {
        let metric = MetricDescriptor::boolean("m1");
        assert_eq!(metric.kind, MetricKind::Boolean);
        assert!(metric.unit.is_empty());
    }

    #[test]
    fn test_deserialize_defaults_unit() {
        let metric: MetricDescriptor =
            serde_json::from_str(r#"{"id": "h-3", "kind": "numeric"}"#).unwrap();
        assert_eq!(metric, MetricDescriptor::numeric("h-3", ""));
    }
}

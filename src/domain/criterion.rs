// Criterion and trajectory domain models
use serde::Deserialize;

/// A scored criterion with its known current value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(alias = "value")]
    pub target_value: f64,
}

impl Criterion {
    pub fn new(name: impl Into<String>, target_value: f64) -> Self {
        Self {
            name: name.into(),
            target_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub index: usize,
    pub value: f64,
}

impl TrendPoint {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

/// A named group of criteria charted together.
#[derive(Debug, Clone, Deserialize)]
pub struct CriteriaCategory {
    pub title: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

impl CriteriaCategory {
    pub fn new(title: impl Into<String>, criteria: Vec<Criterion>) -> Self {
        Self {
            title: title.into(),
            criteria,
        }
    }
}

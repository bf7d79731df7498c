// Report DTOs handed to the dashboard UI
use crate::domain::period::TrendPeriod;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricEstimateDto {
    pub metric_id: String,
    pub unit: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendRowDto {
    pub name: String,
    pub values: Vec<CriterionValueDto>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriterionValueDto {
    pub criterion: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendMatrixDto {
    pub title: String,
    pub period: TrendPeriod,
    pub rows: Vec<TrendRowDto>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticReport {
    pub metrics: Vec<MetricEstimateDto>,
    pub matrices: Vec<TrendMatrixDto>,
}

impl SyntheticReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Mapper from domain results to report DTOs
use crate::application::value_estimator::Estimate;
use crate::domain::metric::MetricDescriptor;
use crate::domain::period::TrendPeriod;
use crate::domain::trend_matrix::{TrendMatrix, TrendRow};
use crate::infrastructure::number_format::NumberFormat;
use crate::presentation::report::{
    CriterionValueDto, MetricEstimateDto, TrendMatrixDto, TrendRowDto,
};

pub fn estimate_to_dto(
    metric: &MetricDescriptor,
    estimate: Estimate,
    format: &NumberFormat,
) -> MetricEstimateDto {
    MetricEstimateDto {
        metric_id: metric.id.clone(),
        unit: metric.unit.clone(),
        display: estimate.render(format),
    }
}

pub fn matrix_to_dto(matrix: TrendMatrix, period: TrendPeriod) -> TrendMatrixDto {
    TrendMatrixDto {
        title: matrix.title,
        period,
        rows: matrix.rows.into_iter().map(row_to_dto).collect(),
    }
}

fn row_to_dto(row: TrendRow) -> TrendRowDto {
    let values = row
        .values
        .into_iter()
        .map(|(criterion, value)| CriterionValueDto { criterion, value })
        .collect();

    TrendRowDto {
        name: row.label,
        values,
    }
}

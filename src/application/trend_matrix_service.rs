// Trend matrix service - use case for charting a category of criteria over a period
use crate::application::trend_synthesizer::synthesize;
use crate::domain::criterion::CriteriaCategory;
use crate::domain::error::SynthResult;
use crate::domain::locale::Locale;
use crate::domain::period::TrendPeriod;
use crate::domain::trend_matrix::{TrendMatrix, TrendRow};
use chrono::Month;

#[derive(Debug, Clone, Copy)]
pub struct TrendMatrixService {
    period: TrendPeriod,
    end_month: Month,
    locale: Locale,
}

impl TrendMatrixService {
    pub fn new(period: TrendPeriod, end_month: Month, locale: Locale) -> Self {
        Self {
            period,
            end_month,
            locale,
        }
    }

    pub fn period(&self) -> TrendPeriod {
        self.period
    }

    pub fn build(&self, category: &CriteriaCategory) -> SynthResult<TrendMatrix> {
        let labels = self.period.labels(self.end_month, self.locale);
        let mut rows: Vec<TrendRow> = labels.into_iter().map(TrendRow::new).collect();

        for criterion in &category.criteria {
            let points = synthesize(criterion, self.period.length())?;
            for (row, point) in rows.iter_mut().zip(points) {
                row.values.push((criterion.name.clone(), point.value));
            }
        }

        tracing::debug!(
            category = %category.title,
            criteria = category.criteria.len(),
            rows = rows.len(),
            "Built trend matrix"
        );

        Ok(TrendMatrix::new(category.title.clone(), rows))
    }
}

impl Default for TrendMatrixService {
    fn default() -> Self {
        Self::new(TrendPeriod::default(), Month::December, Locale::default())
    }
}

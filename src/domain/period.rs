// Reporting period for synthesized trajectories
use crate::domain::locale::Locale;
use chrono::Month;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TrendPeriod {
    #[default]
    #[serde(rename = "6m")]
    HalfYear,
    #[serde(rename = "1y")]
    Year,
}

impl TrendPeriod {
    pub fn length(self) -> usize {
        match self {
            TrendPeriod::HalfYear => 6,
            TrendPeriod::Year => 12,
        }
    }

    /// Month labels for the trailing window ending at `end_month`, oldest first.
    pub fn labels(self, end_month: Month, locale: Locale) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.length());
        let mut month = end_month;
        for _ in 0..self.length() {
            labels.push(locale.month_label(month).to_string());
            month = month.pred();
        }
        labels.reverse();
        labels
    }
}

// Value estimator - deterministic placeholder for metrics without a recorded value
use crate::domain::metric::{MetricDescriptor, MetricKind};
use crate::domain::seed::{derive_seed, pseudo_random_unit};
use crate::domain::locale::Locale;
use crate::infrastructure::number_format::NumberFormat;
use std::fmt;

/// A unit family and the integer range its estimates fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitBucket {
    pub name: &'static str,
    keywords: &'static [&'static str],
    scale: u64,
    offset: u64,
}

impl UnitBucket {
    const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        scale: u64,
        offset: u64,
    ) -> Self {
        Self {
            name,
            keywords,
            scale,
            offset,
        }
    }

    fn matches(&self, unit: &str) -> bool {
        self.keywords.iter().any(|k| unit.contains(k))
    }

    fn amount(&self, u: f64) -> u64 {
        (u * self.scale as f64).floor() as u64 + self.offset
    }

    pub fn min(&self) -> u64 {
        self.offset
    }

    pub fn max(&self) -> u64 {
        self.offset + self.scale - 1
    }
}

// Checked top to bottom. "thousand currency units" must precede "currency units".
const UNIT_BUCKETS: &[UnitBucket] = &[
    UnitBucket::new("percent", &["percent", "%", "процент"], 30, 70),
    UnitBucket::new(
        "thousand-currency",
        &["thousand currency units", "тысяч рублей", "тыс. руб"],
        10_000,
        500,
    ),
    UnitBucket::new("currency", &["currency units", "рублей"], 50_000, 30_000),
    UnitBucket::new(
        "headcount",
        &["people", "workers", "units-of-count", "человек", "работников", "единиц"],
        100,
        5,
    ),
    UnitBucket::new("tons", &["tons", "тонн"], 500, 50),
    UnitBucket::new("hours", &["hours", "часов"], 40, 10),
    UnitBucket::new(
        "energy-volume",
        &["energy-volume", "gigajoule", "cubic", "гдж", "куб"],
        5_000,
        1_000,
    ),
];

const FALLBACK_BUCKET: UnitBucket = UnitBucket::new("default", &[], 100, 0);

/// First bucket whose keywords occur in `unit`, ignoring case.
pub fn bucket_for(unit: &str) -> UnitBucket {
    let unit = unit.to_lowercase();
    UNIT_BUCKETS
        .iter()
        .find(|bucket| bucket.matches(&unit))
        .copied()
        .unwrap_or(FALLBACK_BUCKET)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    Flag(bool),
    Amount(u64),
}

impl Estimate {
    pub fn render(&self, format: &NumberFormat) -> String {
        match self {
            Estimate::Flag(flag) => format.locale().flag_label(*flag).to_string(),
            Estimate::Amount(n) => format.group(*n),
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Flag(flag) => f.write_str(Locale::EnUs.flag_label(*flag)),
            Estimate::Amount(n) => write!(f, "{}", n),
        }
    }
}

pub fn estimate(metric: &MetricDescriptor) -> Estimate {
    let seed = derive_seed(&metric.id);
    let u = pseudo_random_unit(seed);

    let estimate = match metric.kind {
        MetricKind::Boolean => Estimate::Flag(u > 0.5),
        MetricKind::Numeric => Estimate::Amount(bucket_for(&metric.unit).amount(u)),
    };

    tracing::trace!(metric = %metric.id, seed, %estimate, "Estimated metric value");
    estimate
}

/// Estimate rendered the way the questionnaire displays it.
pub fn estimate_text(metric: &MetricDescriptor, format: &NumberFormat) -> String {
    estimate(metric).render(format)
}

//! Deterministic synthetic data for the sustainability dashboard: placeholder
//! estimates for unanswered metrics and plausible histories for scored criteria.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::trend_synthesizer::synthesize;
pub use application::value_estimator::{estimate, Estimate};
pub use domain::criterion::{Criterion, TrendPoint};
pub use domain::error::{SynthError, SynthResult};
pub use domain::metric::{MetricDescriptor, MetricKind};
pub use domain::seed::{derive_seed, pseudo_random_unit};

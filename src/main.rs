// Main entry point - load the catalog and print a synthetic report
use esg_synth::application::trend_matrix_service::TrendMatrixService;
use esg_synth::application::value_estimator::estimate;
use esg_synth::infrastructure::config::{load_catalog, DEFAULT_CATALOG_PATH};
use esg_synth::infrastructure::number_format::NumberFormat;
use esg_synth::presentation::report::SyntheticReport;
use esg_synth::presentation::report_mapper::{estimate_to_dto, matrix_to_dto};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
    let catalog = load_catalog(&path)?;

    let format = NumberFormat::for_locale(catalog.settings.locale);
    let service = TrendMatrixService::new(
        catalog.settings.period,
        catalog.settings.end_month()?,
        catalog.settings.locale,
    );

    let mut report = SyntheticReport::default();

    for metric in &catalog.metrics {
        report.metrics.push(estimate_to_dto(metric, estimate(metric), &format));
    }

    for category in &catalog.categories {
        let matrix = service.build(category)?;
        report.matrices.push(matrix_to_dto(matrix, service.period()));
    }

    tracing::info!(
        metrics = report.metrics.len(),
        matrices = report.matrices.len(),
        "Synthetic report ready"
    );

    println!("{}", report.to_json()?);
    Ok(())
}

// Application layer - synthesis use cases
pub mod trend_matrix_service;
pub mod trend_synthesizer;
pub mod value_estimator;

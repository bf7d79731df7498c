// Domain layer - plain data and the seed primitive
pub mod criterion;
pub mod error;
pub mod locale;
pub mod metric;
pub mod period;
pub mod seed;
pub mod trend_matrix;

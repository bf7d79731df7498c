// Presentation layer - serializable report shapes
pub mod report;
pub mod report_mapper;

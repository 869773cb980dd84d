pub mod summary;
pub mod tab;

pub use summary::{MetricCardKind, MetricsSummary};
pub use tab::MetricsTab;

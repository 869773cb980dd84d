pub mod stats_section;

pub use stats_section::StatsSection;

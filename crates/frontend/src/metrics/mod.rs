pub mod metrics_cards;
pub mod tab_switcher;

pub use metrics_cards::MetricsCards;
pub use tab_switcher::MetricsTabSwitcher;

use serde::{Deserialize, Serialize};

use super::tab::MetricsTab;

/// Счётчики личных показателей по одной вкладке
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSummary {
    /// Всего аудитов (ПАБ) или проверок (ПК)
    pub total_checks: u32,
    /// Всего выявлено (ПАБ) или нарушений (ПК)
    pub total_findings: u32,
    pub resolved: u32,
    pub in_progress: u32,
    pub overdue: u32,
}

/// Карточка показателя на странице метрик
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCardKind {
    Total,
    Findings,
    Resolved,
    InProgress,
    Overdue,
}

impl MetricCardKind {
    /// Все карточки в порядке отображения
    pub fn all() -> [MetricCardKind; 5] {
        [
            MetricCardKind::Total,
            MetricCardKind::Findings,
            MetricCardKind::Resolved,
            MetricCardKind::InProgress,
            MetricCardKind::Overdue,
        ]
    }

    pub fn label(&self, tab: MetricsTab) -> &'static str {
        match (self, tab) {
            (MetricCardKind::Total, MetricsTab::Pab) => "Всего аудитов",
            (MetricCardKind::Total, MetricsTab::Pk) => "Всего проверок",
            (MetricCardKind::Findings, MetricsTab::Pab) => "Всего выявлено",
            (MetricCardKind::Findings, MetricsTab::Pk) => "Всего нарушений",
            (MetricCardKind::Resolved, _) => "Устранено",
            (MetricCardKind::InProgress, _) => "В работе",
            (MetricCardKind::Overdue, _) => "Просрочено",
        }
    }

    pub fn icon(&self, tab: MetricsTab) -> &'static str {
        match self {
            MetricCardKind::Total => tab.icon(),
            MetricCardKind::Findings => "AlertTriangle",
            MetricCardKind::Resolved => "CheckCircle",
            MetricCardKind::InProgress => "Clock",
            MetricCardKind::Overdue => "XCircle",
        }
    }

    /// Код фильтра списка наблюдений; `None` — карточка не кликабельна
    pub fn filter_code(&self) -> Option<&'static str> {
        match self {
            MetricCardKind::Total => None,
            MetricCardKind::Findings => Some("all"),
            MetricCardKind::Resolved => Some("resolved"),
            MetricCardKind::InProgress => Some("in_progress"),
            MetricCardKind::Overdue => Some("overdue"),
        }
    }

    pub fn value(&self, summary: &MetricsSummary) -> u32 {
        match self {
            MetricCardKind::Total => summary.total_checks,
            MetricCardKind::Findings => summary.total_findings,
            MetricCardKind::Resolved => summary.resolved,
            MetricCardKind::InProgress => summary.in_progress,
            MetricCardKind::Overdue => summary.overdue,
        }
    }
}

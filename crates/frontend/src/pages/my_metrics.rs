use crate::metrics::{MetricsCards, MetricsTabSwitcher};
use contracts::metrics::{MetricsSummary, MetricsTab};
use leptos::prelude::*;

// Счётчики для демонстрационной страницы: портал без бэкенда
const DEMO_PAB: MetricsSummary = MetricsSummary {
    total_checks: 14,
    total_findings: 37,
    resolved: 29,
    in_progress: 6,
    overdue: 2,
};

const DEMO_PK: MetricsSummary = MetricsSummary {
    total_checks: 9,
    total_findings: 21,
    resolved: 17,
    in_progress: 3,
    overdue: 1,
};

fn demo_summary(tab: MetricsTab) -> MetricsSummary {
    match tab {
        MetricsTab::Pab => DEMO_PAB,
        MetricsTab::Pk => DEMO_PK,
    }
}

fn filter_title(code: &str) -> &'static str {
    match code {
        "resolved" => "Устранённые",
        "in_progress" => "В работе",
        "overdue" => "Просроченные",
        _ => "Все наблюдения",
    }
}

#[component]
pub fn MyMetricsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(MetricsTab::default());
    let (selected_filter, set_selected_filter) = signal(Option::<String>::None);

    let metrics = Signal::derive(move || demo_summary(active_tab.get()));

    let on_tab_change = Callback::new(move |tab: MetricsTab| {
        set_active_tab.set(tab);
        set_selected_filter.set(None);
    });

    let on_metric_click = Callback::new(move |code: String| {
        log::debug!("metric card clicked: {}", code);
        set_selected_filter.set(Some(code));
    });

    view! {
        <main class="my-metrics-page">
            <h1 class="my-metrics-page__title">"Мои показатели"</h1>
            <MetricsTabSwitcher active_tab=active_tab on_tab_change=on_tab_change />
            <MetricsCards tab=active_tab metrics=metrics on_metric_click=on_metric_click />
            {move || {
                selected_filter
                    .get()
                    .map(|code| {
                        view! {
                            <p class="my-metrics-page__filter">
                                "Выбран фильтр: " {filter_title(&code)}
                            </p>
                        }
                    })
            }}
        </main>
    }
}

use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use contracts::metrics::{MetricCardKind, MetricsSummary, MetricsTab};
use leptos::prelude::*;

/// Задержка появления между соседними карточками, мс
const STAGGER_MS: u32 = 80;

fn card_class(kind: MetricCardKind) -> &'static str {
    match kind {
        MetricCardKind::Total => "metric-card metric-card--total",
        MetricCardKind::Findings => "metric-card metric-card--findings metric-card--clickable",
        MetricCardKind::Resolved => "metric-card metric-card--resolved metric-card--clickable",
        MetricCardKind::InProgress => "metric-card metric-card--in-progress metric-card--clickable",
        MetricCardKind::Overdue => "metric-card metric-card--overdue metric-card--clickable",
    }
}

/// Карточки показателей активной вкладки.
/// Клик по карточке (кроме «Всего») передаёт код фильтра наблюдений.
#[component]
pub fn MetricsCards(
    #[prop(into)] tab: Signal<MetricsTab>,
    #[prop(into)] metrics: Signal<MetricsSummary>,
    #[prop(optional)] on_metric_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="metrics-cards">
            {MetricCardKind::all()
                .into_iter()
                .enumerate()
                .map(|(index, kind)| {
                    let delay = index as u32 * STAGGER_MS;
                    let on_click = move |_| {
                        if let (Some(code), Some(callback)) = (kind.filter_code(), on_metric_click) {
                            callback.run(code.to_string());
                        }
                    };
                    view! {
                        <div class=card_class(kind) on:click=on_click>
                            <CardAnimated delay_ms=delay>
                                <div class="metric-card__icon">
                                    {move || icon_sized(kind.icon(tab.get()), 32)}
                                </div>
                                <div class="metric-card__body">
                                    <p class="metric-card__label">{move || kind.label(tab.get())}</p>
                                    <p class="metric-card__value">
                                        {move || kind.value(&metrics.get())}
                                    </p>
                                </div>
                            </CardAnimated>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

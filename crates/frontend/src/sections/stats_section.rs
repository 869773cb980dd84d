use crate::shared::icons::icon_sized;
use contracts::landing::{StatEntry, UNION_STATS};
use leptos::prelude::*;

/// Сетка показателей; иконка рисуется переданной функцией
fn stats_grid<V, F>(entries: &[StatEntry], render_icon: F) -> impl IntoView
where
    V: IntoView + 'static,
    F: Fn(&'static str) -> V,
{
    view! {
        <section class="stats-section">
            <div class="stats-section__grid">
                {entries
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stats-section__item">
                                <div class="stats-section__icon">{render_icon(stat.icon)}</div>
                                <div class="stats-section__value">{stat.value}</div>
                                <div class="stats-section__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Блок статистики профсоюза на главной: четыре показателя в фиксированном порядке
#[component]
pub fn StatsSection() -> impl IntoView {
    stats_grid(&UNION_STATS, |name| icon_sized(name, 32))
}
